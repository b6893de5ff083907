use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::error::CoreError;

/// Field values exactly as a form collected them: strings, numbers,
/// booleans, nulls, or absent. Nothing about their types is trusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct RawInputBag(BTreeMap<String, Value>);

impl RawInputBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly for tests and callers assembling a bag
    /// by hand.
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.0.insert(field.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, field: &str, value: impl Into<Value>) {
        self.0.insert(field.to_string(), value.into());
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parse a JSON object into a bag. Anything but an object is rejected.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<BTreeMap<String, Value>> for RawInputBag {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for RawInputBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// A selected option of a choice field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Choice {
    pub value: String,
    pub weight: Option<f64>,
}

/// A coerced, typed field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldValue {
    Boolean(bool),
    Number(f64),
    Choice(Choice),
}

/// Typed field values keyed by field id, built fresh for one calculation.
///
/// There are no mutating methods: once normalization hands a record to a
/// formula it stays as constructed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NormalizedInput {
    values: BTreeMap<String, FieldValue>,
}

impl NormalizedInput {
    pub fn new(values: BTreeMap<String, FieldValue>) -> Self {
        Self { values }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.values.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn require(&self, field: &str) -> Result<&FieldValue, CoreError> {
        self.values
            .get(field)
            .ok_or_else(|| CoreError::MissingField(field.to_string()))
    }

    pub fn flag(&self, field: &str) -> Result<bool, CoreError> {
        match self.require(field)? {
            FieldValue::Boolean(b) => Ok(*b),
            _ => Err(CoreError::FieldType {
                field: field.to_string(),
                expected: "boolean",
            }),
        }
    }

    pub fn number(&self, field: &str) -> Result<f64, CoreError> {
        match self.require(field)? {
            FieldValue::Number(n) => Ok(*n),
            _ => Err(CoreError::FieldType {
                field: field.to_string(),
                expected: "number",
            }),
        }
    }

    pub fn choice(&self, field: &str) -> Result<&Choice, CoreError> {
        match self.require(field)? {
            FieldValue::Choice(c) => Ok(c),
            _ => Err(CoreError::FieldType {
                field: field.to_string(),
                expected: "choice",
            }),
        }
    }

    /// Points carried by the selected option of a weighted choice field.
    pub fn weight(&self, field: &str) -> Result<f64, CoreError> {
        self.choice(field)?
            .weight
            .ok_or_else(|| CoreError::FieldType {
                field: field.to_string(),
                expected: "weighted choice",
            })
    }
}

impl FromIterator<(String, FieldValue)> for NormalizedInput {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
