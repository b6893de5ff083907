use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::input::{Choice, FieldValue};

/// Static descriptor of a calculator: what it is called, which fields the
/// form must collect, and where its scoring rules were published.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CalculatorDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Specialty tags. Never empty.
    pub categories: Vec<String>,
    pub orientation: ScoreOrientation,
    pub input_fields: Vec<InputFieldSpec>,
    pub references: Vec<Reference>,
}

impl CalculatorDefinition {
    pub fn field(&self, id: &str) -> Option<&InputFieldSpec> {
        self.input_fields.iter().find(|f| f.id == id)
    }

    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c.eq_ignore_ascii_case(tag))
    }
}

/// Direction in which a score gets clinically worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ScoreOrientation {
    /// Most risk scores: more points, more risk.
    HigherIsWorse,
    /// Coma scales and filtration rates: fewer points, more risk.
    LowerIsWorse,
}

/// One form field a calculator expects.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InputFieldSpec {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub kind: FieldKind,
}

impl InputFieldSpec {
    /// A yes/no criterion. Missing or falsy values normalize to `false`.
    pub fn boolean(id: &str, label: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: None,
            kind: FieldKind::Boolean,
        }
    }

    /// A numeric measurement with inclusive display bounds and the value
    /// substituted when the form leaves it blank or unparseable.
    pub fn number(id: &str, label: &str, min: f64, max: f64, default: f64) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: None,
            kind: FieldKind::Number {
                min: Some(min),
                max: Some(max),
                default,
                unit: None,
            },
        }
    }

    /// A select field. `default` must name one of `options`.
    pub fn choice(id: &str, label: &str, options: Vec<ChoiceOption>, default: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            description: None,
            kind: FieldKind::Choice {
                options,
                default: default.to_string(),
            },
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        if let FieldKind::Number { unit: slot, .. } = &mut self.kind {
            *slot = Some(unit.to_string());
        }
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Boolean,
    Number {
        min: Option<f64>,
        max: Option<f64>,
        default: f64,
        unit: Option<String>,
    },
    Choice {
        options: Vec<ChoiceOption>,
        default: String,
    },
}

impl FieldKind {
    /// The value normalization substitutes when the raw input is unusable.
    pub fn default_value(&self) -> FieldValue {
        match self {
            Self::Boolean => FieldValue::Boolean(false),
            Self::Number { default, .. } => FieldValue::Number(*default),
            Self::Choice { options, default } => {
                let weight = options
                    .iter()
                    .find(|o| o.value == *default)
                    .and_then(|o| o.weight);
                FieldValue::Choice(Choice {
                    value: default.clone(),
                    weight,
                })
            }
        }
    }
}

/// An allowed value of a select field, optionally carrying the points it
/// contributes to the score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChoiceOption {
    pub value: String,
    pub weight: Option<f64>,
}

impl ChoiceOption {
    pub fn weighted(value: &str, weight: f64) -> Self {
        Self {
            value: value.to_string(),
            weight: Some(weight),
        }
    }

    pub fn plain(value: &str) -> Self {
        Self {
            value: value.to_string(),
            weight: None,
        }
    }
}

/// A literature citation backing a calculator.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reference {
    pub authors: String,
    pub year: u16,
    pub title: String,
    pub journal: String,
    pub volume: Option<String>,
    pub pages: Option<String>,
}

impl Reference {
    pub fn new(authors: &str, year: u16, title: &str, journal: &str, volume: &str, pages: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            authors: authors.to_string(),
            year,
            title: title.to_string(),
            journal: journal.to_string(),
            volume: non_empty(volume),
            pages: non_empty(pages),
        }
    }
}
