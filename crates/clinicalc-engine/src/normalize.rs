//! Coercion of raw form values into the typed record a formula reads.
//!
//! Every field the definition declares ends up in the normalized record.
//! Values that are missing, unparseable or match no option are replaced by
//! the field's documented default; this is never an error. Numbers are not
//! clamped to the display bounds.

use std::collections::BTreeMap;

use clinicalc_core::models::definition::{ChoiceOption, FieldKind, InputFieldSpec};
use clinicalc_core::models::input::{Choice, FieldValue, NormalizedInput, RawInputBag};
use serde_json::Value;

/// Normalize `raw` against the declared fields. Raw entries that no field
/// declares are ignored.
pub fn normalize(fields: &[InputFieldSpec], raw: &RawInputBag) -> NormalizedInput {
    let values: BTreeMap<String, FieldValue> = fields
        .iter()
        .map(|spec| (spec.id.clone(), coerce_field(spec, raw.get(&spec.id))))
        .collect();
    NormalizedInput::new(values)
}

fn coerce_field(spec: &InputFieldSpec, value: Option<&Value>) -> FieldValue {
    let coerced = match &spec.kind {
        FieldKind::Boolean => coerce_flag(value).map(FieldValue::Boolean),
        FieldKind::Number { .. } => coerce_number(value).map(FieldValue::Number),
        FieldKind::Choice { options, .. } => coerce_choice(options, value).map(FieldValue::Choice),
    };

    coerced.unwrap_or_else(|| {
        let reason = match value {
            None | Some(Value::Null) => "missing",
            Some(_) if matches!(spec.kind, FieldKind::Choice { .. }) => "unmatched option",
            Some(_) => "unparseable",
        };
        let default = spec.kind.default_value();
        tracing::debug!(field = %spec.id, reason, ?default, "substituting default");
        default
    })
}

/// Numbers pass through; strings are read like a form would read them,
/// taking the longest leading decimal prefix (`"72 bpm"` is 72).
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => leading_float(s),
        _ => None,
    }
}

/// `true`/`false` pass through, numbers are true when non-zero and strings
/// are matched against the usual form spellings. Anything else is unusable.
pub fn coerce_flag(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => n.as_f64().map(|v| v != 0.0),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" | "y" => Some(true),
            "false" | "no" | "off" | "0" | "n" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// An option matches by its value (case-insensitive) or, for weighted
/// options, by a numeric raw value equal to its weight.
pub fn coerce_choice(options: &[ChoiceOption], value: Option<&Value>) -> Option<Choice> {
    let selected = match value? {
        Value::String(s) => {
            let wanted = s.trim();
            options
                .iter()
                .find(|o| o.value.eq_ignore_ascii_case(wanted))
                .or_else(|| leading_float(wanted).and_then(|w| by_weight(options, w)))
        }
        Value::Number(n) => n.as_f64().and_then(|w| by_weight(options, w)),
        _ => None,
    }?;
    Some(Choice {
        value: selected.value.clone(),
        weight: selected.weight,
    })
}

fn by_weight(options: &[ChoiceOption], weight: f64) -> Option<&ChoiceOption> {
    options.iter().find(|o| o.weight == Some(weight))
}

/// Parse the longest prefix of `s` that reads as a decimal number,
/// ignoring leading whitespace. Returns `None` when there is no digit to
/// read or the value is not finite.
pub fn leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let digits_in = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = digits_in(end);
    end += integer;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_in(end + 1);
        end += 1 + fraction;
    }
    if integer + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_in(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Contributions of an arbitrary bag to the fallback scorer: true flags
/// count 1, numbers and numeric strings count their value, everything else
/// is skipped.
pub fn untyped_contributions(raw: &RawInputBag) -> Vec<f64> {
    raw.iter()
        .filter_map(|(field, value)| {
            let contribution = match value {
                Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
                Value::Number(_) | Value::String(_) => coerce_number(Some(value)),
                _ => None,
            };
            if contribution.is_none() {
                tracing::debug!(field = %field, "skipping non-numeric value");
            }
            contribution
        })
        .collect()
}
