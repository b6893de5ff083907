use std::collections::BTreeMap;

use clinicalc_core::error::CoreError;
use clinicalc_core::models::definition::{ChoiceOption, FieldKind, InputFieldSpec};
use clinicalc_core::models::feedback::FeedbackSubmission;
use clinicalc_core::models::input::{Choice, FieldValue, NormalizedInput, RawInputBag};
use clinicalc_core::models::risk::RiskTier;

#[test]
fn risk_tiers_are_ordered_by_severity() {
    assert!(RiskTier::Low < RiskTier::Moderate);
    assert!(RiskTier::Moderate < RiskTier::High);
    assert!(RiskTier::High < RiskTier::Critical);
    assert_eq!(RiskTier::Critical.to_string(), "CRITICAL");
    assert_eq!(RiskTier::Moderate.as_str(), "moderate");
}

#[test]
fn risk_tier_serializes_snake_case() {
    let json = serde_json::to_string(&RiskTier::Moderate).unwrap();
    assert_eq!(json, "\"moderate\"");
}

#[test]
fn raw_bag_parses_mixed_json() {
    let bag = RawInputBag::from_json(
        r#"{"altered_mentation": true, "respiratory_rate": "24", "systolic_bp": 95, "note": null}"#,
    )
    .unwrap();
    assert_eq!(bag.len(), 4);
    assert_eq!(bag.get("systolic_bp"), Some(&serde_json::json!(95)));
    assert_eq!(bag.get("respiratory_rate"), Some(&serde_json::json!("24")));
}

#[test]
fn raw_bag_rejects_non_object_json() {
    assert!(matches!(
        RawInputBag::from_json("[1, 2, 3]"),
        Err(CoreError::Serialization(_))
    ));
}

#[test]
fn normalized_accessors_check_kinds() {
    let mut values = BTreeMap::new();
    values.insert("flag".to_string(), FieldValue::Boolean(true));
    values.insert("rate".to_string(), FieldValue::Number(22.0));
    values.insert(
        "ecg".to_string(),
        FieldValue::Choice(Choice {
            value: "Normal".to_string(),
            weight: Some(0.0),
        }),
    );
    let input = NormalizedInput::new(values);

    assert!(input.flag("flag").unwrap());
    assert_eq!(input.number("rate").unwrap(), 22.0);
    assert_eq!(input.weight("ecg").unwrap(), 0.0);
    assert_eq!(input.choice("ecg").unwrap().value, "Normal");

    assert!(matches!(input.number("flag"), Err(CoreError::FieldType { .. })));
    assert!(matches!(input.flag("missing"), Err(CoreError::MissingField(f)) if f == "missing"));
}

#[test]
fn choice_default_carries_option_weight() {
    let spec = InputFieldSpec::choice(
        "eye",
        "Eye opening",
        vec![
            ChoiceOption::weighted("None", 1.0),
            ChoiceOption::weighted("Spontaneous", 4.0),
        ],
        "Spontaneous",
    );
    assert_eq!(
        spec.kind.default_value(),
        FieldValue::Choice(Choice {
            value: "Spontaneous".to_string(),
            weight: Some(4.0),
        })
    );
}

#[test]
fn number_spec_records_default_and_unit() {
    let spec = InputFieldSpec::number("weight", "Weight", 20.0, 200.0, 70.0).with_unit("kg");
    match spec.kind {
        FieldKind::Number { default, unit, .. } => {
            assert_eq!(default, 70.0);
            assert_eq!(unit.as_deref(), Some("kg"));
        }
        other => panic!("expected number kind, got {other:?}"),
    }
}

#[test]
fn feedback_ratings_must_be_one_to_five() {
    let submission = FeedbackSubmission {
        calculator_id: "qsofa".to_string(),
        rating: 6,
        helpful: Some(true),
        ease_of_use: 4,
        comment: String::new(),
        user_email: None,
    };
    assert!(matches!(
        submission.clone().stamp(jiff::Timestamp::UNIX_EPOCH),
        Err(CoreError::InvalidRating { field: "rating", value: 6 })
    ));

    let ok = FeedbackSubmission {
        rating: 5,
        ..submission
    };
    let record = ok.stamp(jiff::Timestamp::UNIX_EPOCH).unwrap();
    assert_eq!(record.rating, 5);
    assert_eq!(record.timestamp, jiff::Timestamp::UNIX_EPOCH);
}
