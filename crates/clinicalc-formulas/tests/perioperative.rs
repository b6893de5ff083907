use clinicalc_core::models::risk::RiskTier;
use clinicalc_formulas::formulas::generic::generic;
use clinicalc_formulas::formulas::perioperative::{
    asa, caprini, rcri, AsaClass, AsaInput, CapriniAge, CapriniInput, RcriInput,
};

#[test]
fn asa_class_maps_to_ordinal_score() {
    let result = asa(&AsaInput {
        class: AsaClass::III,
        emergency: false,
    });
    assert_eq!(result.score, 3.0);
    assert_eq!(result.max_score, 6.0);
    assert_eq!(result.risk_tier, RiskTier::Moderate);
    assert_eq!(result.risk_percentage, 4.3);
}

#[test]
fn asa_emergency_doubles_mortality() {
    let elective = asa(&AsaInput {
        class: AsaClass::IV,
        emergency: false,
    });
    let emergency = asa(&AsaInput {
        class: AsaClass::IV,
        emergency: true,
    });
    assert_eq!(emergency.risk_percentage, elective.risk_percentage * 2.0);
    assert_eq!(emergency.score, elective.score);
    assert!(emergency.interpretation.starts_with("ASA IVE"));
}

#[test]
fn asa_emergency_mortality_is_capped() {
    let result = asa(&AsaInput {
        class: AsaClass::V,
        emergency: true,
    });
    assert_eq!(result.risk_percentage, 100.0);
    assert_eq!(result.risk_tier, RiskTier::Critical);
}

#[test]
fn asa_ordinal_saturates() {
    assert_eq!(AsaClass::from_ordinal(0.0), AsaClass::I);
    assert_eq!(AsaClass::from_ordinal(2.0), AsaClass::II);
    assert_eq!(AsaClass::from_ordinal(9.0), AsaClass::VI);
}

#[test]
fn rcri_lookup_by_score() {
    assert_eq!(rcri(&RcriInput::default()).risk_percentage, 0.4);

    let two = rcri(&RcriInput {
        high_risk_surgery: true,
        heart_failure: true,
        ..Default::default()
    });
    assert_eq!(two.risk_percentage, 6.6);
    assert_eq!(two.risk_tier, RiskTier::Moderate);

    let four = rcri(&RcriInput {
        high_risk_surgery: true,
        ischemic_heart_disease: true,
        heart_failure: true,
        renal_insufficiency: true,
        ..Default::default()
    });
    assert_eq!(four.score, 4.0);
    assert_eq!(four.risk_percentage, 11.0);
    assert_eq!(four.risk_tier, RiskTier::High);
}

fn caprini_input(age: CapriniAge) -> CapriniInput {
    CapriniInput {
        age,
        minor_surgery: false,
        major_surgery: false,
        bmi: false,
        varicose_veins: false,
        current_cancer: false,
        previous_vte: false,
        thrombophilia: false,
        immobility: false,
    }
}

#[test]
fn caprini_young_patient_without_factors() {
    let result = caprini(&caprini_input(CapriniAge::Under41));
    assert_eq!(result.score, 0.0);
    assert_eq!(result.risk_tier, RiskTier::Low);
    assert_eq!(result.risk_percentage, 2.0);
}

#[test]
fn caprini_elderly_major_surgery() {
    let result = caprini(&CapriniInput {
        major_surgery: true,
        immobility: true,
        ..caprini_input(CapriniAge::Over74)
    });
    assert_eq!(result.score, 7.0);
    assert_eq!(result.risk_tier, RiskTier::Critical);
    assert_eq!(result.risk_percentage, 40.0);
}

#[test]
fn caprini_maximum() {
    let result = caprini(&CapriniInput {
        age: CapriniAge::Over74,
        minor_surgery: true,
        major_surgery: true,
        bmi: true,
        varicose_veins: true,
        current_cancer: true,
        previous_vte: true,
        thrombophilia: true,
        immobility: true,
    });
    assert_eq!(result.score, result.max_score);
}

#[test]
fn generic_sums_contributions() {
    let result = generic(&[1.0, 0.0, 1.0]);
    assert_eq!(result.score, 2.0);
    assert_eq!(result.risk_tier, RiskTier::Moderate);
    assert_eq!(result.risk_percentage, 25.0);
}

#[test]
fn generic_empty_is_low() {
    let result = generic(&[]);
    assert_eq!(result.score, 0.0);
    assert_eq!(result.risk_tier, RiskTier::Low);
    assert_eq!(result.risk_percentage, 5.0);
}

#[test]
fn generic_clamps_score_and_keeps_raw_sum() {
    let result = generic(&[120.0, 1.0]);
    assert_eq!(result.score, 10.0);
    assert_eq!(result.measured, Some(121.0));
    assert_eq!(result.risk_tier, RiskTier::High);
}
