use clinicalc_core::models::input::RawInputBag;
use clinicalc_core::models::risk::RiskTier;
use clinicalc_engine::execute;
use serde_json::json;

fn bag(value: serde_json::Value) -> RawInputBag {
    serde_json::from_value(value).unwrap()
}

#[test]
fn qsofa_negative_screen() {
    let raw = bag(json!({"altered_mentation": false, "respiratory_rate": 18, "systolic_bp": 120}));
    let result = execute("qsofa", &raw).unwrap();
    assert_eq!(result.score, 0.0);
    assert_eq!(result.max_score, 3.0);
    assert_eq!(result.risk_tier, RiskTier::Low);
    assert_eq!(result.risk_percentage, 10.0);
}

#[test]
fn qsofa_positive_screen() {
    let raw = bag(json!({"altered_mentation": true, "respiratory_rate": 26, "systolic_bp": 88}));
    let result = execute("qsofa", &raw).unwrap();
    assert_eq!(result.score, 3.0);
    assert_eq!(result.risk_tier, RiskTier::High);
    assert_eq!(result.risk_percentage, 80.0);
}

#[test]
fn qsofa_respiratory_rate_edge() {
    let at = bag(json!({"respiratory_rate": 22}));
    let below = bag(json!({"respiratory_rate": "21"}));
    assert_eq!(execute("qsofa", &at).unwrap().score, 1.0);
    assert_eq!(execute("qsofa", &below).unwrap().score, 0.0);
}

#[test]
fn qsofa_form_strings_are_coerced() {
    let raw = bag(json!({"altered_mentation": "yes", "respiratory_rate": "24 /min", "systolic_bp": "95"}));
    assert_eq!(execute("qsofa", &raw).unwrap().score, 3.0);
}

#[test]
fn creatinine_clearance_young_male() {
    let raw = bag(json!({"age": 30, "weight": 70, "creatinine": 1.0, "female": false}));
    let result = execute("creatinine_clearance", &raw).unwrap();
    assert!((result.score - 107.0).abs() <= 5.0, "crcl {}", result.score);
    assert!(result.interpretation.contains("Stage 1 (Normal)"));
}

#[test]
fn meld_floor() {
    let raw = bag(json!({"inr": 1.0, "bilirubin": 1.0, "creatinine": 1.0}));
    let result = execute("meld", &raw).unwrap();
    assert_eq!(result.score, 6.0);
    assert_eq!(result.risk_tier, RiskTier::Low);
}

#[test]
fn cha2ds2vasc_no_criteria() {
    let raw = bag(json!({
        "chf": false, "hypertension": false, "age_75": false, "diabetes": false,
        "stroke_tia": false, "vascular_disease": false, "age_65_74": false, "female": false
    }));
    let result = execute("cha2ds2vasc", &raw).unwrap();
    assert_eq!(result.score, 0.0);
    assert_eq!(result.risk_percentage, 0.0);
    assert_eq!(result.risk_tier, RiskTier::Low);
}

#[test]
fn curb65_three_criteria() {
    let raw = bag(json!({
        "confusion": true, "urea": true, "respiratory_rate": true,
        "blood_pressure": false, "age_65": false
    }));
    let result = execute("curb65", &raw).unwrap();
    assert_eq!(result.score, 3.0);
    assert_eq!(result.risk_tier, RiskTier::High);
    assert_eq!(result.risk_percentage, 17.0);
}

#[test]
fn curb65_two_is_moderate() {
    let raw = bag(json!({"confusion": true, "age_65": true}));
    assert_eq!(execute("curb65", &raw).unwrap().risk_tier, RiskTier::Moderate);
}

#[test]
fn glasgow_coma_accepts_labels_and_points() {
    let by_label = bag(json!({
        "eye_opening": "To pain", "verbal_response": "Confused", "motor_response": "Localizes pain"
    }));
    let by_points = bag(json!({"eye_opening": 2, "verbal_response": 4, "motor_response": 5}));
    let a = execute("gcs", &by_label).unwrap();
    let b = execute("glasgow_coma", &by_points).unwrap();
    assert_eq!(a.score, 11.0);
    assert_eq!(a, b);
}

#[test]
fn child_pugh_choice_labels() {
    let raw = bag(json!({
        "bilirubin": 2.5, "albumin": 3.0, "inr": 1.5,
        "ascites": "Slight", "encephalopathy": "None"
    }));
    // 2 + 2 + 1 + 2 + 1
    assert_eq!(execute("child_pugh", &raw).unwrap().score, 8.0);
}

#[test]
fn asa_emergency_label() {
    let raw = bag(json!({"asa_class": "III - Severe systemic disease", "emergency": true}));
    let result = execute("asa_physical_status", &raw).unwrap();
    assert_eq!(result.score, 3.0);
    assert!(result.interpretation.contains("IIIE"));
}

#[test]
fn caprini_age_band_by_label() {
    let raw = bag(json!({"age": "61-74 years", "major_surgery": true}));
    assert_eq!(execute("caprini_vte", &raw).unwrap().score, 4.0);
}

#[test]
fn malformed_numbers_fall_back_to_defaults() {
    let malformed = bag(json!({"respiratory_rate": "fast", "systolic_bp": null}));
    let defaults = RawInputBag::new();
    assert_eq!(
        execute("qsofa", &malformed).unwrap(),
        execute("qsofa", &defaults).unwrap()
    );
}

#[test]
fn news2_consciousness_by_label() {
    let raw = bag(json!({"consciousness": "Voice", "supplemental_oxygen": "yes"}));
    let result = execute("news2", &raw).unwrap();
    assert_eq!(result.score, 5.0);
    assert_eq!(result.risk_tier, RiskTier::High);
}

#[test]
fn wells_pe_likely_presentation() {
    let raw = bag(json!({"clinical_dvt": true, "pe_likely": true, "heart_rate": "true"}));
    let result = execute("wells_pe", &raw).unwrap();
    assert_eq!(result.score, 7.5);
    assert_eq!(result.risk_tier, RiskTier::High);
}

#[test]
fn wells_dvt_reports_negative_total() {
    let raw = bag(json!({"alternative_diagnosis": true}));
    let result = execute("wells_dvt", &raw).unwrap();
    assert_eq!(result.score, 0.0);
    assert_eq!(result.measured, Some(-2.0));
}

#[test]
fn psi_alias_scores_elderly_patient() {
    let raw = bag(json!({"age": 80, "male": true, "neoplastic_disease": true}));
    let result = execute("psi", &raw).unwrap();
    assert_eq!(result, execute("psi_port", &raw).unwrap());
    assert_eq!(result.score, 110.0);
    assert_eq!(result.risk_tier, RiskTier::High);
}

#[test]
fn glasgow_blatchford_by_alias() {
    let raw = bag(json!({"blood_urea": 10, "systolic_bp": 85, "melena": true}));
    let result = execute("gbs", &raw).unwrap();
    assert_eq!(result.score, 8.0);
    assert_eq!(result.risk_tier, RiskTier::High);
}

#[test]
fn ascvd_race_label_selects_equations() {
    let profile = json!({
        "age": 55, "female": true, "total_cholesterol": 213, "hdl": 50, "sbp": 120
    });
    let mut african_american = profile.clone();
    african_american["race"] = json!("African American");

    let white = execute("ascvd", &bag(profile)).unwrap();
    let other = execute("ascvd", &bag(african_american)).unwrap();
    assert_eq!(white.score, 2.1);
    assert_eq!(other.score, 3.0);
}

#[test]
fn framingham_defaults_are_low_risk() {
    let result = execute("framingham", &RawInputBag::new()).unwrap();
    assert_eq!(result.max_score, 100.0);
    assert!(result.risk_percentage < 10.0, "{}", result.risk_percentage);
    assert_eq!(result.risk_tier, RiskTier::Low);
}
