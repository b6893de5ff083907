use clinicalc_cli::commands::{
    calc, dose, export_feedback, feedback_stats, list, list_favorites, parse_assignments, show,
    submit_feedback, toggle_favorite,
};
use clinicalc_core::models::feedback::FeedbackSubmission;
use serde_json::{json, Value};

fn args(pairs: &[&str]) -> Vec<String> {
    pairs.iter().map(|s| s.to_string()).collect()
}

#[test]
fn assignments_keep_json_types() {
    let raw = parse_assignments(&args(&["confusion=true", "rate=22", "ascites=Slight", "x= 1.5"]))
        .unwrap();
    assert_eq!(raw.get("confusion"), Some(&json!(true)));
    assert_eq!(raw.get("rate"), Some(&json!(22)));
    assert_eq!(raw.get("ascites"), Some(&json!("Slight")));
    assert_eq!(raw.get("x"), Some(&json!(1.5)));
}

#[test]
fn assignments_need_an_equals_sign() {
    assert!(parse_assignments(&args(&["confusion"])).is_err());
    assert!(parse_assignments(&args(&["=3"])).is_err());
}

#[test]
fn list_filters_by_category() {
    let all = list(None);
    assert_eq!(all.lines().count(), 32);
    let renal = list(Some("renal"));
    assert_eq!(renal.lines().count(), 2);
    assert!(renal.contains("creatinine_clearance"));
}

#[test]
fn show_prints_definition_json() {
    let json: Value = serde_json::from_str(&show("gcs").unwrap()).unwrap();
    assert_eq!(json["id"], "glasgow_coma");
    assert!(show("unknown").is_err());
}

#[test]
fn calc_prints_result_json() {
    let raw = parse_assignments(&args(&["altered_mentation=true", "respiratory_rate=26", "systolic_bp=88"]))
        .unwrap();
    let json: Value = serde_json::from_str(&calc("qsofa", &raw).unwrap()).unwrap();
    assert_eq!(json["score"], 3.0);
    assert_eq!(json["risk_tier"], "high");
}

#[test]
fn calc_reports_failures_without_erroring() {
    let raw = parse_assignments(&args(&["creatinine=0"])).unwrap();
    let output = calc("crcl", &raw).unwrap();
    assert!(output.starts_with("Unable to compute"));
}

#[test]
fn dose_prints_result_json() {
    let raw = parse_assignments(&args(&["weight=70"])).unwrap();
    let json: Value = serde_json::from_str(&dose("gentamicin", &raw).unwrap()).unwrap();
    assert_eq!(json["calculated_dose"], 420.0);
    assert!(dose("aspirin", &raw).is_err());
}

#[test]
fn feedback_and_favorites_round_trip() {
    let dir = tempfile::tempdir().unwrap();

    submit_feedback(
        dir.path(),
        FeedbackSubmission {
            calculator_id: "heart".to_string(),
            rating: 4,
            helpful: Some(true),
            ease_of_use: 5,
            comment: "clear".to_string(),
            user_email: None,
        },
    )
    .unwrap();
    let stats = feedback_stats(dir.path(), "heart").unwrap();
    assert!(stats.contains("1 responses"));
    assert!(stats.contains("average rating 4.0"));
    assert!(stats.contains("100% helpful"));
    assert!(export_feedback(dir.path()).unwrap().contains("\"clear\""));

    assert!(toggle_favorite(dir.path(), "heart").unwrap().contains("added"));
    assert_eq!(list_favorites(dir.path()).unwrap(), "heart");
    assert!(toggle_favorite(dir.path(), "heart").unwrap().contains("removed"));
    assert!(toggle_favorite(dir.path(), "not_real").is_err());
}

#[test]
fn newer_calculators_are_listed_and_scored() {
    let vascular = list(Some("vascular"));
    assert_eq!(vascular.lines().count(), 2);
    assert!(vascular.contains("wells_pe"));

    let raw = parse_assignments(&args(&["blood_urea=10", "systolic_bp=85", "melena=true"])).unwrap();
    let json: Value = serde_json::from_str(&calc("glasgow_blatchford", &raw).unwrap()).unwrap();
    assert_eq!(json["score"], 8.0);

    let dir = tempfile::tempdir().unwrap();
    assert!(toggle_favorite(dir.path(), "wells_pe").unwrap().contains("added"));
}
