use std::path::Path;

use clinicalc_core::models::feedback::FeedbackSubmission;
use clinicalc_core::models::input::RawInputBag;
use clinicalc_feedback::favorites::Favorites;
use clinicalc_feedback::feedback::FeedbackStore;
use clinicalc_feedback::store::FileStore;
use serde_json::Value;

/// Build an input bag from `field=value` arguments. Values that read as
/// JSON (`true`, `18`, `1.5`, `null`) keep that type; anything else is
/// passed as a string for normalization to coerce.
pub fn parse_assignments(pairs: &[String]) -> eyre::Result<RawInputBag> {
    let mut raw = RawInputBag::new();
    for pair in pairs {
        let (field, value) = pair
            .split_once('=')
            .ok_or_else(|| eyre::eyre!("expected field=value, got '{pair}'"))?;
        let field = field.trim();
        if field.is_empty() {
            return Err(eyre::eyre!("empty field name in '{pair}'"));
        }
        let value = serde_json::from_str::<Value>(value.trim())
            .unwrap_or_else(|_| Value::String(value.to_string()));
        raw.insert(field, value);
    }
    Ok(raw)
}

pub fn list(category: Option<&str>) -> String {
    let definitions = match category {
        Some(tag) => clinicalc_engine::by_category(tag),
        None => clinicalc_engine::list_definitions(),
    };
    definitions
        .iter()
        .map(|d| format!("{:<22} {} [{}]", d.id, d.name, d.categories.join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn show(calculator_id: &str) -> eyre::Result<String> {
    let definition = clinicalc_engine::get_definition(calculator_id)
        .ok_or_else(|| eyre::eyre!("unknown calculator '{calculator_id}'"))?;
    Ok(serde_json::to_string_pretty(definition)?)
}

/// Score the input. A failed calculation is reported, not raised.
pub fn calc(calculator_id: &str, raw: &RawInputBag) -> eyre::Result<String> {
    match clinicalc_engine::execute(calculator_id, raw) {
        Ok(result) => Ok(serde_json::to_string_pretty(&result)?),
        Err(failure) => Ok(format!("Unable to compute: {failure}")),
    }
}

pub fn dose(medication_id: &str, raw: &RawInputBag) -> eyre::Result<String> {
    let result = clinicalc_dosing::calculate_dose_raw(medication_id, raw)?;
    Ok(serde_json::to_string_pretty(&result)?)
}

pub fn submit_feedback(data_dir: &Path, submission: FeedbackSubmission) -> eyre::Result<String> {
    let mut store = FeedbackStore::open(FileStore::new(data_dir))?;
    let record = store.submit(submission)?;
    Ok(format!(
        "Feedback recorded for {} at {}",
        record.calculator_id, record.timestamp
    ))
}

pub fn feedback_stats(data_dir: &Path, calculator_id: &str) -> eyre::Result<String> {
    let store = FeedbackStore::open(FileStore::new(data_dir))?;
    Ok(format!(
        "{calculator_id}: {} responses, average rating {:.1}, {}% helpful",
        store.for_calculator(calculator_id).count(),
        store.average_rating(calculator_id),
        store.helpful_percentage(calculator_id),
    ))
}

pub fn export_feedback(data_dir: &Path) -> eyre::Result<String> {
    let store = FeedbackStore::open(FileStore::new(data_dir))?;
    Ok(store.export_json()?)
}

pub fn toggle_favorite(data_dir: &Path, calculator_id: &str) -> eyre::Result<String> {
    if clinicalc_engine::get_definition(calculator_id).is_none() {
        return Err(eyre::eyre!("unknown calculator '{calculator_id}'"));
    }
    let mut favorites = Favorites::open(FileStore::new(data_dir))?;
    let state = if favorites.toggle(calculator_id)? { "added to" } else { "removed from" };
    Ok(format!("{calculator_id} {state} favorites"))
}

pub fn list_favorites(data_dir: &Path) -> eyre::Result<String> {
    let favorites = Favorites::open(FileStore::new(data_dir))?;
    Ok(favorites.list().join("\n"))
}
