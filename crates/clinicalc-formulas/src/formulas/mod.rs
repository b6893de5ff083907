pub mod cardiology;
pub mod critical_care;
pub mod gastroenterology;
pub mod generic;
pub mod hepatology;
pub mod neurology;
pub mod perioperative;
pub mod renal;
pub mod respiratory;
pub mod vascular;

pub(crate) fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
