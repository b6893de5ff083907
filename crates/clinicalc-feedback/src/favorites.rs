use crate::error::FeedbackError;
use crate::store::{load_json, save_json, KeyValueStore};
use crate::FAVORITES_KEY;

/// Calculator ids the user starred, in the order they were added.
pub struct Favorites<S> {
    store: S,
    ids: Vec<String>,
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn open(store: S) -> Result<Self, FeedbackError> {
        let ids: Vec<String> = load_json(&store, FAVORITES_KEY)?;
        tracing::debug!(count = ids.len(), "favorites loaded");
        Ok(Self { store, ids })
    }

    /// Add the id if absent, remove it if present. Returns whether it is a
    /// favorite afterwards.
    pub fn toggle(&mut self, calculator_id: &str) -> Result<bool, FeedbackError> {
        let previous = self.ids.clone();
        let now_favorite = match self.ids.iter().position(|id| id == calculator_id) {
            Some(i) => {
                self.ids.remove(i);
                false
            }
            None => {
                self.ids.push(calculator_id.to_string());
                true
            }
        };
        if let Err(e) = save_json(&mut self.store, FAVORITES_KEY, &self.ids) {
            self.ids = previous;
            return Err(e);
        }
        Ok(now_favorite)
    }

    pub fn contains(&self, calculator_id: &str) -> bool {
        self.ids.iter().any(|id| id == calculator_id)
    }

    pub fn list(&self) -> &[String] {
        &self.ids
    }
}
