use serde::{Deserialize, Serialize};

use super::listing::RecordChoice;

/// Values held by a suggester input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestSelection {
    pub multiple: bool,
    pub values: Vec<RecordChoice>,
}

impl SuggestSelection {
    pub fn new(multiple: bool) -> Self {
        Self {
            multiple,
            values: Vec::new(),
        }
    }

    /// Insert a chosen record. Returns `false` when it was already selected.
    pub fn insert_value(&mut self, choice: RecordChoice) -> bool {
        if self.values.iter().any(|v| v.id == choice.id) {
            return false;
        }
        if !self.multiple {
            self.values.clear();
        }
        self.values.push(choice);
        true
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.values.len();
        self.values.retain(|v| v.id != id);
        self.values.len() != before
    }

    /// Value submitted with the form: comma-joined ids.
    pub fn ids_value(&self) -> String {
        self.values
            .iter()
            .map(|v| v.id.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}
