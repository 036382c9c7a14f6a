use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::category::Category;
use super::error::LookupError;

/// One entry of the page-supplied content-type table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeEntry {
    /// `/app/model/`
    pub path: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl ContentTypeEntry {
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.path.clone())
    }
}

/// Read-only mapping `content-type id -> entry` (`AVAILABLE_CONTENT_TYPES` on the page).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentTypeRegistry {
    entries: HashMap<String, ContentTypeEntry>,
}

impl ContentTypeRegistry {
    pub fn new(entries: HashMap<String, ContentTypeEntry>) -> Self {
        Self { entries }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn get(&self, ct_id: &str) -> Option<&ContentTypeEntry> {
        self.entries.get(ct_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Category browsed for the given content type.
    pub fn category_for(&self, ct_id: &str) -> Result<Category, LookupError> {
        let entry = self
            .get(ct_id)
            .ok_or_else(|| LookupError::UnknownContentType {
                ct_id: ct_id.to_string(),
            })?;
        Category::from_registry_path(&entry.path)
    }

    /// `(ct_id, label)` pairs sorted by label, for the content-type select.
    pub fn choices(&self) -> Vec<(String, String)> {
        let mut choices: Vec<(String, String)> = self
            .entries
            .iter()
            .map(|(id, entry)| (id.clone(), entry.label()))
            .collect();
        choices.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        choices
    }
}
