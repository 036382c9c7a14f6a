use crate::shared::lookup::FieldRegistry;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CATEGORY_FIELD: &str = "id_category";
pub const SOURCE_FIELD: &str = "id_source";
pub const AUTHORS_FIELD: &str = "id_authors";
pub const TARGET_CT_FIELD: &str = "id_target_ct";
pub const TARGET_ID_FIELD: &str = "id_target_id";

/// Values submitted by the listing form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFormDto {
    pub category: Option<String>,
    pub source: Option<String>,
    pub authors: Vec<String>,
    pub target_ct: Option<String>,
    pub target_id: Option<String>,
}

impl ListingFormDto {
    /// Build from registered field values (keyed by element id).
    pub fn from_values(values: &BTreeMap<String, String>, suggest_suffix: &str) -> Self {
        let value = |id: &str| {
            values
                .get(id)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let authors = value(&format!("{AUTHORS_FIELD}{suggest_suffix}"))
            .map(|ids| ids.split(',').map(str::to_string).collect())
            .unwrap_or_default();

        Self {
            category: value(CATEGORY_FIELD),
            source: value(SOURCE_FIELD),
            authors,
            target_ct: value(TARGET_CT_FIELD),
            target_id: value(TARGET_ID_FIELD),
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.target_id.is_some() && self.target_ct.is_none() {
            return Err("Target content type is required when a target is set".to_string());
        }
        Ok(())
    }
}

#[derive(Clone)]
pub struct ListingDetailsViewModel {
    pub fields: FieldRegistry,
    pub saved: RwSignal<Option<String>>,
    pub error: RwSignal<Option<String>>,
}

impl ListingDetailsViewModel {
    pub fn new() -> Self {
        Self {
            fields: use_context::<FieldRegistry>()
                .expect("FieldRegistry not provided in context (provide it in app root)"),
            saved: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    pub fn save_command(&self, suggest_suffix: &str) {
        let dto = ListingFormDto::from_values(&self.fields.values(), suggest_suffix);
        if let Err(e) = dto.validate() {
            self.error.set(Some(e));
            return;
        }
        match serde_json::to_string_pretty(&dto) {
            Ok(json) => {
                log::info!("listing form submitted: {}", json);
                self.error.set(None);
                self.saved.set(Some(json));
            }
            Err(e) => self.error.set(Some(e.to_string())),
        }
    }
}
