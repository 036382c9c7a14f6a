use serde::Deserialize;

use super::category::Category;

/// Naming conventions and endpoints of the lookup popup.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LookupConfig {
    /// Prefix every trigger id starts with (`lookup_author` → `author`).
    pub trigger_prefix: String,
    pub suggest_suffix: String,
    pub id_suffix: String,
    pub ct_suffix: String,
    /// Content target name of the shared overlay surface.
    pub overlay_target: String,
    /// Content target name of the filter panel inside the overlay.
    pub filters_target: String,
    /// CSS class put on an empty content-type select when a generic lookup is clicked.
    pub highlighted_class: String,
    /// Listing URL template, `{app}` and `{model}` are substituted.
    pub listing_url: String,
}

/// Default configuration embedded in the binary
pub const DEFAULT_CONFIG: &str = r#"
trigger_prefix = "lookup_"
suggest_suffix = "_suggest"
id_suffix = "_id"
ct_suffix = "_ct"
overlay_target = "lupicka-overlay"
filters_target = "filters"
highlighted_class = "highlighted"
listing_url = "/admin/{app}/{model}/?pop"
"#;

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            trigger_prefix: "lookup_".to_string(),
            suggest_suffix: "_suggest".to_string(),
            id_suffix: "_id".to_string(),
            ct_suffix: "_ct".to_string(),
            overlay_target: "lupicka-overlay".to_string(),
            filters_target: "filters".to_string(),
            highlighted_class: "highlighted".to_string(),
            listing_url: "/admin/{app}/{model}/?pop".to_string(),
        }
    }
}

impl LookupConfig {
    /// Parse a (possibly partial) TOML document; missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> anyhow::Result<Self> {
        let config: LookupConfig = toml::from_str(contents)?;
        Ok(config)
    }

    /// Configuration from the embedded `DEFAULT_CONFIG` document.
    pub fn default_config() -> Self {
        Self::from_toml_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    pub fn listing_url_for(&self, category: &Category) -> String {
        self.listing_url
            .replace("{app}", &category.app)
            .replace("{model}", &category.model)
    }
}
