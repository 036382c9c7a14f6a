use serde::{Deserialize, Serialize};

use super::address::record_id_from_href;

/// One selectable row of the overlay listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRow {
    /// Row link; its last path segment is the record id.
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub href: String,
    pub label: String,
    #[serde(default)]
    pub current: bool,
}

/// Listing returned for a category, rendered inside the overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage {
    #[serde(default)]
    pub title: Option<String>,
    pub rows: Vec<ListingRow>,
    #[serde(default)]
    pub paginator: Vec<PageLink>,
    #[serde(default)]
    pub has_filters: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterGroup {
    pub title: String,
    pub links: Vec<PageLink>,
}

/// Filter panel loaded on demand into the `filters` target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPanel {
    pub groups: Vec<FilterGroup>,
}

/// Identity of a chosen record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordChoice {
    pub id: String,
    pub label: String,
}

impl RecordChoice {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }

    pub fn from_row(href: &str, label: &str) -> Self {
        Self::new(record_id_from_href(href), label.trim())
    }
}

impl From<&ListingRow> for RecordChoice {
    fn from(row: &ListingRow) -> Self {
        Self::from_row(&row.href, &row.label)
    }
}
