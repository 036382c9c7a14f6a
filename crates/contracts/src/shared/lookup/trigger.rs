use serde::{Deserialize, Serialize};

use super::config::LookupConfig;
use super::error::LookupError;

/// Field shape a lookup trigger writes into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerKind {
    /// Suggester input: the choice is inserted as an (id, label) pair.
    Suggest,
    /// Plain raw-id input: the id is written verbatim.
    RawId,
    /// Generic relation: id input plus content-type select.
    Generic,
}

impl TriggerKind {
    /// CSS class of the trigger icon.
    pub fn css_class(self) -> &'static str {
        match self {
            TriggerKind::Suggest => "suggest-related-lookup",
            TriggerKind::RawId => "rawid-related-lookup",
            TriggerKind::Generic => "generic-related-lookup",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerTargets {
    Suggest { input: String },
    RawId { input: String },
    Generic { id_field: String, ct_field: String },
}

/// Association between a trigger element and the field(s) it fills.
///
/// Derived once from the trigger id when the trigger is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerBinding {
    pub trigger_id: String,
    pub targets: TriggerTargets,
}

impl TriggerBinding {
    pub fn derive(
        kind: TriggerKind,
        trigger_id: &str,
        config: &LookupConfig,
    ) -> Result<Self, LookupError> {
        let stem = trigger_id.strip_prefix(config.trigger_prefix.as_str());

        let targets = match kind {
            TriggerKind::Suggest => {
                let stem = stem.filter(|s| !s.is_empty()).ok_or_else(|| {
                    LookupError::MalformedTriggerId {
                        trigger_id: trigger_id.to_string(),
                    }
                })?;
                TriggerTargets::Suggest {
                    input: format!("{stem}{}", config.suggest_suffix),
                }
            }
            TriggerKind::RawId => {
                let input = stem.unwrap_or(trigger_id);
                if input.is_empty() || input == trigger_id {
                    return Err(LookupError::MissingRawIdInput {
                        trigger_id: trigger_id.to_string(),
                    });
                }
                TriggerTargets::RawId {
                    input: input.to_string(),
                }
            }
            TriggerKind::Generic => {
                let stem = stem.ok_or_else(|| LookupError::MissingGenericInputs {
                    trigger_id: trigger_id.to_string(),
                })?;
                let stem = stem
                    .strip_suffix(config.id_suffix.as_str())
                    .unwrap_or(stem);
                if stem.is_empty() {
                    return Err(LookupError::MissingGenericInputs {
                        trigger_id: trigger_id.to_string(),
                    });
                }
                TriggerTargets::Generic {
                    id_field: format!("{stem}{}", config.id_suffix),
                    ct_field: format!("{stem}{}", config.ct_suffix),
                }
            }
        };

        Ok(Self {
            trigger_id: trigger_id.to_string(),
            targets,
        })
    }

    pub fn kind(&self) -> TriggerKind {
        match self.targets {
            TriggerTargets::Suggest { .. } => TriggerKind::Suggest,
            TriggerTargets::RawId { .. } => TriggerKind::RawId,
            TriggerTargets::Generic { .. } => TriggerKind::Generic,
        }
    }

    /// Ids of every field this trigger needs on the page.
    pub fn field_ids(&self) -> Vec<&str> {
        match &self.targets {
            TriggerTargets::Suggest { input } | TriggerTargets::RawId { input } => {
                vec![input.as_str()]
            }
            TriggerTargets::Generic { id_field, ct_field } => {
                vec![id_field.as_str(), ct_field.as_str()]
            }
        }
    }
}
