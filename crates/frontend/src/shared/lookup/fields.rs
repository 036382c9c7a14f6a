use contracts::shared::lookup::SuggestSelection;
use leptos::prelude::*;
use std::collections::{BTreeMap, HashMap};

/// Reactive state of one form field taking part in lookups.
#[derive(Clone, Copy)]
pub struct FieldHandle {
    pub value: RwSignal<String>,
    pub highlighted: RwSignal<bool>,
    clear_on_change: RwSignal<bool>,
    focus_requests: RwSignal<u32>,
    /// Present for suggester inputs.
    pub suggest: Option<RwSignal<SuggestSelection>>,
}

impl FieldHandle {
    pub fn new(initial: String) -> Self {
        Self {
            value: RwSignal::new(initial),
            highlighted: RwSignal::new(false),
            clear_on_change: RwSignal::new(false),
            focus_requests: RwSignal::new(0),
            suggest: None,
        }
    }

    pub fn suggester(multiple: bool) -> Self {
        Self {
            suggest: Some(RwSignal::new(SuggestSelection::new(multiple))),
            ..Self::new(String::new())
        }
    }

    /// Highlight + focus; the highlight is cleared by the next `notify_changed`.
    pub fn request_selection(&self) {
        self.highlighted.set(true);
        self.clear_on_change.set(true);
        self.focus_requests.update(|n| *n += 1);
    }

    pub fn focus_requests(&self) -> u32 {
        self.focus_requests.get()
    }

    /// Call from the element's `change` handler.
    pub fn notify_changed(&self) {
        if self.clear_on_change.get_untracked() {
            self.clear_on_change.set(false);
            self.highlighted.set(false);
        }
    }

    pub fn insert_suggestion(&self, choice: contracts::shared::lookup::RecordChoice) {
        match self.suggest {
            Some(selection) => {
                let mut ids = None;
                selection.update(|s| {
                    if s.insert_value(choice) {
                        ids = Some(s.ids_value());
                    }
                });
                if let Some(ids) = ids {
                    self.value.set(ids);
                }
            }
            None => self.value.set(choice.id),
        }
    }
}

/// Live set of lookup-aware fields on the page, keyed by element id.
///
/// Fields register themselves when mounted, so triggers see fields added later on.
#[derive(Clone, Copy)]
pub struct FieldRegistry {
    fields: RwSignal<HashMap<String, FieldHandle>>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self {
            fields: RwSignal::new(HashMap::new()),
        }
    }

    pub fn register(&self, id: &str, handle: FieldHandle) {
        self.fields.update(|fields| {
            if fields.insert(id.to_string(), handle).is_some() {
                log::debug!("lookup field #{} registered twice, keeping the latest", id);
            }
        });
    }

    pub fn unregister(&self, id: &str) {
        let _ = self.fields.try_update(|fields| {
            fields.remove(id);
        });
    }

    /// Tracked: re-runs the caller when the field set changes.
    pub fn contains(&self, id: &str) -> bool {
        self.fields.with(|fields| fields.contains_key(id))
    }

    pub fn get(&self, id: &str) -> Option<FieldHandle> {
        self.fields.with_untracked(|fields| fields.get(id).copied())
    }

    /// Current values of all registered fields.
    pub fn values(&self) -> BTreeMap<String, String> {
        self.fields.with_untracked(|fields| {
            fields
                .iter()
                .map(|(id, handle)| (id.clone(), handle.value.get_untracked()))
                .collect()
        })
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Register `handle` under `id` for the lifetime of the calling component.
pub fn use_registered_field(id: &str, handle: FieldHandle) {
    let registry = use_context::<FieldRegistry>()
        .expect("FieldRegistry not provided in context (provide it in app root)");
    registry.register(id, handle);
    let id = id.to_string();
    on_cleanup(move || registry.unregister(&id));
}
