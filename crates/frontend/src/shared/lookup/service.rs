use super::api;
use super::fields::FieldRegistry;
use super::picker::{ClickOutcome, FilterView, OverlayView, PickerHost, RelatedPicker};
use contracts::shared::lookup::{
    Category, ContentAddress, ContentTypeRegistry, FilterPanel, ListingPage, ListingRow,
    LookupConfig, RecordChoice, SessionToken, TriggerBinding,
};
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

pub enum LoadResult {
    Listing {
        href: String,
        result: Result<ListingPage, String>,
    },
    Filters {
        href: String,
        result: Result<FilterPanel, String>,
    },
}

type LoadedHandler = Arc<dyn Fn(LoadResult) + Send + Sync>;

/// [`PickerHost`] backed by the field registry and async fetches.
#[derive(Clone, Copy)]
pub struct LeptosHost {
    fields: FieldRegistry,
    visible: RwSignal<bool>,
    filters_target: StoredValue<String>,
    on_loaded: StoredValue<Option<LoadedHandler>>,
}

impl LeptosHost {
    fn new(fields: FieldRegistry, config: &LookupConfig) -> Self {
        Self {
            fields,
            visible: RwSignal::new(false),
            filters_target: StoredValue::new(config.filters_target.clone()),
            on_loaded: StoredValue::new(None),
        }
    }

    fn deliver(&self, result: LoadResult) {
        match self.on_loaded.try_get_value().flatten() {
            Some(handler) => handler(result),
            None => log::debug!("lookup content loaded after the overlay service was dropped"),
        }
    }
}

impl PickerHost for LeptosHost {
    fn field_exists(&self, field_id: &str) -> bool {
        self.fields.get(field_id).is_some()
    }

    fn field_value(&self, field_id: &str) -> Option<String> {
        self.fields
            .get(field_id)
            .map(|field| field.value.get_untracked())
    }

    fn set_field_value(&self, field_id: &str, value: &str) {
        match self.fields.get(field_id) {
            Some(field) => field.value.set(value.to_string()),
            None => log::warn!("lookup target #{} disappeared before a choice was made", field_id),
        }
    }

    fn request_selection(&self, field_id: &str) {
        if let Some(field) = self.fields.get(field_id) {
            field.request_selection();
        }
    }

    fn load_content(&self, target: &str, href: &str) {
        let host = *self;
        let href = href.to_string();
        let is_filters = self
            .filters_target
            .with_value(|filters_target| filters_target == target);
        spawn_local(async move {
            let result = if is_filters {
                LoadResult::Filters {
                    result: api::fetch_filters(&href).await,
                    href,
                }
            } else {
                LoadResult::Listing {
                    result: api::fetch_listing(&href).await,
                    href,
                }
            };
            host.deliver(result);
        });
    }

    fn insert_suggestion(&self, input_id: &str, choice: RecordChoice) {
        match self.fields.get(input_id) {
            Some(field) => field.insert_suggestion(choice),
            None => log::warn!("suggester input #{} disappeared before a choice was made", input_id),
        }
    }

    fn set_overlay_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

/// Owner of the shared lookup overlay.
///
/// Provide once at the application root:
/// ```ignore
/// let fields = FieldRegistry::new();
/// provide_context(fields);
/// provide_context(LookupOverlayService::new(config, registry, fields));
/// ```
#[derive(Clone, Copy)]
pub struct LookupOverlayService {
    picker: StoredValue<RelatedPicker<LeptosHost>>,
    host: LeptosHost,
    listing: RwSignal<Option<OverlayView>>,
    filters: RwSignal<Option<FilterView>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
}

impl LookupOverlayService {
    pub fn new(config: LookupConfig, registry: ContentTypeRegistry, fields: FieldRegistry) -> Self {
        let host = LeptosHost::new(fields, &config);
        let svc = Self {
            picker: StoredValue::new(RelatedPicker::new(config, registry, host)),
            host,
            listing: RwSignal::new(None),
            filters: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        };
        let handler: LoadedHandler = Arc::new(move |result| svc.content_loaded(result));
        host.on_loaded.set_value(Some(handler));
        svc
    }

    pub fn config(&self) -> LookupConfig {
        self.picker
            .try_with_value(|p| p.config().clone())
            .unwrap_or_default()
    }

    pub fn registry(&self) -> ContentTypeRegistry {
        self.picker
            .try_with_value(|p| p.registry().clone())
            .unwrap_or_default()
    }

    pub fn is_visible(&self) -> bool {
        self.host.visible.get()
    }

    pub fn listing(&self) -> Option<OverlayView> {
        self.listing.get()
    }

    pub fn filters(&self) -> Option<FilterView> {
        self.filters.get()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    pub fn click(&self, binding: &TriggerBinding, href: &str) -> Option<ClickOutcome> {
        let outcome = self.picker.try_update_value(|p| p.click(binding, href))?;
        if matches!(outcome, ClickOutcome::Opened(_)) {
            self.begin_loading();
        }
        Some(outcome)
    }

    pub fn open_overlay(
        &self,
        category: Category,
        on_choose: impl FnOnce(&str) + Send + Sync + 'static,
    ) -> Option<SessionToken> {
        let token = self
            .picker
            .try_update_value(|p| p.open_overlay(category, on_choose))?;
        match token {
            Ok(token) => {
                self.begin_loading();
                Some(token)
            }
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }

    pub fn choose(&self, token: SessionToken, row: &ListingRow) {
        let chosen = self
            .picker
            .try_update_value(|p| p.choose_row(token, row))
            .unwrap_or(false);
        if chosen {
            self.listing.set(None);
            self.filters.set(None);
        }
    }

    pub fn navigate(&self, address: ContentAddress) {
        self.loading.set(true);
        self.picker.update_value(|p| p.navigate(&address));
    }

    pub fn open_filters(&self) {
        self.picker.update_value(|p| p.open_filters());
    }

    pub fn close_filters(&self) {
        self.filters.set(None);
    }

    pub fn dismiss(&self) {
        self.picker.update_value(|p| p.dismiss());
        self.listing.set(None);
        self.filters.set(None);
        self.loading.set(false);
        self.error.set(None);
    }

    fn begin_loading(&self) {
        self.error.set(None);
        self.loading.set(true);
    }

    fn content_loaded(&self, result: LoadResult) {
        match result {
            LoadResult::Listing { href, result } => match result {
                Ok(page) => {
                    let view = self
                        .picker
                        .try_update_value(|p| p.overlay_loaded(&href, &page))
                        .flatten();
                    if let Some(view) = view {
                        self.listing.set(Some(view));
                        self.filters.set(None);
                        self.loading.set(false);
                    }
                }
                Err(e) => {
                    let live = self
                        .picker
                        .try_update_value(|p| p.overlay_failed(&href))
                        .unwrap_or(false);
                    if live {
                        log::warn!("Could not load lookup listing {}: {}", href, e);
                        self.error.set(Some(e));
                        self.loading.set(false);
                    }
                }
            },
            LoadResult::Filters { href, result } => match result {
                Ok(panel) => {
                    let view = self
                        .picker
                        .try_with_value(|p| p.filters_loaded(&href, &panel))
                        .flatten();
                    if view.is_some() {
                        self.filters.set(view);
                    }
                }
                Err(e) => log::warn!("Could not load lookup filters {}: {}", href, e),
            },
        }
    }
}
