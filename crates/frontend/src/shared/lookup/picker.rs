//! RelatedPicker: trigger click → overlay session → chosen record written back.
//!
//! The picker owns the shared [`OverlaySurface`] and talks to the page only through
//! [`PickerHost`], so the whole interaction runs without a DOM in tests.

use contracts::shared::lookup::{
    rewrite_query_link, Category, ContentAddress, ContentTypeRegistry, FilterPanel, ListingPage,
    ListingRow, LookupConfig, LookupError, OverlaySurface, RecordChoice, SessionToken,
    TriggerBinding, TriggerTargets,
};
use std::fmt;

/// Page-side collaborators of the picker.
pub trait PickerHost {
    fn field_exists(&self, field_id: &str) -> bool;
    fn field_value(&self, field_id: &str) -> Option<String>;
    fn set_field_value(&self, field_id: &str, value: &str);
    /// Highlight and focus `field_id`; the mark goes away on the field's next change.
    fn request_selection(&self, field_id: &str);
    /// Start loading `href` into the content target `target`.
    fn load_content(&self, target: &str, href: &str);
    fn insert_suggestion(&self, input_id: &str, choice: RecordChoice);
    fn set_overlay_visible(&self, visible: bool);
}

pub type ChooseCallback = Box<dyn FnOnce(&str) + Send + Sync>;

pub enum Completion {
    /// Insert (id, label) into a suggester input.
    Suggest { input: String },
    /// Hand the chosen id to a callback, at most once.
    Callback(ChooseCallback),
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::Suggest { input } => f.debug_struct("Suggest").field("input", input).finish(),
            Completion::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

#[derive(Debug)]
pub struct PickerSession {
    pub trigger_id: Option<String>,
    pub category: Option<Category>,
    pub completion: Completion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    Opened(SessionToken),
    /// Generic lookup clicked with an empty content-type select.
    NeedsContentType,
    Aborted(LookupError),
}

/// Paginator or filter link re-scoped into the overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: String,
    pub current: bool,
    /// `None` for links that are not bare query strings; they are rendered inert.
    pub address: Option<ContentAddress>,
}

/// Overlay content bound to the session that was attached when it finished loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayView {
    pub token: SessionToken,
    pub title: Option<String>,
    pub category: Option<Category>,
    pub rows: Vec<ListingRow>,
    pub paginator: Vec<NavLink>,
    pub has_filters: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterView {
    pub groups: Vec<(String, Vec<NavLink>)>,
}

pub struct RelatedPicker<H> {
    config: LookupConfig,
    registry: ContentTypeRegistry,
    host: H,
    surface: OverlaySurface<PickerSession>,
    filters_href: Option<String>,
}

impl<H> RelatedPicker<H>
where
    H: PickerHost + Clone + Send + Sync + 'static,
{
    pub fn new(config: LookupConfig, registry: ContentTypeRegistry, host: H) -> Self {
        Self {
            config,
            registry,
            host,
            surface: OverlaySurface::new(),
            filters_href: None,
        }
    }

    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    pub fn registry(&self) -> &ContentTypeRegistry {
        &self.registry
    }

    pub fn surface(&self) -> &OverlaySurface<PickerSession> {
        &self.surface
    }

    /// Handle a primary click on a lookup trigger.
    pub fn click(&mut self, binding: &TriggerBinding, href: &str) -> ClickOutcome {
        let result = match &binding.targets {
            TriggerTargets::Suggest { input } => self.click_suggest(binding, input, href),
            TriggerTargets::RawId { input } => self.click_raw_id(binding, input, href),
            TriggerTargets::Generic { id_field, ct_field } => {
                self.click_generic(binding, id_field, ct_field)
            }
        };
        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                log::warn!("{}", e);
                ClickOutcome::Aborted(e)
            }
        }
    }

    fn click_suggest(
        &mut self,
        binding: &TriggerBinding,
        input: &str,
        href: &str,
    ) -> Result<ClickOutcome, LookupError> {
        if !self.host.field_exists(input) {
            return Err(LookupError::MissingSuggestInput {
                trigger_id: binding.trigger_id.clone(),
                input_id: input.to_string(),
            });
        }
        let token = self.attach(PickerSession {
            trigger_id: Some(binding.trigger_id.clone()),
            category: Category::from_lookup_href(href).ok(),
            completion: Completion::Suggest {
                input: input.to_string(),
            },
        });
        let address = ContentAddress::absolute(self.config.overlay_target.clone(), href);
        self.load(&address)?;
        Ok(ClickOutcome::Opened(token))
    }

    fn click_raw_id(
        &mut self,
        binding: &TriggerBinding,
        input: &str,
        href: &str,
    ) -> Result<ClickOutcome, LookupError> {
        let category = Category::from_lookup_href(href)?;
        if !self.host.field_exists(input) {
            return Err(LookupError::MissingRawIdInput {
                trigger_id: binding.trigger_id.clone(),
            });
        }
        let host = self.host.clone();
        let input = input.to_string();
        let token = self.open_overlay(category, move |id| host.set_field_value(&input, id))?;
        Ok(ClickOutcome::Opened(token))
    }

    fn click_generic(
        &mut self,
        binding: &TriggerBinding,
        id_field: &str,
        ct_field: &str,
    ) -> Result<ClickOutcome, LookupError> {
        if !self.host.field_exists(id_field) || !self.host.field_exists(ct_field) {
            return Err(LookupError::MissingGenericInputs {
                trigger_id: binding.trigger_id.clone(),
            });
        }
        let ct_id = self
            .host
            .field_value(ct_field)
            .filter(|v| !v.trim().is_empty());
        let Some(ct_id) = ct_id else {
            log::debug!("{}: content type not selected yet", binding.trigger_id);
            self.host.request_selection(ct_field);
            return Ok(ClickOutcome::NeedsContentType);
        };
        let category = self.registry.category_for(&ct_id)?;
        let host = self.host.clone();
        let id_field = id_field.to_string();
        let token = self.open_overlay(category, move |id| host.set_field_value(&id_field, id))?;
        Ok(ClickOutcome::Opened(token))
    }

    /// Show the listing of `category`; `on_choose` runs at most once, and never if the
    /// session is dismissed or superseded first.
    pub fn open_overlay(
        &mut self,
        category: Category,
        on_choose: impl FnOnce(&str) + Send + Sync + 'static,
    ) -> Result<SessionToken, LookupError> {
        let href = self.config.listing_url_for(&category);
        let token = self.attach(PickerSession {
            trigger_id: None,
            category: Some(category),
            completion: Completion::Callback(Box::new(on_choose)),
        });
        let address = ContentAddress::absolute(self.config.overlay_target.clone(), href);
        self.load(&address)?;
        Ok(token)
    }

    fn attach(&mut self, session: PickerSession) -> SessionToken {
        let (token, displaced) = self.surface.attach(session);
        if let Some(displaced) = displaced {
            log::debug!(
                "lookup session superseded (trigger: {:?})",
                displaced.trigger_id
            );
        }
        self.filters_href = None;
        token
    }

    fn load(&mut self, address: &ContentAddress) -> Result<(), LookupError> {
        if address.target == self.config.overlay_target {
            let href = address.resolve(self.surface.content_href());
            self.surface.set_content(href.clone());
            // a new listing replaces whatever filter panel was requested for the old one
            self.filters_href = None;
            self.show();
            self.host.load_content(&address.target, &href);
            Ok(())
        } else if address.target == self.config.filters_target {
            let href = address.resolve(self.filters_href.as_deref());
            self.filters_href = Some(href.clone());
            self.host.load_content(&address.target, &href);
            Ok(())
        } else {
            Err(LookupError::MalformedAddress {
                address: address.to_string(),
            })
        }
    }

    /// Follow a rewritten paginator/filter link inside the overlay.
    pub fn navigate(&mut self, address: &ContentAddress) {
        if let Err(e) = self.load(address) {
            log::warn!("{}", e);
        }
    }

    /// Overlay content for `href` finished loading.
    ///
    /// Returns `None` for responses superseded by a newer request, and hides the overlay
    /// when no session is attached.
    pub fn overlay_loaded(&mut self, href: &str, page: &ListingPage) -> Option<OverlayView> {
        if self.surface.content_href() != Some(href) {
            log::debug!("dropping stale overlay content for {}", href);
            return None;
        }
        let Some((token, session)) = self.surface.current() else {
            log::warn!(
                "{}",
                LookupError::NoSessionAttached {
                    target: self.config.overlay_target.clone()
                }
            );
            self.hide();
            return None;
        };
        let view = OverlayView {
            token,
            title: page.title.clone(),
            category: session.category.clone(),
            rows: page.rows.clone(),
            paginator: page
                .paginator
                .iter()
                .map(|link| NavLink {
                    label: link.label.clone(),
                    current: link.current,
                    address: rewrite_query_link(&link.href, &self.config.overlay_target),
                })
                .collect(),
            has_filters: page.has_filters,
        };
        self.show();
        Some(view)
    }

    /// Loading overlay content for `href` failed.
    ///
    /// Returns `true` when the failure belongs to the live session and should be shown;
    /// failures of superseded or dismissed requests are dropped.
    pub fn overlay_failed(&mut self, href: &str) -> bool {
        if self.surface.content_href() != Some(href) || self.surface.current().is_none() {
            log::debug!("dropping failed overlay request for {}", href);
            return false;
        }
        self.show();
        true
    }

    /// Finalize the session identified by `token` with `choice`.
    ///
    /// Returns `false` when the session is no longer attached.
    pub fn choose(&mut self, token: SessionToken, choice: RecordChoice) -> bool {
        let Some(session) = self.surface.take(token) else {
            log::debug!("ignoring choice {:?} for a closed lookup session", choice.id);
            return false;
        };
        match session.completion {
            Completion::Suggest { input } => self.host.insert_suggestion(&input, choice),
            Completion::Callback(on_choose) => on_choose(&choice.id),
        }
        self.hide();
        true
    }

    pub fn choose_row(&mut self, token: SessionToken, row: &ListingRow) -> bool {
        self.choose(token, RecordChoice::from(row))
    }

    /// Load the filter panel of the current listing into the filters target.
    pub fn open_filters(&mut self) {
        let href = ContentAddress::relative(self.config.overlay_target.clone(), "filters/")
            .resolve(self.surface.content_href());
        log::debug!("filters: {}", href);
        let address = ContentAddress::absolute(self.config.filters_target.clone(), href);
        if let Err(e) = self.load(&address) {
            log::warn!("{}", e);
        }
    }

    /// Filter panel for `href` finished loading; its links are routed back into the overlay.
    pub fn filters_loaded(&self, href: &str, panel: &FilterPanel) -> Option<FilterView> {
        if self.filters_href.as_deref() != Some(href) {
            return None;
        }
        let groups = panel
            .groups
            .iter()
            .map(|group| {
                let links = group
                    .links
                    .iter()
                    .map(|link| NavLink {
                        label: link.label.clone(),
                        current: link.current,
                        address: rewrite_query_link(&link.href, &self.config.overlay_target),
                    })
                    .collect();
                (group.title.clone(), links)
            })
            .collect();
        Some(FilterView { groups })
    }

    /// Close the overlay without choosing; the pending callback never fires.
    pub fn dismiss(&mut self) {
        self.surface.detach();
        self.surface.clear_content();
        self.filters_href = None;
        self.hide();
    }

    fn show(&mut self) {
        self.surface.show();
        self.host.set_overlay_visible(true);
    }

    fn hide(&mut self) {
        self.surface.hide();
        self.host.set_overlay_visible(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::lookup::{FilterGroup, PageLink, TriggerKind};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct MockState {
        fields: HashMap<String, String>,
        loads: Vec<(String, String)>,
        inserted: Vec<(String, RecordChoice)>,
        selection_requests: Vec<String>,
        visible: bool,
    }

    #[derive(Clone, Default)]
    struct MockHost {
        state: Arc<Mutex<MockState>>,
    }

    impl MockHost {
        fn with_fields(fields: &[(&str, &str)]) -> Self {
            let host = Self::default();
            host.state.lock().unwrap().fields = fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();
            host
        }

        fn field(&self, id: &str) -> Option<String> {
            self.state.lock().unwrap().fields.get(id).cloned()
        }

        fn loads(&self) -> Vec<(String, String)> {
            self.state.lock().unwrap().loads.clone()
        }

        fn visible(&self) -> bool {
            self.state.lock().unwrap().visible
        }
    }

    impl PickerHost for MockHost {
        fn field_exists(&self, field_id: &str) -> bool {
            self.state.lock().unwrap().fields.contains_key(field_id)
        }

        fn field_value(&self, field_id: &str) -> Option<String> {
            self.field(field_id)
        }

        fn set_field_value(&self, field_id: &str, value: &str) {
            self.state
                .lock()
                .unwrap()
                .fields
                .insert(field_id.to_string(), value.to_string());
        }

        fn request_selection(&self, field_id: &str) {
            self.state
                .lock()
                .unwrap()
                .selection_requests
                .push(field_id.to_string());
        }

        fn load_content(&self, target: &str, href: &str) {
            self.state
                .lock()
                .unwrap()
                .loads
                .push((target.to_string(), href.to_string()));
        }

        fn insert_suggestion(&self, input_id: &str, choice: RecordChoice) {
            self.state
                .lock()
                .unwrap()
                .inserted
                .push((input_id.to_string(), choice));
        }

        fn set_overlay_visible(&self, visible: bool) {
            self.state.lock().unwrap().visible = visible;
        }
    }

    fn registry() -> ContentTypeRegistry {
        ContentTypeRegistry::from_json(r#"{"7": {"path": "/core/author/", "name": "Author"}}"#)
            .unwrap()
    }

    fn picker(host: &MockHost) -> RelatedPicker<MockHost> {
        RelatedPicker::new(LookupConfig::default(), registry(), host.clone())
    }

    fn binding(kind: TriggerKind, id: &str) -> TriggerBinding {
        TriggerBinding::derive(kind, id, &LookupConfig::default()).unwrap()
    }

    fn page(rows: &[(&str, &str)]) -> ListingPage {
        ListingPage {
            title: None,
            rows: rows
                .iter()
                .map(|(href, label)| ListingRow {
                    href: href.to_string(),
                    label: label.to_string(),
                })
                .collect(),
            paginator: vec![
                PageLink {
                    href: "?p=1".to_string(),
                    label: "1".to_string(),
                    current: true,
                },
                PageLink {
                    href: "?p=2".to_string(),
                    label: "2".to_string(),
                    current: false,
                },
            ],
            has_filters: true,
        }
    }

    #[test]
    fn test_suggest_click_without_input_is_aborted() {
        let host = MockHost::default();
        let mut picker = picker(&host);
        let outcome = picker.click(
            &binding(TriggerKind::Suggest, "lookup_id_authors"),
            "../../core/author/?pop",
        );
        assert!(matches!(
            outcome,
            ClickOutcome::Aborted(LookupError::MissingSuggestInput { ref input_id, .. })
                if input_id == "id_authors_suggest"
        ));
        assert!(host.loads().is_empty());
        assert!(!host.visible());
    }

    #[test]
    fn test_suggest_row_choice_inserts_pair_and_hides() {
        let host = MockHost::with_fields(&[("id_authors_suggest", "")]);
        let mut picker = picker(&host);
        let outcome = picker.click(
            &binding(TriggerKind::Suggest, "lookup_id_authors"),
            "../../core/author/?pop",
        );
        assert!(matches!(outcome, ClickOutcome::Opened(_)));
        assert_eq!(
            host.loads(),
            vec![(
                "lupicka-overlay".to_string(),
                "../../core/author/?pop".to_string()
            )]
        );

        let view = picker
            .overlay_loaded("../../core/author/?pop", &page(&[("../42/", "Jane Doe")]))
            .unwrap();
        assert!(host.visible());
        assert_eq!(view.category, Some(Category::new("core", "author")));

        assert!(picker.choose_row(view.token, &view.rows[0]));
        assert_eq!(
            host.state.lock().unwrap().inserted,
            vec![(
                "id_authors_suggest".to_string(),
                RecordChoice::new("42", "Jane Doe")
            )]
        );
        assert!(!host.visible());
    }

    #[test]
    fn test_paginator_links_stay_in_overlay() {
        let host = MockHost::with_fields(&[("id_authors_suggest", "")]);
        let mut picker = picker(&host);
        picker.click(
            &binding(TriggerKind::Suggest, "lookup_id_authors"),
            "/admin/core/author/?pop",
        );
        let view = picker
            .overlay_loaded("/admin/core/author/?pop", &page(&[]))
            .unwrap();
        let next = view.paginator[1].address.clone().unwrap();
        assert_eq!(next.to_string(), "lupicka-overlay::&p=2");

        picker.navigate(&next);
        assert_eq!(
            host.loads().last().unwrap().1,
            "/admin/core/author/?pop&p=2"
        );
        // the page-1 response arriving late is dropped
        assert!(picker
            .overlay_loaded("/admin/core/author/?pop", &page(&[]))
            .is_none());
        assert!(picker
            .overlay_loaded("/admin/core/author/?pop&p=2", &page(&[]))
            .is_some());
    }

    #[test]
    fn test_loaded_without_session_hides_overlay() {
        let host = MockHost::with_fields(&[("id_authors_suggest", "")]);
        let mut picker = picker(&host);
        picker.click(
            &binding(TriggerKind::Suggest, "lookup_id_authors"),
            "/admin/core/author/?pop",
        );
        let view = picker
            .overlay_loaded("/admin/core/author/?pop", &page(&[("1/", "Jane")]))
            .unwrap();
        assert!(picker.choose_row(view.token, &view.rows[0]));

        // the same content delivered again finds no session
        host.set_overlay_visible(true);
        assert!(picker
            .overlay_loaded("/admin/core/author/?pop", &page(&[]))
            .is_none());
        assert!(!host.visible());
    }

    #[test]
    fn test_overlay_visible_while_first_listing_loads() {
        let host = MockHost::with_fields(&[("id_authors_suggest", "")]);
        let mut picker = picker(&host);
        picker.click(
            &binding(TriggerKind::Suggest, "lookup_id_authors"),
            "/admin/core/author/?pop",
        );
        assert!(host.visible());
        assert!(picker.surface().is_visible());

        picker.dismiss();
        assert!(!host.visible());
    }

    #[test]
    fn test_late_response_after_dismiss_keeps_overlay_closed() {
        let host = MockHost::with_fields(&[("id_authors_suggest", "")]);
        let mut picker = picker(&host);
        picker.click(
            &binding(TriggerKind::Suggest, "lookup_id_authors"),
            "/admin/core/author/?pop",
        );
        picker
            .overlay_loaded("/admin/core/author/?pop", &page(&[]))
            .unwrap();
        picker.navigate(&ContentAddress::query("lupicka-overlay", "p=2"));
        picker.dismiss();

        assert!(!picker.overlay_failed("/admin/core/author/?pop&p=2"));
        assert!(picker
            .overlay_loaded("/admin/core/author/?pop&p=2", &page(&[]))
            .is_none());
        assert!(!host.visible());
    }

    #[test]
    fn test_failure_of_live_request_is_shown() {
        let host = MockHost::with_fields(&[("id_source", "")]);
        let mut picker = picker(&host);
        picker.click(
            &binding(TriggerKind::RawId, "lookup_id_source"),
            "../../core/source/",
        );
        host.set_overlay_visible(false);
        assert!(!picker.overlay_failed("/elsewhere/"));
        assert!(!host.visible());
        assert!(picker.overlay_failed("/admin/core/source/?pop"));
        assert!(host.visible());
    }

    #[test]
    fn test_filters_for_previous_page_are_dropped() {
        let host = MockHost::with_fields(&[("id_authors_suggest", "")]);
        let mut picker = picker(&host);
        picker.click(
            &binding(TriggerKind::Suggest, "lookup_id_authors"),
            "/admin/core/author/?pop",
        );
        picker.open_filters();
        picker.navigate(&ContentAddress::query("lupicka-overlay", "p=2"));

        let panel = FilterPanel { groups: Vec::new() };
        assert!(picker
            .filters_loaded("/admin/core/author/filters/?pop", &panel)
            .is_none());
    }

    #[test]
    fn test_raw_id_writes_identifier_verbatim() {
        let host = MockHost::with_fields(&[("id_source", "")]);
        let mut picker = picker(&host);
        let outcome = picker.click(
            &binding(TriggerKind::RawId, "lookup_id_source"),
            "../../core/author/?pop",
        );
        let token = match outcome {
            ClickOutcome::Opened(token) => token,
            other => panic!("expected overlay to open, got {other:?}"),
        };
        assert_eq!(host.loads()[0].1, "/admin/core/author/?pop");

        assert!(picker.choose(token, RecordChoice::new("42", "Jane Doe")));
        assert_eq!(host.field("id_source").as_deref(), Some("42"));
    }

    #[test]
    fn test_raw_id_rejects_unexpected_href_and_missing_input() {
        let host = MockHost::with_fields(&[("id_source", "")]);
        let mut picker = picker(&host);
        let outcome = picker.click(
            &binding(TriggerKind::RawId, "lookup_id_source"),
            "../../core/author?pop",
        );
        assert!(matches!(
            outcome,
            ClickOutcome::Aborted(LookupError::UnexpectedHref { .. })
        ));

        let outcome = picker.click(
            &binding(TriggerKind::RawId, "lookup_id_missing"),
            "../../core/author/",
        );
        assert!(matches!(
            outcome,
            ClickOutcome::Aborted(LookupError::MissingRawIdInput { .. })
        ));
        assert!(host.loads().is_empty());
    }

    #[test]
    fn test_generic_without_content_type_requests_selection() {
        let host = MockHost::with_fields(&[("id_target_id", ""), ("id_target_ct", "")]);
        let mut picker = picker(&host);
        let outcome = picker.click(&binding(TriggerKind::Generic, "lookup_id_target_id"), "#");
        assert_eq!(outcome, ClickOutcome::NeedsContentType);
        assert_eq!(
            host.state.lock().unwrap().selection_requests,
            vec!["id_target_ct".to_string()]
        );
        assert!(host.loads().is_empty());
    }

    #[test]
    fn test_generic_writes_id_field_only() {
        let host = MockHost::with_fields(&[("id_target_id", ""), ("id_target_ct", "7")]);
        let mut picker = picker(&host);
        let outcome = picker.click(&binding(TriggerKind::Generic, "lookup_id_target_id"), "#");
        let token = match outcome {
            ClickOutcome::Opened(token) => token,
            other => panic!("expected overlay to open, got {other:?}"),
        };
        assert_eq!(host.loads()[0].1, "/admin/core/author/?pop");
        assert_eq!(
            picker.surface().current().unwrap().1.category,
            Some(Category::new("core", "author"))
        );

        picker.choose(token, RecordChoice::new("9", "Some author"));
        assert_eq!(host.field("id_target_id").as_deref(), Some("9"));
        assert_eq!(host.field("id_target_ct").as_deref(), Some("7"));
    }

    #[test]
    fn test_generic_unknown_content_type_and_missing_inputs() {
        let host = MockHost::with_fields(&[("id_target_id", ""), ("id_target_ct", "99")]);
        let mut picker = picker(&host);
        let outcome = picker.click(&binding(TriggerKind::Generic, "lookup_id_target_id"), "#");
        assert_eq!(
            outcome,
            ClickOutcome::Aborted(LookupError::UnknownContentType {
                ct_id: "99".to_string()
            })
        );

        let outcome = picker.click(&binding(TriggerKind::Generic, "lookup_id_other_id"), "#");
        assert!(matches!(
            outcome,
            ClickOutcome::Aborted(LookupError::MissingGenericInputs { .. })
        ));
    }

    #[test]
    fn test_superseded_session_never_completes() {
        let host = MockHost::with_fields(&[("id_source", ""), ("id_category", "")]);
        let mut picker = picker(&host);
        let ClickOutcome::Opened(first) = picker.click(
            &binding(TriggerKind::RawId, "lookup_id_source"),
            "../../core/source/",
        ) else {
            panic!("first session did not open");
        };
        let ClickOutcome::Opened(second) = picker.click(
            &binding(TriggerKind::RawId, "lookup_id_category"),
            "../../core/category/",
        ) else {
            panic!("second session did not open");
        };

        assert!(!picker.choose(first, RecordChoice::new("1", "Stale")));
        assert!(picker.choose(second, RecordChoice::new("2", "Fresh")));
        assert!(!picker.choose(first, RecordChoice::new("1", "Stale")));
        assert_eq!(host.field("id_source").as_deref(), Some(""));
        assert_eq!(host.field("id_category").as_deref(), Some("2"));
    }

    #[test]
    fn test_dismiss_drops_callback() {
        let host = MockHost::default();
        let mut picker = picker(&host);
        let fired = Arc::new(Mutex::new(false));
        let flag = fired.clone();
        let token = picker
            .open_overlay(Category::new("core", "author"), move |_| {
                *flag.lock().unwrap() = true;
            })
            .unwrap();
        picker.dismiss();
        assert!(!picker.choose(token, RecordChoice::new("1", "Jane")));
        assert!(!*fired.lock().unwrap());
    }

    #[test]
    fn test_filters_route_back_into_overlay() {
        let host = MockHost::with_fields(&[("id_authors_suggest", "")]);
        let mut picker = picker(&host);
        picker.click(
            &binding(TriggerKind::Suggest, "lookup_id_authors"),
            "/admin/core/author/?pop",
        );
        picker.open_filters();
        assert_eq!(
            host.loads().last().unwrap(),
            &(
                "filters".to_string(),
                "/admin/core/author/filters/?pop".to_string()
            )
        );

        let panel = FilterPanel {
            groups: vec![FilterGroup {
                title: "By source".to_string(),
                links: vec![PageLink {
                    href: "?source=3".to_string(),
                    label: "Reuters".to_string(),
                    current: false,
                }],
            }],
        };
        assert!(picker.filters_loaded("/elsewhere/", &panel).is_none());
        let view = picker
            .filters_loaded("/admin/core/author/filters/?pop", &panel)
            .unwrap();
        let address = view.groups[0].1[0].address.clone().unwrap();
        picker.navigate(&address);
        assert_eq!(
            host.loads().last().unwrap(),
            &(
                "lupicka-overlay".to_string(),
                "/admin/core/author/?pop&source=3".to_string()
            )
        );
    }
}
