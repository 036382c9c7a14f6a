use crate::domain::a001_listing::ui::ListingDetails;
use crate::shared::lookup::page_globals;
use crate::shared::lookup::{FieldRegistry, LookupOverlayHost, LookupOverlayService};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = page_globals::load_config();
    let registry = page_globals::load_content_types();

    // Form fields register here; lookup triggers resolve their targets against it.
    let fields = FieldRegistry::new();
    provide_context(fields);

    // Single shared overlay for every lookup on the page.
    provide_context(LookupOverlayService::new(config, registry, fields));

    view! {
        <ListingDetails />
        <LookupOverlayHost />
    }
}
