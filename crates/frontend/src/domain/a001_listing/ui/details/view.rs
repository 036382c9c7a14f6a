use super::view_model::{
    ListingDetailsViewModel, AUTHORS_FIELD, CATEGORY_FIELD, SOURCE_FIELD, TARGET_CT_FIELD,
    TARGET_ID_FIELD,
};
use crate::shared::icons::icon;
use crate::shared::lookup::{
    ContentTypeSelect, LookupInput, LookupOverlayService, LookupTrigger, SuggestField,
};
use contracts::shared::lookup::TriggerKind;
use leptos::prelude::*;

#[component]
pub fn ListingDetails() -> impl IntoView {
    let vm = ListingDetailsViewModel::new();
    let svc = use_context::<LookupOverlayService>()
        .expect("LookupOverlayService not provided in context (provide it in app root)");
    let config = svc.config();
    let lookup_id = |field: &str| format!("{}{}", config.trigger_prefix, field);
    let suggest_suffix = config.suggest_suffix.clone();

    view! {
        <div class="details-container listing-details">
            <div class="details-header">
                <h3>"Listing"</h3>
            </div>

            {
                let vm = vm.clone();
                move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })
            }

            <div class="details-form">
                <div class="form-group">
                    <label for=CATEGORY_FIELD>"Category"</label>
                    <LookupInput id=CATEGORY_FIELD />
                    <LookupTrigger
                        kind=TriggerKind::RawId
                        trigger_id=lookup_id(CATEGORY_FIELD)
                        href="../../core/category/?pop"
                    />
                </div>

                <div class="form-group">
                    <label for=SOURCE_FIELD>"Source"</label>
                    <LookupInput id=SOURCE_FIELD />
                    <LookupTrigger
                        kind=TriggerKind::RawId
                        trigger_id=lookup_id(SOURCE_FIELD)
                        href="../../core/source/?pop"
                    />
                </div>

                <div class="form-group">
                    <label>"Authors"</label>
                    <SuggestField id=AUTHORS_FIELD multiple=true />
                    <LookupTrigger
                        kind=TriggerKind::Suggest
                        trigger_id=lookup_id(AUTHORS_FIELD)
                        href="../../core/author/?pop"
                    />
                </div>

                <div class="form-group">
                    <label for=TARGET_CT_FIELD>"Target"</label>
                    <ContentTypeSelect id=TARGET_CT_FIELD />
                    <LookupInput id=TARGET_ID_FIELD />
                    <LookupTrigger kind=TriggerKind::Generic trigger_id=lookup_id(TARGET_ID_FIELD) />
                </div>
            </div>

            <div class="details-actions">
                <button
                    class="btn btn-primary"
                    on:click={
                        let vm = vm.clone();
                        move |_| vm.save_command(&suggest_suffix)
                    }
                >
                    {icon("save")}
                    " Save"
                </button>
            </div>

            {
                let vm = vm.clone();
                move || vm.saved.get().map(|json| view! { <pre class="details-saved">{json}</pre> })
            }
        </div>
    }
}
