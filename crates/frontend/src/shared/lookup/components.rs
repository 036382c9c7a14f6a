use super::fields::{use_registered_field, FieldHandle, FieldRegistry};
use super::service::LookupOverlayService;
use crate::shared::icons::icon;
use contracts::shared::lookup::{TriggerBinding, TriggerKind};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

fn use_overlay_service() -> LookupOverlayService {
    use_context::<LookupOverlayService>()
        .expect("LookupOverlayService not provided in context (provide it in app root)")
}

fn field_class(
    base: &'static str,
    field: FieldHandle,
    highlighted_class: String,
) -> impl Fn() -> String + Send + Sync + 'static {
    move || {
        if field.highlighted.get() {
            format!("{base} {highlighted_class}")
        } else {
            base.to_string()
        }
    }
}

/// Lookup icon next to a form field.
///
/// The target field(s) are derived from `trigger_id` once, when the trigger is built;
/// the icon is marked unbound while any of them is missing from the page.
#[component]
pub fn LookupTrigger(
    kind: TriggerKind,
    #[prop(into)]
    trigger_id: String,
    /// Listing link (`../../core/author/?pop`); unused by generic lookups.
    #[prop(optional, into)]
    href: String,
) -> impl IntoView {
    let svc = use_overlay_service();
    let fields = use_context::<FieldRegistry>()
        .expect("FieldRegistry not provided in context (provide it in app root)");

    let binding = match TriggerBinding::derive(kind, &trigger_id, &svc.config()) {
        Ok(binding) => Some(binding),
        Err(e) => {
            log::warn!("{}", e);
            None
        }
    };
    let binding = StoredValue::new(binding);

    let bound = Memo::new(move |_| {
        binding.with_value(|b| {
            b.as_ref()
                .map(|b| b.field_ids().into_iter().all(|id| fields.contains(id)))
                .unwrap_or(false)
        })
    });

    let href_for_click = href.clone();
    let trigger_for_click = trigger_id.clone();
    let on_click = move |ev: ev::MouseEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        match binding.get_value() {
            Some(binding) => {
                svc.click(&binding, &href_for_click);
            }
            None => log::warn!("Lookup trigger #{} has no usable binding", trigger_for_click),
        }
    };

    let class = move || {
        if bound.get() {
            format!("{} lookup-trigger", kind.css_class())
        } else {
            format!("{} lookup-trigger lookup-trigger--unbound", kind.css_class())
        }
    };

    view! {
        <a id=trigger_id href=href class=class title="Lookup" on:click=on_click>
            {icon("search")}
        </a>
    }
}

/// Text input registered as a lookup target.
#[component]
pub fn LookupInput(
    #[prop(into)]
    id: String,
    #[prop(optional, into)]
    value: String,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let svc = use_overlay_service();
    let field = FieldHandle::new(value);
    use_registered_field(&id, field);

    let node = NodeRef::<html::Input>::new();
    Effect::new(move |_| {
        if field.focus_requests() > 0 {
            if let Some(input) = node.get() {
                let _ = input.focus();
            }
        }
    });

    view! {
        <input
            node_ref=node
            id=id.clone()
            name=id
            type="text"
            class=field_class("vForeignKeyRawIdAdminField", field, svc.config().highlighted_class)
            placeholder=placeholder
            prop:value=move || field.value.get()
            on:input=move |ev| field.value.set(event_target_value(&ev))
            on:change=move |_| field.notify_changed()
        />
    }
}

/// Content-type select of a generic relation, filled from the page's content types.
#[component]
pub fn ContentTypeSelect(
    #[prop(into)]
    id: String,
    #[prop(optional, into)]
    value: String,
) -> impl IntoView {
    let svc = use_overlay_service();
    let field = FieldHandle::new(value);
    use_registered_field(&id, field);

    let node = NodeRef::<html::Select>::new();
    Effect::new(move |_| {
        if field.focus_requests() > 0 {
            if let Some(select) = node.get() {
                let _ = select.focus();
            }
        }
    });

    let choices = svc.registry().choices();

    view! {
        <select
            node_ref=node
            id=id.clone()
            name=id
            class=field_class("vContentTypeField", field, svc.config().highlighted_class)
            prop:value=move || field.value.get()
            on:change=move |ev| {
                field.value.set(event_target_value(&ev));
                field.notify_changed();
            }
        >
            <option value="">"---------"</option>
            {choices.into_iter().map(|(ct_id, label)| view! {
                <option value=ct_id>{label}</option>
            }).collect_view()}
        </select>
    }
}

/// Suggester input: chosen records are shown as removable chips and submitted as
/// comma-joined ids under `id`.
///
/// The lookup target is the visible `<id><suggest_suffix>` input.
#[component]
pub fn SuggestField(
    #[prop(into)]
    id: String,
    #[prop(optional)]
    multiple: bool,
) -> impl IntoView {
    let svc = use_overlay_service();
    let input_id = format!("{}{}", id, svc.config().suggest_suffix);
    let field = FieldHandle::suggester(multiple);
    use_registered_field(&input_id, field);

    let Some(selection) = field.suggest else {
        return view! { <></> }.into_any();
    };

    let remove = move |choice_id: String| {
        let mut ids = None;
        selection.update(|s| {
            if s.remove(&choice_id) {
                ids = Some(s.ids_value());
            }
        });
        if let Some(ids) = ids {
            field.value.set(ids);
        }
    };

    view! {
        <div class="suggest-field">
            <ul class="suggest-field__values">
                <For
                    each=move || selection.get().values
                    key=|choice| choice.id.clone()
                    children=move |choice| {
                        let choice_id = choice.id.clone();
                        view! {
                            <li class="suggest-field__value">
                                <span>{choice.label}</span>
                                <button
                                    class="button button--icon"
                                    title="Remove"
                                    on:click=move |_| remove(choice_id.clone())
                                >
                                    {icon("x")}
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <input id=input_id type="text" class="suggest-field__input" autocomplete="off" />
            <input type="hidden" name=id prop:value=move || field.value.get() />
        </div>
    }
    .into_any()
}
