use super::picker::{FilterView, NavLink, OverlayView};
use super::service::LookupOverlayService;
use crate::shared::icons::icon;
use crate::shared::modal_frame::PopFrame;
use leptos::ev;
use leptos::prelude::*;

/// Renders the shared lookup overlay. Mount exactly once, at the application root.
#[component]
pub fn LookupOverlayHost() -> impl IntoView {
    let svc = use_context::<LookupOverlayService>()
        .expect("LookupOverlayService not provided in context (provide it in app root)");
    let config = svc.config();
    let overlay_id = StoredValue::new(config.overlay_target);
    let filters_id = StoredValue::new(config.filters_target);

    view! {
        <Show when=move || svc.is_visible()>
            <PopFrame dom_id=overlay_id.get_value() on_close=Callback::new(move |_| svc.dismiss())>
                <div class="pop-header">
                    <h3 class="pop-title">
                        {move || {
                            svc.listing()
                                .and_then(|l| {
                                    l.title.or_else(|| l.category.map(|c| format!("Select {}", c.model)))
                                })
                                .unwrap_or_else(|| "Select".to_string())
                        }}
                    </h3>
                    <button class="button button--icon" title="Close" on:click=move |_| svc.dismiss()>
                        {icon("x")}
                    </button>
                </div>

                {move || svc.error().map(|e| view! { <div class="pop-error">{e}</div> })}
                {move || svc.is_loading().then(|| view! { <div class="pop-loading">"Loading..."</div> })}
                {move || svc.listing().map(|listing| listing_view(svc, listing))}
                {move || svc.filters().map(|filters| filters_view(svc, filters, filters_id.get_value()))}
            </PopFrame>
        </Show>
    }
}

fn listing_view(svc: LookupOverlayService, listing: OverlayView) -> impl IntoView {
    let token = listing.token;
    let has_filters = listing.has_filters;

    view! {
        <div class="pop-body">
            {has_filters.then(|| view! {
                <a
                    href="#"
                    class="popup-filter"
                    on:click=move |ev: ev::MouseEvent| {
                        ev.prevent_default();
                        svc.open_filters();
                    }
                >
                    {icon("filter")}
                    " Filters"
                </a>
            })}

            {if listing.rows.is_empty() {
                view! { <div class="pop-empty">"Nothing found"</div> }.into_any()
            } else {
                view! {
                    <table class="pop-listing">
                        <tbody>
                            {listing.rows.into_iter().map(|row| {
                                let href = row.href.clone();
                                let label = row.label.clone();
                                view! {
                                    <tr>
                                        <th>
                                            <a
                                                href=href
                                                on:click=move |ev: ev::MouseEvent| {
                                                    ev.prevent_default();
                                                    svc.choose(token, &row);
                                                }
                                            >
                                                {label}
                                            </a>
                                        </th>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_any()
            }}

            <div class="paginator">
                {listing.paginator.into_iter().map(|link| nav_link_view(svc, link)).collect_view()}
            </div>
        </div>
    }
}

fn filters_view(svc: LookupOverlayService, filters: FilterView, dom_id: String) -> impl IntoView {
    view! {
        <div id=dom_id class="pop-filters">
            <div class="pop-filters__header">
                <span>"Filters"</span>
                <button class="button button--icon" title="Close filters" on:click=move |_| svc.close_filters()>
                    {icon("x")}
                </button>
            </div>
            {filters.groups.into_iter().map(|(title, links)| view! {
                <div class="filter">
                    <h4>{title}</h4>
                    <ul>
                        {links.into_iter().map(|link| view! { <li>{nav_link_view(svc, link)}</li> }).collect_view()}
                    </ul>
                </div>
            }).collect_view()}
        </div>
    }
}

fn nav_link_view(svc: LookupOverlayService, link: NavLink) -> AnyView {
    let class = if link.current { "simpleload this-page" } else { "simpleload" };
    match link.address {
        Some(address) => view! {
            <a
                href="#"
                class=class
                on:click=move |ev: ev::MouseEvent| {
                    ev.prevent_default();
                    svc.navigate(address.clone());
                }
            >
                {link.label}
            </a>
        }
        .into_any(),
        None => view! { <span class=class>{link.label}</span> }.into_any(),
    }
}
