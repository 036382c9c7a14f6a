use leptos::ev;
use leptos::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

/// Popup frame (overlay + positioned surface) used by the lookup overlay.
///
/// Escape and a full click on the backdrop both call `on_close`.
#[component]
pub fn PopFrame(
    /// DOM id of the popup surface (the content target name).
    #[prop(into)]
    dom_id: String,
    /// Called when the popup should close without a choice.
    on_close: Callback<()>,
    /// z-index of the backdrop (default: 1100, above regular modals).
    #[prop(optional)]
    z_index: Option<i32>,
    children: Children,
) -> impl IntoView {
    let z_index = z_index.unwrap_or(1100);
    let backdrop_mouse_down = RwSignal::new(false);

    let close_next_tick = move || {
        // Closing synchronously would drop the handler that is being dispatched.
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            close_next_tick();
        }
    });
    on_cleanup(move || escape.remove());

    let is_direct = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Press and release must both land on the backdrop, so selecting text inside
    // the popup and releasing outside does not close it.
    let handle_mouse_down = move |ev: ev::MouseEvent| {
        backdrop_mouse_down.set(is_direct(&ev));
    };

    let handle_click = move |ev: ev::MouseEvent| {
        let should_close = backdrop_mouse_down.get_untracked() && is_direct(&ev);
        backdrop_mouse_down.set(false);
        if should_close {
            close_next_tick();
        }
    };

    view! {
        <div
            class="modal-overlay pop-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_mouse_down
            on:click=handle_click
        >
            <div id=dom_id class="modal pop" style="position: relative;">
                {children()}
            </div>
        </div>
    }
}
