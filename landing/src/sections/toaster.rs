use std::time::Duration;

use hmsync::notify::{Toast, ToastQueue};
use leptos::prelude::*;

use crate::browser;

const TICK: Duration = Duration::from_millis(250);

/// Fixed overlay that renders the visible toasts and drives their expiry.
#[component]
pub fn Toaster(toasts: RwSignal<ToastQueue>) -> impl IntoView {
    // Ticks that expire nothing leave the view alone.
    match set_interval_with_handle(
        move || {
            let expired = toasts
                .try_update_untracked(|queue| queue.tick(browser::now()))
                .unwrap_or_default();
            if !expired.is_empty() {
                toasts.notify();
            }
        },
        TICK,
    ) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(_) => web_sys::console::warn_1(&wasm_bindgen::JsValue::from_str("toast timer unavailable")),
    }

    let visible = move || toasts.with(|queue| queue.visible().cloned().collect::<Vec<_>>());

    view! {
        <div class="toaster" role="status" aria-live="polite">
            {move || {
                visible()
                    .into_iter()
                    .map(|toast| view! { <ToastCard toast=toast toasts=toasts /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast, toasts: RwSignal<ToastQueue>) -> impl IntoView {
    let id = toast.id;
    let test_id = format!("toast-{}", id.get());

    view! {
        <div class="toast" data-testid=test_id>
            <div class="toast-body">
                <div class="toast-title">{toast.title}</div>
                <div class="toast-description">{toast.description}</div>
            </div>
            <button
                class="toast-close"
                aria-label="Close"
                on:click=move |_| {
                    toasts.update(|queue| {
                        queue.dismiss(id);
                    });
                }
            >
                "×"
            </button>
        </div>
    }
}
