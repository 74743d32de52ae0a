//! Thin wrappers over the browser APIs the page touches.

use std::time::Duration;

use hmsync::scroll::ScrollProgress;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Time since page load, from `performance.now()`.
pub fn now() -> Duration {
    let ms = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0);
    if ms.is_finite() && ms > 0.0 {
        Duration::from_secs_f64(ms / 1000.0)
    } else {
        Duration::ZERO
    }
}

pub fn viewport_height() -> Option<f64> {
    web_sys::window()?.inner_height().ok()?.as_f64()
}

fn read_scroll_progress() -> ScrollProgress {
    let Some(window) = web_sys::window() else {
        return ScrollProgress::START;
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|el| f64::from(el.scroll_height()))
        .unwrap_or(0.0);
    let viewport = viewport_height().unwrap_or(scroll_height);
    ScrollProgress::from_viewport(scroll_y, scroll_height, viewport)
}

/// Page scroll progress, recomputed on every scroll and resize.
pub fn use_scroll_progress() -> ReadSignal<ScrollProgress> {
    let (progress, set_progress) = signal(read_scroll_progress());

    let on_scroll = window_event_listener(ev::scroll, move |_| {
        set_progress.set(read_scroll_progress());
    });
    let on_resize = window_event_listener(ev::resize, move |_| {
        set_progress.set(read_scroll_progress());
    });
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });

    progress
}

/// Smooth-scroll the element with `id` into view.
pub fn scroll_to(id: &str) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Set `scroll-behavior` on the document root.
pub fn set_scroll_behavior(value: &str) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(root) = root {
        let _ = root.style().set_property("scroll-behavior", value);
    }
}

pub fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|mq| mq.matches())
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
