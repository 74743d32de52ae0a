use hmsync::theme::{STORAGE_KEY, Theme};
use leptos::prelude::*;

use crate::browser;

fn stored_theme() -> Theme {
    let stored = browser::local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
    Theme::from_storage(stored.as_deref())
}

/// Swap the `light`/`dark` class on `<html>`.
fn apply(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let classes = root.class_list();
    let _ = classes.remove_2(Theme::Light.as_str(), Theme::Dark.as_str());
    let _ = classes.add_1(theme.resolve(browser::prefers_dark()).as_str());
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = RwSignal::new(stored_theme());

    Effect::new(move |_| {
        let current = theme.get();
        apply(current);
        if let Some(storage) = browser::local_storage() {
            let _ = storage.set_item(STORAGE_KEY, current.as_str());
        }
    });

    let is_dark = move || theme.get().resolve(browser::prefers_dark()) == Theme::Dark;

    view! {
        <button
            class="btn btn-ghost theme-toggle"
            data-testid="button-theme-toggle"
            aria-label=move || if is_dark() { "Switch to light theme" } else { "Switch to dark theme" }
            on:click=move |_| theme.update(|t| *t = t.toggled(browser::prefers_dark()))
        >
            <span class=move || if is_dark() { "icon icon-sun" } else { "icon icon-moon" }></span>
        </button>
    }
}
