//! Greeting for visitors who open the developer console.

use hmsync::content::{CONTACT_EMAIL, PRODUCT_NAME, TAGLINE};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn ascii_logo() -> String {
    format!(
        r#"
  _   _ __  __ ____
 | | | |  \/  / ___| _   _ _ __   ___
 | |_| | |\/| \___ \| | | | '_ \ / __|
 |  _  | |  | |___) | |_| | | | | (__
 |_| |_|_|  |_|____/ \__, |_| |_|\___|
                     |___/
  {TAGLINE}
  v{VERSION}
"#
    )
}

fn styled(text: &str, css: &str) {
    web_sys::console::log_2(&JsValue::from_str(&format!("%c{text}")), &JsValue::from_str(css));
}

/// Print the banner once on mount. Renders nothing.
#[component]
#[allow(clippy::unused_unit)]
pub fn ConsoleBanner() -> impl IntoView {
    Effect::new(move || {
        styled(&ascii_logo(), "color: #6366f1; font-family: monospace; font-size: 11px;");
        styled(
            &format!("{PRODUCT_NAME} is built with Rust + Leptos."),
            "color: #a855f7; font-weight: bold;",
        );
        styled(
            &format!("Curious how it works? Talk to us: {CONTACT_EMAIL}"),
            "color: #888;",
        );
    });

    view! {}
}
