use hmsync::content::{CONTACT_ANCHOR, FEATURES_ANCHOR, HERO_BADGE, HERO_DESCRIPTION, PRODUCT_NAME, TAGLINE};
use hmsync::scroll::HeroStyles;
use leptos::prelude::*;

use crate::browser::scroll_to;

/// Entry animation for the hero's stacked elements, staggered by `delay` seconds.
fn rise_in(delay: f32) -> String {
    format!("animation-delay: {delay:.1}s;")
}

#[component]
pub fn Hero(styles: Memo<HeroStyles>) -> impl IntoView {
    view! {
        <section class="hero">
            // Parallax backdrop
            <div class="hero-layer hero-gradient" style=move || styles.get().back_layer.to_css()></div>
            <div class="hero-layer hero-radial" style=move || styles.get().front_layer.to_css()></div>
            <div class="hero-grid-overlay"></div>

            <div class="hero-content container" style=move || styles.get().content.to_css()>
                <div class="hero-badge rise-in" style=rise_in(0.2)>
                    <span class="icon icon-sparkles"></span>
                    <span>{HERO_BADGE}</span>
                </div>
                <h1 class="hero-title gradient-text rise-in" style=rise_in(0.3)>
                    {PRODUCT_NAME}
                </h1>
                <p class="hero-tagline rise-in" style=rise_in(0.4)>{TAGLINE}</p>
                <p class="hero-description rise-in" style=rise_in(0.5)>{HERO_DESCRIPTION}</p>
                <div class="hero-actions rise-in" style=rise_in(0.6)>
                    <button
                        class="btn btn-primary btn-lg"
                        data-testid="button-request-demo"
                        on:click=move |_| scroll_to(CONTACT_ANCHOR)
                    >
                        "Request a Demo"
                        <span class="icon icon-arrow-right"></span>
                    </button>
                    <button
                        class="btn btn-outline btn-lg"
                        data-testid="button-explore-features"
                        on:click=move |_| scroll_to(FEATURES_ANCHOR)
                    >
                        "Explore Features"
                    </button>
                </div>
            </div>

            <ScrollIndicator />
        </section>
    }
}

#[component]
fn ScrollIndicator() -> impl IntoView {
    view! {
        <div class="scroll-indicator">
            <div class="scroll-indicator-frame">
                <div class="scroll-indicator-dot"></div>
            </div>
        </div>
    }
}
