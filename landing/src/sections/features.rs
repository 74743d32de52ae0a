use hmsync::content::{FEATURES, FEATURES_ANCHOR, FeatureDescriptor};
use leptos::prelude::*;

use super::Reveal;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id=FEATURES_ANCHOR class="section">
            <div class="container container-wide">
                <Reveal class="section-header">
                    <h2 class="section-title">"Everything You Need, All in One Place"</h2>
                    <p class="section-description">
                        "Comprehensive features designed for complete hospital management"
                    </p>
                </Reveal>
                <div class="features-grid">
                    {FEATURES
                        .iter()
                        .enumerate()
                        .map(|(index, feature)| view! { <FeatureCard index=index feature=*feature /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(index: usize, feature: FeatureDescriptor) -> impl IntoView {
    let test_id = format!("card-feature-{index}");

    view! {
        <Reveal>
            <article class="card feature-card hover-lift" data-testid=test_id>
                <div class=feature.color_theme.class()>
                    <span class=feature.icon.class()></span>
                </div>
                <h3 class="card-title">{feature.title}</h3>
                <p class="card-description">{feature.description}</p>
            </article>
        </Reveal>
    }
}
