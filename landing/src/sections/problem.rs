use hmsync::content::{HMSYNC_APPROACH, PRODUCT_NAME, TRADITIONAL_PAIN_POINTS};
use leptos::prelude::*;

use super::Reveal;

#[component]
pub fn ProblemSolution() -> impl IntoView {
    let approach_title = format!("{PRODUCT_NAME} Approach");

    view! {
        <section class="section section-muted">
            <div class="container">
                <Reveal class="section-header">
                    <h2 class="section-title">"Hospital Management Simplified"</h2>
                    <p class="section-description">
                        "Stop struggling with outdated systems, fragmented workflows, and limited control. "
                        {PRODUCT_NAME}
                        " brings everything together in one powerful, customizable platform."
                    </p>
                </Reveal>
                <div class="comparison-grid">
                    <Reveal>
                        <div class="card comparison-card comparison-bad">
                            <h3 class="comparison-title">"Traditional Systems"</h3>
                            <ul class="comparison-list">
                                {TRADITIONAL_PAIN_POINTS
                                    .iter()
                                    .map(|point| view! {
                                        <li>
                                            <span class="bullet-dot"></span>
                                            <span>{*point}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </Reveal>
                    <Reveal>
                        <div class="card comparison-card comparison-good">
                            <h3 class="comparison-title">{approach_title}</h3>
                            <ul class="comparison-list">
                                {HMSYNC_APPROACH
                                    .iter()
                                    .map(|point| view! {
                                        <li>
                                            <span class="icon icon-check-circle"></span>
                                            <span>{*point}</span>
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}
