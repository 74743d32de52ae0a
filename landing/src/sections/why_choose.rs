use hmsync::content::{CONTACT_ANCHOR, PRODUCT_NAME, WHY_CHOOSE};
use hmsync::scroll::HeroStyles;
use leptos::prelude::*;

use super::Reveal;
use crate::browser::scroll_to;

#[component]
pub fn WhyChoose(styles: Memo<HeroStyles>) -> impl IntoView {
    let title = format!("Why Choose {PRODUCT_NAME}?");

    view! {
        <section class="section section-parallax">
            // Same layer mapping as the hero backdrop
            <div class="parallax-backdrop" style=move || styles.get().back_layer.to_css()></div>

            <div class="container layered">
                <Reveal class="section-header">
                    <h2 class="section-title">{title}</h2>
                    <p class="section-description">"Built with your hospital's unique needs in mind"</p>
                </Reveal>

                <div class="value-grid">
                    {WHY_CHOOSE
                        .iter()
                        .map(|item| view! {
                            <Reveal>
                                <div class="card value-card hover-grow">
                                    <div class=item.color_theme.class()>
                                        <span class=item.icon.class()></span>
                                    </div>
                                    <div>
                                        <h3 class="card-title">{item.title}</h3>
                                        <p class="card-description">{item.description}</p>
                                    </div>
                                </div>
                            </Reveal>
                        })
                        .collect_view()}
                </div>

                <Reveal class="quote-slot">
                    <div class="card quote-card">
                        <h3 class="quote-title">"No Fixed Pricing. No Hidden Costs."</h3>
                        <p class="quote-description">
                            "Every hospital is different. That's why we create custom solutions tailored to your size, "
                            "specialty, and workflow. Contact us for a personalized quote."
                        </p>
                        <button
                            class="btn btn-primary btn-lg"
                            data-testid="button-get-quote"
                            on:click=move |_| scroll_to(CONTACT_ANCHOR)
                        >
                            "Get Your Custom Quote"
                            <span class="icon icon-arrow-right"></span>
                        </button>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}
