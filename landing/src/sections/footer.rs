use hmsync::content::{
    CONTACT_ANCHOR, CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, FEATURES_ANCHOR, FOOTER_BLURB, PRODUCT_NAME,
    TAGLINE,
};
use leptos::prelude::*;

use crate::browser::{current_year, scroll_to};

#[component]
pub fn Footer() -> impl IntoView {
    let copyright = format!("© {} {PRODUCT_NAME}. All rights reserved.", current_year());

    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <h3 class="footer-title gradient-text">{PRODUCT_NAME}</h3>
                        <p class="footer-blurb">{FOOTER_BLURB}</p>
                        <p class="footer-tagline">{TAGLINE}</p>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Quick Links"</h4>
                        <ul class="footer-links">
                            <li>
                                <button
                                    class="footer-link"
                                    data-testid="link-features"
                                    on:click=move |_| scroll_to(FEATURES_ANCHOR)
                                >
                                    "Features"
                                </button>
                            </li>
                            <li>
                                <button
                                    class="footer-link"
                                    data-testid="link-contact"
                                    on:click=move |_| scroll_to(CONTACT_ANCHOR)
                                >
                                    "Contact"
                                </button>
                            </li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="footer-heading">"Contact"</h4>
                        <ul class="footer-contact">
                            <li>{CONTACT_EMAIL}</li>
                            <li>{CONTACT_PHONE}</li>
                            <li>{CONTACT_LOCATION}</li>
                        </ul>
                    </div>
                </div>

                <p class="footer-copyright">{copyright}</p>
            </div>
        </footer>
    }
}
