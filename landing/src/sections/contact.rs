use hmsync::content::{CONTACT_ANCHOR, CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, ColorTheme};
use hmsync::contact::{ContactField, ContactForm};
use hmsync::notify::ToastQueue;
use leptos::ev;
use leptos::prelude::*;

use super::Reveal;
use crate::browser;

#[component]
pub fn ContactSection(toasts: RwSignal<ToastQueue>) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let now = browser::now();
        toasts.update(|queue| {
            // the queue clock must be current before a toast is pushed
            queue.tick(now);
            form.update(|form| {
                form.submit(queue);
            });
        });
    };

    view! {
        <section id=CONTACT_ANCHOR class="section section-muted">
            <div class="container">
                <Reveal class="section-header">
                    <h2 class="section-title">"Request Your Custom Solution"</h2>
                    <p class="section-description">
                        "Tell us about your hospital and we'll create a tailored solution just for you"
                    </p>
                </Reveal>

                <div class="contact-grid">
                    <Reveal class="contact-info">
                        <ContactDetail icon="icon icon-mail" label="Email" value=CONTACT_EMAIL />
                        <ContactDetail icon="icon icon-phone" label="Phone" value=CONTACT_PHONE />
                        <ContactDetail icon="icon icon-map-pin" label="Location" value=CONTACT_LOCATION />
                        <div class="card contact-promise">
                            <h4>"Quick Response"</h4>
                            <p>"Our team typically responds within 24 hours. We'll schedule a personalized demo at your convenience."</p>
                        </div>
                    </Reveal>

                    <Reveal class="contact-form-slot">
                        <form class="card contact-form" novalidate=true on:submit=on_submit>
                            <div class="form-row">
                                <FormField field=ContactField::Name form=form />
                                <FormField field=ContactField::Email form=form />
                            </div>
                            <div class="form-row">
                                <FormField field=ContactField::HospitalName form=form />
                                <FormField field=ContactField::Phone form=form />
                            </div>
                            <FormField field=ContactField::Message form=form />
                            <button type="submit" class="btn btn-primary btn-lg btn-block" data-testid="button-submit-contact">
                                "Submit Request"
                                <span class="icon icon-arrow-right"></span>
                            </button>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactDetail(icon: &'static str, label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="contact-detail">
            <div class=ColorTheme::BluePurple.class()>
                <span class=icon></span>
            </div>
            <div>
                <h4 class="contact-detail-label">{label}</h4>
                <p class="contact-detail-value">{value}</p>
            </div>
        </div>
    }
}

/// Labelled input bound to one field of the form, with its inline error.
#[component]
fn FormField(field: ContactField, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|form| form.value(field).to_owned());
    let error = move || form.with(|form| form.error(field));
    let invalid = move || error().is_some().to_string();
    let on_input = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        form.update(|form| form.set(field, value));
    };

    let control = if field == ContactField::Message {
        view! {
            <textarea
                id=field.key()
                name=field.key()
                class="form-control"
                rows="5"
                placeholder=field.placeholder()
                data-testid=field.test_id()
                aria-invalid=invalid
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=field.key()
                name=field.key()
                class="form-control"
                type=field.input_type()
                placeholder=field.placeholder()
                data-testid=field.test_id()
                aria-invalid=invalid
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class="form-field">
            <label for=field.key()>{field.label()}</label>
            {control}
            {move || error().map(|message| view! { <p class="form-error">{message}</p> })}
        </div>
    }
}
