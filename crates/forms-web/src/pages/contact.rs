//! Contact Page

use forms_core::{present, ContactForm, FormController};
use leptos::{ev::SubmitEvent, prelude::*};

use crate::api;
use crate::components::{FeedbackMessage, SubmitButton};

type ContactController = FormController<ContactForm>;

#[component]
pub fn ContactPage() -> impl IntoView {
    let form = RwSignal::new(ContactController::new());
    let render = Memo::new(move |_| form.with(present));

    on_cleanup(move || {
        form.try_update(ContactController::teardown);
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(Ok(request)) = form.try_update(ContactController::begin_submit) else {
            return;
        };

        leptos::task::spawn_local(async move {
            let outcome = api::send_contact(request).await;
            form.try_update(|f| f.finish(outcome));
        });
    };

    view! {
        <div class="contact">
            <nav class="nav">
                <a href="/" class="logo">"🎙️ Billionets A.I"</a>
                <a href="/" class="btn">"← Back to Home"</a>
            </nav>

            <header class="hero">
                <h1>"Get in Touch"</h1>
                <p class="tagline">"Let's discuss how Billionets A.I can transform your business"</p>
            </header>

            <section class="contact-section">
                <div class="form-wrapper">
                    <h2>"Send us a Message"</h2>
                    <form class="form" on:submit=on_submit novalidate>
                        {text_field(form, "name", "Name", "text", "Your full name", true)}
                        {text_field(form, "email", "Email", "email", "your@email.com", true)}
                        {text_field(form, "phone", "Phone", "tel", "+1 (555) 000-0000", false)}
                        {text_field(form, "company", "Company", "text", "Your company name", false)}

                        <div class="form-group">
                            <label for="message">"Message *"</label>
                            <textarea
                                id="message"
                                name="message"
                                rows="6"
                                placeholder="Tell us about your project..."
                                prop:value=move || form.with(|f| f.input().get("message").to_string())
                                on:input=move |ev| {
                                    form.update(|f| f.update_field("message", event_target_value(&ev)));
                                }
                            />
                        </div>

                        <FeedbackMessage render=render />
                        <SubmitButton render=render />
                    </form>
                </div>

                <ContactInfo />
            </section>

            <footer class="footer">
                <p>"© 2025 Billionets A.I. All rights reserved."</p>
            </footer>
        </div>
    }
}

fn text_field(
    form: RwSignal<ContactController>,
    name: &'static str,
    label: &'static str,
    kind: &'static str,
    placeholder: &'static str,
    required: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=name>{label}{required.then_some(" *")}</label>
            <input
                id=name
                type=kind
                name=name
                placeholder=placeholder
                prop:value=move || form.with(|f| f.input().get(name).to_string())
                on:input=move |ev| {
                    form.update(|f| f.update_field(name, event_target_value(&ev)));
                }
            />
        </div>
    }
}

#[component]
fn ContactInfo() -> impl IntoView {
    view! {
        <aside class="contact-info">
            <h2>"Contact Information"</h2>
            <p>"Reach out to us directly or visit our office. We're here to help you succeed."</p>

            <div class="info-item">
                <h3>"Office"</h3>
                <p>"Billionets, Regal Tower, Business Bay, Dubai UAE"</p>
            </div>
            <div class="info-item">
                <h3>"Email"</h3>
                <a href="mailto:info@billionets.com">"info@billionets.com"</a>
            </div>
            <div class="info-item">
                <h3>"Phone"</h3>
                <a href="tel:+971543219060">"+971 543 219 060"</a>
            </div>
            <div class="info-item">
                <h3>"Business Hours"</h3>
                <p>"Sunday - Thursday, 9:00 AM - 6:00 PM GST"</p>
            </div>
        </aside>
    }
}
