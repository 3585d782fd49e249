//! Contact Section Component
//!
//! Validated contact form. Submission is simulated; the success message
//! stays up for a few seconds.

use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::context::use_app_context;
use crate::forms::{validate_contact, Field, FieldErrors};
use crate::sound::SoundType;

const SUBMIT_DELAY_MS: u32 = 1500;
const SUCCESS_VISIBLE: Duration = Duration::from_secs(5);

#[component]
pub fn ContactSection() -> impl IntoView {
    let ctx = use_app_context();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let found = validate_contact(&name.get_untracked(), &email.get_untracked(), &message.get_untracked());
        if !found.is_empty() {
            set_errors.set(found);
            ctx.play(SoundType::Beep);
            return;
        }
        set_errors.set(FieldErrors::default());
        set_submitting.set(true);
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            info!("contact message sent");
            set_submitting.set(false);
            set_submitted.set(true);
            set_name.set(String::new());
            set_email.set(String::new());
            set_message.set(String::new());
            ctx.celebrate();
            set_timeout(move || set_submitted.set(false), SUCCESS_VISIBLE);
        });
    };

    let error_for = move |field: Field| {
        move || errors.with(|e| e.get(field)).map(|msg| view! { <p class="field-error">{msg}</p> })
    };
    let input_class = move |field: Field| {
        move || if errors.with(|e| e.get(field).is_some()) { "input error" } else { "input" }
    };

    view! {
        <section id="contact" class="contact-section">
            <div class="section-header">
                <h2>"📬 Get In Touch"</h2>
                <p>"Have questions or suggestions? We'd love to hear from you!"</p>
            </div>
            <Show
                when=move || submitted.get()
                fallback=move || view! {
                    <form class="contact-form" on:submit=submit novalidate=true>
                        <label for="contact-name">"Name (aka travel legend)"</label>
                        <input
                            id="contact-name"
                            type="text"
                            placeholder="Your awesome name"
                            class=input_class(Field::Name)
                            prop:value=move || name.get()
                            on:input=move |ev| {
                                set_name.set(event_target_value(&ev));
                                set_errors.update(|e| e.clear(Field::Name));
                            }
                        />
                        {error_for(Field::Name)}

                        <label for="contact-email">"Email (for travel tips)"</label>
                        <input
                            id="contact-email"
                            type="email"
                            placeholder="your.email@example.com"
                            class=input_class(Field::Email)
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                set_email.set(event_target_value(&ev));
                                set_errors.update(|e| e.clear(Field::Email));
                            }
                        />
                        {error_for(Field::Email)}

                        <label for="contact-message">"Message (travel stories welcome!)"</label>
                        <textarea
                            id="contact-message"
                            rows="5"
                            placeholder="Tell us what's on your mind..."
                            class=input_class(Field::Message)
                            prop:value=move || message.get()
                            on:input=move |ev| {
                                set_message.set(event_target_value(&ev));
                                set_errors.update(|e| e.clear(Field::Message));
                            }
                        ></textarea>
                        {error_for(Field::Message)}

                        <button type="submit" class="btn-primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Sending..." } else { "Send Message ✉️" }}
                        </button>
                    </form>
                }
            >
                <div class="contact-success">
                    <div class="success-icon">"✓"</div>
                    <h3>"Message Sent!"</h3>
                    <p>"We'll get back to you faster than a jet! ✈️"</p>
                    <button type="button" class="btn-secondary" on:click=move |_| set_submitted.set(false)>
                        "Send Another Message"
                    </button>
                </div>
            </Show>
        </section>
    }
}
