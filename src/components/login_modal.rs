//! Login Modal Component
//!
//! Demo sign-in form. Nothing is sent anywhere; a short delay stands in for
//! the request.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::info;

use crate::components::Modal;
use crate::context::use_app_context;
use crate::forms::{validate_login, Field, FieldErrors, SubmitGeneration};
use crate::sound::SoundType;

const SUBMIT_DELAY_MS: u32 = 1500;

#[component]
pub fn LoginModal() -> impl IntoView {
    let ctx = use_app_context();
    let open = ctx.login_open;

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (loading, set_loading) = signal(false);
    let generation = StoredValue::new(SubmitGeneration::default());

    // Opening or closing abandons any pending submit
    Effect::new(move |_| {
        let is_open = open.get();
        generation.update_value(|g| {
            g.bump();
        });
        if is_open {
            set_errors.set(FieldErrors::default());
            set_loading.set(false);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let found = validate_login(&email.get_untracked(), &password.get_untracked());
        if !found.is_empty() {
            set_errors.set(found);
            ctx.play(SoundType::Beep);
            return;
        }
        set_loading.set(true);
        ctx.play(SoundType::Click);
        let mut ticket = 0;
        generation.update_value(|g| ticket = g.bump());
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            let current = generation
                .try_with_value(|g| g.is_current(ticket))
                .unwrap_or(false);
            if !current {
                return;
            }
            info!("demo sign-in finished");
            set_loading.set(false);
            set_password.set(String::new());
            open.set(false);
        });
    };

    let error_for = move |field: Field| move || errors.with(|e| e.get(field));

    view! {
        <Modal open=open title="Log in" class="login-modal">
            <div class="login-header">
                <div class="login-icon">"🧳"</div>
                <h3>"Welcome Back!"</h3>
                <p>"Sign in to access your packing lists"</p>
            </div>
            <form class="login-form" on:submit=submit novalidate=true>
                <label for="login-email">"Email"</label>
                <input
                    id="login-email"
                    type="email"
                    placeholder="your.email@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        set_email.set(event_target_value(&ev));
                        set_errors.update(|e| e.clear(Field::Email));
                    }
                />
                {move || error_for(Field::Email)().map(|msg| view! { <p class="field-error">{msg}</p> })}

                <label for="login-password">"Password"</label>
                <input
                    id="login-password"
                    type="password"
                    placeholder="••••••••"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        set_password.set(event_target_value(&ev));
                        set_errors.update(|e| e.clear(Field::Password));
                    }
                />
                {move || error_for(Field::Password)().map(|msg| view! { <p class="field-error">{msg}</p> })}

                <button type="submit" class="btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                </button>
                <a href="#" class="login-link">"Forgot your password?"</a>
            </form>
            <p class="login-footer">
                "Don't have an account? " <a href="#" class="login-link">"Sign up"</a>
            </p>
        </Modal>
    }
}
