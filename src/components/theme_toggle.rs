//! Theme and Sound Toggle Components

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_app_context();
    let is_dark = move || ctx.config.with(|c| c.theme.theme.is_dark());

    view! {
        <button
            type="button"
            class="icon-btn theme-toggle"
            title="Toggle theme"
            on:click=move |_| ctx.toggle_theme()
        >
            <span class="sr-only">"Toggle theme"</span>
            {move || if is_dark() { "🌙" } else { "☀️" }}
        </button>
    }
}

#[component]
pub fn SoundToggle() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <button
            type="button"
            class="icon-btn sound-toggle"
            title=move || if ctx.sound_enabled() { "Mute sounds" } else { "Enable sounds" }
            on:click=move |_| ctx.toggle_sound()
        >
            {move || if ctx.sound_enabled() { "🔊" } else { "🔇" }}
        </button>
    }
}
