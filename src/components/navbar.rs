//! Navbar Component
//!
//! Fixed header with section links, toggles and the modal buttons. Turns
//! opaque once the page is scrolled.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{SoundToggle, ThemeToggle};
use crate::context::use_app_context;
use crate::effects;
use crate::sound::SoundType;

const SCROLLED_PX: f64 = 10.0;

pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#checklist", "Checklist"),
    ("#tips", "Tips"),
    ("#leaderboard", "Leaderboard"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let (scrolled, set_scrolled) = signal(effects::scroll_y() > SCROLLED_PX);

    let handle = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(effects::scroll_y() > SCROLLED_PX);
    });
    on_cleanup(move || handle.remove());

    view! {
        <header class=move || if scrolled.get() { "navbar scrolled" } else { "navbar" }>
            <a href="#" class="navbar-brand">
                <span class="brand-text">"PackPal"</span>
                <span class="brand-icon">"🚀"</span>
            </a>
            <nav class="navbar-links">
                {NAV_LINKS.iter().map(|(href, label)| view! {
                    <a href=*href class="nav-link">{*label}</a>
                }).collect_view()}
            </nav>
            <div class="navbar-actions">
                <SoundToggle />
                <ThemeToggle />
                <button
                    type="button"
                    class="btn-secondary"
                    on:click=move |_| {
                        ctx.play(SoundType::Click);
                        ctx.login_open.set(true);
                    }
                >
                    "Log in"
                </button>
                <button
                    type="button"
                    class="btn-primary launch-btn"
                    on:click=move |_| ctx.launch_open.set(true)
                >
                    "🚀 Launch Packing Mode"
                </button>
            </div>
        </header>
    }
}
