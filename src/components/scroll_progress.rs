//! Scroll Progress Component
//!
//! Vertical page-progress bar, shown once the reader is past the hero.

use leptos::ev;
use leptos::prelude::*;

use crate::effects;

const VISIBLE_AFTER_PX: f64 = 300.0;

/// Scrolled share of the page in 0.0 ..= 1.0
fn scroll_fraction(scroll_y: f64, scrollable: f64) -> f64 {
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[component]
pub fn ScrollProgress() -> impl IntoView {
    let (scroll_y, set_scroll_y) = signal(effects::scroll_y());
    let (scrollable, set_scrollable) = signal(effects::scrollable_height());

    let handle = window_event_listener(ev::scroll, move |_| {
        set_scroll_y.set(effects::scroll_y());
        set_scrollable.set(effects::scrollable_height());
    });
    on_cleanup(move || handle.remove());

    let fraction = move || scroll_fraction(scroll_y.get(), scrollable.get());

    view! {
        <Show when=move || { scroll_y.get() > VISIBLE_AFTER_PX }>
            <div class="scroll-progress" aria-hidden="true">
                <div class="scroll-progress-fill" style=move || format!("height: {:.1}%;", fraction() * 100.0)></div>
                <span class="scroll-progress-rocket">"🚀"</span>
            </div>
        </Show>
    }
}
