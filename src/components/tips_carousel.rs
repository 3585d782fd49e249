//! Tips Carousel Component
//!
//! Strip of quick tips showing one to three cards depending on the window
//! width, paged one card at a time.

use leptos::ev;
use leptos::prelude::*;

use crate::carousel::{visible_for_width, Carousel};
use crate::context::use_app_context;
use crate::effects;
use crate::models::QUICK_TIPS;
use crate::sound::SoundType;

#[component]
pub fn TipsCarousel() -> impl IntoView {
    let ctx = use_app_context();
    let (carousel, set_carousel) = signal(Carousel::new(
        QUICK_TIPS.len(),
        visible_for_width(effects::window_width()),
    ));

    let handle = window_event_listener(ev::resize, move |_| {
        let visible = visible_for_width(effects::window_width());
        if carousel.get_untracked().visible != visible {
            set_carousel.update(|c| *c = c.with_visible(visible));
        }
    });
    on_cleanup(move || handle.remove());

    let shift = move || {
        let c = carousel.get();
        format!(
            "transform: translateX(-{:.4}%);",
            c.index as f64 * 100.0 / c.visible as f64
        )
    };
    let card_width = move || format!("width: {:.4}%;", 100.0 / carousel.get().visible as f64);

    view! {
        <div class="tips-strip">
            <div class="tips-strip-controls">
                <button
                    type="button"
                    class="carousel-btn"
                    aria-label="Previous tip"
                    on:click=move |_| {
                        set_carousel.update(|c| *c = c.prev());
                        ctx.play(SoundType::Swipe);
                    }
                >
                    "‹"
                </button>
                <button
                    type="button"
                    class="carousel-btn"
                    aria-label="Next tip"
                    on:click=move |_| {
                        set_carousel.update(|c| *c = c.next());
                        ctx.play(SoundType::Swipe);
                    }
                >
                    "›"
                </button>
            </div>
            <div class="tips-strip-viewport">
                <div class="tips-strip-track" style=shift>
                    {QUICK_TIPS.iter().enumerate().map(|(i, tip)| view! {
                        <div
                            class="quick-tip"
                            style=card_width
                            aria-hidden=move || (!carousel.get().window().contains(&i)).to_string()
                        >
                            <span class="quick-tip-emoji">{tip.emoji}</span>
                            <p>{tip.text}</p>
                        </div>
                    }).collect_view()}
                </div>
            </div>
            <div class="tips-strip-dots">
                {move || {
                    let pages = carousel.get().pages();
                    (0..pages).map(|index| view! {
                        <button
                            type="button"
                            class=move || if carousel.get().index == index { "dot active" } else { "dot" }
                            aria-label=format!("Go to tip {}", index + 1)
                            on:click=move |_| set_carousel.update(|c| *c = c.go_to(index))
                        ></button>
                    }).collect_view()
                }}
            </div>
        </div>
    }
}
