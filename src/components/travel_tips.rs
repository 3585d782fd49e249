//! Travel Tips Component
//!
//! Tip of the day plus a flip-card carousel. The card front shows the
//! title, the back the markdown body.

use std::time::Duration;

use leptos::prelude::*;
use rand::Rng;

use crate::carousel::Carousel;
use crate::components::TipsCarousel;
use crate::context::use_app_context;
use crate::markdown::{parse_markdown_inline, plain_text};
use crate::models::{TravelTip, TRAVEL_TIPS};
use crate::sound::SoundType;

/// Card turns back over before the next tip is shown
const UNFLIP_DELAY: Duration = Duration::from_millis(300);

#[component]
fn TipOfTheDay(tip: TravelTip) -> impl IntoView {
    view! {
        <div class="tip-of-the-day">
            <span class="tip-badge">"💡 Tip of the Day"</span>
            <div class="tip-of-the-day-body">
                <span class="tip-icon">{tip.icon}</span>
                <div>
                    <h3>{tip.title}</h3>
                    <p inner_html=parse_markdown_inline(tip.content)></p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn TravelTips() -> impl IntoView {
    let ctx = use_app_context();

    let tip_of_the_day = TRAVEL_TIPS[rand::thread_rng().gen_range(0..TRAVEL_TIPS.len())];
    let (carousel, set_carousel) = signal(Carousel::new(TRAVEL_TIPS.len(), 1));
    let (flipped, set_flipped) = signal(false);

    let current = move || TRAVEL_TIPS[carousel.get().index];

    let step = move |forward: bool| {
        set_flipped.set(false);
        ctx.play(SoundType::Swipe);
        set_timeout(
            move || set_carousel.update(|c| *c = if forward { c.next() } else { c.prev() }),
            UNFLIP_DELAY,
        );
    };

    view! {
        <section id="tips" class="tips-section">
            <div class="section-header">
                <h2>"💡 Travel Tips"</h2>
                <p>"Smart packing hacks to make your journey smoother."</p>
            </div>

            <TipOfTheDay tip=tip_of_the_day />

            <div class="flip-carousel">
                <button type="button" class="carousel-btn" aria-label="Previous tip" on:click=move |_| step(false)>
                    "‹"
                </button>
                <div
                    class=move || if flipped.get() { "flip-card flipped" } else { "flip-card" }
                    title=move || plain_text(current().content)
                    on:click=move |_| {
                        set_flipped.update(|f| *f = !*f);
                        ctx.play(SoundType::Flip);
                    }
                >
                    <div class="flip-card-face front">
                        <span class="tip-icon">{move || current().icon}</span>
                        <h3>{move || current().title}</h3>
                        <span class="flip-hint">"Tap to reveal"</span>
                    </div>
                    <div class="flip-card-face back">
                        <p inner_html=move || parse_markdown_inline(current().content)></p>
                    </div>
                </div>
                <button type="button" class="carousel-btn" aria-label="Next tip" on:click=move |_| step(true)>
                    "›"
                </button>
            </div>
            <p class="carousel-position">
                {move || format!("{} / {}", carousel.get().index + 1, TRAVEL_TIPS.len())}
            </p>

            <TipsCarousel />
        </section>
    }
}
