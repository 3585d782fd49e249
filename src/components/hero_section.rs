//! Hero Section Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::effects;
use crate::sound::SoundType;

/// Emoji orbiting the suitcase, with their angle in degrees
const ORBIT: &[(&str, f64)] = &[("🛂", 45.0), ("📷", 135.0), ("👕", 225.0), ("😊", 315.0)];
const ORBIT_RADIUS: f64 = 120.0;

fn orbit_offset(angle_deg: f64, radius: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (rad.cos() * radius, rad.sin() * radius)
}

#[component]
pub fn HeroSection() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <section class="hero">
            <div class="hero-blobs" aria-hidden="true">
                <div class="blob blob-purple"></div>
                <div class="blob blob-pink"></div>
                <div class="blob blob-yellow"></div>
            </div>
            <div class="hero-content">
                <h1>"Ready to Launch Your Trip?"</h1>
                <p class="hero-tagline">"Turn packing into play. Forget nothing, stress less, smile more."</p>
                <div class="hero-orbit" aria-hidden="true">
                    <div class="orbit-ring"></div>
                    <div class="hero-suitcase">"🧳" <span class="sparkle">"✨"</span></div>
                    {ORBIT.iter().enumerate().map(|(i, (glyph, angle))| {
                        let (x, y) = orbit_offset(*angle, ORBIT_RADIUS);
                        view! {
                            <span
                                class="orbit-item"
                                style=format!(
                                    "transform: translate(calc(-50% + {:.0}px), calc(-50% + {:.0}px)); animation-delay: {:.1}s;",
                                    x, y, i as f64 * 0.2
                                )
                            >
                                {*glyph}
                            </span>
                        }
                    }).collect_view()}
                </div>
                <button
                    type="button"
                    class="btn-primary hero-cta"
                    on:mouseenter=move |_| ctx.play(SoundType::Hover)
                    on:click=move |_| {
                        ctx.play(SoundType::Swipe);
                        effects::scroll_to_id("checklist");
                    }
                >
                    "Start Packing →"
                </button>
                <div class="scroll-hint" aria-hidden="true">"↓"</div>
            </div>
        </section>
    }
}
