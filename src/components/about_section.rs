//! About Section Component

use leptos::prelude::*;

const FEATURES: &[(&str, &str, &str)] = &[
    (
        "🚀",
        "Stress-Free Packing",
        "Turn the tedious task of packing into a fun, interactive experience that ensures you never forget essential items.",
    ),
    (
        "❤️",
        "Travel with Joy",
        "We believe travel should be joyful from start to finish. PackPal makes preparation as exciting as the journey itself.",
    ),
    (
        "🌍",
        "Community Driven",
        "Join a community of travelers sharing packing tips and celebrating adventures around the world.",
    ),
    (
        "🛡️",
        "Peace of Mind",
        "Rest easy knowing you've packed everything you need for your trip, with personalized checklists for every journey.",
    ),
];

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="about-section">
            <div class="section-header">
                <h2>"✨ About PackPal"</h2>
                <p>"We're on a mission to make travel preparation as fun as the journey itself."</p>
            </div>
            <div class="feature-grid">
                {FEATURES.iter().map(|(icon, title, description)| view! {
                    <div class="feature-card">
                        <span class="feature-icon">{*icon}</span>
                        <h3>{*title}</h3>
                        <p>{*description}</p>
                    </div>
                }).collect_view()}
            </div>
            <div class="about-cta">
                <h3>"Ready to revolutionize how you pack?"</h3>
                <p>
                    "Join thousands of happy travelers who have transformed their pre-trip preparation with PackPal's interactive packing experience."
                </p>
            </div>
        </section>
    }
}
