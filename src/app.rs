//! PackPal Frontend App
//!
//! Provides the context and store, wires the page-wide listeners and lays
//! out the sections.

use leptos::ev;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{
    AboutSection, ChecklistSection, ContactSection, Footer, HeroSection, LaunchModal, Leaderboard, LoginModal,
    Navbar, ScrollProgress, TravelTips,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::effects;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(AppConfig::with_system_theme(effects::prefers_dark()));
    provide_context(ctx);
    provide_context(Store::new(AppState::new()));

    // Keep the <html> class in sync with the theme
    Effect::new(move |_| effects::apply_theme(ctx.theme()));

    // Browsers only allow audio after a user gesture
    let interaction = [
        window_event_listener(ev::click, move |_| ctx.mark_interacted()),
        window_event_listener(ev::keydown, move |_| ctx.mark_interacted()),
        window_event_listener(ev::touchstart, move |_| ctx.mark_interacted()),
    ];
    on_cleanup(move || interaction.into_iter().for_each(|handle| handle.remove()));

    view! {
        <ScrollProgress />
        <Navbar />
        <main>
            <HeroSection />
            <ChecklistSection />
            <TravelTips />
            <Leaderboard />
            <AboutSection />
            <ContactSection />
        </main>
        <Footer />
        <LaunchModal />
        <LoginModal />
    }
}
