//! Application Context
//!
//! Page-wide settings and modal switches provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::{AppConfig, Theme};
use crate::effects;
use crate::sound::{self, SoundGate, SoundType};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Sound and theme settings
    pub config: RwSignal<AppConfig>,
    /// Launch Packing Mode modal
    pub launch_open: RwSignal<bool>,
    pub login_open: RwSignal<bool>,
    sound_gate: StoredValue<SoundGate>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: RwSignal::new(config),
            launch_open: RwSignal::new(false),
            login_open: RwSignal::new(false),
            sound_gate: StoredValue::new(SoundGate::new()),
        }
    }

    pub fn theme(&self) -> Theme {
        self.config.with(|c| c.theme.theme)
    }

    pub fn sound_enabled(&self) -> bool {
        self.config.with(|c| c.sound.enabled)
    }

    pub fn toggle_theme(&self) {
        self.config.update(|c| c.theme.theme = c.theme.theme.toggled());
        self.play(SoundType::Switch);
    }

    pub fn toggle_sound(&self) {
        self.config.update(|c| c.sound.enabled = !c.sound.enabled);
        self.play(SoundType::Click);
    }

    /// Sounds stay muted until the first click, key press or touch
    pub fn mark_interacted(&self) {
        self.sound_gate.update_value(SoundGate::mark_interacted);
    }

    pub fn play(&self, sound_type: SoundType) {
        let settings = self.config.with_untracked(|c| c.sound);
        self.sound_gate
            .update_value(|gate| sound::play(gate, sound_type, &settings));
    }

    pub fn celebrate(&self) {
        effects::fire_confetti(&effects::ConfettiOptions::celebration());
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
