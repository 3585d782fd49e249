//! Sound Cues
//!
//! Short UI sounds. Playback is gated: sounds must be enabled, the user must
//! have interacted with the page (autoplay policy), and each sound type is
//! debounced separately.

use std::collections::HashMap;

use tracing::debug;

use crate::config::SoundSettings;
use crate::effects;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundType {
    Click,
    Check,
    Uncheck,
    Swipe,
    Flip,
    Add,
    Random,
    Launch,
    Beep,
    Complete,
    Hover,
    Switch,
}

impl SoundType {
    pub fn name(self) -> &'static str {
        match self {
            SoundType::Click => "click",
            SoundType::Check => "check",
            SoundType::Uncheck => "uncheck",
            SoundType::Swipe => "swipe",
            SoundType::Flip => "flip",
            SoundType::Add => "add",
            SoundType::Random => "random",
            SoundType::Launch => "launch",
            SoundType::Beep => "beep",
            SoundType::Complete => "complete",
            SoundType::Hover => "hover",
            SoundType::Switch => "switch",
        }
    }

    pub fn src(self) -> String {
        format!("sounds/{}.mp3", self.name())
    }
}

/// Decides whether a sound may play right now
#[derive(Debug, Default)]
pub struct SoundGate {
    last_played: HashMap<SoundType, f64>,
    user_interacted: bool,
}

impl SoundGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_interacted(&mut self) {
        self.user_interacted = true;
    }

    /// Records the play when allowed. `now_ms` is wall-clock milliseconds.
    pub fn should_play(&mut self, sound: SoundType, settings: &SoundSettings, now_ms: f64) -> bool {
        if !settings.enabled || !self.user_interacted {
            return false;
        }
        if let Some(last) = self.last_played.get(&sound) {
            if now_ms - last < settings.debounce_ms as f64 {
                return false;
            }
        }
        self.last_played.insert(sound, now_ms);
        true
    }
}

/// Gate and play through the browser
pub fn play(gate: &mut SoundGate, sound: SoundType, settings: &SoundSettings) {
    if gate.should_play(sound, settings, js_sys::Date::now()) {
        debug!(sound = sound.name(), "play");
        effects::play_audio(&sound.src(), settings.volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> SoundSettings {
        SoundSettings {
            enabled: true,
            ..SoundSettings::default()
        }
    }

    #[test]
    fn test_silent_until_interaction() {
        let mut gate = SoundGate::new();
        assert!(!gate.should_play(SoundType::Click, &enabled(), 0.0));
        gate.mark_interacted();
        assert!(gate.should_play(SoundType::Click, &enabled(), 0.0));
    }

    #[test]
    fn test_disabled_settings() {
        let mut gate = SoundGate::new();
        gate.mark_interacted();
        assert!(!gate.should_play(SoundType::Check, &SoundSettings::default(), 0.0));
    }

    #[test]
    fn test_debounce_per_type() {
        let mut gate = SoundGate::new();
        gate.mark_interacted();
        let settings = enabled();

        assert!(gate.should_play(SoundType::Check, &settings, 1000.0));
        assert!(!gate.should_play(SoundType::Check, &settings, 1050.0));
        // other types are not affected
        assert!(gate.should_play(SoundType::Uncheck, &settings, 1050.0));
        assert!(gate.should_play(SoundType::Check, &settings, 1100.0));
    }

    #[test]
    fn test_sound_src() {
        assert_eq!(SoundType::Complete.src(), "sounds/complete.mp3");
        assert_eq!(SoundType::Switch.name(), "switch");
    }
}
