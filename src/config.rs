//! Frontend Configuration
//!
//! Sound and theme settings, provided to components through `AppContext`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn from_prefers_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundSettings {
    pub enabled: bool,
    /// 0.0 ..= 1.0
    pub volume: f64,
    /// Minimum gap between two plays of the same sound
    pub debounce_ms: u32,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            volume: 0.5,
            debounce_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub theme: Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub sound: SoundSettings,
    pub theme: ThemeSettings,
}

impl AppConfig {
    /// Defaults with the theme taken from the system preference
    pub fn with_system_theme(prefers_dark: bool) -> Self {
        Self {
            theme: ThemeSettings {
                theme: Theme::from_prefers_dark(prefers_dark),
            },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.sound.enabled);
        assert_eq!(config.sound.volume, 0.5);
        assert_eq!(config.sound.debounce_ms, 100);
        assert_eq!(config.theme.theme, Theme::Light);
        assert!(AppConfig::with_system_theme(true).theme.theme.is_dark());
    }

    #[test]
    fn test_partial_json() {
        let config: AppConfig = serde_json::from_str(r#"{"sound":{"enabled":true}}"#).unwrap();
        assert!(config.sound.enabled);
        assert_eq!(config.sound.debounce_ms, 100);
        assert_eq!(config.theme.theme, Theme::Light);
    }
}
