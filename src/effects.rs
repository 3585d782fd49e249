//! Browser Effects
//!
//! Thin wrappers over the DOM: confetti, audio, theme class, scrolling.
//! Failures are logged and otherwise ignored; none of these touch the
//! checklist state.

use serde::Serialize;
use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::config::Theme;

#[wasm_bindgen]
extern "C" {
    /// canvas-confetti global, loaded by index.html
    #[wasm_bindgen(js_name = confetti, catch)]
    fn confetti_js(options: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfettiOptions {
    pub particle_count: u32,
    pub spread: u32,
    pub origin: ConfettiOrigin,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub colors: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConfettiOrigin {
    pub y: f64,
}

impl ConfettiOptions {
    /// Burst for a fully packed list
    pub fn celebration() -> Self {
        Self {
            particle_count: 100,
            spread: 70,
            origin: ConfettiOrigin { y: 0.6 },
            colors: vec!["#FF6B6B", "#4ECDC4", "#FFD166", "#06D6A0", "#118AB2"],
        }
    }

    /// Burst for the launch modal and contact form
    pub fn launch() -> Self {
        Self {
            particle_count: 200,
            spread: 100,
            origin: ConfettiOrigin { y: 0.6 },
            colors: Vec::new(),
        }
    }
}

pub fn fire_confetti(options: &ConfettiOptions) {
    let args = match serde_wasm_bindgen::to_value(options) {
        Ok(args) => args,
        Err(e) => {
            warn!("confetti options: {}", e);
            return;
        }
    };
    if let Err(e) = confetti_js(args) {
        warn!("confetti unavailable: {:?}", e);
    }
}

/// Play a fresh audio element so overlapping plays don't cut each other off
pub fn play_audio(src: &str, volume: f64) {
    let audio = match web_sys::HtmlAudioElement::new_with_src(src) {
        Ok(audio) => audio,
        Err(e) => {
            warn!("audio element: {:?}", e);
            return;
        }
    };
    audio.set_volume(volume.clamp(0.0, 1.0));
    let Ok(promise) = audio.play() else {
        return;
    };
    let src = src.to_string();
    leptos::task::spawn_local(async move {
        // autoplay rejections and missing files are expected
        if let Err(e) = JsFuture::from(promise).await {
            debug!(src = %src, "playback rejected: {:?}", e);
        }
    });
}

pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Toggle the `dark` class on `<html>`
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        match root.class_list().toggle_with_force("dark", theme.is_dark()) {
            Ok(_) => debug!(theme = theme.as_str(), "theme applied"),
            Err(e) => warn!("theme class: {:?}", e),
        }
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Scrollable height of the page (document height minus viewport)
pub fn scrollable_height() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let document = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| e.scroll_height() as f64)
        .unwrap_or(0.0);
    (document - viewport).max(0.0)
}

pub fn window_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(1024.0)
}

/// Smooth-scroll an element into view by id
pub fn scroll_to_id(id: &str) {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id));
    match element {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!(id, "scroll target not found"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confetti_options_json() {
        let json = serde_json::to_value(ConfettiOptions::launch()).unwrap();
        assert_eq!(json["particleCount"], 200);
        assert_eq!(json["origin"]["y"], 0.6);
        assert!(json.get("colors").is_none());

        let json = serde_json::to_value(ConfettiOptions::celebration()).unwrap();
        assert_eq!(json["colors"].as_array().map(Vec::len), Some(5));
    }
}
