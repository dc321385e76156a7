use bevy::prelude::*;
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.0,
            height: 540.0,
            title: "Tap To Play".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Exit this many seconds after startup; 0 disables. Used for headless
    /// and CI runs.
    pub auto_close_after: f32,
}

/// Designer tunables for the button widget.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ButtonConfig {
    /// Duration of each grow/shrink or fade transition, seconds.
    pub transition_duration: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    /// Lower bound for the foreground alpha while fading.
    pub min_opacity: f32,
    /// Frames between pending-texture swaps (1 = swap every frame).
    pub pending_swap_slowdown: u32,
    /// Seconds spent cycling the pending frames before the download starts.
    pub pending_hold: f32,
    /// Minimum seconds spent cycling the progress frames; the phase also
    /// waits for the download to finish.
    pub progress_hold: f32,
    /// Viewer grow duration after the terminal-state click.
    pub ready_resize_duration: f32,
    /// Multiplier on the button half-size used as the pick radius.
    pub pick_radius_pad: f32,
    /// Side length of the button sprite, world units.
    pub size: f32,
    pub waiting_frame: String,
    pub pending_frames: Vec<String>,
    pub progress_frames: Vec<String>,
    pub ready_frame: String,
    pub pending_color: [f32; 4],
    pub ready_color: [f32; 4],
}
impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            transition_duration: 1.0,
            min_scale: 1.0,
            max_scale: 1.25,
            min_opacity: 0.5,
            pending_swap_slowdown: 8,
            pending_hold: 3.0,
            progress_hold: 3.0,
            ready_resize_duration: 0.5,
            pick_radius_pad: 1.2,
            size: 128.0,
            waiting_frame: "textures/btn_waiting.png".into(),
            pending_frames: vec![
                "textures/pending_0.png".into(),
                "textures/pending_1.png".into(),
                "textures/pending_2.png".into(),
                "textures/pending_3.png".into(),
            ],
            progress_frames: vec![
                "textures/progress_0.png".into(),
                "textures/progress_1.png".into(),
                "textures/progress_2.png".into(),
                "textures/progress_3.png".into(),
            ],
            ready_frame: "textures/btn_ready.png".into(),
            pending_color: [0.20, 0.45, 0.95, 1.0],
            ready_color: [0.95, 0.55, 0.10, 1.0],
        }
    }
}
impl ButtonConfig {
    pub fn pending_color(&self) -> Color {
        let [r, g, b, a] = self.pending_color;
        Color::srgba(r, g, b, a)
    }
    pub fn ready_color(&self) -> Color {
        let [r, g, b, a] = self.ready_color;
        Color::srgba(r, g, b, a)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DownloadConfig {
    /// When true the asset fetch is faked with a timer; no network touched.
    pub simulate: bool,
    /// Simulated download duration, seconds.
    pub sim_duration: f32,
    /// Fetched when simulate is false. Expected to return a PNG.
    pub url: String,
}
impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            simulate: true,
            sim_duration: 2.0,
            url: "https://example.com/cover.png".into(),
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub session: SessionConfig,
    pub button: ButtonConfig,
    pub download: DownloadConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }
    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Non-fatal sanity pass over the tunables. Returns human-readable
    /// warnings; callers log them and keep running with clamped values.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.session.auto_close_after < 0.0 {
            w.push(format!(
                "session.auto_close_after {} negative -> treated as disabled (should be >= 0)",
                self.session.auto_close_after
            ));
        }
        let b = &self.button;
        if b.transition_duration <= 0.0 {
            w.push(format!(
                "button.transition_duration {} must be > 0; clamped at runtime",
                b.transition_duration
            ));
        }
        if b.min_scale <= 0.0 {
            w.push("button.min_scale must be > 0".into());
        }
        if b.min_scale > b.max_scale {
            w.push(format!(
                "button.min_scale ({}) greater than max_scale ({})",
                b.min_scale, b.max_scale
            ));
        }
        if !(0.0..=1.0).contains(&b.min_opacity) {
            w.push(format!(
                "button.min_opacity {} outside 0..1; fade will clamp",
                b.min_opacity
            ));
        }
        if b.pending_swap_slowdown == 0 {
            w.push("button.pending_swap_slowdown is 0; treated as 1".into());
        }
        if b.pending_hold < 0.0 || b.progress_hold < 0.0 {
            w.push("button hold durations must be >= 0".into());
        }
        if b.ready_resize_duration <= 0.0 {
            w.push(format!(
                "button.ready_resize_duration {} must be > 0; viewer appears instantly",
                b.ready_resize_duration
            ));
        }
        if b.pick_radius_pad <= 0.0 {
            w.push("button.pick_radius_pad must be > 0; button becomes unclickable".into());
        }
        if b.size <= 0.0 {
            w.push("button.size must be > 0".into());
        }
        if b.pending_frames.is_empty() {
            w.push("button.pending_frames empty; pending animation will not swap textures".into());
        }
        if b.progress_frames.is_empty() {
            w.push("button.progress_frames empty; progress animation will not swap textures".into());
        }
        if !self.download.simulate && self.download.url.is_empty() {
            w.push("download.url empty with simulate disabled; download will fail".into());
        }
        if self.download.simulate && self.download.sim_duration <= 0.0 {
            w.push(format!(
                "download.sim_duration {} <= 0; simulated download completes immediately",
                self.download.sim_duration
            ));
        }
        w
    }
}
