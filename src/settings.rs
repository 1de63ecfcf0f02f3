//! Game settings
//!
//! JSON on disk, pointed to by `LASER_SIEGE_SETTINGS`. Missing fields take
//! their defaults; unreadable files fall back to defaults with a warning.

use std::path::Path;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::sim::{Arena, SpriteSizes};

/// Session layout and host loop settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play area size in pixels
    pub arena: Arena,
    /// Sprite sizes used for colliders
    pub sprites: SpriteSizes,
    /// Fixed RNG seed; a fresh one is drawn per run when unset
    pub seed: Option<u64>,
    /// Frames per second the host steps the simulation at
    pub frame_rate: u32,
    /// Length of a headless run in seconds
    pub demo_seconds: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena: Arena::default(),
            sprites: SpriteSizes::default(),
            seed: None,
            frame_rate: 60,
            demo_seconds: 30.0,
        }
    }
}

impl Settings {
    /// Environment variable naming the settings file
    pub const ENV_VAR: &'static str = "LASER_SIEGE_SETTINGS";

    /// Parse settings JSON and repair anything unusable
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str::<Self>(json).map(Self::sanitized)
    }

    /// Load from the file named by `LASER_SIEGE_SETTINGS`, or use defaults
    pub fn load() -> Self {
        match std::env::var_os(Self::ENV_VAR) {
            Some(path) => Self::load_from(Path::new(&path)),
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load from a JSON file, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}; using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Repair values the simulation cannot run with
    pub fn sanitized(mut self) -> Self {
        let defaults = SpriteSizes::default();
        for (name, size, fallback) in [
            ("player", &mut self.sprites.player, defaults.player),
            ("enemy", &mut self.sprites.enemy, defaults.enemy),
            ("beam", &mut self.sprites.beam, defaults.beam),
        ] {
            if size.x <= 0 || size.y <= 0 {
                log::warn!("Sprite size {} for {} is not positive; using {}", size, name, fallback);
                *size = fallback;
            }
        }

        // Both ships must fit side to side and within their own half
        let largest = self.sprites.player.max(self.sprites.enemy);
        let needed = IVec2::new(largest.x, largest.y * 2);
        if self.arena.width < needed.x || self.arena.height < needed.y {
            log::warn!(
                "Arena {}x{} too small for sprites; growing to fit",
                self.arena.width,
                self.arena.height
            );
            self.arena.width = self.arena.width.max(needed.x);
            self.arena.height = self.arena.height.max(needed.y);
        }

        if self.frame_rate == 0 {
            log::warn!("Frame rate 0 is invalid; using 60");
            self.frame_rate = 60;
        }
        if !self.demo_seconds.is_finite() || self.demo_seconds < 0.0 {
            log::warn!("Demo length {} is invalid; using 0", self.demo_seconds);
            self.demo_seconds = 0.0;
        }

        self
    }

    /// Seconds per simulated frame
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.frame_rate as f32
    }

    /// Frames in a headless run
    pub fn total_frames(&self) -> u64 {
        (self.demo_seconds as f64 * self.frame_rate as f64).round() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.arena.width, 1024);
        assert_eq!(settings.arena.height, 1024);
        assert_eq!(settings.frame_rate, 60);
        assert_eq!(settings.total_frames(), 1800);
        assert!((settings.frame_dt() - 1.0 / 60.0).abs() < 1e-7);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "frame_rate": 30 }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.frame_rate, 30);
        assert_eq!(settings.arena, Arena::default());
        assert_eq!(settings.sprites, SpriteSizes::default());
    }

    #[test]
    fn test_round_trip_through_json() {
        let mut settings = Settings::default();
        settings.seed = Some(7);
        settings.sprites.beam = IVec2::new(8, 32);
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_sanitize_repairs_bad_values() {
        let json = r#"{
            "arena": { "width": 50, "height": 50 },
            "sprites": { "player": [64, 64], "enemy": [0, 10], "beam": [8, 24] },
            "frame_rate": 0,
            "demo_seconds": -3.0
        }"#;
        let settings = Settings::from_json(json).unwrap();

        assert_eq!(settings.sprites.enemy, SpriteSizes::default().enemy);
        assert!(settings.arena.width >= 96);
        assert!(settings.arena.half_height() >= 96);
        assert_eq!(settings.frame_rate, 60);
        assert_eq!(settings.total_frames(), 0);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_from_missing_file_falls_back() {
        let path = std::env::temp_dir().join("laser-siege-settings-does-not-exist.json");
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "laser-siege-settings-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{ "demo_seconds": 2.5 }"#).unwrap();
        let settings = Settings::load_from(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(settings.demo_seconds, 2.5);
        assert_eq!(settings.total_frames(), 150);
    }
}
