// Settings module
// User-tunable options persisted to config.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_SOUND_FILE: &str = "times_up.wav";
pub const MAX_SOUND_VOLUME: u8 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Overrides the directory icons and the sound cue are loaded from
    pub asset_dir: Option<PathBuf>,
    /// Completion sound, relative to the asset directory
    pub sound_file: String,
    pub play_sound: bool,
    /// Playback volume in percent
    pub sound_volume: u8,
    /// Also raise a desktop notification when a countdown completes
    pub system_notification: bool,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: None,
            sound_file: DEFAULT_SOUND_FILE.to_string(),
            play_sound: true,
            sound_volume: MAX_SOUND_VOLUME,
            system_notification: false,
            window_width: 350.0,
            window_height: 350.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.sound_file.trim().is_empty() {
            return Err("sound_file must not be empty".to_string());
        }

        if self.sound_volume > MAX_SOUND_VOLUME {
            return Err(format!(
                "sound_volume must be between 0 and {}, got {}",
                MAX_SOUND_VOLUME, self.sound_volume
            ));
        }

        for (name, value) in [
            ("window_width", self.window_width),
            ("window_height", self.window_height),
        ] {
            if !value.is_finite() || value < 100.0 {
                return Err(format!("{name} must be at least 100 pixels, got {value}"));
            }
        }

        Ok(())
    }

    /// Volume as the linear gain rodio expects.
    pub fn volume_gain(&self) -> f32 {
        f32::from(self.sound_volume.min(MAX_SOUND_VOLUME)) / 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!(settings.play_sound);
        assert!(!settings.system_notification);
        assert_eq!(settings.sound_file, "times_up.wav");
    }

    #[test]
    fn rejects_out_of_range_volume() {
        let settings = Settings {
            sound_volume: 150,
            ..Settings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("sound_volume"));
    }

    #[test]
    fn rejects_blank_sound_file() {
        let settings = Settings {
            sound_file: "  ".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_tiny_window() {
        let settings = Settings {
            window_height: 20.0,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn volume_gain_is_linear() {
        let settings = Settings {
            sound_volume: 40,
            ..Settings::default()
        };
        assert!((settings.volume_gain() - 0.4).abs() < f32::EPSILON);
    }
}
