//! Completion sound playback.
//!
//! Playback runs on a detached thread so the UI never waits on the audio
//! device. Nothing flows back from that thread.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rodio::{Decoder, OutputStream, Sink};
use thiserror::Error;

use crate::models::settings::Settings;
use crate::services::alert::CompletionAlert;
use crate::services::assets::AssetResolver;

#[derive(Debug, Error)]
pub enum SoundError {
    #[error("sound file {path} does not exist")]
    MissingFile { path: PathBuf },

    #[error("no audio output device available")]
    NoOutput(#[from] rodio::StreamError),

    #[error("failed to open sound file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode sound file {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("failed to create audio sink")]
    Sink(#[from] rodio::PlayError),
}

/// Plays the cue sound when a countdown completes.
pub struct SoundService {
    path: PathBuf,
    volume: f32,
    enabled: bool,
}

impl SoundService {
    pub fn new(path: PathBuf, volume: f32, enabled: bool) -> Self {
        Self {
            path,
            volume: volume.clamp(0.0, 1.0),
            enabled,
        }
    }

    pub fn from_settings(settings: &Settings, assets: &AssetResolver) -> Self {
        let path = assets.path(&settings.sound_file);
        if settings.play_sound && !path.is_file() {
            log::warn!("Completion sound {} not found", path.display());
        }
        Self::new(path, settings.volume_gain(), settings.play_sound)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Starts playback in the background. Only a missing file is reported
    /// here; device and decode errors surface in the log.
    pub fn play(&self) -> Result<(), SoundError> {
        if !self.path.is_file() {
            return Err(SoundError::MissingFile {
                path: self.path.clone(),
            });
        }

        let path = self.path.clone();
        let volume = self.volume;
        std::thread::spawn(move || {
            if let Err(err) = play_blocking(&path, volume) {
                log::warn!("Failed to play completion sound: {err}");
            }
        });
        Ok(())
    }
}

fn play_blocking(path: &Path, volume: f32) -> Result<(), SoundError> {
    let (_stream, stream_handle) = OutputStream::try_default()?;
    let file = File::open(path).map_err(|source| SoundError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let source = Decoder::new(BufReader::new(file)).map_err(|source| SoundError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let sink = Sink::try_new(&stream_handle)?;

    sink.set_volume(volume);
    sink.append(source);
    sink.sleep_until_end();
    Ok(())
}

impl CompletionAlert for SoundService {
    fn name(&self) -> &'static str {
        "completion sound"
    }

    fn fire(&self, _preset_name: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        self.play()?;
        Ok(())
    }
}
