//! Locating and decoding the icons and sound shipped next to the app.

mod image;

use std::env;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::settings::Settings;

pub use self::image::{decode_png, DecodedImage};

/// Environment variable that points at an alternative asset directory.
pub const ASSETS_ENV_VAR: &str = "EGG_TIMER_ASSETS";
const ASSETS_DIR_NAME: &str = "assets";

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset {path} does not exist")]
    Missing { path: PathBuf },

    #[error("failed to read asset {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {path}")]
    Decode {
        path: PathBuf,
        #[source]
        source: png::DecodingError,
    },

    #[error("unsupported image layout in {path}: {reason}")]
    Unsupported { path: PathBuf, reason: String },
}

/// Resolves asset paths against the first usable resource directory.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    root: PathBuf,
}

impl AssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Looks for the asset directory in this order: the settings override,
    /// `EGG_TIMER_ASSETS`, `assets/` beside the executable, `assets/` in the
    /// working directory.
    pub fn resolve(settings: &Settings) -> Self {
        let mut candidates = Vec::new();
        if let Some(dir) = &settings.asset_dir {
            candidates.push(dir.clone());
        }
        if let Some(dir) = env::var_os(ASSETS_ENV_VAR) {
            candidates.push(PathBuf::from(dir));
        }
        if let Some(dir) = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|parent| parent.join(ASSETS_DIR_NAME)))
        {
            candidates.push(dir);
        }
        candidates.push(PathBuf::from(ASSETS_DIR_NAME));

        Self::from_candidates(candidates)
    }

    /// Picks the first candidate that is an existing directory, falling back
    /// to the last one so lookups still produce sensible paths in errors.
    pub fn from_candidates(candidates: Vec<PathBuf>) -> Self {
        if let Some(found) = candidates.iter().find(|dir| dir.is_dir()) {
            log::info!("Using asset directory {}", found.display());
            return Self::new(found.clone());
        }

        let fallback = candidates
            .last()
            .cloned()
            .unwrap_or_else(|| PathBuf::from(ASSETS_DIR_NAME));
        log::warn!(
            "No asset directory found; icons and sound will be missing (looked in {} place(s))",
            candidates.len()
        );
        Self::new(fallback)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Like [`path`](Self::path) but fails when the file is absent.
    pub fn existing(&self, relative: &str) -> Result<PathBuf, AssetError> {
        let path = self.path(relative);
        if path.is_file() {
            Ok(path)
        } else {
            Err(AssetError::Missing { path })
        }
    }

    pub fn load_image(&self, relative: &str) -> Result<DecodedImage, AssetError> {
        let path = self.existing(relative)?;
        let bytes = std::fs::read(&path).map_err(|source| AssetError::Read {
            path: path.clone(),
            source,
        })?;
        decode_png(&bytes, &path)
    }
}
