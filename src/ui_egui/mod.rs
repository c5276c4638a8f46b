mod app;
pub mod theme;

pub use app::{EggTimerApp, PresetRequest, APP_TITLE};
