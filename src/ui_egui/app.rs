mod context;
mod countdown;
mod icons;
mod lifecycle;
mod presets;

use self::context::AppContext;
use self::icons::PresetIcons;
use crate::ui_egui::theme::EggTimerTheme;

pub use self::presets::PresetRequest;

pub const APP_TITLE: &str = "Egg Timer <3";
const PROMPT_TEXT: &str = "What are you making today?";

pub struct EggTimerApp {
    /// Settings, presets and the countdown, alive for the whole run
    context: AppContext,
    /// Textures for the preset buttons; missing entries draw as text
    icons: PresetIcons,
    theme: EggTimerTheme,
}

impl eframe::App for EggTimerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}
