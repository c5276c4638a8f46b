//! Fixed colour palette for the egg timer window.

use egui::Color32;

/// Colours used by the main window
#[derive(Debug, Clone)]
pub struct EggTimerTheme {
    /// Window and panel background
    pub app_background: Color32,

    /// Fill behind a preset button while hovered
    pub hover_background: Color32,

    /// Labels and countdown text
    pub text_primary: Color32,

    /// App title at the top of the window
    pub title_text: Color32,
}

impl Default for EggTimerTheme {
    fn default() -> Self {
        Self::mustard()
    }
}

impl EggTimerTheme {
    /// Mustard yellow background with black text and an orange title
    pub fn mustard() -> Self {
        Self {
            app_background: Self::hex_to_color("#F7DC6F").unwrap_or(Color32::YELLOW),
            hover_background: Self::hex_to_color("#FFF2CC").unwrap_or(Color32::LIGHT_YELLOW),
            text_primary: Color32::BLACK,
            title_text: Color32::from_rgb(255, 165, 0),
        }
    }

    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = egui::Visuals::light();

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        // Borderless, transparent buttons that light up on hover
        visuals.widgets.inactive.weak_bg_fill = Color32::TRANSPARENT;
        visuals.widgets.inactive.bg_fill = Color32::TRANSPARENT;
        visuals.widgets.inactive.bg_stroke = egui::Stroke::NONE;
        visuals.widgets.hovered.weak_bg_fill = self.hover_background;
        visuals.widgets.hovered.bg_fill = self.hover_background;
        visuals.widgets.hovered.bg_stroke = egui::Stroke::NONE;
        visuals.widgets.active.weak_bg_fill = self.hover_background;
        visuals.widgets.active.bg_fill = self.hover_background;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }

    /// Parse hex string to Color32
    pub fn hex_to_color(hex: &str) -> Result<Color32, String> {
        let hex = hex.trim_start_matches('#');

        if hex.len() != 6 {
            return Err("Hex color must be 6 characters".to_string());
        }

        let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| "Invalid hex color")?;
        let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| "Invalid hex color")?;
        let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| "Invalid hex color")?;

        Ok(Color32::from_rgb(r, g, b))
    }
}
