use egui::{RichText, Vec2};

use super::icons::PresetIcons;
use super::EggTimerApp;
use crate::models::preset::{Preset, PresetId};

/// Click on a preset button, handled after the frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetRequest {
    pub preset: PresetId,
}

const PRESET_LABEL_SIZE: f32 = 12.0;
const MIN_ICON_EDGE: f32 = 48.0;

impl EggTimerApp {
    /// Lays out the preset buttons in two rows and collects clicks.
    pub(super) fn render_preset_rows(&self, ui: &mut egui::Ui, requests: &mut Vec<PresetRequest>) {
        let (top, bottom) = self.context.presets().rows();
        render_row(ui, top, &self.icons, requests);
        ui.add_space(10.0);
        render_row(ui, bottom, &self.icons, requests);
    }

    /// Starts the countdown for each clicked preset. Several clicks in one
    /// frame leave the last one running.
    pub(super) fn consume_preset_requests(
        &mut self,
        ctx: &egui::Context,
        requests: Vec<PresetRequest>,
    ) {
        if requests.is_empty() {
            return;
        }

        let now = std::time::Instant::now();
        for PresetRequest { preset } in requests {
            let preset = self.context.presets().get(preset);
            self.context.countdown_service_mut().start(preset, now);
        }
        ctx.request_repaint();
    }
}

fn render_row(
    ui: &mut egui::Ui,
    presets: &'static [Preset],
    icons: &PresetIcons,
    requests: &mut Vec<PresetRequest>,
) {
    if presets.is_empty() {
        return;
    }

    ui.columns(presets.len(), |columns| {
        for (column, preset) in columns.iter_mut().zip(presets) {
            column.vertical_centered(|ui| {
                if render_preset_button(ui, preset, icons) {
                    requests.push(PresetRequest { preset: preset.id });
                }
            });
        }
    });
}

/// Returns true when the button was clicked.
fn render_preset_button(ui: &mut egui::Ui, preset: &Preset, icons: &PresetIcons) -> bool {
    let edge = (preset.icon_size as f32)
        .min(ui.available_width())
        .max(MIN_ICON_EDGE);

    let response = match icons.get(preset.id) {
        Some(texture) => {
            let image = egui::Image::new(egui::load::SizedTexture::new(
                texture.id(),
                fit_within(texture.size_vec2(), edge),
            ));
            // Framed so the theme's hover fill shows behind the icon
            ui.add(egui::ImageButton::new(image).frame(true))
        }
        None => ui.add(
            egui::Button::new(RichText::new("🥚").size(edge * 0.5)).min_size(Vec2::splat(edge)),
        ),
    };
    let response = response
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(format!("Start {} timer", preset.name));

    ui.label(RichText::new(preset.name).size(PRESET_LABEL_SIZE).strong());

    response.clicked()
}

/// Scales `size` so its longer side is `edge`, keeping the aspect ratio.
fn fit_within(size: Vec2, edge: f32) -> Vec2 {
    let longest = size.x.max(size.y);
    if longest <= 0.0 {
        return Vec2::splat(edge);
    }
    size * (edge / longest)
}
