use egui::RichText;

use super::context::AppContext;
use super::icons::PresetIcons;
use super::presets::PresetRequest;
use super::{EggTimerApp, APP_TITLE, PROMPT_TEXT};
use crate::models::settings::Settings;
use crate::ui_egui::theme::EggTimerTheme;

const TITLE_FONT_SIZE: f32 = 20.0;
const PROMPT_FONT_SIZE: f32 = 16.0;

impl EggTimerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        let context = AppContext::new(settings);
        log::info!(
            "Assets from {}, sound {}, completion alerts: {}",
            context.assets().root().display(),
            if context.settings().play_sound { "on" } else { "off" },
            context.countdown_service().alert_names().join(", ")
        );

        let icons = PresetIcons::load(&cc.egui_ctx, context.assets(), context.presets());

        let theme = EggTimerTheme::mustard();
        theme.apply_to_context(&cc.egui_ctx);

        Self {
            context,
            icons,
            theme,
        }
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Deliver ticks before drawing so the label shows the current second
        self.refresh_countdown(ctx);

        let mut preset_requests: Vec<PresetRequest> = Vec::new();
        self.render_main_panel(ctx, &mut preset_requests);

        if !preset_requests.is_empty() {
            self.consume_preset_requests(ctx, preset_requests);
            self.refresh_countdown(ctx);
        }
    }

    fn render_main_panel(&self, ctx: &egui::Context, requests: &mut Vec<PresetRequest>) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(APP_TITLE)
                            .size(TITLE_FONT_SIZE)
                            .color(self.theme.title_text),
                    );
                    ui.add_space(10.0);
                    ui.label(RichText::new(PROMPT_TEXT).size(PROMPT_FONT_SIZE).strong());
                    ui.add_space(10.0);
                });

                self.render_preset_rows(ui, requests);
                ui.add_space(20.0);

                ui.vertical_centered(|ui| {
                    self.render_countdown_label(ui);
                });
            });
        });
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        let countdown = self.context.countdown_service();
        log::info!(
            "Shutting down; {} countdown(s) completed, last display {:?}",
            countdown.completions(),
            countdown.display()
        );
    }
}
