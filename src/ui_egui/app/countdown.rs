use std::time::{Duration as StdDuration, Instant};

use egui::RichText;

use super::EggTimerApp;
use crate::services::countdown::TickOutcome;

const COUNTDOWN_FONT_SIZE: f32 = 28.0;

impl EggTimerApp {
    /// Delivers due ticks and schedules the next repaint for the following one.
    pub(super) fn refresh_countdown(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let outcomes = self.context.countdown_service_mut().advance(now);

        if outcomes.iter().any(|outcome| *outcome == TickOutcome::Completed) {
            log::info!(
                "Countdown completed ({} so far this session)",
                self.context.countdown_service().completions()
            );
        }

        if let Some(wait) = self.context.countdown_service().next_tick_in(now) {
            // Land just past the deadline
            ctx.request_repaint_after(wait + StdDuration::from_millis(5));
        }
    }

    pub(super) fn render_countdown_label(&self, ui: &mut egui::Ui) {
        ui.label(
            RichText::new(self.context.countdown_service().display())
                .size(COUNTDOWN_FONT_SIZE)
                .strong(),
        );
    }
}
