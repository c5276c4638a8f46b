use std::time::{Duration, Instant};

use crate::models::preset::{Preset, PresetId};
use crate::services::alert::CompletionAlert;

use super::models::{CountdownState, TickOutcome};
use super::ticker::Ticker;
use super::timer::CountdownTimer;

/// Drives the single countdown shown in the main window.
///
/// Owns the timer and its one-second ticker, and fires every registered
/// [`CompletionAlert`] when a countdown runs out.
pub struct CountdownService {
    timer: CountdownTimer,
    ticker: Ticker,
    active_preset: Option<&'static Preset>,
    alerts: Vec<Box<dyn CompletionAlert>>,
}

impl CountdownService {
    /// Idle service showing `initial_secs` until the first start.
    pub fn new(initial_secs: u32) -> Self {
        Self {
            timer: CountdownTimer::new(initial_secs),
            ticker: Ticker::default(),
            active_preset: None,
            alerts: Vec::new(),
        }
    }

    pub fn add_alert(&mut self, alert: Box<dyn CompletionAlert>) {
        self.alerts.push(alert);
    }

    /// Labels of the registered alerts, in firing order.
    pub fn alert_names(&self) -> Vec<&'static str> {
        self.alerts.iter().map(|alert| alert.name()).collect()
    }

    /// Starts `preset` from its full duration. Any countdown in progress is
    /// abandoned and its schedule dropped before the new one is armed.
    pub fn start(&mut self, preset: &'static Preset, now: Instant) {
        self.ticker.disarm();
        if self.timer.is_running() {
            log::info!(
                "Restarting countdown with {} ({} left on previous)",
                preset.name,
                self.timer.display()
            );
        } else {
            log::info!("Starting countdown for {} ({}s)", preset.name, preset.duration_secs);
        }

        self.timer.start(preset.duration_secs);
        self.active_preset = Some(preset);
        self.ticker.arm(now);
    }

    /// Delivers every tick that has become due by `now`.
    pub fn advance(&mut self, now: Instant) -> Vec<TickOutcome> {
        let mut outcomes = Vec::new();
        while self.ticker.take_due_tick(now) {
            let outcome = self.tick();
            outcomes.push(outcome);
            if !self.timer.is_running() {
                break;
            }
        }
        outcomes
    }

    fn tick(&mut self) -> TickOutcome {
        let outcome = self.timer.tick();
        match outcome {
            TickOutcome::Completed => {
                self.ticker.disarm();
                self.fire_alerts();
            }
            TickOutcome::Ignored => self.ticker.disarm(),
            TickOutcome::Ticked(remaining) => {
                log::trace!("Countdown tick, {}s remaining", remaining);
            }
        }
        outcome
    }

    fn fire_alerts(&self) {
        let preset_name = self.active_preset.map(|p| p.name).unwrap_or_default();
        log::info!("Countdown for {} finished", preset_name);

        for alert in &self.alerts {
            if let Err(err) = alert.fire(preset_name) {
                log::warn!("Failed to fire {}: {:#}", alert.name(), err);
            }
        }
    }

    pub fn display(&self) -> &str {
        self.timer.display()
    }

    pub fn state(&self) -> CountdownState {
        self.timer.state()
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_running()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.timer.remaining_secs()
    }

    pub fn active_preset(&self) -> Option<PresetId> {
        self.active_preset.map(|p| p.id)
    }

    pub fn completions(&self) -> u64 {
        self.timer.completions()
    }

    /// How long the UI may sleep before the next tick is due.
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until_next(now)
    }
}
