use std::time::{Duration, Instant};

pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Periodic trigger polled from the frame loop.
///
/// egui only runs code when a frame is drawn, so instead of a callback the
/// ticker keeps the next deadline and hands out due ticks one at a time.
/// A late frame drains every missed period in order.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next_due_at: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(TICK_PERIOD)
    }
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next_due_at: None,
        }
    }

    /// Schedules the first tick one period after `now`, dropping any
    /// previous schedule.
    pub fn arm(&mut self, now: Instant) {
        self.next_due_at = Some(now + self.period);
    }

    pub fn disarm(&mut self) {
        self.next_due_at = None;
    }

    /// Returns one due tick at most, leaving later ones pending.
    pub fn take_due_tick(&mut self, now: Instant) -> bool {
        match self.next_due_at {
            Some(next_due_at) if now >= next_due_at => {
                self.next_due_at = Some(next_due_at + self.period);
                true
            }
            _ => false,
        }
    }

    /// Time left before the next tick, zero if one is already due.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due_at
            .map(|next_due_at| next_due_at.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: u64) -> Duration {
        Duration::from_secs(value)
    }

    fn drain(ticker: &mut Ticker, now: Instant) -> u32 {
        let mut due = 0;
        while ticker.take_due_tick(now) {
            due += 1;
        }
        due
    }

    #[test]
    fn unarmed_ticker_reports_nothing() {
        let mut ticker = Ticker::default();
        let now = Instant::now();
        assert!(!ticker.take_due_tick(now + secs(10)));
        assert!(ticker.time_until_next(now).is_none());
    }

    #[test]
    fn first_tick_is_one_period_after_arming() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);

        assert_eq!(ticker.time_until_next(start), Some(secs(1)));
        assert!(!ticker.take_due_tick(start + Duration::from_millis(999)));
        assert!(ticker.take_due_tick(start + secs(1)));
        assert!(!ticker.take_due_tick(start + secs(1)));
    }

    #[test]
    fn late_poll_catches_up() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);

        let late = start + Duration::from_millis(3500);
        assert_eq!(drain(&mut ticker, late), 3);
        assert_eq!(ticker.time_until_next(late), Some(Duration::from_millis(500)));
    }

    #[test]
    fn overdue_tick_reports_zero_wait() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);
        assert_eq!(ticker.time_until_next(start + secs(2)), Some(Duration::ZERO));
    }

    #[test]
    fn rearming_replaces_schedule() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);
        ticker.arm(start + Duration::from_millis(900));

        assert!(!ticker.take_due_tick(start + secs(1)));
        assert_eq!(drain(&mut ticker, start + Duration::from_millis(1900)), 1);
    }

    #[test]
    fn custom_period_is_respected() {
        let mut ticker = Ticker::new(Duration::from_millis(250));
        let start = Instant::now();
        ticker.arm(start);
        assert_eq!(drain(&mut ticker, start + secs(1)), 4);
    }

    #[test]
    fn disarm_stops_ticks() {
        let mut ticker = Ticker::default();
        let start = Instant::now();
        ticker.arm(start);
        ticker.disarm();
        assert!(ticker.time_until_next(start).is_none());
        assert_eq!(drain(&mut ticker, start + secs(5)), 0);
    }
}
