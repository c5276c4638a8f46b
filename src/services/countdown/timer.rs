use super::format::format_remaining;
use super::models::{CountdownState, TickOutcome, COMPLETION_MESSAGE};

/// Remaining time plus the text currently shown for it.
///
/// The timer knows nothing about wall-clock time. Whoever owns it delivers one
/// [`tick`](Self::tick) per elapsed second while [`is_running`](Self::is_running)
/// is true.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    remaining_secs: u32,
    running: bool,
    state: CountdownState,
    display: String,
    completions: u64,
}

impl CountdownTimer {
    /// Creates an idle timer showing `initial_secs`.
    pub fn new(initial_secs: u32) -> Self {
        Self {
            remaining_secs: initial_secs,
            running: false,
            state: CountdownState::Idle,
            display: format_remaining(initial_secs),
            completions: 0,
        }
    }

    /// Begins a fresh countdown, discarding whatever was in progress.
    pub fn start(&mut self, duration_secs: u32) {
        self.remaining_secs = duration_secs;
        self.running = true;
        self.state = CountdownState::Running;
        self.display = format_remaining(duration_secs);
    }

    pub fn tick(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Ignored;
        }

        if self.remaining_secs == 0 {
            self.running = false;
            self.state = CountdownState::Completed;
            self.display = COMPLETION_MESSAGE.to_string();
            self.completions += 1;
            return TickOutcome::Completed;
        }

        self.remaining_secs -= 1;
        self.display = format_remaining(self.remaining_secs);
        TickOutcome::Ticked(self.remaining_secs)
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> CountdownState {
        self.state
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// Number of countdowns that ran to zero since the timer was created.
    pub fn completions(&self) -> u64 {
        self.completions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn new_timer_is_idle() {
        let timer = CountdownTimer::new(240);
        assert_eq!(timer.state(), CountdownState::Idle);
        assert!(!timer.is_running());
        assert_eq!(timer.display(), "4:00");
    }

    #[test_case(180, "3:00")]
    #[test_case(150, "2:30")]
    #[test_case(240, "4:00")]
    fn start_shows_duration_immediately(duration: u32, expected: &str) {
        let mut timer = CountdownTimer::new(0);
        timer.start(duration);
        assert_eq!(timer.display(), expected);
        assert_eq!(timer.remaining_secs(), duration);
        assert!(timer.is_running());
        assert_eq!(timer.state(), CountdownState::Running);
    }

    #[test]
    fn tick_decrements_and_updates_display() {
        let mut timer = CountdownTimer::new(0);
        timer.start(61);
        assert_eq!(timer.tick(), TickOutcome::Ticked(60));
        assert_eq!(timer.display(), "1:00");
        assert_eq!(timer.tick(), TickOutcome::Ticked(59));
        assert_eq!(timer.display(), "0:59");
    }

    #[test]
    fn tick_at_zero_completes_once() {
        let mut timer = CountdownTimer::new(0);
        timer.start(1);
        assert_eq!(timer.tick(), TickOutcome::Ticked(0));
        assert_eq!(timer.display(), "0:00");
        assert!(timer.is_running());

        assert_eq!(timer.tick(), TickOutcome::Completed);
        assert!(!timer.is_running());
        assert_eq!(timer.state(), CountdownState::Completed);
        assert_eq!(timer.display(), COMPLETION_MESSAGE);
        assert_eq!(timer.completions(), 1);

        assert_eq!(timer.tick(), TickOutcome::Ignored);
        assert_eq!(timer.display(), COMPLETION_MESSAGE);
        assert_eq!(timer.completions(), 1);
    }

    #[test]
    fn idle_timer_ignores_ticks() {
        let mut timer = CountdownTimer::new(240);
        assert_eq!(timer.tick(), TickOutcome::Ignored);
        assert_eq!(timer.remaining_secs(), 240);
        assert_eq!(timer.state(), CountdownState::Idle);
    }

    #[test]
    fn restart_while_running_resets_remaining() {
        let mut timer = CountdownTimer::new(0);
        timer.start(240);
        timer.tick();
        timer.tick();
        timer.start(150);
        assert_eq!(timer.remaining_secs(), 150);
        assert_eq!(timer.display(), "2:30");
    }

    #[test]
    fn completed_timer_can_start_again() {
        let mut timer = CountdownTimer::new(0);
        timer.start(0);
        assert!(timer.tick().is_completed());
        timer.start(3);
        assert_eq!(timer.state(), CountdownState::Running);
        assert_eq!(timer.display(), "0:03");
    }
}
