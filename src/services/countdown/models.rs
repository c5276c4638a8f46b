/// Text shown in place of the countdown once it has run out.
pub const COMPLETION_MESSAGE: &str = "Time's up! ⏳";

/// Lifecycle of the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountdownState {
    /// Nothing started yet
    #[default]
    Idle,
    /// Counting down once per second
    Running,
    /// Reached zero and fired the completion effect; waits for the next start
    Completed,
}

/// Result of delivering one tick to the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// One second was taken off; carries the new remaining seconds
    Ticked(u32),
    /// The countdown finished on this tick
    Completed,
    /// The timer was not running so the tick was dropped
    Ignored,
}

impl TickOutcome {
    pub fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }
}
