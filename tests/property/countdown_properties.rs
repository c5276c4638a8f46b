// Property-based tests for countdown formatting and ticking
// Exercises the timer with random durations and tick counts

use egg_timer::services::countdown::{
    format_remaining, CountdownState, CountdownTimer, TickOutcome, COMPLETION_MESSAGE,
};
use proptest::prelude::*;

/// Reads `m:ss` back into seconds
fn parse_display(text: &str) -> Option<u32> {
    let (minutes, seconds) = text.split_once(':')?;
    if seconds.len() != 2 {
        return None;
    }
    let seconds: u32 = seconds.parse().ok()?;
    if seconds >= 60 {
        return None;
    }
    Some(minutes.parse::<u32>().ok()? * 60 + seconds)
}

proptest! {
    /// Property: formatting is reversible and seconds are always two digits
    #[test]
    fn prop_format_reads_back(secs in 0u32..100_000) {
        let text = format_remaining(secs);
        prop_assert_eq!(parse_display(&text), Some(secs));
    }

    /// Property: starting always shows the full duration
    #[test]
    fn prop_start_displays_duration(duration in 1u32..10_000) {
        let mut timer = CountdownTimer::new(0);
        timer.start(duration);
        prop_assert_eq!(timer.display(), format_remaining(duration));
        prop_assert_eq!(timer.state(), CountdownState::Running);
    }

    /// Property: each tick before zero removes exactly one second
    #[test]
    fn prop_tick_decrements_by_one(duration in 1u32..600, ticks in 0u32..600) {
        let ticks = ticks.min(duration);
        let mut timer = CountdownTimer::new(0);
        timer.start(duration);

        for _ in 0..ticks {
            let before = timer.remaining_secs();
            prop_assert_eq!(timer.tick(), TickOutcome::Ticked(before - 1));
            prop_assert_eq!(timer.display(), format_remaining(before - 1));
        }
        prop_assert_eq!(timer.remaining_secs(), duration - ticks);
        prop_assert!(timer.is_running());
    }

    /// Property: completion happens exactly once, on tick duration + 1
    #[test]
    fn prop_completes_exactly_once(duration in 0u32..300, extra in 0usize..20) {
        let mut timer = CountdownTimer::new(0);
        timer.start(duration);

        let outcomes: Vec<_> = (0..duration as usize + 1 + extra).map(|_| timer.tick()).collect();
        let completed: Vec<_> = outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| o.is_completed())
            .map(|(i, _)| i)
            .collect();

        prop_assert_eq!(completed, vec![duration as usize]);
        prop_assert!(outcomes[duration as usize + 1..].iter().all(|o| *o == TickOutcome::Ignored));
        prop_assert_eq!(timer.display(), COMPLETION_MESSAGE);
        prop_assert_eq!(timer.completions(), 1);
    }

    /// Property: restarting mid-countdown forgets the previous progress
    #[test]
    fn prop_restart_resets(first in 1u32..600, progress in 0u32..600, second in 1u32..600) {
        let mut timer = CountdownTimer::new(0);
        timer.start(first);
        for _ in 0..progress.min(first) {
            timer.tick();
        }

        timer.start(second);
        prop_assert_eq!(timer.remaining_secs(), second);
        prop_assert_eq!(timer.display(), format_remaining(second));
    }
}
