//! Side effects fired when a countdown reaches zero.

use anyhow::Result;

/// Something to do once per completed countdown.
///
/// Implementations must return quickly; anything slow (audio playback, D-Bus
/// round trips) belongs on its own thread. A failure is logged by the caller
/// and never changes the countdown state.
pub trait CompletionAlert {
    /// Short label used in log lines
    fn name(&self) -> &'static str;

    fn fire(&self, preset_name: &str) -> Result<()>;
}
