mod format;
mod models;
mod service;
mod ticker;
mod timer;

pub use format::format_remaining;
pub use models::{CountdownState, TickOutcome, COMPLETION_MESSAGE};
pub use service::CountdownService;
pub use ticker::{Ticker, TICK_PERIOD};
pub use timer::CountdownTimer;
