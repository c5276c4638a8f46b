// Test fixtures - reusable test data
// Provides consistent presets and clock helpers across test files

#![allow(dead_code)]

use std::time::{Duration, Instant};

use egg_timer::models::preset::{Preset, PresetId};

/// Three-second preset for end-to-end countdowns
pub static QUICK_EGG: Preset = Preset {
    id: PresetId::BoiledEgg,
    name: "Quick Egg",
    icon_asset: "images/quick.png",
    duration_secs: 3,
    icon_size: 64,
};

/// Ten-second preset used to interrupt another countdown
pub static SNACK_EGG: Preset = Preset {
    id: PresetId::Omelette,
    name: "Snack Egg",
    icon_asset: "images/snack.png",
    duration_secs: 10,
    icon_size: 64,
};

/// Manually advanced clock built on a fixed origin
pub struct FakeClock {
    origin: Instant,
    elapsed: Duration,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Duration::ZERO,
        }
    }

    pub fn now(&self) -> Instant {
        self.origin + self.elapsed
    }

    pub fn advance_millis(&mut self, millis: u64) -> Instant {
        self.elapsed += Duration::from_millis(millis);
        self.now()
    }

    pub fn advance_secs(&mut self, secs: u64) -> Instant {
        self.advance_millis(secs * 1000)
    }
}
