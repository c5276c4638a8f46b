//! Cooking presets shown as buttons in the main window.
//!
//! Presets are fixed at startup and never change while the app runs. Each one
//! maps a [`PresetId`] to a countdown duration and the icon drawn on its button.

use std::time::Duration;

/// Stable identifier for a preset. Click bindings are keyed by this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PresetId {
    BoiledEgg,
    Omelette,
    BullseyeEgg,
}

impl PresetId {
    pub const ALL: [PresetId; 3] = [Self::BoiledEgg, Self::Omelette, Self::BullseyeEgg];
}

/// A named cooking mode with a fixed countdown duration and icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub id: PresetId,
    pub name: &'static str,
    /// Icon file, relative to the asset directory
    pub icon_asset: &'static str,
    /// Countdown length in whole seconds, always > 0
    pub duration_secs: u32,
    /// Edge length of the square icon in pixels
    pub icon_size: u32,
}

impl Preset {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(u64::from(self.duration_secs))
    }
}

const DEFAULT_ICON_SIZE: u32 = 250;

static PRESETS: [Preset; 3] = [
    Preset {
        id: PresetId::BoiledEgg,
        name: "Boiled Egg",
        icon_asset: "images/New Piskel-1.png.png",
        duration_secs: 4 * 60,
        icon_size: DEFAULT_ICON_SIZE,
    },
    Preset {
        id: PresetId::Omelette,
        name: "Omelette",
        icon_asset: "images/New Piskel-1.png (2).png",
        duration_secs: 3 * 60,
        icon_size: DEFAULT_ICON_SIZE,
    },
    Preset {
        id: PresetId::BullseyeEgg,
        name: "Bullseye Egg",
        icon_asset: "images/New Piskel-1.png (1).png",
        duration_secs: 2 * 60 + 30,
        icon_size: DEFAULT_ICON_SIZE,
    },
];

/// Read-only lookup over the built-in presets, in display order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresetCatalog;

impl PresetCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn all(&self) -> &'static [Preset] {
        &PRESETS
    }

    pub fn get(&self, id: PresetId) -> &'static Preset {
        match id {
            PresetId::BoiledEgg => &PRESETS[0],
            PresetId::Omelette => &PRESETS[1],
            PresetId::BullseyeEgg => &PRESETS[2],
        }
    }

    /// Preset whose duration is shown before the first start.
    pub fn default_preset(&self) -> &'static Preset {
        self.get(PresetId::BoiledEgg)
    }

    /// Splits presets into the rows the main window lays out: the first two
    /// side by side, the rest underneath.
    pub fn rows(&self) -> (&'static [Preset], &'static [Preset]) {
        PRESETS.split_at(2)
    }
}
