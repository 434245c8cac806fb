//! Tactical preset slots.
//!
//! The slot block maps click-and-hold gestures to presets:
//!
//! ```text
//!   click                      1  2  3
//!   level / strobe slot        0  1  2
//!   channel slot (multi-ch)    3  4  5
//! ```
//!
//! A level slot holding `1..=ramp_size` is a steady ramp level; anything
//! above `ramp_size` selects a strobe; zero means "nothing configured".
//! A channel slot of zero follows whatever channel was active when the mode
//! was entered, `n` selects channel `n - 1`.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::config::{LightConfig, MAX_TACTICAL_SLOTS, TACTICAL_CLICK_SLOTS};

/// What a level slot resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Steady output at this ramp level.
    Steady(u8),
    /// Strobe variant index, always `< num_strobe_types`.
    Strobe(u8),
}

impl Preset {
    /// Decode a raw level-slot value.  Zero decodes to `None`.
    pub fn decode(value: u8, config: &LightConfig) -> Option<Self> {
        if value == 0 {
            None
        } else if value <= config.ramp_size {
            Some(Self::Steady(value))
        } else {
            let strobes = config.num_strobe_types.max(1);
            Some(Self::Strobe((value - config.ramp_size - 1) % strobes))
        }
    }
}

/// The in-memory tactical slot block.  Length is 3 or 6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetSlots {
    slots: Vec<u8, MAX_TACTICAL_SLOTS>,
}

impl PresetSlots {
    /// Factory slots for this build.
    pub fn defaults(config: &LightConfig) -> Self {
        Self::from_bytes(config, &config.default_tactical_slots())
    }

    /// Build a slot block from raw bytes, truncating or zero-padding to the
    /// build's slot count.
    pub fn from_bytes(config: &LightConfig, bytes: &[u8]) -> Self {
        let mut slots = Vec::new();
        for i in 0..config.slot_count() {
            // capacity is MAX_TACTICAL_SLOTS and slot_count never exceeds it
            let _ = slots.push(bytes.get(i).copied().unwrap_or(0));
        }
        Self { slots }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<u8> {
        self.slots.get(index).copied()
    }

    /// Preset bound to `clicks` (1..=3).  Other click counts and zero slots
    /// resolve to `None`.
    pub fn preset(&self, clicks: u8, config: &LightConfig) -> Option<Preset> {
        let index = Self::level_index(clicks)?;
        Preset::decode(self.get(index)?, config)
    }

    /// Channel bound to `clicks`, already converted to a 0-based channel.
    ///
    /// `None` when the build is single-channel, the slot is zero, or the
    /// stored value names a channel the build doesn't have.
    pub fn channel_override(&self, clicks: u8, config: &LightConfig) -> Option<u8> {
        if !config.multi_channel() {
            return None;
        }
        let index = Self::level_index(clicks)? + TACTICAL_CLICK_SLOTS;
        match self.get(index)? {
            0 => None,
            n if n <= config.num_channel_modes => Some(n - 1),
            _ => None,
        }
    }

    /// Apply one confirmed step of the tactical config menu.
    ///
    /// Level steps (1..=3) always overwrite.  Channel steps (4..=6) only
    /// take values up to the channel count; anything larger is dropped and
    /// the old value kept.  Returns whether the slot was written.
    pub fn apply_config_step(&mut self, step: u8, value: u8, config: &LightConfig) -> bool {
        let Some(index) = (step as usize).checked_sub(1) else {
            return false;
        };
        let Some(slot) = self.slots.get_mut(index) else {
            return false;
        };
        if index >= TACTICAL_CLICK_SLOTS && value > config.num_channel_modes {
            return false;
        }
        *slot = value;
        true
    }

    fn level_index(clicks: u8) -> Option<usize> {
        match clicks {
            1..=3 => Some(clicks as usize - 1),
            _ => None,
        }
    }
}
