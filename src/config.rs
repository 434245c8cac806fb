//! Build-time light configuration.
//!
//! Every constant the tactical UI references (ramp size, strobe count,
//! channel count, default presets) lives here instead of inside the state
//! handlers.  A board profile constructs a [`LightConfig`] once at boot.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Number of click counts that carry a tactical preset (1H, 2H, 3H).
pub const TACTICAL_CLICK_SLOTS: usize = 3;

/// Upper bound on the tactical slot block: three level slots plus three
/// channel slots on multi-channel builds.
pub const MAX_TACTICAL_SLOTS: usize = 2 * TACTICAL_CLICK_SLOTS;

/// Board-level configuration inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightConfig {
    // --- Ramp ---
    /// Highest ramp level index; levels are `1..=ramp_size`.
    pub ramp_size: u8,

    // --- Strobes ---
    /// Number of strobe variants the strobe engine supports.
    pub num_strobe_types: u8,
    /// Build has a two-colour police strobe on the main emitters.
    pub police_color_strobe: bool,

    // --- Channels ---
    /// Number of selectable emitter channels.
    pub num_channel_modes: u8,

    // --- Tactical presets ---
    /// Override for the factory tactical slots.  `None` derives them.
    pub tactical_defaults: Option<[u8; MAX_TACTICAL_SLOTS]>,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            // Ramp
            ramp_size: 150,

            // Strobes
            num_strobe_types: 5,
            police_color_strobe: false,

            // Channels
            num_channel_modes: 1,

            tactical_defaults: None,
        }
    }
}

impl LightConfig {
    /// True when the build exposes more than one channel mode.
    pub fn multi_channel(&self) -> bool {
        self.num_channel_modes > 1
    }

    /// Length of the tactical slot block: 6 with channel slots, 3 without.
    pub fn slot_count(&self) -> usize {
        if self.multi_channel() {
            MAX_TACTICAL_SLOTS
        } else {
            TACTICAL_CLICK_SLOTS
        }
    }

    /// Factory tactical slots: high, low, tactical strobe, then "follow
    /// the active channel" for every click count.
    pub fn default_tactical_slots(&self) -> [u8; MAX_TACTICAL_SLOTS] {
        if let Some(slots) = self.tactical_defaults {
            return slots;
        }
        // police strobe sits one index above the single-colour tactical strobe
        let strobe_offset = if self.police_color_strobe { 3 } else { 2 };
        let strobe = self.ramp_size.saturating_add(strobe_offset);
        [120.min(self.ramp_size), 30.min(self.ramp_size), strobe, 0, 0, 0]
    }

    /// Range-check the configuration before it is handed to the UI.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ramp_size == 0 {
            return Err(ConfigError::ValidationFailed("ramp_size must be >= 1"));
        }
        if self.num_strobe_types == 0 {
            return Err(ConfigError::ValidationFailed(
                "num_strobe_types must be >= 1",
            ));
        }
        if self.num_channel_modes == 0 {
            return Err(ConfigError::ValidationFailed(
                "num_channel_modes must be >= 1",
            ));
        }
        Ok(())
    }
}
