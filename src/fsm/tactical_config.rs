//! Tactical config menu (7H from tactical mode).
//!
//! Runs the generic numeric config menu over the tactical slot block:
//! three level steps on single-channel builds, three level steps plus three
//! channel steps otherwise.

use log::{info, warn};

use super::context::UiContext;
use super::event::{Event, EventResult};
use crate::app::ports::UiPorts;

/// Tactical config handler.  Holds no state of its own; the menu's step
/// counter belongs to the generic config menu.
#[derive(Debug, Default)]
pub struct TacticalConfig;

impl TacticalConfig {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(
        &mut self,
        event: Event,
        arg: u16,
        ctx: &mut UiContext,
        ports: &mut impl UiPorts,
    ) -> EventResult {
        let num_steps = ctx.config.slot_count() as u8;
        ports.config_menu(event, arg, ctx, num_steps, save_step)
    }
}

/// Save callback handed to the config menu.
pub fn save_step(ctx: &mut UiContext, step: u8, value: u8) {
    if ctx.slots.apply_config_step(step, value, &ctx.config) {
        info!("tactical config: slot {} = {}", step, value);
        ctx.mark_slots_dirty();
    } else {
        warn!(
            "tactical config: rejected {} for slot {} (channels: {})",
            value, step, ctx.config.num_channel_modes
        );
    }
}
