//! Shared mutable context threaded through every UI state handler.
//!
//! `UiContext` is the single struct that state handlers read from and
//! write to.  It holds the process-wide device state other modes observe
//! (memorized level, active channel), the board configuration, the
//! tactical slot block, and the transition a handler asked for.

use core::ops::{Deref, DerefMut};

use crate::config::LightConfig;
use crate::fsm::StateId;
use crate::slots::PresetSlots;

// ---------------------------------------------------------------------------
// Device state (shared with every other mode)
// ---------------------------------------------------------------------------

/// Device state that outlives any single UI mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceState {
    /// Level the ramp and momentary modes turn on at.
    pub memorized_level: u8,
    /// Active emitter channel (0-based).
    pub channel_mode: u8,
}

// ---------------------------------------------------------------------------
// Transition requests (written by handlers; applied by the state stack)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Replace the top of the stack.
    Set(StateId, u16),
    /// Suspend the top and run a child state.
    Push(StateId, u16),
    /// Finish the top state and resume its parent.
    Pop,
}

// ---------------------------------------------------------------------------
// UiContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub device: DeviceState,
    pub config: LightConfig,
    /// Tactical slot block.  Written only by the tactical config menu.
    pub slots: PresetSlots,
    pending: Option<Transition>,
    slots_dirty: bool,
}

impl UiContext {
    pub fn new(config: LightConfig, slots: PresetSlots) -> Self {
        Self {
            device: DeviceState::default(),
            config,
            slots,
            pending: None,
            slots_dirty: false,
        }
    }

    /// Context with factory slots for `config`.
    pub fn with_defaults(config: LightConfig) -> Self {
        let slots = PresetSlots::defaults(&config);
        Self::new(config, slots)
    }

    /// Ask the state stack for a transition once the current handler
    /// returns.  A later request replaces an earlier one.
    pub fn request(&mut self, transition: Transition) {
        self.pending = Some(transition);
    }

    pub fn pending_transition(&self) -> Option<Transition> {
        self.pending
    }

    pub(crate) fn take_transition(&mut self) -> Option<Transition> {
        self.pending.take()
    }

    /// Flag the slot block as needing a commit.
    pub fn mark_slots_dirty(&mut self) {
        self.slots_dirty = true;
    }

    pub fn slots_dirty(&self) -> bool {
        self.slots_dirty
    }

    pub(crate) fn clear_slots_dirty(&mut self) {
        self.slots_dirty = false;
    }

    /// Snapshot the shared device state; it is put back when the guard drops.
    pub fn guard(&mut self) -> DeviceStateGuard<'_> {
        DeviceStateGuard::new(self)
    }
}

// ---------------------------------------------------------------------------
// Save / restore guard
// ---------------------------------------------------------------------------

/// Scoped snapshot of [`DeviceState`].
///
/// Captures the memorized level (and the channel on multi-channel builds)
/// on creation and writes them back on drop, whichever path the handler
/// leaves by.  Derefs to the context so handlers work through it.
pub struct DeviceStateGuard<'a> {
    ctx: &'a mut UiContext,
    memorized_level: u8,
    channel_mode: Option<u8>,
}

impl<'a> DeviceStateGuard<'a> {
    fn new(ctx: &'a mut UiContext) -> Self {
        let memorized_level = ctx.device.memorized_level;
        let channel_mode = ctx
            .config
            .multi_channel()
            .then_some(ctx.device.channel_mode);
        Self {
            ctx,
            memorized_level,
            channel_mode,
        }
    }

    /// Change the channel written back on drop.  No-op on single-channel
    /// builds, where the channel is never saved.
    pub fn restore_channel_to(&mut self, channel: u8) {
        if let Some(saved) = self.channel_mode.as_mut() {
            *saved = channel;
        }
    }
}

impl Deref for DeviceStateGuard<'_> {
    type Target = UiContext;

    fn deref(&self) -> &UiContext {
        self.ctx
    }
}

impl DerefMut for DeviceStateGuard<'_> {
    fn deref_mut(&mut self) -> &mut UiContext {
        self.ctx
    }
}

impl Drop for DeviceStateGuard<'_> {
    fn drop(&mut self) {
        self.ctx.device.memorized_level = self.memorized_level;
        if let Some(channel) = self.channel_mode {
            self.ctx.device.channel_mode = channel;
        }
    }
}
