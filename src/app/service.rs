//! Application service: the hexagonal core.
//!
//! [`LightService`] owns the UI state stack and the shared context.  The
//! host firmware feeds it button and tick events and hands it a storage
//! adapter at boot and whenever it wants slot changes committed.
//!
//! ```text
//!   StoragePort ──▶ ┌────────────────────────┐ ──▶ OutputPort
//!                   │      LightService       │
//!  button / ticks ─▶│  StateStack · UiContext │ ──▶ ModeDelegates
//!                   └────────────────────────┘
//! ```

use log::{info, warn};

use crate::adapters::preset_store;
use crate::config::LightConfig;
use crate::error::Result;
use crate::fsm::context::UiContext;
use crate::fsm::event::{Event, EventResult};
use crate::fsm::{StateId, StateStack};
use crate::slots::PresetSlots;

use super::ports::{StoragePort, UiPorts};

/// The application service orchestrates the UI.
#[derive(Debug)]
pub struct LightService {
    stack: StateStack,
    ctx: UiContext,
    events_handled: u64,
}

impl LightService {
    /// Construct the service with factory slots.
    ///
    /// Does **not** enter any state; call [`boot`](Self::boot) and then
    /// [`start`](Self::start).
    pub fn new(config: LightConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            stack: StateStack::new(),
            ctx: UiContext::with_defaults(config),
            events_handled: 0,
        })
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Load the tactical slots from storage.  A missing or unreadable block
    /// falls back to factory slots; the UI never refuses to boot over it.
    pub fn boot(&mut self, store: &impl StoragePort) {
        self.ctx.slots = match preset_store::load_slots(store, &self.ctx.config) {
            Ok(slots) => slots,
            Err(e) => {
                warn!("LightService: {}, using factory tactical slots", e);
                PresetSlots::defaults(&self.ctx.config)
            }
        };
        self.ctx.clear_slots_dirty();
        info!("LightService: tactical slots {:?}", self.ctx.slots.as_bytes());
    }

    /// Enter the initial UI state.
    pub fn start(&mut self, state: StateId, ports: &mut impl UiPorts) {
        self.stack.set_state(state, 0, &mut self.ctx, ports);
        info!("LightService started in {:?}", state);
    }

    // ── Event routing ─────────────────────────────────────────

    /// Deliver one event to the state stack.
    pub fn handle_event(&mut self, event: Event, arg: u16, ports: &mut impl UiPorts) -> EventResult {
        self.events_handled += 1;
        self.stack.emit(event, arg, &mut self.ctx, ports)
    }

    /// Commit the slot block if the config menu changed it and has since
    /// finished.  Returns whether anything was written.
    pub fn flush(&mut self, store: &mut impl StoragePort) -> Result<bool> {
        if !self.ctx.slots_dirty() || self.stack.contains(StateId::TacticalConfig) {
            return Ok(false);
        }
        preset_store::commit_slots(store, &self.ctx.slots)?;
        self.ctx.clear_slots_dirty();
        Ok(true)
    }

    // ── Accessors ─────────────────────────────────────────────

    pub fn current_state(&self) -> Option<StateId> {
        self.stack.current_state()
    }

    pub fn stack(&self) -> &StateStack {
        &self.stack
    }

    pub fn context(&self) -> &UiContext {
        &self.ctx
    }

    /// Mutable context, for the host to update device state owned by other
    /// modes (e.g. the ramp changing the memorized level).
    pub fn context_mut(&mut self) -> &mut UiContext {
        &mut self.ctx
    }

    pub fn events_handled(&self) -> u64 {
        self.events_handled
    }
}
