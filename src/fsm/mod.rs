//! Event-driven UI state stack.
//!
//! ```text
//! ┌─────────────────────────────┐
//! │  stack (top last)           │      event
//! │  ┌───────────────────────┐  │        │
//! │  │ TacticalConfig        │◀─┼────────┘  handled, or not a tick? done
//! │  ├───────────────────────┤  │        │  unhandled tick
//! │  │ Tactical              │◀─┼────────┘  handled? done
//! │  ├───────────────────────┤  │        │  unhandled tick
//! │  │ ...                   │◀─┼────────┘
//! │  └───────────────────────┘  │
//! └─────────────────────────────┘
//! ```
//!
//! Events go to the top state.  Suspended states below it only get the
//! tick passthrough: a `Tick` or `SleepTick` the states above left
//! unhandled.  Handlers never touch the stack directly: they
//! leave a [`Transition`] in the [`UiContext`], and the stack applies it
//! once the handler has returned.
//!
//! - `set`: the top state gets `Leave`, is replaced, the new one gets `Enter`.
//! - `push`: the new state goes on top and gets `Enter`; its parent is
//!   suspended, not left.
//! - `pop`: the top state gets `Leave` and is removed; the new top gets
//!   `Reenter`.

pub mod context;
pub mod event;
pub mod tactical;
pub mod tactical_config;

use context::{Transition, UiContext};
use event::{Event, EventResult};
use heapless::Vec;
use log::{info, warn};
use tactical::TacticalMode;
use tactical_config::TacticalConfig;

use crate::app::ports::UiPorts;

/// Maximum nesting of UI states.
pub const STACK_DEPTH: usize = 8;

/// Upper bound on transitions applied in one go (enter handlers may chain).
const MAX_CHAINED_TRANSITIONS: usize = 8;

// ---------------------------------------------------------------------------
// State identity
// ---------------------------------------------------------------------------

/// Enumeration of the UI states this crate dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum StateId {
    /// Device off; handled by the host's off mode.
    Off = 0,
    Tactical = 1,
    TacticalConfig = 2,
}

impl StateId {
    pub fn name(self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Tactical => "Tactical",
            Self::TacticalConfig => "TacticalConfig",
        }
    }
}

// ---------------------------------------------------------------------------
// State stack
// ---------------------------------------------------------------------------

/// The UI state stack.
///
/// Owns the handler objects, so a suspended state keeps its fields while a
/// child runs on top of it.
#[derive(Debug, Default)]
pub struct StateStack {
    stack: Vec<StateId, STACK_DEPTH>,
    tactical: TacticalMode,
    tactical_config: TacticalConfig,
}

impl StateStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The state that receives events first.
    pub fn current_state(&self) -> Option<StateId> {
        self.stack.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Whether `id` is anywhere on the stack.
    pub fn contains(&self, id: StateId) -> bool {
        self.stack.contains(&id)
    }

    /// Tactical mode's session, for inspection.
    pub fn tactical(&self) -> &TacticalMode {
        &self.tactical
    }

    /// Deliver one event to the top state (unhandled ticks continue down
    /// the stack), then apply whatever transition the handlers requested.
    pub fn emit(
        &mut self,
        event: Event,
        arg: u16,
        ctx: &mut UiContext,
        ports: &mut impl UiPorts,
    ) -> EventResult {
        let mut result = EventResult::NotHandled;
        for idx in (0..self.stack.len()).rev() {
            let id = self.stack[idx];
            result = self.dispatch(id, event, arg, ctx, ports);
            if result.is_handled() || !event.is_tick() {
                break;
            }
        }
        self.apply_pending(ctx, ports);
        result
    }

    /// Replace the top state (or start the stack if empty).
    pub fn set_state(
        &mut self,
        id: StateId,
        arg: u16,
        ctx: &mut UiContext,
        ports: &mut impl UiPorts,
    ) {
        ctx.request(Transition::Set(id, arg));
        self.apply_pending(ctx, ports);
    }

    /// Suspend the top state and run `id` on top of it.
    pub fn push_state(
        &mut self,
        id: StateId,
        arg: u16,
        ctx: &mut UiContext,
        ports: &mut impl UiPorts,
    ) {
        ctx.request(Transition::Push(id, arg));
        self.apply_pending(ctx, ports);
    }

    /// Finish the top state and resume its parent.
    pub fn pop_state(&mut self, ctx: &mut UiContext, ports: &mut impl UiPorts) {
        ctx.request(Transition::Pop);
        self.apply_pending(ctx, ports);
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn dispatch(
        &mut self,
        id: StateId,
        event: Event,
        arg: u16,
        ctx: &mut UiContext,
        ports: &mut impl UiPorts,
    ) -> EventResult {
        match id {
            StateId::Off => ports.off(event, arg, ctx),
            StateId::Tactical => self.tactical.handle(event, arg, ctx, ports),
            StateId::TacticalConfig => self.tactical_config.handle(event, arg, ctx, ports),
        }
    }

    fn apply_pending(&mut self, ctx: &mut UiContext, ports: &mut impl UiPorts) {
        for _ in 0..MAX_CHAINED_TRANSITIONS {
            let Some(transition) = ctx.take_transition() else {
                return;
            };
            self.apply(transition, ctx, ports);
        }
        if let Some(dropped) = ctx.take_transition() {
            warn!("state stack: transition chain too long, dropping {:?}", dropped);
        }
    }

    fn apply(&mut self, transition: Transition, ctx: &mut UiContext, ports: &mut impl UiPorts) {
        match transition {
            Transition::Set(id, arg) => {
                if let Some(old) = self.current_state() {
                    info!("state stack: {} -> {}", old.name(), id.name());
                    self.dispatch(old, Event::Leave, arg, ctx, ports);
                    self.stack.pop();
                } else {
                    info!("state stack: starting in {}", id.name());
                }
                // the slot just freed (or an empty stack) always has room
                let _ = self.stack.push(id);
                self.dispatch(id, Event::Enter, arg, ctx, ports);
            }
            Transition::Push(id, arg) => {
                if self.stack.push(id).is_err() {
                    warn!("state stack: full, refusing to push {}", id.name());
                    return;
                }
                info!("state stack: push {} (depth {})", id.name(), self.depth());
                self.dispatch(id, Event::Enter, arg, ctx, ports);
            }
            Transition::Pop => {
                let Some(old) = self.current_state() else {
                    warn!("state stack: pop on empty stack");
                    return;
                };
                self.dispatch(old, Event::Leave, 0, ctx, ports);
                self.stack.pop();
                info!("state stack: pop {} (depth {})", old.name(), self.depth());
                if let Some(top) = self.current_state() {
                    self.dispatch(top, Event::Reenter, 0, ctx, ports);
                }
            }
        }
    }
}
