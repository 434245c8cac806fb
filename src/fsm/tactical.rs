//! Tactical mode: momentary presets on 1H / 2H / 3H.
//!
//! ```text
//!            ┌──────[1H/2H/3H, steady slot]──▶ MOMENTARY_STEADY ─┐
//!   IDLE ────┤                                                   ├──[release]──▶ IDLE
//!            └──────[1H/2H/3H, strobe slot]──▶ MOMENTARY_STROBE ─┘
//!
//!   3C: swallowed    6C: blink, go to Off    7H: push tactical config
//! ```
//!
//! While a gesture is live every event is also forwarded to the momentary
//! mode, which owns the actual output.  Idle visuals and sleep timing are
//! borrowed from lockout mode.
//!
//! The memorized level (and the channel on multi-channel builds) is
//! snapshotted around every event, so the preset override never leaks to
//! other modes.

use log::{debug, info};

use super::StateId;
use super::context::{Transition, UiContext};
use super::event::{Event, EventResult};
use crate::app::ports::UiPorts;
use crate::slots::Preset;

/// What the momentary mode should drive while the button is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MomentaryOutput {
    /// Steady output at the memorized level.
    Steady { level: u8 },
    /// Strobe variant.
    Strobe { index: u8 },
}

/// Gesture state for one activation of tactical mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gesture {
    /// No preset held; output is off.
    #[default]
    Idle,
    /// `channel` is the channel to show, or `None` on single-channel builds.
    MomentarySteady { level: u8, channel: Option<u8> },
    /// Strobe variant `index` held.
    MomentaryStrobe { index: u8 },
}

impl Gesture {
    pub fn is_momentary(self) -> bool {
        self != Self::Idle
    }
}

/// Tactical mode handler.
///
/// Lives as long as the mode is on the state stack, so a pushed config menu
/// suspends it without losing the gesture or the entry channel.
#[derive(Debug, Default)]
pub struct TacticalMode {
    gesture: Gesture,
    /// Channel active when the mode was entered.
    entry_channel: Option<u8>,
}

impl TacticalMode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_momentary(&self) -> bool {
        self.gesture.is_momentary()
    }

    pub fn entry_channel(&self) -> Option<u8> {
        self.entry_channel
    }

    /// Forget the current activation.
    pub fn reset(&mut self) {
        self.gesture = Gesture::Idle;
        self.entry_channel = None;
    }

    /// Handle one event.
    pub fn handle(
        &mut self,
        event: Event,
        arg: u16,
        ctx: &mut UiContext,
        ports: &mut impl UiPorts,
    ) -> EventResult {
        if event == Event::Enter {
            self.reset();
        }
        let entry_channel = *self.entry_channel.get_or_insert(ctx.device.channel_mode);

        let ret = self.handle_gesture(event, arg, ctx, ports, entry_channel);

        match event {
            // borrow lockout's aux LED and sleep visuals, not its buttons
            Event::Enter => {
                ports.lockout(event, arg, ctx);
            }
            Event::Tick => {
                if self.is_momentary() {
                    return EventResult::Handled;
                }
                return ports.lockout(event, arg, ctx);
            }
            Event::SleepTick => return ports.lockout(event, arg, ctx),
            Event::Leave => self.reset(),
            _ => {}
        }

        // 3C normally cycles channels; keep it from leaking in here
        if event == Event::clicks(3) {
            return EventResult::Handled;
        }

        if event == Event::clicks(6) {
            info!("tactical: 6C, turning off");
            ports.blink_once();
            ctx.request(Transition::Set(StateId::Off, 0));
            return EventResult::Handled;
        }

        if event == Event::click_hold(7) {
            info!("tactical: 7H, entering tactical config");
            ctx.request(Transition::Push(StateId::TacticalConfig, 0));
            return EventResult::Handled;
        }

        ret
    }

    /// Gesture tracking and momentary forwarding, bracketed by the device
    /// state guard.
    fn handle_gesture(
        &mut self,
        event: Event,
        arg: u16,
        ctx: &mut UiContext,
        ports: &mut impl UiPorts,
        entry_channel: u8,
    ) -> EventResult {
        let mut ctx = ctx.guard();
        let mut ret = EventResult::NotHandled;

        if let Some(clicks) = event.held_clicks() {
            // 4H and up deliberately do nothing, but still count as handled
            ret = EventResult::Handled;
            self.gesture = self.resolve(clicks, &ctx, entry_channel);
        } else if event.is_released() {
            if self.is_momentary() {
                debug!("tactical: gesture released");
            }
            self.gesture = Gesture::Idle;
            ports.set_level(0);
            ctx.device.channel_mode = entry_channel;
            ctx.restore_channel_to(entry_channel);
            ports.cancel_animations();
        }

        let output = match self.gesture {
            Gesture::Idle => return ret,
            Gesture::MomentarySteady { level, channel } => {
                ctx.device.memorized_level = level;
                if let Some(channel) = channel {
                    ctx.device.channel_mode = channel;
                }
                MomentaryOutput::Steady { level }
            }
            Gesture::MomentaryStrobe { index } => MomentaryOutput::Strobe { index },
        };

        let forwarded = ports.momentary(event, arg, output, &mut ctx);
        if ret.is_handled() { ret } else { forwarded }
    }

    fn resolve(&self, clicks: u8, ctx: &UiContext, entry_channel: u8) -> Gesture {
        let config = &ctx.config;
        let gesture = match ctx.slots.preset(clicks, config) {
            Some(Preset::Steady(level)) => Gesture::MomentarySteady {
                level,
                channel: config.multi_channel().then(|| {
                    ctx.slots
                        .channel_override(clicks, config)
                        .unwrap_or(entry_channel)
                }),
            },
            // strobes keep the channel the mode was entered with
            Some(Preset::Strobe(index)) => Gesture::MomentaryStrobe { index },
            None => Gesture::Idle,
        };
        if gesture != self.gesture {
            debug!("tactical: {}H -> {:?}", clicks, gesture);
        }
        gesture
    }
}
