//! Typed UI events.
//!
//! The button debouncer reports every gesture as a click count plus the
//! phase the gesture is in.  A "held" event means the button is down at the
//! end of a click run; a "released" event means the run ended with the
//! button up.
//!
//! | Gesture                  | Event                                       |
//! |--------------------------|---------------------------------------------|
//! | press of the 2nd click   | `Button { clicks: 2, phase: Press }`        |
//! | 2 clicks, still holding  | `Button { clicks: 2, phase: Hold }`         |
//! | let go after the hold    | `Button { clicks: 2, phase: HoldRelease }`  |
//! | 3 clicks, then timeout   | `Button { clicks: 3, phase: Complete }`     |

/// Where a click run is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonPhase {
    /// Button went down for the N-th click.
    Press,
    /// Button is still down after the N-th click; repeats while held.
    Hold,
    /// Button went up after a short N-th click.
    Release,
    /// Button went up after a hold.
    HoldRelease,
    /// Click run finished: N clicks, button up, timeout elapsed.
    Complete,
}

/// Event delivered to a UI state handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// State was entered (set or pushed).
    Enter,
    /// State is being replaced or popped.
    Leave,
    /// A child state popped and this state is on top again.
    Reenter,
    /// Periodic tick while awake.
    Tick,
    /// Periodic tick while asleep.
    SleepTick,
    /// Button gesture.
    Button { clicks: u8, phase: ButtonPhase },
}

impl Event {
    /// N clicks completed with the button released.
    pub const fn clicks(n: u8) -> Self {
        Self::Button {
            clicks: n,
            phase: ButtonPhase::Complete,
        }
    }

    /// N-th click held down.
    pub const fn click_hold(n: u8) -> Self {
        Self::Button {
            clicks: n,
            phase: ButtonPhase::Hold,
        }
    }

    /// N-th click pressed.
    pub const fn click_press(n: u8) -> Self {
        Self::Button {
            clicks: n,
            phase: ButtonPhase::Press,
        }
    }

    /// Let go after holding the N-th click.
    pub const fn click_hold_release(n: u8) -> Self {
        Self::Button {
            clicks: n,
            phase: ButtonPhase::HoldRelease,
        }
    }

    /// Click count when the button is currently down.
    pub fn held_clicks(self) -> Option<u8> {
        match self {
            Self::Button {
                clicks,
                phase: ButtonPhase::Press | ButtonPhase::Hold,
            } => Some(clicks),
            _ => None,
        }
    }

    /// True for any event that ends with the button up.
    pub fn is_released(self) -> bool {
        matches!(
            self,
            Self::Button {
                phase: ButtonPhase::Release | ButtonPhase::HoldRelease | ButtonPhase::Complete,
                ..
            }
        )
    }

    /// Awake or asleep tick; the only events a suspended state sees.
    pub fn is_tick(self) -> bool {
        matches!(self, Self::Tick | Self::SleepTick)
    }
}

/// Whether a handler consumed the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Handled,
    NotHandled,
}

impl EventResult {
    pub fn is_handled(self) -> bool {
        self == Self::Handled
    }
}
