//! Main emitter driver over a PWM channel.
//!
//! Maps ramp levels `0..=ramp_size` linearly onto the PWM duty range and
//! plays the acknowledgment blink.  The blink never blocks: `blink_once`
//! bumps the output and `tick()` (called at the UI tick rate) puts the
//! base level back once the blink has run its course.
//!
//! ## Dual-target design
//!
//! Any `embedded_hal::pwm::SetDutyCycle` works, so the same driver runs on
//! the device timer and on a recording fake in host tests.

use embedded_hal::pwm::SetDutyCycle;
use log::warn;

use crate::app::ports::OutputPort;
use crate::config::LightConfig;

/// Ticks the blink bump stays visible.
pub const BLINK_TICKS: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterState {
    Steady { level: u8 },
    Blinking { level: u8, ticks_left: u8 },
}

pub struct PwmEmitter<P> {
    pwm: P,
    ramp_size: u8,
    state: EmitterState,
}

impl<P: SetDutyCycle> PwmEmitter<P> {
    pub fn new(pwm: P, config: &LightConfig) -> Self {
        let mut emitter = Self {
            pwm,
            ramp_size: config.ramp_size.max(1),
            state: EmitterState::Steady { level: 0 },
        };
        emitter.write(0);
        emitter
    }

    pub fn state(&self) -> EmitterState {
        self.state
    }

    /// Base level, ignoring a blink in progress.
    pub fn level(&self) -> u8 {
        match self.state {
            EmitterState::Steady { level } | EmitterState::Blinking { level, .. } => level,
        }
    }

    /// Advance animations by one UI tick.
    pub fn tick(&mut self) {
        if let EmitterState::Blinking { level, ticks_left } = self.state {
            if ticks_left <= 1 {
                self.state = EmitterState::Steady { level };
                self.write(level);
            } else {
                self.state = EmitterState::Blinking {
                    level,
                    ticks_left: ticks_left - 1,
                };
            }
        }
    }

    pub fn into_inner(self) -> P {
        self.pwm
    }

    /// Bump a sixth of the ramp above the current level, or go dark if
    /// that would overflow the ramp.
    fn blink_level(&self, level: u8) -> u8 {
        let bump = level as u16 + (self.ramp_size / 6).max(1) as u16;
        if bump > self.ramp_size as u16 { 0 } else { bump as u8 }
    }

    fn write(&mut self, level: u8) {
        if let Err(e) = self
            .pwm
            .set_duty_cycle_fraction(level as u16, self.ramp_size as u16)
        {
            warn!("emitter: PWM write failed: {:?}", e);
        }
    }
}

impl<P: SetDutyCycle> OutputPort for PwmEmitter<P> {
    fn set_level(&mut self, level: u8) {
        let level = level.min(self.ramp_size);
        self.state = EmitterState::Steady { level };
        self.write(level);
    }

    fn blink_once(&mut self) {
        let level = self.level();
        let bump = self.blink_level(level);
        self.state = EmitterState::Blinking {
            level,
            ticks_left: BLINK_TICKS,
        };
        self.write(bump);
    }

    fn cancel_animations(&mut self) {
        if let EmitterState::Blinking { level, .. } = self.state {
            self.state = EmitterState::Steady { level };
            self.write(level);
        }
    }
}
