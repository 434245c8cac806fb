//! Port traits: the boundary between the tactical UI and the rest of the
//! firmware.
//!
//! ```text
//!   dispatcher ──▶ StateStack ──▶ TacticalMode ──▶ ModeDelegates / OutputPort
//! ```
//!
//! The tactical handlers never drive hardware or foreign modes directly.
//! Output, the momentary/lockout/off modes, the generic numeric config
//! menu and persistent storage are all reached through these traits, so
//! the core is testable with recording mocks.

use crate::fsm::context::UiContext;
use crate::fsm::event::{Event, EventResult};
use crate::fsm::tactical::MomentaryOutput;

// ───────────────────────────────────────────────────────────────
// Output port (domain → emitter driver)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the main emitter.
pub trait OutputPort {
    /// Set the ramp level immediately (0 = off).
    fn set_level(&mut self, level: u8);

    /// Queue a single acknowledgment blink.  Played out by later ticks.
    fn blink_once(&mut self);

    /// Stop any animation in progress without a fade.
    fn cancel_animations(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Foreign modes (domain → other UI states)
// ───────────────────────────────────────────────────────────────

/// Callback invoked by the config menu once per confirmed step.
/// `step` is 1-based.
pub type ConfigSaveFn = fn(&mut UiContext, u8, u8);

/// Handlers owned by other parts of the UI that the tactical mode borrows.
pub trait ModeDelegates {
    /// Generic momentary mode: drives output while the button is held.
    fn momentary(
        &mut self,
        event: Event,
        arg: u16,
        output: MomentaryOutput,
        ctx: &mut UiContext,
    ) -> EventResult;

    /// Lockout mode, used only for its idle aux-LED and sleep behavior.
    fn lockout(&mut self, event: Event, arg: u16, ctx: &mut UiContext) -> EventResult;

    /// The device's Off state.
    fn off(&mut self, event: Event, arg: u16, ctx: &mut UiContext) -> EventResult;

    /// Generic multi-step numeric config menu.  Calls `save` once per
    /// confirmed step and requests a pop when the last step is done.
    fn config_menu(
        &mut self,
        event: Event,
        arg: u16,
        ctx: &mut UiContext,
        num_steps: u8,
        save: ConfigSaveFn,
    ) -> EventResult;
}

/// Everything a UI state handler may touch.
pub trait UiPorts: OutputPort + ModeDelegates {}

impl<T: OutputPort + ModeDelegates> UiPorts for T {}

// ───────────────────────────────────────────────────────────────
// Storage port (domain ↔ flash / EEPROM)
// ───────────────────────────────────────────────────────────────

/// Persistent key-value storage.
///
/// Write operations MUST be atomic; no partial writes on power loss.
/// Keys are namespaced to keep subsystems apart.
pub trait StoragePort {
    /// Read a value.  Returns the number of bytes written to `buf`.
    fn read(&self, namespace: &str, key: &str, buf: &mut [u8]) -> Result<usize, StorageError>;

    /// Write a value atomically.
    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError>;

    /// Delete a key.  Returns `Ok(())` even if the key didn't exist.
    fn delete(&mut self, namespace: &str, key: &str) -> Result<(), StorageError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from configuration validation and slot-block decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Stored slot block failed deserialization.
    Corrupted,
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

/// Errors from [`StoragePort`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageError {
    /// Requested key does not exist.
    NotFound,
    /// Storage partition is full.
    Full,
    /// Generic I/O error.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Corrupted => write!(f, "slot block corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}

impl core::fmt::Display for StorageError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "key not found"),
            Self::Full => write!(f, "storage full"),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}
