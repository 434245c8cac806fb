//! Tactical preset UI for handheld light firmware.
//!
//! Momentary presets on 1H / 2H / 3H, a 7H config menu that rewrites them,
//! and the state stack that hosts both.  Hardware, foreign modes and
//! storage sit behind the port traits in [`app::ports`], so everything here
//! runs on the host for testing.

#![deny(unused_must_use)]

pub mod adapters;
pub mod app;
pub mod config;
pub mod drivers;
pub mod error;
pub mod fsm;
pub mod slots;
