//! Application core: the tactical UI behind its port boundary.
//!
//! [`service::LightService`] wires the UI state stack to the outside world.
//! All interaction with hardware, storage and the rest of the UI happens
//! through the traits in [`ports`], keeping this layer testable without
//! real peripherals.

pub mod ports;
pub mod service;
