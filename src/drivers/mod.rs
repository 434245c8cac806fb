//! Output drivers.

pub mod emitter;
