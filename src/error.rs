//! Unified error type for the light UI crate.
//!
//! The gesture handlers themselves never fail: bad presets and bad config
//! entries are absorbed by policy.  Errors only surface at the edges, where
//! a board profile is validated and where the slot block meets storage.

use core::fmt;

use crate::app::ports::{ConfigError, StorageError};

/// Every fallible operation at the crate boundary funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Board configuration or a stored slot block is invalid.
    Config(ConfigError),
    /// The persistent store could not be read or written.
    Storage(StorageError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Storage(e) => write!(f, "storage: {e}"),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
