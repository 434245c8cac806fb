//! Tactical slot block persistence.
//!
//! The slot block is stored as one postcard blob under its own key, so the
//! rest of the persisted configuration never has to know its layout.  A
//! block written by a build with a different slot count is reshaped on load
//! (extra slots dropped, missing channel slots read as "follow active").

use log::{info, warn};

use crate::app::ports::{ConfigError, StorageError, StoragePort};
use crate::config::LightConfig;
use crate::error::Result;
use crate::slots::PresetSlots;

const PRESET_NAMESPACE: &str = "torchui";
const TACTICAL_KEY: &str = "tactical";

/// Worst-case encoded size: length prefix plus six slot bytes, with room
/// to spare.
const MAX_BLOB_SIZE: usize = 16;

/// Load the slot block, or factory slots if none was ever committed.
pub fn load_slots(store: &impl StoragePort, config: &LightConfig) -> Result<PresetSlots> {
    let mut buf = [0u8; MAX_BLOB_SIZE];
    let len = match store.read(PRESET_NAMESPACE, TACTICAL_KEY, &mut buf) {
        Ok(len) => len,
        Err(StorageError::NotFound) => {
            info!("preset store: no stored tactical slots, using defaults");
            return Ok(PresetSlots::defaults(config));
        }
        Err(e) => {
            warn!("preset store: read failed: {}", e);
            return Err(e.into());
        }
    };

    let stored: PresetSlots =
        postcard::from_bytes(&buf[..len]).map_err(|_| ConfigError::Corrupted)?;
    if stored.len() != config.slot_count() {
        warn!(
            "preset store: stored block has {} slots, build expects {}",
            stored.len(),
            config.slot_count()
        );
    }
    info!("preset store: loaded tactical slots ({} bytes)", len);
    Ok(PresetSlots::from_bytes(config, stored.as_bytes()))
}

/// Commit the slot block.
pub fn commit_slots(store: &mut impl StoragePort, slots: &PresetSlots) -> Result<()> {
    let bytes = postcard::to_allocvec(slots).map_err(|_| StorageError::IoError)?;
    store.write(PRESET_NAMESPACE, TACTICAL_KEY, &bytes)?;
    info!("preset store: committed tactical slots {:?}", slots.as_bytes());
    Ok(())
}

/// Forget the committed block; the next boot gets factory slots.
pub fn reset_slots(store: &mut impl StoragePort) -> Result<()> {
    store.delete(PRESET_NAMESPACE, TACTICAL_KEY)?;
    Ok(())
}
