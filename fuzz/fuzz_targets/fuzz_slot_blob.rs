//! Fuzz target: loading the persisted tactical slot block
//!
//! Stores arbitrary bytes under the slot key and boots from them.  Checks:
//! - No panics under any byte sequence
//! - The loaded block always has exactly the build's slot count
//!
//! cargo fuzz run fuzz_slot_blob

#![no_main]

use libfuzzer_sys::fuzz_target;
use torchui::adapters::memory_store::MemoryStorage;
use torchui::adapters::preset_store;
use torchui::app::ports::StoragePort;
use torchui::config::LightConfig;

fuzz_target!(|data: &[u8]| {
    let Some((&channels, blob)) = data.split_first() else {
        return;
    };
    let config = LightConfig {
        num_channel_modes: 1 + channels % 4,
        ..LightConfig::default()
    };

    let mut store = MemoryStorage::new();
    if store.write("torchui", "tactical", blob).is_err() {
        return;
    }
    if let Ok(slots) = preset_store::load_slots(&store, &config) {
        assert_eq!(slots.len(), config.slot_count());
    }
});
