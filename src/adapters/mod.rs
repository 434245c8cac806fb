//! Adapters: concrete implementations of the port traits.
//!
//! | Adapter         | Implements   | Connects to                    |
//! |-----------------|--------------|--------------------------------|
//! | `memory_store`  | StoragePort  | In-memory map (host / tests)   |
//! | `preset_store`  | (none)       | Tactical slot block ↔ storage  |

pub mod memory_store;
pub mod preset_store;
