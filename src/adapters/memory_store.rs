//! In-memory storage backend.
//!
//! Stands in for the EEPROM/flash store on the host.  Keys are namespaced
//! exactly like the device backend so blobs written here decode there.

use std::collections::HashMap;

use log::debug;

use crate::app::ports::{StorageError, StoragePort};

/// Maximum number of keys the simulated partition holds.
const MAX_KEYS: usize = 64;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    store: HashMap<String, Vec<u8>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    fn composite_key(namespace: &str, key: &str) -> String {
        format!("{}::{}", namespace, key)
    }
}

impl StoragePort for MemoryStorage {
    fn read(&self, namespace: &str, key: &str, buf: &mut [u8]) -> Result<usize, StorageError> {
        match self.store.get(&Self::composite_key(namespace, key)) {
            Some(data) => {
                let len = data.len().min(buf.len());
                buf[..len].copy_from_slice(&data[..len]);
                Ok(len)
            }
            None => Err(StorageError::NotFound),
        }
    }

    fn write(&mut self, namespace: &str, key: &str, data: &[u8]) -> Result<(), StorageError> {
        let composite = Self::composite_key(namespace, key);
        if !self.store.contains_key(&composite) && self.store.len() >= MAX_KEYS {
            return Err(StorageError::Full);
        }
        debug!("MemoryStorage: {} <- {} bytes", composite, data.len());
        self.store.insert(composite, data.to_vec());
        Ok(())
    }

    fn delete(&mut self, namespace: &str, key: &str) -> Result<(), StorageError> {
        self.store.remove(&Self::composite_key(namespace, key));
        Ok(())
    }
}
