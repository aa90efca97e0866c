//! Snapshot codec: whole-ledger JSON persistence under two stable keys.

use serde::Serialize;
use serde::de::DeserializeOwned;

use estoque_ledger::{Ledger, Movement, Product};

use crate::error::StoreError;
use crate::kv::KeyValueStore;

/// Storage key of the serialized product list.
pub const PRODUCTS_KEY: &str = "stockProducts";
/// Storage key of the serialized movement list.
pub const MOVEMENTS_KEY: &str = "stockMovements";

/// Reads and writes whole-ledger snapshots through a [`KeyValueStore`].
///
/// Each collection persists independently as one JSON array under its key.
/// Saves overwrite both keys in full; there is no incremental or versioned
/// form, and an absent key reads back as an empty collection.
#[derive(Debug)]
pub struct SnapshotStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Rehydrate a ledger from the persisted collections.
    pub fn load(&self) -> Result<Ledger, StoreError> {
        let products: Vec<Product> = self.load_collection(PRODUCTS_KEY)?;
        let movements: Vec<Movement> = self.load_collection(MOVEMENTS_KEY)?;
        Ok(Ledger::from_parts(products, movements))
    }

    /// Serialize the full ledger state, overwriting both keys.
    pub fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        self.save_collection(PRODUCTS_KEY, ledger.products())?;
        self.save_collection(MOVEMENTS_KEY, ledger.movements())?;
        tracing::debug!(
            products = ledger.products().len(),
            movements = ledger.movements().len(),
            "snapshot written"
        );
        Ok(())
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>, StoreError> {
        match self.store.get(key)? {
            None => Ok(Vec::new()),
            Some(blob) => serde_json::from_str(&blob).map_err(|e| StoreError::decode(key, e)),
        }
    }

    fn save_collection<T: Serialize>(&self, key: &str, items: &[T]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(items).map_err(|e| StoreError::write(key, e))?;
        self.store.put(key, blob)
    }
}
