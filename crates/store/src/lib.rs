//! Persistence layer: key-value stores, snapshot codec, write-through service.
//!
//! The key-value seam the snapshots flow through, the JSON snapshot codec,
//! the write-through [`StockService`] facade and the demo bootstrap data.

pub mod error;
pub mod file;
pub mod kv;
pub mod sample;
pub mod service;
pub mod snapshot;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::{KeyValueStore, MemoryStore};
pub use sample::sample_ledger;
pub use service::{ServiceError, ServiceResult, StockService};
pub use snapshot::{MOVEMENTS_KEY, PRODUCTS_KEY, SnapshotStore};
