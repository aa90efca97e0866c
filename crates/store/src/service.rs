//! Write-through facade tying the ledger to a persistence adapter.

use chrono::Utc;
use thiserror::Error;

use estoque_core::{DomainError, ProductId};
use estoque_ledger::{Dashboard, Ledger, Movement, MovementDraft, Product, ProductDraft};

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::snapshot::SnapshotStore;

/// Failure from a write-through operation: either the domain rejected it
/// (nothing changed) or persistence failed after the in-memory change.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Persistence(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Owns the ledger and re-serializes the full state after every successful
/// mutation.
///
/// This is the only place that reads `Utc::now()`; the ledger itself takes
/// the instant as a parameter.
#[derive(Debug)]
pub struct StockService<S: KeyValueStore> {
    ledger: Ledger,
    snapshots: SnapshotStore<S>,
}

impl<S: KeyValueStore> StockService<S> {
    /// Load the persisted ledger from `store`, starting empty when the store
    /// holds nothing yet.
    pub fn open(store: S) -> Result<Self, StoreError> {
        let snapshots = SnapshotStore::new(store);
        let ledger = snapshots.load()?;
        tracing::info!(
            products = ledger.products().len(),
            movements = ledger.movements().len(),
            "ledger loaded"
        );
        Ok(Self { ledger, snapshots })
    }

    /// Like [`StockService::open`], but installs and persists `seed()` when
    /// the loaded catalog is empty (first run against a fresh store).
    pub fn open_or_seed(store: S, seed: impl FnOnce() -> Ledger) -> Result<Self, StoreError> {
        let mut service = Self::open(store)?;
        if !service.ledger.has_products() {
            tracing::info!("catalog is empty, installing seed data");
            service.ledger = seed();
            service.snapshots.save(&service.ledger)?;
        }
        Ok(service)
    }

    /// Read access for queries, reports and projections.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn create_product(&mut self, draft: ProductDraft) -> ServiceResult<Product> {
        let product = self.ledger.create_product(draft, Utc::now())?;
        self.snapshots.save(&self.ledger)?;
        Ok(product)
    }

    pub fn update_product(&mut self, id: ProductId, draft: ProductDraft) -> ServiceResult<Product> {
        let product = self.ledger.update_product(id, draft)?;
        self.snapshots.save(&self.ledger)?;
        Ok(product)
    }

    /// Returns whether a product was removed. A no-op delete skips the
    /// snapshot write.
    pub fn delete_product(&mut self, id: ProductId) -> Result<bool, StoreError> {
        if !self.ledger.delete_product(id) {
            return Ok(false);
        }
        self.snapshots.save(&self.ledger)?;
        Ok(true)
    }

    pub fn record_movement(&mut self, draft: MovementDraft) -> ServiceResult<Movement> {
        let movement = self.ledger.record_movement(draft, Utc::now())?;
        self.snapshots.save(&self.ledger)?;
        Ok(movement)
    }

    /// Dashboard figures anchored at the current instant.
    pub fn dashboard(&self) -> Dashboard {
        self.ledger.dashboard(Utc::now())
    }
}
