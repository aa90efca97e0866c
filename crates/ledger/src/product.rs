use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use estoque_core::{DomainError, DomainResult, Entity, ProductId};

/// Stock level classification for one product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// Nothing on hand.
    Out,
    /// At or below the product's minimum threshold.
    Low,
    /// Above the minimum threshold.
    Normal,
}

/// Catalog entry: one tracked product.
///
/// Fields serialize under the persisted camelCase names. `quantity` is only
/// mutated through the owning [`Ledger`](crate::Ledger) so the movement log
/// stays authoritative for stock changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    quantity: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    price: Decimal,
    min_stock: u32,
    created_at: DateTime<Utc>,
}

impl Product {
    pub(crate) fn new(id: ProductId, draft: ProductDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            quantity: draft.quantity,
            price: draft.price,
            min_stock: draft.min_stock,
            created_at,
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn min_stock(&self) -> u32 {
        self.min_stock
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Current quantity valued at the current unit price.
    pub fn total_value(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }

    /// Classify the current stock level against the minimum threshold.
    ///
    /// Zero on hand is always `Out`, even when the threshold itself is zero.
    pub fn stock_status(&self) -> StockStatus {
        if self.quantity == 0 {
            StockStatus::Out
        } else if self.quantity <= self.min_stock {
            StockStatus::Low
        } else {
            StockStatus::Normal
        }
    }

    /// Replace the caller-editable fields. Identity and creation instant are
    /// preserved.
    pub(crate) fn apply_draft(&mut self, draft: ProductDraft) {
        self.name = draft.name;
        self.category = draft.category;
        self.quantity = draft.quantity;
        self.price = draft.price;
        self.min_stock = draft.min_stock;
    }

    /// Apply an inbound quantity.
    pub(crate) fn receive(&mut self, quantity: u32) {
        self.quantity += quantity;
    }

    /// Apply an outbound quantity, failing when it exceeds on-hand stock.
    /// On failure the product is untouched.
    pub(crate) fn issue(&mut self, quantity: u32) -> DomainResult<()> {
        if quantity > self.quantity {
            return Err(DomainError::InsufficientStock {
                product_id: self.id,
                requested: quantity,
                available: self.quantity,
            });
        }
        self.quantity -= quantity;
        Ok(())
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Caller-supplied product fields, shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub price: Decimal,
    pub min_stock: u32,
}

impl ProductDraft {
    /// Validate field constraints: non-blank name and category, non-negative
    /// price.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::invalid_input("name cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::invalid_input("category cannot be empty"));
        }
        if self.price < Decimal::ZERO {
            return Err(DomainError::invalid_input("price cannot be negative"));
        }
        Ok(())
    }
}
