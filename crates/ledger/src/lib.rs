//! Inventory ledger domain module.
//!
//! Catalog and movement-log state, stock invariants, queries and aggregate
//! figures. Pure domain logic: no IO, no ambient clock reads, no storage
//! concerns. Callers pass the reference instant in and persist the ledger
//! through their own adapter.

pub mod ledger;
pub mod movement;
pub mod product;
pub mod query;
pub mod reports;

pub use ledger::{INITIAL_STOCK_REASON, Ledger};
pub use movement::{Movement, MovementDraft, MovementKind};
pub use product::{Product, ProductDraft, StockStatus};
pub use query::{ProductFilter, ProductSort};
pub use reports::{Dashboard, MonthlyFlow, Period};
