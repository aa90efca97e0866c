use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use estoque_core::{Entity, MovementId, ProductId};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Inbound: increases on-hand quantity.
    Entrada,
    /// Outbound: decreases on-hand quantity.
    Saida,
}

/// One recorded stock movement. Append-only: never edited after recording.
///
/// `value` snapshots quantity times the unit price at recording time; later
/// price edits do not touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movement {
    id: MovementId,
    product_id: ProductId,
    #[serde(rename = "type")]
    kind: MovementKind,
    quantity: u32,
    reason: String,
    date: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    value: Decimal,
}

impl Movement {
    pub(crate) fn new(
        id: MovementId,
        product_id: ProductId,
        kind: MovementKind,
        quantity: u32,
        reason: String,
        date: DateTime<Utc>,
        value: Decimal,
    ) -> Self {
        Self {
            id,
            product_id,
            kind,
            quantity,
            reason,
            date,
            value,
        }
    }

    pub fn id(&self) -> MovementId {
        self.id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn value(&self) -> Decimal {
        self.value
    }
}

impl Entity for Movement {
    type Id = MovementId;

    fn id(&self) -> MovementId {
        self.id
    }
}

/// Caller-supplied movement fields; the ledger assigns id, date and value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementDraft {
    pub product_id: ProductId,
    pub kind: MovementKind,
    pub quantity: u32,
    pub reason: String,
}
