use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use estoque_core::{DomainError, DomainResult, Entity, MovementId, ProductId};

use crate::movement::{Movement, MovementDraft, MovementKind};
use crate::product::{Product, ProductDraft};

/// Reason attached to the movement synthesized when a product is created
/// with starting stock.
pub const INITIAL_STOCK_REASON: &str = "Estoque inicial";

/// Aggregate root owning the product catalog and the movement log.
///
/// Both sequences keep insertion order. Every mutation validates before
/// touching state, so a failed operation leaves the ledger exactly as it
/// found it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    products: Vec<Product>,
    movements: Vec<Movement>,
    next_product_id: ProductId,
    next_movement_id: MovementId,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn position_of<E: Entity>(items: &[E], id: E::Id) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

impl Ledger {
    /// Empty ledger. Identifiers start at 1.
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            movements: Vec::new(),
            next_product_id: ProductId::new(1),
            next_movement_id: MovementId::new(1),
        }
    }

    /// Rehydrate from persisted sequences.
    ///
    /// Fresh identifiers resume above the largest one present, so entities
    /// created after rehydration never collide with persisted ones.
    pub fn from_parts(products: Vec<Product>, movements: Vec<Movement>) -> Self {
        let next_product_id = products
            .iter()
            .map(|product| product.id())
            .max()
            .map_or(ProductId::new(1), ProductId::next);
        let next_movement_id = movements
            .iter()
            .map(|movement| movement.id())
            .max()
            .map_or(MovementId::new(1), MovementId::next);
        Self {
            products,
            movements,
            next_product_id,
            next_movement_id,
        }
    }

    /// Products in creation order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Movements in recording order.
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Look up one product.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        position_of(&self.products, id).map(|position| &self.products[position])
    }

    pub fn has_products(&self) -> bool {
        !self.products.is_empty()
    }

    /// Add a product to the catalog.
    ///
    /// A product created with starting stock also gets an opening `entrada`
    /// movement (reason [`INITIAL_STOCK_REASON`]) so the movement log explains
    /// the stock it starts with.
    pub fn create_product(
        &mut self,
        draft: ProductDraft,
        at: DateTime<Utc>,
    ) -> DomainResult<Product> {
        draft.validate()?;
        let id = self.next_product_id;
        self.next_product_id = id.next();
        let product = Product::new(id, draft, at);
        if product.quantity() > 0 {
            let movement_id = self.next_movement_id;
            self.next_movement_id = movement_id.next();
            self.movements.push(Movement::new(
                movement_id,
                id,
                MovementKind::Entrada,
                product.quantity(),
                INITIAL_STOCK_REASON.to_string(),
                at,
                product.total_value(),
            ));
        }
        tracing::info!(product_id = %id, name = product.name(), "created product");
        self.products.push(product.clone());
        Ok(product)
    }

    /// Replace a product's editable fields. Identity and creation instant
    /// are preserved.
    pub fn update_product(&mut self, id: ProductId, draft: ProductDraft) -> DomainResult<Product> {
        draft.validate()?;
        let position = position_of(&self.products, id).ok_or(DomainError::NotFound(id))?;
        let product = &mut self.products[position];
        if draft.quantity != product.quantity() {
            // Direct quantity edits bypass the movement log; the delta stays
            // unexplained by any movement.
            tracing::warn!(
                product_id = %id,
                from = product.quantity(),
                to = draft.quantity,
                "product quantity edited without a movement"
            );
        }
        product.apply_draft(draft);
        Ok(product.clone())
    }

    /// Remove a product and every movement that references it.
    ///
    /// Returns whether anything was removed; deleting an unknown id is a
    /// no-op, not an error.
    pub fn delete_product(&mut self, id: ProductId) -> bool {
        let Some(position) = position_of(&self.products, id) else {
            return false;
        };
        self.products.remove(position);
        let before = self.movements.len();
        self.movements.retain(|movement| movement.product_id() != id);
        tracing::info!(
            product_id = %id,
            cascaded = before - self.movements.len(),
            "deleted product and its movements"
        );
        true
    }

    /// Append a movement and adjust the referenced product's stock.
    ///
    /// An outbound movement larger than the on-hand quantity is rejected
    /// before any state changes. `value` snapshots quantity times the unit
    /// price as of `at`.
    pub fn record_movement(
        &mut self,
        draft: MovementDraft,
        at: DateTime<Utc>,
    ) -> DomainResult<Movement> {
        if draft.quantity == 0 {
            return Err(DomainError::invalid_input("movement quantity must be positive"));
        }
        let product_id = draft.product_id;
        let position =
            position_of(&self.products, product_id).ok_or(DomainError::NotFound(product_id))?;
        let product = &mut self.products[position];
        match draft.kind {
            MovementKind::Entrada => product.receive(draft.quantity),
            MovementKind::Saida => product.issue(draft.quantity)?,
        }
        let value = Decimal::from(draft.quantity) * product.price();
        let id = self.next_movement_id;
        self.next_movement_id = id.next();
        let movement = Movement::new(
            id,
            product_id,
            draft.kind,
            draft.quantity,
            draft.reason,
            at,
            value,
        );
        self.movements.push(movement.clone());
        tracing::debug!(movement_id = %id, product_id = %product_id, "recorded movement");
        Ok(movement)
    }
}
