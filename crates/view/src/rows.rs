//! Table-row projection of the catalog.

use estoque_ledger::{Ledger, Product, ProductFilter, ProductSort, StockStatus};

use crate::money::format_brl;

/// Status badge as the table renders it: label plus css class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub css_class: &'static str,
}

/// One renderable product row, currency fields already formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: String,
    pub total_value: String,
    pub status: StatusBadge,
}

/// Map a stock status to its badge.
pub fn status_badge(status: StockStatus) -> StatusBadge {
    match status {
        StockStatus::Out => StatusBadge {
            label: "Esgotado",
            css_class: "out",
        },
        StockStatus::Low => StatusBadge {
            label: "Baixo",
            css_class: "low",
        },
        StockStatus::Normal => StatusBadge {
            label: "Normal",
            css_class: "normal",
        },
    }
}

/// Project the filtered, ordered catalog into renderable rows.
pub fn product_rows(
    ledger: &Ledger,
    filter: &ProductFilter,
    sort: Option<ProductSort>,
) -> Vec<ProductRow> {
    ledger
        .query_products(filter, sort)
        .into_iter()
        .map(product_row)
        .collect()
}

fn product_row(product: &Product) -> ProductRow {
    ProductRow {
        name: product.name().to_string(),
        category: product.category().to_string(),
        quantity: product.quantity(),
        unit_price: format_brl(product.price()),
        total_value: format_brl(product.total_value()),
        status: status_badge(product.stock_status()),
    }
}

/// Sort keys as the table header exposes them. Unknown keys mean "keep the
/// filtered order".
pub fn parse_sort_key(key: &str) -> Option<ProductSort> {
    match key {
        "name" => Some(ProductSort::Name),
        "category" => Some(ProductSort::Category),
        "quantity" => Some(ProductSort::Quantity),
        "price" => Some(ProductSort::Price),
        _ => None,
    }
}
