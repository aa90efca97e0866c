//! Derived figures: dashboard totals, monthly flows, category revenue.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use rust_decimal::Decimal;

use crate::Ledger;
use crate::movement::{Movement, MovementKind};
use crate::product::Product;

/// Dashboard card figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub total_products: usize,
    /// Sum of quantity times current unit price across the catalog.
    pub total_value: Decimal,
    /// Products at or below their minimum threshold (out-of-stock included).
    pub low_stock_count: usize,
    /// Summed value of outbound movements recorded in the reference month.
    pub monthly_revenue: Decimal,
}

/// Calendar month bucket key. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    fn of(date: DateTime<Utc>) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl core::fmt::Display for Period {
    /// Unpadded `year-month`, e.g. `2024-3`.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

/// Moved quantities per direction for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyFlow {
    pub period: Period,
    pub entrada_total: u64,
    pub saida_total: u64,
}

impl Ledger {
    /// Dashboard figures. `now` anchors the revenue window to a caller-chosen
    /// reference instant instead of an ambient clock read.
    pub fn dashboard(&self, now: DateTime<Utc>) -> Dashboard {
        let current = Period::of(now);
        let total_value: Decimal = self.products().iter().map(Product::total_value).sum();
        let low_stock_count = self
            .products()
            .iter()
            .filter(|product| product.quantity() <= product.min_stock())
            .count();
        let monthly_revenue: Decimal = self
            .movements()
            .iter()
            .filter(|movement| {
                movement.kind() == MovementKind::Saida && Period::of(movement.date()) == current
            })
            .map(Movement::value)
            .sum();
        Dashboard {
            total_products: self.products().len(),
            total_value,
            low_stock_count,
            monthly_revenue,
        }
    }

    /// Movement quantities bucketed by calendar month, oldest month first.
    ///
    /// Months order numerically by (year, month), so October follows
    /// February within a year and January of the next year follows December.
    pub fn monthly_series(&self) -> Vec<MonthlyFlow> {
        let mut buckets: BTreeMap<Period, (u64, u64)> = BTreeMap::new();
        for movement in self.movements() {
            let bucket = buckets.entry(Period::of(movement.date())).or_default();
            match movement.kind() {
                MovementKind::Entrada => bucket.0 += u64::from(movement.quantity()),
                MovementKind::Saida => bucket.1 += u64::from(movement.quantity()),
            }
        }
        buckets
            .into_iter()
            .map(|(period, (entrada_total, saida_total))| MonthlyFlow {
                period,
                entrada_total,
                saida_total,
            })
            .collect()
    }

    /// Outbound movement value grouped by the referenced product's current
    /// category, in ascending category order.
    ///
    /// Cascade deletion keeps every surviving movement resolvable, so no
    /// movement is silently dropped here.
    pub fn category_revenue(&self) -> BTreeMap<String, Decimal> {
        let mut revenue = BTreeMap::new();
        for movement in self.movements() {
            if movement.kind() != MovementKind::Saida {
                continue;
            }
            if let Some(product) = self.product(movement.product_id()) {
                *revenue.entry(product.category().to_string()).or_insert(Decimal::ZERO) +=
                    movement.value();
            }
        }
        revenue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movement::MovementDraft;
    use crate::product::ProductDraft;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    fn draft(name: &str, category: &str, quantity: u32, price: Decimal) -> ProductDraft {
        ProductDraft {
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            price,
            min_stock: 10,
        }
    }

    fn saida(ledger: &mut Ledger, product: &Product, quantity: u32, date: DateTime<Utc>) {
        ledger
            .record_movement(
                MovementDraft {
                    product_id: product.id(),
                    kind: MovementKind::Saida,
                    quantity,
                    reason: "Venda".to_string(),
                },
                date,
            )
            .unwrap();
    }

    #[test]
    fn dashboard_totals_the_catalog() {
        let mut ledger = Ledger::new();
        ledger.create_product(draft("A", "Casa", 25, dec!(2.00)), at(2024, 1, 1)).unwrap();
        ledger.create_product(draft("B", "Casa", 8, dec!(10.00)), at(2024, 1, 2)).unwrap();
        ledger.create_product(draft("C", "Casa", 0, dec!(99.99)), at(2024, 1, 3)).unwrap();

        let dashboard = ledger.dashboard(at(2024, 6, 15));
        assert_eq!(dashboard.total_products, 3);
        assert_eq!(dashboard.total_value, dec!(130.00));
        // B is at/below threshold, C is out of stock; both count.
        assert_eq!(dashboard.low_stock_count, 2);
        assert_eq!(dashboard.monthly_revenue, Decimal::ZERO);
    }

    #[test]
    fn dashboard_total_value_matches_a_catalog_recomputation() {
        let mut ledger = Ledger::new();
        ledger.create_product(draft("A", "Casa", 25, dec!(2.50)), at(2024, 1, 1)).unwrap();
        ledger.create_product(draft("B", "Roupas", 3, dec!(89.90)), at(2024, 1, 2)).unwrap();
        ledger.create_product(draft("C", "Casa", 0, dec!(99.99)), at(2024, 1, 3)).unwrap();

        let recomputed: Decimal = ledger
            .query_products(&crate::query::ProductFilter::default(), None)
            .iter()
            .map(|product| product.total_value())
            .sum();
        assert_eq!(ledger.dashboard(at(2024, 6, 1)).total_value, recomputed);
    }

    #[test]
    fn monthly_revenue_only_counts_saidas_in_the_reference_month() {
        let mut ledger = Ledger::new();
        let product = ledger
            .create_product(draft("A", "Casa", 100, dec!(10.00)), at(2024, 1, 1))
            .unwrap();
        saida(&mut ledger, &product, 3, at(2024, 2, 5));
        saida(&mut ledger, &product, 4, at(2024, 2, 20));
        saida(&mut ledger, &product, 5, at(2024, 3, 1));
        saida(&mut ledger, &product, 6, at(2023, 2, 10));

        let dashboard = ledger.dashboard(at(2024, 2, 28));
        // 3 + 4 units at 10.00; March and last year's February are excluded.
        assert_eq!(dashboard.monthly_revenue, dec!(70.00));
    }

    #[test]
    fn entradas_never_count_as_revenue() {
        let mut ledger = Ledger::new();
        ledger.create_product(draft("A", "Casa", 100, dec!(10.00)), at(2024, 2, 1)).unwrap();

        let dashboard = ledger.dashboard(at(2024, 2, 28));
        assert_eq!(dashboard.monthly_revenue, Decimal::ZERO);
    }

    #[test]
    fn monthly_series_orders_months_numerically() {
        let mut ledger = Ledger::new();
        let product = ledger
            .create_product(draft("A", "Casa", 500, dec!(1.00)), at(2023, 11, 1))
            .unwrap();
        saida(&mut ledger, &product, 1, at(2024, 10, 5));
        saida(&mut ledger, &product, 2, at(2024, 2, 5));
        saida(&mut ledger, &product, 3, at(2024, 2, 20));

        let series = ledger.monthly_series();
        let keys: Vec<String> = series.iter().map(|flow| flow.period.to_string()).collect();
        assert_eq!(keys, ["2023-11", "2024-2", "2024-10"]);

        assert_eq!(series[0].entrada_total, 500);
        assert_eq!(series[0].saida_total, 0);
        assert_eq!(series[1].saida_total, 5);
        assert_eq!(series[2].saida_total, 1);
    }

    #[test]
    fn monthly_series_is_empty_without_movements() {
        assert!(Ledger::new().monthly_series().is_empty());
    }

    #[test]
    fn category_revenue_groups_saida_values() {
        let mut ledger = Ledger::new();
        let eletro = ledger
            .create_product(draft("TV", "Eletrônicos", 10, dec!(100.00)), at(2024, 1, 1))
            .unwrap();
        let casa = ledger
            .create_product(draft("Panela", "Casa", 10, dec!(5.00)), at(2024, 1, 1))
            .unwrap();
        saida(&mut ledger, &eletro, 2, at(2024, 2, 1));
        saida(&mut ledger, &casa, 4, at(2024, 2, 1));
        saida(&mut ledger, &casa, 1, at(2024, 3, 1));

        let revenue = ledger.category_revenue();
        assert_eq!(revenue.len(), 2);
        assert_eq!(revenue["Casa"], dec!(25.00));
        assert_eq!(revenue["Eletrônicos"], dec!(200.00));
        // BTreeMap iterates ascending by category.
        let categories: Vec<&String> = revenue.keys().collect();
        assert_eq!(categories, ["Casa", "Eletrônicos"]);
    }

    #[test]
    fn deleted_products_leave_no_revenue_behind() {
        let mut ledger = Ledger::new();
        let product = ledger
            .create_product(draft("TV", "Eletrônicos", 10, dec!(100.00)), at(2024, 1, 1))
            .unwrap();
        saida(&mut ledger, &product, 2, at(2024, 2, 1));
        assert!(ledger.delete_product(product.id()));

        assert!(ledger.category_revenue().is_empty());
        assert!(ledger.monthly_series().is_empty());
    }
}
