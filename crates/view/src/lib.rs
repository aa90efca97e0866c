//! `estoque-view` — presentation projections over the inventory ledger.
//!
//! Turns ledger state into render-ready shapes: formatted table rows,
//! dashboard cards and chart series. No rendering happens here; the UI layer
//! consumes these as-is.

pub mod charts;
pub mod dashboard;
pub mod money;
pub mod rows;

pub use charts::{CategoryChart, MonthlyChart, category_chart, monthly_chart};
pub use dashboard::{DashboardCards, dashboard_cards};
pub use money::format_brl;
pub use rows::{ProductRow, StatusBadge, parse_sort_key, product_rows, status_badge};
