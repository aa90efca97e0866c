//! Dashboard card projection.

use estoque_ledger::Dashboard;

use crate::money::format_brl;

/// The four dashboard figures with currency fields formatted for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardCards {
    pub total_products: usize,
    pub total_value: String,
    pub low_stock_count: usize,
    pub monthly_revenue: String,
}

pub fn dashboard_cards(dashboard: &Dashboard) -> DashboardCards {
    DashboardCards {
        total_products: dashboard.total_products,
        total_value: format_brl(dashboard.total_value),
        low_stock_count: dashboard.low_stock_count,
        monthly_revenue: format_brl(dashboard.monthly_revenue),
    }
}
