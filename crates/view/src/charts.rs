//! Chart series shaping for the charting collaborator.

use rust_decimal::Decimal;

use estoque_ledger::Ledger;

/// Line-chart input: one label per month plus both quantity series, aligned
/// by index and ordered oldest month first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlyChart {
    pub labels: Vec<String>,
    pub entradas: Vec<u64>,
    pub saidas: Vec<u64>,
}

/// Doughnut-chart input: revenue per category, ascending by label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryChart {
    pub labels: Vec<String>,
    pub values: Vec<Decimal>,
}

/// Month labels render as unpadded `month/year`, e.g. `3/2024`.
pub fn monthly_chart(ledger: &Ledger) -> MonthlyChart {
    let mut chart = MonthlyChart::default();
    for flow in ledger.monthly_series() {
        chart
            .labels
            .push(format!("{}/{}", flow.period.month, flow.period.year));
        chart.entradas.push(flow.entrada_total);
        chart.saidas.push(flow.saida_total);
    }
    chart
}

pub fn category_chart(ledger: &Ledger) -> CategoryChart {
    let mut chart = CategoryChart::default();
    for (category, revenue) in ledger.category_revenue() {
        chart.labels.push(category);
        chart.values.push(revenue);
    }
    chart
}
