//! Builds chart series from a finance summary.

use rust_decimal::Decimal;

use super::types::{Bar, BarSeries, BreakdownChart, BreakdownSlice};
use crate::summary::FinanceSummary;

/// Builds chart series, hiding labels on small breakdown slices.
#[derive(Debug, Clone, Copy)]
pub struct ChartBuilder {
    label_threshold_percent: Decimal,
}

impl Default for ChartBuilder {
    fn default() -> Self {
        Self::new(Decimal::from(4))
    }
}

impl ChartBuilder {
    /// Creates a builder that labels slices at or above `label_threshold_percent`.
    #[must_use]
    pub const fn new(label_threshold_percent: Decimal) -> Self {
        Self {
            label_threshold_percent,
        }
    }

    /// Donut slices for every non-zero category.
    #[must_use]
    pub fn breakdown(&self, summary: &FinanceSummary) -> BreakdownChart {
        let slices = summary
            .category_breakdown
            .iter()
            .map(|share| BreakdownSlice {
                category: share.category.clone(),
                amount: share.amount,
                percent: share.percent.round_dp(1),
                show_label: share.percent >= self.label_threshold_percent,
            })
            .collect();
        BreakdownChart { slices }
    }

    /// Non-zero categories, largest first. Ties keep input order.
    #[must_use]
    pub fn category_bars(summary: &FinanceSummary) -> BarSeries {
        let mut bars: Vec<Bar> = summary
            .category_breakdown
            .iter()
            .map(|share| Bar {
                label: share.category.clone(),
                amount: share.amount,
            })
            .collect();
        bars.sort_by(|a, b| b.amount.cmp(&a.amount));
        BarSeries { bars }
    }

    /// Income next to total expenses.
    #[must_use]
    pub fn comparison(summary: &FinanceSummary) -> BarSeries {
        BarSeries {
            bars: vec![
                Bar {
                    label: "Income".to_string(),
                    amount: summary.income,
                },
                Bar {
                    label: "Expenses".to_string(),
                    amount: summary.total_expenses,
                },
            ],
        }
    }
}
