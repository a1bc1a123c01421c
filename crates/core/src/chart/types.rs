//! Chart data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slice of the expense breakdown donut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownSlice {
    /// Category name.
    pub category: String,
    /// Category amount.
    pub amount: Decimal,
    /// Share of total, rounded to one decimal place.
    pub percent: Decimal,
    /// Whether the slice is large enough to carry a label.
    pub show_label: bool,
}

/// Expense breakdown donut data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownChart {
    /// Slices in input order.
    pub slices: Vec<BreakdownSlice>,
}

impl BreakdownChart {
    /// Returns true if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

/// A labelled bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bar {
    /// Bar label.
    pub label: String,
    /// Bar height.
    pub amount: Decimal,
}

/// Bar chart data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarSeries {
    /// Bars in display order.
    pub bars: Vec<Bar>,
}

impl BarSeries {
    /// Returns true if there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Largest bar amount, or zero when empty.
    #[must_use]
    pub fn max_amount(&self) -> Decimal {
        self.bars
            .iter()
            .map(|b| b.amount)
            .max()
            .unwrap_or(Decimal::ZERO)
    }
}
