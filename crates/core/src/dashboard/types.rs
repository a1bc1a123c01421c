//! Dashboard data types.

use budgetdash_shared::types::Currency;
use serde::{Deserialize, Serialize};

use crate::chart::{BarSeries, BreakdownChart};
use crate::summary::FinanceSummary;

/// Shown instead of the breakdown donut when there is no spending.
pub const NO_EXPENSES_MESSAGE: &str = "No expenses to display.";

/// Shown instead of the category bars when there is no spending.
pub const NO_DATA_MESSAGE: &str = "No data to show.";

/// A headline metric card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricCard {
    /// Card label.
    pub label: String,
    /// Formatted value.
    pub value: String,
    /// Optional formatted change indicator.
    pub delta: Option<String>,
}

/// How a status message should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Something is wrong.
    Error,
    /// Needs attention.
    Warning,
    /// All good.
    Success,
}

/// A user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    /// Styling hint.
    pub severity: Severity,
    /// Message text.
    pub text: String,
}

/// Everything needed to draw the dashboard once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Currency used for formatting.
    pub currency: Currency,
    /// Income, expenses, and savings cards.
    pub cards: Vec<MetricCard>,
    /// Expense breakdown donut.
    pub breakdown: BreakdownChart,
    /// Per-category bars, largest first.
    pub category_bars: BarSeries,
    /// Income vs expenses bars.
    pub comparison: BarSeries,
    /// Savings-rate status.
    pub status: StatusMessage,
    /// Savings-goal status, when a goal is set.
    pub goal_status: Option<StatusMessage>,
    /// The summary this view was built from.
    pub summary: FinanceSummary,
}
