//! Builds the dashboard view from a summary.

use budgetdash_shared::DashboardConfig;
use budgetdash_shared::types::{Currency, Money, format_percent};
use rust_decimal::Decimal;

use super::types::{DashboardView, MetricCard, Severity, StatusMessage};
use crate::chart::ChartBuilder;
use crate::summary::{FinanceSummary, GoalTier, SavingsTier, TierThresholds};

/// Presentation settings for the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Currency used for formatting.
    pub currency: Currency,
    /// Savings rate the low-savings message nudges toward.
    pub low_savings_threshold_percent: Decimal,
    /// Minimum breakdown share that gets a label.
    pub label_threshold_percent: Decimal,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self::from(&DashboardConfig::default())
    }
}

impl From<&DashboardConfig> for ViewOptions {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            currency: config.currency,
            low_savings_threshold_percent: config.low_savings_threshold_percent,
            label_threshold_percent: config.label_threshold_percent,
        }
    }
}

impl ViewOptions {
    /// Tier thresholds matching these options.
    #[must_use]
    pub const fn thresholds(&self) -> TierThresholds {
        TierThresholds {
            low_savings_percent: self.low_savings_threshold_percent,
        }
    }

    fn money(&self, amount: Decimal) -> String {
        Money::new(amount, self.currency).format_whole()
    }
}

impl DashboardView {
    /// Builds the view for `summary`.
    #[must_use]
    pub fn build(summary: &FinanceSummary, options: &ViewOptions) -> Self {
        let savings_delta = (summary.income > Decimal::ZERO)
            .then(|| format_percent(summary.savings_rate_percent, 1));

        let cards = vec![
            MetricCard {
                label: "Income".to_string(),
                value: options.money(summary.income),
                delta: None,
            },
            MetricCard {
                label: "Expenses".to_string(),
                value: options.money(summary.total_expenses),
                delta: None,
            },
            MetricCard {
                label: "Savings".to_string(),
                value: options.money(summary.remaining),
                delta: savings_delta,
            },
        ];

        let charts = ChartBuilder::new(options.label_threshold_percent);

        Self {
            currency: options.currency,
            cards,
            breakdown: charts.breakdown(summary),
            category_bars: ChartBuilder::category_bars(summary),
            comparison: ChartBuilder::comparison(summary),
            status: savings_message(summary.savings_tier, options),
            goal_status: goal_message(summary, options),
            summary: summary.clone(),
        }
    }
}

fn savings_message(tier: SavingsTier, options: &ViewOptions) -> StatusMessage {
    match tier {
        SavingsTier::Deficit => StatusMessage {
            severity: Severity::Error,
            text: "You're spending more than you earn. Time to rebalance.".to_string(),
        },
        SavingsTier::LowSavings => StatusMessage {
            severity: Severity::Warning,
            text: format!(
                "You're saving a bit. Try pushing toward {}% if possible.",
                options.low_savings_threshold_percent.normalize()
            ),
        },
        SavingsTier::Healthy => StatusMessage {
            severity: Severity::Success,
            text: "Great job! Your savings rate is healthy.".to_string(),
        },
    }
}

fn goal_message(summary: &FinanceSummary, options: &ViewOptions) -> Option<StatusMessage> {
    let goal = summary.savings_goal?;
    let message = match summary.goal_tier? {
        GoalTier::Met => StatusMessage {
            severity: Severity::Success,
            text: format!(
                "You've reached your savings goal of {}.",
                options.money(goal)
            ),
        },
        GoalTier::Missed => StatusMessage {
            severity: Severity::Warning,
            text: format!(
                "You're {} short of your savings goal of {}.",
                options.money(summary.goal_shortfall.unwrap_or(Decimal::ZERO)),
                options.money(goal)
            ),
        },
    };
    Some(message)
}
