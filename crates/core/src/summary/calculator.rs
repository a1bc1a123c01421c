//! Finance summary calculator.

use budgetdash_shared::types::percent_of;
use rust_decimal::Decimal;

use super::tier::{GoalTier, SavingsTier, TierThresholds};
use super::types::{CategoryShare, FinanceInput, FinanceSummary};

/// Turns a `FinanceInput` into a `FinanceSummary`.
///
/// Stateless apart from its thresholds; the same input always yields the
/// same summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct FinanceSummaryCalculator {
    thresholds: TierThresholds,
}

impl FinanceSummaryCalculator {
    /// Creates a calculator with the given tier thresholds.
    #[must_use]
    pub const fn new(thresholds: TierThresholds) -> Self {
        Self { thresholds }
    }

    /// Returns the thresholds used for tier classification.
    #[must_use]
    pub const fn thresholds(&self) -> &TierThresholds {
        &self.thresholds
    }

    /// Computes the full summary for `input`.
    ///
    /// Zero-amount entries count toward the total but are left out of the
    /// category breakdown. The breakdown is empty when total expenses are zero.
    ///
    /// Never panics: sums and differences beyond the range of `Decimal`
    /// saturate at `Decimal::MAX` / `Decimal::MIN`.
    #[must_use]
    pub fn compute(&self, input: &FinanceInput) -> FinanceSummary {
        let total_expenses = input
            .expenses
            .iter()
            .try_fold(Decimal::ZERO, |total, e| total.checked_add(e.amount))
            .unwrap_or(Decimal::MAX);
        let remaining = input
            .income
            .checked_sub(total_expenses)
            .unwrap_or(Decimal::MIN);
        let savings_rate_percent = percent_of(remaining, input.income);

        let category_breakdown = if total_expenses.is_zero() {
            Vec::new()
        } else {
            input
                .expenses
                .iter()
                .filter(|e| !e.amount.is_zero())
                .map(|e| CategoryShare {
                    category: e.category.clone(),
                    amount: e.amount,
                    percent: percent_of(e.amount, total_expenses),
                })
                .collect()
        };

        let savings_tier = SavingsTier::classify(input.income, remaining, &self.thresholds);
        let goal_shortfall = input
            .savings_goal
            .map(|goal| {
                goal.checked_sub(remaining)
                    .unwrap_or(Decimal::MAX)
                    .max(Decimal::ZERO)
            });
        let goal_tier = input
            .savings_goal
            .map(|goal| GoalTier::classify(remaining, goal));

        FinanceSummary {
            income: input.income,
            total_expenses,
            remaining,
            savings_rate_percent,
            category_breakdown,
            savings_goal: input.savings_goal,
            goal_shortfall,
            savings_tier,
            goal_tier,
        }
    }
}

/// Computes a summary with the default thresholds.
#[must_use]
pub fn compute(input: &FinanceInput) -> FinanceSummary {
    FinanceSummaryCalculator::default().compute(input)
}
