//! Summary data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::tier::{GoalTier, SavingsTier};

/// A single expense category and its monthly amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Category name, unique within one input.
    pub category: String,
    /// Monthly amount, never negative.
    pub amount: Decimal,
}

impl ExpenseEntry {
    /// Creates a new expense entry.
    #[must_use]
    pub fn new(category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// Everything the calculator needs for one recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FinanceInput {
    /// Monthly income.
    pub income: Decimal,
    /// Expenses in display order.
    pub expenses: Vec<ExpenseEntry>,
    /// Optional savings target for the month.
    pub savings_goal: Option<Decimal>,
}

impl FinanceInput {
    /// Creates an input without a savings goal.
    #[must_use]
    pub fn new(income: Decimal, expenses: Vec<ExpenseEntry>) -> Self {
        Self {
            income,
            expenses,
            savings_goal: None,
        }
    }

    /// Returns the same input with the given savings goal.
    #[must_use]
    pub fn with_savings_goal(mut self, goal: Decimal) -> Self {
        self.savings_goal = Some(goal);
        self
    }
}

/// One non-zero category's share of total expenses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    /// Category name.
    pub category: String,
    /// Category amount.
    pub amount: Decimal,
    /// Share of total expenses (amount / total * 100), unrounded.
    pub percent: Decimal,
}

/// Derived monthly figures. Always recomputed wholesale from a `FinanceInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceSummary {
    /// Income the summary was computed from.
    pub income: Decimal,
    /// Sum of every expense amount.
    pub total_expenses: Decimal,
    /// Income minus total expenses. Negative when overspending.
    pub remaining: Decimal,
    /// Remaining as a percentage of income; zero when income is zero.
    pub savings_rate_percent: Decimal,
    /// Non-zero categories with their share of total expenses, in input order.
    pub category_breakdown: Vec<CategoryShare>,
    /// Savings goal the summary was computed against.
    pub savings_goal: Option<Decimal>,
    /// How far remaining falls short of the goal (never negative).
    pub goal_shortfall: Option<Decimal>,
    /// Savings-rate tier.
    pub savings_tier: SavingsTier,
    /// Goal tier, present only when a goal was supplied.
    pub goal_tier: Option<GoalTier>,
}
