//! Finance summary calculation and tier classification.

pub mod calculator;
pub mod tier;
pub mod types;


pub use calculator::{FinanceSummaryCalculator, compute};
pub use tier::{GoalTier, SavingsTier, TierThresholds};
pub use types::{CategoryShare, ExpenseEntry, FinanceInput, FinanceSummary};
