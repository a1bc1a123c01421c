//! Status tier classification.
//!
//! Two independent classifications: the savings-rate tier always applies,
//! the goal tier only when a savings goal is supplied.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Savings-rate tier. Ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsTier {
    /// Spending more than earned.
    Deficit,
    /// Saving something, but below the target rate.
    LowSavings,
    /// Saving at or above the target rate.
    Healthy,
}

/// Savings-goal tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalTier {
    /// Remaining balance reaches the goal.
    Met,
    /// Remaining balance falls short of the goal.
    Missed,
}

/// Thresholds used by tier classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    /// Savings rate (percent of income) below which savings count as low.
    pub low_savings_percent: Decimal,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            low_savings_percent: Decimal::from(20),
        }
    }
}

impl SavingsTier {
    /// Classifies `remaining` against `income`.
    ///
    /// Rules apply in order:
    /// 1. `remaining < 0` is a deficit.
    /// 2. `remaining < income * threshold` is low savings.
    /// 3. Anything else is healthy.
    #[must_use]
    pub fn classify(income: Decimal, remaining: Decimal, thresholds: &TierThresholds) -> Self {
        let floor = income
            .checked_mul(thresholds.low_savings_percent / Decimal::ONE_HUNDRED)
            .unwrap_or(Decimal::MAX);
        if remaining < Decimal::ZERO {
            Self::Deficit
        } else if remaining < floor {
            Self::LowSavings
        } else {
            Self::Healthy
        }
    }
}

impl GoalTier {
    /// Classifies `remaining` against a savings goal.
    #[must_use]
    pub fn classify(remaining: Decimal, goal: Decimal) -> Self {
        if remaining >= goal {
            Self::Met
        } else {
            Self::Missed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_deficit_takes_precedence() {
        let tier = SavingsTier::classify(dec!(10000), dec!(-1), &TierThresholds::default());
        assert_eq!(tier, SavingsTier::Deficit);
    }

    #[test]
    fn test_low_savings_boundary() {
        let thresholds = TierThresholds::default();
        assert_eq!(
            SavingsTier::classify(dec!(10000), dec!(1999.99), &thresholds),
            SavingsTier::LowSavings
        );
        // Exactly 20% is not below the floor.
        assert_eq!(
            SavingsTier::classify(dec!(10000), dec!(2000), &thresholds),
            SavingsTier::Healthy
        );
    }

    #[test]
    fn test_zero_income_zero_remaining_is_healthy() {
        let tier = SavingsTier::classify(Decimal::ZERO, Decimal::ZERO, &TierThresholds::default());
        assert_eq!(tier, SavingsTier::Healthy);
    }

    #[test]
    fn test_custom_threshold() {
        let thresholds = TierThresholds {
            low_savings_percent: dec!(50),
        };
        assert_eq!(
            SavingsTier::classify(dec!(10000), dec!(3000), &thresholds),
            SavingsTier::LowSavings
        );
    }

    #[test]
    fn test_classify_huge_income_does_not_overflow() {
        let tier = SavingsTier::classify(Decimal::MAX, Decimal::MAX, &TierThresholds::default());
        assert_eq!(tier, SavingsTier::Healthy);

        let thresholds = TierThresholds {
            low_savings_percent: dec!(1000),
        };
        let remaining = Decimal::MAX - Decimal::ONE;
        let tier = SavingsTier::classify(Decimal::MAX, remaining, &thresholds);
        assert_eq!(tier, SavingsTier::LowSavings);
    }

    #[test]
    fn test_tier_ordering() {
        assert!(SavingsTier::Deficit < SavingsTier::LowSavings);
        assert!(SavingsTier::LowSavings < SavingsTier::Healthy);
    }

    #[test]
    fn test_goal_tier() {
        assert_eq!(GoalTier::classify(dec!(18000), dec!(10000)), GoalTier::Met);
        assert_eq!(GoalTier::classify(dec!(10000), dec!(10000)), GoalTier::Met);
        assert_eq!(GoalTier::classify(dec!(9999), dec!(10000)), GoalTier::Missed);
        assert_eq!(GoalTier::classify(dec!(-500), Decimal::ZERO), GoalTier::Missed);
    }
}
