//! Application configuration management.

use std::collections::HashSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::types::{Currency, within_amount_cap};

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Dashboard presentation settings.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Income the form starts with.
    #[serde(default = "default_income")]
    pub income: Decimal,
    /// Savings goal the form starts with, if any.
    #[serde(default)]
    pub savings_goal: Option<Decimal>,
    /// Expense categories, in display order.
    #[serde(default = "default_categories")]
    pub categories: Vec<CategoryConfig>,
}

/// Dashboard presentation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Currency used for formatting amounts.
    #[serde(default)]
    pub currency: Currency,
    /// Savings rate below which the low-savings tier applies.
    #[serde(default = "default_low_savings_threshold")]
    pub low_savings_threshold_percent: Decimal,
    /// Breakdown slices smaller than this share get no label.
    #[serde(default = "default_label_threshold")]
    pub label_threshold_percent: Decimal,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            low_savings_threshold_percent: default_low_savings_threshold(),
            label_threshold_percent: default_label_threshold(),
        }
    }
}

/// A named expense category with its starting amount.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryConfig {
    /// Category name shown on the form and charts.
    pub name: String,
    /// Amount the category starts with.
    #[serde(default)]
    pub default_amount: Decimal,
}

impl CategoryConfig {
    fn new(name: &str, default_amount: i64) -> Self {
        Self {
            name: name.to_string(),
            default_amount: Decimal::from(default_amount),
        }
    }
}

fn default_income() -> Decimal {
    Decimal::from(50_000)
}

fn default_low_savings_threshold() -> Decimal {
    Decimal::from(20)
}

fn default_label_threshold() -> Decimal {
    Decimal::from(4)
}

fn default_categories() -> Vec<CategoryConfig> {
    vec![
        CategoryConfig::new("Rent", 15_000),
        CategoryConfig::new("Food", 8_000),
        CategoryConfig::new("Transport", 4_000),
        CategoryConfig::new("Utilities", 3_000),
        CategoryConfig::new("Entertainment", 2_000),
    ]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dashboard: DashboardConfig::default(),
            income: default_income(),
            savings_goal: None,
            categories: default_categories(),
        }
    }
}

/// Normalized form of a category name used for uniqueness and lookup.
///
/// Trims surrounding whitespace and lowercases with full Unicode rules.
#[must_use]
pub fn category_key(name: &str) -> String {
    name.trim().to_lowercase()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> AppResult<Self> {
        Self::load_from(None)
    }

    /// Loads configuration, layering `path` above the run-mode files when given.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(path: Option<&Path>) -> AppResult<Self> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: Self = builder
            .add_source(config::Environment::with_prefix("BUDGETDASH").separator("__"))
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Checks thresholds, amounts, and the category set.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` describing the first problem found.
    pub fn validate(&self) -> AppResult<()> {
        let hundred = Decimal::ONE_HUNDRED;
        let thresholds = [
            (
                "dashboard.low_savings_threshold_percent",
                self.dashboard.low_savings_threshold_percent,
            ),
            (
                "dashboard.label_threshold_percent",
                self.dashboard.label_threshold_percent,
            ),
        ];
        for (key, value) in thresholds {
            if value < Decimal::ZERO || value > hundred {
                return Err(AppError::Validation(format!(
                    "{key} must be between 0 and 100, got {value}"
                )));
            }
        }

        if self.income < Decimal::ZERO {
            return Err(AppError::Validation("income cannot be negative".into()));
        }
        if self.savings_goal.is_some_and(|goal| goal < Decimal::ZERO) {
            return Err(AppError::Validation(
                "savings_goal cannot be negative".into(),
            ));
        }
        if !within_amount_cap(self.income)
            || self.savings_goal.is_some_and(|goal| !within_amount_cap(goal))
        {
            return Err(AppError::Validation(
                "income and savings_goal must not exceed 1,000,000,000,000,000".into(),
            ));
        }

        if self.categories.is_empty() {
            return Err(AppError::Validation(
                "at least one expense category is required".into(),
            ));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            let name = category.name.trim();
            if name.is_empty() {
                return Err(AppError::Validation(
                    "category names cannot be blank".into(),
                ));
            }
            if !seen.insert(category_key(name)) {
                return Err(AppError::Validation(format!(
                    "duplicate category: {name}"
                )));
            }
            if category.default_amount < Decimal::ZERO {
                return Err(AppError::Validation(format!(
                    "default amount for {name} cannot be negative"
                )));
            }
            if !within_amount_cap(category.default_amount) {
                return Err(AppError::Validation(format!(
                    "default amount for {name} must not exceed 1,000,000,000,000,000"
                )));
            }
        }

        Ok(())
    }
}
