//! The dashboard input form.

use budgetdash_shared::types::{clamp_non_negative, within_amount_cap};
use budgetdash_shared::{AppConfig, category_key};
use rust_decimal::Decimal;

use super::error::InputError;
use crate::summary::{ExpenseEntry, FinanceInput};

/// A single change captured from the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Replace the monthly income.
    SetIncome(Decimal),
    /// Replace one category's amount.
    SetExpense {
        /// Category name, matched case-insensitively.
        category: String,
        /// New amount.
        amount: Decimal,
    },
    /// Set or clear the savings goal.
    SetSavingsGoal(Option<Decimal>),
    /// Restore every field to its starting value.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FormState {
    income: Decimal,
    expenses: Vec<ExpenseEntry>,
    savings_goal: Option<Decimal>,
}

/// Owns the current form values and turns events into `FinanceInput`s.
///
/// Every number is clamped to zero from below on the way in and must not
/// exceed `MAX_AMOUNT`.
#[derive(Debug, Clone)]
pub struct InputForm {
    defaults: FormState,
    current: FormState,
}

impl InputForm {
    /// Creates a form over `categories` (name, starting amount) in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the category set is empty, has a blank name,
    /// repeats a name (case-insensitively), or any amount exceeds the cap.
    pub fn new(
        income: Decimal,
        categories: impl IntoIterator<Item = (String, Decimal)>,
        savings_goal: Option<Decimal>,
    ) -> Result<Self, InputError> {
        let mut expenses: Vec<ExpenseEntry> = Vec::new();
        for (name, amount) in categories {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(InputError::BlankCategory);
            }
            let key = category_key(&name);
            if expenses.iter().any(|e| category_key(&e.category) == key) {
                return Err(InputError::DuplicateCategory(name));
            }
            let amount = checked_amount(amount)?;
            expenses.push(ExpenseEntry::new(name, amount));
        }
        if expenses.is_empty() {
            return Err(InputError::EmptyCategorySet);
        }

        let defaults = FormState {
            income: checked_amount(income)?,
            expenses,
            savings_goal: savings_goal.map(checked_amount).transpose()?,
        };
        Ok(Self {
            current: defaults.clone(),
            defaults,
        })
    }

    /// Creates a form seeded from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured category set is malformed.
    pub fn from_config(config: &AppConfig) -> Result<Self, InputError> {
        Self::new(
            config.income,
            config
                .categories
                .iter()
                .map(|c| (c.name.clone(), c.default_amount)),
            config.savings_goal,
        )
    }

    /// Category names in display order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.current.expenses.iter().map(|e| e.category.as_str())
    }

    /// Applies one event and returns the resulting snapshot.
    ///
    /// A rejected event leaves the form unchanged.
    ///
    /// # Errors
    ///
    /// Returns `InputError::UnknownCategory` if the event names a category
    /// the form does not have, or `InputError::AmountOutOfRange` if an
    /// amount exceeds the cap.
    pub fn apply(&mut self, event: InputEvent) -> Result<FinanceInput, InputError> {
        match event {
            InputEvent::SetIncome(income) => {
                self.current.income = checked_amount(income)?;
            }
            InputEvent::SetExpense { category, amount } => {
                let amount = checked_amount(amount)?;
                let key = category_key(&category);
                let entry = self
                    .current
                    .expenses
                    .iter_mut()
                    .find(|e| category_key(&e.category) == key)
                    .ok_or(InputError::UnknownCategory(category))?;
                entry.amount = amount;
            }
            InputEvent::SetSavingsGoal(goal) => {
                self.current.savings_goal = goal.map(checked_amount).transpose()?;
            }
            InputEvent::Reset => {
                self.current = self.defaults.clone();
            }
        }
        Ok(self.snapshot())
    }

    /// Returns an immutable snapshot of the current values.
    #[must_use]
    pub fn snapshot(&self) -> FinanceInput {
        FinanceInput {
            income: self.current.income,
            expenses: self.current.expenses.clone(),
            savings_goal: self.current.savings_goal,
        }
    }
}

fn checked_amount(amount: Decimal) -> Result<Decimal, InputError> {
    let amount = clamp_non_negative(amount);
    if within_amount_cap(amount) {
        Ok(amount)
    } else {
        Err(InputError::AmountOutOfRange(amount))
    }
}
