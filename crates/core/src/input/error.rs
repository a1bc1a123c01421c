//! Input error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while building or editing the input form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The form needs at least one expense category.
    #[error("At least one expense category is required")]
    EmptyCategorySet,

    /// A category name was blank.
    #[error("Category names cannot be blank")]
    BlankCategory,

    /// Two categories share a name.
    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    /// An amount is larger than the form accepts.
    #[error("Amount {0} exceeds the maximum of 1,000,000,000,000,000")]
    AmountOutOfRange(Decimal),

    /// An event named a category the form does not have.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}

impl From<InputError> for budgetdash_shared::AppError {
    fn from(err: InputError) -> Self {
        Self::Input(err.to_string())
    }
}
