//! Input collection for the dashboard form.
//!
//! The form owns the fixed category set and the current amounts. Changes
//! arrive as explicit events; every accepted event produces a fresh
//! `FinanceInput` snapshot for the calculator.

pub mod error;
pub mod form;

pub use error::InputError;
pub use form::{InputEvent, InputForm};
