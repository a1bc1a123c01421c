//! Common types used across the application.

pub mod money;
pub mod percent;

pub use money::{Currency, MAX_AMOUNT, Money, clamp_non_negative, within_amount_cap};
pub use percent::{format_percent, percent_of};
