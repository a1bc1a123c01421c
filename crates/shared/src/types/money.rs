//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! This type wraps `rust_decimal::Decimal` for arbitrary precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents a monetary amount with currency.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// The amount in whole currency units (fractions allowed).
    pub amount: Decimal,
    /// ISO 4217 currency code (e.g., "PHP", "USD").
    pub currency: Currency,
}

/// ISO 4217 currency codes supported for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Philippine Peso
    #[default]
    Php,
    /// US Dollar
    Usd,
    /// Euro
    Eur,
    /// British Pound
    Gbp,
    /// Japanese Yen
    Jpy,
    /// Indonesian Rupiah
    Idr,
}

impl Currency {
    /// Returns the display symbol for this currency.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Php => "₱",
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Idr => "Rp",
        }
    }
}

impl Money {
    /// Creates a new Money instance.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Formats the amount as the currency symbol followed by whole units with
    /// thousands separators, e.g. `₱50,000` or `₱-2,000`.
    ///
    /// Rounds half to even, the same as `{:,.0f}` formatting.
    #[must_use]
    pub fn format_whole(&self) -> String {
        let rounded = self.amount.round_dp(0);
        let digits = group_thousands(&rounded.abs().trunc().to_string());
        if rounded < Decimal::ZERO {
            format!("{}-{digits}", self.currency.symbol())
        } else {
            format!("{}{digits}", self.currency.symbol())
        }
    }
}

/// Largest amount accepted from user input: 1,000,000,000,000,000 units.
///
/// Sums and percentages of amounts under this cap stay far inside the
/// range of `Decimal`.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// Returns true if `amount` does not exceed `MAX_AMOUNT`.
#[must_use]
pub fn within_amount_cap(amount: Decimal) -> bool {
    amount <= MAX_AMOUNT
}

/// Clamps a decimal to zero from below.
#[must_use]
pub fn clamp_non_negative(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_whole())
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Php => write!(f, "PHP"),
            Self::Usd => write!(f, "USD"),
            Self::Eur => write!(f, "EUR"),
            Self::Gbp => write!(f, "GBP"),
            Self::Jpy => write!(f, "JPY"),
            Self::Idr => write!(f, "IDR"),
        }
    }
}
