//! Plain-text rendering of the dashboard.

use std::io::{self, Write};

use budgetdash_core::chart::BarSeries;
use budgetdash_core::dashboard::{
    DashboardView, NO_DATA_MESSAGE, NO_EXPENSES_MESSAGE, Severity, StatusMessage,
};
use budgetdash_shared::types::{Currency, Money, format_percent};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

const BAR_WIDTH: u32 = 30;

/// Writes the whole dashboard as text.
pub fn render_text(view: &DashboardView, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Personal Finance Dashboard")?;
    writeln!(
        out,
        "Track your monthly income, expenses, and savings at a glance"
    )?;
    writeln!(out)?;

    writeln!(out, "Monthly Summary")?;
    for card in &view.cards {
        match &card.delta {
            Some(delta) => writeln!(out, "  {:<10} {:>14}  ({delta})", card.label, card.value)?,
            None => writeln!(out, "  {:<10} {:>14}", card.label, card.value)?,
        }
    }
    writeln!(out)?;

    writeln!(out, "Expense Breakdown")?;
    if view.breakdown.is_empty() {
        writeln!(out, "  {NO_EXPENSES_MESSAGE}")?;
    }
    for slice in &view.breakdown.slices {
        let amount = money(slice.amount, view.currency);
        if slice.show_label {
            writeln!(
                out,
                "  {:<16} {:>14}  {:>6}",
                slice.category,
                amount,
                format_percent(slice.percent, 1)
            )?;
        } else {
            writeln!(out, "  {:<16} {:>14}", slice.category, amount)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "Expense Comparison")?;
    if view.category_bars.is_empty() {
        writeln!(out, "  {NO_DATA_MESSAGE}")?;
    } else {
        render_bars(&view.category_bars, view.currency, out)?;
    }
    writeln!(out)?;

    writeln!(out, "Income vs Expenses")?;
    render_bars(&view.comparison, view.currency, out)?;
    writeln!(out)?;

    render_status(&view.status, out)?;
    if let Some(goal) = &view.goal_status {
        render_status(goal, out)?;
    }
    Ok(())
}

fn render_bars(series: &BarSeries, currency: Currency, out: &mut impl Write) -> io::Result<()> {
    let max = series.max_amount();
    for bar in &series.bars {
        let filled = bar_length(bar.amount, max);
        writeln!(
            out,
            "  {:<16} {:<width$} {}",
            bar.label,
            "#".repeat(filled),
            money(bar.amount, currency),
            width = BAR_WIDTH as usize
        )?;
    }
    Ok(())
}

fn render_status(status: &StatusMessage, out: &mut impl Write) -> io::Result<()> {
    let tag = match status.severity {
        Severity::Error => "[!]",
        Severity::Warning => "[~]",
        Severity::Success => "[ok]",
    };
    writeln!(out, "{tag} {}", status.text)
}

/// Number of cells for `amount` on a bar scaled so `max` fills the width.
fn bar_length(amount: Decimal, max: Decimal) -> usize {
    if max <= Decimal::ZERO || amount <= Decimal::ZERO {
        return 0;
    }
    let ratio = (amount / max).min(Decimal::ONE);
    (ratio * Decimal::from(BAR_WIDTH))
        .round()
        .to_usize()
        .unwrap_or(0)
}

fn money(amount: Decimal, currency: Currency) -> String {
    Money::new(amount, currency).to_string()
}
