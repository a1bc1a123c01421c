//! Command-line arguments.

use std::path::PathBuf;
use std::str::FromStr;

use budgetdash_shared::types::within_amount_cap;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

/// Monthly income, expenses, and savings at a glance.
#[derive(Debug, Parser)]
#[command(name = "budgetdash", author, version, about, long_about = None)]
pub struct Cli {
    /// Config file layered over config/default and config/{RUN_MODE}
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print the dashboard as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// What to run.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the dashboard once from config defaults and flags
    Summary(SummaryArgs),
    /// Read changes from stdin and redraw after each one
    Session,
}

/// Overrides for a one-shot summary.
#[derive(Debug, Default, clap::Args)]
pub struct SummaryArgs {
    /// Monthly income
    #[arg(short, long)]
    pub income: Option<Decimal>,

    /// Category amount as NAME=AMOUNT, repeatable
    #[arg(short, long = "expense", value_parser = parse_expense)]
    pub expenses: Vec<(String, Decimal)>,

    /// Savings goal for the month
    #[arg(short, long)]
    pub goal: Option<Decimal>,
}

/// Parses `NAME=AMOUNT`.
pub fn parse_expense(raw: &str) -> Result<(String, Decimal), String> {
    let (name, amount) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=AMOUNT, got `{raw}`"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing category name in `{raw}`"));
    }
    let amount = Decimal::from_str(amount.trim())
        .map_err(|e| format!("invalid amount in `{raw}`: {e}"))?;
    if !within_amount_cap(amount) {
        return Err(format!(
            "amount in `{raw}` exceeds the maximum of 1,000,000,000,000,000"
        ));
    }
    Ok((name.to_string(), amount))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_expense() {
        assert_eq!(
            parse_expense("Rent=15000").unwrap(),
            ("Rent".to_string(), dec!(15000))
        );
        assert_eq!(
            parse_expense(" Eating Out = 120.50").unwrap(),
            ("Eating Out".to_string(), dec!(120.50))
        );
        assert!(parse_expense("Rent").is_err());
        assert!(parse_expense("=100").is_err());
        assert!(parse_expense("Rent=lots").is_err());
        assert!(parse_expense("Rent=50000000000000000000000000000").is_err());
        assert!(parse_expense("Rent=1000000000000001").is_err());
        assert_eq!(
            parse_expense("Rent=1000000000000000").unwrap().1,
            dec!(1000000000000000)
        );
    }

    #[test]
    fn test_summary_flags() {
        let cli = Cli::try_parse_from([
            "budgetdash",
            "--json",
            "summary",
            "--income",
            "20000",
            "-e",
            "Rent=18000",
            "--goal",
            "1000",
        ])
        .unwrap();

        assert!(cli.json);
        let Some(Command::Summary(args)) = cli.command else {
            panic!("expected summary command");
        };
        assert_eq!(args.income, Some(dec!(20000)));
        assert_eq!(args.expenses, vec![("Rent".to_string(), dec!(18000))]);
        assert_eq!(args.goal, Some(dec!(1000)));
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["budgetdash"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.json);
    }
}
