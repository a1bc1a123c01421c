//! Budgetdash terminal front-end.
//!
//! Collects income and expenses, runs the finance summary, and draws the
//! dashboard as text or JSON.

mod cli;
mod render;
mod session;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use budgetdash_core::dashboard::ViewOptions;
use budgetdash_core::input::{InputEvent, InputForm};
use budgetdash_shared::{AppConfig, AppError};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command, SummaryArgs};
use crate::session::Session;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; stdout is reserved for the dashboard
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "budgetdash=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "budgetdash failed");
            let code = match err.downcast_ref::<AppError>() {
                Some(app_err) => {
                    eprintln!("error[{}]: {err:#}", app_err.error_code());
                    app_err.exit_code()
                }
                None => {
                    eprintln!("error: {err:#}");
                    1
                }
            };
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load_from(cli.config.as_deref())?;
    info!(
        currency = %config.dashboard.currency,
        categories = config.categories.len(),
        "Configuration loaded"
    );

    let form = InputForm::from_config(&config).map_err(AppError::from)?;
    let options = ViewOptions::from(&config.dashboard);
    let mut session = Session::new(form, options, cli.json);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Some(Command::Session) => session.run(io::stdin().lock(), &mut out)?,
        Some(Command::Summary(args)) => summary(&mut session, args, &mut out)?,
        None => summary(&mut session, SummaryArgs::default(), &mut out)?,
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Applies flag overrides as events, then draws once.
fn summary(session: &mut Session, args: SummaryArgs, out: &mut impl Write) -> anyhow::Result<()> {
    let mut events = Vec::new();
    if let Some(income) = args.income {
        events.push(InputEvent::SetIncome(income));
    }
    for (category, amount) in args.expenses {
        events.push(InputEvent::SetExpense { category, amount });
    }
    if let Some(goal) = args.goal {
        events.push(InputEvent::SetSavingsGoal(Some(goal)));
    }

    let mut snapshot = session.snapshot();
    for event in events {
        snapshot = session.apply(event)?;
    }
    session.draw(&snapshot, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn session() -> Session {
        let config = AppConfig::default();
        let form = InputForm::from_config(&config).unwrap();
        Session::new(form, ViewOptions::from(&config.dashboard), true)
    }

    #[test]
    fn test_summary_applies_overrides() {
        let mut session = session();
        let args = SummaryArgs {
            income: Some(dec!(10000)),
            expenses: vec![("rent".to_string(), dec!(12000))],
            goal: Some(dec!(500)),
        };
        let mut out = Vec::new();

        summary(&mut session, args, &mut out).unwrap();

        let view: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(view["summary"]["total_expenses"], "29000");
        assert_eq!(view["summary"]["savings_tier"], "deficit");
        assert_eq!(view["summary"]["goal_tier"], "missed");
        assert_eq!(view["goal_status"]["severity"], "warning");
    }

    #[test]
    fn test_summary_rejects_unknown_category() {
        let mut session = session();
        let args = SummaryArgs {
            expenses: vec![("Travel".to_string(), dec!(1))],
            ..SummaryArgs::default()
        };

        let err = summary(&mut session, args, &mut Vec::<u8>::new()).unwrap_err();

        let app_err = err.downcast_ref::<AppError>().unwrap();
        assert_eq!(app_err.exit_code(), 2);
        assert_eq!(app_err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_summary_rejects_amount_above_cap() {
        let mut session = session();
        let args = SummaryArgs {
            income: Some(dec!(10000000000000000000000000000)),
            ..SummaryArgs::default()
        };
        let mut out = Vec::<u8>::new();

        let err = summary(&mut session, args, &mut out).unwrap_err();

        assert!(out.is_empty());
        let app_err = err.downcast_ref::<AppError>().unwrap();
        assert_eq!(app_err.exit_code(), 2);
        assert!(app_err.to_string().contains("exceeds the maximum"));
    }
}
