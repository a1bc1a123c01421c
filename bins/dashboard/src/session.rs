//! Interactive session: one change per line, one redraw per change.

use std::io::{BufRead, Write};
use std::str::FromStr;

use budgetdash_core::dashboard::{DashboardView, ViewOptions};
use budgetdash_core::input::{InputEvent, InputForm};
use budgetdash_core::summary::{FinanceInput, FinanceSummaryCalculator};
use budgetdash_shared::types::within_amount_cap;
use budgetdash_shared::{AppError, AppResult};
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::render;

/// A parsed session line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Apply a change and redraw.
    Change(InputEvent),
    /// Redraw without changing anything.
    Show,
    /// Print the command list.
    Help,
    /// End the session.
    Quit,
}

const HELP: &str = "\
commands:
  income <amount>              set monthly income
  expense <category> <amount>  set a category amount (alias: set)
  goal <amount>|none           set or clear the savings goal
  reset                        restore starting values
  show                         redraw the dashboard
  help                         show this list
  quit                         leave the session";

/// Parses one input line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> AppResult<Option<SessionCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let keyword = words.next().unwrap_or_default().to_lowercase();
    let rest: Vec<&str> = words.collect();

    let command = match (keyword.as_str(), rest.as_slice()) {
        ("income", [amount]) => SessionCommand::Change(InputEvent::SetIncome(parse_amount(amount)?)),
        ("expense" | "set", [category @ .., amount]) if !category.is_empty() => {
            SessionCommand::Change(InputEvent::SetExpense {
                category: category.join(" "),
                amount: parse_amount(amount)?,
            })
        }
        ("goal", [value]) if value.eq_ignore_ascii_case("none") => {
            SessionCommand::Change(InputEvent::SetSavingsGoal(None))
        }
        ("goal", [amount]) => {
            SessionCommand::Change(InputEvent::SetSavingsGoal(Some(parse_amount(amount)?)))
        }
        ("reset", []) => SessionCommand::Change(InputEvent::Reset),
        ("show", []) => SessionCommand::Show,
        ("help" | "?", []) => SessionCommand::Help,
        ("quit" | "exit", []) => SessionCommand::Quit,
        _ => {
            return Err(AppError::Input(format!(
                "unrecognised command `{line}`, try `help`"
            )));
        }
    };
    Ok(Some(command))
}

fn parse_amount(raw: &str) -> AppResult<Decimal> {
    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();
    let amount = Decimal::from_str(&cleaned)
        .map_err(|e| AppError::Input(format!("invalid amount `{raw}`: {e}")))?;
    if !within_amount_cap(amount) {
        return Err(AppError::Input(format!(
            "amount `{raw}` exceeds the maximum of 1,000,000,000,000,000"
        )));
    }
    Ok(amount)
}

/// Drives the explicit change loop: capture a change, build a fresh input,
/// compute, redraw.
pub struct Session {
    form: InputForm,
    calculator: FinanceSummaryCalculator,
    options: ViewOptions,
    json: bool,
}

impl Session {
    /// Creates a session over `form`.
    pub fn new(form: InputForm, options: ViewOptions, json: bool) -> Self {
        Self {
            form,
            calculator: FinanceSummaryCalculator::new(options.thresholds()),
            options,
            json,
        }
    }

    /// Current form values.
    pub fn snapshot(&self) -> FinanceInput {
        self.form.snapshot()
    }

    /// Applies one event, returning the new snapshot.
    pub fn apply(&mut self, event: InputEvent) -> AppResult<FinanceInput> {
        Ok(self.form.apply(event)?)
    }

    /// Builds the view for `input`.
    pub fn view(&self, input: &FinanceInput) -> DashboardView {
        let summary = self.calculator.compute(input);
        debug!(
            income = %summary.income,
            total_expenses = %summary.total_expenses,
            remaining = %summary.remaining,
            tier = ?summary.savings_tier,
            "Recomputed summary"
        );
        DashboardView::build(&summary, &self.options)
    }

    /// Draws the view for `input` to `out`.
    pub fn draw(&self, input: &FinanceInput, out: &mut impl Write) -> anyhow::Result<()> {
        let view = self.view(input);
        if self.json {
            serde_json::to_writer(&mut *out, &view)?;
            writeln!(out)?;
        } else {
            render::render_text(&view, out)?;
        }
        Ok(())
    }

    /// Reads commands from `input` until EOF or `quit`.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        info!(
            categories = self.form.categories().count(),
            "Session started"
        );
        self.draw(&self.snapshot(), out)?;

        for line in input.lines() {
            let line = line?;
            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(SessionCommand::Quit)) => break,
                Ok(Some(SessionCommand::Help)) => writeln!(out, "{HELP}")?,
                Ok(Some(SessionCommand::Show)) => self.draw(&self.snapshot(), out)?,
                Ok(Some(SessionCommand::Change(event))) => match self.apply(event) {
                    Ok(snapshot) => self.draw(&snapshot, out)?,
                    Err(err) => {
                        warn!(error = %err, "Rejected change");
                        writeln!(out, "error: {err}")?;
                    }
                },
                Err(err) => {
                    warn!(error = %err, line = %line, "Rejected command");
                    writeln!(out, "error: {err}")?;
                }
            }
            out.flush()?;
        }

        info!("Session ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use budgetdash_shared::AppConfig;
    use rstest::rstest;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    fn session(json: bool) -> Session {
        let form = InputForm::from_config(&AppConfig::default()).unwrap();
        Session::new(form, ViewOptions::default(), json)
    }

    #[rstest]
    #[case("income 20000", SessionCommand::Change(InputEvent::SetIncome(dec!(20000))))]
    #[case("INCOME 1,250.50", SessionCommand::Change(InputEvent::SetIncome(dec!(1250.50))))]
    #[case("expense Rent 18000", SessionCommand::Change(InputEvent::SetExpense { category: "Rent".into(), amount: dec!(18000) }))]
    #[case("set Eating Out 300", SessionCommand::Change(InputEvent::SetExpense { category: "Eating Out".into(), amount: dec!(300) }))]
    #[case("goal 10000", SessionCommand::Change(InputEvent::SetSavingsGoal(Some(dec!(10000)))))]
    #[case("goal none", SessionCommand::Change(InputEvent::SetSavingsGoal(None)))]
    #[case("reset", SessionCommand::Change(InputEvent::Reset))]
    #[case("show", SessionCommand::Show)]
    #[case("help", SessionCommand::Help)]
    #[case("  quit ", SessionCommand::Quit)]
    fn test_parse_command(#[case] line: &str, #[case] expected: SessionCommand) {
        assert_eq!(parse_command(line).unwrap(), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("# a comment")]
    fn test_parse_command_skips_blank(#[case] line: &str) {
        assert_eq!(parse_command(line).unwrap(), None);
    }

    #[rstest]
    #[case("income")]
    #[case("income lots")]
    #[case("expense 100")]
    #[case("goal")]
    #[case("dance")]
    #[case("income 10000000000000000000000000000")]
    #[case("expense Rent 1,000,000,000,000,001")]
    #[case("goal 99999999999999999999999999999")]
    fn test_parse_command_rejects(#[case] line: &str) {
        assert!(matches!(parse_command(line), Err(AppError::Input(_))));
    }

    #[test]
    fn test_session_redraws_after_each_change() {
        let mut session = session(true);
        let commands = "income 20000\nexpense Rent 18000\nexpense Food 0\nexpense Transport 0\nexpense Utilities 0\nexpense Entertainment 0\nquit\nincome 1\n";
        let mut out = Vec::new();

        session.run(Cursor::new(commands), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let frames: Vec<serde_json::Value> = output
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        // Initial frame plus one per change; nothing after quit.
        assert_eq!(frames.len(), 7);
        let last = frames.last().unwrap();
        assert_eq!(last["summary"]["savings_tier"], "low_savings");
        assert_eq!(last["summary"]["remaining"], "2000");
        assert_eq!(last["breakdown"]["slices"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let mut session = session(false);
        let mut out = Vec::new();

        session
            .run(Cursor::new("expense Travel 100\nbogus\nshow\n"), &mut out)
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("error: Invalid input: Unknown category: Travel"));
        assert!(output.contains("error: Invalid input: unrecognised command `bogus`"));
        assert_eq!(output.matches("Monthly Summary").count(), 2);
    }

    #[test]
    fn test_session_survives_oversized_amounts() {
        let mut session = session(true);
        let commands = "income 10000000000000000000000000000
expense Rent 50000000000000000000000000000
income 1000000000000000
show
";
        let mut out = Vec::new();

        session.run(Cursor::new(commands), &mut out).unwrap();

        let output = String::from_utf8(out).unwrap();
        let errors: Vec<&str> = output.lines().filter(|l| l.starts_with("error:")).collect();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|l| l.contains("exceeds the maximum")));

        let frames: Vec<serde_json::Value> = output
            .lines()
            .filter(|l| !l.starts_with("error:"))
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        // Initial frame, the accepted income change, and the explicit show.
        assert_eq!(frames.len(), 3);
        assert_eq!(frames[2]["summary"]["income"], "1000000000000000");
    }

    #[test]
    fn test_session_rejects_oversized_event_without_changing_form() {
        let mut session = session(false);
        let before = session.snapshot();

        let err = session
            .apply(InputEvent::SetIncome(Decimal::MAX))
            .unwrap_err();

        assert!(matches!(err, AppError::Input(ref m) if m.contains("exceeds the maximum")));
        assert_eq!(session.snapshot(), before);
    }

    #[test]
    fn test_session_goal_round_trip() {
        let mut session = session(false);
        let input = session
            .apply(InputEvent::SetSavingsGoal(Some(dec!(10000))))
            .unwrap();
        let view = session.view(&input);
        assert!(view.goal_status.is_some());

        let input = session.apply(InputEvent::SetSavingsGoal(None)).unwrap();
        assert!(session.view(&input).goal_status.is_none());
    }
}
