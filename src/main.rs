//! Pension Projection CLI
//!
//! Command-line interface for running pension and account projections.
//! Input precedence: command-line flag > PROJECTION_* environment variable >
//! `--config` JSON file > built-in defaults.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use pension_projection::{
    chart, export,
    inputs::{resolve_input, InputOverrides},
    report, DisplayMode, ProjectionInput, ProjectionSession, ScenarioRunner, SweepField,
};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "pension-projection",
    version,
    about = "Project pension and account income year by year"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run one projection and print summary, chart series and table
    Project {
        #[command(flatten)]
        inputs: InputArgs,

        /// Chart mode: annual-nominal, annual-real, monthly-nominal, monthly-real
        #[arg(long, default_value = "annual-nominal")]
        mode: DisplayMode,

        /// Also write the table as CSV
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Vary one rate and compare outcomes
    Sweep {
        #[command(flatten)]
        inputs: InputArgs,

        /// Rate to vary: growth, inflation, return, withdraw, raise
        #[arg(long)]
        field: SweepField,

        /// Comma-separated decimal values, e.g. 0.03,0.05,0.07
        #[arg(
            long,
            value_delimiter = ',',
            required = true,
            allow_hyphen_values = true
        )]
        values: Vec<f64>,
    },
}

#[derive(Args)]
struct InputArgs {
    /// JSON file with projection inputs
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    age: Option<u32>,
    #[arg(long, allow_negative_numbers = true)]
    salary: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    service: Option<f64>,
    /// Annual salary growth (decimal)
    #[arg(long, allow_negative_numbers = true)]
    growth: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    inflation: Option<f64>,
    /// Years to project
    #[arg(long)]
    horizon: Option<u32>,
    /// Starting account balance
    #[arg(long, allow_negative_numbers = true)]
    balance: Option<f64>,
    /// Annual account return (decimal)
    #[arg(long = "return", allow_negative_numbers = true)]
    account_return: Option<f64>,
    /// Share of year-end balance withdrawn (decimal)
    #[arg(long, allow_negative_numbers = true)]
    withdraw: Option<f64>,
    /// Immediate raise on today's salary (decimal)
    #[arg(long, allow_negative_numbers = true)]
    raise: Option<f64>,
}

impl InputArgs {
    fn overrides(&self) -> InputOverrides {
        InputOverrides {
            current_age: self.age,
            current_salary: self.salary,
            service_years_at_start: self.service,
            growth_rate: self.growth,
            inflation_rate: self.inflation,
            horizon_years: self.horizon,
            starting_account_balance: self.balance,
            account_return_rate: self.account_return,
            account_withdraw_rate: self.withdraw,
            immediate_raise_rate: self.raise,
        }
    }

    fn resolve(&self) -> Result<ProjectionInput> {
        let config = match &self.config {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open config {}", path.display()))?;
                Some(BufReader::new(file))
            }
            None => None,
        };
        resolve_input(config, |var| std::env::var(var).ok(), &self.overrides())
            .context("Failed to resolve projection inputs")
    }
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Project {
            inputs,
            mode,
            csv,
            json,
        } => run_project(inputs.resolve()?, mode, csv, json),
        Command::Sweep {
            inputs,
            field,
            values,
        } => run_sweep(inputs.resolve()?, field, &values),
    }
}

fn run_project(
    input: ProjectionInput,
    mode: DisplayMode,
    csv: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let mut session = ProjectionSession::new(input);
    let result = session.recompute().context("Projection rejected")?;
    log::info!("Projected {} years", result.len());

    if let Some(path) = &csv {
        export::write_csv_file(result.rows(), path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        log::info!("CSV written to {}", path.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    if let Some(summary) = result.summary() {
        println!("{}\n", report::render_summary(&summary));
    }

    println!("{}", mode.label());
    for (age, value) in chart::series(result.rows(), mode) {
        println!(
            "  {:>3}  {:>10}  {}",
            age,
            chart::format_axis_tick(value),
            report::format_currency(value)
        );
    }
    println!();

    println!("{}", report::render_table(result.rows()));

    if let Some(path) = &csv {
        println!("\nFull results written to: {}", path.display());
    }
    Ok(())
}

fn run_sweep(base: ProjectionInput, field: SweepField, values: &[f64]) -> Result<()> {
    let runner = ScenarioRunner::clamping();
    let points = runner.sweep(&base, field, values).context("Sweep rejected")?;

    println!(
        "{:>10} {:>16} {:>16} {:>14}",
        field.name(),
        "Final balance",
        "Final income/yr",
        "Peak pension"
    );
    println!("{}", "-".repeat(60));
    for point in &points {
        let Some(summary) = point.result.summary() else { continue };
        println!(
            "{:>10} {:>16} {:>16} {:>14}",
            report::format_percent(point.value),
            report::format_currency(summary.final_account_balance),
            report::format_currency(summary.final_total_annual_income),
            report::format_currency(summary.peak.annual_pension_nominal),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_accepts_negative_rates() {
        let cli = Cli::try_parse_from([
            "pension-projection",
            "project",
            "--growth",
            "-0.01",
            "--raise",
            "-0.05",
        ])
        .unwrap();

        let Command::Project { inputs, .. } = cli.command else {
            panic!("expected project subcommand");
        };
        let overrides = inputs.overrides();
        assert_eq!(overrides.growth_rate, Some(-0.01));
        assert_eq!(overrides.immediate_raise_rate, Some(-0.05));
    }

    #[test]
    fn test_sweep_accepts_negative_values() {
        let cli = Cli::try_parse_from([
            "pension-projection",
            "sweep",
            "--field",
            "growth",
            "--values",
            "-0.01,0.02",
        ])
        .unwrap();

        let Command::Sweep { field, values, .. } = cli.command else {
            panic!("expected sweep subcommand");
        };
        assert_eq!(field, SweepField::GrowthRate);
        assert_eq!(values, vec![-0.01, 0.02]);
    }

    #[test]
    fn test_flags_map_onto_overrides() {
        let cli = Cli::try_parse_from([
            "pension-projection",
            "project",
            "--age",
            "50",
            "--horizon",
            "12",
            "--return",
            "0.06",
        ])
        .unwrap();

        let Command::Project { inputs, mode, .. } = cli.command else {
            panic!("expected project subcommand");
        };
        let overrides = inputs.overrides();
        assert_eq!(overrides.current_age, Some(50));
        assert_eq!(overrides.horizon_years, Some(12));
        assert_eq!(overrides.account_return_rate, Some(0.06));
        assert_eq!(overrides.current_salary, None);
        assert_eq!(mode, DisplayMode::default());
    }
}
