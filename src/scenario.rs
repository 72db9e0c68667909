//! Scenario runner for batch projections and rate sweeps
//!
//! Each projection is independent and single-threaded; batches fan out across
//! the rayon thread pool.

use crate::error::{ProjectionError, Result};
use crate::inputs::ProjectionInput;
use crate::projection::{compute, ProjectionResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rate that a sweep varies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepField {
    GrowthRate,
    InflationRate,
    AccountReturnRate,
    AccountWithdrawRate,
    ImmediateRaiseRate,
}

impl SweepField {
    pub const ALL: [SweepField; 5] = [
        SweepField::GrowthRate,
        SweepField::InflationRate,
        SweepField::AccountReturnRate,
        SweepField::AccountWithdrawRate,
        SweepField::ImmediateRaiseRate,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SweepField::GrowthRate => "growth",
            SweepField::InflationRate => "inflation",
            SweepField::AccountReturnRate => "return",
            SweepField::AccountWithdrawRate => "withdraw",
            SweepField::ImmediateRaiseRate => "raise",
        }
    }

    /// Copy of `base` with this field set to `value`
    pub fn apply(&self, base: &ProjectionInput, value: f64) -> ProjectionInput {
        let mut input = base.clone();
        match self {
            SweepField::GrowthRate => input.growth_rate = value,
            SweepField::InflationRate => input.inflation_rate = value,
            SweepField::AccountReturnRate => input.account_return_rate = value,
            SweepField::AccountWithdrawRate => input.account_withdraw_rate = value,
            SweepField::ImmediateRaiseRate => input.immediate_raise_rate = value,
        }
        input
    }
}

impl fmt::Display for SweepField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SweepField {
    type Err = ProjectionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        SweepField::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ProjectionError::invalid("sweep_field", format!("unknown field {:?}", s))
            })
    }
}

/// One value of a sweep and its projection
#[derive(Debug, Clone, Serialize)]
pub struct SweepPoint {
    pub value: f64,
    pub result: ProjectionResult,
}

/// Runs many independent projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let points = runner.sweep(&input, SweepField::GrowthRate, &[0.02, 0.03, 0.04])?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    /// Clamp inputs to zero before validating, as front ends do
    clamp_inputs: bool,
}

impl ScenarioRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runner that clamps negative salary, service and balance before computing
    pub fn clamping() -> Self {
        Self { clamp_inputs: true }
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> Result<ProjectionResult> {
        if self.clamp_inputs {
            compute(&input.clamped())
        } else {
            compute(input)
        }
    }

    /// Run every input; results keep input order
    pub fn run_batch(&self, inputs: &[ProjectionInput]) -> Vec<Result<ProjectionResult>> {
        inputs.par_iter().map(|input| self.run(input)).collect()
    }

    /// Vary one rate over `values`; fails on the first invalid point
    pub fn sweep(
        &self,
        base: &ProjectionInput,
        field: SweepField,
        values: &[f64],
    ) -> Result<Vec<SweepPoint>> {
        log::info!("Sweeping {} over {} values", field, values.len());

        values
            .par_iter()
            .map(|&value| -> Result<SweepPoint> {
                let result = self.run(&field.apply(base, value))?;
                Ok(SweepPoint { value, result })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_batch_keeps_order_and_errors() {
        let runner = ScenarioRunner::new();
        let inputs: Vec<_> = [5, 0, 10]
            .into_iter()
            .map(|horizon_years| ProjectionInput {
                horizon_years,
                ..Default::default()
            })
            .collect();

        let results = runner.run_batch(&inputs);
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().map(|r| r.len()).ok(), Some(5));
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().map(|r| r.len()).ok(), Some(10));
    }

    #[test]
    fn test_return_sweep_orders_final_balance() {
        let runner = ScenarioRunner::new();
        let base = ProjectionInput::default();

        let points = runner
            .sweep(&base, SweepField::AccountReturnRate, &[0.03, 0.05, 0.07])
            .unwrap();
        assert_eq!(points.len(), 3);

        let balances: Vec<f64> = points
            .iter()
            .map(|p| p.result.final_row().unwrap().account_balance_end)
            .collect();

        // Higher return should result in a higher final balance
        assert!(balances[0] < balances[1] && balances[1] < balances[2]);
        assert_eq!(points[1].value, 0.05);
    }

    #[test]
    fn test_clamping_runner_accepts_negative_balance() {
        let input = ProjectionInput {
            starting_account_balance: -1.0,
            ..Default::default()
        };
        assert!(ScenarioRunner::new().run(&input).is_err());
        assert!(ScenarioRunner::clamping().run(&input).is_ok());
    }

    #[test]
    fn test_parse_sweep_field() {
        assert_eq!("growth".parse::<SweepField>().unwrap(), SweepField::GrowthRate);
        assert_eq!("Withdraw".parse::<SweepField>().unwrap(), SweepField::AccountWithdrawRate);
        assert!("salary".parse::<SweepField>().is_err());
    }
}
