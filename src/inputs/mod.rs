//! Projection inputs: defaults, boundary clamping and validation

pub mod loader;

pub use loader::{
    apply_env_overrides, load_input, load_input_from_reader, resolve_input, InputOverrides,
};

use crate::error::{ProjectionError, Result};
use serde::{Deserialize, Serialize};

/// Scalar inputs for a projection run
///
/// All rates are decimals (0.05 = 5%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionInput {
    /// Age today; row `t` is at `current_age + t`
    pub current_age: u32,

    /// Salary today, before the immediate raise
    pub current_salary: f64,

    /// Creditable service already accrued
    pub service_years_at_start: f64,

    /// Annual salary growth
    pub growth_rate: f64,

    /// Annual inflation used to deflate to today's dollars
    pub inflation_rate: f64,

    /// Number of projected years (must be at least 1)
    pub horizon_years: u32,

    /// Defined-contribution account balance today
    pub starting_account_balance: f64,

    /// Annual return credited to the account
    pub account_return_rate: f64,

    /// Share of the year-end balance drawn as income
    pub account_withdraw_rate: f64,

    /// One-off raise applied to today's salary before projecting
    pub immediate_raise_rate: f64,
}

impl Default for ProjectionInput {
    fn default() -> Self {
        Self {
            current_age: 40,
            current_salary: 90_000.0,
            service_years_at_start: 10.0,
            growth_rate: 0.025,
            inflation_rate: 0.02,
            horizon_years: 30,
            starting_account_balance: 150_000.0,
            account_return_rate: 0.05,
            account_withdraw_rate: 0.04,
            immediate_raise_rate: 0.0,
        }
    }
}

impl ProjectionInput {
    /// Copy with negative salary, service and balance clamped to zero
    ///
    /// Front ends call this on raw user input before validating.
    pub fn clamped(&self) -> Self {
        let mut input = self.clone();
        for (name, value) in [
            ("current_salary", &mut input.current_salary),
            ("service_years_at_start", &mut input.service_years_at_start),
            ("starting_account_balance", &mut input.starting_account_balance),
        ] {
            if *value < 0.0 {
                log::warn!("Clamping negative {} ({}) to 0", name, value);
                *value = 0.0;
            }
        }
        input
    }

    /// Check the input before computing; fails on the first offending field
    pub fn validate(&self) -> Result<()> {
        if self.horizon_years < 1 {
            return Err(ProjectionError::invalid(
                "horizon_years",
                "must be at least 1",
            ));
        }
        if self.current_age.checked_add(self.horizon_years).is_none() {
            return Err(ProjectionError::invalid(
                "current_age",
                format!(
                    "age {} plus a {}-year horizon is out of range",
                    self.current_age, self.horizon_years
                ),
            ));
        }
        non_negative("current_salary", self.current_salary)?;
        non_negative("service_years_at_start", self.service_years_at_start)?;
        non_negative("starting_account_balance", self.starting_account_balance)?;
        Ok(())
    }

    /// Salary after the immediate raise, the baseline for every projected year
    pub fn effective_start_salary(&self) -> f64 {
        self.current_salary * (1.0 + self.immediate_raise_rate)
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    // NaN fails this comparison too
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ProjectionError::invalid(
            field,
            format!("must be non-negative, got {}", value),
        ))
    }
}
