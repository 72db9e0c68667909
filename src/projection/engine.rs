//! Core projection engine for yearly pension and account projections

use super::rows::{ProjectionResult, ProjectionRow};
use super::rules::{self, CONTRIBUTION_RATE};
use super::state::ProjectionState;
use crate::error::Result;
use crate::inputs::ProjectionInput;

/// Validate `input` and project every year of the horizon
pub fn compute(input: &ProjectionInput) -> Result<ProjectionResult> {
    Ok(ProjectionEngine::new(input.clone())?.project())
}

/// Projection engine bound to one validated set of inputs
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    input: ProjectionInput,
    start_salary: f64,
}

impl ProjectionEngine {
    /// Create an engine; fails if the inputs do not validate
    pub fn new(input: ProjectionInput) -> Result<Self> {
        input.validate()?;
        let start_salary = input.effective_start_salary();
        Ok(Self { input, start_salary })
    }

    pub fn input(&self) -> &ProjectionInput {
        &self.input
    }

    /// Run the projection
    pub fn project(&self) -> ProjectionResult {
        let years = self.input.horizon_years;
        let mut result = ProjectionResult::with_capacity(years as usize);
        let mut state = ProjectionState::from_input(&self.input);

        for _year in 1..=years {
            state.advance_year();
            let row = self.calculate_year(&mut state);
            result.add_row(row);
        }

        log::debug!(
            "Projected {} years from age {}: final balance {:.2}",
            years,
            self.input.current_age,
            state.account_balance
        );

        result
    }

    /// Calculate one year; rolls the account balance in `state`
    fn calculate_year(&self, state: &mut ProjectionState) -> ProjectionRow {
        let input = &self.input;
        let t = state.year;

        let salary_this_year =
            rules::projected_salary(self.start_salary, input.growth_rate, i64::from(t));
        let high3_average = rules::high3_average(self.start_salary, input.growth_rate, t);
        let annuity_factor = rules::annuity_factor(state.age, state.service_years);

        let annual_pension_nominal = annuity_factor * high3_average * state.service_years;
        let annual_pension_real =
            rules::to_real_dollars(annual_pension_nominal, input.inflation_rate, t);

        let account_contribution = CONTRIBUTION_RATE * salary_this_year;
        let account_balance_end =
            state.roll_account(input.account_return_rate, account_contribution);
        // Withdrawal is taken on the same year's ending balance
        let account_income_annual = input.account_withdraw_rate * account_balance_end;
        let account_income_real =
            rules::to_real_dollars(account_income_annual, input.inflation_rate, t);

        let total_annual_income = annual_pension_nominal + account_income_annual;

        ProjectionRow {
            year: t,
            age: state.age,
            service_years: state.service_years,
            salary_this_year,
            high3_average,
            annuity_factor,
            annual_pension_nominal,
            annual_pension_real,
            account_balance_end,
            account_contribution,
            account_income_annual,
            account_income_real,
            total_annual_income,
            total_monthly_income: total_annual_income / 12.0,
        }
    }
}
