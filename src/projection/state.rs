//! Running state carried from one projection year to the next

use crate::inputs::ProjectionInput;

/// State at the end of the most recently projected year
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Years from today (0 before the first year is projected)
    pub year: u32,

    /// Attained age
    pub age: u32,

    /// Accrued service
    pub service_years: f64,

    /// Account balance at the end of `year`
    pub account_balance: f64,
}

impl ProjectionState {
    /// Initialize state from inputs at projection start
    pub fn from_input(input: &ProjectionInput) -> Self {
        Self {
            year: 0,
            age: input.current_age,
            service_years: input.service_years_at_start,
            account_balance: input.starting_account_balance,
        }
    }

    /// Advance timing to the next year; the balance is rolled by the engine
    pub fn advance_year(&mut self) {
        self.year += 1;
        self.age += 1;
        self.service_years += 1.0;
    }

    /// Roll the balance forward one year and return the new year-end balance
    pub fn roll_account(&mut self, return_rate: f64, contribution: f64) -> f64 {
        self.account_balance = self.account_balance * (1.0 + return_rate) + contribution;
        self.account_balance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_and_roll() {
        let input = ProjectionInput::default();
        let mut state = ProjectionState::from_input(&input);
        assert_eq!(state.year, 0);

        state.advance_year();
        assert_eq!(state.year, 1);
        assert_eq!(state.age, 41);
        assert_eq!(state.service_years, 11.0);

        let balance = state.roll_account(0.10, 1_000.0);
        assert!((balance - 166_000.0).abs() < 1e-9);
        assert_eq!(state.account_balance, balance);
    }
}
