//! Output structures for projections

use crate::summary::ProjectionSummary;
use serde::{Deserialize, Serialize};

/// A single projected year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionRow {
    // Timing
    pub year: u32,
    pub age: u32,
    pub service_years: f64,

    // Pension
    pub salary_this_year: f64,
    pub high3_average: f64,
    pub annuity_factor: f64,
    pub annual_pension_nominal: f64,
    pub annual_pension_real: f64,

    // Defined-contribution account
    pub account_balance_end: f64,
    pub account_contribution: f64,
    pub account_income_annual: f64,
    pub account_income_real: f64,

    // Totals
    pub total_annual_income: f64,
    pub total_monthly_income: f64,
}

/// Complete projection result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Yearly rows, `year` 1 first
    pub rows: Vec<ProjectionRow>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn with_capacity(years: usize) -> Self {
        Self {
            rows: Vec::with_capacity(years),
        }
    }

    /// Add a row
    pub fn add_row(&mut self, row: ProjectionRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[ProjectionRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn final_row(&self) -> Option<&ProjectionRow> {
        self.rows.last()
    }

    /// Headline figures; `None` for an empty result
    pub fn summary(&self) -> Option<ProjectionSummary> {
        ProjectionSummary::from_rows(&self.rows)
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}
