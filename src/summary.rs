//! Headline figures drawn from a projection

use crate::projection::rules::qualifies_for_enhanced_factor;
use crate::projection::ProjectionRow;
use serde::{Deserialize, Serialize};

/// One highlighted year of the projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryPoint {
    pub year: u32,
    pub age: u32,
    pub service_years: f64,
    pub annual_pension_nominal: f64,
}

impl From<&ProjectionRow> for SummaryPoint {
    fn from(row: &ProjectionRow) -> Self {
        Self {
            year: row.year,
            age: row.age,
            service_years: row.service_years,
            annual_pension_nominal: row.annual_pension_nominal,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    /// Second projected year, or the first when only one exists
    pub next_year: SummaryPoint,

    /// Year with the highest nominal pension (latest on ties)
    pub peak: SummaryPoint,

    /// First year eligible for the enhanced factor, falling back to the
    /// first year at 62, then to the first year
    pub milestone: SummaryPoint,

    /// Whether the milestone year earns the enhanced factor
    pub milestone_enhanced: bool,

    pub final_account_balance: f64,
    pub final_total_annual_income: f64,
}

impl ProjectionSummary {
    pub fn from_rows(rows: &[ProjectionRow]) -> Option<Self> {
        let first = rows.first()?;
        let last = rows.last()?;

        let next_year = rows.get(1).unwrap_or(first);

        let peak = rows.iter().fold(first, |best, row| {
            if best.annual_pension_nominal > row.annual_pension_nominal {
                best
            } else {
                row
            }
        });

        let milestone = rows
            .iter()
            .find(|r| qualifies_for_enhanced_factor(r.age, r.service_years))
            .or_else(|| rows.iter().find(|r| r.age >= 62))
            .unwrap_or(first);

        Some(Self {
            next_year: next_year.into(),
            peak: peak.into(),
            milestone: milestone.into(),
            milestone_enhanced: qualifies_for_enhanced_factor(
                milestone.age,
                milestone.service_years,
            ),
            final_account_balance: last.account_balance_end,
            final_total_annual_income: last.total_annual_income,
        })
    }
}
