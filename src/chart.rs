//! Chart series for pension display modes
//!
//! Maps rows to (age, value) points for one of four modes:
//! {annual, monthly} x {nominal, today's dollars}.

use crate::error::ProjectionError;
use crate::projection::ProjectionRow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Basis {
    Annual,
    Monthly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dollars {
    Nominal,
    /// Deflated to today's purchasing power
    Real,
}

/// Chart display mode, written as e.g. `annual-nominal` or `monthly-real`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMode {
    pub basis: Basis,
    pub dollars: Dollars,
}

impl DisplayMode {
    pub const fn new(basis: Basis, dollars: Dollars) -> Self {
        Self { basis, dollars }
    }

    /// Pension value plotted for one row
    pub fn value(&self, row: &ProjectionRow) -> f64 {
        let base = match self.dollars {
            Dollars::Nominal => row.annual_pension_nominal,
            Dollars::Real => row.annual_pension_real,
        };
        match self.basis {
            Basis::Annual => base,
            Basis::Monthly => base / 12.0,
        }
    }

    /// Legend text, e.g. "Monthly (today's $) pension"
    pub fn label(&self) -> String {
        let basis = match self.basis {
            Basis::Annual => "Annual",
            Basis::Monthly => "Monthly",
        };
        let dollars = match self.dollars {
            Dollars::Nominal => "(nominal)",
            Dollars::Real => "(today's $)",
        };
        format!("{} {} pension", basis, dollars)
    }
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::new(Basis::Annual, Dollars::Nominal)
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let basis = match self.basis {
            Basis::Annual => "annual",
            Basis::Monthly => "monthly",
        };
        let dollars = match self.dollars {
            Dollars::Nominal => "nominal",
            Dollars::Real => "real",
        };
        write!(f, "{}-{}", basis, dollars)
    }
}

impl FromStr for DisplayMode {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (basis, dollars) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| {
                ProjectionError::invalid(
                    "display_mode",
                    format!("expected basis-dollars, got {:?}", s),
                )
            })?;

        let basis = match basis.to_ascii_lowercase().as_str() {
            "annual" => Basis::Annual,
            "monthly" => Basis::Monthly,
            other => {
                return Err(ProjectionError::invalid(
                    "display_mode",
                    format!("unknown basis {:?}", other),
                ))
            }
        };
        let dollars = match dollars.to_ascii_lowercase().as_str() {
            "nominal" => Dollars::Nominal,
            "real" => Dollars::Real,
            other => {
                return Err(ProjectionError::invalid(
                    "display_mode",
                    format!("unknown dollars {:?}", other),
                ))
            }
        };
        Ok(Self::new(basis, dollars))
    }
}

/// (age, value) points in row order
pub fn series(rows: &[ProjectionRow], mode: DisplayMode) -> Vec<(u32, f64)> {
    rows.iter().map(|row| (row.age, mode.value(row))).collect()
}

/// Y-axis tick text: `$12k` from 1000 up, `$850` below
pub fn format_axis_tick(value: f64) -> String {
    if value >= 1000.0 {
        format!("${}k", (value / 1000.0).round())
    } else {
        format!("${}", value.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::ProjectionInput;
    use crate::projection::compute;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_and_display_modes() {
        for text in ["annual-nominal", "annual-real", "monthly-nominal", "monthly-real"] {
            let mode: DisplayMode = text.parse().unwrap();
            assert_eq!(mode.to_string(), text);
        }
        assert!("weekly-real".parse::<DisplayMode>().is_err());
        assert!("annual".parse::<DisplayMode>().is_err());
    }

    #[test]
    fn test_series_values() {
        let input = ProjectionInput {
            horizon_years: 5,
            ..Default::default()
        };
        let result = compute(&input).unwrap();
        let rows = result.rows();

        let annual = series(rows, "annual-nominal".parse().unwrap());
        let monthly_real = series(rows, "monthly-real".parse().unwrap());

        assert_eq!(annual.len(), 5);
        assert_eq!(annual[0].0, 41);
        assert_eq!(annual[0].1, rows[0].annual_pension_nominal);
        assert_relative_eq!(monthly_real[4].1, rows[4].annual_pension_real / 12.0);
    }

    #[test]
    fn test_labels() {
        assert_eq!(DisplayMode::default().label(), "Annual (nominal) pension");
        assert_eq!(
            DisplayMode::new(Basis::Monthly, Dollars::Real).label(),
            "Monthly (today's $) pension"
        );
    }

    #[test]
    fn test_axis_ticks() {
        assert_eq!(format_axis_tick(850.4), "$850");
        assert_eq!(format_axis_tick(12_345.0), "$12k");
        assert_eq!(format_axis_tick(1_000.0), "$1k");
    }
}
