//! Configuration loading for projection inputs
//!
//! Inputs come from a JSON file (fields missing from the file keep their
//! defaults) and may then be overridden by environment variables:
//!   PROJECTION_CURRENT_AGE, PROJECTION_SALARY, PROJECTION_SERVICE_YEARS,
//!   PROJECTION_GROWTH_RATE, PROJECTION_INFLATION_RATE, PROJECTION_HORIZON_YEARS,
//!   PROJECTION_ACCOUNT_BALANCE, PROJECTION_ACCOUNT_RETURN,
//!   PROJECTION_WITHDRAW_RATE, PROJECTION_RAISE_RATE
//!
//! Explicit [`InputOverrides`] (command-line flags) win over both.

use super::ProjectionInput;
use crate::error::{ProjectionError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

/// Load inputs from a JSON file
pub fn load_input<P: AsRef<Path>>(path: P) -> Result<ProjectionInput> {
    let file = File::open(path)?;
    load_input_from_reader(BufReader::new(file))
}

/// Load inputs from any reader (e.g., string buffer, stdin)
pub fn load_input_from_reader<R: Read>(reader: R) -> Result<ProjectionInput> {
    Ok(serde_json::from_reader(reader)?)
}

/// Override fields from the process environment
pub fn apply_env_overrides(input: ProjectionInput) -> Result<ProjectionInput> {
    apply_overrides_from(input, |var| std::env::var(var).ok())
}

/// Override fields using an arbitrary variable lookup
pub fn apply_overrides_from<F>(mut input: ProjectionInput, lookup: F) -> Result<ProjectionInput>
where
    F: Fn(&str) -> Option<String>,
{
    override_field(&lookup, "PROJECTION_CURRENT_AGE", &mut input.current_age)?;
    override_field(&lookup, "PROJECTION_SALARY", &mut input.current_salary)?;
    override_field(&lookup, "PROJECTION_SERVICE_YEARS", &mut input.service_years_at_start)?;
    override_field(&lookup, "PROJECTION_GROWTH_RATE", &mut input.growth_rate)?;
    override_field(&lookup, "PROJECTION_INFLATION_RATE", &mut input.inflation_rate)?;
    override_field(&lookup, "PROJECTION_HORIZON_YEARS", &mut input.horizon_years)?;
    override_field(&lookup, "PROJECTION_ACCOUNT_BALANCE", &mut input.starting_account_balance)?;
    override_field(&lookup, "PROJECTION_ACCOUNT_RETURN", &mut input.account_return_rate)?;
    override_field(&lookup, "PROJECTION_WITHDRAW_RATE", &mut input.account_withdraw_rate)?;
    override_field(&lookup, "PROJECTION_RAISE_RATE", &mut input.immediate_raise_rate)?;
    Ok(input)
}

/// Per-field values set explicitly by the caller, e.g. from command-line flags
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputOverrides {
    pub current_age: Option<u32>,
    pub current_salary: Option<f64>,
    pub service_years_at_start: Option<f64>,
    pub growth_rate: Option<f64>,
    pub inflation_rate: Option<f64>,
    pub horizon_years: Option<u32>,
    pub starting_account_balance: Option<f64>,
    pub account_return_rate: Option<f64>,
    pub account_withdraw_rate: Option<f64>,
    pub immediate_raise_rate: Option<f64>,
}

impl InputOverrides {
    /// Replace every field of `input` that has an override
    pub fn apply(&self, mut input: ProjectionInput) -> ProjectionInput {
        if let Some(v) = self.current_age {
            input.current_age = v;
        }
        if let Some(v) = self.current_salary {
            input.current_salary = v;
        }
        if let Some(v) = self.service_years_at_start {
            input.service_years_at_start = v;
        }
        if let Some(v) = self.growth_rate {
            input.growth_rate = v;
        }
        if let Some(v) = self.inflation_rate {
            input.inflation_rate = v;
        }
        if let Some(v) = self.horizon_years {
            input.horizon_years = v;
        }
        if let Some(v) = self.starting_account_balance {
            input.starting_account_balance = v;
        }
        if let Some(v) = self.account_return_rate {
            input.account_return_rate = v;
        }
        if let Some(v) = self.account_withdraw_rate {
            input.account_withdraw_rate = v;
        }
        if let Some(v) = self.immediate_raise_rate {
            input.immediate_raise_rate = v;
        }
        input
    }
}

/// Layer the input sources: overrides > variable lookup > config > defaults
pub fn resolve_input<R, F>(
    config: Option<R>,
    lookup: F,
    overrides: &InputOverrides,
) -> Result<ProjectionInput>
where
    R: Read,
    F: Fn(&str) -> Option<String>,
{
    let base = match config {
        Some(reader) => load_input_from_reader(reader)?,
        None => ProjectionInput::default(),
    };
    let input = apply_overrides_from(base, lookup)?;
    Ok(overrides.apply(input))
}

fn override_field<F, T>(lookup: &F, var: &str, slot: &mut T) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    if let Some(raw) = lookup(var) {
        let parsed = raw.trim().parse::<T>().map_err(|_| ProjectionError::Env {
            var: var.to_string(),
            value: raw.clone(),
        })?;
        log::debug!("{} overrides configured value", var);
        *slot = parsed;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let json = r#"{ "current_salary": 120000, "horizon_years": 5 }"#;
        let input = load_input_from_reader(json.as_bytes()).unwrap();

        assert_eq!(input.current_salary, 120_000.0);
        assert_eq!(input.horizon_years, 5);
        assert_eq!(input.current_age, 40);
        assert_eq!(input.account_withdraw_rate, 0.04);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = load_input_from_reader("{ not json".as_bytes());
        assert!(matches!(result, Err(ProjectionError::Json(_))));
    }

    #[test]
    fn test_overrides_applied() {
        let vars: HashMap<&str, &str> = [
            ("PROJECTION_HORIZON_YEARS", "12"),
            ("PROJECTION_GROWTH_RATE", " 0.03 "),
        ]
        .into_iter()
        .collect();

        let input = apply_overrides_from(ProjectionInput::default(), |var| {
            vars.get(var).map(|v| v.to_string())
        })
        .unwrap();

        assert_eq!(input.horizon_years, 12);
        assert_eq!(input.growth_rate, 0.03);
        assert_eq!(input.current_salary, 90_000.0);
    }

    #[test]
    fn test_sources_layer_in_precedence_order() {
        let config = r#"{ "growth_rate": 0.01, "inflation_rate": 0.05, "horizon_years": 8 }"#;
        let vars: HashMap<&str, &str> = [
            ("PROJECTION_GROWTH_RATE", "0.02"),
            ("PROJECTION_INFLATION_RATE", "0.03"),
        ]
        .into_iter()
        .collect();
        let overrides = InputOverrides {
            growth_rate: Some(-0.01),
            ..Default::default()
        };

        let input = resolve_input(
            Some(config.as_bytes()),
            |var| vars.get(var).map(|v| v.to_string()),
            &overrides,
        )
        .unwrap();

        // Set by all three sources: the override wins
        assert_eq!(input.growth_rate, -0.01);
        // Config and environment: the environment wins
        assert_eq!(input.inflation_rate, 0.03);
        // Config only
        assert_eq!(input.horizon_years, 8);
        // No source: default
        assert_eq!(input.current_salary, 90_000.0);
    }

    #[test]
    fn test_resolve_without_config_starts_from_defaults() {
        let overrides = InputOverrides {
            current_age: Some(55),
            ..Default::default()
        };
        let input = resolve_input(None::<&[u8]>, |_| None, &overrides).unwrap();

        assert_eq!(input, ProjectionInput { current_age: 55, ..Default::default() });
    }

    #[test]
    fn test_unparsable_override_names_variable() {
        let result = apply_overrides_from(ProjectionInput::default(), |var| {
            (var == "PROJECTION_CURRENT_AGE").then(|| "forty".to_string())
        });

        match result {
            Err(ProjectionError::Env { var, value }) => {
                assert_eq!(var, "PROJECTION_CURRENT_AGE");
                assert_eq!(value, "forty");
            }
            other => panic!("expected Env error, got {:?}", other),
        }
    }
}
