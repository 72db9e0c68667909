//! Benefit rules used by the projection
//!
//! Simplified FERS-style rules of thumb: basic annuity of 1.0% of high-3 per
//! year of service, 1.1% when retiring at 62 or later with 20 or more years.

/// Annuity factor per year of service
pub const BASE_ANNUITY_FACTOR: f64 = 0.010;

/// Annuity factor once both the age and service thresholds are met
pub const ENHANCED_ANNUITY_FACTOR: f64 = 0.011;

pub const ENHANCED_FACTOR_MIN_AGE: u32 = 62;
pub const ENHANCED_FACTOR_MIN_SERVICE: f64 = 20.0;

/// Share of salary contributed to the account each year
pub const CONTRIBUTION_RATE: f64 = 0.10;

/// Salary `years_from_now` years out; offsets before today stay at today's salary
pub fn projected_salary(start_salary: f64, growth_rate: f64, years_from_now: i64) -> f64 {
    start_salary * (1.0 + growth_rate).powi(years_from_now.max(0) as i32)
}

/// Average of the projected salaries at `t - 2`, `t - 1` and `t`
pub fn high3_average(start_salary: f64, growth_rate: f64, years_from_now: u32) -> f64 {
    let t = i64::from(years_from_now);
    let total: f64 = (t - 2..=t)
        .map(|offset| projected_salary(start_salary, growth_rate, offset))
        .sum();
    total / 3.0
}

/// Both thresholds must hold in the same year for the enhanced factor
pub fn qualifies_for_enhanced_factor(age: u32, service_years: f64) -> bool {
    age >= ENHANCED_FACTOR_MIN_AGE && service_years >= ENHANCED_FACTOR_MIN_SERVICE
}

pub fn annuity_factor(age: u32, service_years: f64) -> f64 {
    if qualifies_for_enhanced_factor(age, service_years) {
        ENHANCED_ANNUITY_FACTOR
    } else {
        BASE_ANNUITY_FACTOR
    }
}

/// Deflate a nominal amount `years` out to today's dollars
pub fn to_real_dollars(nominal: f64, inflation_rate: f64, years: u32) -> f64 {
    nominal / (1.0 + inflation_rate).powi(years as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_factor_requires_both_thresholds() {
        assert_eq!(annuity_factor(62, 20.0), ENHANCED_ANNUITY_FACTOR);
        assert_eq!(annuity_factor(70, 35.0), ENHANCED_ANNUITY_FACTOR);
        assert_eq!(annuity_factor(61, 30.0), BASE_ANNUITY_FACTOR);
        assert_eq!(annuity_factor(65, 19.5), BASE_ANNUITY_FACTOR);
        assert_eq!(annuity_factor(45, 5.0), BASE_ANNUITY_FACTOR);
    }

    #[test]
    fn test_high3_clamps_offsets_before_today() {
        // t=1: offsets -1, 0, 1
        let h3 = high3_average(90_000.0, 0.025, 1);
        assert_relative_eq!(h3, 90_750.0, epsilon = 1e-6);

        // t=0: all three offsets are today's salary
        assert_relative_eq!(high3_average(90_000.0, 0.025, 0), 90_000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_high3_uses_three_most_recent_years() {
        let start = 50_000.0;
        let g = 0.04;
        let expected = (start * 1.04_f64.powi(8) + start * 1.04_f64.powi(9) + start * 1.04_f64.powi(10)) / 3.0;
        assert_relative_eq!(high3_average(start, g, 10), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_real_dollars() {
        assert_relative_eq!(to_real_dollars(1_000.0, 0.0, 25), 1_000.0);
        assert_relative_eq!(to_real_dollars(1_102.5, 0.05, 2), 1_000.0, epsilon = 1e-9);
    }
}
