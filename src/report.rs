//! Plain-text formatting for the CLI

use crate::export::round_half_up;
use crate::projection::ProjectionRow;
use crate::summary::ProjectionSummary;

/// Whole dollars with thousands separators, e.g. `$1,234,568`
pub fn format_currency(value: f64) -> String {
    let rounded = round_half_up(value);
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Percentage with one decimal, e.g. `1.1%`
pub fn format_percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

/// Fixed-width results table followed by a row count
pub fn render_table(rows: &[ProjectionRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 3);
    lines.push(format!(
        "{:>4} {:>7} {:>12} {:>12} {:>6} {:>11} {:>11} {:>14} {:>10} {:>11} {:>11} {:>10}",
        "Age",
        "Service",
        "Salary",
        "High-3",
        "Factor",
        "Pension",
        "Pension(R)",
        "Acct Bal",
        "Acct Contr",
        "Acct Inc",
        "Total/yr",
        "Total/mo",
    ));
    lines.push("-".repeat(140));

    for row in rows {
        lines.push(format!(
            "{:>4} {:>7} {:>12} {:>12} {:>6} {:>11} {:>11} {:>14} {:>10} {:>11} {:>11} {:>10}",
            row.age,
            round_half_up(row.service_years),
            format_currency(row.salary_this_year),
            format_currency(row.high3_average),
            format_percent(row.annuity_factor),
            format_currency(row.annual_pension_nominal),
            format_currency(row.annual_pension_real),
            format_currency(row.account_balance_end),
            format_currency(row.account_contribution),
            format_currency(row.account_income_annual),
            format_currency(row.total_annual_income),
            format_currency(row.total_monthly_income),
        ));
    }

    lines.push(format!("Rows: {}", rows.len()));
    lines.join("\n")
}

pub fn render_summary(summary: &ProjectionSummary) -> String {
    let enhanced = if summary.milestone_enhanced {
        " (1.1% factor)"
    } else {
        ""
    };
    format!(
        "Milestone: Age {}{} - {} / yr\n\
         Next year: {}\n\
         Peak:      {} at age {}\n\
         Final account balance: {}\n\
         Final total income:    {} / yr",
        summary.milestone.age,
        enhanced,
        format_currency(summary.milestone.annual_pension_nominal),
        format_currency(summary.next_year.annual_pension_nominal),
        format_currency(summary.peak.annual_pension_nominal),
        summary.peak.age,
        format_currency(summary.final_account_balance),
        format_currency(summary.final_total_annual_income),
    )
}
