//! CSV export of projection rows
//!
//! Money columns are rounded half-up to whole dollars; Factor stays decimal.

use crate::error::Result;
use crate::projection::ProjectionRow;
use csv::{Reader, Writer};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

pub const CSV_HEADER: [&str; 12] = [
    "Age",
    "Service",
    "Salary",
    "High3",
    "Factor",
    "PensionAnnual",
    "PensionAnnualReal",
    "KBalance",
    "KContrib",
    "KIncomeAnnual",
    "TotalAnnual",
    "TotalMonthly",
];

/// One exported row as read back from CSV
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExportRecord {
    #[serde(rename = "Age")]
    pub age: u32,
    #[serde(rename = "Service")]
    pub service: f64,
    #[serde(rename = "Salary")]
    pub salary: i64,
    #[serde(rename = "High3")]
    pub high3: i64,
    #[serde(rename = "Factor")]
    pub factor: f64,
    #[serde(rename = "PensionAnnual")]
    pub pension_annual: i64,
    #[serde(rename = "PensionAnnualReal")]
    pub pension_annual_real: i64,
    #[serde(rename = "KBalance")]
    pub k_balance: i64,
    #[serde(rename = "KContrib")]
    pub k_contrib: i64,
    #[serde(rename = "KIncomeAnnual")]
    pub k_income_annual: i64,
    #[serde(rename = "TotalAnnual")]
    pub total_annual: i64,
    #[serde(rename = "TotalMonthly")]
    pub total_monthly: i64,
}

/// Round to the nearest integer, halves toward positive infinity
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

fn record_fields(row: &ProjectionRow) -> [String; 12] {
    [
        row.age.to_string(),
        row.service_years.to_string(),
        round_half_up(row.salary_this_year).to_string(),
        round_half_up(row.high3_average).to_string(),
        row.annuity_factor.to_string(),
        round_half_up(row.annual_pension_nominal).to_string(),
        round_half_up(row.annual_pension_real).to_string(),
        round_half_up(row.account_balance_end).to_string(),
        round_half_up(row.account_contribution).to_string(),
        round_half_up(row.account_income_annual).to_string(),
        round_half_up(row.total_annual_income).to_string(),
        round_half_up(row.total_monthly_income).to_string(),
    ]
}

/// Write header plus one record per row
pub fn write_csv<W: Write>(rows: &[ProjectionRow], writer: W) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(CSV_HEADER)?;
    for row in rows {
        csv_writer.write_record(record_fields(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn to_csv_string(rows: &[ProjectionRow]) -> Result<String> {
    let mut buffer = Vec::new();
    write_csv(rows, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

pub fn write_csv_file<P: AsRef<Path>>(rows: &[ProjectionRow], path: P) -> Result<()> {
    write_csv(rows, BufWriter::new(File::create(path)?))
}

/// Parse exported CSV back into records
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<ExportRecord>> {
    let mut csv_reader = Reader::from_reader(reader);
    let mut records = Vec::new();

    for result in csv_reader.deserialize() {
        let record: ExportRecord = result?;
        records.push(record);
    }

    Ok(records)
}
