//! Load scenarios from JSON files and refinance quotes from CSV sheets

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::Reader;
use serde::{Deserialize, Serialize};

use super::{Loan, PaymentMonth, RefinanceOption};
use crate::error::LoadError;
use crate::projection::DEFAULT_HORIZON_MONTHS;

fn default_horizon_months() -> u32 {
    DEFAULT_HORIZON_MONTHS
}

/// Everything needed to run one comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub loan: Loan,

    #[serde(default)]
    pub refinance_options: Vec<RefinanceOption>,

    /// Number of months to project (default: 360)
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,
}

impl Scenario {
    pub fn new(loan: Loan, refinance_options: Vec<RefinanceOption>) -> Self {
        Self {
            loan,
            refinance_options,
            horizon_months: DEFAULT_HORIZON_MONTHS,
        }
    }

    /// $920k at 6.25% from May 2023 with two refinance quotes
    pub fn sample() -> Self {
        let month = |year, month| PaymentMonth { year, month };
        Self::new(
            Loan::new(920_000.0, 6.25, 30, month(2023, 5)),
            vec![
                RefinanceOption::new(5.5, 0.0175, 5000.0, month(2024, 11)),
                RefinanceOption::new(5.25, 0.01, 5000.0, month(2025, 12)),
            ],
        )
    }
}

/// Raw CSV row of a refinance quote sheet
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Label", default)]
    label: Option<String>,
    #[serde(rename = "NewRate")]
    new_rate: f64,
    #[serde(rename = "DiscountPoints")]
    discount_points: f64,
    #[serde(rename = "ClosingCosts")]
    closing_costs: f64,
    #[serde(rename = "EffectiveMonth")]
    effective_month: String,
}

impl CsvRow {
    fn to_option(self) -> Result<RefinanceOption, LoadError> {
        let effective_month: PaymentMonth = self.effective_month.parse()?;
        Ok(RefinanceOption {
            label: self.label.filter(|l| !l.trim().is_empty()),
            new_rate: self.new_rate,
            discount_points: self.discount_points,
            closing_costs: self.closing_costs,
            effective_month,
        })
    }
}

/// Load a scenario from a JSON file
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<Scenario, LoadError> {
    let file = File::open(path)?;
    load_scenario_from_reader(BufReader::new(file))
}

/// Load a scenario from any reader (e.g., string buffer, request body)
pub fn load_scenario_from_reader<R: Read>(reader: R) -> Result<Scenario, LoadError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load refinance quotes from a CSV file
pub fn load_refinance_options<P: AsRef<Path>>(path: P) -> Result<Vec<RefinanceOption>, LoadError> {
    let mut reader = Reader::from_path(path)?;
    read_options(&mut reader)
}

/// Load refinance quotes from any reader
pub fn load_refinance_options_from_reader<R: Read>(reader: R) -> Result<Vec<RefinanceOption>, LoadError> {
    let mut csv_reader = Reader::from_reader(reader);
    read_options(&mut csv_reader)
}

fn read_options<R: Read>(reader: &mut Reader<R>) -> Result<Vec<RefinanceOption>, LoadError> {
    let mut options = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        options.push(row.to_option()?);
    }

    Ok(options)
}
