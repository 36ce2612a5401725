//! CSV and JSON export of comparison results for charting tools

use std::io::Write;

use csv::Writer;

use crate::projection::ComparisonResult;

/// Write one row per month with a cumulative cost column per scenario
///
/// Header: `Month,<label>,<label>,...`, costs to two decimals.
pub fn write_series_csv<W: Write>(result: &ComparisonResult, writer: W) -> csv::Result<()> {
    let mut csv_writer = Writer::from_writer(writer);

    let mut header = vec!["Month".to_string()];
    header.extend(result.scenarios().map(|s| s.label.clone()));
    csv_writer.write_record(&header)?;

    let scenarios: Vec<_> = result.scenarios().collect();
    for month in 0..result.horizon_months {
        let mut record = vec![month.to_string()];
        record.extend(scenarios.iter().map(|s| {
            s.series
                .cost_at(month)
                .map(|cost| format!("{:.2}", cost))
                .unwrap_or_default()
        }));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write one summary row per scenario
pub fn write_summary_csv<W: Write>(result: &ComparisonResult, writer: W) -> csv::Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record([
        "Scenario",
        "MonthsPaid",
        "MonthlyPayment",
        "PaymentReduction",
        "TotalCost",
        "Savings",
        "BreakevenMonth",
    ])?;

    for row in result.summary() {
        csv_writer.write_record([
            row.label,
            row.months_paid.to_string(),
            format!("{:.2}", row.monthly_payment),
            format!("{:.2}", row.payment_reduction),
            format!("{:.2}", row.total_cost),
            format!("{:.2}", row.savings),
            row.breakeven_month.map(|m| m.to_string()).unwrap_or_default(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Pretty-printed JSON of the full result, series included
pub fn to_json(result: &ComparisonResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loan::Scenario;
    use crate::scenario::ScenarioRunner;

    fn sample() -> ComparisonResult {
        ScenarioRunner::with_horizon(36).run(&Scenario::sample()).unwrap()
    }

    #[test]
    fn test_series_csv_layout() {
        let mut buffer = Vec::new();
        write_series_csv(&sample(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 37);
        assert_eq!(lines[0], "Month,Original Loan,Refi Option 1,Refi Option 2");
        assert_eq!(lines[1], "0,0.00,0.00,0.00");
        assert!(lines[2].starts_with("1,5664.60,5664.60,5664.60"));
    }

    #[test]
    fn test_summary_csv() {
        let mut buffer = Vec::new();
        write_summary_csv(&sample(), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("Original Loan,0,5664.60,0.00,"));
        assert!(lines[2].starts_with("Refi Option 1,18,5320.22,344.38,"));
        assert!(lines[2].ends_with(",33"));
    }

    #[test]
    fn test_json_round_trips() {
        let result = sample();
        let json = to_json(&result).unwrap();
        let back: ComparisonResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.labels(), result.labels());
        assert_eq!(back.horizon_months, 36);
    }
}
