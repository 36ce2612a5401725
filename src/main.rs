//! Refinance Comparison CLI
//!
//! Projects cumulative cost for a mortgage and its refinance options, prints a
//! summary table and writes the monthly series as CSV for charting.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use refinance_comparison::loan::{load_refinance_options, load_scenario};
use refinance_comparison::report::{to_json, write_series_csv, write_summary_csv};
use refinance_comparison::{ComparisonResult, Scenario, ScenarioRunner};

/// Compare the cumulative cost of a mortgage against refinance scenarios
#[derive(Debug, Parser)]
#[command(name = "refinance_comparison", version)]
struct Args {
    /// JSON scenario files; the built-in sample scenario runs when none are given
    scenarios: Vec<PathBuf>,

    /// CSV sheet of refinance quotes appended to every scenario
    #[arg(long)]
    options: Option<PathBuf>,

    /// Projection horizon in months, overriding the scenario files
    #[arg(long)]
    horizon: Option<u32>,

    /// Directory for the per-scenario cumulative cost and summary CSV files
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Print results as JSON instead of a summary table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut named: Vec<(String, Scenario)> = if args.scenarios.is_empty() {
        vec![("cumulative_cost_comparison".to_string(), Scenario::sample())]
    } else {
        args.scenarios
            .iter()
            .map(|path| {
                let scenario = load_scenario(path)
                    .with_context(|| format!("loading scenario {}", path.display()))?;
                Ok((file_stem(path), scenario))
            })
            .collect::<Result<_>>()?
    };

    if let Some(path) = &args.options {
        let quotes = load_refinance_options(path)
            .with_context(|| format!("loading refinance options {}", path.display()))?;
        info!("Loaded {} refinance quote(s) from {}", quotes.len(), path.display());
        for (_, scenario) in &mut named {
            scenario.refinance_options.extend(quotes.iter().cloned());
        }
    }

    let runner = match args.horizon {
        Some(months) => ScenarioRunner::with_horizon(months),
        None => ScenarioRunner::new(),
    };

    let scenarios: Vec<Scenario> = named.iter().map(|(_, s)| s.clone()).collect();
    let results = runner.run_batch(&scenarios);

    for ((name, scenario), result) in named.iter().zip(results) {
        let result = result.with_context(|| format!("projecting scenario {}", name))?;

        let csv_path = args.output_dir.join(format!("{}_cumulative_cost.csv", name));
        let file = File::create(&csv_path)
            .with_context(|| format!("creating {}", csv_path.display()))?;
        write_series_csv(&result, BufWriter::new(file))
            .with_context(|| format!("writing {}", csv_path.display()))?;

        let summary_path = args.output_dir.join(format!("{}_summary.csv", name));
        let file = File::create(&summary_path)
            .with_context(|| format!("creating {}", summary_path.display()))?;
        write_summary_csv(&result, BufWriter::new(file))
            .with_context(|| format!("writing {}", summary_path.display()))?;

        if args.json {
            println!("{}", to_json(&result)?);
        } else {
            print_summary(name, scenario, &result);
            println!("\nFull series written to: {}", csv_path.display());
            println!("Summary written to: {}\n", summary_path.display());
        }
    }

    Ok(())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scenario".to_string())
}

fn print_summary(name: &str, scenario: &Scenario, result: &ComparisonResult) {
    let loan = &scenario.loan;

    println!("Scenario: {}", name);
    println!("  Principal: ${:.2}", loan.principal);
    println!(
        "  Rate: {:.3}%  Term: {} years  First payment: {}",
        loan.annual_rate, loan.term_years, loan.first_payment_month
    );
    println!("  Horizon: {} months", result.horizon_months);
    println!();

    println!(
        "{:<24} {:>6} {:>12} {:>10} {:>16} {:>14} {:>10}",
        "Scenario", "Refi@", "Payment", "Reduction", "Total Cost", "Savings", "Breakeven"
    );
    println!("{}", "-".repeat(100));

    for row in result.summary() {
        let breakeven = row
            .breakeven_month
            .map(|m| m.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<24} {:>6} {:>12.2} {:>10.2} {:>16.2} {:>14.2} {:>10}",
            row.label,
            row.months_paid,
            row.monthly_payment,
            row.payment_reduction,
            row.total_cost,
            row.savings,
            breakeven,
        );
    }

    for scenario in &result.refinances {
        if let Some(plan) = &scenario.refinance {
            println!("\n{}:", scenario.label);
            println!("  Remaining balance: ${:.2}", plan.remaining_balance);
            println!("  Discount points:   ${:.2}", plan.points_cost);
            println!("  Closing costs:     ${:.2}", plan.closing_costs);
            println!(
                "  New principal:     ${:.2} at {:.3}% over {} years",
                plan.new_principal, plan.new_rate, plan.new_term_years
            );
        }
    }
}
