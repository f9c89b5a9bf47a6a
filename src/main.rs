//! Investment Projector CLI
//!
//! Runs a single projection from command-line flags, prints the scenario
//! summaries and a preview of the chart series, and optionally writes the
//! full series as CSV or the whole result as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use investment_projector::{ProjectionEngine, ProjectionRequest, ProjectionResult};

#[derive(Parser, Debug)]
#[command(name = "investment_projector")]
#[command(about = "Project investment growth under base, optimistic, and zero-rate scenarios")]
struct Args {
    /// Initial lump sum
    #[arg(long)]
    principal: Option<f64>,

    /// Amount contributed each month
    #[arg(long)]
    monthly_contribution: Option<f64>,

    /// Estimated annual rate as a fraction (0.08 = 8%)
    #[arg(long)]
    annual_rate: Option<f64>,

    /// Projection horizon in years
    #[arg(long)]
    years: Option<f64>,

    /// Offset added to the rate for the optimistic scenario
    #[arg(long)]
    variance_rate: Option<f64>,

    /// Write the full series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the whole result as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Flags stay optional so that missing values surface as the engine's
    // aggregated validation error instead of clap's one-at-a-time messages.
    let request = ProjectionRequest {
        principal: args.principal,
        monthly_contribution: args.monthly_contribution,
        annual_rate: args.annual_rate,
        years: args.years,
        variance_rate: args.variance_rate,
    };

    let engine = ProjectionEngine::default();
    let result = engine.project_request(&request)?;
    log::debug!("projection produced {} series points", result.series.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    print_summary(&result);
    print_series_preview(&result);

    if let Some(path) = &args.csv {
        write_series_csv(&result, path)
            .with_context(|| format!("failed to write series to {}", path.display()))?;
        println!("\nFull series written to: {}", path.display());
    }

    Ok(())
}

fn print_summary(result: &ProjectionResult) {
    println!("Investment Projection");
    println!("=====================\n");

    println!(
        "{:>10} {:>10} {:>18} {:>18}",
        "Scenario", "Rate", "With Interest", "Without Interest"
    );
    println!("{}", "-".repeat(60));

    for (label, scalar) in [
        ("base", &result.base),
        ("max", &result.max),
        ("zero", &result.zero),
    ] {
        println!(
            "{:>10} {:>9.2}% {:>18.2} {:>18.2}",
            label,
            scalar.rate_percent,
            scalar.future_value_with_interest,
            scalar.future_value_without_interest,
        );
    }
}

fn print_series_preview(result: &ProjectionResult) {
    println!("\nSeries ({} points, half-year steps):", result.series.len());
    println!(
        "{:>8} {:>16} {:>16} {:>16}",
        "Years", "Base", "Max", "Baseline"
    );

    for point in result.series.iter().take(24) {
        println!(
            "{:>8.1} {:>16.2} {:>16.2} {:>16.2}",
            point.time_years, point.base, point.max, point.zero,
        );
    }

    if result.series.len() > 24 {
        println!("... ({} more points)", result.series.len() - 24);
    }
}

fn write_series_csv(result: &ProjectionResult, path: &PathBuf) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for point in &result.series {
        writer.serialize(point)?;
    }
    writer.flush()?;
    Ok(())
}
