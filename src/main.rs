//! CMA Engine CLI
//!
//! Command-line interface for running a CMA projection from a JSON input file

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use cma_engine::assumptions::{load_fixed_assets, load_input};
use cma_engine::ledger::load_historical;
use cma_engine::report::format_ratio;
use cma_engine::{ProjectionConfig, ProjectionEngine};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "cma_engine", version, about = "Multi-year CMA projection for bank credit appraisal")]
struct Args {
    /// Input record (historical ledger, growth, loan, fixed assets) as JSON
    #[arg(long)]
    input: PathBuf,

    /// Historical ledger CSV (`item,year1,year2`) replacing the one in the input
    #[arg(long)]
    ledger: Option<PathBuf>,

    /// Fixed-asset register CSV (`id,name,cost,rate,year`) replacing the one in the input
    #[arg(long)]
    assets: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Output directory; JSON goes to stdout when omitted
    #[arg(long)]
    out: Option<PathBuf>,

    /// Flat tax rate on positive PBT (0.30 = 30%)
    #[arg(long)]
    tax_rate: Option<f64>,

    /// Interest rate, in percent, on debt carried from the audited years
    #[arg(long)]
    existing_loan_rate: Option<f64>,

    /// One-time paydown, in percent, of that debt in the first projected year
    #[arg(long)]
    existing_loan_paydown: Option<f64>,

    /// Borrower's margin under the Tandon methods (0.25 = 25%)
    #[arg(long)]
    mpbf_margin: Option<f64>,

    /// Balance sheet date of the first audited year, e.g. 2023-03-31
    #[arg(long)]
    first_year_end: Option<NaiveDate>,
}

impl Args {
    fn config(&self) -> ProjectionConfig {
        let mut config = ProjectionConfig::default();
        if let Some(rate) = self.tax_rate {
            config.tax_rate = rate;
        }
        if let Some(rate) = self.existing_loan_rate {
            config.existing_loan_interest_percent = rate;
        }
        if let Some(paydown) = self.existing_loan_paydown {
            config.existing_loan_paydown_percent = paydown;
        }
        if let Some(margin) = self.mpbf_margin {
            config.mpbf_margin = margin;
        }
        config.first_year_end = self.first_year_end;
        config
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut input = load_input(&args.input)
        .with_context(|| format!("Failed to read input from {}", args.input.display()))?;
    if let Some(path) = &args.ledger {
        input.historical_ledger = load_historical(path)
            .with_context(|| format!("Failed to read historical ledger from {}", path.display()))?;
    }
    if let Some(path) = &args.assets {
        input.fixed_assets = load_fixed_assets(path)
            .with_context(|| format!("Failed to read fixed assets from {}", path.display()))?;
    }

    let engine = ProjectionEngine::new(args.config());
    let projection = engine.run(&input).context("Projection failed")?;
    let report = projection.report();
    let summary = projection.summary();

    match args.format {
        OutputFormat::Json => {
            let body = serde_json::json!({ "report": report, "summary": summary });
            let text = serde_json::to_string_pretty(&body)?;
            match &args.out {
                Some(dir) => {
                    std::fs::create_dir_all(dir)
                        .with_context(|| format!("Failed to create {}", dir.display()))?;
                    let path = dir.join("cma_report.json");
                    std::fs::write(&path, text)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    eprintln!("Report written to: {}", path.display());
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    writeln!(stdout, "{}", text)?;
                }
            }
        }
        OutputFormat::Csv => {
            let dir = args.out.clone().unwrap_or_else(|| PathBuf::from("."));
            report
                .write_csv_dir(&dir)
                .with_context(|| format!("Failed to write CSV tables to {}", dir.display()))?;
            eprintln!("{} tables written to: {}", report.tables().len(), dir.display());
        }
    }

    eprintln!("\nSummary:");
    eprintln!("  Projected Years: {}", summary.projected_years);
    eprintln!("  Average DSCR: {}", format_ratio(summary.average_dscr));
    eprintln!("  Minimum DSCR: {}", format_ratio(summary.minimum_dscr));
    if !summary.funding_shortfall_years.is_empty() {
        eprintln!("  Funding shortfall in years: {:?}", summary.funding_shortfall_years);
    }

    Ok(())
}
