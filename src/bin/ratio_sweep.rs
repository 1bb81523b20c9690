//! Tabulate the projection across the whole target ratio range
//!
//! Outputs one CSV row per slider position

use anyhow::{Context, Result};
use clap::Parser;
use commercial_ratio::{
    financials::load_snapshot_or_default,
    projection::RATIO_STEP,
    Analyzer, ScenarioMode, SweepPoint,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "ratio_sweep", about = "Sweep target Commercial Ratios to CSV")]
struct Cli {
    /// revenue or cost
    #[arg(long, default_value = "revenue")]
    mode: ScenarioMode,

    /// Grid spacing between target ratios
    #[arg(long, default_value_t = RATIO_STEP)]
    step: f64,

    /// JSON snapshot override
    #[arg(long)]
    snapshot: Option<PathBuf>,

    #[arg(long, default_value = "ratio_sweep.csv")]
    output: PathBuf,
}

/// Flat CSV row; numeric cells are empty where the projection is undefined
#[derive(Debug, Serialize)]
struct SweepRow {
    target_ratio: f64,
    zone: &'static str,
    quartile: &'static str,
    operating_delta: Option<f64>,
    market_cap_impact: Option<f64>,
    new_market_cap: Option<f64>,
    percentage_growth: Option<f64>,
    eps_impact: Option<f64>,
    projected_stock_price: Option<f64>,
    error: Option<String>,
}

impl From<&SweepPoint> for SweepRow {
    fn from(point: &SweepPoint) -> Self {
        let projection = point.outcome.as_ref().ok();
        Self {
            target_ratio: point.target_ratio,
            zone: point.zone.as_str(),
            quartile: point.quartile.as_str(),
            operating_delta: projection.map(|p| p.operating_delta()),
            market_cap_impact: projection.map(|p| p.market_cap_impact),
            new_market_cap: projection.map(|p| p.new_market_cap),
            percentage_growth: projection.map(|p| p.percentage_growth),
            eps_impact: projection.map(|p| p.eps_impact),
            projected_stock_price: projection.map(|p| p.projected_stock_price),
            error: point.outcome.as_ref().err().map(|e| e.to_string()),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    let snapshot = load_snapshot_or_default(cli.snapshot.as_deref())
        .context("Unable to load company snapshot")?;
    let analyzer = Analyzer::new(snapshot).context("Snapshot cannot be analyzed")?;

    let points = analyzer.sweep(cli.mode, cli.step);

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    for point in &points {
        writer.serialize(SweepRow::from(point))?;
    }
    writer.flush()?;

    let undefined = points.iter().filter(|p| p.outcome.is_err()).count();
    println!("Written {} {} scenarios to {} ({} undefined) in {:?}",
        points.len(), cli.mode, cli.output.display(), undefined, start.elapsed());

    Ok(())
}
