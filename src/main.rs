//! Commercial Ratio Analyzer CLI
//!
//! Prints the investor impact of moving the Commercial Ratio to a target value

use anyhow::{Context, Result};
use clap::Parser;
use commercial_ratio::{
    financials::load_snapshot_or_default,
    projection::{LineItem, DEFAULT_TARGET_RATIO},
    Analyzer, OperatingChange, ScenarioMode, ScenarioProjection,
};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "commercial-ratio", about = "Commercial Ratio analyzer", version)]
struct Cli {
    /// Target Commercial Ratio (clamped to 0.00-2.00)
    #[arg(long, default_value_t = DEFAULT_TARGET_RATIO, allow_negative_numbers = true)]
    target: f64,

    /// How the ratio change is realized: revenue or cost
    #[arg(long, default_value = "revenue")]
    mode: ScenarioMode,

    /// JSON file overriding fields of the built-in company snapshot
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Print the projection as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let cli = Cli::parse();

    let snapshot = load_snapshot_or_default(cli.snapshot.as_deref())
        .context("Unable to load company snapshot")?;
    let mut analyzer = Analyzer::new(snapshot).context("Snapshot cannot be analyzed")?;

    analyzer.set_mode(cli.mode);
    analyzer.set_target_ratio(cli.target);
    info!("Analyzing {} scenario at CR {:.2}", cli.mode, analyzer.input().target_ratio);

    if cli.json {
        let projection = match analyzer.projection() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Projection undefined: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        };
        println!("{}", serde_json::to_string_pretty(projection)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("Commercial Ratio Analyzer");
    println!("=========================\n");
    println!("Current CR: {:.2}   Target CR: {:.2}   Scenario: {}",
        analyzer.current_ratio(),
        analyzer.input().target_ratio,
        cli.mode,
    );

    let snapshot = analyzer.snapshot();
    println!("YoY Revenue Growth: {}   S&M % of Revenue: {}",
        format_pct(snapshot.yoy_growth_pct()),
        format_pct(snapshot.sales_and_marketing_pct_of_revenue()),
    );

    let position = analyzer.benchmark();
    println!("Zone: {}   Benchmark: {}", position.zone.as_str().to_uppercase(), position.quartile);
    println!();

    match analyzer.projection() {
        Ok(projection) => {
            print_investor_impact(&analyzer, projection);
            print_financials(projection);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("Investor impact: undefined ({})", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_investor_impact(analyzer: &Analyzer, p: &ScenarioProjection) {
    let snapshot = analyzer.snapshot();
    let baseline = analyzer.baseline();

    println!("Investor Impact:");
    match p.change {
        OperatingChange::RevenueGrowth { new_revenue_growth, additional_revenue } => {
            println!("  Revenue Growth:      ${:.2}M -> ${:.2}M ({:+.2}M, {})",
                snapshot.revenue_growth, new_revenue_growth, additional_revenue,
                format_signed_pct(p.operating_delta_pct));
        }
        OperatingChange::CostReduction { new_sales_and_marketing, cost_reduction } => {
            println!("  Sales & Marketing:   ${:.2}M -> ${:.2}M ({:+.2}M, {})",
                snapshot.sales_and_marketing, new_sales_and_marketing, -cost_reduction,
                format_signed_pct(p.operating_delta_pct.map(|pct| -pct)));
        }
    }
    println!("  Market Cap:          ${:.2}M -> ${:.2}M ({:+.2}M, {:+.2}%)",
        baseline.market_cap, p.new_market_cap, p.market_cap_impact, p.percentage_growth);
    println!("  Stock Price:         ${:.2} -> ${:.2}", snapshot.stock_price, p.projected_stock_price);
    println!("  EPS Impact:          {:+.2} ({:+.2}%)", p.eps_impact, p.eps_impact_pct);
    println!("  EBITDA Impact:       {:+.2}M ({:+.2}%)", p.operating_delta(), p.ebitda_impact_pct);
    println!();
}

fn print_financials(p: &ScenarioProjection) {
    let f = &p.financials;
    let rows: [(&str, &LineItem); 6] = [
        ("Revenue", &f.revenue),
        ("Cost of Revenue", &f.cost_of_revenue),
        ("Gross Margin", &f.gross_margin),
        ("Sales & Marketing", &f.sales_and_marketing),
        ("R&D + G&A + Other", &f.other_operating_expenses),
        ("EBITDA", &f.ebitda),
    ];

    println!("Detailed Financials ($M):");
    println!("{:<20} {:>12} {:>12} {:>12}", "Line Item", "Current", "Projected", "Change");
    println!("{}", "-".repeat(59));
    for (label, item) in rows {
        println!("{:<20} {:>12.2} {:>12.2} {:>+12.2}", label, item.current, item.projected, item.change);
    }
}

fn format_pct(pct: Option<f64>) -> String {
    pct.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}%", v))
}

fn format_signed_pct(pct: Option<f64>) -> String {
    pct.map_or_else(|| "n/a".to_string(), |v| format!("{:+.1}%", v))
}
