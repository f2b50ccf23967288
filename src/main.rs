//! tradepnl CLI - realized P&L for a single closed trade
//!
//! # Usage
//! ```sh
//! cargo run -- XAUUSD 2000 2010 1 long
//! cargo run -- EURGBP 0.8500 0.8550 1 long --json
//! PNL_CONTRACT_SPECS=specs.toml cargo run -- XPTUSD 900 910 2 short
//! ```
//!
//! # Environment Variables
//! - `PNL_CONTRACT_SPECS` - TOML file overriding the contract tables
//! - `PNL_LOG_JSON` - Emit logs as JSON lines (default: false)
//! - `PNL_LOG_LEVEL` - Default log level when `RUST_LOG` is unset (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, debug};
use tracing_subscriber::prelude::*;
use tradepnl::config::Config;
use tradepnl::{PnlResult, TradeInput};

#[derive(Parser, Debug)]
#[command(author, version, about = "Realized P&L for metals, FX pairs and unit-based instruments", long_about = None)]
struct Args {
    /// Instrument symbol, e.g. XAUUSD, EUR/USD, AAPL
    symbol: String,

    /// Entry price
    #[arg(allow_hyphen_values = true)]
    entry: String,

    /// Exit price
    #[arg(allow_hyphen_values = true)]
    exit: String,

    /// Lots for FX and metals, units otherwise
    #[arg(allow_hyphen_values = true)]
    quantity: String,

    /// long or short
    direction: String,

    /// Contract specs TOML file (overrides PNL_CONTRACT_SPECS)
    #[arg(long)]
    specs: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = Config::from_env()?.with_contract_specs_path(args.specs.clone());
    init_logging(&config);

    let engine = config.build_engine()?;
    let input = TradeInput::parse(
        &args.symbol,
        &args.entry,
        &args.exit,
        &args.quantity,
        &args.direction,
    )
    .context("Invalid trade input")?;
    debug!(?input, "Parsed trade input");

    let result = engine.compute(&input);

    if args.json {
        println!("{}", render_json(&input, &result)?);
    } else {
        println!(
            "{} {} {} -> {} | P&L {} {} ({}%)",
            input.direction,
            input.quantity,
            input.symbol,
            result.instrument_class,
            result.pnl.round_dp(2),
            result.denomination,
            result.pnl_pct.round_dp(4)
        );
    }

    Ok(())
}

fn init_logging(config: &Config) {
    let level = config.log_level.parse::<Level>().unwrap_or(Level::INFO);
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // Logs go to stderr so stdout stays parseable
    if config.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn render_json(input: &TradeInput, result: &PnlResult) -> Result<String> {
    let value = serde_json::json!({
        "input": input,
        "pnl": result.pnl_f64(),
        "pnl_pct": result.pnl_pct_f64(),
        "pnl_exact": result.pnl.to_string(),
        "pnl_pct_exact": result.pnl_pct.to_string(),
        "denomination": result.denomination.to_string(),
        "instrument_class": result.instrument_class,
    });
    serde_json::to_string_pretty(&value).context("Failed to serialize result")
}
