//! Console shell for the Coffee Snobs order calculator.
//!
//! Reads one order per line from stdin and prints the bill to stdout.
//! Clause diagnostics go to stderr via tracing, so piped output stays clean.

use std::io::{self, BufRead};

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use coffee_snobs::{Catalog, OrderCostCalculator, Result};

/// Env var naming an optional JSON catalog file.
const CATALOG_ENV: &str = "SNOBS_CATALOG";

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let catalog = load_catalog().context("failed to load price catalog")?;
    let calculator = OrderCostCalculator::new(catalog);

    run(&calculator).context("order session failed")?;

    Ok(())
}

/// Build the catalog from `SNOBS_CATALOG` if set, else the built-in menu.
fn load_catalog() -> Result<Catalog> {
    match std::env::var(CATALOG_ENV) {
        Ok(path) => {
            tracing::info!("Loading catalog from {}", path);
            Ok(Catalog::from_json_file(path)?)
        }
        Err(_) => {
            tracing::info!("Using built-in Coffee Snobs catalog");
            Ok(Catalog::coffee_snobs())
        }
    }
}

/// Prompt/read/print loop. An empty line (or EOF) ends the session; it is
/// never an error, and no order can make the loop fail.
fn run(calculator: &OrderCostCalculator) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Please input order, or only press enter to exit:");
    while let Some(line) = lines.next() {
        let order = line?;
        if order.trim().is_empty() {
            break;
        }
        println!("{}", calculator.calculate(&order));
        println!("Please input another order, or only press enter to exit:");
    }
    println!("Thank you.");

    Ok(())
}
