// src/main.rs
// DOCUMENTATION: Command line entry point
// PURPOSE: Run one places search and print the results as JSON

use anyhow::{Context, Result};
use dotenv::dotenv;
use places_search::{Config, PlaceSearchClient};
use std::env;
use std::process;

const USAGE: &str = "Usage: places-search [--details] <query...>";

/// Parsed command line
struct Args {
    query: String,
    fetch_details: bool,
}

fn parse_args(raw: impl Iterator<Item = String>) -> Option<Args> {
    let mut fetch_details = false;
    let mut words = Vec::new();

    for arg in raw {
        match arg.as_str() {
            "--details" | "-d" => fetch_details = true,
            "--help" | "-h" => return None,
            _ => words.push(arg),
        }
    }

    if words.is_empty() {
        return None;
    }

    Some(Args {
        query: words.join(" "),
        fetch_details,
    })
}

async fn run(config: Config, args: Args) -> Result<()> {
    let client = PlaceSearchClient::from_config(args.query.as_str(), &config)
        .context("Failed to create places client")?;

    let places = client
        .search(args.fetch_details)
        .await
        .with_context(|| format!("Search for '{}' failed", args.query))?;

    let with_details = places.iter().filter(|p| p.has_enrichment_data()).count();
    log::info!(
        "Found {} places ({} with website, phone or listing URL)",
        places.len(),
        with_details
    );

    let output = serde_json::to_string_pretty(&places).context("Failed to encode results")?;
    println!("{}", output);
    Ok(())
}

#[tokio::main]
async fn main() {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Load configuration
    let config = Config::from_env();

    // 3. Initialize logging
    if env::var("RUST_LOG").is_err() {
        let log_level = if !config.log_level.is_empty() {
            config.log_level.as_str()
        } else {
            "info"
        };
        env::set_var("RUST_LOG", log_level);
    }
    env_logger::init();

    let args = match parse_args(env::args().skip(1)) {
        Some(args) => args,
        None => {
            eprintln!("{}", USAGE);
            process::exit(2);
        }
    };

    if let Err(e) = config.validate() {
        log::error!("Configuration error: {}", e);
        process::exit(1);
    }

    if let Err(e) = run(config, args).await {
        log::error!("{:#}", e);
        process::exit(1);
    }
}
