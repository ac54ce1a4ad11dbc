//! Command-line front end for the countries pipeline
//!
//! Runs a single refresh through the store and prints the published list,
//! either as human-readable lines or as JSON. A failed refresh is reported on
//! stderr and turns into a non-zero exit status.

use anyhow::Result;
use clap::Parser;
use countries_core::{ConfigLoader, CountriesConfig, CountriesService, CountriesStore, Country};
use log::LevelFilter;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Fetch and list countries from a remote JSON endpoint")]
struct Cli {
    #[clap(long, short, help = "Path to a YAML configuration file")]
    config: Option<String>,

    #[clap(long, short, help = "Endpoint to fetch from, overrides the configuration file")]
    endpoint: Option<String>,

    #[clap(long, short, default_value = "info")]
    log_level: String,

    #[clap(long, short, help = "Only show countries whose name or capital contains this text")]
    search: Option<String>,

    #[clap(long, help = "Print the result as JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let config = resolve_config(cli.config.as_deref(), cli.endpoint).await?;
    log::info!("Using countries endpoint: {}", config.endpoint);

    let service = CountriesService::from_config(&config);
    let store = CountriesStore::new(Arc::new(service));
    store.refresh().await?;

    if let Some(err) = store.last_error() {
        anyhow::bail!("Failed to refresh countries: {}", err);
    }

    let countries = match cli.search.as_deref() {
        Some(query) => store.search(query),
        None => store.countries().to_vec(),
    };
    log::debug!("Printing {} countries", countries.len());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&countries)?);
    } else {
        for country in &countries {
            println!("{}", format_line(country));
        }
    }

    Ok(())
}

async fn resolve_config(path: Option<&str>, endpoint: Option<String>) -> Result<CountriesConfig> {
    let mut config = match path {
        Some(path) => {
            log::info!("Loading configuration from file: {}", path);
            ConfigLoader::from_file(path).await?
        }
        None => CountriesConfig::default(),
    };

    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
        config.validate()?;
    }

    Ok(config)
}

fn format_line(country: &Country) -> String {
    let symbol = country
        .currency
        .symbol
        .as_deref()
        .map(|s| format!(" {}", s))
        .unwrap_or_default();
    format!(
        "{} {} ({}) [{}] {}{}, {}",
        country.flag,
        country.name,
        country.capital,
        country.region,
        country.currency.code,
        symbol,
        country.language.name
    )
}
