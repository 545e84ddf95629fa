use crate::config::Config;
use anyhow::{Context, Result};
use clap::Parser;
use maps_core::{usecases, GeocodeRequestBuilder, Operation};
use maps_gateways::google_maps::GoogleMaps;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Resolve an address with the Google Maps geocoding API"
)]
struct Args {
    /// Configuration file
    #[arg(long = "config", value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// Google Maps API key (overrides OUTREACH_MAPS_KEY)
    #[arg(long, value_name = "KEY")]
    api_key: Option<String>,

    #[arg(long, value_name = "OPERATION", default_value = "geocode")]
    operation: Operation,

    /// e.g. "94 Auburn Lane"
    street_address: String,

    /// Town, city or municipality
    area: String,

    /// Province or state
    division: String,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let Args {
        config_file,
        api_key,
        operation,
        street_address,
        area,
        division,
    } = args;

    let mut cfg = Config::try_load_from_file_or_default(config_file.as_deref())?;
    cfg.google_maps.override_api_key(api_key);
    let api_key = cfg.google_maps.api_key.unwrap_or_else(|| {
        log::warn!("No Google Maps API key found");
        String::new()
    });
    let gateway = GoogleMaps::with_api_base_url(api_key, cfg.google_maps.api_base_url);

    let request = GeocodeRequestBuilder::new()
        .street_address(street_address)
        .area(area)
        .division(division)
        .operation(operation)?
        .build()?;
    let info = usecases::geocode_address(&gateway, &request)
        .with_context(|| format!("Could not geocode '{}'", request.address_fragment()))?;
    for line in info {
        println!("{line}");
    }
    Ok(())
}
