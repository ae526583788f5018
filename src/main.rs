use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use addrmap::sdk::util::log::init_logging;
use addrmap::{
    find_streets, markers_map, paired_distances, save_distance_map, verify_addresses, GeoConfig,
    NominatimGeocoder,
};

/// Verify addresses, map them, and measure the distances between them
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Geocode each address and print a per-address report as JSON
    Verify {
        /// Addresses to verify
        #[arg(required = true)]
        addresses: Vec<String>,

        /// Also write an HTML map of the resolved addresses
        #[arg(long, value_name = "FILE")]
        map: Option<PathBuf>,
    },

    /// Measure the geodesic distance between paired addresses and save the map
    Distances {
        /// First-list addresses, paired by position with --to
        #[arg(long = "from", value_name = "ADDRESS", num_args = 1.., required = true)]
        from: Vec<String>,

        /// Second-list addresses
        #[arg(long = "to", value_name = "ADDRESS", num_args = 1.., required = true)]
        to: Vec<String>,
    },

    /// List the streets of a city whose name contains a pattern
    Streets {
        /// City name, as tagged in the map data
        city: String,

        /// Substring to match against street names, case-insensitively
        pattern: String,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    init_logging();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GeoConfig::from_env();

    match cli.command {
        Command::Verify { addresses, map } => {
            let geocoder = NominatimGeocoder::new(&config);
            let reports = verify_addresses(&geocoder, &addresses);
            println!("{}", serde_json::to_string_pretty(&reports)?);

            if let Some(path) = map {
                markers_map(&reports).save(&path)?;
                log::info!("Address map written to {}", path.display());
            }
        }
        Command::Distances { from, to } => {
            let geocoder = NominatimGeocoder::with_timeout(&config, Duration::from_secs(10));
            let result = paired_distances(&geocoder, &from, &to)?;
            for (position, km) in result.kilometers.iter().enumerate() {
                println!(
                    "{} -> {}: {:.3} km",
                    from[position], to[position], km
                );
            }
            let path = save_distance_map(&result.pairs)?;
            println!("Map written to {}", path.display());
        }
        Command::Streets { city, pattern } => {
            let streets = find_streets(&config, &city, &pattern)?;
            log::info!("Found {} matching streets in {}", streets.len(), city);
            for street in streets {
                println!("{}", street);
            }
        }
    }

    Ok(())
}
