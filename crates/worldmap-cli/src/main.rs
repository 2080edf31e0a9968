//! worldmap-cli — Command-line interface for worldmap-core
//!
//! This binary runs the geo-metric binning pipeline over a GeoJSON
//! boundary file and a metric CSV, then prints the requested view of the
//! result. It supports printing pipeline statistics, listing the
//! flattened representative points, listing scored countries, showing
//! the bin partition, and emitting the full renderable figure as JSON.
//!
//! Usage examples
//! --------------
//!
//! - Show pipeline stats
//!   $ worldmap-cli stats
//!
//! - Scored countries for a different year
//!   $ worldmap-cli --year=2016 scores
//!
//! - Bin partition with custom inputs
//!   $ worldmap-cli -g world.geo.json -m exposure.csv partitions
//!
//! - Figure JSON for the satellite base map, pretty-printed
//!   $ worldmap-cli figure --style default --pretty
//!
//! Data sources
//! ------------
//!
//! By default the CLI reads `data/countries.geo.json` and
//! `data/air_quality.csv` relative to the working directory. Use
//! `--geometry` / `--metrics` to point elsewhere; with the `compact`
//! feature (default) the geometry file may be gzipped (`.json.gz`).
//!
//! Logging goes through `RUST_LOG` (e.g. `RUST_LOG=debug`).
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use worldmap_core::{loader, DashboardContext, MapConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();

    let geometry_path = args
        .geometry
        .unwrap_or_else(|| loader::DEFAULT_GEOMETRY_FILE.to_string());
    let metrics_path = args
        .metrics
        .unwrap_or_else(|| loader::DEFAULT_METRICS_FILE.to_string());

    let mut config = MapConfig::default();
    if let Some(year) = args.year {
        config.year = year;
    }
    if let Some(bins) = args.bins {
        config.n_bins = bins;
    }

    let ctx = DashboardContext::from_paths(config, &geometry_path, &metrics_path)?;

    match args.command {
        Commands::Stats => {
            let stats = ctx.stats();
            println!("Pipeline statistics:");
            println!("  Countries: {}", stats.countries);
            println!("  Points: {}", stats.points);
            println!("  Scored: {}", stats.scored);
            println!("  Occupied bins: {}", stats.bins);
        }

        Commands::Points => {
            for p in ctx.points() {
                println!("{}: ({:.5}, {:.5})", p.country, p.lng, p.lat);
            }
        }

        Commands::Scores => {
            for s in ctx.scores() {
                println!(
                    "{} — raw {:.2}, normalized {}, bin {}",
                    s.country, s.raw_value, s.normalized, s.bin
                );
            }
        }

        Commands::Partitions => {
            for (bin, countries) in ctx.partition() {
                println!("bin {bin}: {}", countries.join(", "));
            }
        }

        Commands::Figure { style, pretty } => {
            let figure = ctx.figure(&style)?;
            let json = if pretty {
                serde_json::to_string_pretty(&figure)?
            } else {
                serde_json::to_string(&figure)?
            };
            println!("{json}");
        }
    }

    Ok(())
}
