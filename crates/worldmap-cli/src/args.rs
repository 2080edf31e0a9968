use clap::{Parser, Subcommand};

/// CLI arguments for worldmap-cli
#[derive(Debug, Parser)]
#[command(
    name = "worldmap",
    version,
    about = "CLI for inspecting the worldmap-core geo-metric binning pipeline"
)]
pub struct CliArgs {
    /// Path to the GeoJSON boundary file (default: data/countries.geo.json)
    #[arg(short = 'g', long = "geometry", global = true)]
    pub geometry: Option<String>,

    /// Path to the metric CSV file (default: data/air_quality.csv)
    #[arg(short = 'm', long = "metrics", global = true)]
    pub metrics: Option<String>,

    /// Metric year to keep (default: 2015)
    #[arg(short = 'y', long = "year", global = true)]
    pub year: Option<i32>,

    /// Number of score bins (default: 10)
    #[arg(short = 'b', long = "bins", global = true)]
    pub bins: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the built pipeline
    Stats,

    /// List the representative points (one per boundary ring)
    Points,

    /// List scored countries with normalized value and bin
    Scores,

    /// List the bin partition (bin -> countries)
    Partitions,

    /// Emit the renderable figure as JSON
    Figure {
        /// Style key to render with (e.g. default, light)
        #[arg(short = 's', long = "style", default_value = "default")]
        style: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
