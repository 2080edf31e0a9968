//! Basic usage example for worldmap-metrics
//!
//! This example demonstrates how to:
//! - Build the pipeline from inline source data
//! - Inspect points, scores, and the bin partition
//! - Assemble the renderable figure

use worldmap_metrics::prelude::*;

const GEOMETRY_JSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {
            "id": "FRA",
            "properties": {"name": "France"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[-4.8, 48.4], [8.2, 48.9], [7.6, 43.7], [-1.3, 43.3]]]
            }
        },
        {
            "id": "IDN",
            "properties": {"name": "Indonesia"},
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": [
                    [[[95.2, 5.6], [97.5, 1.4], [104.4, -5.9], [102.0, 1.3]]],
                    [[[108.9, -6.8], [114.5, -8.1], [111.5, -6.5]]]
                ]
            }
        },
        {
            "id": "IND",
            "properties": {"name": "India"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[68.1, 23.6], [88.7, 26.4], [80.2, 13.0], [72.8, 19.2]]]
            }
        }
    ]
}"#;

const METRICS_CSV: &str = "\
Type,Year,Exposure_Mean
France,2015,12.1
Indonesia,2015,16.7
India,2015,74.3
India,2014,73.1
";

fn main() -> Result<()> {
    println!("=== worldmap-metrics Basic Usage Example ===\n");

    // Build the pipeline once
    println!("Building pipeline...");
    let geometries = loader::read_geometry(GEOMETRY_JSON.as_bytes())?;
    let records = loader::read_metrics(METRICS_CSV.as_bytes())?;
    let ctx = DashboardContext::build(MapConfig::default(), geometries, records)?;
    println!("✓ Pipeline built successfully\n");

    // Example 1: Pipeline statistics
    println!("--- Example 1: Pipeline statistics ---");
    let stats = ctx.stats();
    println!("Countries: {}", stats.countries);
    println!("Representative points: {}", stats.points);
    println!("Scored countries: {}", stats.scored);
    println!("Occupied bins: {}\n", stats.bins);

    // Example 2: Representative points (one per boundary ring)
    println!("--- Example 2: Representative points ---");
    for p in ctx.points() {
        println!("- {} at ({:.2}, {:.2})", p.country, p.lng, p.lat);
    }
    println!();

    // Example 3: Scores and bins
    println!("--- Example 3: Scored countries ---");
    for s in ctx.scores() {
        println!(
            "- {} — raw {:.1}, normalized {}, bin {}",
            s.country, s.raw_value, s.normalized, s.bin
        );
    }
    println!();

    // Example 4: The bin partition
    println!("--- Example 4: Bin partition ---");
    for (bin, countries) in ctx.partition() {
        println!("bin {bin}: {}", countries.join(", "));
    }
    println!();

    // Example 5: The renderable figure
    println!("--- Example 5: Figure assembly ---");
    let figure = ctx.startup_figure()?;
    println!("Base style: {}", figure.style);
    println!("Markers: {}", figure.markers.points.len());
    println!("Overlay layers: {}", figure.layers.len());
    println!("Legend entries: {}", figure.legend.len());

    println!("\n=== Example completed successfully ===");
    Ok(())
}
