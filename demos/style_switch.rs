//! Style switch example for worldmap-metrics
//!
//! The pipeline runs once; switching the base-map style only reassembles
//! the figure from cached layers.

use worldmap_metrics::prelude::*;

const GEOMETRY_JSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [{
        "id": "BRA",
        "properties": {"name": "Brazil"},
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[-57.6, -30.2], [-48.5, -1.0], [-34.8, -7.3], [-53.4, -25.7]]]
        }
    }]
}"#;

const METRICS_CSV: &str = "Type,Year,Exposure_Mean\nBrazil,2015,11.8\n";

fn main() -> Result<()> {
    println!("=== worldmap-metrics Style Switch Example ===\n");

    let geometries = loader::read_geometry(GEOMETRY_JSON.as_bytes())?;
    let records = loader::read_metrics(METRICS_CSV.as_bytes())?;
    let ctx = DashboardContext::build(MapConfig::default(), geometries, records)?;

    // The dropdown options come straight from the configured table.
    println!("Available style keys:");
    for key in ctx.config().style_keys() {
        println!("- {key}");
    }
    println!();

    // Startup figure, then a switch.
    let mut current = ctx.startup_figure()?;
    println!("Startup style: {}", current.style);

    current = ctx.figure("light")?;
    println!("After switch:  {}", current.style);

    // An unknown key is rejected; the current figure stays as-is.
    match ctx.figure("sepia") {
        Ok(_) => unreachable!("'sepia' is not configured"),
        Err(e) => println!("Rejected switch: {e}"),
    }
    println!("Still showing: {}", current.style);

    println!("\n=== Example completed successfully ===");
    Ok(())
}
