//! Error handling example for worldmap-metrics
//!
//! This example demonstrates the error taxonomy: every startup error is
//! fatal (no partially built dashboard), while an unknown style key is
//! recoverable.

use worldmap_metrics::prelude::*;

const GEOMETRY_JSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [{
        "id": "CHL",
        "properties": {"name": "Chile"},
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[-70.3, -18.3], [-66.4, -33.0], [-71.7, -53.8], [-73.2, -37.2]]]
        }
    }]
}"#;

fn main() -> Result<()> {
    println!("=== worldmap-metrics Error Handling Example ===\n");

    let geometries = loader::read_geometry(GEOMETRY_JSON.as_bytes())?;

    // Example 1: No rows for the configured year
    println!("--- Example 1: Missing year ---");
    let records = loader::read_metrics("Type,Year,Exposure_Mean\nChile,2003,21.0\n".as_bytes())?;
    match DashboardContext::build(MapConfig::default(), geometries.clone(), records) {
        Ok(_) => unreachable!("2015 has no rows"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 2: Join produces nothing
    println!("--- Example 2: No matching countries ---");
    let records = loader::read_metrics("Type,Year,Exposure_Mean\nNarnia,2015,21.0\n".as_bytes())?;
    match DashboardContext::build(MapConfig::default(), geometries.clone(), records) {
        Ok(_) => unreachable!("Narnia has no boundary"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 3: Malformed geometry is rejected at parse time
    println!("--- Example 3: Malformed geometry ---");
    let bad = r#"{
        "type": "FeatureCollection",
        "features": [{
            "properties": {"name": "Pointland"},
            "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}
        }]
    }"#;
    match loader::read_geometry(bad.as_bytes()) {
        Ok(_) => unreachable!("points are not boundaries"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 4: Recoverable vs fatal
    println!("--- Example 4: The one recoverable error ---");
    let records = loader::read_metrics("Type,Year,Exposure_Mean\nChile,2015,21.0\n".as_bytes())?;
    let ctx = DashboardContext::build(MapConfig::default(), geometries, records)?;
    let err = ctx.figure("sepia").unwrap_err();
    println!("unknown style recoverable: {}", err.is_recoverable());
    println!("missing year recoverable:  {}", MapError::MissingYear(2015).is_recoverable());

    Ok(())
}
