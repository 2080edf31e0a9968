// crates/worldmap-core/src/loader.rs

//! # Data Loader
//!
//! Handles the physical layer (file I/O, decompression) and delegates to
//! the format parsers: `serde_json` for the boundary file, `csv` for the
//! metric table. Both loads happen once at startup; nothing here is
//! touched again after the context is built.

use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{MapError, Result};
use crate::geometry;
use crate::model::{CountryGeometry, MetricRecord};
use crate::raw::RawFeatureCollection;

/// Conventional location of the boundary file, relative to the process
/// working directory.
pub const DEFAULT_GEOMETRY_FILE: &str = "data/countries.geo.json";
/// Conventional location of the air-quality table.
pub const DEFAULT_METRICS_FILE: &str = "data/air_quality.csv";

/// Opens a dataset file, buffers it, and transparently gunzips `.gz`
/// inputs. Returns a generic reader so callers don't care about the
/// compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        MapError::NotFound(format!("dataset not found at {}: {}", path.display(), e))
    })?;
    let reader = BufReader::new(file);

    if path.extension().is_some_and(|ext| ext == "gz") {
        #[cfg(feature = "compact")]
        {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        #[cfg(not(feature = "compact"))]
        {
            return Err(MapError::NotFound(format!(
                "{} is gzipped but the 'compact' feature is disabled",
                path.display()
            )));
        }
    }

    Ok(Box::new(reader))
}

/// Loads and converts the country boundary file.
pub fn load_geometry(path: impl AsRef<Path>) -> Result<Vec<CountryGeometry>> {
    let path = path.as_ref();
    let geometries = read_geometry(open_stream(path)?)?;
    debug!("loaded {} country geometries from {}", geometries.len(), path.display());
    Ok(geometries)
}

/// Parses a GeoJSON FeatureCollection from any reader.
pub fn read_geometry(reader: impl Read) -> Result<Vec<CountryGeometry>> {
    let raw: RawFeatureCollection = serde_json::from_reader(reader)?;
    geometry::from_raw(raw)
}

/// Loads the delimited metric table.
pub fn load_metrics(path: impl AsRef<Path>) -> Result<Vec<MetricRecord>> {
    let path = path.as_ref();
    let records = read_metrics(open_stream(path)?)?;
    debug!("loaded {} metric rows from {}", records.len(), path.display());
    Ok(records)
}

/// Parses metric rows from any reader. Extra columns are ignored; the
/// three expected columns are matched by header name.
pub fn read_metrics(reader: impl Read) -> Result<Vec<MetricRecord>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GEOMETRY_JSON: &str = r#"{
        "type": "FeatureCollection",
        "features": [{
            "id": "AAA",
            "properties": {"name": "Squareland"},
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]]
            }
        }]
    }"#;

    const METRICS_CSV: &str = "\
Type,Year,Exposure_Mean,Unit
Squareland,2015,42.5,ug/m3
Squareland,2014,40.1,ug/m3
";

    #[test]
    fn loads_geometry_from_plain_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GEOMETRY_JSON.as_bytes()).unwrap();

        let geometries = load_geometry(file.path()).unwrap();
        assert_eq!(geometries.len(), 1);
        assert_eq!(geometries[0].name, "Squareland");
    }

    #[cfg(feature = "compact")]
    #[test]
    fn loads_geometry_from_gzipped_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.geo.json.gz");
        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(GEOMETRY_JSON.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let geometries = load_geometry(&path).unwrap();
        assert_eq!(load_geometry_plain_equivalent(), geometries);
    }

    #[cfg(feature = "compact")]
    fn load_geometry_plain_equivalent() -> Vec<CountryGeometry> {
        read_geometry(GEOMETRY_JSON.as_bytes()).unwrap()
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_geometry("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, MapError::NotFound(_)));
    }

    #[test]
    fn reads_metrics_and_ignores_extra_columns() {
        let records = read_metrics(METRICS_CSV.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].country, "Squareland");
        assert_eq!(records[0].year, 2015);
        assert_eq!(records[0].raw_value, 42.5);
    }

    #[test]
    fn malformed_csv_row_is_a_csv_error() {
        let bad = "Type,Year,Exposure_Mean\nSquareland,not-a-year,1.0\n";
        let err = read_metrics(bad.as_bytes()).unwrap_err();
        assert!(matches!(err, MapError::Csv(_)));
    }
}
