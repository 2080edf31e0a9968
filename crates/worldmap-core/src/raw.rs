// crates/worldmap-core/src/raw.rs

//! Raw on-disk shape of the boundary file.
//!
//! A standard GeoJSON FeatureCollection, kept deliberately loose: the
//! geometry tag stays a string and the coordinates stay an untyped value
//! until [`crate::geometry::from_raw`] converts them into the domain
//! model. That conversion is where shape errors are reported, with the
//! offending country's name attached.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct RawFeatureCollection {
    #[serde(rename = "type")]
    pub kind: String,
    pub features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
pub struct RawFeature {
    #[serde(default)]
    pub id: Option<String>,
    pub properties: RawProperties,
    pub geometry: RawGeometry,
}

#[derive(Debug, Deserialize)]
pub struct RawProperties {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RawGeometry {
    /// "Polygon" or "MultiPolygon"; anything else is rejected in
    /// conversion, not during parsing.
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Value,
}
