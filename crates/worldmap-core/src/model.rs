// crates/worldmap-core/src/model.rs

//! # Domain Model
//!
//! The in-memory entities of the pipeline. Everything here is computed
//! once at startup and never mutated afterwards; a recompute builds a
//! whole new set of values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A closed boundary ring as `[longitude, latitude]` pairs.
pub type Ring = Vec<[f64; 2]>;

/// One country from the boundary file, reduced to its outer rings.
///
/// A `Polygon` feature contributes one ring; a `MultiPolygon` feature
/// contributes the outer ring of each member polygon, in source order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryGeometry {
    /// Display name, the unique join key against the metric table.
    pub name: String,
    /// Feature id from the source file (ISO-3 in the common world file).
    pub id: Option<String>,
    pub rings: Vec<Ring>,
}

/// A representative point for one boundary ring.
///
/// Multi-ring countries yield several points, one per ring. That is a
/// design choice, not a bug: disjoint landmasses each get a marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub country: String,
    pub lng: f64,
    pub lat: f64,
}

/// One row of the metric table.
///
/// Column names match the air-quality export: `Type` holds the country
/// name, `Exposure_Mean` the raw exposure value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    #[serde(rename = "Type")]
    pub country: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Exposure_Mean")]
    pub raw_value: f64,
}

/// A country that survived the inner join, scored and binned.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredCountry {
    /// Geometry-source spelling.
    pub country: String,
    pub raw_value: f64,
    /// `round(100 * raw / (max_raw * 1.05))`, always in `0..100`.
    /// The 1.05 headroom keeps the maximum observed value strictly below
    /// 100 so the top bin is never overflowed.
    pub normalized: u32,
    /// `normalized / (100 / n_bins)`, always in `0..n_bins`.
    pub bin: usize,
}

/// Bin index -> countries in that bin, in join-result order.
///
/// Only occupied bins appear; iteration order is ascending bin index.
pub type Partition = BTreeMap<usize, Vec<String>>;

/// Aggregate counts over the built pipeline, for quick inspection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PipelineStats {
    pub countries: usize,
    pub points: usize,
    pub scored: usize,
    pub bins: usize,
}
