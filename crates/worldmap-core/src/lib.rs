// crates/worldmap-core/src/lib.rs

//! # worldmap-core
//!
//! The geo-metric binning pipeline behind the world-map dashboard:
//! country boundaries (GeoJSON) joined with per-country air-quality
//! exposure (CSV), normalized to a 0-100 scale, bucketed into ordered
//! bins, and assembled into a renderable [`FigureSpec`] of markers,
//! per-bin fill/outline layers, camera, and legend.
//!
//! The pipeline runs once at startup into an immutable
//! [`DashboardContext`]; the only post-startup operation is the style
//! switch, which reassembles the figure from cached layers without
//! re-running the pipeline.
//!
//! ```rust
//! use worldmap_core::prelude::*;
//!
//! let geojson = r#"{"type": "FeatureCollection", "features": [{
//!     "id": "AAA",
//!     "properties": {"name": "Squareland"},
//!     "geometry": {"type": "Polygon",
//!                  "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]]]}
//! }]}"#;
//! let csv = "Type,Year,Exposure_Mean\nSquareland,2015,42.5\n";
//!
//! let geometries = loader::read_geometry(geojson.as_bytes())?;
//! let records = loader::read_metrics(csv.as_bytes())?;
//! let ctx = DashboardContext::build(MapConfig::default(), geometries, records)?;
//!
//! let figure = ctx.figure("default")?;
//! assert_eq!(figure.style, "mapbox://styles/mapbox/satellite-v8");
//! # Ok::<(), worldmap_core::MapError>(())
//! ```

pub mod alias;
pub mod config;
pub mod context;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod loader;
pub mod model;
pub mod score;
pub mod style;
pub mod text;
// Shared raw input shape (used by the loader)
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::config::MapConfig;
pub use crate::context::DashboardContext;
pub use crate::error::{MapError, Result};
pub use crate::figure::FigureSpec;
pub use crate::model::{
    CountryGeometry, GeoPoint, MetricRecord, Partition, PipelineStats, Ring, ScoredCountry,
};

/// Convenience imports for downstream crates and examples.
pub mod prelude {
    pub use crate::config::MapConfig;
    pub use crate::context::DashboardContext;
    pub use crate::error::{MapError, Result};
    pub use crate::figure::{FigureSpec, LegendEntry, MarkerLayer, OverlayLayer};
    pub use crate::loader;
    pub use crate::model::{
        CountryGeometry, GeoPoint, MetricRecord, Partition, PipelineStats, ScoredCountry,
    };
}
