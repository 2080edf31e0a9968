// crates/worldmap-core/src/config.rs

//! # Pipeline Configuration
//!
//! One explicit immutable value passed in at construction time. Nothing
//! here is reloaded dynamically; changing the configuration means
//! rebuilding the context.

use serde::{Deserialize, Serialize};

/// Public demo token from the upstream dashboard; replace with your own
/// for production tile quotas.
pub const DEFAULT_ACCESS_TOKEN: &str =
    "pk.eyJ1IjoiamFja3AiLCJhIjoidGpzN0lXVSJ9.7YK6eRwUNFwd3ODZff6JvA";

pub const DEFAULT_N_BINS: usize = 10;
pub const DEFAULT_YEAR: i32 = 2015;
pub const DEFAULT_FILL_OPACITY: f64 = 0.8;

/// Style key -> concrete base-map style identifier.
///
/// The first entry is the startup style. Keys are what the UI dropdown
/// submits; identifiers are what the map widget understands.
pub const BASE_STYLES: &[(&str, &str)] = &[
    ("default", "mapbox://styles/mapbox/satellite-v8"),
    ("light", "mapbox://styles/mapbox/light-v9"),
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Access token for the map tile provider, forwarded verbatim into
    /// the figure for the rendering collaborator.
    pub access_token: String,
    /// Number of ordered score buckets.
    pub n_bins: usize,
    /// Metric rows are filtered to this year.
    pub year: i32,
    /// Opacity of the per-bin fill layers.
    pub fill_opacity: f64,
    /// Style key -> style identifier table, in dropdown order.
    pub styles: Vec<(String, String)>,
}

impl MapConfig {
    /// Resolves a style key against the configured table.
    pub fn style_for(&self, key: &str) -> Option<&str> {
        self.styles
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, id)| id.as_str())
    }

    /// The configured style keys, in dropdown order.
    pub fn style_keys(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(|(k, _)| k.as_str())
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            access_token: DEFAULT_ACCESS_TOKEN.to_string(),
            n_bins: DEFAULT_N_BINS,
            year: DEFAULT_YEAR,
            fill_opacity: DEFAULT_FILL_OPACITY,
            styles: BASE_STYLES
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}
