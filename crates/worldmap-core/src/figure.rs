// crates/worldmap-core/src/figure.rs

//! # Map Spec Builder
//!
//! Explicit value types for everything the rendering collaborator needs:
//! a marker layer, per-bin fill/outline overlay pairs, camera, legend,
//! and the base style. The types serialize to JSON so any charting
//! widget (or the wasm bridge) can consume them directly.
//!
//! Layer assembly happens once at startup; [`build_figure`] itself is
//! pure over the cached parts and only varies in the base style, which
//! is what makes the style switch cheap.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::MapConfig;
use crate::model::{CountryGeometry, GeoPoint, Partition, Ring, ScoredCountry};
use crate::style::{border_color, fill_color, legend_color};

/// Marker diameter, in render units of the map widget.
pub const MARKER_SIZE: u32 = 25;

/// Fixed camera: world view centered just north of the equator.
pub const CAMERA_CENTER_LAT: f64 = 30.0;
pub const CAMERA_CENTER_LNG: f64 = -1.67571;
pub const CAMERA_ZOOM: f64 = 1.5;

/// One country's outer rings, embedded in a layer source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryShape {
    pub name: String,
    pub rings: Vec<Ring>,
}

/// The geometry subset a fill/outline layer renders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayerSource {
    pub features: Vec<CountryShape>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FillLayer {
    pub bin: usize,
    pub source: LayerSource,
    pub color: String,
    pub opacity: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutlineLayer {
    pub bin: usize,
    pub source: LayerSource,
    pub color: String,
    pub opacity: f64,
}

/// A map overlay, tagged by kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OverlayLayer {
    Fill(FillLayer),
    Outline(OutlineLayer),
}

impl OverlayLayer {
    pub fn bin(&self) -> usize {
        match self {
            OverlayLayer::Fill(l) => l.bin,
            OverlayLayer::Outline(l) => l.bin,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerPoint {
    pub country: String,
    pub lng: f64,
    pub lat: f64,
    pub color: String,
    /// Hover text shown by the widget.
    pub hover: String,
}

/// One scatter layer over the representative points of scored countries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkerLayer {
    pub size: u32,
    pub opacity: f64,
    pub points: Vec<MarkerPoint>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub center_lat: f64,
    pub center_lng: f64,
    pub zoom: f64,
    pub pitch: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            center_lat: CAMERA_CENTER_LAT,
            center_lng: CAMERA_CENTER_LNG,
            zoom: CAMERA_ZOOM,
            pitch: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Numeric range of the bin, e.g. `[20, 30)`.
    pub label: String,
    pub color: String,
}

/// The complete renderable figure description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FigureSpec {
    /// Base-map style identifier, the only part the style switch varies.
    pub style: String,
    pub access_token: String,
    pub camera: Camera,
    pub markers: MarkerLayer,
    pub layers: Vec<OverlayLayer>,
    pub legend: Vec<LegendEntry>,
}

/// Builds the scatter layer: one marker per GeoPoint of a scored country,
/// colored by the country's bin.
pub fn build_marker_layer(
    points: &[GeoPoint],
    scored: &[ScoredCountry],
    n_bins: usize,
) -> MarkerLayer {
    let bin_of: HashMap<&str, usize> = scored
        .iter()
        .map(|s| (s.country.as_str(), s.bin))
        .collect();

    let markers = points
        .iter()
        .filter_map(|p| {
            let bin = *bin_of.get(p.country.as_str())?;
            Some(MarkerPoint {
                country: p.country.clone(),
                lng: p.lng,
                lat: p.lat,
                color: fill_color(bin, n_bins).to_string(),
                hover: p.country.clone(),
            })
        })
        .collect();

    MarkerLayer {
        size: MARKER_SIZE,
        opacity: 1.0,
        points: markers,
    }
}

/// Builds the per-bin overlay layers: fill then outline for each occupied
/// bin, bins in ascending order. Each layer embeds its own geometry
/// subset so the figure is self-contained.
pub fn build_overlay_layers(
    geometries: &[CountryGeometry],
    partition: &Partition,
    n_bins: usize,
    fill_opacity: f64,
) -> Vec<OverlayLayer> {
    let by_name: HashMap<&str, &CountryGeometry> =
        geometries.iter().map(|g| (g.name.as_str(), g)).collect();

    let mut layers = Vec::with_capacity(partition.len() * 2);
    for (&bin, countries) in partition {
        let source = LayerSource {
            features: countries
                .iter()
                .filter_map(|name| by_name.get(name.as_str()))
                .map(|g| CountryShape {
                    name: g.name.clone(),
                    rings: g.rings.clone(),
                })
                .collect(),
        };

        layers.push(OverlayLayer::Fill(FillLayer {
            bin,
            source: source.clone(),
            color: fill_color(bin, n_bins).to_string(),
            opacity: fill_opacity,
        }));
        layers.push(OverlayLayer::Outline(OutlineLayer {
            bin,
            source,
            color: border_color(bin, n_bins).to_string(),
            opacity: 1.0,
        }));
    }
    layers
}

/// Builds the legend block: `n_bins` entries labeled with the numeric
/// range each bin covers.
pub fn build_legend(n_bins: usize) -> Vec<LegendEntry> {
    let width = 100 / n_bins.max(1);
    (0..n_bins)
        .map(|bin| LegendEntry {
            label: format!("[{}, {})", bin * width, (bin + 1) * width),
            color: legend_color(bin).to_string(),
        })
        .collect()
}

/// Assembles the figure from previously computed parts.
///
/// Pure: markers, layers, and legend are cached at startup and cloned in;
/// `base_style` is the only variable input on the style-switch path.
pub fn build_figure(
    markers: &MarkerLayer,
    layers: &[OverlayLayer],
    legend: &[LegendEntry],
    config: &MapConfig,
    base_style: &str,
) -> FigureSpec {
    FigureSpec {
        style: base_style.to_string(),
        access_token: config.access_token.clone(),
        camera: Camera::default(),
        markers: markers.clone(),
        layers: layers.to_vec(),
        legend: legend.to_vec(),
    }
}
