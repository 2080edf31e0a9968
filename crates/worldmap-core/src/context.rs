// crates/worldmap-core/src/context.rs

//! # Dashboard Context and Style Switch
//!
//! [`DashboardContext`] is the explicit immutable value the reactive UI
//! closes over: everything steps 1-3 of the pipeline produce, computed
//! once at startup. The style switch ([`DashboardContext::figure`]) only
//! reassembles the figure from the cached parts; it never re-runs the
//! pipeline. The context owns plain immutable data, so a concurrent
//! server can share it freely across requests.

use log::info;
use std::path::Path;

use crate::config::MapConfig;
use crate::error::{MapError, Result};
use crate::figure::{
    build_figure, build_legend, build_marker_layer, build_overlay_layers, FigureSpec,
    LegendEntry, MarkerLayer, OverlayLayer,
};
use crate::geometry::flatten;
use crate::loader;
use crate::model::{
    CountryGeometry, GeoPoint, MetricRecord, Partition, PipelineStats, ScoredCountry,
};
use crate::score::score_countries;

#[derive(Clone, Debug)]
pub struct DashboardContext {
    config: MapConfig,
    geometries: Vec<CountryGeometry>,
    points: Vec<GeoPoint>,
    scores: Vec<ScoredCountry>,
    partition: Partition,
    markers: MarkerLayer,
    layers: Vec<OverlayLayer>,
    legend: Vec<LegendEntry>,
}

impl DashboardContext {
    /// Runs the full pipeline once over already-loaded inputs.
    ///
    /// Any error here is fatal to startup; there is no partially built
    /// context.
    pub fn build(
        config: MapConfig,
        geometries: Vec<CountryGeometry>,
        records: Vec<MetricRecord>,
    ) -> Result<Self> {
        let points = flatten(&geometries)?;
        let (partition, scores) =
            score_countries(&geometries, &records, config.year, config.n_bins)?;

        let markers = build_marker_layer(&points, &scores, config.n_bins);
        let layers =
            build_overlay_layers(&geometries, &partition, config.n_bins, config.fill_opacity);
        let legend = build_legend(config.n_bins);

        info!(
            "pipeline ready: {} countries, {} markers, {} occupied bins",
            geometries.len(),
            markers.points.len(),
            partition.len()
        );

        Ok(Self {
            config,
            geometries,
            points,
            scores,
            partition,
            markers,
            layers,
            legend,
        })
    }

    /// Loads both dataset files and runs the pipeline.
    pub fn from_paths(
        config: MapConfig,
        geometry_path: impl AsRef<Path>,
        metrics_path: impl AsRef<Path>,
    ) -> Result<Self> {
        let geometries = loader::load_geometry(geometry_path)?;
        let records = loader::load_metrics(metrics_path)?;
        Self::build(config, geometries, records)
    }

    /// The style-switch handler.
    ///
    /// Resolves `style_key` in the configured style table and rebuilds the
    /// figure from cached layers. Unknown keys fail with
    /// [`MapError::UnknownStyle`]; the context is untouched either way, so
    /// the caller simply keeps the previous figure on error.
    pub fn figure(&self, style_key: &str) -> Result<FigureSpec> {
        let style = self
            .config
            .style_for(style_key)
            .ok_or_else(|| MapError::UnknownStyle(style_key.to_string()))?;
        Ok(build_figure(
            &self.markers,
            &self.layers,
            &self.legend,
            &self.config,
            style,
        ))
    }

    /// The figure for the first configured style key, shown at startup.
    pub fn startup_figure(&self) -> Result<FigureSpec> {
        let key = self
            .config
            .style_keys()
            .next()
            .ok_or_else(|| MapError::UnknownStyle(String::new()))?;
        self.figure(key)
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    pub fn geometries(&self) -> &[CountryGeometry] {
        &self.geometries
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn scores(&self) -> &[ScoredCountry] {
        &self.scores
    }

    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    pub fn stats(&self) -> PipelineStats {
        PipelineStats {
            countries: self.geometries.len(),
            points: self.points.len(),
            scored: self.scores.len(),
            bins: self.partition.len(),
        }
    }
}
