// crates/worldmap-core/src/score.rs

//! # Metric Joiner
//!
//! Filters the metric table to the target year, reconciles country-name
//! spelling via the alias table, inner-joins against the geometry
//! countries, and buckets the survivors into `n_bins` ordered bins.

use log::debug;
use std::collections::{HashMap, HashSet};

use crate::alias::resolve_alias;
use crate::error::{MapError, Result};
use crate::model::{CountryGeometry, MetricRecord, Partition, ScoredCountry};
use crate::text::fold_key;

/// Scale headroom over the maximum raw value. Keeps the top country's
/// normalized value strictly below 100, so the top bin never overflows.
const SCALE_HEADROOM: f64 = 1.05;

/// Joins metric rows against geometry countries and bins the result.
///
/// - Only rows with `year` are considered; none -> [`MapError::MissingYear`].
/// - Alias translation happens before the join; the join itself is
///   accent/case-insensitive, and output names use the geometry spelling.
/// - Countries without a metric row are dropped (inner join). An empty
///   join -> [`MapError::NoMatchingCountries`].
/// - `normalized = floor(100 * raw / (max_raw * 1.05))`,
///   `bin = normalized / (100 / n_bins)` with integer division.
///
/// The partition groups scored countries by bin, each bin's list in
/// join-result order (metric file order, first row per country wins).
pub fn score_countries(
    geometries: &[CountryGeometry],
    records: &[MetricRecord],
    year: i32,
    n_bins: usize,
) -> Result<(Partition, Vec<ScoredCountry>)> {
    let rows: Vec<&MetricRecord> = records.iter().filter(|r| r.year == year).collect();
    if rows.is_empty() {
        return Err(MapError::MissingYear(year));
    }

    // Folded geometry name -> canonical geometry spelling.
    let by_key: HashMap<String, &str> = geometries
        .iter()
        .map(|g| (fold_key(&g.name), g.name.as_str()))
        .collect();

    let mut joined: Vec<(&str, f64)> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    for row in rows {
        let aliased = resolve_alias(&row.country);
        if let Some(&canonical) = by_key.get(&fold_key(aliased)) {
            if seen.insert(canonical) {
                joined.push((canonical, row.raw_value));
            }
        }
    }
    if joined.is_empty() {
        return Err(MapError::NoMatchingCountries);
    }

    let max_raw = joined.iter().map(|(_, raw)| *raw).fold(f64::MIN, f64::max);
    let scale = max_raw * SCALE_HEADROOM;
    let bin_width = (100 / n_bins.max(1)).max(1) as u32;

    let mut scored = Vec::with_capacity(joined.len());
    let mut partition = Partition::new();
    for (country, raw_value) in joined {
        let normalized = if scale > 0.0 {
            (100.0 * raw_value / scale).floor() as u32
        } else {
            0
        };
        let bin = ((normalized / bin_width) as usize).min(n_bins.max(1) - 1);

        partition.entry(bin).or_default().push(country.to_string());
        scored.push(ScoredCountry {
            country: country.to_string(),
            raw_value,
            normalized,
            bin,
        });
    }

    debug!(
        "scored {} countries for year {} into {} occupied bins",
        scored.len(),
        year,
        partition.len()
    );
    Ok((partition, scored))
}
