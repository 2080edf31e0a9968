// crates/worldmap-core/src/alias.rs

//! # Country Name Aliases
//!
//! Fixed translation table from metric-source country names to the
//! spellings used by the geometry source. Applied to the metric table
//! before any join; names without an entry pass through unchanged.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::text::fold_key;

/// Metric-source name -> geometry-source name.
///
/// The air-quality table and the boundary file disagree on a handful of
/// countries. Both columns are the exact source spellings.
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("Congo", "Republic of the Congo"),
    ("Democratic Republic of Congo", "Democratic Republic of the Congo"),
    ("United States", "United States of America"),
    ("Tanzania", "United Republic of Tanzania"),
    ("Serbia", "Republic of Serbia"),
    ("Korea", "South Korea"),
    ("Russian Federation", "Russia"),
];

static ALIAS_INDEX: Lazy<HashMap<String, &'static str>> = Lazy::new(|| {
    COUNTRY_ALIASES
        .iter()
        .map(|(from, to)| (fold_key(from), *to))
        .collect()
});

/// Translates a metric-source country name to the geometry-source
/// spelling. Unmapped names are returned unchanged.
///
/// ```rust
/// use worldmap_core::alias::resolve_alias;
///
/// assert_eq!(resolve_alias("Congo"), "Republic of the Congo");
/// assert_eq!(resolve_alias("France"), "France");
/// ```
pub fn resolve_alias(name: &str) -> &str {
    match ALIAS_INDEX.get(&fold_key(name)) {
        Some(canonical) => canonical,
        None => name,
    }
}
