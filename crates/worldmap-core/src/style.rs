// crates/worldmap-core/src/style.rs

//! # Bin-to-Style Mapping
//!
//! Pure, total functions from `(bin, n_bins)` to colors and opacities.
//! The thresholds are fixed constants of the design, not derived from
//! data; output parity with the original dashboard depends on them.

/// Legend color scale, one entry per bin at the default bin count.
pub const DEFAULT_COLORSCALE: &[&str] = &[
    "#fee7ec", "#fdd3dd", "#fcbfcd", "#fbabbd", "#fb97ae",
    "#fa839e", "#f96f8f", "#f85b7f", "#f7476f", "#f63360",
];

/// Fill color for a bin. `n_bins == 0` yields the neutral default.
pub fn fill_color(bin: usize, n_bins: usize) -> &'static str {
    if n_bins == 0 {
        return "white";
    }
    let ratio = bin as f64 / n_bins as f64;
    if ratio <= 0.2 {
        "#6fdba5"
    } else if ratio <= 0.3 {
        "orange"
    } else {
        "red"
    }
}

/// Outline color for a bin. `n_bins == 0` yields the grey default.
pub fn border_color(bin: usize, n_bins: usize) -> &'static str {
    if n_bins == 0 {
        return "grey";
    }
    let ratio = bin as f64 / n_bins as f64;
    if ratio <= 0.3 {
        "grey"
    } else {
        "black"
    }
}

/// Marker opacity for a bin. `n_bins == 0` yields 0.35.
///
/// Note the strict comparisons: these match the original thresholds,
/// which differ from the `<=` used by the color functions.
pub fn opacity(bin: usize, n_bins: usize) -> f64 {
    if n_bins == 0 {
        return 0.35;
    }
    let ratio = bin as f64 / n_bins as f64;
    if ratio < 0.2 {
        0.6
    } else if ratio < 0.3 {
        0.85
    } else {
        1.0
    }
}

/// Legend swatch color for a bin, clamped to the palette length.
pub fn legend_color(bin: usize) -> &'static str {
    DEFAULT_COLORSCALE[bin.min(DEFAULT_COLORSCALE.len() - 1)]
}
