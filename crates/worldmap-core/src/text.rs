// crates/worldmap-core/src/text.rs

//! Text folding for country-name matching.
//!
//! Country names are free text and inconsistently spelled across the
//! geometry and metric sources ("Côte d'Ivoire" vs "Cote d'Ivoire").
//! Join keys go through [`fold_key`] so the join is accent-insensitive and
//! case-insensitive while the output keeps each source's original spelling.

use deunicode::deunicode;

/// Normalizes a name into a join key: ASCII-folded, lowercased, trimmed.
#[inline]
pub fn fold_key(s: &str) -> String {
    deunicode(s.trim()).to_lowercase()
}
