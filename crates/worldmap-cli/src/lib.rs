//! worldmap-cli
//! ============
//!
//! Command-line interface for the `worldmap-core` geo-metric binning
//! pipeline.
//!
//! This crate primarily provides a binary (`worldmap-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! worldmap-cli --help
//! worldmap-cli stats
//! worldmap-cli --year=2016 scores
//! worldmap-cli figure --style default --pretty > figure.json
//! ```
//!
//! For programmatic access to the pipeline, use the [`worldmap-core`]
//! crate directly.
//!
//! [`worldmap-core`]: https://docs.rs/worldmap-core
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
