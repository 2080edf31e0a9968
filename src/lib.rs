//! worldmap-metrics
//! ================
//!
//! Workspace facade for the world-map metrics dashboard pipeline. The
//! real work lives in [`worldmap_core`]; this crate re-exports it and
//! hosts the runnable demos under `demos/`:
//!
//! ```text
//! cargo run --example basic_usage
//! cargo run --example style_switch
//! cargo run --example error_handling
//! ```

pub use worldmap_core;

/// Convenience imports for the demos and quick experiments.
pub mod prelude {
    pub use worldmap_core::prelude::*;
}
