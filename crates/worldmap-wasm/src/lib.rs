//! worldmap-wasm — WebAssembly bindings for worldmap-core
//!
//! This crate exposes the dashboard pipeline to JavaScript. The front
//! end fetches the two source files itself (GeoJSON boundaries and the
//! metric CSV), constructs a [`Dashboard`] once at page load, and then
//! calls [`Dashboard::figure`] from the style-dropdown callback. The
//! returned object is the full renderable figure; the widget replaces
//! its current figure wholesale.
//!
//! What it provides
//! ----------------
//! - Automatic panic-hook installation on module load (via
//!   `#[wasm_bindgen(start)]`)
//! - `new Dashboard(geojson, csv)` — runs the whole pipeline once
//! - `dashboard.styleKeys()` — keys for the style dropdown, in order
//! - `dashboard.startupFigure()` — the figure first shown
//! - `dashboard.figure(key)` — the style-switch handler
//! - `dashboard.stats()` — pipeline counts for a footer/debug panel
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { Dashboard } from 'worldmap-wasm';
//!
//! async function main() {
//!   await init();
//!   const geojson = await (await fetch('data/countries.geo.json')).text();
//!   const csv = await (await fetch('data/air_quality.csv')).text();
//!
//!   const dashboard = new Dashboard(geojson, csv);
//!   render(dashboard.startupFigure());
//!
//!   dropdown.onchange = (e) => {
//!     try { render(dashboard.figure(e.target.value)); }
//!     catch (err) { notify(err); } // keep the previous figure
//!   };
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - All exported functions are `wasm_bindgen` bindings and return plain
//!   types or `JsValue` containing JSON-serializable objects.
//! - Errors cross the boundary as strings (the `MapError` display form).

use wasm_bindgen::prelude::*;

// Core Imports
use serde_wasm_bindgen::to_value;
use std::result::Result;
use worldmap_core::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing worldmap WASM module...".into());
}

/// The immutable pipeline output, owned by the JS side.
#[wasm_bindgen]
pub struct Dashboard {
    ctx: DashboardContext,
}

#[wasm_bindgen]
impl Dashboard {
    /// Runs the full pipeline over the provided source text. Any data
    /// error (malformed geometry, missing year, empty join) rejects the
    /// construction; there is no partially initialized dashboard.
    #[wasm_bindgen(constructor)]
    pub fn new(geometry_json: &str, metrics_csv: &str) -> Result<Dashboard, JsValue> {
        let geometries = loader::read_geometry(geometry_json.as_bytes()).map_err(to_js)?;
        let records = loader::read_metrics(metrics_csv.as_bytes()).map_err(to_js)?;
        let ctx = DashboardContext::build(MapConfig::default(), geometries, records)
            .map_err(to_js)?;

        #[cfg(target_arch = "wasm32")]
        {
            let stats = ctx.stats();
            web_sys::console::log_1(
                &format!("✓ pipeline ready: {} scored countries", stats.scored).into(),
            );
        }
        Ok(Dashboard { ctx })
    }

    /// Style keys for the dropdown, in configured order.
    #[wasm_bindgen(js_name = styleKeys)]
    pub fn style_keys(&self) -> js_sys::Array {
        self.ctx
            .config()
            .style_keys()
            .map(JsValue::from_str)
            .collect()
    }

    /// The figure for the first configured style, shown at page load.
    #[wasm_bindgen(js_name = startupFigure)]
    pub fn startup_figure(&self) -> Result<JsValue, JsValue> {
        let figure = self.ctx.startup_figure().map_err(to_js)?;
        to_value(&figure).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The style-switch handler: rebuilds the figure from cached layers.
    /// Unknown keys throw; the caller keeps its current figure.
    pub fn figure(&self, style_key: &str) -> Result<JsValue, JsValue> {
        let figure = self.ctx.figure(style_key).map_err(to_js)?;
        to_value(&figure).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Pipeline counts, handy for a footer or debug panel.
    pub fn stats(&self) -> Result<JsValue, JsValue> {
        to_value(&self.ctx.stats()).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

fn to_js(e: MapError) -> JsValue {
    JsValue::from_str(&e.to_string())
}
