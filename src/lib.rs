pub mod converter;
mod element;
pub mod error;
pub mod geomath;
pub mod model;
pub mod parser;

use wasm_bindgen::prelude::*;

pub use crate::converter::{to_feature_collection, to_geojson_string};
pub use crate::error::GpxError;
pub use crate::model::Gpx;
pub use crate::parser::parse_gpx;

/// Parse a GPX string and return the document model as a JS object,
/// including per-track and per-route distance/elevation/slope statistics.
#[wasm_bindgen(js_name = parseGpx)]
pub fn parse_gpx_js(gpx_string: &str) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let gpx = parser::parse_gpx(gpx_string)?;
    serde_wasm_bindgen::to_value(&gpx).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a GPX string to GeoJSON, returned as a JS object.
#[wasm_bindgen(js_name = gpxToGeoJson)]
pub fn gpx_to_geojson(gpx_string: &str) -> Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    let gpx = parser::parse_gpx(gpx_string)?;
    let fc = converter::to_feature_collection(&gpx);
    serde_wasm_bindgen::to_value(&fc).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert a GPX string to GeoJSON, returned as a JSON string.
#[wasm_bindgen(js_name = gpxToGeoJsonString)]
pub fn gpx_to_geojson_string(gpx_string: &str) -> Result<String, JsValue> {
    console_error_panic_hook::set_once();

    let gpx = parser::parse_gpx(gpx_string)?;
    converter::to_geojson_string(&gpx).map_err(JsValue::from)
}
