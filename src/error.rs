use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum GpxError {
    /// The input could not be parsed into an element tree at all.
    /// Fatal: no partial model is returned.
    #[error("malformed GPX document: {0}")]
    MalformedDocument(#[from] roxmltree::Error),

    #[error("GeoJSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<GpxError> for JsValue {
    fn from(e: GpxError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}
