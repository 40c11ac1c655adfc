#![cfg(target_arch = "wasm32")]

use gpx_parser_wasm::{gpx_to_geojson, gpx_to_geojson_string, parse_gpx_js};
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn parse_gpx_returns_js_object() {
    let xml = r#"<gpx version="1.1"><wpt lat="48.8" lon="2.3"><ele>35.0</ele></wpt></gpx>"#;
    let value = parse_gpx_js(xml).unwrap();
    assert!(value.is_object());
}

#[wasm_bindgen_test]
fn geojson_object_and_string_agree_on_type() {
    let xml = r#"<gpx version="1.1"><wpt lat="48.8" lon="2.3"/></gpx>"#;
    let obj = gpx_to_geojson(xml).unwrap();
    assert!(obj.is_object());

    let s = gpx_to_geojson_string(xml).unwrap();
    assert!(s.contains("\"FeatureCollection\""));
}

#[wasm_bindgen_test]
fn malformed_input_is_an_error() {
    assert!(parse_gpx_js("<gpx><wpt lat=</gpx>").is_err());
}
