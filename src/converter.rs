use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{Map, Value as JsonValue};

use crate::error::GpxError;
use crate::model::*;

/// Convert a parsed document into a GeoJSON FeatureCollection.
///
/// Tracks come first, then routes, then waypoints, each collection in
/// document order. Document metadata is mirrored into a top-level
/// `properties` member, which is present even when empty.
pub fn to_feature_collection(gpx: &Gpx) -> FeatureCollection {
    let mut features = Vec::new();

    for trk in &gpx.tracks {
        features.push(track_to_feature(trk));
    }
    for rte in &gpx.routes {
        features.push(route_to_feature(rte));
    }
    for wpt in &gpx.waypoints {
        features.push(waypoint_to_feature(wpt));
    }

    let mut foreign = Map::new();
    foreign.insert(
        "properties".to_string(),
        JsonValue::Object(metadata_properties(gpx.metadata.as_ref())),
    );

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: Some(foreign),
    }
}

/// Serialize the GeoJSON export as a JSON string.
pub fn to_geojson_string(gpx: &Gpx) -> Result<String, GpxError> {
    Ok(serde_json::to_string(&to_feature_collection(gpx))?)
}

fn track_to_feature(trk: &Track) -> Feature {
    let coords: Vec<Vec<f64>> = trk
        .points
        .iter()
        .map(|pt| coords3(pt.lat, pt.lon, pt.ele))
        .collect();
    let geometry = Geometry::new(Value::LineString(coords));

    let mut props = Map::new();
    insert_optional(&mut props, "name", &trk.name);
    insert_optional(&mut props, "cmt", &trk.cmt);
    insert_optional(&mut props, "desc", &trk.desc);
    insert_optional(&mut props, "src", &trk.src);
    if let Some(n) = trk.number {
        props.insert("number".to_string(), JsonValue::Number(n.into()));
    }
    insert_link(&mut props, &trk.link);
    insert_optional(&mut props, "type", &trk.track_type);

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

fn route_to_feature(rte: &Route) -> Feature {
    let coords: Vec<Vec<f64>> = rte
        .points
        .iter()
        .map(|pt| coords3(pt.lat, pt.lon, pt.ele))
        .collect();
    let geometry = Geometry::new(Value::LineString(coords));

    let mut props = Map::new();
    insert_optional(&mut props, "name", &rte.name);
    insert_optional(&mut props, "cmt", &rte.cmt);
    insert_optional(&mut props, "desc", &rte.desc);
    insert_optional(&mut props, "src", &rte.src);
    if let Some(n) = rte.number {
        props.insert("number".to_string(), JsonValue::Number(n.into()));
    }
    insert_link(&mut props, &rte.link);
    insert_optional(&mut props, "type", &rte.route_type);

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

fn waypoint_to_feature(wpt: &Waypoint) -> Feature {
    let geometry = Geometry::new(Value::Point(coords3(wpt.lat, wpt.lon, wpt.ele)));

    let mut props = Map::new();
    insert_optional(&mut props, "name", &wpt.name);
    insert_optional(&mut props, "sym", &wpt.sym);
    insert_optional(&mut props, "cmt", &wpt.cmt);
    insert_optional(&mut props, "desc", &wpt.desc);

    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(props),
        foreign_members: None,
    }
}

/// Always `[lon, lat, ele]`. An absent elevation becomes NaN, which the JSON
/// encoder renders as null.
fn coords3(lat: f64, lon: f64, ele: Option<f64>) -> Vec<f64> {
    vec![lon, lat, ele.unwrap_or(f64::NAN)]
}

fn metadata_properties(metadata: Option<&Metadata>) -> Map<String, JsonValue> {
    let mut props = Map::new();
    if let Some(meta) = metadata {
        insert_optional(&mut props, "name", &meta.name);
        insert_optional(&mut props, "desc", &meta.desc);
        insert_optional(&mut props, "time", &meta.time);
        if let Some(author) = &meta.author {
            let mut obj = Map::new();
            insert_optional(&mut obj, "name", &author.name);
            if let Some(email) = &author.email {
                let mut email_obj = Map::new();
                insert_optional(&mut email_obj, "id", &email.id);
                insert_optional(&mut email_obj, "domain", &email.domain);
                obj.insert("email".to_string(), JsonValue::Object(email_obj));
            }
            obj.insert(
                "link".to_string(),
                JsonValue::Object(link_object(&author.link)),
            );
            props.insert("author".to_string(), JsonValue::Object(obj));
        }
        insert_link(&mut props, &meta.link);
    }
    props
}

fn link_object(link: &Link) -> Map<String, JsonValue> {
    let mut obj = Map::new();
    insert_optional(&mut obj, "href", &link.href);
    insert_optional(&mut obj, "text", &link.text);
    insert_optional(&mut obj, "type", &link.link_type);
    obj
}

fn insert_optional(props: &mut Map<String, JsonValue>, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        props.insert(key.to_string(), JsonValue::String(v.clone()));
    }
}

fn insert_link(props: &mut Map<String, JsonValue>, link: &Option<Link>) {
    if let Some(link) = link {
        props.insert("link".to_string(), JsonValue::Object(link_object(link)));
    }
}
