use chrono::{DateTime, Utc};
use geojson::FeatureCollection;
use serde::Serialize;

/// Parsed GPX document: metadata plus all waypoints, routes, and tracks.
///
/// Build-once, read-many: nothing here refers back to the source tree and
/// nothing is mutated after `parse_gpx` returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Gpx {
    pub metadata: Option<Metadata>,
    pub waypoints: Vec<Waypoint>,
    pub routes: Vec<Route>,
    pub tracks: Vec<Track>,
}

impl Gpx {
    /// Export the model as a GeoJSON FeatureCollection.
    pub fn to_geojson(&self) -> FeatureCollection {
        crate::converter::to_feature_collection(self)
    }
}

/// Document-level metadata from the <metadata> element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    pub name: Option<String>,
    pub desc: Option<String>,
    /// Raw text of the metadata <time>, kept unparsed.
    pub time: Option<String>,
    pub author: Option<Author>,
    pub link: Option<Link>,
}

/// The metadata <author> element. Its link is always present, possibly with
/// every field absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Author {
    pub name: Option<String>,
    pub email: Option<Email>,
    pub link: Link,
}

/// The <email id="..." domain="..."/> element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Email {
    pub id: Option<String>,
    pub domain: Option<String>,
}

/// A <link> element.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Link {
    pub href: Option<String>,
    pub text: Option<String>,
    #[serde(rename = "type")]
    pub link_type: Option<String>,
}

/// A route or track point (<rtept>, <trkpt>).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
    pub ele: Option<f64>,
    pub time: Option<DateTime<Utc>>,
}

impl Point {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ele: None,
            time: None,
        }
    }
}

/// A <wpt> element: a point plus its descriptive fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lon: f64,
    pub ele: Option<f64>,
    pub time: Option<DateTime<Utc>>,
    pub name: Option<String>,
    pub sym: Option<String>,
    pub cmt: Option<String>,
    pub desc: Option<String>,
}

/// Distances derived from a point sequence, in meters.
///
/// `cumul[i]` is the distance from point 0 through point i, so `cumul[0]` is
/// 0.0, `cumul.len()` equals the point count, and the last entry equals
/// `total`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Distance {
    pub total: f64,
    pub cumul: Vec<f64>,
}

/// Elevation statistics over a point sequence, in meters.
///
/// All five fields are `None` when no point carries an elevation; `pos` and
/// `neg` are additionally `None` when the accumulated gain/loss is zero. A
/// present 0.0 is distinct from absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Elevation {
    pub max: Option<f64>,
    pub min: Option<f64>,
    pub pos: Option<f64>,
    pub neg: Option<f64>,
    pub avg: Option<f64>,
}

/// A <rte> element with its derived statistics.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Route {
    pub name: Option<String>,
    pub cmt: Option<String>,
    pub desc: Option<String>,
    pub src: Option<String>,
    pub number: Option<u32>,
    #[serde(rename = "type")]
    pub route_type: Option<String>,
    pub link: Option<Link>,
    pub points: Vec<Point>,
    pub distance: Distance,
    pub elevation: Elevation,
    /// Percent grade per consecutive point pair; entries may be non-finite.
    pub slopes: Vec<f64>,
}

/// A <trk> element with its derived statistics. Segment boundaries are
/// transparent: points from all <trkseg> children are concatenated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Track {
    pub name: Option<String>,
    pub cmt: Option<String>,
    pub desc: Option<String>,
    pub src: Option<String>,
    pub number: Option<u32>,
    #[serde(rename = "type")]
    pub track_type: Option<String>,
    pub link: Option<Link>,
    pub points: Vec<Point>,
    pub distance: Distance,
    pub elevation: Elevation,
    /// Percent grade per consecutive point pair; entries may be non-finite.
    pub slopes: Vec<f64>,
}
