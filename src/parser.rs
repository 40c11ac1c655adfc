use chrono::{DateTime, Utc};
use roxmltree::{Document, Node};

use crate::element::{descendants_named, direct_child, element_text, first_descendant, text_of};
use crate::error::GpxError;
use crate::geomath::{cumulative_distance, elevation_stats, slope_percent};
use crate::model::*;

type Result<T> = std::result::Result<T, GpxError>;

/// Parse a GPX document into an owned model.
///
/// Only an unparseable document is an error. Optional fields degrade to
/// absent, and a missing or non-numeric lat/lon attribute propagates as NaN
/// through the model and every derived statistic.
pub fn parse_gpx(gpx_source: &str) -> Result<Gpx> {
    let doc = Document::parse(gpx_source)?;
    let root = doc.root_element();

    let gpx = Gpx {
        metadata: first_descendant(root, "metadata").map(parse_metadata),
        waypoints: descendants_named(root, "wpt")
            .into_iter()
            .map(parse_waypoint)
            .collect(),
        routes: descendants_named(root, "rte")
            .into_iter()
            .map(parse_route)
            .collect(),
        tracks: descendants_named(root, "trk")
            .into_iter()
            .map(parse_track)
            .collect(),
    };

    tracing::debug!(
        waypoints = gpx.waypoints.len(),
        routes = gpx.routes.len(),
        tracks = gpx.tracks.len(),
        "parsed gpx document"
    );

    Ok(gpx)
}

fn parse_metadata(node: Node) -> Metadata {
    let author = first_descendant(node, "author").map(|author| Author {
        name: text_of(author, "name"),
        email: first_descendant(author, "email").map(|email| Email {
            id: email.attribute("id").map(str::to_string),
            domain: email.attribute("domain").map(str::to_string),
        }),
        link: first_descendant(author, "link")
            .map(parse_link)
            .unwrap_or_default(),
    });

    Metadata {
        name: text_of(node, "name"),
        desc: text_of(node, "desc"),
        time: text_of(node, "time"),
        author,
        // The metadata's own link, not the author's nested one.
        link: direct_child(node, "link").map(parse_link),
    }
}

fn parse_link(node: Node) -> Link {
    Link {
        href: node.attribute("href").map(str::to_string),
        text: text_of(node, "text"),
        link_type: text_of(node, "type"),
    }
}

fn parse_waypoint(node: Node) -> Waypoint {
    Waypoint {
        lat: coord_attr(node, "lat"),
        lon: coord_attr(node, "lon"),
        ele: float_child(node, "ele"),
        time: time_child(node),
        name: text_of(node, "name"),
        sym: text_of(node, "sym"),
        cmt: text_of(node, "cmt"),
        desc: text_of(node, "desc"),
    }
}

fn parse_point(node: Node) -> Point {
    Point {
        lat: coord_attr(node, "lat"),
        lon: coord_attr(node, "lon"),
        ele: float_child(node, "ele"),
        time: time_child(node),
    }
}

fn parse_route(node: Node) -> Route {
    let points: Vec<Point> = descendants_named(node, "rtept")
        .into_iter()
        .map(parse_point)
        .collect();
    let distance = cumulative_distance(&points);
    let elevation = elevation_stats(&points);
    let slopes = slope_percent(&points, &distance.cumul);

    Route {
        name: text_of(node, "name"),
        cmt: text_of(node, "cmt"),
        desc: text_of(node, "desc"),
        src: text_of(node, "src"),
        number: text_of(node, "number").and_then(|s| s.trim().parse().ok()),
        route_type: direct_child(node, "type").map(element_text),
        link: first_descendant(node, "link").map(parse_link),
        points,
        distance,
        elevation,
        slopes,
    }
}

fn parse_track(node: Node) -> Track {
    // Descendant scan flattens <trkseg> boundaries.
    let points: Vec<Point> = descendants_named(node, "trkpt")
        .into_iter()
        .map(parse_point)
        .collect();
    let distance = cumulative_distance(&points);
    let elevation = elevation_stats(&points);
    let slopes = slope_percent(&points, &distance.cumul);

    Track {
        name: text_of(node, "name"),
        cmt: text_of(node, "cmt"),
        desc: text_of(node, "desc"),
        src: text_of(node, "src"),
        number: text_of(node, "number").and_then(|s| s.trim().parse().ok()),
        track_type: direct_child(node, "type").map(element_text),
        link: first_descendant(node, "link").map(parse_link),
        points,
        distance,
        elevation,
        slopes,
    }
}

/// Required coordinate attribute; NaN when missing or non-numeric.
fn coord_attr(node: Node, attr: &str) -> f64 {
    match node.attribute(attr).and_then(|v| v.trim().parse::<f64>().ok()) {
        Some(value) => value,
        None => {
            tracing::warn!(
                element = node.tag_name().name(),
                attribute = attr,
                "missing or non-numeric coordinate attribute, substituting NaN"
            );
            f64::NAN
        }
    }
}

fn float_child(node: Node, tag: &str) -> Option<f64> {
    text_of(node, tag).and_then(|s| s.trim().parse().ok())
}

fn time_child(node: Node) -> Option<DateTime<Utc>> {
    text_of(node, "time")
        .and_then(|s| DateTime::parse_from_rfc3339(s.trim()).ok())
        .map(|t| t.with_timezone(&Utc))
}
