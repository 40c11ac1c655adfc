use crate::model::{Distance, Elevation, Point};

const EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;
const POLAR_RADIUS_M: f64 = 6_356_752.3;

/// Local Earth radius in meters at the given latitude (degrees), using the
/// standard oblate-spheroid approximation.
pub fn earth_radius_at_latitude(lat_deg: f64) -> f64 {
    let lat = lat_deg.to_radians();
    let r1 = EQUATORIAL_RADIUS_M;
    let r2 = POLAR_RADIUS_M;

    let num = (r1 * r1 * lat.cos()).powi(2) + (r2 * r2 * lat.sin()).powi(2);
    let den = (r1 * lat.cos()).powi(2) + (r2 * lat.sin()).powi(2);
    (num / den).sqrt()
}

/// Great-circle distance between two points in meters: a Vincenty-style
/// central angle scaled by the Earth radius at the mean of the two latitudes.
pub fn distance_between(p1: &Point, p2: &Point) -> f64 {
    let lat1 = p1.lat.to_radians();
    let lat2 = p2.lat.to_radians();
    let delta_lon = (p2.lon - p1.lon).to_radians();

    let a = (lat2.cos() * delta_lon.sin()).powi(2)
        + (lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos()).powi(2);
    let b = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lon.cos();
    let angle = a.sqrt().atan2(b);

    angle * earth_radius_at_latitude((p1.lat + p2.lat) / 2.0)
}

/// Cumulative distances over an ordered point sequence.
///
/// `cumul[0]` is 0.0 and each later entry is the running distance through
/// that point, so the sequence is non-decreasing, has one entry per point,
/// and ends at `total`. One point yields `[0.0]`, none yields an empty
/// sequence.
pub fn cumulative_distance(points: &[Point]) -> Distance {
    let mut cumul = Vec::with_capacity(points.len());
    let mut total = 0.0;

    if !points.is_empty() {
        cumul.push(0.0);
        for pair in points.windows(2) {
            total += distance_between(&pair[0], &pair[1]);
            cumul.push(total);
        }
    }

    Distance { total, cumul }
}

/// Elevation statistics over an ordered point sequence.
///
/// Gain and loss accumulate only over pairs where both elevations are
/// present; a delta of exactly zero counts toward neither, and a zero
/// accumulated sum reports as absent. Max/min/avg cover every present
/// elevation. All five fields are absent when no point has an elevation.
pub fn elevation_stats(points: &[Point]) -> Elevation {
    let mut gain = 0.0;
    let mut loss = 0.0; // stays negative while accumulating

    for pair in points.windows(2) {
        if let (Some(prev), Some(next)) = (pair[0].ele, pair[1].ele) {
            let delta = next - prev;
            if delta > 0.0 {
                gain += delta;
            } else if delta < 0.0 {
                loss += delta;
            }
        }
    }

    let values: Vec<f64> = points.iter().filter_map(|p| p.ele).collect();
    if values.is_empty() {
        return Elevation::default();
    }

    let sum: f64 = values.iter().sum();
    Elevation {
        max: values.iter().copied().reduce(f64::max),
        min: values.iter().copied().reduce(f64::min),
        pos: (gain > 0.0).then_some(gain),
        neg: (loss < 0.0).then_some(loss.abs()),
        avg: Some(sum / values.len() as f64),
    }
}

/// Percent grade per consecutive point pair. `cumul` must be the cumulative
/// distances for `points`. An entry is NaN when either elevation is absent;
/// a zero pair distance leaves the IEEE division result in place, so every
/// degenerate case is a non-finite value.
pub fn slope_percent(points: &[Point], cumul: &[f64]) -> Vec<f64> {
    points
        .windows(2)
        .zip(cumul.windows(2))
        .map(|(pair, dist)| match (pair[0].ele, pair[1].ele) {
            (Some(prev), Some(next)) => (next - prev) * 100.0 / (dist[1] - dist[0]),
            _ => f64::NAN,
        })
        .collect()
}
