//! Spherical Web Mercator projection and meter-scale distance correction.
//!
//! Spherical (non-ellipsoidal) forward projection with Earth radius
//! 6378137 m. The inverse uses a separately derived constant set and is an
//! approximation of the forward map's inverse, not an exact round trip.

use geo::{GeoFloat, Point};

use crate::types::{from_f64, to_f64};

const EARTH_RADIUS_M: f64 = 6378137.0;
const DEG_TO_RAD: f64 = 0.017453292519943295;

/// Forward spherical Web Mercator: `(lat, lng)` in degrees to projected
/// meters.
pub fn lat_lng_to_web_merc<T: GeoFloat>(lat: f64, lng: f64) -> Point<T> {
    let x = EARTH_RADIUS_M * lng * DEG_TO_RAD;
    let a = lat * DEG_TO_RAD;
    let y = 3189068.5 * ((1.0 + a.sin()) / (1.0 - a.sin())).ln();
    Point::new(from_f64(x), from_f64(y))
}

/// Approximate inverse projection: projected meters to `(lng, lat)` degrees
/// (x holds longitude, y latitude).
pub fn web_merc_to_lat_lng<T: GeoFloat>(x: f64, y: f64) -> Point<T> {
    let lat = 114.591559026 * ((y / EARTH_RADIUS_M).exp().atan() - 0.78539825);
    let lng = x / 111319.4907932735677;
    Point::new(from_f64(lng), from_f64(lat))
}

/// Approximate ground distance in meters between two Web-Mercator-projected
/// points: the Euclidean distance corrected by the cosine of the mean
/// latitude. Exact only at the equator scale reference; distortion grows
/// toward the poles.
pub fn web_merc_meter_dist<T: GeoFloat>(a: Point<T>, b: Point<T>) -> f64 {
    let lat_a = 2.0 * (to_f64(a.y()) / EARTH_RADIUS_M).exp().atan() - 1.5707965;
    let lat_b = 2.0 * (to_f64(b.y()) / EARTH_RADIUS_M).exp().atan() - 1.5707965;

    let d = (to_f64(b.x()) - to_f64(a.x())).hypot(to_f64(b.y()) - to_f64(a.y()));
    d * ((lat_a + lat_b) / 2.0).cos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_projects_to_origin() {
        let p: Point<f64> = lat_lng_to_web_merc(0.0, 0.0);
        assert_eq!(p.x(), 0.0);
        assert_eq!(p.y(), 0.0);
    }

    #[test]
    fn forward_known_value() {
        // lng 1° on the equator is one degree of arc length
        let p: Point<f64> = lat_lng_to_web_merc(0.0, 1.0);
        assert!((p.x() - 111319.49).abs() < 1.0);
    }

    #[test]
    fn round_trip_is_loosely_identical() {
        let p: Point<f64> = lat_lng_to_web_merc(48.0, 7.85);
        let back: Point<f64> = web_merc_to_lat_lng(p.x(), p.y());
        assert!((back.y() - 48.0).abs() < 0.01);
        assert!((back.x() - 7.85).abs() < 0.01);
    }

    #[test]
    fn meter_dist_on_the_equator() {
        let a: Point<f64> = Point::new(0.0, 0.0);
        let b: Point<f64> = Point::new(1000.0, 0.0);
        assert!((web_merc_meter_dist(a, b) - 1000.0).abs() < 1.0);
    }

    #[test]
    fn meter_dist_shrinks_at_high_latitude() {
        let p: Point<f64> = lat_lng_to_web_merc(60.0, 0.0);
        let a = Point::new(p.x(), p.y());
        let b = Point::new(p.x() + 1000.0, p.y());
        let d = web_merc_meter_dist(a, b);
        // cos(60°) halves the projected distance
        assert!((d - 500.0).abs() < 5.0);
    }
}
