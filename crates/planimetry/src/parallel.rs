//! Parallelity: how closely a curve's direction matches a rect's edges.

use std::f64::consts::PI;

use geo::{GeoFloat, LineString, MultiLineString, Point, Rect};

use crate::segment::angle_between;

/// Alignment score of `line`'s end-to-end direction against the four edge
/// directions of `rect`: 1.0 when parallel to an edge, 0.0 at 45° to all
/// edges, negative beyond that. Interior points of the line are ignored.
///
/// A line without endpoints scores NaN.
pub fn parallelity<T: GeoFloat>(rect: &Rect<T>, line: &LineString<T>) -> f64 {
    let (min, max) = (rect.min(), rect.max());
    let edges = [
        angle_between(Point::from(min), Point::new(min.x, max.y)),
        angle_between(Point::from(min), Point::new(max.x, min.y)),
        angle_between(Point::from(max), Point::new(min.x, max.y)),
        angle_between(Point::from(max), Point::new(max.x, min.y)),
    ];

    let (Some(first), Some(last)) = (line.0.first(), line.0.last()) else {
        return f64::NAN;
    };
    let e = angle_between(Point::from(*first), Point::from(*last));

    // fold each angular difference into [0, π/2] and keep the minimum
    let mut ret = PI;
    for ang in edges {
        let mut v = (ang - e).abs();
        if v > PI {
            v = 2.0 * PI - v;
        }
        if v > PI / 2.0 {
            v = PI - v;
        }
        if v < ret {
            ret = v;
        }
    }

    1.0 - ret / (PI / 4.0)
}

/// Mean of the per-line scores over a multiline.
pub fn parallelity_multi<T: GeoFloat>(rect: &Rect<T>, multiline: &MultiLineString<T>) -> f64 {
    let mut ret = 0.0;
    for line in &multiline.0 {
        ret += parallelity(rect, line);
    }
    ret / multiline.0.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;

    #[test]
    fn axis_aligned_line_scores_one() {
        let rect = Rect::new((0.0, 0.0), (4.0, 2.0));
        let horizontal = line_string![(x: 0.0, y: 1.0), (x: 4.0, y: 1.0)];
        assert!((parallelity(&rect, &horizontal) - 1.0).abs() < 1e-12);

        let vertical = line_string![(x: 1.0, y: 0.0), (x: 1.0, y: 7.0)];
        assert!((parallelity(&rect, &vertical) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn diagonal_line_scores_zero() {
        let rect = Rect::new((0.0, 0.0), (4.0, 2.0));
        let diagonal = line_string![(x: 0.0, y: 0.0), (x: 3.0, y: 3.0)];
        assert!(parallelity(&rect, &diagonal).abs() < 1e-12);
    }

    #[test]
    fn interior_points_are_ignored() {
        let rect = Rect::new((0.0, 0.0), (4.0, 2.0));
        // wild interior detour, but endpoints span a horizontal
        let line = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 9.0), (x: 4.0, y: 0.0)];
        assert!((parallelity(&rect, &line) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn multi_is_the_mean() {
        let rect = Rect::new((0.0, 0.0), (4.0, 2.0));
        let ml = MultiLineString::new(vec![
            line_string![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0)],
            line_string![(x: 0.0, y: 0.0), (x: 3.0, y: 3.0)],
        ]);
        assert!((parallelity_multi(&rect, &ml) - 0.5).abs() < 1e-12);
    }
}
