//! Segment relation tests: containment, intersection, angles, projections.
//!
//! Predicates take finite segments as point pairs; the infinite-line variant
//! is named so. Internal math runs in f64 regardless of the coordinate type.
//! Parallel or degenerate inputs to [`intersection`] produce NaN/Inf rather
//! than an error; callers that need a defined answer pre-check with
//! [`line_intersects`].

use geo::{Contains, EuclideanDistance, GeoFloat, Intersects, Line, Point};

use crate::types::{from_f64, nearly_eq, to_f64, EPS_PARALLEL};

/// Euclidean distance between two geometries, as measured by the geometry
/// kernel.
#[inline]
pub fn dist<T, A, B>(a: &A, b: &B) -> T
where
    T: GeoFloat,
    A: EuclideanDistance<T, B>,
{
    a.euclidean_distance(b)
}

/// True iff segment `(p1, q1)` lies entirely within segment `(p2, q2)`
/// (collinear-overlap containment).
pub fn contains<T: GeoFloat>(p1: Point<T>, q1: Point<T>, p2: Point<T>, q2: Point<T>) -> bool {
    let a = Line::new(p1, q1);
    let b = Line::new(p2, q2);
    b.contains(&a)
}

/// True iff the two finite segments cross. A segment wholly contained in the
/// other does not count as crossing.
pub fn intersects<T: GeoFloat>(p1: Point<T>, q1: Point<T>, p2: Point<T>, q2: Point<T>) -> bool {
    let a = Line::new(p1, q1);
    let b = Line::new(p2, q2);
    !(contains(p1, q1, p2, q2) || contains(p2, q2, p1, q1)) && a.intersects(&b)
}

/// Intersection point of the two segments.
///
/// Degenerate inputs short-circuit to an endpoint, checked in this order:
/// p1≈q1 → p1, p2≈q1 → p2, p2≈q2 → p2, p1≈q2 → p1. For parallel segments
/// the cross-ratio denominator vanishes and the result is NaN/Inf.
pub fn intersection<T: GeoFloat>(
    p1: Point<T>,
    q1: Point<T>,
    p2: Point<T>,
    q2: Point<T>,
) -> Point<T> {
    let (p1x, p1y) = (to_f64(p1.x()), to_f64(p1.y()));
    let (q1x, q1y) = (to_f64(q1.x()), to_f64(q1.y()));
    let (p2x, p2y) = (to_f64(p2.x()), to_f64(p2.y()));
    let (q2x, q2y) = (to_f64(q2.x()), to_f64(q2.y()));

    if nearly_eq(p1x, q1x) && nearly_eq(p1y, q1y) {
        return p1;
    }
    if nearly_eq(p2x, q1x) && nearly_eq(p2y, q1y) {
        return p2;
    }
    if nearly_eq(p2x, q2x) && nearly_eq(p2y, q2y) {
        return p2;
    }
    if nearly_eq(p1x, q2x) && nearly_eq(p1y, q2y) {
        return p1;
    }

    let a = (q2y - p2y) * (q1x - p1x) - (q2x - p2x) * (q1y - p1y);
    let u = ((q2x - p2x) * (p1y - p2y) - (q2y - p2y) * (p1x - p2x)) / a;

    Point::new(from_f64(p1x + (q1x - p1x) * u), from_f64(p1y + (q1y - p1y) * u))
}

/// True iff the infinite lines through the two segments are non-parallel.
pub fn line_intersects<T: GeoFloat>(
    p1: Point<T>,
    q1: Point<T>,
    p2: Point<T>,
    q2: Point<T>,
) -> bool {
    let a = (to_f64(q2.y()) - to_f64(p2.y())) * (to_f64(q1.x()) - to_f64(p1.x()))
        - (to_f64(q2.x()) - to_f64(p2.x())) * (to_f64(q1.y()) - to_f64(p1.y()));
    a.abs() > EPS_PARALLEL
}

/// Direction of `p → q` in radians (`atan2`).
#[inline]
pub fn angle_between<T: GeoFloat>(p: Point<T>, q: Point<T>) -> f64 {
    (to_f64(q.y()) - to_f64(p.y())).atan2(to_f64(q.x()) - to_f64(p.x()))
}

/// Perpendicular distance from `p` to the closed segment `[la, lb]`; the
/// projection parameter is clamped to [0, 1], and a zero-length segment
/// degenerates to a point distance.
pub fn dist_to_segment<T: GeoFloat>(la: Point<T>, lb: Point<T>, p: Point<T>) -> f64 {
    let (lax, lay) = (to_f64(la.x()), to_f64(la.y()));
    let (lbx, lby) = (to_f64(lb.x()), to_f64(lb.y()));
    let (px, py) = (to_f64(p.x()), to_f64(p.y()));

    let dx = lbx - lax;
    let dy = lby - lay;
    let d2 = dx * dx + dy * dy;
    if d2 == 0.0 {
        return (px - lax).hypot(py - lay);
    }

    let t = (((px - lax) * dx + (py - lay) * dy) / d2).clamp(0.0, 1.0);
    (px - (lax + t * dx)).hypot(py - (lay + t * dy))
}

/// Orthogonal projection of `b` onto the line through `a` and `c`, in
/// slope-intercept form (vertical lines special-cased).
///
/// If the projected point does not lie between `a` and `c` (heuristic:
/// `dist(a,c)` exceeds both its distances to the endpoints), whichever
/// endpoint the projection is nearer to is returned instead.
pub fn project_on<T: GeoFloat>(a: Point<T>, b: Point<T>, c: Point<T>) -> Point<T> {
    let (ax, ay) = (to_f64(a.x()), to_f64(a.y()));
    let (bx, by) = (to_f64(b.x()), to_f64(b.y()));
    let (cx, cy) = (to_f64(c.x()), to_f64(c.y()));

    if nearly_eq(ax, bx) && nearly_eq(ay, by) {
        return a;
    }
    if nearly_eq(ax, cx) && nearly_eq(ay, cy) {
        return a;
    }
    if nearly_eq(bx, cx) && nearly_eq(by, cy) {
        return b;
    }

    let (x, y) = if cx == ax {
        // infinite slope
        (ax, by)
    } else {
        let m = (cy - ay) / (cx - ax);
        let intercept = ay - m * ax;
        (
            (m * by + bx - m * intercept) / (m * m + 1.0),
            (m * m * by + m * bx + intercept) / (m * m + 1.0),
        )
    };

    let ac = (cx - ax).hypot(cy - ay);
    let from_a = (x - ax).hypot(y - ay);
    let from_c = (x - cx).hypot(y - cy);

    let is_between = ac > from_a && ac > from_c;
    if !is_between {
        return if from_a < from_c { a } else { c };
    }

    Point::new(from_f64(x), from_f64(y))
}

/// Angle at vertex `a` between the rays `a → b` and `a → c`, in degrees.
/// The arccos argument is clamped to 1.0 against floating-point overshoot.
pub fn inner_angle<T: GeoFloat>(a: Point<T>, b: Point<T>, c: Point<T>) -> f64 {
    let dx21 = to_f64(b.x()) - to_f64(a.x());
    let dy21 = to_f64(b.y()) - to_f64(a.y());
    let dx31 = to_f64(c.x()) - to_f64(a.x());
    let dy31 = to_f64(c.y()) - to_f64(a.y());

    let m12 = dx21.hypot(dy21);
    let m13 = dx31.hypot(dy31);

    let theta = ((dx21 * dx31 + dy21 * dy31) / (m12 * m13)).min(1.0).acos();
    theta.to_degrees()
}
