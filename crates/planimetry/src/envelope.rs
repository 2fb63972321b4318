//! Oriented bounding-box search by brute-force rotational sweep.
//!
//! All three routines rotate the shape in fixed angular steps through a full
//! turn, track the axis-aligned envelope at each step, and keep the rotation
//! minimizing (or, for the refinement, maximizing) the objective: O(360)
//! envelope evaluations, no rotating-calipers shortcut. Every iteration
//! transforms the PREVIOUS iteration's shape with one precomputed step map,
//! so rotation accumulates instead of being recomputed from the original.
//!
//! Sign conventions differ on purpose: [`oriented_envelope`] negates the
//! winning sweep angle (the box has to be rotated back onto the original
//! shape), [`full_envelope`] reports it positive.

use geo::{Area, BoundingRect, GeoFloat, MultiLineString, MultiPolygon, Point, Polygon};

use crate::parallel::parallelity_multi;
use crate::shape::Shape;
use crate::transform::{rotate, Affine2};
use crate::types::{to_f64, RotatedRect};

/// Minimal-area oriented envelope of `shape`, swept in 1° steps about the
/// shape's centroid. `None` for shapes without a centroid or envelope.
pub fn oriented_envelope<T, S>(shape: &S) -> Option<RotatedRect<T>>
where
    T: GeoFloat,
    S: Shape<T>,
{
    let center = shape.centroid()?;
    let step = Affine2::rotation_about(1.0, to_f64(center.x()), to_f64(center.y()));

    let mut working = shape.clone();
    let mut best = shape.envelope()?;
    let mut best_deg = 0.0;

    for i in 1..360 {
        working = working.transform(&step);
        let e = working.envelope()?;
        if best.unsigned_area() > e.unsigned_area() {
            best = e;
            best_deg = f64::from(i);
        }
    }

    Some(RotatedRect::new(best, -best_deg, center))
}

/// Sweep as in [`oriented_envelope`], but every step's convex hull is kept;
/// the final rect is the envelope of the union of all 359 step hulls (the
/// unrotated hull is not part of the union), while the reported rotation is
/// still the positive minimum-area sweep angle.
pub fn full_envelope<T, S>(shape: &S) -> Option<RotatedRect<T>>
where
    T: GeoFloat,
    S: Shape<T>,
{
    let center = shape.centroid()?;
    let step = Affine2::rotation_about(1.0, to_f64(center.x()), to_f64(center.y()));

    let mut working = shape.clone();
    let mut best = shape.envelope()?;
    let mut best_deg = 0.0;
    let mut hulls: Vec<Polygon<T>> = Vec::with_capacity(359);

    for i in 1..360 {
        working = working.transform(&step);
        hulls.push(working.hull());
        let e = working.envelope()?;
        if best.unsigned_area() > e.unsigned_area() {
            best = e;
            best_deg = f64::from(i);
        }
    }

    let rect = MultiPolygon::new(hulls).bounding_rect()?;
    Some(RotatedRect::new(rect, best_deg, center))
}

/// Refines the [`full_envelope`] orientation of a multiline: scans rotation
/// offsets within ±45° of the envelope's orientation (0.5° steps, about the
/// envelope rect's center) for the one maximizing the parallelity score,
/// adds the winner to the box rotation, and re-derives the rect as the
/// envelope of the original shape's convex hull counter-rotated into the
/// box's frame. Angle and center are preserved in the result.
pub fn oriented_envelope_avg<T>(ml: &MultiLineString<T>) -> Option<RotatedRect<T>>
where
    T: GeoFloat,
{
    let mut rbox = full_envelope(ml)?;
    let center = Point::from(rbox.rect.center());

    let mut working = rotate(ml, -rbox.rotate_deg - 45.0, center);
    let mut best_deg = -45.0;
    let mut score = parallelity_multi(&rbox.rect, &working);

    let step = Affine2::rotation_about(-0.5, to_f64(center.x()), to_f64(center.y()));
    let mut i = -45.0f64;
    while i <= 45.0 {
        working = working.transform(&step);
        let p = parallelity_multi(&rbox.rect, &working);
        if p > score {
            best_deg = i;
            score = p;
        }
        i += 0.5;
    }

    rbox.rotate_deg += best_deg;

    let hull = rotate(&ml.hull(), -rbox.rotate_deg, rbox.center);
    let rect = hull.bounding_rect()?;
    Some(RotatedRect::new(rect, rbox.rotate_deg, rbox.center))
}
