//! Affine transforms over planar geometries.
//!
//! Purpose
//! - One affine-map type (`Affine2`) backs both rotation and translation, so
//!   a rotation about a center is a single matrix application per point
//!   instead of three passes (which would compound floating error).
//! - The free functions are generic over the geometry kind via `MapCoords`.

use geo::{Centroid, Coord, GeoFloat, MapCoords, Point, Rect};
use nalgebra::{Matrix2, Vector2};

use crate::types::{from_f64, to_f64, RotatedRect};

/// 2D affine map `x ↦ M x + t` over f64; generic coordinates cast through
/// f64 on application.
#[derive(Clone, Copy, Debug)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    #[inline]
    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::new(dx, dy),
        }
    }

    /// Counter-clockwise rotation by `deg` about the origin.
    #[inline]
    pub fn rotation_deg(deg: f64) -> Self {
        let (sin, cos) = deg.to_radians().sin_cos();
        Self {
            m: Matrix2::new(cos, -sin, sin, cos),
            t: Vector2::zeros(),
        }
    }

    /// Counter-clockwise rotation by `deg` about `(cx, cy)`:
    /// translate(−center) → rotate → translate(+center) collapsed into one
    /// map.
    pub fn rotation_about(deg: f64, cx: f64, cy: f64) -> Self {
        Self::translation(cx, cy)
            .compose(&Self::rotation_deg(deg))
            .compose(&Self::translation(-cx, -cy))
    }

    /// `self ∘ inner`: applies `inner` first.
    #[inline]
    pub fn compose(&self, inner: &Affine2) -> Self {
        Self {
            m: self.m * inner.m,
            t: self.m * inner.t + self.t,
        }
    }

    #[inline]
    pub fn apply<T: GeoFloat>(&self, c: Coord<T>) -> Coord<T> {
        let v = self.m * Vector2::new(to_f64(c.x), to_f64(c.y)) + self.t;
        Coord {
            x: from_f64(v.x),
            y: from_f64(v.y),
        }
    }
}

/// Rotates every coordinate of `geometry` by `deg` (counter-clockwise,
/// degrees) about `center`.
pub fn rotate<T, G>(geometry: &G, deg: f64, center: Point<T>) -> G
where
    T: GeoFloat,
    G: MapCoords<T, T, Output = G>,
{
    let map = Affine2::rotation_about(deg, to_f64(center.x()), to_f64(center.y()));
    geometry.map_coords(|c| map.apply(c))
}

/// Rotation about the geometry's own centroid; the input is returned
/// unchanged when the centroid is undefined (empty geometry).
pub fn rotate_about_centroid<T, G>(geometry: &G, deg: f64) -> G
where
    T: GeoFloat,
    G: MapCoords<T, T, Output = G> + Centroid<Output = Option<Point<T>>> + Clone,
{
    match geometry.centroid() {
        Some(center) => rotate(geometry, deg, center),
        None => geometry.clone(),
    }
}

/// Pure translation by `(dx, dy)`, generic over the geometry kind.
pub fn translate<T, G>(geometry: &G, dx: T, dy: T) -> G
where
    T: GeoFloat,
    G: MapCoords<T, T, Output = G>,
{
    let map = Affine2::translation(to_f64(dx), to_f64(dy));
    geometry.map_coords(|c| map.apply(c))
}

/// Rect grown by `padding` on every side.
///
/// `Rect` keeps min ≤ max, so a large negative padding yields the normalized
/// rect of the swapped corners rather than an inverted box.
pub fn pad<T: GeoFloat>(rect: &Rect<T>, padding: T) -> Rect<T> {
    Rect::new(
        Coord {
            x: rect.min().x - padding,
            y: rect.min().y - padding,
        },
        Coord {
            x: rect.max().x + padding,
            y: rect.max().y + padding,
        },
    )
}

/// Shrinks the underlying rect of `b` by `d` on every side.
///
/// `d` is clamped against the x extent first, then the y extent: an axis of
/// extent ≤ 2d lowers `d` to extent/2 − 1. The single scalar is shared by
/// both axes, so a clamp triggered by one axis also lowers the margin
/// applied to the other.
pub fn shrink<T: GeoFloat>(b: &RotatedRect<T>, d: f64) -> RotatedRect<T> {
    let xd = to_f64(b.rect.width());
    let yd = to_f64(b.rect.height());

    let mut d = d;
    if xd <= 2.0 * d {
        d = xd / 2.0 - 1.0;
    }
    if yd <= 2.0 * d {
        d = yd / 2.0 - 1.0;
    }

    let d = from_f64::<T>(d);
    let rect = Rect::new(
        Coord {
            x: b.rect.min().x + d,
            y: b.rect.min().y + d,
        },
        Coord {
            x: b.rect.max().x - d,
            y: b.rect.max().y - d,
        },
    );
    RotatedRect::new(rect, b.rotate_deg, b.center)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::line_string;

    #[test]
    fn rotate_quarter_turn_is_ccw() {
        let l = line_string![(x: 1.0f64, y: 0.0)];
        let r = rotate(&l, 90.0, Point::new(0.0, 0.0));
        assert!((r.0[0].x).abs() < 1e-12);
        assert!((r.0[0].y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotate_about_explicit_center() {
        let l = line_string![(x: 2.0f64, y: 1.0)];
        let r = rotate(&l, 180.0, Point::new(1.0, 1.0));
        assert!((r.0[0].x).abs() < 1e-12);
        assert!((r.0[0].y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn rotate_defaults_to_centroid() {
        let l = line_string![(x: 0.0f64, y: 0.0), (x: 2.0, y: 0.0)];
        let r = rotate_about_centroid(&l, 180.0);
        assert!((r.0[0].x - 2.0).abs() < 1e-12);
        assert!((r.0[1].x).abs() < 1e-12);
    }

    #[test]
    fn translate_shifts_all_coords() {
        let l = line_string![(x: 0.0, y: 0.0), (x: 1.0, y: 2.0)];
        let t = translate(&l, 3.0, -2.0);
        assert_eq!(t.0[0], geo::coord! { x: 3.0, y: -2.0 });
        assert_eq!(t.0[1], geo::coord! { x: 4.0, y: 0.0 });
    }

    #[test]
    fn pad_grows_every_side() {
        let r = pad(&Rect::new((0.0, 0.0), (1.0, 1.0)), 1.0);
        assert_eq!(r.min().x, -1.0);
        assert_eq!(r.min().y, -1.0);
        assert_eq!(r.max().x, 2.0);
        assert_eq!(r.max().y, 2.0);
    }

    #[test]
    fn shrink_plain() {
        let b = RotatedRect::new(
            Rect::new((0.0, 0.0), (10.0, 10.0)),
            30.0,
            Point::new(5.0, 5.0),
        );
        let s = shrink(&b, 2.0);
        assert_eq!(s.rect.min().x, 2.0);
        assert_eq!(s.rect.max().y, 8.0);
        assert_eq!(s.rotate_deg, 30.0);
        assert_eq!(s.center, b.center);
    }

    #[test]
    fn shrink_clamps_on_narrow_axis() {
        // y extent 1 ≤ 2·2, so d becomes 1/2 − 1 = −0.5 and the rect grows
        // by 0.5 on every side of both axes.
        let b = RotatedRect::about_center(Rect::new((0.0, 0.0), (10.0, 1.0)), 0.0);
        let s = shrink(&b, 2.0);
        assert_eq!(s.rect.min().x, -0.5);
        assert_eq!(s.rect.min().y, -0.5);
        assert_eq!(s.rect.max().x, 10.5);
        assert_eq!(s.rect.max().y, 1.5);
    }
}
