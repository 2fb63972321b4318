//! Shared value types, aliases, and tolerances.
//!
//! Coordinate and shape types come from the `geo` kernel; algorithms in this
//! crate are generic over `GeoFloat` (f64/f32). The integer aliases exist as
//! value types only.
//!
//! - Tolerances are centralized here as named constants.
//! - `RotatedRect` pairs an axis-aligned rect with a rotation about a pivot;
//!   the concrete polygon is derived on demand.

use geo::{Coord, CoordNum, GeoFloat, LineString, Point, Polygon, Rect};

/// Coordinate equality tolerance for degenerate-case shortcuts.
pub const EPS_COORD: f64 = 1e-6;
/// Parallelism cutoff for infinite-line intersection tests.
pub const EPS_PARALLEL: f64 = 1e-7;

pub type DPoint = Point<f64>;
pub type FPoint = Point<f32>;
pub type IPoint = Point<i32>;

pub type DLine = LineString<f64>;
pub type FLine = LineString<f32>;
pub type ILine = LineString<i32>;

pub type DRect = Rect<f64>;
pub type FRect = Rect<f32>;
pub type IRect = Rect<i32>;

#[inline]
pub(crate) fn to_f64<T: GeoFloat>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

#[inline]
pub(crate) fn from_f64<T: GeoFloat>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

/// `|a - b| < EPS_COORD`.
#[inline]
pub(crate) fn nearly_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS_COORD
}

/// An axis-aligned rect plus a counter-clockwise rotation (degrees) about a
/// pivot point.
#[derive(Clone, Copy, Debug)]
pub struct RotatedRect<T: GeoFloat> {
    pub rect: Rect<T>,
    pub rotate_deg: f64,
    pub center: Point<T>,
}

impl<T: GeoFloat> RotatedRect<T> {
    #[inline]
    pub fn new(rect: Rect<T>, rotate_deg: f64, center: Point<T>) -> Self {
        Self {
            rect,
            rotate_deg,
            center,
        }
    }

    /// Pivot defaulted to the rect's own center.
    #[inline]
    pub fn about_center(rect: Rect<T>, rotate_deg: f64) -> Self {
        let center = Point::from(rect.center());
        Self {
            rect,
            rotate_deg,
            center,
        }
    }

    /// The rect's corner polygon rotated into place.
    pub fn polygon(&self) -> Polygon<T> {
        crate::transform::rotate(&self.rect.to_polygon(), self.rotate_deg, self.center)
    }
}

/// Smallest rect covering both inputs. Fold with `Option` (`None` as the
/// identity) to extend over a collection of rects.
pub fn extend_rect<T: CoordNum>(a: &Rect<T>, b: &Rect<T>) -> Rect<T> {
    Rect::new(
        Coord {
            x: min_c(a.min().x, b.min().x),
            y: min_c(a.min().y, b.min().y),
        },
        Coord {
            x: max_c(a.max().x, b.max().x),
            y: max_c(a.max().y, b.max().y),
        },
    )
}

/// Overlap area of two rects; zero when they are disjoint.
pub fn common_area<T: CoordNum>(a: &Rect<T>, b: &Rect<T>) -> T {
    let left = max_c(a.min().x, b.min().x);
    let right = min_c(a.max().x, b.max().x);
    let bottom = max_c(a.min().y, b.min().y);
    let top = min_c(a.max().y, b.max().y);

    if left > right || bottom > top {
        return T::zero();
    }
    (right - left) * (top - bottom)
}

#[inline]
fn min_c<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

#[inline]
fn max_c<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}
