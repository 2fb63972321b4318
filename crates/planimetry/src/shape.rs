//! Shape capability seam for the envelope search, plus thin delegation to
//! the geometry kernel (length, simplification, WKT rendering).
//!
//! The envelope routines need exactly four capabilities — affine mapping,
//! centroid, axis-aligned envelope, convex hull — so they are bundled into
//! one trait with a blanket impl over everything the kernel can already do
//! this for (line strings, multi line strings, polygons, multi polygons).

use geo::{
    BoundingRect, Centroid, ConvexHull, EuclideanLength, GeoFloat, MapCoords, Point, Polygon,
    Rect, Simplify,
};
use wkt::ToWkt;

use crate::transform::Affine2;

/// What the envelope search needs from a shape.
pub trait Shape<T: GeoFloat>: Clone {
    /// Applies an affine map to every coordinate.
    fn transform(&self, map: &Affine2) -> Self;
    /// Centroid, undefined for empty shapes.
    fn centroid(&self) -> Option<Point<T>>;
    /// Axis-aligned envelope, undefined for empty shapes.
    fn envelope(&self) -> Option<Rect<T>>;
    /// Convex hull.
    fn hull(&self) -> Polygon<T>;
}

impl<T, G> Shape<T> for G
where
    T: GeoFloat,
    G: Clone
        + MapCoords<T, T, Output = G>
        + Centroid<Output = Option<Point<T>>>
        + BoundingRect<T, Output = Option<Rect<T>>>
        + for<'a> ConvexHull<'a, T, Scalar = T>,
{
    fn transform(&self, map: &Affine2) -> Self {
        self.map_coords(|c| map.apply(c))
    }

    fn centroid(&self) -> Option<Point<T>> {
        Centroid::centroid(self)
    }

    fn envelope(&self) -> Option<Rect<T>> {
        BoundingRect::bounding_rect(self)
    }

    fn hull(&self) -> Polygon<T> {
        ConvexHull::convex_hull(self)
    }
}

/// Total Euclidean length of a curve-like geometry.
#[inline]
pub fn length<T, G>(geometry: &G) -> T
where
    T: GeoFloat,
    G: EuclideanLength<T>,
{
    geometry.euclidean_length()
}

/// Douglas–Peucker simplification with tolerance `d`.
#[inline]
pub fn simplify<T, G>(geometry: &G, d: T) -> G
where
    T: GeoFloat,
    G: Simplify<T>,
{
    geometry.simplify(&d)
}

/// WKT text rendering of any shape.
#[inline]
pub fn wkt_string<T, G>(geometry: &G) -> String
where
    T: geo::CoordNum + wkt::WktNum + std::fmt::Display,
    G: ToWkt<T>,
{
    geometry.wkt_string()
}
