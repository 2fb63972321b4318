//! Stateless planar-geometry toolkit: affine transforms, oriented
//! bounding-box search, curve-similarity scores (discrete Fréchet distance),
//! segment relation tests, and a spherical Web Mercator projection.
//!
//! Geometry value types and their primitive operations — centroid, convex
//! hull, envelope, area, length, containment/intersection predicates,
//! simplification, WKT rendering — come from the `geo` kernel; this crate
//! layers the numerical algorithms on top of it.
//!
//! Every operation is a pure function of its inputs: nothing is retained or
//! mutated between calls, so all functions are safe to invoke concurrently.
//! Numeric edge cases follow an explicit policy instead of failing: parallel
//! and degenerate inputs yield NaN/Inf values where documented, empty inputs
//! short-circuit, and caller-supplied NaN/Inf propagates.

pub mod envelope;
pub mod frechet;
pub mod parallel;
pub mod segment;
pub mod shape;
pub mod transform;
pub mod types;
pub mod webmerc;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use transform::Affine2;
pub use types::{
    DLine, DPoint, DRect, FLine, FPoint, FRect, ILine, IPoint, IRect, RotatedRect,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::envelope::{full_envelope, oriented_envelope, oriented_envelope_avg};
    pub use crate::frechet::{acc_frechet_dist, densify, frechet_dist};
    pub use crate::parallel::{parallelity, parallelity_multi};
    pub use crate::segment::{
        angle_between, contains, dist, dist_to_segment, inner_angle, intersection, intersects,
        line_intersects, project_on,
    };
    pub use crate::shape::{length, simplify, wkt_string, Shape};
    pub use crate::transform::{pad, rotate, rotate_about_centroid, shrink, translate, Affine2};
    pub use crate::types::{
        common_area, extend_rect, DLine, DPoint, DRect, RotatedRect, EPS_COORD, EPS_PARALLEL,
    };
    pub use crate::webmerc::{lat_lng_to_web_merc, web_merc_meter_dist, web_merc_to_lat_lng};
}

#[cfg(test)]
mod tests;
