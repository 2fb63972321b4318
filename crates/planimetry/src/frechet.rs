//! Polyline resampling and discrete Fréchet distance.
//!
//! The coupling-measure recurrence follows Eiter / Mannila, "Computing
//! discrete Fréchet distance" (TU Wien, CD-TR 94/64), computed bottom-up
//! over an explicit table rather than by memoized recursion, which would
//! risk stack exhaustion on long curves.

use geo::{Coord, EuclideanDistance, GeoFloat, LineString, Point};

use crate::types::{from_f64, to_f64};

/// Resamples `line` so that no gap between consecutive points exceeds `d`.
///
/// Original vertices are always kept; the last fractional remainder of each
/// segment is absorbed instead of forcing an exact `d` spacing. Empty input
/// returns empty; a non-positive `d` returns the input unchanged.
pub fn densify<T: GeoFloat>(line: &LineString<T>, d: f64) -> LineString<T> {
    debug_assert!(d > 0.0, "densify needs a positive resolution");
    if line.0.is_empty() || d <= 0.0 {
        return line.clone();
    }

    let mut out: Vec<Coord<T>> = Vec::with_capacity(line.0.len());
    out.push(line.0[0]);

    for w in line.0.windows(2) {
        let (ax, ay) = (to_f64(w[0].x), to_f64(w[0].y));
        let (bx, by) = (to_f64(w[1].x), to_f64(w[1].y));
        let segd = (bx - ax).hypot(by - ay);
        if segd > 0.0 {
            let dx = (bx - ax) / segd;
            let dy = (by - ay) / segd;
            let mut curd = d;
            while curd < segd {
                out.push(Coord {
                    x: from_f64(ax + dx * curd),
                    y: from_f64(ay + dy * curd),
                });
                curd += d;
            }
        }
        out.push(w[1]);
    }

    LineString::new(out)
}

/// Discrete Fréchet distance between `a` and `b`, both resampled at
/// resolution `d` first.
///
/// Fills the full coupling table bottom-up; memory is O(|p|·|q|) in the
/// densified point counts, so `d` and the curve lengths bound the cost.
/// Zero when either input is empty.
pub fn frechet_dist<T: GeoFloat>(a: &LineString<T>, b: &LineString<T>, d: f64) -> T {
    let p = densify(a, d);
    let q = densify(b, d);
    let n = p.0.len();
    let m = q.0.len();
    if n == 0 || m == 0 {
        return T::zero();
    }

    let dist = |i: usize, j: usize| Point::from(p.0[i]).euclidean_distance(&Point::from(q.0[j]));

    let mut ca = vec![T::zero(); n * m];
    ca[0] = dist(0, 0);
    for i in 1..n {
        ca[i * m] = ca[(i - 1) * m].max(dist(i, 0));
    }
    for j in 1..m {
        ca[j] = ca[j - 1].max(dist(0, j));
    }
    for i in 1..n {
        for j in 1..m {
            let reach = ca[(i - 1) * m + j]
                .min(ca[(i - 1) * m + (j - 1)])
                .min(ca[i * m + (j - 1)]);
            ca[i * m + j] = reach.max(dist(i, j));
        }
    }

    ca[n * m - 1]
}

/// Accumulated-cost curve similarity: each matched pair contributes its
/// distance weighted by the source curve's local step length, summed along
/// the cheapest monotone alignment.
///
/// This is NOT the Fréchet distance and not a metric — the weighting is
/// asymmetric in `a` and `b` — but a path-integral-like score. Border cells
/// start at +∞ (except the origin), so a single-point input legitimately
/// scores +∞ against a longer curve. Zero when either input is empty.
pub fn acc_frechet_dist<T: GeoFloat>(a: &LineString<T>, b: &LineString<T>, d: f64) -> T {
    let p = densify(a, d);
    let q = densify(b, d);
    let n = p.0.len();
    let m = q.0.len();
    if n == 0 || m == 0 {
        return T::zero();
    }

    let mut ca = vec![T::zero(); n * m];
    for i in 0..n {
        ca[i * m] = T::infinity();
    }
    for j in 0..m {
        ca[j] = T::infinity();
    }
    ca[0] = T::zero();

    for i in 1..n {
        for j in 1..m {
            let pi = Point::from(p.0[i]);
            let cost = pi.euclidean_distance(&Point::from(q.0[j]))
                * pi.euclidean_distance(&Point::from(p.0[i - 1]));
            let prev = ca[(i - 1) * m + j]
                .min(ca[i * m + (j - 1)])
                .min(ca[(i - 1) * m + (j - 1)]);
            ca[i * m + j] = cost + prev;
        }
    }

    ca[n * m - 1]
}
