//! Cross-module scenario tests and property tests.

use geo::{line_string, polygon, LineString, Point};
use proptest::prelude::*;

use crate::envelope::oriented_envelope;
use crate::frechet::{densify, frechet_dist};
use crate::parallel::parallelity;
use crate::segment::{dist, intersection, intersects};
use crate::transform::{rotate, translate};
use crate::webmerc::{lat_lng_to_web_merc, web_merc_to_lat_lng};

#[test]
fn diagonals_of_the_unit_square_cross_in_the_middle() {
    let (p1, q1) = (Point::new(0.0f64, 0.0), Point::new(2.0, 2.0));
    let (p2, q2) = (Point::new(0.0, 2.0), Point::new(2.0, 0.0));
    assert!(intersects(p1, q1, p2, q2));
    let x = intersection(p1, q1, p2, q2);
    assert!((x.x() - 1.0).abs() < 1e-12);
    assert!((x.y() - 1.0).abs() < 1e-12);
}

#[test]
fn collinear_disjoint_segments_do_not_intersect() {
    assert!(!intersects(
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(3.0, 0.0)
    ));
}

#[test]
fn parallelity_separates_aligned_from_diagonal() {
    let rect = geo::Rect::new((0.0, 0.0), (4.0, 2.0));
    let horizontal = line_string![(x: 0.0, y: 1.0), (x: 4.0, y: 1.0)];
    let diagonal = line_string![(x: 0.0, y: 0.0), (x: 2.0, y: 2.0)];
    assert!((parallelity(&rect, &horizontal) - 1.0).abs() < 1e-12);
    assert!(parallelity(&rect, &diagonal).abs() < 1e-12);
}

#[test]
fn oriented_envelope_of_an_axis_aligned_rectangle() {
    let rect = polygon![
        (x: 0.0f64, y: 0.0),
        (x: 10.0, y: 0.0),
        (x: 10.0, y: 2.0),
        (x: 0.0, y: 2.0),
        (x: 0.0, y: 0.0),
    ];
    let r = oriented_envelope(&rect).unwrap();
    assert!((geo::Area::unsigned_area(&r.rect) - 20.0).abs() < 1e-3);
    let m = r.rotate_deg.rem_euclid(90.0);
    assert!(m.min(90.0 - m) < 1e-9);
}

#[test]
fn web_mercator_round_trips_near_the_origin() {
    let p: Point<f64> = lat_lng_to_web_merc(0.0, 0.0);
    let back: Point<f64> = web_merc_to_lat_lng(p.x(), p.y());
    assert!(back.x().abs() < 1e-6);
    assert!(back.y().abs() < 1e-6);
}

fn line_strategy() -> impl Strategy<Value = LineString<f64>> {
    prop::collection::vec((-10.0..10.0f64, -10.0..10.0f64), 1..8)
        .prop_map(|pts| pts.into_iter().collect())
}

proptest! {
    #[test]
    fn rotation_by_a_full_turn_is_identity(
        line in line_strategy(),
        cx in -10.0..10.0f64,
        cy in -10.0..10.0f64,
    ) {
        let r = rotate(&line, 360.0, Point::new(cx, cy));
        for (a, b) in line.0.iter().zip(r.0.iter()) {
            prop_assert!((a.x - b.x).abs() < 1e-6);
            prop_assert!((a.y - b.y).abs() < 1e-6);
        }
    }

    #[test]
    fn rotation_composes_with_its_inverse(
        line in line_strategy(),
        deg in -360.0..360.0f64,
        cx in -10.0..10.0f64,
        cy in -10.0..10.0f64,
    ) {
        let center = Point::new(cx, cy);
        let r = rotate(&rotate(&line, deg, center), -deg, center);
        for (a, b) in line.0.iter().zip(r.0.iter()) {
            prop_assert!((a.x - b.x).abs() < 1e-6);
            prop_assert!((a.y - b.y).abs() < 1e-6);
        }
    }

    #[test]
    fn translation_by_zero_is_identity(line in line_strategy()) {
        let t = translate(&line, 0.0, 0.0);
        prop_assert_eq!(line, t);
    }

    #[test]
    fn point_distance_is_symmetric(
        ax in -100.0..100.0f64,
        ay in -100.0..100.0f64,
        bx in -100.0..100.0f64,
        by in -100.0..100.0f64,
    ) {
        let (a, b) = (Point::new(ax, ay), Point::new(bx, by));
        prop_assert_eq!(dist(&a, &b), dist(&b, &a));
    }

    #[test]
    fn frechet_distance_to_itself_is_zero(line in line_strategy(), d in 1.0..4.0f64) {
        prop_assert_eq!(frechet_dist(&line, &line, d), 0.0);
    }

    #[test]
    fn frechet_distance_is_symmetric(
        a in line_strategy(),
        b in line_strategy(),
        d in 1.0..4.0f64,
    ) {
        let fab = frechet_dist(&a, &b, d);
        let fba = frechet_dist(&b, &a, d);
        prop_assert!((fab - fba).abs() < 1e-9);
    }

    #[test]
    fn densify_never_exceeds_the_gap_bound(line in line_strategy(), d in 1.0..4.0f64) {
        let r = densify(&line, d);
        prop_assert_eq!(r.0.first(), line.0.first());
        prop_assert_eq!(r.0.last(), line.0.last());
        for w in r.0.windows(2) {
            let gap = (w[1].x - w[0].x).hypot(w[1].y - w[0].y);
            prop_assert!(gap <= d + 1e-9);
        }
    }
}
