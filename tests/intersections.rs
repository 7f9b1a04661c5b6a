#![allow(clippy::unwrap_used)]

use std::f64::consts::{FRAC_PI_2, PI};

use arcseg::{Circle, Line, Point, Shape};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn sorted(mut points: Vec<Point>) -> Vec<Point> {
    points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    points
}

#[test]
fn equal_circles_cross_at_two_points() {
    init_tracing();
    let a = Circle::full(0.0, 0.0, 5.0).unwrap();
    let b = Circle::full(8.0, 0.0, 5.0).unwrap();
    let points = sorted(a.circle_intersection(&b).unwrap());
    assert_eq!(points, vec![Point::new(4.0, -3.0), Point::new(4.0, 3.0)]);
}

#[test]
fn externally_tangent_circles_meet_once() {
    init_tracing();
    let a = Circle::full(0.0, 0.0, 3.0).unwrap();
    let b = Circle::full(7.0, 0.0, 4.0).unwrap();
    assert_eq!(a.circle_intersection(&b), Some(vec![Point::new(3.0, 0.0)]));
    assert_eq!(b.circle_intersection(&a), Some(vec![Point::new(3.0, 0.0)]));
}

#[test]
fn separated_circles_do_not_intersect() {
    init_tracing();
    let a = Circle::full(0.0, 0.0, 1.0).unwrap();
    let b = Circle::full(10.0, 0.0, 1.0).unwrap();
    assert!(a.circle_intersection(&b).is_none());
}

#[test]
fn crossing_diagonals_meet_in_the_middle() {
    init_tracing();
    let a = Line::new(0.0, 0.0, 4.0, 4.0);
    let b = Line::new(0.0, 4.0, 4.0, 0.0);
    assert_eq!(a.segment_intersection(&b), Some(Point::new(2.0, 2.0)));
    assert_eq!(b.segment_intersection(&a), Some(Point::new(2.0, 2.0)));
}

#[test]
fn parallel_segments_do_not_intersect() {
    init_tracing();
    let a = Line::new(0.0, 0.0, 4.0, 0.0);
    let b = Line::new(0.0, 1.0, 4.0, 1.0);
    assert!(a.segment_intersection(&b).is_none());
}

#[test]
fn diameter_segment_hits_both_sides() {
    init_tracing();
    let circle = Circle::full(0.0, 0.0, 2.0).unwrap();
    let line = Line::new(-3.0, 0.0, 3.0, 0.0);
    let points = sorted(circle.line_intersection(&line).unwrap());
    assert_eq!(points, vec![Point::new(-2.0, 0.0), Point::new(2.0, 0.0)]);
}

#[test]
fn boundary_point_outside_arc_range() {
    init_tracing();
    let arc = Circle::new(0.0, 0.0, 2.0, 0.0, FRAC_PI_2).unwrap();
    let full = Circle::full(0.0, 0.0, 2.0).unwrap();
    assert!(!arc.has_point(0.0, -2.0));
    assert!(full.has_point(0.0, -2.0));
}

#[test]
fn segment_hits_outside_arc_range_are_dropped() {
    init_tracing();
    let lower = Circle::new(0.0, 0.0, 2.0, PI, 2.0 * PI).unwrap();
    let line = Line::new(0.0, -3.0, 0.0, 3.0);
    assert_eq!(lower.line_intersection(&line), Some(vec![Point::new(0.0, -2.0)]));
}

#[test]
fn shapes_intersect_through_dispatch() {
    init_tracing();
    let shapes: Vec<Shape> = vec![
        Line::new(-3.0, 0.0, 3.0, 0.0).into(),
        Line::new(0.0, -3.0, 0.0, 3.0).into(),
        Circle::full(0.0, 0.0, 2.0).unwrap().into(),
    ];

    let hits: Vec<usize> = shapes
        .iter()
        .enumerate()
        .flat_map(|(i, a)| shapes[i + 1..].iter().map(move |b| (a, b)))
        .map(|(a, b)| a.intersection(b).map_or(0, |points| points.len()))
        .collect();

    assert_eq!(hits, vec![1, 2, 2]);
}

#[test]
fn angle_round_trips_through_point() {
    init_tracing();
    let arc = Circle::new(1.0, -1.0, 3.0, 1.5 * PI, 2.5 * PI).unwrap();
    let point = arc.point_at_angle(2.0 * PI + 0.3).unwrap();
    let rad = arc.angle_at_point(point.x, point.y).unwrap();
    assert!((rad - (2.0 * PI + 0.3)).abs() < 1e-8, "rad={rad}");
}
