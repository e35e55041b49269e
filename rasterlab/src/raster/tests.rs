use strum::IntoEnumIterator;

use super::line::round_half_away;
use super::*;
use crate::error::Error;

fn pts(coords: &[(i32, i32)]) -> Vec<Point> {
    coords.iter().map(|&c| Point::from(c)).collect()
}

fn line_algorithms() -> [fn(Point, Point) -> AlgorithmResult; 3] {
    [stepwise_line, dda_line, bresenham_line]
}

// =============================================================================
// Rounding
// =============================================================================

#[test]
fn rounding_is_half_away_from_zero() {
    assert_eq!(round_half_away(0.5), 1);
    assert_eq!(round_half_away(1.5), 2);
    assert_eq!(round_half_away(2.5), 3);
    assert_eq!(round_half_away(-0.5), -1);
    assert_eq!(round_half_away(-2.5), -3);
    assert_eq!(round_half_away(2.4999), 2);
    assert_eq!(round_half_away(-2.4999), -2);
}

// =============================================================================
// Stepwise
// =============================================================================

#[test]
fn stepwise_gentle_slope_rounds_halves_up() {
    // k = 0.5: every odd x lands on .5 and must round away from zero
    let result = stepwise_line(Point::new(0, 0), Point::new(10, 5));
    assert_eq!(
        result.points,
        pts(&[
            (0, 0),
            (1, 1),
            (2, 1),
            (3, 2),
            (4, 2),
            (5, 3),
            (6, 3),
            (7, 4),
            (8, 4),
            (9, 5),
            (10, 5)
        ])
    );
}

#[test]
fn stepwise_negative_halves_round_away_from_zero() {
    let result = stepwise_line(Point::new(0, 0), Point::new(4, -2));
    assert_eq!(
        result.points,
        pts(&[(0, 0), (1, -1), (2, -1), (3, -2), (4, -2)])
    );
}

#[test]
fn stepwise_steep_line_steps_along_y() {
    let result = stepwise_line(Point::new(0, 0), Point::new(2, 5));
    assert_eq!(
        result.points,
        pts(&[(0, 0), (0, 1), (1, 2), (1, 3), (2, 4), (2, 5)])
    );
}

#[test]
fn stepwise_vertical_line_enumerates_every_y() {
    let result = stepwise_line(Point::new(3, 7), Point::new(3, 2));
    assert_eq!(
        result.points,
        pts(&[(3, 2), (3, 3), (3, 4), (3, 5), (3, 6), (3, 7)])
    );
}

#[test]
fn stepwise_output_ascends_regardless_of_endpoint_order() {
    let forward = stepwise_line(Point::new(0, 0), Point::new(10, 5));
    let backward = stepwise_line(Point::new(10, 5), Point::new(0, 0));
    assert_eq!(forward.points, backward.points);
    assert_eq!(backward.points.first(), Some(&Point::new(0, 0)));
}

#[test]
fn stepwise_diagonal_uses_x_as_primary_axis() {
    let result = stepwise_line(Point::new(3, -3), Point::new(0, 0));
    assert_eq!(result.points, pts(&[(0, 0), (1, -1), (2, -2), (3, -3)]));
}

#[test]
fn stepwise_horizontal_line() {
    let result = stepwise_line(Point::new(-2, 4), Point::new(2, 4));
    assert_eq!(result.len(), 5);
    assert!(result.points.iter().all(|p| p.y == 4));
}

// =============================================================================
// Symmetric DDA
// =============================================================================

#[test]
fn dda_single_point() {
    let result = dda_line(Point::new(4, -4), Point::new(4, -4));
    assert_eq!(result.points, pts(&[(4, -4)]));
}

#[test]
fn dda_forward_matches_stepwise_on_gentle_slope() {
    let dda = dda_line(Point::new(0, 0), Point::new(10, 5));
    let stepwise = stepwise_line(Point::new(0, 0), Point::new(10, 5));
    assert_eq!(dda.points, stepwise.points);
}

#[test]
fn dda_traverses_from_start_to_end() {
    let result = dda_line(Point::new(10, 5), Point::new(0, 0));
    assert_eq!(
        result.points,
        pts(&[
            (10, 5),
            (9, 5),
            (8, 4),
            (7, 4),
            (6, 3),
            (5, 3),
            (4, 2),
            (3, 2),
            (2, 1),
            (1, 1),
            (0, 0)
        ])
    );
}

#[test]
fn dda_point_count_is_steps_plus_one() {
    let result = dda_line(Point::new(-7, 2), Point::new(5, -1));
    assert_eq!(result.len(), 13);
}

// =============================================================================
// Bresenham line
// =============================================================================

#[test]
fn bresenham_vertical_line() {
    let result = bresenham_line(Point::new(0, 0), Point::new(0, 5));
    assert_eq!(
        result.points,
        pts(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)])
    );
}

#[test]
fn bresenham_horizontal_line() {
    let result = bresenham_line(Point::new(0, 0), Point::new(10, 0));
    assert_eq!(result.len(), 11);
    assert!(result.points.iter().all(|p| p.y == 0));
    assert_eq!(result.points.first(), Some(&Point::new(0, 0)));
    assert_eq!(result.points.last(), Some(&Point::new(10, 0)));
}

#[test]
fn bresenham_gentle_slope() {
    let result = bresenham_line(Point::new(0, 0), Point::new(10, 5));
    assert_eq!(
        result.points,
        pts(&[
            (0, 0),
            (1, 0),
            (2, 1),
            (3, 1),
            (4, 2),
            (5, 2),
            (6, 3),
            (7, 3),
            (8, 4),
            (9, 4),
            (10, 5)
        ])
    );
}

#[test]
fn bresenham_single_point() {
    let result = bresenham_line(Point::new(2, 2), Point::new(2, 2));
    assert_eq!(result.points, pts(&[(2, 2)]));
}

#[test]
fn bresenham_negative_direction_is_connected() {
    let result = bresenham_line(Point::new(5, 3), Point::new(-4, -6));
    for pair in result.points.windows(2) {
        assert!((pair[0].x - pair[1].x).abs() <= 1);
        assert!((pair[0].y - pair[1].y).abs() <= 1);
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn line_algorithms_diverge_on_intermediate_points() {
    let bresenham = bresenham_line(Point::new(0, 0), Point::new(10, 5));
    let stepwise = stepwise_line(Point::new(0, 0), Point::new(10, 5));
    assert_ne!(bresenham.points, stepwise.points);
    assert_eq!(bresenham.points[1], Point::new(1, 0));
    assert_eq!(stepwise.points[1], Point::new(1, 1));
}

#[test]
fn every_line_algorithm_includes_both_endpoints() {
    let cases = [
        ((0, 0), (0, 5)),
        ((0, 0), (10, 0)),
        ((0, 0), (10, 5)),
        ((10, 5), (0, 0)),
        ((-3, 8), (7, -12)),
        ((4, 4), (4, 4)),
        ((-100, 37), (250, -41)),
        ((0, 0), (-3, 3)),
        ((12, -1), (-1, 12)),
        ((i32::MAX - 3, i32::MIN + 2), (i32::MAX, i32::MIN)),
    ];

    for (a, b) in cases {
        let (a, b) = (Point::from(a), Point::from(b));
        for algorithm in line_algorithms() {
            let result = algorithm(a, b);
            assert!(result.points.contains(&a), "{a} missing for {a}->{b}");
            assert!(result.points.contains(&b), "{b} missing for {a}->{b}");
        }
    }
}

// =============================================================================
// Bresenham circle
// =============================================================================

#[test]
fn circle_radius_five_stays_on_the_ring() {
    let result = bresenham_circle(Point::new(0, 0), 5).unwrap();
    assert!(!result.is_empty());

    for p in &result.points {
        let dist = ((p.x * p.x + p.y * p.y) as f64).sqrt();
        assert_eq!(dist.round() as i32, 5, "{p} at distance {dist}");
        assert!(p.x.abs() <= 5 && p.y.abs() <= 5);
    }
}

#[test]
fn circle_covers_all_eight_octants() {
    let result = bresenham_circle(Point::new(0, 0), 5).unwrap();
    let points = &result.points;

    // first emission block: axis points
    assert!(points.contains(&Point::new(0, 5)));
    assert!(points.contains(&Point::new(0, -5)));
    assert!(points.contains(&Point::new(5, 0)));
    assert!(points.contains(&Point::new(-5, 0)));
    // one step in: every sign/swap combination of (1, 5)
    for (x, y) in [(1, 5), (1, -5), (-1, 5), (-1, -5), (5, 1), (5, -1), (-5, 1), (-5, -1)] {
        assert!(points.contains(&Point::new(x, y)), "missing ({x}, {y})");
    }
}

#[test]
fn circle_exact_sequence_radius_five() {
    let result = bresenham_circle(Point::new(0, 0), 5).unwrap();
    // steps: (0,5) (1,5) (2,5) (3,4) (4,3)
    assert_eq!(result.len(), 5 * 8);
    assert_eq!(
        &result.points[8..16],
        pts(&[
            (1, 5),
            (1, -5),
            (-1, 5),
            (-1, -5),
            (5, 1),
            (5, -1),
            (-5, 1),
            (-5, -1)
        ])
        .as_slice()
    );
    assert_eq!(result.points[32], Point::new(4, 3));
}

#[test]
fn circle_keeps_duplicates() {
    let result = bresenham_circle(Point::new(2, -3), 5).unwrap();
    let unique = result.unique_points();
    assert!(unique.len() < result.len());
    // (cx + 0, cy + 5) is emitted twice in the first block
    let top = Point::new(2, 2);
    assert_eq!(result.points.iter().filter(|&&p| p == top).count(), 2);
}

#[test]
fn circle_is_translated_by_center() {
    let origin = bresenham_circle(Point::new(0, 0), 7).unwrap();
    let moved = bresenham_circle(Point::new(-20, 13), 7).unwrap();
    let shifted: Vec<Point> = origin
        .points
        .iter()
        .map(|p| Point::new(p.x - 20, p.y + 13))
        .collect();
    assert_eq!(moved.points, shifted);
}

#[test]
fn circle_radius_zero_is_the_center_repeated() {
    let result = bresenham_circle(Point::new(3, 4), 0).unwrap();
    assert_eq!(result.len(), 8);
    assert!(result.points.iter().all(|&p| p == Point::new(3, 4)));
    assert_eq!(result.unique_points(), pts(&[(3, 4)]));
}

#[test]
fn circle_negative_radius_is_invalid_geometry() {
    let result = bresenham_circle(Point::new(0, 0), -1);
    assert!(matches!(result, Err(Error::InvalidGeometry(_))));
}

#[test]
fn circle_outside_coordinate_range_is_invalid_geometry() {
    let result = bresenham_circle(Point::new(i32::MAX - 2, 0), 5);
    assert!(matches!(result, Err(Error::InvalidGeometry(_))));
}

// =============================================================================
// Requests and dispatch
// =============================================================================

#[test]
fn algorithm_names() {
    let names: Vec<String> = Algorithm::iter().map(|a| a.to_string()).collect();
    assert_eq!(
        names,
        vec![
            "stepwise",
            "symmetric DDA",
            "Bresenham line",
            "Bresenham circle"
        ]
    );
    assert!(Algorithm::BresenhamCircle.is_circle());
    assert!(!Algorithm::SymmetricDda.is_circle());
}

#[test]
fn default_request_matches_reference_inputs() {
    let request = RasterRequest::default();
    assert_eq!(request.algorithm, Algorithm::BresenhamLine);
    assert_eq!(request.start, Point::new(0, 0));
    assert_eq!(request.end, Point::new(10, 5));
    assert_eq!(request.radius, 5);
}

#[test]
fn rasterize_dispatches_to_each_algorithm() {
    let (a, b) = (Point::new(-2, 1), Point::new(9, 6));

    let cases = [
        (Algorithm::Stepwise, stepwise_line(a, b).points),
        (Algorithm::SymmetricDda, dda_line(a, b).points),
        (Algorithm::BresenhamLine, bresenham_line(a, b).points),
    ];
    for (algorithm, expected) in cases {
        let result = rasterize(&RasterRequest::line(algorithm, a, b)).unwrap();
        assert_eq!(result.points, expected, "{algorithm}");
    }

    let circle = rasterize(&RasterRequest::circle(a, 4)).unwrap();
    assert_eq!(circle.points, bresenham_circle(a, 4).unwrap().points);
}

#[test]
fn request_validation_rejects_negative_radius_only_for_circles() {
    let mut request = RasterRequest::circle(Point::new(0, 0), -2);
    assert!(matches!(request.validate(), Err(Error::InvalidGeometry(_))));
    assert!(matches!(request.execute(), Err(Error::InvalidGeometry(_))));

    request.algorithm = Algorithm::Stepwise;
    assert!(request.validate().is_ok());
    assert!(request.execute().is_ok());
}

#[test]
fn rasterization_is_deterministic() {
    for algorithm in Algorithm::iter() {
        let request = RasterRequest {
            algorithm,
            start: Point::new(-13, 8),
            end: Point::new(21, -30),
            radius: 17,
        };
        let first = request.execute().unwrap();
        let second = request.execute().unwrap();
        assert_eq!(first.points, second.points, "{algorithm}");
    }
}

#[test]
fn request_serde_defaults_missing_fields() {
    let request: RasterRequest =
        serde_json::from_str(r#"{ "algorithm": "BresenhamCircle", "radius": 3 }"#).unwrap();
    assert_eq!(request.algorithm, Algorithm::BresenhamCircle);
    assert_eq!(request.radius, 3);
    assert_eq!(request.start, Point::new(0, 0));
    assert_eq!(request.end, Point::new(10, 5));
}
