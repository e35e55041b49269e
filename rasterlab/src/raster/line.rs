//! Line scan conversion: slope-intercept stepping, symmetric DDA and the
//! integer Bresenham (midpoint) algorithm.
//!
//! Coordinates are `i32`; all intermediate arithmetic is done in `i64`/`f64`
//! so no coordinate pair can overflow.

use crate::point::Point;

/// Rounds half away from zero (`2.5 -> 3`, `-2.5 -> -3`).
///
/// The result always lies between two `i32` endpoints, so the cast is lossless.
#[inline]
pub(crate) fn round_half_away(value: f64) -> i32 {
    value.round() as i32
}

/// Slope-intercept line. Output ascends along the primary axis regardless of
/// endpoint order.
pub(crate) fn stepwise_points(from: Point, to: Point) -> Vec<Point> {
    let (x1, y1) = (from.x as i64, from.y as i64);
    let (x2, y2) = (to.x as i64, to.y as i64);
    let dx = x2 - x1;
    let dy = y2 - y1;

    if dx == 0 {
        return (y1.min(y2)..=y1.max(y2))
            .map(|y| Point::new(from.x, y as i32))
            .collect();
    }

    let k = dy as f64 / dx as f64;
    let c = y1 as f64 - k * x1 as f64;

    if dx.abs() >= dy.abs() {
        (x1.min(x2)..=x1.max(x2))
            .map(|x| Point::new(x as i32, round_half_away(k * x as f64 + c)))
            .collect()
    } else {
        // |dy| > |dx| > 0, so k is finite and non-zero
        (y1.min(y2)..=y1.max(y2))
            .map(|y| Point::new(round_half_away((y as f64 - c) / k), y as i32))
            .collect()
    }
}

/// Symmetric DDA, walking from `from` to `to` with a floating accumulator.
pub(crate) fn dda_points(from: Point, to: Point) -> Vec<Point> {
    let dx = to.x as i64 - from.x as i64;
    let dy = to.y as i64 - from.y as i64;
    let steps = dx.abs().max(dy.abs());

    if steps == 0 {
        return vec![from];
    }

    let x_increment = dx as f64 / steps as f64;
    let y_increment = dy as f64 / steps as f64;

    let mut x = from.x as f64;
    let mut y = from.y as f64;
    let mut points = Vec::with_capacity(steps as usize + 1);

    for _ in 0..=steps {
        points.push(Point::new(round_half_away(x), round_half_away(y)));
        x += x_increment;
        y += y_increment;
    }

    points
}

/// Integer Bresenham line in traversal order from `from` to `to`, both
/// endpoints included.
pub(crate) fn bresenham_points(from: Point, to: Point) -> Vec<Point> {
    let (mut x, mut y) = (from.x as i64, from.y as i64);
    let (x2, y2) = (to.x as i64, to.y as i64);

    let dx = (x2 - x).abs();
    let dy = (y2 - y).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let sy = if y < y2 { 1 } else { -1 };

    let mut err = dx - dy;
    let mut points = Vec::with_capacity(dx.max(dy) as usize + 1);

    loop {
        points.push(Point::new(x as i32, y as i32));

        if x == x2 && y == y2 {
            break;
        }

        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }

    points
}
