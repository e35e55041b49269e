//! Midpoint (Bresenham) circle.

use crate::error::{Error, Result};
use crate::point::Point;

/// Emits the eight octant-symmetric points for every step of the midpoint
/// walk. Points on the axes and on the diagonal repeat; nothing is removed.
pub(crate) fn bresenham_circle_points(center: Point, radius: i32) -> Result<Vec<Point>> {
    check_circle(center, radius)?;

    let (cx, cy, r) = (center.x as i64, center.y as i64, radius as i64);

    let mut x: i64 = 0;
    let mut y: i64 = r;
    let mut e: i64 = 3 - 2 * r;

    // ~r/sqrt(2) steps plus the initial one, 8 points each
    let mut points = Vec::with_capacity((radius as usize * 3 / 4 + 2) * 8);
    push_octants(&mut points, cx, cy, x, y);

    while x < y {
        if e >= 0 {
            e += 4 * (x - y) + 10;
            x += 1;
            y -= 1;
        } else {
            e += 4 * x + 6;
            x += 1;
        }
        push_octants(&mut points, cx, cy, x, y);
    }

    Ok(points)
}

/// Rejects a negative radius and circles reaching outside `i32` coordinates.
pub(crate) fn check_circle(center: Point, radius: i32) -> Result<()> {
    if radius < 0 {
        return Err(Error::InvalidGeometry(format!(
            "radius must be non-negative, got {}",
            radius
        )));
    }

    let (cx, cy, r) = (center.x as i64, center.y as i64, radius as i64);
    let fits = |v: i64| (i32::MIN as i64..=i32::MAX as i64).contains(&v);
    if !(fits(cx - r) && fits(cx + r) && fits(cy - r) && fits(cy + r)) {
        return Err(Error::InvalidGeometry(format!(
            "circle at {} with radius {} exceeds the coordinate range",
            center, radius
        )));
    }

    Ok(())
}

#[inline]
fn push_octants(points: &mut Vec<Point>, cx: i64, cy: i64, x: i64, y: i64) {
    let p = |px: i64, py: i64| Point::new(px as i32, py as i32);

    points.push(p(cx + x, cy + y));
    points.push(p(cx + x, cy - y));
    points.push(p(cx - x, cy + y));
    points.push(p(cx - x, cy - y));
    points.push(p(cx + y, cy + x));
    points.push(p(cx + y, cy - x));
    points.push(p(cx - y, cy + x));
    points.push(p(cx - y, cy - x));
}
