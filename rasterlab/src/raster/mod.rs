//! Scan conversion of line segments and circles into ordered point lists.
//!
//! Four independent algorithms are provided. They are deterministic and
//! side-effect free; the only non-semantic output is the elapsed time stored
//! in [`AlgorithmResult`].

mod circle;
mod line;

#[cfg(test)]
mod tests;

use std::time::{Duration, Instant};

use log::trace;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::error::Result;
use crate::point::Point;

/// Rasterization algorithm selector.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Algorithm {
    /// Slope-intercept stepping along the dominant axis.
    #[strum(to_string = "stepwise")]
    Stepwise,
    /// Symmetric digital differential analyzer.
    #[strum(to_string = "symmetric DDA")]
    SymmetricDda,
    #[default]
    #[strum(to_string = "Bresenham line")]
    BresenhamLine,
    #[strum(to_string = "Bresenham circle")]
    BresenhamCircle,
}

impl Algorithm {
    pub fn is_circle(&self) -> bool {
        matches!(self, Algorithm::BresenhamCircle)
    }
}

/// Points produced by one invocation plus how long it took.
///
/// `points` is in render/traversal order and may contain duplicates (the
/// circle algorithm repeats octant-boundary points).
#[derive(Debug, Clone, PartialEq)]
pub struct AlgorithmResult {
    pub points: Vec<Point>,
    pub elapsed: Duration,
}

impl AlgorithmResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distinct points in first-occurrence order, for consumers that need a set.
    pub fn unique_points(&self) -> Vec<Point> {
        let mut seen = std::collections::HashSet::with_capacity(self.points.len());
        self.points
            .iter()
            .copied()
            .filter(|point| seen.insert(*point))
            .collect()
    }
}

/// Slope-intercept line from `from` to `to`.
///
/// A vertical segment enumerates every `y` at fixed `x`. Otherwise the line
/// steps along `x` when `|dx| >= |dy|` and along `y` when steeper, rounding
/// the dependent coordinate half away from zero. Output always ascends along
/// the stepped axis, so it may run opposite to the endpoint order.
pub fn stepwise_line(from: Point, to: Point) -> AlgorithmResult {
    timed(|| line::stepwise_points(from, to))
}

/// Symmetric DDA from `from` to `to`: `max(|dx|, |dy|) + 1` points in
/// traversal order, coordinates rounded half away from zero.
pub fn dda_line(from: Point, to: Point) -> AlgorithmResult {
    timed(|| line::dda_points(from, to))
}

/// Integer Bresenham line from `from` to `to`. Both endpoints are emitted.
pub fn bresenham_line(from: Point, to: Point) -> AlgorithmResult {
    timed(|| line::bresenham_points(from, to))
}

/// Midpoint circle around `center`.
///
/// # Errors
/// [`Error::InvalidGeometry`](crate::Error::InvalidGeometry) if `radius` is
/// negative or the circle does not fit in `i32` coordinates.
pub fn bresenham_circle(center: Point, radius: i32) -> Result<AlgorithmResult> {
    let start = Instant::now();
    let points = circle::bresenham_circle_points(center, radius)?;
    Ok(AlgorithmResult {
        points,
        elapsed: start.elapsed(),
    })
}

fn timed<F>(f: F) -> AlgorithmResult
where
    F: FnOnce() -> Vec<Point>,
{
    let start = Instant::now();
    let points = f();
    AlgorithmResult {
        points,
        elapsed: start.elapsed(),
    }
}

/// A complete rasterization request: algorithm plus geometry.
///
/// Line algorithms use `start` and `end`; the circle uses `start` as its
/// center and `radius`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterRequest {
    pub algorithm: Algorithm,
    pub start: Point,
    pub end: Point,
    pub radius: i32,
}

impl Default for RasterRequest {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            start: Point::new(0, 0),
            end: Point::new(10, 5),
            radius: 5,
        }
    }
}

impl RasterRequest {
    pub fn line(algorithm: Algorithm, start: Point, end: Point) -> Self {
        Self {
            algorithm,
            start,
            end,
            ..Self::default()
        }
    }

    pub fn circle(center: Point, radius: i32) -> Self {
        Self {
            algorithm: Algorithm::BresenhamCircle,
            start: center,
            end: center,
            radius,
        }
    }

    /// Checks the geometry without producing points.
    pub fn validate(&self) -> Result<()> {
        if self.algorithm.is_circle() {
            circle::check_circle(self.start, self.radius)?;
        }
        Ok(())
    }

    pub fn execute(&self) -> Result<AlgorithmResult> {
        let result = match self.algorithm {
            Algorithm::Stepwise => stepwise_line(self.start, self.end),
            Algorithm::SymmetricDda => dda_line(self.start, self.end),
            Algorithm::BresenhamLine => bresenham_line(self.start, self.end),
            Algorithm::BresenhamCircle => bresenham_circle(self.start, self.radius)?,
        };

        trace!(
            "{} produced {} points in {:?}",
            self.algorithm,
            result.len(),
            result.elapsed
        );

        Ok(result)
    }
}

/// Runs `request`, dispatching on its algorithm.
pub fn rasterize(request: &RasterRequest) -> Result<AlgorithmResult> {
    request.execute()
}
