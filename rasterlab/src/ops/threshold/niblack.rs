use log::debug;
use serde::{Deserialize, Serialize};

use super::{intensity_plane, write_binary, Intensity, SummedArea, BLACK, WHITE};
use crate::error::{Error, Result};
use crate::ops::{has_interior, map_interior_rows};
use crate::pixel_buffer::PixelBuffer;

/// Niblack mean / standard-deviation thresholding.
///
/// Intensity is the truncated channel average. The threshold is
/// `mean + k * std` over the window, with the population variance
/// `E[x²] - mean²` clamped at zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Niblack {
    pub radius: u32,
    pub k: f64,
}

impl Default for Niblack {
    fn default() -> Self {
        Self {
            radius: 15,
            k: -0.2,
        }
    }
}

impl Niblack {
    pub fn new(radius: u32, k: f64) -> Self {
        Self { radius, k }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.k.is_finite() {
            return Err(Error::InvalidParameter(format!(
                "k must be finite, got {}",
                self.k
            )));
        }
        Ok(())
    }

    pub fn apply(&self, input: &PixelBuffer) -> Result<PixelBuffer> {
        self.validate()?;
        debug!("niblack on {}: radius {}, k {}", input, self.radius, self.k);

        let (width, height) = input.dimensions();
        let r = self.radius as usize;
        if !has_interior(width, height, r) {
            return Ok(input.clone());
        }

        let gray = intensity_plane(input, Intensity::ChannelAverage);
        let tables = SummedArea::new(&gray);
        let side = 2 * r + 1;
        let count = (side * side) as f64;
        let k = self.k;

        let output = map_interior_rows(input, r, |y, out_row| {
            for x in r..width - r {
                let (sum, sum_sq) = tables.window(x - r, y - r, x + r + 1, y + r + 1);

                let mean = sum as f64 / count;
                let variance = sum_sq as f64 / count - mean * mean;
                let std_dev = variance.max(0.0).sqrt();
                let threshold = mean + k * std_dev;

                let value = if gray[(x, y)] as f64 >= threshold {
                    WHITE
                } else {
                    BLACK
                };
                write_binary(out_row, x, value);
            }
        });

        Ok(output)
    }
}
