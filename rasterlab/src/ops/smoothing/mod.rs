
use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ops::map_interior_rows;
use crate::pixel_buffer::{PixelBuffer, ALPHA, CHANNELS};

const MIN_WEIGHT: u32 = 1;
const MAX_WEIGHT: u32 = 4;

/// 3×3 weighted smoothing.
///
/// The kernel has `1` in the corners, `weight` on the edge midpoints and
/// `weight²` in the center, normalized by `(2 + weight)²`. The 1-pixel
/// border and the alpha channel are copied unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Smoothing {
    pub weight: u32,
}

impl Default for Smoothing {
    fn default() -> Self {
        Self { weight: 2 }
    }
}

impl Smoothing {
    pub fn new(weight: u32) -> Self {
        Self { weight }
    }

    pub fn validate(&self) -> Result<()> {
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&self.weight) {
            return Err(Error::InvalidParameter(format!(
                "smoothing weight must be in {MIN_WEIGHT}..={MAX_WEIGHT}, got {}",
                self.weight
            )));
        }
        Ok(())
    }

    /// Kernel rows, top to bottom.
    pub fn kernel(&self) -> [[u32; 3]; 3] {
        let b = self.weight;
        [[1, b, 1], [b, b * b, b], [1, b, 1]]
    }

    /// Sum of all kernel weights.
    pub fn normalization(&self) -> u32 {
        (2 + self.weight) * (2 + self.weight)
    }

    pub fn apply(&self, input: &PixelBuffer) -> Result<PixelBuffer> {
        self.validate()?;
        debug!("smoothing {} with weight {}", input, self.weight);

        let width = input.width();
        let kernel = self.kernel();
        let normalization = self.normalization();

        let output = map_interior_rows(input, 1, |y, out_row| {
            let rows = [input.row(y - 1), input.row(y), input.row(y + 1)];

            for x in 1..width - 1 {
                let mut sums = [0u32; ALPHA];
                for (kernel_row, row) in kernel.iter().zip(rows.iter()) {
                    for (kx, &w) in kernel_row.iter().enumerate() {
                        let offset = (x + kx - 1) * CHANNELS;
                        for (c, sum) in sums.iter_mut().enumerate() {
                            *sum += row[offset + c] as u32 * w;
                        }
                    }
                }

                let offset = x * CHANNELS;
                for (c, sum) in sums.iter().enumerate() {
                    out_row[offset + c] = divide_rounded(*sum, normalization).min(255) as u8;
                }
            }
        });

        Ok(output)
    }
}

/// Integer division rounding to nearest, halves up. Matches half-away-from-zero
/// for non-negative sums.
#[inline]
fn divide_rounded(sum: u32, divisor: u32) -> u32 {
    (sum + divisor / 2) / divisor
}
