use common::Buffer2;
use log::debug;
use serde::{Deserialize, Serialize};

use super::{intensity_plane, write_binary, Intensity, BLACK, WHITE};
use crate::error::{Error, Result};
use crate::ops::{has_interior, map_interior_rows};
use crate::pixel_buffer::PixelBuffer;

const MAX_EPSILON: i32 = u8::MAX as i32;

/// Bernsen local contrast thresholding.
///
/// For every interior pixel the window minimum and maximum give a contrast
/// `max - min` and a threshold `(min + max) / 2`. Windows with contrast at
/// most `epsilon` are treated as flat and classified by the threshold alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Bernsen {
    pub radius: u32,
    pub epsilon: i32,
    pub intensity: Intensity,
}

impl Default for Bernsen {
    fn default() -> Self {
        Self {
            radius: 15,
            epsilon: 15,
            intensity: Intensity::default(),
        }
    }
}

impl Bernsen {
    pub fn new(radius: u32, epsilon: i32) -> Self {
        Self {
            radius,
            epsilon,
            ..Self::default()
        }
    }

    pub fn intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0..=MAX_EPSILON).contains(&self.epsilon) {
            return Err(Error::InvalidParameter(format!(
                "contrast limit must be in 0..={MAX_EPSILON}, got {}",
                self.epsilon
            )));
        }
        Ok(())
    }

    pub fn apply(&self, input: &PixelBuffer) -> Result<PixelBuffer> {
        self.validate()?;
        debug!(
            "bernsen on {}: radius {}, epsilon {}, {}",
            input, self.radius, self.epsilon, self.intensity
        );

        let (width, height) = input.dimensions();
        let r = self.radius as usize;
        if !has_interior(width, height, r) {
            return Ok(input.clone());
        }

        let plane = intensity_plane(input, self.intensity);
        let row_extrema = horizontal_extrema(&plane, r);
        let epsilon = self.epsilon as u16;

        let output = map_interior_rows(input, r, |y, out_row| {
            for x in r..width - r {
                let (mut min, mut max) = row_extrema[(x, y - r)];
                for wy in y - r + 1..=y + r {
                    let (row_min, row_max) = row_extrema[(x, wy)];
                    min = min.min(row_min);
                    max = max.max(row_max);
                }

                let contrast = (max - min) as u16;
                let threshold = (min as u16 + max as u16) / 2;
                let value = if contrast <= epsilon {
                    if threshold >= 128 {
                        WHITE
                    } else {
                        BLACK
                    }
                } else if plane[(x, y)] as u16 >= threshold {
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

/// Min and max over the horizontal span `x - r..=x + r` of every row.
/// Columns closer than `r` to the side edges are left at `(0, 0)`.
fn horizontal_extrema(plane: &Buffer2<u8>, r: usize) -> Buffer2<(u8, u8)> {
    let width = plane.width();

    Buffer2::from_rows_par(width, plane.height(), |y, out_row| {
        let row = plane.row(y);
        for x in r..width - r {
            let span = &row[x - r..=x + r];
            let min = span.iter().copied().min().unwrap_or(0);
            let max = span.iter().copied().max().unwrap_or(0);
            out_row[x] = (min, max);
        }
    })
}
