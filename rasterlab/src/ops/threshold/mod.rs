//! Local adaptive binarization.
//!
//! Both methods compare a pixel's intensity against a threshold computed
//! from a square `(2r+1)×(2r+1)` window around it and write pure black or
//! white into R, G and B. Pixels closer than `r` to any edge and the alpha
//! channel are copied from the input.

mod bernsen;
mod niblack;


use common::Buffer2;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::pixel_buffer::{PixelBuffer, ALPHA, CHANNELS};

pub use bernsen::Bernsen;
pub use niblack::Niblack;

pub(crate) const WHITE: u8 = 255;
pub(crate) const BLACK: u8 = 0;

/// How a pixel's RGB triple is reduced to one intensity value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Intensity {
    /// Red channel only.
    #[default]
    #[strum(to_string = "red channel")]
    RedChannel,
    /// `(R + G + B) / 3`, truncated.
    #[strum(to_string = "channel average")]
    ChannelAverage,
}

impl Intensity {
    #[inline]
    pub fn of(&self, rgba: &[u8]) -> u8 {
        match self {
            Intensity::RedChannel => rgba[0],
            Intensity::ChannelAverage => {
                ((rgba[0] as u16 + rgba[1] as u16 + rgba[2] as u16) / 3) as u8
            }
        }
    }
}

/// Per-pixel intensity of `input` as a single-channel plane.
pub(crate) fn intensity_plane(input: &PixelBuffer, intensity: Intensity) -> Buffer2<u8> {
    Buffer2::from_rows_par(input.width(), input.height(), |y, out_row| {
        for (value, rgba) in out_row
            .iter_mut()
            .zip(input.row(y).chunks_exact(CHANNELS))
        {
            *value = intensity.of(rgba);
        }
    })
}

/// Writes `value` into the color channels of pixel `x` of `row`.
#[inline]
pub(crate) fn write_binary(row: &mut [u8], x: usize, value: u8) {
    let offset = x * CHANNELS;
    row[offset..offset + ALPHA].fill(value);
}

/// Inclusive-prefix summed-area tables of a plane and of its squares.
///
/// Both tables are `(width + 1) × (height + 1)` with a zero first row and
/// column, so the sum over any rectangle is four lookups.
pub(crate) struct SummedArea {
    sum: Buffer2<u64>,
    sum_sq: Buffer2<u64>,
}

impl SummedArea {
    pub(crate) fn new(plane: &Buffer2<u8>) -> Self {
        let width = plane.width() + 1;
        let height = plane.height() + 1;
        let mut sum = Buffer2::<u64>::new_default(width, height);
        let mut sum_sq = Buffer2::<u64>::new_default(width, height);

        for y in 0..plane.height() {
            let mut row_sum = 0u64;
            let mut row_sum_sq = 0u64;
            for (x, &value) in plane.row(y).iter().enumerate() {
                let value = value as u64;
                row_sum += value;
                row_sum_sq += value * value;
                sum[(x + 1, y + 1)] = sum[(x + 1, y)] + row_sum;
                sum_sq[(x + 1, y + 1)] = sum_sq[(x + 1, y)] + row_sum_sq;
            }
        }

        Self { sum, sum_sq }
    }

    /// Sum and sum of squares over `x0..x1` × `y0..y1` (exclusive ends).
    #[inline]
    pub(crate) fn window(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> (u64, u64) {
        (
            rect_sum(&self.sum, x0, y0, x1, y1),
            rect_sum(&self.sum_sq, x0, y0, x1, y1),
        )
    }
}

#[inline]
fn rect_sum(table: &Buffer2<u64>, x0: usize, y0: usize, x1: usize, y1: usize) -> u64 {
    (table[(x1, y1)] + table[(x0, y0)]) - (table[(x0, y1)] + table[(x1, y0)])
}
