mod filter;
mod smoothing;
mod threshold;


use rayon::prelude::*;

use crate::pixel_buffer::PixelBuffer;

pub use filter::{Filter, FilterKind};
pub use smoothing::Smoothing;
pub use threshold::{Bernsen, Intensity, Niblack};

/// Copies `input` and lets `process_row(y, out_row)` rewrite every row at
/// least `margin` rows away from the top and bottom edge, in parallel.
///
/// `process_row` is responsible for leaving the first and last `margin`
/// pixels of the row untouched. If no pixel has a full window the copy is
/// returned as is.
pub(crate) fn map_interior_rows<F>(input: &PixelBuffer, margin: usize, process_row: F) -> PixelBuffer
where
    F: Fn(usize, &mut [u8]) + Sync + Send,
{
    let (width, height) = input.dimensions();
    if !has_interior(width, height, margin) {
        return input.clone();
    }

    let row_bytes = input.row_bytes();
    let rows_per_chunk = common::parallel::rows_per_chunk(height);
    let mut output = input.bytes().to_vec();

    output
        .par_chunks_mut(row_bytes * rows_per_chunk)
        .enumerate()
        .for_each(|(chunk_idx, chunk)| {
            let y_start = chunk_idx * rows_per_chunk;

            for (local_y, row) in chunk.chunks_exact_mut(row_bytes).enumerate() {
                let y = y_start + local_y;
                if y < margin || y >= height - margin {
                    continue;
                }
                process_row(y, row);
            }
        });

    input.with_same_dimensions(output)
}

/// True if at least one pixel lies `margin` or more pixels away from every edge.
#[inline]
pub(crate) fn has_interior(width: usize, height: usize, margin: usize) -> bool {
    width > 2 * margin && height > 2 * margin
}
