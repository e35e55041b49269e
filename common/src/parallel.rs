//! Parallel processing utilities.

/// Multiplier for number of chunks relative to CPU threads.
const CHUNKS_PER_THREAD: usize = 2;

/// Rows per chunk for row-parallel image processing.
///
/// Splits `height` into roughly `threads * 2` chunks, at least one row each.
#[inline]
pub fn rows_per_chunk(height: usize) -> usize {
    let num_chunks = rayon::current_num_threads() * CHUNKS_PER_THREAD;
    (height / num_chunks).max(1)
}
