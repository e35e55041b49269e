use std::ops::{Index, IndexMut};

use rayon::prelude::*;

/// Row-major 2-D plane of `T` with fixed dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer2<T> {
    pixels: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Buffer2<T> {
    pub fn new(width: usize, height: usize, pixels: Vec<T>) -> Self {
        assert_eq!(
            pixels.len(),
            width * height,
            "pixels length must equal width * height"
        );
        Self {
            pixels,
            width,
            height,
        }
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        debug_assert!(y < self.height);
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[T] {
        &self.pixels
    }
}

impl<T: Default + Clone> Buffer2<T> {
    pub fn new_default(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![T::default(); width * height],
            width,
            height,
        }
    }
}

impl<T: Default + Clone + Send> Buffer2<T> {
    /// Builds a plane row by row in parallel. `fill_row` receives the row
    /// index and the row slice to write.
    pub fn from_rows_par<F>(width: usize, height: usize, fill_row: F) -> Self
    where
        F: Fn(usize, &mut [T]) + Sync + Send,
    {
        let mut buffer = Self::new_default(width, height);
        if width == 0 {
            return buffer;
        }

        buffer
            .pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| fill_row(y, row));

        buffer
    }
}

impl<T> Index<(usize, usize)> for Buffer2<T> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.pixels[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Buffer2<T> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        &mut self.pixels[y * self.width + x]
    }
}
