//! Rasterlab - scan conversion and local image filters.
//!
//! - Line rasterization (stepwise, symmetric DDA, Bresenham) and the
//!   Bresenham midpoint circle, producing ordered point lists
//! - 3×3 weighted smoothing, Bernsen and Niblack thresholding over RGBA8
//!   pixel buffers
//! - YAML/JSON configuration and a background [`Worker`]
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rasterlab::{Filter, Niblack, PixelBuffer, Point, bresenham_line};
//!
//! let line = bresenham_line(Point::new(0, 0), Point::new(10, 5));
//! println!("{} points in {:?}", line.len(), line.elapsed);
//!
//! let input = PixelBuffer::new_filled(64, 64, [128, 128, 128, 255])?;
//! let output = Filter::from(Niblack::default()).apply(&input)?;
//! ```

mod config;
mod error;
mod ops;
mod pixel_buffer;
mod point;
mod raster;
mod worker;

pub mod prelude;

pub use prelude::*;
