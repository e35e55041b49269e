// Error handling
pub use crate::error::{Error, Result};

// Geometry and buffers
pub use crate::pixel_buffer::{PixelBuffer, Rgba, ALPHA, CHANNELS};
pub use crate::point::Point;

// Rasterization
pub use crate::raster::{
    bresenham_circle, bresenham_line, dda_line, rasterize, stepwise_line, Algorithm,
    AlgorithmResult, RasterRequest,
};

// Filters
pub use crate::ops::{Bernsen, Filter, FilterKind, Intensity, Niblack, Smoothing};

// Configuration
pub use crate::config::Config;

// Background execution
pub use crate::worker::{JobId, JobOutput, JobResult, Worker, WorkerMessage};

// Logging
pub use common::log_setup::setup_logging;
