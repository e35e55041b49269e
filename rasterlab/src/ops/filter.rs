use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use super::{Bernsen, Niblack, Smoothing};
use crate::error::Result;
use crate::pixel_buffer::PixelBuffer;

/// Filter selector without parameters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
pub enum FilterKind {
    #[default]
    Smoothing,
    Bernsen,
    Niblack,
}

/// A filter together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Filter {
    Smoothing(Smoothing),
    Bernsen(Bernsen),
    Niblack(Niblack),
}

impl Default for Filter {
    fn default() -> Self {
        Filter::from(FilterKind::default())
    }
}

impl From<FilterKind> for Filter {
    /// The filter of `kind` with default parameters.
    fn from(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Smoothing => Filter::Smoothing(Smoothing::default()),
            FilterKind::Bernsen => Filter::Bernsen(Bernsen::default()),
            FilterKind::Niblack => Filter::Niblack(Niblack::default()),
        }
    }
}

impl From<Smoothing> for Filter {
    fn from(value: Smoothing) -> Self {
        Filter::Smoothing(value)
    }
}

impl From<Bernsen> for Filter {
    fn from(value: Bernsen) -> Self {
        Filter::Bernsen(value)
    }
}

impl From<Niblack> for Filter {
    fn from(value: Niblack) -> Self {
        Filter::Niblack(value)
    }
}

impl Filter {
    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Smoothing(_) => FilterKind::Smoothing,
            Filter::Bernsen(_) => FilterKind::Bernsen,
            Filter::Niblack(_) => FilterKind::Niblack,
        }
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Filter::Smoothing(params) => params.validate(),
            Filter::Bernsen(params) => params.validate(),
            Filter::Niblack(params) => params.validate(),
        }
    }

    /// Runs the filter on `input` and returns a new buffer of the same size.
    /// `input` is never modified.
    pub fn apply(&self, input: &PixelBuffer) -> Result<PixelBuffer> {
        match self {
            Filter::Smoothing(params) => params.apply(input),
            Filter::Bernsen(params) => params.apply(input),
            Filter::Niblack(params) => params.apply(input),
        }
    }
}
