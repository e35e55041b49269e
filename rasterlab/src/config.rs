use std::path::Path;

use anyhow::Context;
use common::SerdeFormat;
use serde::{Deserialize, Serialize};

use crate::ops::Filter;
use crate::raster::RasterRequest;

/// Rasterization request and filter selection, loadable from YAML or JSON.
///
/// Missing fields take their defaults, so an empty document is a valid config.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub raster: RasterRequest,
    pub filter: Filter,
}

impl Config {
    /// Reads a config file; the format follows the file extension.
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let format = format_of(path)?;
        let payload = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;

        Self::deserialize(&payload, format)
            .with_context(|| format!("Failed to load config {}", path.display()))
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let payload = self.serialize(format_of(path)?)?;
        std::fs::write(path, payload)
            .with_context(|| format!("Failed to write config {}", path.display()))
    }

    pub fn serialize(&self, format: SerdeFormat) -> anyhow::Result<String> {
        common::serde::serialize(self, format)
    }

    /// Parses and validates a config.
    pub fn deserialize(serialized: &str, format: SerdeFormat) -> anyhow::Result<Self> {
        let config: Self = common::serde::deserialize(serialized, format)?;
        config.validate()?;
        Ok(config)
    }

    /// Runs every parameter check without touching a buffer.
    pub fn validate(&self) -> crate::Result<()> {
        self.raster.validate()?;
        self.filter.validate()
    }
}

fn format_of(path: &Path) -> anyhow::Result<SerdeFormat> {
    let file_name = path.to_string_lossy();
    Ok(SerdeFormat::from_file_name(&file_name)?)
}
