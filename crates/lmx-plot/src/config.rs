use std::fs;
use std::path::Path;

use lmx_core::{ErrorInfo, LmxError};
use lmx_stat::DEFAULT_IQR_FACTOR;
use serde::{Deserialize, Serialize};

/// Output image encoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Raster PNG via the bitmap backend.
    #[default]
    Png,
    /// Vector SVG.
    Svg,
}

impl ImageFormat {
    /// File extension without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

/// Size and encoding of every figure written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FigureConfig {
    /// Width in pixels.
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height in pixels.
    #[serde(default = "default_height")]
    pub height: u32,
    /// Output encoding.
    #[serde(default)]
    pub format: ImageFormat,
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    600
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            format: ImageFormat::default(),
        }
    }
}

/// YAML-configurable rendering parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Figure geometry and encoding.
    #[serde(default)]
    pub figure: FigureConfig,
    /// Maximum number of kneading samples charted and analysed.
    #[serde(default = "default_kneading_limit")]
    pub kneading_limit: usize,
    /// Fence multiplier for box plots and outlier counts.
    #[serde(default = "default_iqr_factor")]
    pub iqr_factor: f64,
}

fn default_kneading_limit() -> usize {
    100_000
}

fn default_iqr_factor() -> f64 {
    DEFAULT_IQR_FACTOR
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            figure: FigureConfig::default(),
            kneading_limit: default_kneading_limit(),
            iqr_factor: default_iqr_factor(),
        }
    }
}

impl RenderConfig {
    /// Loads and validates a YAML configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LmxError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| LmxError::io("C000", path, &err))?;
        let config: RenderConfig = serde_yaml::from_str(&raw).map_err(|err| {
            LmxError::Config(ErrorInfo::new("C001", err.to_string()).with_path(path))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations no figure can be drawn with.
    pub fn validate(&self) -> Result<(), LmxError> {
        if self.figure.width == 0 || self.figure.height == 0 {
            return Err(LmxError::Config(
                ErrorInfo::new("C002", "figure dimensions must be non-zero")
                    .with_context("width", self.figure.width.to_string())
                    .with_context("height", self.figure.height.to_string()),
            ));
        }
        if !self.iqr_factor.is_finite() || self.iqr_factor < 0.0 {
            return Err(LmxError::Config(
                ErrorInfo::new("C003", "iqr_factor must be a non-negative number")
                    .with_context("iqr_factor", self.iqr_factor.to_string())
                    .with_hint("the conventional value is 1.5"),
            ));
        }
        Ok(())
    }
}
