use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use lmx_core::{ErrorInfo, LmxError};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use crate::config::{FigureConfig, ImageFormat};

/// Something that can paint itself onto a prepared drawing area.
pub trait Chart {
    /// Draws the chart. The area is already cleared to white.
    fn draw<DB: DrawingBackend>(&self, area: &DrawingArea<DB, Shift>) -> Result<(), LmxError>;
}

/// One output image.
///
/// The drawing surface only exists inside [`Figure::save`]: it is opened for
/// the configured format, painted, flushed to disk and dropped before the
/// call returns.
#[derive(Debug, Clone)]
pub struct Figure<'a> {
    path: PathBuf,
    config: &'a FigureConfig,
}

impl<'a> Figure<'a> {
    /// Figure written to `<out_dir>/<stem>.<ext>`.
    pub fn new(out_dir: &Path, stem: &str, config: &'a FigureConfig) -> Self {
        let path = out_dir.join(format!("{stem}.{}", config.format.extension()));
        Self { path, config }
    }

    /// Destination of the image.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Renders `chart` and writes the image, returning its path.
    pub fn save<C: Chart>(self, chart: &C) -> Result<PathBuf, LmxError> {
        let size = (self.config.width, self.config.height);
        match self.config.format {
            ImageFormat::Png => {
                let area = BitMapBackend::new(&self.path, size).into_drawing_area();
                paint(&area, chart)?;
            }
            ImageFormat::Svg => {
                let area = SVGBackend::new(&self.path, size).into_drawing_area();
                paint(&area, chart)?;
            }
        }
        debug!(path = %self.path.display(), "figure written");
        Ok(self.path)
    }
}

fn paint<DB: DrawingBackend, C: Chart>(
    area: &DrawingArea<DB, Shift>,
    chart: &C,
) -> Result<(), LmxError> {
    area.fill(&WHITE).map_err(draw_err)?;
    chart.draw(area)?;
    area.present().map_err(draw_err)
}

/// Creates `out_dir` and its parents; an existing directory is fine.
pub fn create_output_dir(out_dir: &Path) -> Result<(), LmxError> {
    fs::create_dir_all(out_dir).map_err(|err| LmxError::io("R000", out_dir, &err))
}

pub(crate) fn draw_err<E: Display>(err: E) -> LmxError {
    LmxError::Render(ErrorInfo::new("R001", err.to_string()))
}
