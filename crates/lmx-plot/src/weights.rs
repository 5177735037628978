use std::path::{Path, PathBuf};

use lmx_core::{LmxError, WeightSeriesRecord};
use tracing::debug;

use crate::charts::LineChart;
use crate::config::RenderConfig;
use crate::figure::{create_output_dir, Figure};

/// Writes one line chart per record into `out_dir`, named after the binary.
///
/// `on_saved` is called with each image path as soon as it is written. The
/// first failure aborts the run.
pub fn render_weight_series<F>(
    records: &[WeightSeriesRecord],
    out_dir: &Path,
    config: &RenderConfig,
    mut on_saved: F,
) -> Result<Vec<PathBuf>, LmxError>
where
    F: FnMut(&Path),
{
    create_output_dir(out_dir)?;
    let mut written = Vec::with_capacity(records.len());
    for record in records {
        let path = Figure::new(out_dir, &record.binary, &config.figure)
            .save(&LineChart { record })?;
        on_saved(&path);
        written.push(path);
    }
    debug!(images = written.len(), dir = %out_dir.display(), "weight series rendered");
    Ok(written)
}
