pub mod hamming_weight;
pub mod replacement_times;

use std::error::Error;
use std::path::Path;

use lmx_plot::RenderConfig;

pub(crate) fn load_render_config(path: Option<&Path>) -> Result<RenderConfig, Box<dyn Error>> {
    match path {
        Some(path) => Ok(RenderConfig::load(path)?),
        None => Ok(RenderConfig::default()),
    }
}
