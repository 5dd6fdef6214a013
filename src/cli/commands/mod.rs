mod catalog;
mod render;
mod serve;

use std::path::PathBuf;

use crate::config::{self, Config};
use crate::utils::error::BoxResult;

pub use catalog::handle_catalog_command;
pub use render::{handle_render_command, RenderOutput};
pub use serve::{handle_serve_command, ServeOverrides};

/// Load configuration from the working directory or the given files
fn load_config(config_files: Vec<PathBuf>) -> BoxResult<Config> {
    config::load_config(PathBuf::from("."), Some(config_files))
}
