use std::path::PathBuf;

use log::warn;

use crate::catalog::get_catalog;
use crate::utils::error::{BoxResult, PortalError};

/// Handle the catalog command: print the product catalog (or one product) as JSON
pub fn handle_catalog_command(
    dir: Option<PathBuf>,
    product: Option<&str>,
    config_files: Vec<PathBuf>,
) -> BoxResult<()> {
    let root = match dir {
        Some(dir) => dir,
        None => super::load_config(config_files)?.content_dir,
    };

    let catalog = get_catalog(&root);
    if catalog.is_empty() {
        warn!("No products found under {}", root.display());
    }

    let json = match product {
        Some(path) => {
            let product = catalog.find(path).ok_or_else(|| {
                PortalError::Manifest(format!("No product '{}' under {}", path, root.display()))
            })?;
            serde_json::to_string_pretty(product)?
        }
        None => serde_json::to_string_pretty(&catalog)?,
    };

    println!("{}", json);
    Ok(())
}
