use std::fs;
use std::path::Path;

use log::{debug, error, info};
use walkdir::WalkDir;

use crate::catalog::types::{Catalog, Manifest, Product};
use crate::utils::error::{BoxResult, PortalError};
use crate::utils::path::relative_display;

/// File name that marks a directory as a product
pub const MANIFEST_FILE: &str = "docs.yaml";

/// Scan `root` recursively for product manifests.
///
/// A missing root yields an empty catalog. Manifests that cannot be read or
/// parsed are logged and skipped; they never fail the whole scan.
pub fn get_catalog<P: AsRef<Path>>(root: P) -> Catalog {
    let root = root.as_ref();
    let mut catalog = Catalog::default();

    if !root.is_dir() {
        debug!("Content root {} does not exist, catalog is empty", root.display());
        return catalog;
    }

    let walker = WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                error!("Error walking {}: {}", root.display(), e);
                continue;
            }
        };

        if !entry.file_type().is_file() || entry.file_name() != MANIFEST_FILE {
            continue;
        }

        let manifest_path = entry.path();
        let dir = manifest_path.parent().unwrap_or(root);

        match load_manifest(manifest_path) {
            Ok(manifest) => {
                debug!("Loaded product '{}' from {}", manifest.title, manifest_path.display());
                catalog.products.push(Product {
                    manifest,
                    path: relative_display(dir, root),
                    full_path: dir.to_path_buf(),
                });
            }
            Err(e) => error!("Error parsing {}: {}", manifest_path.display(), e),
        }
    }

    info!("Found {} product(s) under {}", catalog.products.len(), root.display());
    catalog
}

/// Read and parse a single manifest file
pub fn load_manifest(path: &Path) -> BoxResult<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        PortalError::Manifest(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let manifest = serde_yaml::from_str(&content).map_err(|e| {
        PortalError::Manifest(format!("Failed to parse YAML ({}): {}", path.display(), e))
    })?;

    Ok(manifest)
}
