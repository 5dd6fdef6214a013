use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single navigation link declared by a product manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub url: String,
    pub label: String,
}

/// Contents of a `docs.yaml` product manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub navigation: Vec<NavItem>,

    /// Any other manifest keys, passed through to the catalog consumer
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// A product discovered under the content root
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(flatten)]
    pub manifest: Manifest,

    /// Directory of the manifest relative to the scanned root, "." for the root itself
    pub path: String,

    /// Absolute or root-joined directory of the manifest
    pub full_path: PathBuf,
}

/// Every product found by one scan, in walk order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by its relative path
    pub fn find(&self, path: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.path == path)
    }
}
