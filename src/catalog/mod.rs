mod loader;
mod types;

pub use loader::get_catalog;
pub use types::{Catalog, Product};
