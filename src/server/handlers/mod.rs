mod api;
mod static_files;

pub use api::{api_not_found, navigation, page};
pub use static_files::with_frontend;
