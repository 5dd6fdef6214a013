pub mod app;
pub mod core;
pub mod handlers;
pub mod middleware;
pub mod types;

pub use core::serve;
