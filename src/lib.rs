// Tue Jan 13 2026 - Alex

pub mod config;
pub mod types;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use types::{Resolved, TypeError, TypeRegistry};
