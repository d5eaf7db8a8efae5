//! CLI command implementations

pub mod cache;
pub mod config;
pub mod search;

pub use cache::execute as cache;
pub use config::execute as config;
pub use search::execute as search;
