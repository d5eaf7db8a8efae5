//! snapsearch - keyword image search with a local thumbnail cache
//!
//! Searches a remote image API, exposes the ordered results to a
//! presentation layer, and stores each result's thumbnail on disk.

pub mod cache;
pub mod cli;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod search;
pub mod ui;

pub use cache::ImageCache;
pub use coordinator::{SearchCoordinator, SearchState};
pub use error::{SnapError, SnapResult};
pub use search::{ImageRecord, SearchClient};
