//! Image search against the remote API
//!
//! - `transport`: HTTP seam shared by searches and thumbnail downloads
//! - `client`: builds the request URL and decodes the result list
//! - `model`: the typed records handed to callers

pub mod client;
pub mod model;
pub mod transport;

pub use client::{SearchClient, PER_PAGE};
pub use model::ImageRecord;
pub use transport::{Transport, UreqTransport};
