//! Error types for snapsearch
//!
//! All modules use `SnapResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for snapsearch operations
pub type SnapResult<T> = Result<T, SnapError>;

/// Boxed underlying cause of a transport failure
pub type TransportSource = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The four ways a search request can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorKind {
    InvalidRequest,
    TransportError,
    EmptyResponse,
    DecodeError,
}

/// All errors that can occur in snapsearch
#[derive(Error, Debug)]
pub enum SnapError {
    // Search errors
    #[error("Invalid search request: {0}")]
    InvalidRequest(String),

    #[error("Request to {target} failed: {source}")]
    Transport {
        target: String,
        #[source]
        source: TransportSource,
    },

    #[error("Empty response from {0}")]
    EmptyResponse(String),

    #[error("Failed to decode search response")]
    Decode(#[source] serde_json::Error),

    #[error("Search query is empty")]
    EmptyQuery,

    #[error("No API client id configured")]
    MissingClientId,

    // Cache errors
    #[error("No cache directory available on this platform")]
    CacheDirUnavailable,

    #[error("Invalid cache id: {0:?}")]
    InvalidCacheId(String),

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl SnapError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a transport error for a request target
    pub fn transport(target: impl Into<String>, source: impl Into<TransportSource>) -> Self {
        Self::Transport {
            target: target.into(),
            source: source.into(),
        }
    }

    /// Classify search failures; `None` for everything else
    pub fn kind(&self) -> Option<SearchErrorKind> {
        match self {
            Self::InvalidRequest(_) => Some(SearchErrorKind::InvalidRequest),
            Self::Transport { .. } => Some(SearchErrorKind::TransportError),
            Self::EmptyResponse(_) => Some(SearchErrorKind::EmptyResponse),
            Self::Decode(_) => Some(SearchErrorKind::DecodeError),
            _ => None,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingClientId => Some(
                "Run: snapsearch config set api.client_id <KEY> (or export SNAPSEARCH_CLIENT_ID)",
            ),
            Self::EmptyQuery => Some("Pass at least one search keyword"),
            Self::Transport { .. } => Some("Check your network connection and API key"),
            Self::CacheDirUnavailable => Some("Run: snapsearch config set cache.dir <PATH>"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SnapError::EmptyResponse("https://api.test/search".to_string());
        assert_eq!(err.to_string(), "Empty response from https://api.test/search");
    }

    #[test]
    fn error_hint() {
        let err = SnapError::MissingClientId;
        assert!(err.hint().unwrap().contains("SNAPSEARCH_CLIENT_ID"));
        assert!(SnapError::Internal("x".to_string()).hint().is_none());
    }

    #[test]
    fn transport_keeps_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = SnapError::transport("https://api.test/search", cause);
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "refused");
    }

    #[test]
    fn decode_error_is_opaque() {
        let cause = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SnapError::Decode(cause);
        assert_eq!(err.to_string(), "Failed to decode search response");
    }

    #[test]
    fn error_kind() {
        assert_eq!(
            SnapError::InvalidRequest("bad".to_string()).kind(),
            Some(SearchErrorKind::InvalidRequest)
        );
        assert_eq!(
            SnapError::EmptyResponse("x".to_string()).kind(),
            Some(SearchErrorKind::EmptyResponse)
        );
        assert_eq!(SnapError::EmptyQuery.kind(), None);
    }
}
