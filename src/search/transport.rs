//! HTTP transport abstraction
//!
//! Searches and thumbnail downloads both go through a `Transport`, so the
//! network can be swapped out without touching the callers.

use crate::error::{SnapError, SnapResult};
use async_trait::async_trait;
use tracing::debug;
use ureq::Agent;
use url::Url;

/// Abstract HTTP GET interface
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one GET and return the full response body, which may be empty.
    ///
    /// The HTTP status does not decide success: an error status still hands
    /// back its body. Only network-layer failures (DNS, refused connection,
    /// TLS, truncated body) are reported as `SnapError::Transport`.
    async fn get(&self, url: &Url) -> SnapResult<Vec<u8>>;
}

/// Describe a request target for logs and errors.
///
/// Drops the query string, which carries the API credential.
pub fn describe_target(url: &Url) -> String {
    format!("{}{}", url.origin().ascii_serialization(), url.path())
}

/// `Transport` backed by a blocking `ureq` agent on the tokio blocking pool
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// Create a transport with ureq's default settings, except that HTTP
    /// error statuses are returned as ordinary responses
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn get(&self, url: &Url) -> SnapResult<Vec<u8>> {
        let agent = self.agent.clone();
        let url = url.clone();

        tokio::task::spawn_blocking(move || fetch_blocking(&agent, &url))
            .await
            .map_err(|e| SnapError::Internal(format!("transport task failed: {e}")))?
    }
}

fn fetch_blocking(agent: &Agent, url: &Url) -> SnapResult<Vec<u8>> {
    let target = describe_target(url);
    debug!("GET {}", target);

    let mut response = agent
        .get(url.as_str())
        .call()
        .map_err(|e| SnapError::transport(target.clone(), e))?;

    let body = response
        .body_mut()
        .read_to_vec()
        .map_err(|e| SnapError::transport(target.clone(), e))?;

    debug!("GET {} -> {} ({} bytes)", target, response.status(), body.len());
    Ok(body)
}
