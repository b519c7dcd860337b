//! Transport seam between the session and the HTTP wire.

use std::future::Future;

use dianti_proto::{ApiRequest, StateResponse};
use thiserror::Error;

/// Endpoint of the public simulation service.
pub const DEFAULT_API_URL: &str = "https://dianti.secondspace.dev/api";

/// A fatal exchange failure.
///
/// Everything in this enum ends the session: the driver cannot continue
/// without a valid snapshot and the protocol has no retry. Advisory strings
/// inside a successful response are not transport errors; the session
/// surfaces those separately.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP request itself failed (connect, TLS, timeout, ...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("server returned HTTP {status}")]
    Status {
        /// The offending status code.
        status: u16,
    },

    /// The response body was not a valid state document.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The transport has nothing left to answer with. Produced by scripted
    /// test doubles that ran dry; the production transport never returns
    /// it.
    #[error("transport exhausted: {reason}")]
    Exhausted {
        /// What ran out.
        reason: String,
    },
}

/// One request/response exchange with the simulation service.
///
/// This is the narrow seam that lets tests substitute a scripted transport
/// for the HTTP client: [`crate::Session`] is generic over it and never
/// sees reqwest. The protocol is strictly one-outstanding-request-at-a-time,
/// so implementations need no internal ordering.
pub trait Transport: Send + Sync {
    /// POST one payload and parse the resulting state document.
    fn exchange(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<StateResponse, TransportError>> + Send;
}

/// Production transport: JSON over HTTP POST.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTransport {
    /// Point at the given endpoint (usually [`DEFAULT_API_URL`]).
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), endpoint: endpoint.into() }
    }

    /// The endpoint this transport posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl Transport for HttpTransport {
    async fn exchange(&self, request: ApiRequest) -> Result<StateResponse, TransportError> {
        let response = self.client.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { status: status.as_u16() });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
