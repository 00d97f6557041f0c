//! Driven port for the HTTP transport used by remote loaders.
//!
//! The transport only performs the exchange. Interpreting status codes and
//! bodies belongs to the adapter that owns the wire contract.

use async_trait::async_trait;
use url::Url;

use super::define_port_error;

/// Raw response returned by an HTTP transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Build a response from a status code and body bytes.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

define_port_error! {
    /// Errors surfaced when the transport cannot complete an exchange.
    pub enum HttpClientError {
        /// The request could not be sent or the response could not be read.
        Transport {
            /// Transport failure detail.
            message: String,
        } => "http transport failed: {message}",
        /// The exchange exceeded the transport timeout.
        Timeout {
            /// Timeout detail.
            message: String,
        } => "http request timed out: {message}",
    }
}

/// Port for issuing GET requests.
///
/// Implementations complete each call exactly once, on whatever task the
/// transport chooses.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Fetch `url` and return the raw status code and body.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let response = client.get(&url).await?;
    /// assert_eq!(response.status, 200);
    /// # Ok::<(), image_comments::domain::ports::HttpClientError>(())
    /// ```
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError>;
}
