//! Reqwest-backed HTTP transport adapter.
//!
//! This adapter owns transport details only: the request timeout, outbound
//! headers, and mapping of reqwest failures into port errors. Status codes
//! are passed through untouched.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::domain::ports::{HttpClient, HttpClientError, HttpResponse};

const DEFAULT_USER_AGENT: &str = "image-comments-client/0.1";

/// `HttpClient` implementation that performs one GET per call.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Build a transport using a reqwest client with an explicit timeout.
    ///
    /// ```
    /// use std::time::Duration;
    ///
    /// use image_comments::outbound::http::ReqwestHttpClient;
    ///
    /// let client = ReqwestHttpClient::new(Duration::from_secs(10));
    /// assert!(client.is_ok());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError> {
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_transport_error)?;
        debug!(url = %url, status, bytes = body.len(), "http exchange completed");
        Ok(HttpResponse::new(status, body.to_vec()))
    }
}

fn map_transport_error(error: reqwest::Error) -> HttpClientError {
    if error.is_timeout() {
        HttpClientError::timeout(error.to_string())
    } else {
        HttpClientError::transport(error.to_string())
    }
}
