//! Remote comments loader backed by an injected HTTP transport.
//!
//! The loader owns only the request target and the transport handle. Status
//! and payload interpretation is delegated to [`super::map`].

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

use super::mapper::map;
use crate::domain::ImageComment;
use crate::domain::ports::{HttpClient, ImageCommentsLoader, ImageCommentsLoaderError};

/// Loads image comments from one comments API endpoint.
pub struct RemoteImageCommentsLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
}

impl RemoteImageCommentsLoader {
    /// Build a loader for `url`. No request is issued until [`load`] runs.
    ///
    /// [`load`]: ImageCommentsLoader::load
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self { url, client }
    }

    /// Return the endpoint this loader requests.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ImageCommentsLoader for RemoteImageCommentsLoader {
    async fn load(&self) -> Result<Vec<ImageComment>, ImageCommentsLoaderError> {
        let response = self.client.get(&self.url).await.map_err(|error| {
            warn!(url = %self.url, error = %error, "comments request failed");
            ImageCommentsLoaderError::connectivity()
        })?;

        let comments = map(&response.body, response.status)?;
        debug!(url = %self.url, count = comments.len(), "comments loaded");
        Ok(comments)
    }
}
