//! Driving capability for loading image comments.
//!
//! Callers depend on this port instead of the remote adapter so presentation
//! glue can be exercised with in-memory loaders.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::ImageComment;

define_port_error! {
    /// Classified failures reported by comments loaders.
    ///
    /// The kind is kept for callers and tests; users only ever see one
    /// generic localized message.
    pub enum ImageCommentsLoaderError {
        /// The transport could not complete the exchange.
        Connectivity => "could not reach the comments service",
        /// The exchange completed but did not yield a 200 response with a
        /// valid comments payload.
        InvalidData => "comments service returned invalid data",
    }
}

/// Port for loading the comments of one image.
#[async_trait]
pub trait ImageCommentsLoader: Send + Sync {
    /// Load comments in server order.
    ///
    /// Every call issues an independent request; concurrent calls may finish
    /// in any order.
    async fn load(&self) -> Result<Vec<ImageComment>, ImageCommentsLoaderError>;
}

/// Fixture loader that always returns a scripted result.
#[derive(Debug, Clone)]
pub struct FixtureImageCommentsLoader {
    result: Result<Vec<ImageComment>, ImageCommentsLoaderError>,
}

impl FixtureImageCommentsLoader {
    /// Build a loader that always succeeds with `comments`.
    pub fn succeeding(comments: Vec<ImageComment>) -> Self {
        Self {
            result: Ok(comments),
        }
    }

    /// Build a loader that always fails with `error`.
    pub fn failing(error: ImageCommentsLoaderError) -> Self {
        Self { result: Err(error) }
    }
}

#[async_trait]
impl ImageCommentsLoader for FixtureImageCommentsLoader {
    async fn load(&self) -> Result<Vec<ImageComment>, ImageCommentsLoaderError> {
        self.result.clone()
    }
}
