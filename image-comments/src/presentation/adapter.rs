//! Glue between a comments loader and the presenter.
//!
//! The adapter exclusively owns the presenter. In-flight loads hold only a
//! weak handle to the adapter, so releasing it silences every pending
//! completion.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::domain::ports::ImageCommentsLoader;
use crate::domain::spawn_load;
use crate::presentation::ImageCommentsPresenter;

/// Routes reload requests through a loader and back into the presenter.
pub struct ImageCommentsPresentationAdapter {
    loader: Arc<dyn ImageCommentsLoader>,
    presenter: ImageCommentsPresenter,
}

impl ImageCommentsPresentationAdapter {
    /// Build an adapter owning `presenter`.
    pub fn new(loader: Arc<dyn ImageCommentsLoader>, presenter: ImageCommentsPresenter) -> Self {
        Self { loader, presenter }
    }

    /// Start one load cycle.
    ///
    /// Signals the start to the presenter immediately, then forwards the
    /// load outcome once it arrives, provided the adapter is still alive.
    /// Each call issues an independent load.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn did_request_comments_reload(self: &Arc<Self>) -> JoinHandle<()> {
        self.presenter.did_start_loading_comments();

        spawn_load(
            Arc::clone(&self.loader),
            Arc::downgrade(self),
            |adapter: &Self, result| match result {
                Ok(comments) => adapter.presenter.did_finish_loading_comments(comments),
                Err(error) => adapter
                    .presenter
                    .did_finish_loading_comments_with_error(&error),
            },
        )
    }
}
