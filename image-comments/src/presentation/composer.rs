//! Composition of one comments screen from a loader and a view.

use std::sync::Arc;

use crate::domain::ports::{
    ImageCommentsErrorView, ImageCommentsLoader, ImageCommentsLoadingView, ImageCommentsView,
    Localizer,
};
use crate::presentation::{ImageCommentsPresentationAdapter, ImageCommentsPresenter};

/// Wired comments screen returned by [`compose_image_comments`].
pub struct ImageCommentsScene {
    /// Localized screen title.
    pub title: String,
    /// Adapter that reloads comments into the composed view.
    pub adapter: Arc<ImageCommentsPresentationAdapter>,
}

/// Wire `view` into a presenter and adapter backed by `loader`.
///
/// `view` plays all three display roles. No load starts until the caller
/// requests a reload on the returned adapter.
pub fn compose_image_comments<V>(
    loader: Arc<dyn ImageCommentsLoader>,
    view: Arc<V>,
    localizer: Arc<dyn Localizer>,
) -> ImageCommentsScene
where
    V: ImageCommentsView + ImageCommentsLoadingView + ImageCommentsErrorView + 'static,
{
    let title = ImageCommentsPresenter::title_with(localizer.as_ref());
    let comments_view: Arc<dyn ImageCommentsView> = view.clone();
    let loading_view: Arc<dyn ImageCommentsLoadingView> = view.clone();
    let error_view: Arc<dyn ImageCommentsErrorView> = view;
    let presenter =
        ImageCommentsPresenter::with_localizer(comments_view, loading_view, error_view, localizer);

    ImageCommentsScene {
        title,
        adapter: Arc::new(ImageCommentsPresentationAdapter::new(loader, presenter)),
    }
}
