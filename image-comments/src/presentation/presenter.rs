//! Image comments presenter.
//!
//! Translates load lifecycle events into ordered calls against the three
//! display capabilities. The presenter keeps no state of its own: repeated
//! identical calls re-issue identical display calls. Callers must only
//! finish a load cycle they started; that ordering is not checked here.

use std::sync::Arc;

use crate::domain::ImageComment;
use crate::domain::ports::{
    ImageCommentsErrorView, ImageCommentsLoaderError, ImageCommentsLoadingView,
    ImageCommentsView, Localizer,
};
use crate::presentation::BundledLocalizer;

/// String table holding image comments copy.
pub const IMAGE_COMMENTS_TABLE: &str = "ImageComments";
/// Key of the comments screen title.
pub const IMAGE_COMMENTS_VIEW_TITLE_KEY: &str = "IMAGE_COMMENTS_VIEW_TITLE";
/// Key of the generic load failure message.
pub const IMAGE_COMMENTS_LOAD_ERROR_KEY: &str = "IMAGE_COMMENTS_LOAD_ERROR";

/// Presenter driving comments, loading, and error views.
pub struct ImageCommentsPresenter {
    comments_view: Arc<dyn ImageCommentsView>,
    loading_view: Arc<dyn ImageCommentsLoadingView>,
    error_view: Arc<dyn ImageCommentsErrorView>,
    localizer: Arc<dyn Localizer>,
}

impl ImageCommentsPresenter {
    /// Build a presenter that resolves copy from the bundled default locale.
    pub fn new(
        comments_view: Arc<dyn ImageCommentsView>,
        loading_view: Arc<dyn ImageCommentsLoadingView>,
        error_view: Arc<dyn ImageCommentsErrorView>,
    ) -> Self {
        Self::with_localizer(
            comments_view,
            loading_view,
            error_view,
            Arc::new(BundledLocalizer::default()),
        )
    }

    /// Build a presenter with an injected localization lookup.
    pub fn with_localizer(
        comments_view: Arc<dyn ImageCommentsView>,
        loading_view: Arc<dyn ImageCommentsLoadingView>,
        error_view: Arc<dyn ImageCommentsErrorView>,
        localizer: Arc<dyn Localizer>,
    ) -> Self {
        Self {
            comments_view,
            loading_view,
            error_view,
            localizer,
        }
    }

    /// Localized title for the comments screen.
    ///
    /// ```
    /// use image_comments::presentation::ImageCommentsPresenter;
    ///
    /// assert_eq!(ImageCommentsPresenter::title(), "Comments");
    /// ```
    pub fn title() -> String {
        Self::title_with(&BundledLocalizer::default())
    }

    /// Localized title resolved through `localizer`.
    pub fn title_with(localizer: &dyn Localizer) -> String {
        localizer.localized(IMAGE_COMMENTS_VIEW_TITLE_KEY, IMAGE_COMMENTS_TABLE)
    }

    fn comments_load_error(&self) -> String {
        self.localizer
            .localized(IMAGE_COMMENTS_LOAD_ERROR_KEY, IMAGE_COMMENTS_TABLE)
    }

    /// Clear any shown error, then show the loading indicator.
    pub fn did_start_loading_comments(&self) {
        self.error_view.display(None);
        self.loading_view.display(true);
    }

    /// Replace the shown comments, then hide the loading indicator.
    pub fn did_finish_loading_comments(&self, comments: Vec<ImageComment>) {
        self.comments_view.display(comments);
        self.loading_view.display(false);
    }

    /// Show the generic load error, then hide the loading indicator.
    ///
    /// The error kind never reaches the user and shown comments are left in
    /// place.
    pub fn did_finish_loading_comments_with_error(&self, _error: &ImageCommentsLoaderError) {
        self.error_view.display(Some(self.comments_load_error()));
        self.loading_view.display(false);
    }
}

#[cfg(test)]
mod tests {
    //! Ordering coverage for presenter display calls.

    use super::*;
    use crate::domain::CommentAuthor;
    use chrono::Utc;
    use rstest::{fixture, rstest};
    use std::sync::Mutex;
    use uuid::Uuid;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Message {
        DisplayComments(Vec<ImageComment>),
        DisplayLoading(bool),
        DisplayError(Option<String>),
    }

    /// One spy playing all three view roles so call order is observable.
    #[derive(Default)]
    struct ViewSpy {
        messages: Mutex<Vec<Message>>,
    }

    impl ViewSpy {
        fn messages(&self) -> Vec<Message> {
            self.messages.lock().expect("messages lock").clone()
        }

        fn record(&self, message: Message) {
            self.messages.lock().expect("messages lock").push(message);
        }
    }

    impl ImageCommentsView for ViewSpy {
        fn display(&self, comments: Vec<ImageComment>) {
            self.record(Message::DisplayComments(comments));
        }
    }

    impl ImageCommentsLoadingView for ViewSpy {
        fn display(&self, is_loading: bool) {
            self.record(Message::DisplayLoading(is_loading));
        }
    }

    impl ImageCommentsErrorView for ViewSpy {
        fn display(&self, message: Option<String>) {
            self.record(Message::DisplayError(message));
        }
    }

    #[fixture]
    fn view() -> Arc<ViewSpy> {
        Arc::new(ViewSpy::default())
    }

    fn make_sut(view: &Arc<ViewSpy>) -> ImageCommentsPresenter {
        ImageCommentsPresenter::new(view.clone(), view.clone(), view.clone())
    }

    fn localized(key: &str) -> String {
        BundledLocalizer::default().localized(key, IMAGE_COMMENTS_TABLE)
    }

    #[rstest]
    fn title_is_localized() {
        assert_eq!(
            ImageCommentsPresenter::title(),
            localized(IMAGE_COMMENTS_VIEW_TITLE_KEY)
        );
        assert_ne!(ImageCommentsPresenter::title(), IMAGE_COMMENTS_VIEW_TITLE_KEY);
    }

    #[rstest]
    fn init_does_not_send_messages_to_view(view: Arc<ViewSpy>) {
        let _sut = make_sut(&view);

        assert!(view.messages().is_empty());
    }

    #[rstest]
    fn did_start_loading_clears_error_then_starts_loading(view: Arc<ViewSpy>) {
        let sut = make_sut(&view);

        sut.did_start_loading_comments();

        assert_eq!(
            view.messages(),
            vec![Message::DisplayError(None), Message::DisplayLoading(true)]
        );
    }

    #[rstest]
    fn did_finish_loading_displays_comments_then_stops_loading(view: Arc<ViewSpy>) {
        let sut = make_sut(&view);
        let comments = vec![ImageComment::new(
            Uuid::new_v4(),
            "a message",
            Utc::now(),
            CommentAuthor::new("a username"),
        )];

        sut.did_finish_loading_comments(comments.clone());

        assert_eq!(
            view.messages(),
            vec![
                Message::DisplayComments(comments),
                Message::DisplayLoading(false)
            ]
        );
    }

    #[rstest]
    #[case::connectivity(ImageCommentsLoaderError::connectivity())]
    #[case::invalid_data(ImageCommentsLoaderError::invalid_data())]
    fn did_finish_with_error_displays_localized_message_then_stops_loading(
        view: Arc<ViewSpy>,
        #[case] error: ImageCommentsLoaderError,
    ) {
        let sut = make_sut(&view);

        sut.did_finish_loading_comments_with_error(&error);

        assert_eq!(
            view.messages(),
            vec![
                Message::DisplayError(Some(localized(IMAGE_COMMENTS_LOAD_ERROR_KEY))),
                Message::DisplayLoading(false)
            ]
        );
    }

    #[rstest]
    fn repeated_calls_reissue_identical_messages(view: Arc<ViewSpy>) {
        let sut = make_sut(&view);

        sut.did_start_loading_comments();
        sut.did_start_loading_comments();

        assert_eq!(
            view.messages(),
            vec![
                Message::DisplayError(None),
                Message::DisplayLoading(true),
                Message::DisplayError(None),
                Message::DisplayLoading(true)
            ]
        );
    }

    #[rstest]
    fn injected_localizer_supplies_error_copy(view: Arc<ViewSpy>) {
        let sut = ImageCommentsPresenter::with_localizer(
            view.clone(),
            view.clone(),
            view.clone(),
            Arc::new(BundledLocalizer::new("pt-BR")),
        );

        sut.did_finish_loading_comments_with_error(&ImageCommentsLoaderError::connectivity());

        assert_eq!(
            view.messages().first(),
            Some(&Message::DisplayError(Some(
                "Não foi possível carregar os comentários".to_owned()
            )))
        );
    }
}
