//! Display capabilities implemented by the UI layer.
//!
//! The presenter holds each capability independently. One concrete view may
//! implement all three, but nothing in the presenter relies on that.

/// Capability to render a list of comments.
pub trait ImageCommentsView: Send + Sync {
    /// Replace the displayed comments with `comments`.
    fn display(&self, comments: Vec<crate::domain::ImageComment>);
}

/// Capability to show or hide a loading indicator.
pub trait ImageCommentsLoadingView: Send + Sync {
    /// Show the indicator when `is_loading` is true, hide it otherwise.
    fn display(&self, is_loading: bool);
}

/// Capability to show or clear an error message.
pub trait ImageCommentsErrorView: Send + Sync {
    /// Show `message`, or clear any shown error when it is `None`.
    fn display(&self, message: Option<String>);
}
