//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod http_client;
mod image_comments_loader;
mod localizer;
mod views;

pub use http_client::{HttpClient, HttpClientError, HttpResponse};
pub use image_comments_loader::{
    FixtureImageCommentsLoader, ImageCommentsLoader, ImageCommentsLoaderError,
};
pub use localizer::Localizer;
pub use views::{ImageCommentsErrorView, ImageCommentsLoadingView, ImageCommentsView};
