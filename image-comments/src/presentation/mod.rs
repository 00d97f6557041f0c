//! Presentation layer for image comments.
//!
//! Purpose: turn load lifecycle events into display instructions without
//! depending on any concrete UI toolkit.
//!
//! Public surface:
//! - `ImageCommentsPresenter` — stateless lifecycle-to-display translator.
//! - `ImageCommentsPresentationAdapter` — loader-to-presenter glue.
//! - `BundledLocalizer` — string tables compiled into the crate.
//! - `compose_image_comments` — wires one view into a ready scene.

mod adapter;
mod composer;
mod localization;
mod presenter;

pub use adapter::ImageCommentsPresentationAdapter;
pub use composer::{ImageCommentsScene, compose_image_comments};
pub use localization::{BundledLocalizer, DEFAULT_LOCALE, bundled_locales};
pub use presenter::{
    IMAGE_COMMENTS_LOAD_ERROR_KEY, IMAGE_COMMENTS_TABLE, IMAGE_COMMENTS_VIEW_TITLE_KEY,
    ImageCommentsPresenter,
};
