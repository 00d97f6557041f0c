//! Status gate and payload decoding for comments API responses.

use tracing::debug;

use super::dto::CommentsRootDto;
use crate::domain::ImageComment;
use crate::domain::ports::ImageCommentsLoaderError;

/// The only status code whose body is trusted as a comments payload.
pub const OK_200: u16 = 200;

/// Decode a comments API response into domain comments.
///
/// Any status other than [`OK_200`] fails with
/// [`ImageCommentsLoaderError::InvalidData`] without looking at `body`. For a
/// 200 response, malformed JSON, missing or mistyped fields, unparsable
/// UUIDs, and unparsable ISO-8601 timestamps all fail with the same kind.
/// Comments keep the order of the `items` array.
///
/// # Examples
///
/// ```
/// use image_comments::domain::ports::ImageCommentsLoaderError;
/// use image_comments::outbound::comments_api::map;
///
/// assert_eq!(map(br#"{"items":[]}"#, 200), Ok(Vec::new()));
/// assert_eq!(
///     map(br#"{"items":[]}"#, 400),
///     Err(ImageCommentsLoaderError::InvalidData)
/// );
/// ```
///
/// # Errors
///
/// Returns [`ImageCommentsLoaderError::InvalidData`] for non-200 statuses and
/// undecodable bodies.
pub fn map(body: &[u8], status: u16) -> Result<Vec<ImageComment>, ImageCommentsLoaderError> {
    if status != OK_200 {
        debug!(status, "rejecting comments response with non-200 status");
        return Err(ImageCommentsLoaderError::invalid_data());
    }

    let root: CommentsRootDto = serde_json::from_slice(body).map_err(|error| {
        debug!(error = %error, "comments payload failed to decode");
        ImageCommentsLoaderError::invalid_data()
    })?;
    Ok(root.into_domain_comments())
}
