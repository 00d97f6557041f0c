//! Comments API endpoint construction.

use url::Url;
use uuid::Uuid;

/// Build the comments URL for `image_id` under `base_url`.
///
/// Path segments are appended to whatever path `base_url` already carries,
/// so deployments behind a path prefix keep that prefix. `base_url` must be
/// able to carry path segments; [`crate::ImageCommentsSettings::base_url`]
/// rejects URLs that cannot.
///
/// ```
/// use image_comments::outbound::comments_api::comments_url;
/// use url::Url;
/// use uuid::Uuid;
///
/// let base = Url::parse("https://base-url.com/feed").expect("valid URL");
/// let url = comments_url(&base, Uuid::nil());
/// assert_eq!(
///     url.as_str(),
///     "https://base-url.com/feed/v1/image/00000000-0000-0000-0000-000000000000/comments"
/// );
/// ```
pub fn comments_url(base_url: &Url, image_id: Uuid) -> Url {
    let image_id = image_id.to_string();
    let mut url = base_url.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .extend(["v1", "image", image_id.as_str(), "comments"]);
    }
    url
}
