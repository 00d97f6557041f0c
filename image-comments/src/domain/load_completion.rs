//! Single-shot delivery of load results to a weakly held owner.
//!
//! Each call spawns its own task and captures its own completion, so
//! overlapping loads never share a result slot. The owner is held through a
//! [`Weak`] handle and upgraded only once the loader resolves; when the owner
//! has been released by then, the result is dropped without invoking the
//! completion.

use std::sync::{Arc, Weak};

use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::ImageComment;
use crate::domain::ports::{ImageCommentsLoader, ImageCommentsLoaderError};

/// Outcome of one comments load.
pub type LoadResult = Result<Vec<ImageComment>, ImageCommentsLoaderError>;

/// Run one load on the current tokio runtime and deliver its result once.
///
/// `completion` receives the upgraded owner together with the result. It is
/// never called when `owner` no longer points at a live value by the time the
/// loader resolves. Dropping the returned handle detaches the task; it does
/// not cancel delivery.
///
/// # Examples
///
/// ```
/// use std::sync::{Arc, Mutex};
///
/// use image_comments::domain::ports::FixtureImageCommentsLoader;
/// use image_comments::domain::spawn_load;
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let owner = Arc::new(Mutex::new(None));
/// let loader = Arc::new(FixtureImageCommentsLoader::succeeding(Vec::new()));
/// spawn_load(loader, Arc::downgrade(&owner), |slot, result| {
///     *slot.lock().expect("slot lock") = Some(result);
/// })
/// .await
/// .expect("load task");
/// assert_eq!(*owner.lock().expect("slot lock"), Some(Ok(Vec::new())));
/// # });
/// ```
///
/// # Panics
///
/// Panics when called outside a tokio runtime.
pub fn spawn_load<O, F>(
    loader: Arc<dyn ImageCommentsLoader>,
    owner: Weak<O>,
    completion: F,
) -> JoinHandle<()>
where
    O: Send + Sync + 'static,
    F: FnOnce(&O, LoadResult) + Send + 'static,
{
    tokio::spawn(async move {
        let result = loader.load().await;
        let Some(owner) = owner.upgrade() else {
            debug!(
                succeeded = result.is_ok(),
                "comments load finished after its owner was released; dropping result"
            );
            return;
        };
        completion(&owner, result);
    })
}

#[cfg(test)]
mod tests {
    //! Delivery and suppression coverage for `spawn_load`.

    use super::*;
    use crate::domain::CommentAuthor;
    use crate::domain::ports::FixtureImageCommentsLoader;
    use async_trait::async_trait;
    use chrono::Utc;
    use rstest::rstest;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;
    use uuid::Uuid;

    #[derive(Default)]
    struct Owner {
        deliveries: Mutex<Vec<LoadResult>>,
    }

    struct GatedLoader {
        release: Arc<Notify>,
        result: LoadResult,
    }

    #[async_trait]
    impl ImageCommentsLoader for GatedLoader {
        async fn load(&self) -> LoadResult {
            self.release.notified().await;
            self.result.clone()
        }
    }

    #[rstest]
    #[tokio::test]
    async fn delivers_result_to_live_owner_once() {
        let comment = ImageComment::new(
            Uuid::new_v4(),
            "a message",
            Utc::now(),
            CommentAuthor::new("a username"),
        );
        let owner = Arc::new(Owner::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);

        spawn_load(
            Arc::new(FixtureImageCommentsLoader::succeeding(vec![comment.clone()])),
            Arc::downgrade(&owner),
            move |owner: &Owner, result| {
                counted.fetch_add(1, Ordering::SeqCst);
                owner.deliveries.lock().expect("deliveries").push(result);
            },
        )
        .await
        .expect("load task");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            *owner.deliveries.lock().expect("deliveries"),
            vec![Ok(vec![comment])]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn drops_result_when_owner_is_released_first() {
        let release = Arc::new(Notify::new());
        let loader = Arc::new(GatedLoader {
            release: Arc::clone(&release),
            result: Err(ImageCommentsLoaderError::connectivity()),
        });
        let owner = Arc::new(Owner::default());
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);

        let handle = spawn_load(loader, Arc::downgrade(&owner), move |_: &Owner, _| {
            counted.fetch_add(1, Ordering::SeqCst);
        });
        drop(owner);
        release.notify_one();
        handle.await.expect("load task");

        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }
}
