//! Fetch the comments of one image and print them to the terminal.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::env;
use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use image_comments::ImageCommentsSettings;
use image_comments::domain::ImageComment;
use image_comments::domain::ports::{
    ImageCommentsErrorView, ImageCommentsLoadingView, ImageCommentsView,
};
use image_comments::outbound::comments_api::RemoteImageCommentsLoader;
use image_comments::outbound::http::ReqwestHttpClient;
use image_comments::presentation::{BundledLocalizer, compose_image_comments};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// Terminal view playing all three display roles.
#[derive(Default)]
struct ConsoleView {
    failed: AtomicBool,
}

impl ImageCommentsView for ConsoleView {
    fn display(&self, comments: Vec<ImageComment>) {
        if comments.is_empty() {
            println!("(no comments)");
        }
        for comment in comments {
            println!(
                "{} [{}] {}",
                comment.author.username,
                comment.created_at.to_rfc3339(),
                comment.message
            );
        }
    }
}

impl ImageCommentsLoadingView for ConsoleView {
    fn display(&self, is_loading: bool) {
        debug!(is_loading, "loading indicator changed");
    }
}

impl ImageCommentsErrorView for ConsoleView {
    fn display(&self, message: Option<String>) {
        if let Some(message) = message {
            self.failed.store(true, Ordering::SeqCst);
            eprintln!("{message}");
        }
    }
}

fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let settings = ImageCommentsSettings::load_from_iter(env::args_os())
        .map_err(|error| io::Error::other(format!("load settings: {error}")))?;
    let url = settings.comments_url().map_err(io::Error::other)?;

    let client = ReqwestHttpClient::new(settings.timeout())
        .map_err(|error| io::Error::other(format!("create HTTP client: {error}")))?;
    let loader = Arc::new(RemoteImageCommentsLoader::new(url, Arc::new(client)));
    let view = Arc::new(ConsoleView::default());
    let scene = compose_image_comments(
        loader,
        view.clone(),
        Arc::new(BundledLocalizer::new(settings.locale())),
    );

    println!("{}", scene.title);
    scene
        .adapter
        .did_request_comments_reload()
        .await
        .map_err(|error| io::Error::other(format!("comments load task failed: {error}")))?;

    if view.failed.load(Ordering::SeqCst) {
        return Err(io::Error::other("comments could not be loaded"));
    }
    Ok(())
}
