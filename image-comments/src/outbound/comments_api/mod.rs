//! Comments API outbound adapters.
//!
//! This module owns the comments wire contract: the endpoint path, the status
//! gate, the JSON payload shape, and the loader that ties them to an HTTP
//! transport.

mod dto;
mod endpoint;
mod mapper;
mod remote_loader;

pub use endpoint::comments_url;
pub use mapper::{OK_200, map};
pub use remote_loader::RemoteImageCommentsLoader;
