//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **comments_api**: decodes the remote comments payload and implements
//!   the `ImageCommentsLoader` port on top of any `HttpClient`.
//! - **http**: reqwest-backed `HttpClient` transport.
//!
//! Adapters are thin translators between wire representations and domain
//! types. They contain no presentation logic.

pub mod comments_api;
pub mod http;
