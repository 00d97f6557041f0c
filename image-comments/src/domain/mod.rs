//! Domain primitives and driven ports.
//!
//! Purpose: define the immutable comment model consumed by the presenter and
//! the ports that keep loading logic independent of transport and UI
//! toolkits.
//!
//! Public surface:
//! - `ImageComment` / `CommentAuthor` — decoded comment values.
//! - `spawn_load` — single-shot completion delivery guarded by a weak owner.
//! - `ports` — transport, loader, display, and localization capabilities.

pub mod comment;
pub mod load_completion;
pub mod ports;

pub use self::comment::{CommentAuthor, ImageComment};
pub use self::load_completion::{LoadResult, spawn_load};
