//! Remote image comments loading and presentation pipeline.
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] holds the comment model, the driven ports, and the
//!   single-shot completion helper used to deliver load results.
//! - [`outbound`] implements the transport and comments API adapters.
//! - [`presentation`] translates load lifecycle events into display calls
//!   against abstract view capabilities.
//! - [`ImageCommentsSettings`] loads client settings via OrthoConfig.
//!
//! # Example
//!
//! ```
//! use image_comments::outbound::comments_api::map;
//!
//! let comments = map(br#"{"items":[]}"#, 200).expect("empty payload decodes");
//! assert!(comments.is_empty());
//! ```

mod config;
pub mod domain;
pub mod outbound;
pub mod presentation;

pub use config::{ImageCommentsSettings, SettingsError};
