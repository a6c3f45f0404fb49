#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Strict UTF-8 validation and ASCII slug generation.
//!
//! ```
//! use slugsmith_engine::{SlugOptions, slugify_str};
//!
//! let opts = SlugOptions::default();
//! assert_eq!(slugify_str("Ünïcödé  Tëxt!", &opts).unwrap(), "unicode-text");
//! ```

pub const SLUGSMITH_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod buffer;
pub mod error;
pub mod options;
pub mod slug;
pub mod utf8;

// Binary support
pub mod config;

// Re-exports for convenience
pub use buffer::SlugBuffer;
pub use error::{ErrorKind, SlugError};
pub use options::SlugOptions;
pub use slug::{required_capacity, slugify, slugify_into, slugify_str};
