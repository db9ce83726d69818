//! # Pluginkey
//!
//! Plugin key normalization and validation for plugin packaging toolchains.
//!
//! Given a human-supplied identifier (a project or assembly name), Pluginkey
//! produces a canonical plugin key suitable as a unique identifier in a
//! plugin registry or manifest, or rejects input that cannot be made valid.
//!
//! ## Quick Start
//!
//! ```
//! use pluginkey::{make_valid, validate, PluginKey};
//!
//! assert_eq!(make_valid("Bar.Analyzers").unwrap(), "baranalyzers");
//! assert!(validate("Foo.Analyzers").is_err());
//!
//! let key: PluginKey = "fooanalyzers".parse().unwrap();
//! assert_eq!(key.as_str(), "fooanalyzers");
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod core;
pub mod key;

pub use key::{
    is_key_char, is_valid, make_valid, validate, KeyError, KeyErrorKind, KeyOrigin, KeyResult,
    KeySource, PluginKey,
};

// Re-export commonly used types
pub use crate::core::{Config, LogConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
