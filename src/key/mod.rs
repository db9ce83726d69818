//! Plugin key normalization and validation.
//!
//! A plugin key uniquely names a generated plugin in a registry or manifest.
//! Keys are non-empty and made only of `a`-`z` and `0`-`9`.
//!
//! # Operations
//!
//! - [`make_valid`]: best-effort correction of free-form input
//! - [`validate`]: strict check with no correction
//!
//! Both are pure and safe to call from any thread. [`PluginKey`] wraps a
//! checked value and [`KeySource`] picks between an explicit key and a
//! derived one.
//!
//! ```
//! use pluginkey::{make_valid, validate};
//!
//! let key = make_valid(" aaa bbb ccc 111 ").unwrap();
//! assert_eq!(key, "aaabbbccc111");
//! assert!(validate(key.as_str()).is_ok());
//! assert!(validate(" aaa bbb ccc 111 ").is_err());
//! ```

mod error;
mod normalize;
mod resolve;
mod types;

pub use error::{KeyError, KeyErrorKind, KeyResult};
pub use normalize::{is_key_char, is_valid, make_valid, validate};
pub use resolve::{KeyOrigin, KeySource};
pub use types::PluginKey;
