//! Plugin key normalization and strict validation.
//!
//! A plugin key is a non-empty string made only of lowercase ASCII letters
//! and digits. [`make_valid`] derives such a key from free-form input
//! (project or assembly names); [`validate`] checks a value that is already
//! expected to be canonical and never corrects it.

use super::{KeyError, KeyResult};

/// Derive a plugin key from a free-form candidate.
///
/// Every character that is not an ASCII letter or digit is removed and the
/// remaining letters are lowercased. Passing `None` models an absent value.
///
/// The result always passes [`validate`], and applying `make_valid` to it
/// again returns it unchanged.
///
/// # Examples
///
/// ```
/// use pluginkey::make_valid;
///
/// assert_eq!(make_valid("Bar.Analyzers").unwrap(), "baranalyzers");
/// assert!(make_valid("....").is_err());
/// assert!(make_valid(None).is_err());
/// ```
pub fn make_valid<'a>(candidate: impl Into<Option<&'a str>>) -> KeyResult<String> {
    let candidate = require(candidate.into())?;

    let key: String = candidate
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if key.is_empty() {
        tracing::trace!(candidate, "Candidate has no ASCII letters or digits");
        return Err(KeyError::NoAlphanumeric { candidate: candidate.to_string() });
    }

    if key != candidate {
        tracing::debug!(candidate, key = %key, "Corrected plugin key");
    }

    Ok(key)
}

/// Check that a candidate is already a canonical plugin key.
///
/// Unlike [`make_valid`], nothing is corrected: uppercase letters,
/// whitespace, punctuation and any non-ASCII character are rejected.
///
/// ```
/// use pluginkey::validate;
///
/// assert!(validate("fooanalyzers").is_ok());
/// assert!(validate("Foo.Analyzers").is_err());
/// ```
pub fn validate<'a>(candidate: impl Into<Option<&'a str>>) -> KeyResult<()> {
    let key = require(candidate.into())?;

    match find_disallowed(key) {
        Some((index, character)) => {
            tracing::trace!(key, ?character, index, "Rejected plugin key");
            Err(KeyError::DisallowedCharacter { key: key.to_string(), character, index })
        }
        None => Ok(()),
    }
}

/// Predicate form of [`validate`]; absent input is not valid.
pub fn is_valid<'a>(candidate: impl Into<Option<&'a str>>) -> bool {
    candidate.into().is_some_and(|key| !key.is_empty() && find_disallowed(key).is_none())
}

/// Whether `c` may appear in a plugin key.
pub const fn is_key_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

fn require(candidate: Option<&str>) -> KeyResult<&str> {
    match candidate {
        None => Err(KeyError::Missing),
        Some("") => Err(KeyError::Empty),
        Some(candidate) => Ok(candidate),
    }
}

/// First disallowed character and its char index.
fn find_disallowed(key: &str) -> Option<(usize, char)> {
    key.chars().enumerate().find(|&(_, c)| !is_key_char(c))
}
