//! Plugin key error types.

use thiserror::Error;

/// Result type for plugin key operations.
pub type KeyResult<T> = Result<T, KeyError>;

/// Broad category of a [`KeyError`].
///
/// Every key failure is a usage problem with the supplied value, so callers
/// should surface it as a configuration error rather than an internal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyErrorKind {
    /// The supplied argument cannot be used as (or turned into) a key.
    InvalidArgument,
}

/// Errors that can occur while deriving or checking a plugin key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// No candidate was supplied at all.
    #[error("Invalid plugin key: no key was supplied")]
    Missing,

    /// The candidate was an empty string.
    #[error("Invalid plugin key: key cannot be empty")]
    Empty,

    /// Filtering removed every character of the candidate.
    #[error(
        "Invalid plugin key: '{candidate}' contains no ASCII letters or digits and cannot be \
         turned into a valid key"
    )]
    NoAlphanumeric { candidate: String },

    /// The key contains a character outside `[a-z0-9]`.
    #[error(
        "Invalid plugin key '{key}': character {character:?} at position {index} is not allowed \
         (only lowercase ASCII letters and digits)"
    )]
    DisallowedCharacter { key: String, character: char, index: usize },
}

impl KeyError {
    /// The category of this error.
    pub fn kind(&self) -> KeyErrorKind {
        KeyErrorKind::InvalidArgument
    }

    /// Whether the failure came from an absent or empty candidate.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing | Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_is_invalid_argument() {
        let errors = [
            KeyError::Missing,
            KeyError::Empty,
            KeyError::NoAlphanumeric { candidate: "....".to_string() },
            KeyError::DisallowedCharacter { key: "Foo".to_string(), character: 'F', index: 0 },
        ];

        for error in errors {
            assert_eq!(error.kind(), KeyErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_is_missing() {
        assert!(KeyError::Missing.is_missing());
        assert!(KeyError::Empty.is_missing());
        assert!(!KeyError::NoAlphanumeric { candidate: "~".to_string() }.is_missing());
    }

    #[test]
    fn test_messages() {
        insta::assert_snapshot!(KeyError::Missing, @"Invalid plugin key: no key was supplied");
        insta::assert_snapshot!(KeyError::Empty, @"Invalid plugin key: key cannot be empty");
        insta::assert_snapshot!(
            KeyError::NoAlphanumeric { candidate: "~@{}".to_string() },
            @"Invalid plugin key: '~@{}' contains no ASCII letters or digits and cannot be turned into a valid key"
        );
        insta::assert_snapshot!(
            KeyError::DisallowedCharacter {
                key: "Foo.Analyzers".to_string(),
                character: 'F',
                index: 0,
            },
            @"Invalid plugin key 'Foo.Analyzers': character 'F' at position 0 is not allowed (only lowercase ASCII letters and digits)"
        );
    }
}
