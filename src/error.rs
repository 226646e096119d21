//! Error types for card number parsing and generation.
//!
//! Only malformed input is an error. A well-formed number whose check digit
//! does not verify parses successfully and reports `is_valid() == false`.

use crate::card::{MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::network::network_names;
use thiserror::Error;

/// Errors returned by [`parse`](crate::parse::parse) when the input cannot be
/// decomposed into card fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character other than a digit, space, or hyphen was found.
    #[error(
        "A card number can only contain numbers, spaces, and hyphens (found '{}' at position {position})",
        .character.escape_default()
    )]
    InvalidCharacter {
        /// The position in the input string (0-indexed, in characters).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// The number of digits is outside the accepted range.
    #[error(
        "A card number must be between {} and {} digits (got {length}).",
        MIN_CARD_DIGITS,
        MAX_CARD_DIGITS
    )]
    InvalidLength {
        /// The number of digits after separators were stripped.
        length: usize,
    },
}

/// A network name that does not match any configured network.
///
/// Matching is exact and case-sensitive against the canonical lowercase
/// names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid network '{name}'. Valid values are {}.", network_names())]
pub struct UnknownNetworkError {
    /// The name that was requested.
    pub name: String,
}

impl UnknownNetworkError {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
