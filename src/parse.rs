//! Decomposition of raw card number strings into [`CardFields`].
//!
//! Parsing fails only on malformed input: a character that is not a digit,
//! space, or hyphen, or a digit count outside 12..=19. A number whose check
//! digit does not verify still parses and is reported through
//! [`CardFields::is_valid`].

use crate::card::{CardFields, MAX_CARD_DIGITS, MIN_CARD_DIGITS};
use crate::error::ParseError;
use crate::iin::IssuerIndex;
use crate::luhn;
use zeroize::Zeroize;

/// Parses a card number into its fields.
///
/// Spaces and hyphens are stripped. Every character is checked before the
/// length, so `"12ab"` reports the bad character rather than the length.
///
/// # Example
///
/// ```
/// use cc_numbers::parse;
///
/// let card = parse("4111 1111 1111 1111").unwrap();
/// assert_eq!(card.issuer_identification_number(), "411111");
/// assert_eq!(card.network_name(), "visa");
/// assert!(card.is_valid());
///
/// // Well-formed but inconsistent: parses, reports invalid
/// let card = parse("4111-1111-1111-1112").unwrap();
/// assert!(!card.is_valid());
///
/// // Malformed: error
/// assert!(parse("4111-11a1-1111-1111").is_err());
/// ```
pub fn parse(input: &str) -> Result<CardFields, ParseError> {
    let mut digits = [0u8; MAX_CARD_DIGITS];
    let mut count = 0usize;

    for (position, c) in input.chars().enumerate() {
        match c {
            '0'..='9' => {
                // Keep counting past the maximum so the error reports the real length
                if count < MAX_CARD_DIGITS {
                    digits[count] = (c as u8) - b'0';
                }
                count += 1;
            }
            ' ' | '-' => {}
            _ => {
                digits.zeroize();
                return Err(ParseError::InvalidCharacter {
                    position,
                    character: c,
                });
            }
        }
    }

    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&count) {
        digits.zeroize();
        return Err(ParseError::InvalidLength { length: count });
    }

    let fields = from_digits(&digits[..count]);
    digits.zeroize();

    tracing::trace!(
        iin = fields.issuer_identification_number(),
        network = fields.network_name(),
        valid = fields.is_valid(),
        "parsed card number"
    );

    Ok(fields)
}

/// Builds the fields from digit values whose length is already checked.
fn from_digits(digits: &[u8]) -> CardFields {
    let (&check, payload) = match digits.split_last() {
        Some(split) => split,
        None => unreachable!("length checked by caller"),
    };

    let is_valid = luhn::verify(payload, check);
    let network = IssuerIndex::global().lookup_digits(digits);
    let number: String = digits.iter().map(|&d| (b'0' + d) as char).collect();

    CardFields::new(number, is_valid, network)
}

/// Removes spaces and hyphens, leaving every other character in place.
///
/// ```
/// use cc_numbers::parse::strip_separators;
///
/// assert_eq!(strip_separators("4111-1111 1111-1111"), "4111111111111111");
/// ```
pub fn strip_separators(input: &str) -> String {
    input.chars().filter(|c| !matches!(c, ' ' | '-')).collect()
}
