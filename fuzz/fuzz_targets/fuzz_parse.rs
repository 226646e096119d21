//! Fuzz target for card number parsing.
//!
//! Tests that parse() never panics and that accepted input decomposes cleanly.

#![no_main]

use cc_numbers::{luhn, parse, ParseError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    match parse(data) {
        Ok(card) => {
            let digits: String = data.chars().filter(|c| c.is_ascii_digit()).collect();
            assert_eq!(card.number(), digits);

            let rebuilt = format!(
                "{}{}{}",
                card.issuer_identification_number(),
                card.individual_account_identifier(),
                card.check_digit()
            );
            assert_eq!(rebuilt, digits, "fields should reassemble the number");

            let values: Vec<u8> = digits.bytes().map(|b| b - b'0').collect();
            assert_eq!(card.is_valid(), luhn::validate(&values));

            // Formatting must not panic or leak the number
            assert!(!format!("{:?}", card).contains(&digits));
        }
        Err(ParseError::InvalidCharacter { position, character }) => {
            assert_eq!(data.chars().nth(position), Some(character));
        }
        Err(ParseError::InvalidLength { length }) => {
            assert!(!(12..=19).contains(&length));
        }
    }
});
