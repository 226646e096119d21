//! # cc_numbers
//!
//! Payment card number parsing, validation and generation following
//! ISO/IEC 7812 conventions.
//!
//! ## Features
//!
//! - Field decomposition: major industry identifier, IIN, account identifier, check digit
//! - Luhn checksum verification and check digit generation
//! - Network detection from a curated IIN range table
//! - Random, structurally valid numbers for a chosen or random network
//! - Masked `Debug`/`Display` output and zeroize-on-drop storage
//! - Library, CLI, and REST API interfaces
//!
//! "Valid" here means only that a number is internally consistent. Nothing
//! in this crate checks whether a number belongs to a real account.
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_numbers::{parse, Network};
//!
//! let card = parse("4111 1111 1111 1111").unwrap();
//! assert_eq!(card.major_industry_identifier(), "4");
//! assert_eq!(card.issuer_identification_number(), "411111");
//! assert_eq!(card.individual_account_identifier(), "111111111");
//! assert_eq!(card.check_digit(), "1");
//! assert_eq!(card.network(), Some(Network::Visa));
//! assert!(card.is_valid());
//!
//! // Safe for logging - never exposes the full number
//! println!("Card: {}", card.masked()); // "****-****-****-1111"
//! ```
//!
//! ## Malformed vs. inconsistent input
//!
//! ```rust
//! use cc_numbers::{parse, ParseError};
//!
//! // Bad check digit: parses fine, flagged invalid
//! assert!(!parse("4111111111111112").unwrap().is_valid());
//!
//! // Not a card number at all: error
//! assert!(matches!(
//!     parse("4111-11a1-1111-1111"),
//!     Err(ParseError::InvalidCharacter { .. })
//! ));
//! assert_eq!(
//!     parse("41111111111").unwrap_err(),
//!     ParseError::InvalidLength { length: 11 }
//! );
//! ```
//!
//! ## Random Numbers
//!
//! ```rust
//! use cc_numbers::{generate_random, parse};
//!
//! let number = generate_random(Some("amex")).unwrap();
//! assert_eq!(number.len(), 15);
//! assert!(parse(&number).unwrap().is_valid());
//!
//! // No network: pick one at random
//! let number = generate_random(None).unwrap();
//! assert!(parse(&number).unwrap().network().is_some());
//! ```
//!
//! ## Supported Networks
//!
//! | Network | IIN ranges | Length |
//! |---------|------------|--------|
//! | visa | 400000-499999 | 13, 16 |
//! | mastercard | 222100-272999, 510000-559999 | 16 |
//! | amex | 340000-349999, 370000-379999 | 15 |
//! | discover | 601100-601199, 622126-622925, 624000-626999, 628200-628899, 640000-659999 | 16 |
//! | diners | 360000-369999, 380000-389999 | 15, 16 |
//! | jcb | 352800-358999 | 14 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | Serializable [`CardReport`] |
//! | `cli` | Command-line tool |
//! | `server` | REST API with Swagger UI |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

#[cfg(feature = "server")]
pub mod api;
pub mod card;
pub mod error;
pub mod generate;
pub mod iin;
pub mod luhn;
pub mod mask;
pub mod network;
pub mod parse;

// Re-export main types at crate root
pub use card::{CardFields, MajorIndustry, MAX_CARD_DIGITS, MIN_CARD_DIGITS, UNKNOWN_NETWORK};
#[cfg(feature = "serde")]
pub use card::CardReport;
pub use error::{ParseError, UnknownNetworkError};
pub use generate::{generate_card, generate_random};
pub use iin::{lookup_network, IssuerIndex};
pub use network::{IinRange, Network, IIN_DIGITS};
pub use parse::parse;
