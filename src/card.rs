//! The fields of a parsed card number.
//!
//! ISO/IEC 7812 splits a primary account number (PAN) into a major industry
//! identifier (first digit), an issuer identification number (first
//! [`IIN_DIGITS`] digits), an individual account identifier, and a trailing
//! check digit.

use crate::iin::iin_value;
use crate::network::{Network, IIN_DIGITS};
use std::fmt;
use zeroize::Zeroize;

/// Maximum number of digits in a card number.
pub const MAX_CARD_DIGITS: usize = 19;

/// Minimum number of digits in a card number.
pub const MIN_CARD_DIGITS: usize = 12;

/// Name reported when no configured network owns the IIN.
pub const UNKNOWN_NETWORK: &str = "unknown";

/// Industry category encoded by the first digit of a card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MajorIndustry {
    /// 0 - ISO/TC 68 and other industry assignments
    IsoTc68,
    /// 1 - Airlines
    Airlines,
    /// 2 - Airlines, financial and other future industry assignments
    AirlinesAndFuture,
    /// 3 - Travel and entertainment
    TravelAndEntertainment,
    /// 4, 5 - Banking and financial
    BankingAndFinancial,
    /// 6 - Merchandising and banking/financial
    MerchandisingAndBanking,
    /// 7 - Petroleum and other future industry assignments
    Petroleum,
    /// 8 - Healthcare, telecommunications and other future industry assignments
    HealthcareAndTelecom,
    /// 9 - National assignment
    NationalAssignment,
}

impl MajorIndustry {
    /// Maps a digit (0-9) to its industry. Returns `None` above 9.
    pub const fn from_digit(digit: u8) -> Option<Self> {
        Some(match digit {
            0 => Self::IsoTc68,
            1 => Self::Airlines,
            2 => Self::AirlinesAndFuture,
            3 => Self::TravelAndEntertainment,
            4 | 5 => Self::BankingAndFinancial,
            6 => Self::MerchandisingAndBanking,
            7 => Self::Petroleum,
            8 => Self::HealthcareAndTelecom,
            9 => Self::NationalAssignment,
            _ => return None,
        })
    }

    /// Human-readable description.
    pub const fn description(&self) -> &'static str {
        match self {
            Self::IsoTc68 => "ISO/TC 68 and other industry assignments",
            Self::Airlines => "Airlines",
            Self::AirlinesAndFuture => "Airlines, financial and other future industry assignments",
            Self::TravelAndEntertainment => "Travel and entertainment",
            Self::BankingAndFinancial => "Banking and financial",
            Self::MerchandisingAndBanking => "Merchandising and banking/financial",
            Self::Petroleum => "Petroleum and other future industry assignments",
            Self::HealthcareAndTelecom => {
                "Healthcare, telecommunications and other future industry assignments"
            }
            Self::NationalAssignment => "National assignment",
        }
    }
}

impl fmt::Display for MajorIndustry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A card number decomposed into its ISO/IEC 7812 fields.
///
/// Built by [`parse`](crate::parse::parse). The number is stored once and
/// every field is a slice of it, so issuer identifier + account identifier +
/// check digit always reproduces [`number`](Self::number).
///
/// A checksum mismatch is not a parse failure: it shows up as
/// `is_valid() == false`.
///
/// # Security
///
/// - `Debug` and `Display` show a masked number only
/// - The stored digits are zeroed on drop
#[derive(Clone)]
pub struct CardFields {
    /// Stripped digits, `MIN_CARD_DIGITS..=MAX_CARD_DIGITS` long.
    number: String,
    is_valid: bool,
    network: Option<Network>,
}

impl CardFields {
    /// Internal constructor. `number` must hold only ASCII digits and be
    /// within the accepted length range.
    pub(crate) fn new(number: String, is_valid: bool, network: Option<Network>) -> Self {
        debug_assert!(number.len() >= MIN_CARD_DIGITS && number.len() <= MAX_CARD_DIGITS);
        debug_assert!(number.bytes().all(|b| b.is_ascii_digit()));
        Self {
            number,
            is_valid,
            network,
        }
    }

    /// The full primary account number with separators stripped.
    ///
    /// Never log this; use [`masked`](Self::masked) instead.
    #[inline]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Number of digits.
    #[inline]
    pub fn length(&self) -> usize {
        self.number.len()
    }

    /// The first digit.
    #[inline]
    pub fn major_industry_identifier(&self) -> &str {
        &self.number[..1]
    }

    /// The industry category of the first digit.
    pub fn major_industry(&self) -> MajorIndustry {
        let Some(industry) = MajorIndustry::from_digit(self.number.as_bytes()[0] - b'0') else {
            unreachable!("card numbers hold ASCII digits only")
        };
        industry
    }

    /// The first [`IIN_DIGITS`] digits.
    #[inline]
    pub fn issuer_identification_number(&self) -> &str {
        &self.number[..IIN_DIGITS]
    }

    /// The issuer identification number as an integer.
    pub fn iin(&self) -> u32 {
        iin_value(
            self.issuer_identification_number()
                .bytes()
                .map(|b| b - b'0'),
        )
    }

    /// The digits between the IIN and the check digit.
    #[inline]
    pub fn individual_account_identifier(&self) -> &str {
        &self.number[IIN_DIGITS..self.number.len() - 1]
    }

    /// The last digit.
    #[inline]
    pub fn check_digit(&self) -> &str {
        &self.number[self.number.len() - 1..]
    }

    /// The last digit as a value 0-9.
    #[inline]
    pub fn check_digit_value(&self) -> u8 {
        self.number.as_bytes()[self.number.len() - 1] - b'0'
    }

    /// Whether the check digit verifies against the rest of the number.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The network owning the IIN, or `None` if it is not in any range.
    #[inline]
    pub fn network(&self) -> Option<Network> {
        self.network
    }

    /// The network name, or `"unknown"`.
    #[inline]
    pub fn network_name(&self) -> &'static str {
        self.network.map_or(UNKNOWN_NETWORK, |network| network.name())
    }

    /// Whether the length is permitted for the detected network.
    ///
    /// Always false for unknown networks.
    pub fn has_network_length(&self) -> bool {
        self.network
            .is_some_and(|network| network.is_valid_length(self.length()))
    }

    /// Last four digits, safe for display.
    pub fn last_four(&self) -> String {
        crate::mask::last_four(&self.number)
    }

    /// Masked number showing only the last four digits.
    pub fn masked(&self) -> String {
        crate::mask::mask_number(&self.number)
    }

    /// Masked number showing the IIN and last four digits.
    pub fn masked_with_iin(&self) -> String {
        crate::mask::mask_with_iin(&self.number)
    }

    /// An owned, serializable snapshot of the fields.
    #[cfg(feature = "serde")]
    pub fn report(&self) -> CardReport {
        CardReport {
            is_valid: self.is_valid,
            major_industry_identifier: self.major_industry_identifier().to_string(),
            issuer_identification_number: self.issuer_identification_number().to_string(),
            personal_account_number: self.individual_account_identifier().to_string(),
            check_digit: self.check_digit().to_string(),
            network: self.network_name().to_string(),
        }
    }
}

impl fmt::Debug for CardFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardFields")
            .field("number", &self.masked_with_iin())
            .field("is_valid", &self.is_valid)
            .field("network", &self.network_name())
            .finish()
    }
}

impl fmt::Display for CardFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.network_name(), self.masked())
    }
}

impl Drop for CardFields {
    fn drop(&mut self) {
        self.number.zeroize();
    }
}

/// Serializable view of [`CardFields`].
///
/// Digit fields are strings because they may carry leading zeros.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "utoipa", schema(example = json!({
    "is_valid": true,
    "major_industry_identifier": "4",
    "issuer_identification_number": "411111",
    "personal_account_number": "111111111",
    "check_digit": "1",
    "network": "visa"
})))]
pub struct CardReport {
    /// Whether the Luhn check digit verifies. Says nothing about whether the account exists.
    pub is_valid: bool,
    /// First digit of the number
    pub major_industry_identifier: String,
    /// First six digits of the number
    pub issuer_identification_number: String,
    /// Digits between the issuer identification number and the check digit
    pub personal_account_number: String,
    /// Last digit of the number
    pub check_digit: String,
    /// Detected network: visa, mastercard, amex, discover, diners, jcb, or unknown
    pub network: String,
}
