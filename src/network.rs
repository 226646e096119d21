//! Reference data for the supported card networks.
//!
//! The tables here are a curated subset: six common networks and the IIN
//! ranges publicly attributed to them. They are not authoritative and cover
//! only part of the IIN space. Ranges of different networks must not
//! overlap; an overlap is a defect in this table, not a user error.
//!
//! All ranges are expressed for a 6-digit IIN. Moving to 8-digit IINs means
//! rewriting every bound below.

use crate::error::UnknownNetworkError;
use std::fmt;
use std::str::FromStr;

/// Number of leading digits that make up the Issuer Identification Number.
pub const IIN_DIGITS: usize = 6;

/// A closed interval of IIN values, `start..=end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IinRange {
    start: u32,
    end: u32,
}

impl IinRange {
    /// Creates a range covering `start..=end`.
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// First IIN in the range.
    #[inline]
    pub const fn start(&self) -> u32 {
        self.start
    }

    /// Last IIN in the range (inclusive).
    #[inline]
    pub const fn end(&self) -> u32 {
        self.end
    }

    /// Returns true if `iin` falls inside the range.
    #[inline]
    pub const fn contains(&self, iin: u32) -> bool {
        self.start <= iin && iin <= self.end
    }

    /// Number of IIN values covered.
    #[inline]
    pub const fn size(&self) -> u32 {
        self.end - self.start + 1
    }
}

impl fmt::Display for IinRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0width$}-{:0width$}",
            self.start,
            self.end,
            width = IIN_DIGITS
        )
    }
}

const VISA_RANGES: &[IinRange] = &[IinRange::new(400_000, 499_999)];

const MASTERCARD_RANGES: &[IinRange] = &[
    IinRange::new(222_100, 272_999),
    IinRange::new(510_000, 559_999),
];

const AMEX_RANGES: &[IinRange] = &[
    IinRange::new(340_000, 349_999),
    IinRange::new(370_000, 379_999),
];

const DISCOVER_RANGES: &[IinRange] = &[
    IinRange::new(601_100, 601_199),
    IinRange::new(622_126, 622_925),
    IinRange::new(624_000, 626_999),
    IinRange::new(628_200, 628_899),
    IinRange::new(640_000, 659_999),
];

const DINERS_RANGES: &[IinRange] = &[
    IinRange::new(360_000, 369_999),
    IinRange::new(380_000, 389_999),
];

const JCB_RANGES: &[IinRange] = &[IinRange::new(352_800, 358_999)];

/// A card network known to this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Network {
    /// Visa - IIN 400000-499999, lengths 13, 16
    Visa,
    /// Mastercard - IIN 222100-272999 and 510000-559999, length 16
    Mastercard,
    /// American Express - IIN 34xxxx and 37xxxx, length 15
    Amex,
    /// Discover - 6011xx, parts of 622-628, 64-65, length 16
    Discover,
    /// Diners Club - IIN 36xxxx and 38xxxx, lengths 15, 16
    Diners,
    /// JCB - IIN 352800-358999, length 14
    Jcb,
}

impl Network {
    /// Every configured network, in declaration order.
    pub const ALL: [Network; 6] = [
        Network::Visa,
        Network::Mastercard,
        Network::Amex,
        Network::Discover,
        Network::Diners,
        Network::Jcb,
    ];

    /// Canonical lowercase name, used for lookup and display.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::Mastercard => "mastercard",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::Diners => "diners",
            Self::Jcb => "jcb",
        }
    }

    /// Permitted total card number lengths.
    #[inline]
    pub const fn valid_lengths(&self) -> &'static [u8] {
        match self {
            Self::Visa => &[13, 16],
            Self::Mastercard => &[16],
            Self::Amex => &[15],
            Self::Discover => &[16],
            Self::Diners => &[15, 16],
            Self::Jcb => &[14],
        }
    }

    /// Returns true if the given length is permitted for this network.
    #[inline]
    pub const fn is_valid_length(&self, length: usize) -> bool {
        let valid = self.valid_lengths();
        let mut i = 0;
        while i < valid.len() {
            if valid[i] as usize == length {
                return true;
            }
            i += 1;
        }
        false
    }

    /// IIN ranges assigned to this network, ordered by start.
    #[inline]
    pub const fn iin_ranges(&self) -> &'static [IinRange] {
        match self {
            Self::Visa => VISA_RANGES,
            Self::Mastercard => MASTERCARD_RANGES,
            Self::Amex => AMEX_RANGES,
            Self::Discover => DISCOVER_RANGES,
            Self::Diners => DINERS_RANGES,
            Self::Jcb => JCB_RANGES,
        }
    }

    /// Returns true if `iin` belongs to one of this network's ranges.
    pub fn contains_iin(&self, iin: u32) -> bool {
        self.iin_ranges().iter().any(|range| range.contains(iin))
    }

    /// Looks up a network by its canonical name (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|network| network.name() == name)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = UnknownNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownNetworkError::new(s))
    }
}

/// Comma-separated list of every network name, e.g. for error messages.
pub fn network_names() -> String {
    Network::ALL
        .iter()
        .map(|network| network.name())
        .collect::<Vec<_>>()
        .join(", ")
}
