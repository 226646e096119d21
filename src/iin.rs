//! Reverse index from IIN value to network.
//!
//! The index is a sorted table of `(IinRange, Network)` entries searched with
//! a binary search, so a lookup costs O(log ranges) and the table stays the
//! same size if the IIN width grows. Flattening every IIN value into a hash
//! map is the alternative; it trades a large allocation for an O(1) probe.
//!
//! The shared instance is built on first use and never mutated afterwards,
//! so concurrent readers need no locking.

use crate::network::{IinRange, Network, IIN_DIGITS};
use once_cell::sync::Lazy;
use std::cmp::Ordering;

static GLOBAL_INDEX: Lazy<IssuerIndex> = Lazy::new(|| IssuerIndex::build(&Network::ALL));

/// Sorted IIN range table mapping issuer identifiers to networks.
#[derive(Debug, Clone)]
pub struct IssuerIndex {
    /// Entries sorted by range start.
    entries: Vec<(IinRange, Network)>,
}

impl IssuerIndex {
    /// Builds an index over every range of the given networks.
    pub fn build(networks: &[Network]) -> Self {
        let mut entries: Vec<(IinRange, Network)> = networks
            .iter()
            .flat_map(|&network| {
                network
                    .iin_ranges()
                    .iter()
                    .map(move |&range| (range, network))
            })
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        tracing::debug!(
            networks = networks.len(),
            ranges = entries.len(),
            "built issuer index"
        );

        Self { entries }
    }

    /// The process-wide index over all configured networks.
    pub fn global() -> &'static IssuerIndex {
        &GLOBAL_INDEX
    }

    /// Returns the network owning `iin`, if any.
    pub fn lookup(&self, iin: u32) -> Option<Network> {
        self.entries
            .binary_search_by(|(range, _)| {
                if iin < range.start() {
                    Ordering::Greater
                } else if iin > range.end() {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            })
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    /// Looks up the network from the leading digits of a card number.
    ///
    /// Returns `None` if fewer than [`IIN_DIGITS`] digits are given.
    pub fn lookup_digits(&self, digits: &[u8]) -> Option<Network> {
        if digits.len() < IIN_DIGITS {
            return None;
        }
        self.lookup(iin_value(digits[..IIN_DIGITS].iter().copied()))
    }

    /// Number of ranges in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the index holds no ranges.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the ranges in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &(IinRange, Network)> {
        self.entries.iter()
    }
}

/// Looks up `iin` in the shared index.
#[inline]
pub fn lookup_network(iin: u32) -> Option<Network> {
    IssuerIndex::global().lookup(iin)
}

/// Folds digit values (0-9) into their integer value.
#[inline]
pub(crate) fn iin_value(digits: impl IntoIterator<Item = u8>) -> u32 {
    digits
        .into_iter()
        .fold(0u32, |acc, d| acc * 10 + d as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_bounds() {
        let index = IssuerIndex::global();
        assert_eq!(index.lookup(400_000), Some(Network::Visa));
        assert_eq!(index.lookup(499_999), Some(Network::Visa));
        assert_eq!(index.lookup(399_999), None);
        assert_eq!(index.lookup(500_000), None);

        assert_eq!(index.lookup(222_100), Some(Network::Mastercard));
        assert_eq!(index.lookup(222_099), None);
        assert_eq!(index.lookup(559_999), Some(Network::Mastercard));
        assert_eq!(index.lookup(560_000), None);
    }

    #[test]
    fn test_lookup_adjacent_networks() {
        // 34 amex, 35 jcb, 36 diners, 37 amex, 38 diners
        assert_eq!(lookup_network(349_999), Some(Network::Amex));
        assert_eq!(lookup_network(352_799), None);
        assert_eq!(lookup_network(352_800), Some(Network::Jcb));
        assert_eq!(lookup_network(358_999), Some(Network::Jcb));
        assert_eq!(lookup_network(360_000), Some(Network::Diners));
        assert_eq!(lookup_network(375_000), Some(Network::Amex));
        assert_eq!(lookup_network(385_000), Some(Network::Diners));
        assert_eq!(lookup_network(390_000), None);
    }

    #[test]
    fn test_lookup_discover_gaps() {
        assert_eq!(lookup_network(601_150), Some(Network::Discover));
        assert_eq!(lookup_network(622_125), None);
        assert_eq!(lookup_network(622_925), Some(Network::Discover));
        assert_eq!(lookup_network(623_000), None);
        assert_eq!(lookup_network(628_199), None);
        assert_eq!(lookup_network(650_000), Some(Network::Discover));
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(lookup_network(0), None);
        assert_eq!(lookup_network(123_456), None);
        assert_eq!(lookup_network(999_999), None);
        assert_eq!(lookup_network(u32::MAX), None);
    }

    #[test]
    fn test_index_agrees_with_network_ranges() {
        let index = IssuerIndex::global();
        for network in Network::ALL {
            for range in network.iin_ranges() {
                for iin in [range.start(), range.end(), range.start() + range.size() / 2] {
                    assert_eq!(index.lookup(iin), Some(network), "iin {iin}");
                }
            }
        }
    }

    #[test]
    fn test_index_is_sorted() {
        let index = IssuerIndex::global();
        let total: usize = Network::ALL.iter().map(|n| n.iin_ranges().len()).sum();
        assert_eq!(index.len(), total);
        assert!(!index.is_empty());

        let starts: Vec<u32> = index.iter().map(|(r, _)| r.start()).collect();
        assert!(starts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_partial_index() {
        let index = IssuerIndex::build(&[Network::Amex]);
        assert_eq!(index.lookup(340_000), Some(Network::Amex));
        assert_eq!(index.lookup(400_000), None);
        assert!(IssuerIndex::build(&[]).is_empty());
    }

    #[test]
    fn test_lookup_digits() {
        let index = IssuerIndex::global();
        assert_eq!(
            index.lookup_digits(&[4, 1, 1, 1, 1, 1, 1, 1]),
            Some(Network::Visa)
        );
        assert_eq!(index.lookup_digits(&[4, 1, 1]), None);
        assert_eq!(iin_value([0, 0, 1, 2, 3, 4]), 1234);
    }

    #[test]
    fn test_index_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IssuerIndex>();
    }
}
