//! Random generation of structurally valid card numbers.
//!
//! A generated number has a length permitted for its network, an IIN inside
//! one of the network's configured ranges, and a check digit that verifies.
//! Parsing it back always yields `is_valid() == true` and the same network.
//!
//! # Example
//!
//! ```
//! use cc_numbers::{generate, parse, Network};
//!
//! let number = generate::generate_card(Network::Amex);
//! let card = parse(&number).unwrap();
//! assert_eq!(card.network(), Some(Network::Amex));
//! assert!(card.is_valid());
//!
//! assert!(generate::generate_random(Some("bogus")).is_err());
//! ```
//!
//! # Note
//!
//! These numbers are not tied to real accounts. They are meant for tests and
//! demos only.

use crate::error::UnknownNetworkError;
use crate::luhn;
use crate::network::{Network, IIN_DIGITS};
use rand::Rng;

/// Generates a card number for the named network, or a random network when
/// `network` is `None` or empty.
///
/// Fails if a non-empty name does not exactly match a canonical network
/// name.
pub fn generate_random(network: Option<&str>) -> Result<String, UnknownNetworkError> {
    generate_random_with_rng(network, &mut rand::thread_rng())
}

/// Like [`generate_random`], drawing from the given RNG.
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use cc_numbers::generate::generate_random_with_rng;
///
/// let mut a = StdRng::seed_from_u64(7);
/// let mut b = StdRng::seed_from_u64(7);
/// assert_eq!(
///     generate_random_with_rng(None, &mut a).unwrap(),
///     generate_random_with_rng(None, &mut b).unwrap()
/// );
/// ```
pub fn generate_random_with_rng<R: Rng + ?Sized>(
    network: Option<&str>,
    rng: &mut R,
) -> Result<String, UnknownNetworkError> {
    let network = match network.filter(|name| !name.is_empty()) {
        Some(name) => name.parse::<Network>()?,
        None => random_network(rng),
    };
    Ok(generate_card_with_rng(network, rng))
}

/// Picks a network uniformly at random.
pub fn random_network<R: Rng + ?Sized>(rng: &mut R) -> Network {
    Network::ALL[rng.gen_range(0..Network::ALL.len())]
}

/// Generates a card number for `network` using the thread RNG.
pub fn generate_card(network: Network) -> String {
    generate_card_with_rng(network, &mut rand::thread_rng())
}

/// Generates a card number for `network` using the given RNG.
///
/// 1. Pick one of the network's IIN ranges, then an IIN inside it.
/// 2. Pick one of the network's lengths and fill the account identifier
///    with that many digits minus the IIN and check digit.
/// 3. Append the Luhn check digit.
pub fn generate_card_with_rng<R: Rng + ?Sized>(network: Network, rng: &mut R) -> String {
    let ranges = network.iin_ranges();
    let range = ranges[rng.gen_range(0..ranges.len())];
    let iin = rng.gen_range(range.start()..=range.end());

    let lengths = network.valid_lengths();
    let length = lengths[rng.gen_range(0..lengths.len())] as usize;
    let account_digits = length - IIN_DIGITS - 1;
    let account = rng.gen_range(0..10u64.pow(account_digits as u32));

    let mut number = format!(
        "{:0iin_width$}{:0account_width$}",
        iin,
        account,
        iin_width = IIN_DIGITS,
        account_width = account_digits
    );

    let payload: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
    let check = luhn::check_digit(&payload);
    number.push((b'0' + check) as char);

    tracing::debug!(
        network = network.name(),
        iin,
        length,
        "generated card number"
    );

    number
}

/// Generates `count` card numbers for `network`.
pub fn generate_cards(network: Network, count: usize) -> Vec<String> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| generate_card_with_rng(network, &mut rng))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_well_formed(number: &str, network: Network) {
        assert!(
            network.is_valid_length(number.len()),
            "{network}: bad length {}",
            number.len()
        );
        let card = parse(number).unwrap();
        assert!(network.contains_iin(card.iin()), "{network}: iin {}", card.iin());
        assert!(card.is_valid(), "{network}: checksum");
        assert_eq!(card.network(), Some(network));
    }

    #[test]
    fn test_every_network() {
        let mut rng = StdRng::seed_from_u64(42);
        for network in Network::ALL {
            for _ in 0..200 {
                let number = generate_card_with_rng(network, &mut rng);
                assert_well_formed(&number, network);
            }
        }
    }

    #[test]
    fn test_amex() {
        let number = generate_random(Some("amex")).unwrap();
        assert_eq!(number.len(), 15);
        assert!(number.starts_with("34") || number.starts_with("37"));
        assert_well_formed(&number, Network::Amex);
    }

    #[test]
    fn test_unknown_network() {
        let err = generate_random(Some("bogus")).unwrap_err();
        assert_eq!(err.name, "bogus");

        // Matching is case-sensitive
        assert!(generate_random(Some("Visa")).is_err());
    }

    #[test]
    fn test_missing_or_empty_name_picks_any_network() {
        for name in [None, Some("")] {
            let number = generate_random(name).unwrap();
            let card = parse(&number).unwrap();
            assert!(card.is_valid());
            let network = card.network().unwrap();
            assert!(network.is_valid_length(number.len()));
        }
    }

    #[test]
    fn test_visa_uses_both_lengths() {
        let mut rng = StdRng::seed_from_u64(1);
        let lengths: std::collections::HashSet<usize> = (0..200)
            .map(|_| generate_card_with_rng(Network::Visa, &mut rng).len())
            .collect();
        assert_eq!(lengths, [13, 16].into_iter().collect());
    }

    #[test]
    fn test_random_network_covers_all() {
        let mut rng = StdRng::seed_from_u64(3);
        let seen: std::collections::HashSet<Network> =
            (0..500).map(|_| random_network(&mut rng)).collect();
        assert_eq!(seen.len(), Network::ALL.len());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        for network in Network::ALL {
            assert_eq!(
                generate_card_with_rng(network, &mut a),
                generate_card_with_rng(network, &mut b)
            );
        }
    }

    #[test]
    fn test_generate_cards() {
        let cards = generate_cards(Network::Discover, 50);
        assert_eq!(cards.len(), 50);
        for card in &cards {
            assert_well_formed(card, Network::Discover);
        }

        let unique: std::collections::HashSet<&String> = cards.iter().collect();
        assert!(unique.len() >= 45);
        assert!(generate_cards(Network::Visa, 0).is_empty());
    }
}
