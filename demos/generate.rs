//! Random card number generation example.
//!
//! Run with: `cargo run --example generate`

use cc_numbers::{generate, parse, Network};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    println!("=== Random Card Generation ===\n");

    // -------------------------------------------------------------------------
    // One card per network
    // -------------------------------------------------------------------------
    println!("--- Generate Cards by Network ---\n");

    for network in Network::ALL {
        let number = generate::generate_card(network);
        let valid = parse(&number).map(|card| card.is_valid()).unwrap_or(false);
        println!(
            "  {:12}: {} (valid: {})",
            network.name(),
            number,
            if valid { "yes" } else { "no" }
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // By name, as the API and CLI do
    // -------------------------------------------------------------------------
    println!("--- Generate by Name ---\n");

    for name in [Some("amex"), Some("jcb"), None, Some("unionpay")] {
        match generate::generate_random(name) {
            Ok(number) => println!("  {:?}: {}", name, number),
            Err(e) => println!("  {:?}: {}", name, e),
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // Seeded generation (for reproducible tests)
    // -------------------------------------------------------------------------
    println!("--- Seeded Generation ---\n");

    for i in 0..3 {
        let mut rng = StdRng::seed_from_u64(2024);
        let number = generate::generate_card_with_rng(Network::Visa, &mut rng);
        println!("    Run {}: {}", i + 1, number);
    }
    println!("  (Same seed, same number)");
}
