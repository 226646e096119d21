//! Basic card number parsing example.
//!
//! Run with: `cargo run --example basic`

use cc_numbers::{parse, ParseError};

fn main() {
    println!("=== Card Number Parsing ===\n");

    // Example 1: Decompose a Visa number
    let visa_number = "4111-1111-1111-1111";
    println!("Parsing: {}", visa_number);

    match parse(visa_number) {
        Ok(card) => {
            println!("  Valid: {}", if card.is_valid() { "yes" } else { "no" });
            println!("  Network: {}", card.network_name());
            println!(
                "  Major industry: {} ({})",
                card.major_industry_identifier(),
                card.major_industry()
            );
            println!("  IIN: {}", card.issuer_identification_number());
            println!("  Account: {}", card.individual_account_identifier());
            println!("  Check digit: {}", card.check_digit());
            println!("  Masked: {}", card.masked());
            println!("  Length: {} digits", card.length());
        }
        Err(e) => println!("  Error: {}", e),
    }
    println!();

    // Example 2: Checksum and network at a glance
    let test_cards = [
        "4111111111111111",
        "5500000000000004",
        "378282246310005",
        "6011111111111117",
        "4111111111111112",
        "123456789012",
    ];

    println!("Quick checks:");
    for number in test_cards {
        if let Ok(card) = parse(number) {
            println!(
                "  {:<20} {:<10} {}",
                card.masked_with_iin(),
                card.network_name(),
                if card.is_valid() { "VALID" } else { "INVALID" }
            );
        }
    }
    println!();

    // Example 3: Malformed input
    println!("Error handling examples:");

    let error_cases = [
        ("", "Empty input"),
        ("411111111", "Too short"),
        ("41111111111111111111", "Too long"),
        ("4111-1111-1111-111X", "Invalid character"),
    ];

    for (number, description) in error_cases {
        match parse(number) {
            Ok(_) => println!("  {}: unexpectedly parsed", description),
            Err(e) => {
                let error_type = match e {
                    ParseError::InvalidCharacter { .. } => "InvalidCharacter",
                    ParseError::InvalidLength { .. } => "InvalidLength",
                };
                println!("  {}: {} - {}", description, error_type, e);
            }
        }
    }
}
