//! CLI tool for card number validation and generation.
//!
//! # Usage
//!
//! ```bash
//! # Show the fields of a card number
//! ccnumbers validate "4111 1111 1111 1111"
//! ccnumbers validate 4111111111111111 --output json
//!
//! # Generate random numbers
//! ccnumbers random --network amex --count 5
//! ccnumbers random
//!
//! # List supported networks
//! ccnumbers networks
//! ```
//!
//! Set `RUST_LOG=debug` for diagnostics on stderr.

use cc_numbers::{generate, parse, Network};
use clap::{Parser, Subcommand, ValueEnum};

/// Exit status for a well-formed number whose check digit does not verify.
const EXIT_INVALID: i32 = 1;
/// Exit status for malformed input or an unknown network.
const EXIT_USAGE: i32 = 2;

#[derive(Parser)]
#[command(name = "ccnumbers")]
#[command(author, version, about = "Payment card number validation and generation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the fields of a card number and whether its check digit verifies
    Validate {
        /// Card number (spaces and hyphens allowed)
        card_number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Generate random, structurally valid card numbers (for testing only)
    Random {
        /// Network name; chosen at random when omitted
        #[arg(short, long)]
        network: Option<String>,

        /// Number of cards to generate
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// List supported networks with their lengths and IIN ranges
    Networks,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate {
            card_number,
            output,
        } => {
            cmd_validate(&card_number, output);
        }
        Commands::Random { network, count } => {
            cmd_random(network.as_deref(), count);
        }
        Commands::Networks => {
            cmd_networks();
        }
    }
}

fn cmd_validate(card_number: &str, output: OutputFormat) {
    let card = match parse(card_number) {
        Ok(card) => card,
        Err(e) => {
            match output {
                OutputFormat::Text => eprintln!("Error: {}", e),
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "error": e.to_string() }))
                }
            }
            std::process::exit(EXIT_USAGE);
        }
    };

    match output {
        OutputFormat::Text => {
            println!("Valid: {}", if card.is_valid() { "yes" } else { "no" });
            println!(
                "Major Industry Identifier: {} ({})",
                card.major_industry_identifier(),
                card.major_industry()
            );
            println!(
                "Issuer Identification Number: {}",
                card.issuer_identification_number()
            );
            println!(
                "Individual Account Identifier: {}",
                card.individual_account_identifier()
            );
            println!("Check Digit: {}", card.check_digit());
            println!("Network: {}", card.network_name());
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&card.report()) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(EXIT_USAGE);
            }
        },
    }

    if !card.is_valid() {
        std::process::exit(EXIT_INVALID);
    }
}

fn cmd_random(network: Option<&str>, count: usize) {
    for _ in 0..count {
        match generate::generate_random(network) {
            Ok(number) => println!("{}", number),
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(EXIT_USAGE);
            }
        }
    }
}

fn cmd_networks() {
    println!("{:<12} {:<8} IIN ranges", "Network", "Lengths");
    for network in Network::ALL {
        let lengths: Vec<String> = network
            .valid_lengths()
            .iter()
            .map(|l| l.to_string())
            .collect();
        let ranges: Vec<String> = network
            .iin_ranges()
            .iter()
            .map(|r| r.to_string())
            .collect();
        println!(
            "{:<12} {:<8} {}",
            network.name(),
            lengths.join(","),
            ranges.join(", ")
        );
    }
}
