//! # Kata CLI
//!
//! Console caller for the kata-core exercises.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                          kata (CLI)                                 │
//! │                                                                     │
//! │  flags ───► parse ───► kata-core ───► print result / typed error    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The CLI owns only parsing and rendering; every decision is made by
//! kata-core. An invalid-argument condition surfaces as a typed failure
//! through `main`'s `Result`, not a panic.

use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

use kata_core::money::Money;
use kata_core::pair::{find_pair, find_pair_lenient};
use kata_core::palindrome::is_palindrome;
use kata_core::vat::{apply_vat, VatRate};

/// Coursework kata runner: pair-sum search, palindrome check, VAT math.
#[derive(Parser, Debug)]
#[command(name = "kata", version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find two numbers at distinct positions that sum to the target
    FindPair {
        /// Comma-separated numbers, e.g. "3,5,-4,8,11,1,-1,6"
        /// (raw JSON in --lenient mode, e.g. "[3,5,-4]")
        #[arg(long)]
        sequence: Option<String>,

        /// Target sum (raw JSON in --lenient mode)
        #[arg(long)]
        target: Option<String>,

        /// Treat malformed input as "no pair found" instead of failing
        #[arg(long)]
        lenient: bool,
    },

    /// Check whether a value reads the same forwards and backwards
    Palindrome {
        /// Text to check
        value: String,
    },

    /// Apply VAT to a list of net prices
    AddVat {
        /// VAT rate in whole percentage points (standard rates: 5, 20)
        #[arg(long)]
        rate: u32,

        /// Comma-separated prices in pounds, e.g. "10.00,4.50"
        #[arg(long)]
        prices: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    FmtSubscriber::builder()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    match cli.command {
        Command::FindPair {
            sequence,
            target,
            lenient,
        } => run_find_pair(sequence, target, lenient)?,
        Command::Palindrome { value } => run_palindrome(&value),
        Command::AddVat { rate, prices } => run_add_vat(rate, &prices)?,
    }

    Ok(())
}

// =============================================================================
// Subcommand Handlers
// =============================================================================

fn run_find_pair(
    sequence: Option<String>,
    target: Option<String>,
    lenient: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = if lenient {
        // Malformed input is not an error here: whatever does not parse as
        // JSON is passed through as a string and rejected by the core
        let sequence = sequence.map_or(Value::Null, |raw| parse_json_or_string(&raw));
        let target = target.map_or(Value::Null, |raw| parse_json_or_string(&raw));
        find_pair_lenient(&sequence, &target)
    } else {
        let sequence = sequence.map(|raw| parse_number_list(&raw)).transpose()?;
        let target = target.map(|raw| parse_number(&raw)).transpose()?;
        find_pair(sequence.as_deref(), target)?
    };

    println!("{result}");
    Ok(())
}

fn run_palindrome(value: &str) {
    if is_palindrome(value) {
        println!("palindrome");
    } else {
        println!("not a palindrome");
    }
}

fn run_add_vat(rate: u32, prices: &str) -> Result<(), Box<dyn std::error::Error>> {
    let rate = VatRate::new(rate)?;
    let prices = prices
        .split(',')
        .map(|part| parse_money(part.trim()))
        .collect::<Result<Vec<_>, _>>()?;

    let gross = apply_vat(rate, &prices)?;
    debug!(count = gross.len(), "VAT applied");

    let rendered: Vec<String> = gross.iter().map(Money::to_string).collect();
    println!("{}", rendered.join(", "));
    Ok(())
}

// =============================================================================
// Flag Parsing Helpers
// =============================================================================

fn parse_number(raw: &str) -> Result<f64, Box<dyn std::error::Error>> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| format!("invalid number `{raw}`: {e}").into())
}

fn parse_number_list(raw: &str) -> Result<Vec<f64>, Box<dyn std::error::Error>> {
    let raw = raw.trim();

    // `--sequence ""` is a present-but-empty sequence, a valid input that
    // yields "no pair found"; only an omitted flag means absent
    if raw.is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',').map(parse_number).collect()
}

/// Lenient-mode inputs stay loosely typed: valid JSON is taken as-is,
/// anything else becomes a JSON string (e.g. `--target 4x` → `"4x"`).
fn parse_json_or_string(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

/// Parses a decimal pounds amount ("10" or "10.99") into integer pence.
///
/// No float round-trip: major and minor parts are parsed as integers.
fn parse_money(raw: &str) -> Result<Money, Box<dyn std::error::Error>> {
    let bad = |raw: &str| -> Box<dyn std::error::Error> {
        format!("invalid price `{raw}`: expected pounds like 10 or 10.99").into()
    };

    let (major_part, minor_part) = match raw.split_once('.') {
        Some((major, minor)) => (major, minor),
        None => (raw, "0"),
    };

    let negative = major_part.starts_with('-');
    let major: i64 = major_part.parse().map_err(|_| bad(raw))?;

    if minor_part.is_empty() || minor_part.len() > 2 {
        return Err(bad(raw));
    }
    let minor: i64 = minor_part.parse().map_err(|_| bad(raw))?;
    // "10.5" means 50 pence, not 5
    let minor = if minor_part.len() == 1 { minor * 10 } else { minor };
    if minor < 0 {
        return Err(bad(raw));
    }

    let pence = if negative {
        major * 100 - minor
    } else {
        major * 100 + minor
    };
    Ok(Money::from_pence(pence))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_list() {
        let numbers = parse_number_list("3,5,-4, 8").unwrap();
        assert_eq!(numbers, vec![3.0, 5.0, -4.0, 8.0]);

        assert!(parse_number_list("3,five").is_err());
    }

    #[test]
    fn test_parse_number_list_empty_string_is_empty_sequence() {
        assert_eq!(parse_number_list("").unwrap(), Vec::<f64>::new());
        assert_eq!(parse_number_list("   ").unwrap(), Vec::<f64>::new());
    }

    #[test]
    fn test_parse_json_or_string() {
        assert_eq!(parse_json_or_string("10"), Value::from(10));
        assert_eq!(parse_json_or_string("[1,2]"), serde_json::json!([1, 2]));
        assert_eq!(parse_json_or_string("4x"), Value::from("4x"));
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("10").unwrap(), Money::from_pence(1000));
        assert_eq!(parse_money("10.99").unwrap(), Money::from_pence(1099));
        assert_eq!(parse_money("10.5").unwrap(), Money::from_pence(1050));
        assert_eq!(parse_money("-5.50").unwrap(), Money::from_pence(-550));

        assert!(parse_money("ten").is_err());
        assert!(parse_money("10.").is_err());
        assert!(parse_money("10.999").is_err());
    }
}
