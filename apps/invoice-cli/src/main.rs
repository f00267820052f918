//! # Invoice CLI
//!
//! Prices one invoice read as JSON and prints the result as JSON.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          invoice-cli                                    │
//! │                                                                         │
//! │  file / stdin ──► serde_json ──► invoice_core::compute_breakdown        │
//! │                                        │                                │
//! │                        ┌───────────────┴───────────────┐                │
//! │                        ▼                               ▼                │
//! │                  stdout: JSON                 stderr: problems          │
//! │                  exit 0                       exit 2                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! invoice-cli invoice.json
//! cat invoice.json | invoice-cli --breakdown --pretty
//! INVOICE_LOG=debug invoice-cli invoice.json
//! ```

mod config;
mod error;

use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::Parser;
use invoice_core::{compute_breakdown, Invoice, InvoiceTotal};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::{Args, CliConfig, InputSource};
use crate::error::CliError;

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(args: Args) -> Result<String, CliError> {
    let config = CliConfig::load(args)?;
    init_tracing(&config.log_filter)?;

    info!(source = %config.input, "reading invoice");
    let raw = read_input(&config.input)?;

    price(&raw, &config)
}

fn init_tracing(filter: &str) -> Result<(), CliError> {
    let filter = EnvFilter::try_new(filter).map_err(|e| CliError::LogFilter(e.to_string()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    Ok(())
}

fn read_input(source: &InputSource) -> Result<String, CliError> {
    let io_error = |err: io::Error| CliError::Io {
        source_name: source.to_string(),
        source: err,
    };

    match source {
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(io_error)?;
            Ok(buf)
        }
        InputSource::File(path) => fs::read_to_string(path).map_err(io_error),
    }
}

/// Decodes one invoice (`null` is accepted and reported as missing), prices
/// it, and renders the JSON to print.
fn price(raw: &str, config: &CliConfig) -> Result<String, CliError> {
    let invoice: Option<Invoice> = serde_json::from_str(raw)?;

    let breakdown = compute_breakdown(invoice.as_ref()).inspect_err(|err| {
        warn!(problems = err.problems().len(), "invoice rejected");
    })?;

    debug!(total = breakdown.total.cents(), "invoice priced");

    let rendered = match (config.breakdown, config.pretty) {
        (true, true) => serde_json::to_string_pretty(&breakdown)?,
        (true, false) => serde_json::to_string(&breakdown)?,
        (false, pretty) => {
            let total = InvoiceTotal::from(breakdown);
            if pretty {
                serde_json::to_string_pretty(&total)?
            } else {
                serde_json::to_string(&total)?
            }
        }
    };

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config(breakdown: bool) -> CliConfig {
        CliConfig {
            input: InputSource::Stdin,
            log_filter: "off".to_string(),
            pretty: false,
            breakdown,
        }
    }

    const GOLD_VIP20: &str = r#"{
        "invoice_id": "2",
        "customer_id": "C2",
        "country": "TH",
        "membership": "gold",
        "coupon": "VIP20",
        "items": [{"sku": "SKU1", "category": "book", "unit_price_cents": 100000, "qty": 1}]
    }"#;

    #[test]
    fn test_prices_total_only_by_default() {
        let out = price(GOLD_VIP20, &config(false)).unwrap();
        assert_eq!(out, r#"{"total":82390,"warnings":[]}"#);
    }

    #[test]
    fn test_breakdown_output() {
        let out = price(GOLD_VIP20, &config(true)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["subtotal"], 100_000);
        assert_eq!(value["discount"], 23_000);
        assert_eq!(value["tax"], 5_390);
        assert_eq!(value["total"], 82_390);
    }

    #[test]
    fn test_null_invoice_is_reported_missing() {
        let err = price("null", &config(false)).unwrap_err();
        assert_eq!(err.to_string(), "Invoice is missing");
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_malformed_json_is_not_a_validation_failure() {
        let err = price("{\"invoice_id\": ", &config(false)).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_empty_items_fail() {
        let raw = r#"{"invoice_id":"3","customer_id":"C3","country":"TH","membership":"none","items":[]}"#;
        let err = price(raw, &config(false)).unwrap_err();
        assert_eq!(err.to_string(), "Invoice must contain items");
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let source = InputSource::File(PathBuf::from("/definitely/not/here.json"));
        let err = read_input(&source).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read /definitely/not/here.json"));
    }
}
