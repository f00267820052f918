//! CLI configuration.
//!
//! Command-line flags win over environment variables, which win over
//! defaults:
//!
//! | setting   | flag          | env                        | default |
//! |-----------|---------------|----------------------------|---------|
//! | log       | `--log`       | `INVOICE_LOG`              | `warn`  |
//! | pretty    | `--pretty`    | `INVOICE_OUTPUT_PRETTY`    | `false` |
//! | breakdown | `--breakdown` | `INVOICE_OUTPUT_BREAKDOWN` | `false` |

use std::env;
use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Command-line arguments.
#[derive(Debug, Default, Parser)]
#[command(
    about = env!("CARGO_PKG_DESCRIPTION"),
    author = env!("CARGO_PKG_AUTHORS"),
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Args {
    #[arg(help = "Invoice JSON file. Reads stdin when omitted or '-'.")]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Print every intermediate amount, not only the total.")]
    pub breakdown: bool,

    #[arg(long, help = "Pretty-print the JSON output.")]
    pub pretty: bool,

    #[arg(long, help = "(Optional) tracing filter directive, e.g. 'debug'.")]
    pub log: Option<String>,
}

/// Where the invoice JSON comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => f.write_str("<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub input: InputSource,
    pub log_filter: String,
    pub pretty: bool,
    pub breakdown: bool,
}

impl CliConfig {
    /// Resolves configuration from parsed arguments and the process environment.
    pub fn load(args: Args) -> Result<Self, ConfigError> {
        Self::resolve(args, |key| env::var(key).ok())
    }

    /// Resolves configuration against an arbitrary variable lookup.
    pub fn resolve(args: Args, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let input = match args.input {
            Some(path) if path.as_os_str() != "-" => InputSource::File(path),
            _ => InputSource::Stdin,
        };

        let log_filter = args
            .log
            .or_else(|| lookup("INVOICE_LOG"))
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let pretty = args.pretty || parse_flag(&lookup, "INVOICE_OUTPUT_PRETTY")?;
        let breakdown = args.breakdown || parse_flag(&lookup, "INVOICE_OUTPUT_BREAKDOWN")?;

        Ok(CliConfig {
            input,
            log_filter,
            pretty,
            breakdown,
        })
    }
}

fn parse_flag(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<bool, ConfigError> {
    match lookup(key) {
        None => Ok(false),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolve(args: Args, vars: &[(&str, &str)]) -> Result<CliConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::resolve(args, |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = resolve(Args::default(), &[]).unwrap();
        assert_eq!(config.input, InputSource::Stdin);
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert!(!config.pretty);
        assert!(!config.breakdown);
    }

    #[test]
    fn test_dash_means_stdin() {
        let args = Args::parse_from(["invoice-cli", "-"]);
        assert_eq!(resolve(args, &[]).unwrap().input, InputSource::Stdin);

        let args = Args::parse_from(["invoice-cli", "invoice.json"]);
        assert_eq!(
            resolve(args, &[]).unwrap().input,
            InputSource::File(PathBuf::from("invoice.json"))
        );
    }

    #[test]
    fn test_environment_fills_in() {
        let config = resolve(
            Args::default(),
            &[
                ("INVOICE_LOG", "debug"),
                ("INVOICE_OUTPUT_PRETTY", "true"),
                ("INVOICE_OUTPUT_BREAKDOWN", " false "),
            ],
        )
        .unwrap();
        assert_eq!(config.log_filter, "debug");
        assert!(config.pretty);
        assert!(!config.breakdown);
    }

    #[test]
    fn test_flags_win_over_environment() {
        let args = Args::parse_from(["invoice-cli", "--log", "trace", "--breakdown"]);
        let config = resolve(
            args,
            &[("INVOICE_LOG", "debug"), ("INVOICE_OUTPUT_BREAKDOWN", "false")],
        )
        .unwrap();
        assert_eq!(config.log_filter, "trace");
        assert!(config.breakdown);
    }

    #[test]
    fn test_invalid_boolean_is_rejected() {
        let err = resolve(Args::default(), &[("INVOICE_OUTPUT_PRETTY", "yes")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for INVOICE_OUTPUT_PRETTY");
    }
}
