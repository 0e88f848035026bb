//! rs-xrpl - Offline validation tooling for XRP Ledger transactions
//!
//! This binary validates transaction JSON against the same rules the ledger
//! enforces, before anything is signed or submitted.
//!
//! ## Usage
//!
//! ```text
//! rs-xrpl validate tx.json                # Validate a transaction file
//! cat tx.json | rs-xrpl validate -        # Validate from stdin
//! rs-xrpl check-address rrrrrr...hoLvTp   # Decode a classic address
//! rs-xrpl sample-config                   # Print sample configuration
//! ```
//!
//! ## Configuration
//!
//! Configuration can be provided via a TOML file or environment variables.
//! See `rs-xrpl --help` for more details.

mod config;
mod logging;

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use config::AppConfig;
use logging::{LogConfig, LogFormat};
use xrpl_model::SignerListSet;

/// Offline validation tooling for XRP Ledger transactions
#[derive(Parser)]
#[command(name = "rs-xrpl")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long, global = true)]
    trace: bool,

    /// Log output format
    #[arg(long, default_value = "text", global = true)]
    log_format: CliLogFormat,

    #[command(subcommand)]
    command: Commands,
}

/// Log output format for CLI
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum CliLogFormat {
    #[default]
    Text,
    Json,
}

impl From<CliLogFormat> for LogFormat {
    fn from(fmt: CliLogFormat) -> Self {
        match fmt {
            CliLogFormat::Text => LogFormat::Text,
            CliLogFormat::Json => LogFormat::Json,
        }
    }
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Validate a transaction JSON file ("-" reads stdin)
    Validate {
        /// Path to the transaction JSON, or "-" for stdin
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Decode and check a classic address
    CheckAddress {
        /// The address to check
        address: String,
    },

    /// Print sample configuration
    SampleConfig,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(&cli)?;

    let config = load_config(&cli)?;
    config.validate()?;

    match cli.command {
        Commands::Validate { input } => cmd_validate(config, &input),
        Commands::CheckAddress { address } => cmd_check_address(&address),
        Commands::SampleConfig => cmd_sample_config(),
    }
}

/// Initialize the logging subsystem.
fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    let level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    let config = LogConfig::default().with_level(level);

    let config = match cli.log_format {
        CliLogFormat::Text => config,
        CliLogFormat::Json => LogConfig {
            format: LogFormat::Json,
            ansi_colors: false,
            ..config
        },
    };

    logging::init(&config)?;

    tracing::debug!("Logging initialized");
    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let config = if let Some(ref config_path) = cli.config {
        tracing::info!(path = ?config_path, "Loading configuration from file");
        AppConfig::from_file_with_env(config_path)?
    } else {
        let mut config = AppConfig::default();
        config.apply_env_overrides();
        config
    };

    Ok(config)
}

/// Validate command handler.
fn cmd_validate(config: AppConfig, input: &PathBuf) -> anyhow::Result<()> {
    let content = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)?
    };

    let value: serde_json::Value = serde_json::from_str(&content)?;

    tracing::debug!(max_signer_entries = config.limits.max_signer_entries, "Validating transaction");

    match SignerListSet::from_value_with_limits(&value, &config.limits) {
        Ok(tx) => {
            println!("Transaction is valid");
            println!();
            println!("Account:      {}", tx.account());
            if tx.is_delete() {
                println!("Mode:         delete signer list");
            } else {
                println!("Mode:         set signer list");
                println!(
                    "Entries:      {}",
                    tx.signer_entries().map_or(0, <[_]>::len)
                );
                println!("Total weight: {}", tx.total_weight());
            }
            println!("Quorum:       {}", tx.signer_quorum());
            Ok(())
        }
        Err(err) => {
            let violations = err.violations();
            eprintln!("Transaction is invalid:");
            for violation in violations {
                eprintln!("  - {}", violation);
            }
            anyhow::bail!("{} validation violations", violations.len());
        }
    }
}

/// Check-address command handler.
fn cmd_check_address(address: &str) -> anyhow::Result<()> {
    match xrpl_addresscodec::decode_account_id(address) {
        Ok(account_id) => {
            println!("Address is valid");
            println!("Account id: {}", hex::encode(account_id));
            Ok(())
        }
        Err(err) => {
            anyhow::bail!("invalid address: {}", err);
        }
    }
}

/// Sample-config command handler.
fn cmd_sample_config() -> anyhow::Result<()> {
    let sample = AppConfig::sample_config();
    println!("{}", sample);
    Ok(())
}
