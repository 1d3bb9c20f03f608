//! xrb — command line front end for seeds, addresses and block hashes.

mod commands;
mod config;

use clap::Parser;
use std::path::PathBuf;

use config::CliConfig;
use xrb_crypto::{BalanceEncoding, BlockHasher, OsEntropy};
use xrb_utils::LogFormat;

#[derive(Parser)]
#[command(name = "xrb", about = "Derive, encode and verify xrb accounts and block hashes")]
struct Cli {
    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "XRB_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "XRB_LOG_FORMAT")]
    log_format: Option<LogFormat>,

    /// Balance encoding for send block hashes: "fixed16" or "minimal".
    #[arg(long, env = "XRB_BALANCE_ENCODING")]
    balance_encoding: Option<BalanceEncoding>,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long, env = "XRB_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Generate a random seed.
    Seed,

    /// Derive the address at an index of a seed.
    Address {
        /// 64 uppercase hex characters.
        #[arg(long, env = "XRB_SEED", hide_env_values = true)]
        seed: String,

        /// Account index (defaults to the configured default index).
        #[arg(long, allow_negative_numbers = true)]
        index: Option<i64>,

        /// Derive this many consecutive addresses starting at the index.
        #[arg(long)]
        count: Option<u32>,
    },

    /// Encode a public key (64 hex characters) as an address.
    Encode { public_key: String },

    /// Recover the public key from an address, verifying its checksum.
    Decode { address: String },

    /// Exit successfully only if the address is well-formed with a valid checksum.
    Validate { address: String },

    /// Compute a block hash.
    Hash {
        #[command(subcommand)]
        block: HashCommand,
    },
}

#[derive(clap::Subcommand)]
enum HashCommand {
    Open {
        #[arg(long)]
        source: String,
        #[arg(long)]
        representative: String,
        #[arg(long)]
        account: String,
    },
    Send {
        #[arg(long)]
        previous: String,
        #[arg(long)]
        destination: String,
        /// Balance after the send, in raw units.
        #[arg(long)]
        balance: u128,
    },
    Receive {
        #[arg(long)]
        previous: String,
        #[arg(long)]
        source: String,
    },
    Change {
        #[arg(long)]
        previous: String,
        #[arg(long)]
        representative: String,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<CliConfig> {
    let mut config = match cli.config {
        Some(ref path) => CliConfig::from_toml_file(path)?,
        None => CliConfig::default(),
    };
    if let Some(ref level) = cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(format) = cli.log_format {
        config.log_format = format;
    }
    if let Some(encoding) = cli.balance_encoding {
        config.balance_encoding = encoding;
    }
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    xrb_utils::init_logging(config.log_format, &config.log_level)?;
    if let Some(ref path) = cli.config {
        tracing::info!("Loaded config from {}", path.display());
    }

    let hasher = BlockHasher::new(config.balance_encoding);

    let output = match cli.command {
        Command::Seed => commands::seed(&OsEntropy)?,
        Command::Address { seed, index, count } => {
            let index = index.unwrap_or(i64::from(config.default_index));
            match count {
                Some(count) => {
                    let start = u32::try_from(index)
                        .map_err(|_| anyhow::anyhow!("Invalid index {index}"))?;
                    commands::addresses(&seed, start, count)?
                }
                None => commands::address(&seed, index)?,
            }
        }
        Command::Encode { public_key } => commands::encode(&public_key)?,
        Command::Decode { address } => commands::decode(&address)?,
        Command::Validate { address } => {
            if !xrb_crypto::validate_address(&address) {
                anyhow::bail!("invalid address {address}");
            }
            "valid".to_string()
        }
        Command::Hash { block } => match block {
            HashCommand::Open {
                source,
                representative,
                account,
            } => commands::hash_open(&hasher, &source, &representative, &account)?,
            HashCommand::Send {
                previous,
                destination,
                balance,
            } => commands::hash_send(&hasher, &previous, &destination, balance)?,
            HashCommand::Receive { previous, source } => {
                commands::hash_receive(&hasher, &previous, &source)?
            }
            HashCommand::Change {
                previous,
                representative,
            } => commands::hash_change(&hasher, &previous, &representative)?,
        },
    };

    println!("{output}");
    Ok(())
}
