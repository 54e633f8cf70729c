//! Command-line client for the LimePay payments API.
//!
//! # Usage
//!
//! ```bash
//! limepay --env https://api.limepay.io/v1 --api-key KEY --api-secret SECRET ping
//! limepay shoppers list
//! limepay payments get 5c8a1ee5...
//! limepay receipt 5c8a1ee5... > receipt.html
//! ```
//!
//! # Environment Variables
//!
//! - `LIMEPAY_ENV` - Base endpoint of the API
//! - `LIMEPAY_API_KEY` - API key
//! - `LIMEPAY_API_SECRET` - API secret
//! - `LIMEPAY_TIMEOUT_SECS` - Optional request timeout in seconds
//! - `RUST_LOG` - Log level filter (default: `info`)
//!
//! A `.env` file in the working directory is loaded first. When `--env`,
//! `--api-key`, and `--api-secret` are all given the environment is not read;
//! otherwise every required variable must be set and any given flag overrides
//! its variable.

#![allow(clippy::print_stdout)]

use std::time::Duration;

use clap::{Parser, Subcommand};
use limepay_http::{ConfigError, LimePay, RequesterConfig};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// LimePay API client.
#[derive(Parser, Debug)]
#[command(name = "limepay", version, about = "LimePay API client")]
struct Cli {
    /// Base endpoint of the API [env: LIMEPAY_ENV].
    #[arg(long)]
    env: Option<String>,

    /// API key [env: LIMEPAY_API_KEY].
    #[arg(long)]
    api_key: Option<String>,

    /// API secret [env: LIMEPAY_API_SECRET].
    #[arg(long)]
    api_secret: Option<String>,

    /// Request timeout in seconds [env: LIMEPAY_TIMEOUT_SECS].
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    fn requester_config(&self) -> Result<RequesterConfig, ConfigError> {
        let mut config = match (&self.env, &self.api_key, &self.api_secret) {
            (Some(env), Some(key), Some(secret)) => RequesterConfig::new(env, key, secret),
            _ => {
                let mut config = RequesterConfig::from_env()?;
                if let Some(env) = &self.env {
                    config.base_url.clone_from(env);
                }
                if let Some(key) = &self.api_key {
                    config.api_key.clone_from(key);
                }
                if let Some(secret) = &self.api_secret {
                    config.api_secret.clone_from(secret);
                }
                config
            }
        };
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check connectivity and credentials.
    Ping,
    /// Inspect shoppers.
    #[command(subcommand)]
    Shoppers(ShopperCommand),
    /// Inspect payments.
    #[command(subcommand)]
    Payments(PaymentCommand),
    /// Print the HTML invoice of a fiat payment.
    Invoice {
        /// Payment id.
        id: String,
    },
    /// Email the invoice of a fiat payment to its shopper.
    SendInvoice {
        /// Payment id.
        id: String,
    },
    /// Print the HTML receipt of a fiat payment.
    Receipt {
        /// Payment id.
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum ShopperCommand {
    /// List all shoppers.
    List,
    /// Show one shopper.
    Get {
        /// Shopper id.
        id: String,
    },
    /// Generate a wallet token for a shopper.
    WalletToken {
        /// Shopper id.
        id: String,
    },
}

#[derive(Subcommand, Debug)]
enum PaymentCommand {
    /// List all payments.
    List,
    /// Show one payment.
    Get {
        /// Payment id.
        id: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()).await {
        tracing::error!("limepay failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.requester_config()?;
    tracing::debug!(?config, "connecting");
    let sdk = LimePay::connect(config).await?;

    match cli.command {
        Command::Ping => {
            let ping = sdk.connection.test().await?;
            print_json(&ping)?;
        }
        Command::Shoppers(ShopperCommand::List) => print_json(&sdk.shoppers.list().await?)?,
        Command::Shoppers(ShopperCommand::Get { id }) => {
            print_json(&sdk.shoppers.get(&id).await?)?;
        }
        Command::Shoppers(ShopperCommand::WalletToken { id }) => {
            print_json(&sdk.shoppers.wallet_token(&id).await?)?;
        }
        Command::Payments(PaymentCommand::List) => print_json(&sdk.payments.list().await?)?,
        Command::Payments(PaymentCommand::Get { id }) => {
            print_json(&sdk.payments.get(&id).await?)?;
        }
        Command::Invoice { id } => println!("{}", sdk.fiat_payments.invoice(&id).await?),
        Command::SendInvoice { id } => {
            sdk.fiat_payments.send_invoice(&id).await?;
            tracing::info!(payment = %id, "invoice sent");
        }
        Command::Receipt { id } => println!("{}", sdk.fiat_payments.receipt(&id).await?),
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_nested_subcommand() {
        let cli = Cli::try_parse_from([
            "limepay",
            "--env",
            "http://localhost",
            "--api-key",
            "key",
            "--api-secret",
            "secret",
            "shoppers",
            "wallet-token",
            "12345",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Shoppers(ShopperCommand::WalletToken { ref id }) if id == "12345"
        ));
        assert_eq!(cli.timeout_secs, None);
    }

    #[test]
    fn test_parses_timeout() {
        let cli = Cli::try_parse_from([
            "limepay",
            "--env",
            "http://localhost",
            "--api-key",
            "key",
            "--api-secret",
            "secret",
            "--timeout-secs",
            "5",
            "send-invoice",
            "0",
        ])
        .unwrap();
        assert_eq!(cli.timeout_secs, Some(5));
        assert!(matches!(cli.command, Command::SendInvoice { .. }));
    }

    #[test]
    fn test_credentials_are_optional_flags() {
        let cli = Cli::try_parse_from(["limepay", "ping"]).unwrap();
        assert!(cli.env.is_none());
        assert!(cli.api_key.is_none());
        assert!(cli.api_secret.is_none());
    }

    #[test]
    fn test_full_flags_build_config() {
        let cli = Cli::try_parse_from([
            "limepay",
            "--env",
            "http://localhost/v1",
            "--api-key",
            "key",
            "--api-secret",
            "secret",
            "--timeout-secs",
            "7",
            "ping",
        ])
        .unwrap();
        let config = cli.requester_config().unwrap();
        assert_eq!(config.base_url, "http://localhost/v1");
        assert_eq!(config.api_key, "key");
        assert_eq!(config.api_secret, "secret");
        assert_eq!(config.timeout, Some(Duration::from_secs(7)));
    }
}
