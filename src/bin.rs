use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::OsRng;
use serde::Serializer;
use serde_derive::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use nemeanlib::{
    accounts::{AcceptAll, RistrettoPointValidator},
    keys::{KeyValidator, SecretKey},
    Account, PrivateKey, Seed,
};

#[derive(Parser)]
#[command(name = "nemean")]
#[command(about = "nemean wallet", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new account
    Create {
        /// Check applied to each derived view key candidate
        #[arg(long, value_enum, default_value_t = ValidatorKind::AcceptAll)]
        validator: ValidatorKind,
        /// Seeds to draw before giving up
        #[arg(long, default_value_t = 8)]
        max_attempts: u32,
        #[arg(long)]
        json: bool,
    },
    /// Decode a private key and show what derives from it
    Inspect {
        #[arg(long)]
        private_key: String,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ValidatorKind {
    AcceptAll,
    Ristretto,
}

impl ValidatorKind {
    fn validator(self) -> Box<dyn KeyValidator> {
        match self {
            ValidatorKind::AcceptAll => Box::new(AcceptAll),
            ValidatorKind::Ristretto => Box::new(RistrettoPointValidator),
        }
    }
}

/// What the CLI prints about a key. Every secret field is wiped on drop.
#[derive(Serialize)]
struct KeyReport {
    #[serde(serialize_with = "serialize_secret")]
    private_key: Zeroizing<String>,
    counter: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(serialize_with = "serialize_secret")]
    sig_key: Zeroizing<String>,
    #[serde(serialize_with = "serialize_secret")]
    prf_key: Zeroizing<String>,
}

fn serialize_secret<S: Serializer>(
    secret: &Zeroizing<String>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(secret)
}

impl KeyReport {
    fn new(private_key: &PrivateKey, address: Option<String>) -> KeyReport {
        let sub_keys = private_key.sub_keys();
        KeyReport {
            private_key: private_key.to_zeroizing_string(),
            counter: private_key.counter(),
            address,
            sig_key: Zeroizing::new(hex::encode(&sub_keys.sig_key[..])),
            prf_key: Zeroizing::new(hex::encode(&sub_keys.prf_key[..])),
        }
    }

    fn print(&self, json: bool) -> anyhow::Result<()> {
        if json {
            let rendered = Zeroizing::new(serde_json::to_string_pretty(self)?);
            println!("{}", rendered.as_str());
        } else {
            println!("private key: {}", self.private_key.as_str());
            println!("counter:     {}", self.counter);
            if let Some(address) = &self.address {
                println!("address:     {}", address);
            }
            println!("sig key:     {}", self.sig_key.as_str());
            println!("prf key:     {}", self.prf_key.as_str());
        }
        Ok(())
    }
}

/// Draws fresh seeds until one derives, since an exhausted seed can never be reused.
fn create_account(validator: &dyn KeyValidator, max_attempts: u32) -> anyhow::Result<Account> {
    for attempt in 1..=max_attempts {
        let seed = Seed::random(&mut OsRng)?;
        match Account::from_seed_with(seed, validator) {
            Ok(account) => return Ok(account),
            Err(err) if err.is_recoverable() => {
                warn!(attempt, "{}, drawing a new seed", err);
            }
            Err(err) => return Err(err.into()),
        }
    }
    bail!("no valid account after {} attempts", max_attempts)
}

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Create {
            validator,
            max_attempts,
            json,
        } => {
            let account = create_account(validator.validator().as_ref(), max_attempts)?;
            info!(counter = account.private_key().counter(), "created account");
            // an unassigned address carries nothing worth printing
            let address = Some(account.address())
                .filter(|address| !address.is_placeholder())
                .map(|address| address.to_string());
            let private_key = account.into_private_key();
            KeyReport::new(&private_key, address).print(json)?;
        }
        Commands::Inspect { private_key, json } => {
            let encoded = Zeroizing::new(private_key);
            let private_key: PrivateKey = encoded
                .trim()
                .parse()
                .context("failed to parse private key")?;
            KeyReport::new(&private_key, None).print(json)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn create_account_test() {
        let account = create_account(&AcceptAll, 1).unwrap();
        assert_eq!(account.private_key().counter(), 2);

        let never = |_: &[u8; 32]| false;
        let err = create_account(&never, 2).unwrap_err();
        assert!(err.to_string().contains("after 2 attempts"));
    }

    fn wiped_on_drop(_: &Zeroizing<String>) {}

    #[test]
    fn key_report_secrets_are_zeroizing_test() {
        let private_key = create_account(&AcceptAll, 1).unwrap().into_private_key();
        let report = KeyReport::new(&private_key, None);
        wiped_on_drop(&report.private_key);
        wiped_on_drop(&report.sig_key);
        wiped_on_drop(&report.prf_key);

        assert_eq!(report.private_key.as_str(), private_key.to_zeroizing_string().as_str());
        assert_eq!(report.sig_key.as_str(), hex::encode(&private_key.sig_key()[..]));

        let json = Zeroizing::new(serde_json::to_string(&report).unwrap());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["private_key"], report.private_key.as_str());
        assert_eq!(value["counter"], 2);
        assert!(value.get("address").is_none());
    }
}
