use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
mod auth;
use seedkey::{
    DEFAULT_ALGORITHM, DEFAULT_DIGEST, DEFAULT_IVSIZE, DEFAULT_KEYSIZE, KeyAlgorithm, KeyParams,
    SecureKey, derive_key,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, clap::Args)]
struct KeyArgs {
    /// Cipher algorithm, optionally with mode and padding (e.g. AES/CBC/PKCS5Padding)
    #[arg(short, long, env = "SEEDKEY_ALGORITHM", default_value = DEFAULT_ALGORITHM)]
    algorithm: String,

    /// Key size in bits
    #[arg(short, long, env = "SEEDKEY_KEYSIZE", default_value_t = DEFAULT_KEYSIZE)]
    keysize: u32,

    /// IV size in bits
    #[arg(short, long, env = "SEEDKEY_IVSIZE", default_value_t = DEFAULT_IVSIZE)]
    ivsize: u32,

    /// Hash used to turn the password into a seed
    #[arg(long, env = "SEEDKEY_DIGEST", default_value = DEFAULT_DIGEST)]
    digest: String,
}

impl KeyArgs {
    fn to_key_params(&self) -> Result<KeyParams> {
        let params = KeyParams::new(&self.algorithm, self.keysize, self.ivsize)?
            .with_digest_name(&self.digest)?;
        Ok(params)
    }
}

#[derive(Debug, Parser)]
#[command(name = "seedkey")]
#[command(
    version,
    about = "Derives a reproducible symmetric key and IV from a password."
)]
struct Cli {
    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Derives key material from a password
    Derive {
        #[command(flatten)]
        key: KeyArgs,

        /// Print the result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// Ask for the password twice
        #[arg(long, default_value_t = false)]
        confirm: bool,
    },

    /// Lists supported algorithms and their sizes
    Algorithms,
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn print_key(key: &SecureKey, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(key).context("failed to encode key as JSON")?;
        println!("{out}");
        return Ok(());
    }

    println!("algorithm: {}", key.algorithm());
    println!("keysize:   {}", key.keysize());
    println!("key:       {}", hex::encode(key.key()));
    println!("iv:        {}", hex::encode(key.iv()));
    Ok(())
}

fn main() -> Result<()> {
    // a missing .env is fine
    let _ = dotenvy::dotenv();

    let args = Cli::parse();
    init_logging(&args.log_level);

    match args.command {
        Commands::Derive { key, json, confirm } => {
            let params = key.to_key_params()?;
            let password = if confirm {
                auth::read_new_password_with_confirmation()?
            } else {
                auth::read_password()?
            };

            let derived = derive_key(password.as_bytes(), &params)?;
            drop(password);

            tracing::info!(algorithm = derived.algorithm(), "key derived");
            print_key(&derived, json)?;
        }

        Commands::Algorithms => {
            let name_width = KeyAlgorithm::ALL
                .iter()
                .map(|a| a.name().len())
                .chain(std::iter::once("Algorithm".len()))
                .max()
                .unwrap_or_default();

            println!("{:<name_width$}  Sizes (bits)", "Algorithm");
            println!("{:-<name_width$}  {:-<12}", "", "");

            for alg in KeyAlgorithm::ALL {
                println!("{:<name_width$}  {}", alg.name(), alg.sizes());
            }
        }
    }

    Ok(())
}
