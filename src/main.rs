//! memofib binary: serve the HTTP API or compute a single value.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use memofib::api::{start_server, AppState};
use memofib::cache::FibCache;
use memofib::config::Config;
use memofib::fib::fib;

#[derive(Parser)]
#[command(name = "memofib", version, about = "Memoized arbitrary-precision Fibonacci HTTP service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP API server.
    Serve {
        /// Bind address (overrides config file and MEMOFIB_BIND).
        #[arg(long)]
        bind: Option<String>,
        /// Listen port (overrides config file and MEMOFIB_PORT).
        #[arg(long)]
        port: Option<u16>,
    },
    /// Compute F(NTH) once and print the decimal string.
    Fib {
        /// Index of the Fibonacci number to compute.
        nth: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { bind, port } => {
            let mut config = Config::load_or_default();
            if let Some(bind) = bind {
                config.bind = bind;
            }
            if let Some(port) = port {
                config.port = port;
            }
            start_server(&config, AppState::new())
                .await
                .map_err(anyhow::Error::msg)?;
        }
        Command::Fib { nth } => {
            let mut cache = FibCache::new();
            println!("{}", fib(&mut cache, nth));
        }
    }
    Ok(())
}
