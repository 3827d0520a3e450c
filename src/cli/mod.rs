mod args;
mod commands;
mod global;
mod handlers;

use clap::{Parser, Subcommand};
use opb58::Opb58Config;
use tracing_subscriber::EnvFilter;

use args::{DecodeArgs, EncodeArgs, FitsArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "opb58")]
#[command(version)]
#[command(about = "Order-preserving base-58 numerals: compact, sortable encodings of integers and byte strings", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a non-negative integer, hex bytes or text
    Encode(EncodeArgs),
    /// Decode an encoded string
    Decode(DecodeArgs),
    /// Check whether an encoded string fits i32 and i64 without decoding it
    Fits(FitsArgs),
    /// Print the alphabet, boundary constants and byte cache
    Table,
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    // Load settings with user overrides
    let config = Opb58Config::load_with_overrides(cli.global.config.as_deref())?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &config),
        Commands::Fits(args) => handlers::fits::handle(args),
        Commands::Table => handlers::table::handle(),
    }
}

/// Logs go to stderr so they never mix with encoded output. `--verbose` and
/// `--quiet` take precedence over `RUST_LOG`.
fn init_tracing(global: &GlobalArgs) {
    let filter = if global.verbose || global.quiet {
        EnvFilter::new(global.log_level())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(global.log_level()))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
