//! # onens CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Offline commands run the name identifier engine directly; query
//! commands connect to a JSON-RPC endpoint.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use onens_cli::name::{
    run_hash, run_label, run_normalize, run_part, run_tld, run_wire, HashArgs, LabelArgs,
    NormalizeArgs, PartArgs, TldArgs, WireArgs,
};
use onens_cli::query::{
    run_available, run_expiry, run_owner, run_resolver, AvailableArgs, ExpiryArgs,
    RegistryQueryArgs,
};

/// 1NS name service CLI.
///
/// Computes node and label identifiers, normalizes and decomposes
/// domains, and queries the deployed registry contracts.
#[derive(Parser, Debug)]
#[command(name = "onens", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the node identifier of a domain.
    Hash(HashArgs),

    /// Compute the label identifier of a single label.
    Label(LabelArgs),

    /// Normalize a domain to canonical form.
    Normalize(NormalizeArgs),

    /// Extract the label at a 1-based position.
    Part(PartArgs),

    /// Extract the top-level domain.
    Tld(TldArgs),

    /// Encode a domain in DNS wire format and digest it.
    Wire(WireArgs),

    /// Look up the registry owner of a domain.
    Owner(RegistryQueryArgs),

    /// Look up the resolver address of a domain.
    Resolver(RegistryQueryArgs),

    /// Check whether a domain is available for registration.
    Available(AvailableArgs),

    /// Look up the expiry timestamp of a registration.
    Expiry(ExpiryArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Hash(args) => run_hash(&args),
        Commands::Label(args) => run_label(&args),
        Commands::Normalize(args) => run_normalize(&args),
        Commands::Part(args) => run_part(&args),
        Commands::Tld(args) => run_tld(&args),
        Commands::Wire(args) => run_wire(&args),
        Commands::Owner(args) => run_owner(&args),
        Commands::Resolver(args) => run_resolver(&args),
        Commands::Available(args) => run_available(&args),
        Commands::Expiry(args) => run_expiry(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
