//! Registry queries over JSON-RPC.
//!
//! Each handler builds a [`HttpLedgerBackend`] from flags, runs the
//! wrapper call on a blocking thread (the backend bridges onto the
//! runtime internally), and prints the decoded result.

use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Args;

use onens_client::{
    Address, BaseRegistrar, ContractAddresses, HttpLedgerBackend, LedgerConfig, LedgerError,
    RegistrarController, Registry,
};

/// Connection flags shared by every query command.
#[derive(Args, Debug)]
pub struct ConnectionArgs {
    /// JSON-RPC endpoint URL.
    #[arg(long)]
    pub rpc_url: String,

    /// Chain identifier of the target network.
    #[arg(long, default_value_t = 1)]
    pub chain_id: u64,

    /// Root domain the registrar operates under.
    #[arg(long, default_value = "country")]
    pub root: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,
}

/// Arguments for `onens owner` and `onens resolver`.
#[derive(Args, Debug)]
pub struct RegistryQueryArgs {
    /// Domain to look up.
    pub domain: String,

    /// Registry contract address.
    #[arg(long)]
    pub registry: Address,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Arguments for `onens available`.
#[derive(Args, Debug)]
pub struct AvailableArgs {
    /// Domain to check.
    pub domain: String,

    /// Registrar controller contract address.
    #[arg(long)]
    pub controller: Address,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Arguments for `onens expiry`.
#[derive(Args, Debug)]
pub struct ExpiryArgs {
    /// Domain to look up.
    pub domain: String,

    /// Base registrar contract address.
    #[arg(long)]
    pub registrar: Address,

    #[command(flatten)]
    pub connection: ConnectionArgs,
}

/// Print the registry owner of a domain.
pub fn run_owner(args: &RegistryQueryArgs) -> Result<u8> {
    let registry_addr = args.registry;
    let domain = args.domain.clone();
    let owner = with_backend(&args.connection, registry_addr, move |backend| {
        Registry::new(backend, registry_addr).owner(&domain)
    })?;
    println!("{owner}");
    Ok(0)
}

/// Print the resolver address configured for a domain.
pub fn run_resolver(args: &RegistryQueryArgs) -> Result<u8> {
    let registry_addr = args.registry;
    let domain = args.domain.clone();
    let resolver = with_backend(&args.connection, registry_addr, move |backend| {
        Registry::new(backend, registry_addr).resolver_address(&domain)
    })?;
    println!("{resolver}");
    Ok(0)
}

/// Print whether a domain is available for registration.
pub fn run_available(args: &AvailableArgs) -> Result<u8> {
    let controller_addr = args.controller;
    let root = args.connection.root.clone();
    let domain = args.domain.clone();
    let available = with_backend(&args.connection, controller_addr, move |backend| {
        RegistrarController::new(backend, &root, controller_addr).available(&domain)
    })?;
    println!("{available}");
    Ok(0)
}

/// Print the unix expiry timestamp of a registration.
pub fn run_expiry(args: &ExpiryArgs) -> Result<u8> {
    let registrar_addr = args.registrar;
    let root = args.connection.root.clone();
    let domain = args.domain.clone();
    let expiry = with_backend(&args.connection, registrar_addr, move |backend| {
        BaseRegistrar::new(backend, &root, registrar_addr)?.expiry(&domain)
    })?;
    println!("{expiry}");
    Ok(0)
}

/// Build the backend and run a wrapper call on a blocking thread.
///
/// The backend's sync methods bridge onto the ambient runtime, so the
/// call runs under `spawn_blocking` rather than on a runtime core thread.
fn with_backend<T, F>(connection: &ConnectionArgs, contract: Address, call: F) -> Result<T>
where
    F: FnOnce(Arc<HttpLedgerBackend>) -> Result<T, LedgerError> + Send + 'static,
    T: Send + 'static,
{
    let contracts = ContractAddresses {
        registry: contract,
        base_registrar: contract,
        registrar_controller: contract,
        public_resolver: Address::ZERO,
        dnssec_oracle: Address::ZERO,
    };
    let config = LedgerConfig::new(
        connection.rpc_url.as_str(),
        connection.chain_id,
        connection.root.as_str(),
        contracts,
    )
    .with_timeout(connection.timeout);
    let backend = Arc::new(HttpLedgerBackend::new(&config)?);

    tracing::debug!(
        rpc_url = %connection.rpc_url,
        chain_id = connection.chain_id,
        "querying ledger"
    );

    let rt = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    rt.block_on(async move {
        tokio::task::spawn_blocking(move || call(backend))
            .await
            .map_err(|e| anyhow!("ledger task failed: {e}"))?
            .map_err(Into::into)
    })
}
