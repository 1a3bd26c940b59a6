//! # Client Configuration
//!
//! Explicit configuration injected at construction time. Callers own the
//! loading (flags, files, environment); this crate only consumes the
//! resulting struct.

use crate::types::Address;

/// Deployed addresses of the name-service contracts.
#[derive(Debug, Clone)]
pub struct ContractAddresses {
    /// The domain registry.
    pub registry: Address,
    /// The base registrar token contract.
    pub base_registrar: Address,
    /// The commit/reveal registrar controller.
    pub registrar_controller: Address,
    /// The public DNS-record resolver.
    pub public_resolver: Address,
    /// The DNSSEC oracle.
    pub dnssec_oracle: Address,
}

/// Configuration for a ledger connection.
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: String,
    /// Chain identifier of the target network.
    pub chain_id: u64,
    /// The root domain the registrar operates under (e.g. `country`).
    pub root_domain: String,
    /// Per-request timeout in seconds (default: 30).
    pub timeout_secs: u64,
    /// Deployed contract addresses.
    pub contracts: ContractAddresses,
}

impl LedgerConfig {
    /// Create a configuration with the default timeout.
    pub fn new(
        rpc_url: impl Into<String>,
        chain_id: u64,
        root_domain: impl Into<String>,
        contracts: ContractAddresses,
    ) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            chain_id,
            root_domain: root_domain.into(),
            timeout_secs: 30,
            contracts,
        }
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}
