//! # onens-client — Typed Client for the 1NS Registry Contracts
//!
//! Thin marshalling wrappers around the deployed name-service contracts.
//! Every public operation follows the same shape: derive the node or
//! label identifier for a domain via [`onens_core`], ABI-encode the
//! contract call, submit it through a [`LedgerBackend`], and decode the
//! result into Rust-native types.
//!
//! ## Architecture
//!
//! All RPC interaction sits behind the [`LedgerBackend`] trait. The
//! wrappers hold an `Arc<dyn LedgerBackend>` and never touch the network
//! directly, so every wrapper can be exercised against the canned
//! [`StaticLedgerBackend`] without a node. [`HttpLedgerBackend`] is the
//! production implementation (JSON-RPC over HTTP).
//!
//! Configuration is an explicit [`LedgerConfig`] injected at
//! construction — there is no process-global state and no environment
//! lookup in this crate.
//!
//! ## Write operations
//!
//! State-changing methods submit via `eth_sendTransaction`: the RPC
//! endpoint's key management signs on behalf of the `from` address.
//! This crate never holds private keys.

pub mod abi;
pub mod backend;
pub mod base_registrar;
pub mod config;
pub mod controller;
pub mod dns_resolver;
pub mod dnssec_oracle;
pub mod error;
pub mod registry;
pub mod types;

// Re-export primary types for ergonomic imports.
pub use backend::{HttpLedgerBackend, LedgerBackend, StaticLedgerBackend, TransactionRequest};
pub use base_registrar::{BaseRegistrar, Registration};
pub use config::{ContractAddresses, LedgerConfig};
pub use controller::{RegistrarController, RegistrationOptions};
pub use dns_resolver::DnsResolver;
pub use dnssec_oracle::DnssecOracle;
pub use error::LedgerError;
pub use registry::Registry;
pub use types::Address;
