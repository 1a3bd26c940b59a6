//! # onens-cli — command handlers
//!
//! Argument structs and `run_*` handlers for the `onens` binary, split by
//! whether they touch the network: [`name`] holds the offline identifier
//! commands, [`query`] the registry lookups over JSON-RPC.

pub mod name;
pub mod query;
