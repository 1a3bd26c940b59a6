//! Ledger client error types.

use thiserror::Error;

/// Errors from contract wrapper operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The domain failed normalization or decomposition.
    #[error(transparent)]
    Name(#[from] onens_core::NameError),

    /// HTTP transport error.
    #[error("transport error calling {endpoint}: {source}")]
    Transport {
        /// The RPC endpoint that was called.
        endpoint: String,
        /// Underlying HTTP error.
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("ledger RPC {endpoint} returned HTTP {status}: {body}")]
    Http {
        /// The RPC endpoint that was called.
        endpoint: String,
        /// HTTP status code.
        status: u16,
        /// Response body excerpt.
        body: String,
    },

    /// The endpoint answered with a JSON-RPC error object.
    #[error("ledger RPC error from {method}: {message}")]
    Api {
        /// The JSON-RPC method that failed.
        method: String,
        /// The error message from the node.
        message: String,
    },

    /// The contract reverted the call.
    #[error("execution reverted: {message}")]
    Reverted {
        /// Revert reason, when the node supplied one.
        message: String,
    },

    /// A contract return value could not be decoded.
    #[error("failed to decode {what}: {reason}")]
    Decode {
        /// What was being decoded.
        what: &'static str,
        /// Why decoding failed.
        reason: String,
    },

    /// Invalid configuration (address, URL, timeout).
    #[error("configuration error: {0}")]
    Config(String),

    /// A request that cannot be marshalled as asked.
    #[error("invalid request: {0}")]
    Invalid(String),

    /// The name has no registration to operate on.
    #[error("{domain} is not registered")]
    NotRegistered {
        /// The domain that was looked up.
        domain: String,
    },

    /// The contract at the given address failed its interface probe.
    #[error("contract at {address} does not support interface 0x{interface}")]
    UnsupportedContract {
        /// The probed contract address.
        address: String,
        /// The ERC-165 interface identifier, hex-encoded.
        interface: String,
    },

    /// Wrapper methods bridge onto an ambient Tokio runtime; none was found.
    #[error("no async runtime available for ledger call")]
    NoRuntime,
}
