//! # DNSSEC Oracle Wrapper
//!
//! The oracle holds DNSSEC proof anchors consumed by the DNS registrar.
//! This client only needs to locate it and verify what it claims to be;
//! proof submission flows through other tooling.

use std::sync::Arc;

use crate::abi::{self, Token};
use crate::backend::LedgerBackend;
use crate::error::LedgerError;
use crate::types::Address;

/// Wrapper for the DNSSEC oracle contract.
pub struct DnssecOracle {
    backend: Arc<dyn LedgerBackend>,
    contract_addr: Address,
}

impl DnssecOracle {
    /// Bind the oracle at its deployed address.
    pub fn new(backend: Arc<dyn LedgerBackend>, contract_addr: Address) -> Self {
        Self {
            backend,
            contract_addr,
        }
    }

    /// The bound contract address.
    pub fn contract_addr(&self) -> Address {
        self.contract_addr
    }

    /// ERC-165 interface probe.
    pub fn supports_interface(&self, interface_id: [u8; 4]) -> Result<bool, LedgerError> {
        let data = abi::encode_call("supportsInterface(bytes4)", &[Token::Bytes4(interface_id)]);
        abi::decode_bool(&self.backend.call(self.contract_addr, &data)?)
    }
}
