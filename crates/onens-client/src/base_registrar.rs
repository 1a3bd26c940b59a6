//! # Base Registrar Wrapper
//!
//! The base registrar issues one token per second-level name; the token
//! identifier is the label identifier of the unqualified name. Ownership
//! and expiry lookups therefore strip the root domain and hash the
//! remaining label before marshalling.

use std::sync::Arc;

use onens_core::{label_hash, unqualified_name, LabelId};

use crate::abi::{self, Token};
use crate::backend::{LedgerBackend, TransactionRequest};
use crate::error::LedgerError;
use crate::registry::Registry;
use crate::types::Address;

/// ERC-165 identifier of the registrar's reclaim interface.
const RECLAIM_INTERFACE: [u8; 4] = [0x28, 0xed, 0x4f, 0x6c];

/// Where a name's registration lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// No registration found.
    None,
    /// Registered with the permanent registrar.
    Permanent,
}

impl Registration {
    /// String form matching the registrar's vocabulary.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Permanent => "permanent",
        }
    }
}

impl std::fmt::Display for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wrapper for the base registrar token contract.
pub struct BaseRegistrar {
    backend: Arc<dyn LedgerBackend>,
    root: String,
    contract_addr: Address,
}

impl BaseRegistrar {
    /// Bind the registrar for a root domain at the given address.
    ///
    /// Probes the reclaim interface and refuses to bind a contract that
    /// does not support it.
    pub fn new(
        backend: Arc<dyn LedgerBackend>,
        root: &str,
        contract_addr: Address,
    ) -> Result<Self, LedgerError> {
        let registrar = Self {
            backend,
            root: root.to_string(),
            contract_addr,
        };
        if !registrar.supports_interface(RECLAIM_INTERFACE)? {
            return Err(LedgerError::UnsupportedContract {
                address: contract_addr.to_hex(),
                interface: hex::encode(RECLAIM_INTERFACE),
            });
        }
        Ok(registrar)
    }

    /// The bound contract address.
    pub fn contract_addr(&self) -> Address {
        self.contract_addr
    }

    /// The root domain this registrar operates under.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The owner of the token representing a name.
    ///
    /// The registrar reverts rather than report a zero owner for a vacant
    /// name; that revert is mapped to `None`.
    pub fn owner(&self, domain: &str) -> Result<Option<Address>, LedgerError> {
        let token = self.token_id(domain)?;
        let data = abi::encode_call("ownerOf(uint256)", &[Token::Bytes32(token.0)]);
        match self.backend.call(self.contract_addr, &data) {
            Ok(ret) => Ok(Some(abi::decode_address(&ret)?)),
            Err(LedgerError::Reverted { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// The unix timestamp at which the registration expires.
    pub fn expiry(&self, domain: &str) -> Result<u64, LedgerError> {
        let token = self.token_id(domain)?;
        let data = abi::encode_call("nameExpires(uint256)", &[Token::Bytes32(token.0)]);
        abi::decode_u64(&self.backend.call(self.contract_addr, &data)?)
    }

    /// Reclaim registry ownership of a name for its token holder.
    pub fn reclaim(
        &self,
        from: Address,
        domain: &str,
        new_owner: Address,
    ) -> Result<String, LedgerError> {
        let token = self.token_id(domain)?;
        let data = abi::encode_call("reclaim(uint256,address)", &[
            Token::Bytes32(token.0),
            Token::Address(new_owner),
        ]);
        self.send(from, data)
    }

    /// Transfer the token holding a name to a new owner.
    pub fn transfer(
        &self,
        from: Address,
        domain: &str,
        new_owner: Address,
    ) -> Result<String, LedgerError> {
        let owner = self.owner(domain)?.ok_or_else(|| LedgerError::NotRegistered {
            domain: domain.to_string(),
        })?;
        let token = self.token_id(domain)?;
        let data = abi::encode_call("transferFrom(address,address,uint256)", &[
            Token::Address(owner),
            Token::Address(new_owner),
            Token::Bytes32(token.0),
        ]);
        self.send(from, data)
    }

    /// Which registrar a name is registered with, judged by registry
    /// ownership.
    pub fn registration(
        &self,
        registry: &Registry,
        domain: &str,
    ) -> Result<Registration, LedgerError> {
        let owner = registry.owner(domain)?;
        if owner.is_zero() {
            Ok(Registration::None)
        } else {
            Ok(Registration::Permanent)
        }
    }

    /// ERC-165 interface probe.
    pub fn supports_interface(&self, interface_id: [u8; 4]) -> Result<bool, LedgerError> {
        let data = abi::encode_call("supportsInterface(bytes4)", &[Token::Bytes4(interface_id)]);
        abi::decode_bool(&self.backend.call(self.contract_addr, &data)?)
    }

    /// The token identifier of a name under this registrar's root.
    fn token_id(&self, domain: &str) -> Result<LabelId, LedgerError> {
        let name = unqualified_name(domain, &self.root)?;
        Ok(label_hash(&name)?)
    }

    fn send(&self, from: Address, data: Vec<u8>) -> Result<String, LedgerError> {
        self.backend.send_transaction(&TransactionRequest {
            from,
            to: self.contract_addr,
            data,
            value: None,
        })
    }
}
