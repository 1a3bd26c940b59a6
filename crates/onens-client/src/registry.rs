//! # Registry Wrapper
//!
//! The registry is the root of the name hierarchy: it maps node
//! identifiers to owners and resolver addresses. Every method derives the
//! node identifier from the domain string before marshalling, so callers
//! never handle raw hashes.

use std::sync::Arc;

use onens_core::{label_hash, name_hash};

use crate::abi::{self, Token};
use crate::backend::{LedgerBackend, TransactionRequest};
use crate::dns_resolver::DnsResolver;
use crate::error::LedgerError;
use crate::types::Address;

/// Wrapper for the domain registry contract.
pub struct Registry {
    backend: Arc<dyn LedgerBackend>,
    contract_addr: Address,
}

impl Registry {
    /// Bind the registry at its deployed address.
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

    /// The owner of a name; the zero address means unregistered.
    pub fn owner(&self, domain: &str) -> Result<Address, LedgerError> {
        let node = name_hash(domain)?;
        let data = abi::encode_call("owner(bytes32)", &[Token::Bytes32(node.0)]);
        abi::decode_address(&self.backend.call(self.contract_addr, &data)?)
    }

    /// The resolver contract address configured for a name.
    pub fn resolver_address(&self, domain: &str) -> Result<Address, LedgerError> {
        let node = name_hash(domain)?;
        let data = abi::encode_call("resolver(bytes32)", &[Token::Bytes32(node.0)]);
        abi::decode_address(&self.backend.call(self.contract_addr, &data)?)
    }

    /// The resolver for a name, bound and interface-checked.
    pub fn resolver(&self, domain: &str) -> Result<DnsResolver, LedgerError> {
        let address = self.resolver_address(domain)?;
        if address.is_zero() {
            return Err(LedgerError::Invalid(format!(
                "no resolver configured for {domain}"
            )));
        }
        DnsResolver::new(Arc::clone(&self.backend), domain, address)
    }

    /// Set the resolver for a name.
    pub fn set_resolver(
        &self,
        from: Address,
        domain: &str,
        resolver: Address,
    ) -> Result<String, LedgerError> {
        let node = name_hash(domain)?;
        let data = abi::encode_call("setResolver(bytes32,address)", &[
            Token::Bytes32(node.0),
            Token::Address(resolver),
        ]);
        self.send(from, data)
    }

    /// Transfer ownership of a name.
    pub fn set_owner(
        &self,
        from: Address,
        domain: &str,
        new_owner: Address,
    ) -> Result<String, LedgerError> {
        let node = name_hash(domain)?;
        let data = abi::encode_call("setOwner(bytes32,address)", &[
            Token::Bytes32(node.0),
            Token::Address(new_owner),
        ]);
        self.send(from, data)
    }

    /// Set the owner of a subdomain, creating it if absent.
    pub fn set_subdomain_owner(
        &self,
        from: Address,
        domain: &str,
        label: &str,
        new_owner: Address,
    ) -> Result<String, LedgerError> {
        let node = name_hash(domain)?;
        let label_digest = label_hash(label)?;
        let data = abi::encode_call("setSubnodeOwner(bytes32,bytes32,address)", &[
            Token::Bytes32(node.0),
            Token::Bytes32(label_digest.0),
            Token::Address(new_owner),
        ]);
        self.send(from, data)
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
