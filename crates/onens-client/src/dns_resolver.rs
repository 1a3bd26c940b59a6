//! # DNS Resolver Wrapper
//!
//! The public resolver stores DNS RRsets per domain. Record-level reads
//! are keyed by the domain's node identifier plus the Keccak digest of
//! the record name's wire-format encoding; the node identifier is
//! computed once at construction.

use std::sync::Arc;

use onens_core::{dns_wire_format_hash, name_hash, NodeId};

use crate::abi::{self, Token};
use crate::backend::{LedgerBackend, TransactionRequest};
use crate::error::LedgerError;
use crate::types::Address;

/// ERC-165 identifier of the DNS record resolver interface.
const DNS_RESOLVER_INTERFACE: [u8; 4] = [0xa8, 0xfa, 0x56, 0x82];

/// Wrapper for a DNS-record resolver contract bound to one domain.
pub struct DnsResolver {
    backend: Arc<dyn LedgerBackend>,
    domain: String,
    node: NodeId,
    contract_addr: Address,
}

impl DnsResolver {
    /// Bind a resolver for `domain` at the given address.
    ///
    /// Probes the DNS-resolver interface and refuses to bind a contract
    /// that does not implement it.
    pub fn new(
        backend: Arc<dyn LedgerBackend>,
        domain: &str,
        contract_addr: Address,
    ) -> Result<Self, LedgerError> {
        let node = name_hash(domain)?;
        let resolver = Self {
            backend,
            domain: domain.to_string(),
            node,
            contract_addr,
        };
        if !resolver.supports_interface(DNS_RESOLVER_INTERFACE)? {
            return Err(LedgerError::UnsupportedContract {
                address: contract_addr.to_hex(),
                interface: hex::encode(DNS_RESOLVER_INTERFACE),
            });
        }
        Ok(resolver)
    }

    /// The bound contract address.
    pub fn contract_addr(&self) -> Address {
        self.contract_addr
    }

    /// The domain this resolver was bound for.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Fetch the RRset for a record name and type.
    pub fn record(&self, name: &str, rr_type: u16) -> Result<Vec<u8>, LedgerError> {
        let data = abi::encode_call("dnsRecord(bytes32,bytes32,uint16)", &[
            Token::Bytes32(self.node.0),
            Token::Bytes32(dns_wire_format_hash(name)?),
            Token::Uint(u128::from(rr_type)),
        ]);
        abi::decode_bytes(&self.backend.call(self.contract_addr, &data)?)
    }

    /// True if the record name has any RRsets.
    pub fn has_records(&self, name: &str) -> Result<bool, LedgerError> {
        let data = abi::encode_call("hasDNSRecords(bytes32,bytes32)", &[
            Token::Bytes32(self.node.0),
            Token::Bytes32(dns_wire_format_hash(name)?),
        ]);
        abi::decode_bool(&self.backend.call(self.contract_addr, &data)?)
    }

    /// Set one or more RRsets from wire-format record data.
    pub fn set_records(&self, from: Address, records: &[u8]) -> Result<String, LedgerError> {
        let data = abi::encode_call("setDNSRecords(bytes32,bytes)", &[
            Token::Bytes32(self.node.0),
            Token::Bytes(records.to_vec()),
        ]);
        self.send(from, data)
    }

    /// Clear all records for the domain.
    pub fn clear_records(&self, from: Address) -> Result<String, LedgerError> {
        let data = abi::encode_call("clearRecords(bytes32)", &[Token::Bytes32(self.node.0)]);
        self.send(from, data)
    }

    /// The zone hash of the domain.
    pub fn zonehash(&self) -> Result<Vec<u8>, LedgerError> {
        let data = abi::encode_call("zonehash(bytes32)", &[Token::Bytes32(self.node.0)]);
        abi::decode_bytes(&self.backend.call(self.contract_addr, &data)?)
    }

    /// Set the zone hash of the domain.
    pub fn set_zonehash(&self, from: Address, zonehash: &[u8]) -> Result<String, LedgerError> {
        let data = abi::encode_call("setZonehash(bytes32,bytes)", &[
            Token::Bytes32(self.node.0),
            Token::Bytes(zonehash.to_vec()),
        ]);
        self.send(from, data)
    }

    /// The address implementing an interface on behalf of the domain.
    pub fn interface_implementer(&self, interface_id: [u8; 4]) -> Result<Address, LedgerError> {
        let data = abi::encode_call("interfaceImplementer(bytes32,bytes4)", &[
            Token::Bytes32(self.node.0),
            Token::Bytes4(interface_id),
        ]);
        abi::decode_address(&self.backend.call(self.contract_addr, &data)?)
    }

    /// ERC-165 interface probe.
    pub fn supports_interface(&self, interface_id: [u8; 4]) -> Result<bool, LedgerError> {
        let data = abi::encode_call("supportsInterface(bytes4)", &[Token::Bytes4(interface_id)]);
        abi::decode_bool(&self.backend.call(self.contract_addr, &data)?)
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
