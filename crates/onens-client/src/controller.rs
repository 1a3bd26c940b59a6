//! # Registrar Controller Wrapper
//!
//! The controller runs commit/reveal registration for names directly
//! under the root domain. This wrapper marshals the calls; the timing of
//! the commit/reveal window is the caller's concern.
//!
//! `makeCommitment` and `register` share a trailing parameter block
//! (resolver, calldata, reverse record, fuses, wrapper expiry) that is
//! rarely varied per call; [`RegistrationOptions`] carries it with the
//! contract's customary defaults.

use std::sync::Arc;
use std::time::Duration;

use onens_core::unqualified_name;

use crate::abi::{self, Token};
use crate::backend::{LedgerBackend, TransactionRequest};
use crate::error::LedgerError;
use crate::registry::Registry;
use crate::types::Address;

/// ERC-165 identifier of the permanent registrar controller interface.
const CONTROLLER_INTERFACE: [u8; 4] = [0x01, 0x8f, 0xac, 0x06];

const MAKE_COMMITMENT_SIG: &str =
    "makeCommitment(string,address,uint256,bytes32,address,bytes[],bool,uint32,uint64)";
const REGISTER_SIG: &str =
    "register(string,address,uint256,bytes32,address,bytes[],bool,uint32,uint64)";

/// The commitment parameter block shared by `makeCommitment` and
/// `register`.
#[derive(Debug, Clone)]
pub struct RegistrationOptions {
    /// Resolver to configure for the new name.
    pub resolver: Address,
    /// Resolver calldata to run at registration.
    pub data: Vec<Vec<u8>>,
    /// Whether to create the reverse record.
    pub reverse_record: bool,
    /// Name-wrapper fuses to burn.
    pub fuses: u32,
    /// Name-wrapper expiry.
    pub wrapper_expiry: u64,
}

impl Default for RegistrationOptions {
    fn default() -> Self {
        Self {
            resolver: Address::ZERO,
            data: Vec::new(),
            reverse_record: false,
            fuses: 0,
            wrapper_expiry: u64::MAX,
        }
    }
}

/// Wrapper for the registrar controller contract.
pub struct RegistrarController {
    backend: Arc<dyn LedgerBackend>,
    root: String,
    contract_addr: Address,
    options: RegistrationOptions,
}

impl RegistrarController {
    /// Bind the controller for a root domain at the given address.
    pub fn new(backend: Arc<dyn LedgerBackend>, root: &str, contract_addr: Address) -> Self {
        Self {
            backend,
            root: root.to_string(),
            contract_addr,
            options: RegistrationOptions::default(),
        }
    }

    /// Locate the controller through the root domain's resolver and bind
    /// it.
    pub fn discover(
        backend: Arc<dyn LedgerBackend>,
        registry: &Registry,
        root: &str,
    ) -> Result<Self, LedgerError> {
        let resolver = registry.resolver(root)?;
        let contract_addr = resolver.interface_implementer(CONTROLLER_INTERFACE)?;
        if contract_addr.is_zero() {
            return Err(LedgerError::Invalid(format!(
                "no registrar controller advertised for {root}"
            )));
        }
        Ok(Self::new(backend, root, contract_addr))
    }

    /// Replace the commitment parameter block.
    pub fn with_options(mut self, options: RegistrationOptions) -> Self {
        self.options = options;
        self
    }

    /// The bound contract address.
    pub fn contract_addr(&self) -> Address {
        self.contract_addr
    }

    /// The name suffix the controller registers under (e.g. `country`).
    pub fn base_extension(&self) -> Result<String, LedgerError> {
        let data = abi::encode_call("baseExtension()", &[]);
        abi::decode_string(&self.backend.call(self.contract_addr, &data)?)
    }

    /// The node identifier of the controller's base domain.
    pub fn base_node(&self) -> Result<[u8; 32], LedgerError> {
        let data = abi::encode_call("baseNode()", &[]);
        abi::decode_bytes32(&self.backend.call(self.contract_addr, &data)?)
    }

    /// The minimum duration for which a name can be registered.
    pub fn min_registration_duration(&self) -> Result<Duration, LedgerError> {
        let data = abi::encode_call("MIN_REGISTRATION_DURATION()", &[]);
        let secs = abi::decode_u64(&self.backend.call(self.contract_addr, &data)?)?;
        Ok(Duration::from_secs(secs))
    }

    /// True if the name is available for registration.
    pub fn available(&self, domain: &str) -> Result<bool, LedgerError> {
        let name = unqualified_name(domain, &self.root)?;
        let data = abi::encode_call("available(string)", &[Token::Str(name)]);
        abi::decode_bool(&self.backend.call(self.contract_addr, &data)?)
    }

    /// True if the controller considers the name well-formed.
    pub fn valid(&self, domain: &str) -> Result<bool, LedgerError> {
        let name = unqualified_name(domain, &self.root)?;
        let data = abi::encode_call("valid(string)", &[Token::Str(name)]);
        abi::decode_bool(&self.backend.call(self.contract_addr, &data)?)
    }

    /// The base and premium price of registering a name for a duration.
    pub fn rent_price(&self, name: &str, duration_secs: u64) -> Result<(u128, u128), LedgerError> {
        let data = abi::encode_call("rentPrice(string,uint256)", &[
            Token::Str(name.to_string()),
            Token::Uint(u128::from(duration_secs)),
        ]);
        abi::decode_u128_pair(&self.backend.call(self.contract_addr, &data)?)
    }

    /// The rent in wei per second for a name.
    pub fn rent_cost(&self, domain: &str) -> Result<u128, LedgerError> {
        let name = unqualified_name(domain, &self.root)?;
        let (base, premium) = self.rent_price(&name, 1)?;
        Ok(base.saturating_add(premium))
    }

    /// The minimum age a commitment must reach before reveal.
    pub fn min_commitment_age(&self) -> Result<Duration, LedgerError> {
        let data = abi::encode_call("minCommitmentAge()", &[]);
        let secs = abi::decode_u64(&self.backend.call(self.contract_addr, &data)?)?;
        Ok(Duration::from_secs(secs))
    }

    /// The age past which a commitment can no longer be revealed.
    pub fn max_commitment_age(&self) -> Result<Duration, LedgerError> {
        let data = abi::encode_call("maxCommitmentAge()", &[]);
        let secs = abi::decode_u64(&self.backend.call(self.contract_addr, &data)?)?;
        Ok(Duration::from_secs(secs))
    }

    /// The commitment hash for a name/owner/duration/secret tuple,
    /// computed by the contract.
    pub fn commitment_hash(
        &self,
        domain: &str,
        owner: Address,
        duration_secs: u64,
        secret: [u8; 32],
    ) -> Result<[u8; 32], LedgerError> {
        let name = unqualified_name(domain, &self.root)?;
        let data = abi::encode_call(MAKE_COMMITMENT_SIG, &self.commitment_tokens(
            name,
            owner,
            duration_secs,
            secret,
        ));
        abi::decode_bytes32(&self.backend.call(self.contract_addr, &data)?)
    }

    /// The block timestamp at which a commitment was recorded, zero if
    /// absent.
    pub fn commitment_time(
        &self,
        domain: &str,
        owner: Address,
        duration_secs: u64,
        secret: [u8; 32],
    ) -> Result<u64, LedgerError> {
        let commitment = self.commitment_hash(domain, owner, duration_secs, secret)?;
        let data = abi::encode_call("commitments(bytes32)", &[Token::Bytes32(commitment)]);
        abi::decode_u64(&self.backend.call(self.contract_addr, &data)?)
    }

    /// Submit the commitment for a pending registration.
    pub fn commit(
        &self,
        from: Address,
        domain: &str,
        owner: Address,
        duration_secs: u64,
        secret: [u8; 32],
    ) -> Result<String, LedgerError> {
        let commitment = self.commitment_hash(domain, owner, duration_secs, secret)?;
        let data = abi::encode_call("commit(bytes32)", &[Token::Bytes32(commitment)]);
        self.send(from, data, None)
    }

    /// Reveal a commitment and register the name.
    ///
    /// `value_wei` must cover the rent for the requested duration; the
    /// commit/reveal window timing is not checked here.
    pub fn register(
        &self,
        from: Address,
        domain: &str,
        owner: Address,
        duration_secs: u64,
        secret: [u8; 32],
        value_wei: u128,
    ) -> Result<String, LedgerError> {
        let name = unqualified_name(domain, &self.root)?;
        let data = abi::encode_call(REGISTER_SIG, &self.commitment_tokens(
            name,
            owner,
            duration_secs,
            secret,
        ));
        self.send(from, data, Some(value_wei))
    }

    /// Renew a registered name, buying as much time as `value_wei` covers
    /// at the current rent cost.
    pub fn renew(
        &self,
        from: Address,
        registry: &Registry,
        domain: &str,
        value_wei: u128,
    ) -> Result<String, LedgerError> {
        let name = unqualified_name(domain, &self.root)?;
        if registry.owner(domain)?.is_zero() {
            return Err(LedgerError::NotRegistered {
                domain: domain.to_string(),
            });
        }
        let cost = self.rent_cost(domain)?;
        if cost == 0 {
            return Err(LedgerError::Invalid(format!(
                "zero rent cost reported for {domain}"
            )));
        }
        let duration = value_wei / cost;
        let data = abi::encode_call("renew(string,uint256)", &[
            Token::Str(name),
            Token::Uint(duration),
        ]);
        self.send(from, data, Some(value_wei))
    }

    fn commitment_tokens(
        &self,
        name: String,
        owner: Address,
        duration_secs: u64,
        secret: [u8; 32],
    ) -> [Token; 9] {
        [
            Token::Str(name),
            Token::Address(owner),
            Token::Uint(u128::from(duration_secs)),
            Token::Bytes32(secret),
            Token::Address(self.options.resolver),
            Token::BytesArray(self.options.data.clone()),
            Token::Bool(self.options.reverse_record),
            Token::Uint(u128::from(self.options.fuses)),
            Token::Uint(u128::from(self.options.wrapper_expiry)),
        ]
    }

    fn send(
        &self,
        from: Address,
        data: Vec<u8>,
        value: Option<u128>,
    ) -> Result<String, LedgerError> {
        self.backend.send_transaction(&TransactionRequest {
            from,
            to: self.contract_addr,
            data,
            value,
        })
    }
}
