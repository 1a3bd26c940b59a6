//! # Contract Call Marshalling
//!
//! A minimal ABI codec covering exactly the call surface the wrappers
//! use. Call data is the 4-byte selector (Keccak-256 prefix of the
//! canonical signature) followed by head/tail-encoded arguments: static
//! arguments inline as 32-byte words, dynamic arguments as an offset in
//! the head and length-prefixed, zero-padded data in the tail.
//!
//! Unsigned integers are decoded through fixed-width windows (`u64`,
//! `u128`) that reject values outside the window rather than truncating.

use sha3::{Digest, Keccak256};

use crate::error::LedgerError;
use crate::types::Address;

/// An ABI-encodable argument.
#[derive(Debug, Clone)]
pub enum Token {
    /// `address` — 20 bytes, left-padded.
    Address(Address),
    /// Any `uintN` — big-endian, left-padded.
    Uint(u128),
    /// `bytes32` — used verbatim for node, label, and commitment hashes.
    Bytes32([u8; 32]),
    /// `bytes4` — interface identifiers, right-padded.
    Bytes4([u8; 4]),
    /// `bool`.
    Bool(bool),
    /// `string` — dynamic.
    Str(String),
    /// `bytes` — dynamic.
    Bytes(Vec<u8>),
    /// `bytes[]` — dynamic array of dynamic elements.
    BytesArray(Vec<Vec<u8>>),
}

impl Token {
    fn head_word(&self) -> Option<[u8; 32]> {
        let mut word = [0u8; 32];
        match self {
            Token::Address(addr) => word[12..].copy_from_slice(addr.as_bytes()),
            Token::Uint(value) => word[16..].copy_from_slice(&value.to_be_bytes()),
            Token::Bytes32(bytes) => word.copy_from_slice(bytes),
            Token::Bytes4(bytes) => word[..4].copy_from_slice(bytes),
            Token::Bool(flag) => word[31] = u8::from(*flag),
            Token::Str(_) | Token::Bytes(_) | Token::BytesArray(_) => return None,
        }
        Some(word)
    }

    fn tail(&self) -> Option<Vec<u8>> {
        match self {
            Token::Str(s) => Some(length_prefixed(s.as_bytes())),
            Token::Bytes(b) => Some(length_prefixed(b)),
            Token::BytesArray(items) => {
                let mut encoded = uint_word(items.len() as u128).to_vec();
                let head_size = 32 * items.len();
                let mut offsets = Vec::with_capacity(head_size);
                let mut tail = Vec::new();
                for item in items {
                    offsets.extend_from_slice(&uint_word((head_size + tail.len()) as u128));
                    tail.extend_from_slice(&length_prefixed(item));
                }
                encoded.extend_from_slice(&offsets);
                encoded.extend_from_slice(&tail);
                Some(encoded)
            }
            _ => None,
        }
    }
}

/// The 4-byte function selector of a canonical signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let digest = keccak256(signature.as_bytes());
    [digest[0], digest[1], digest[2], digest[3]]
}

/// Encode a full contract call: selector plus head/tail argument data.
pub fn encode_call(signature: &str, tokens: &[Token]) -> Vec<u8> {
    let mut data = selector(signature).to_vec();
    let head_size = 32 * tokens.len();
    let mut heads = Vec::with_capacity(head_size);
    let mut tail = Vec::new();
    for token in tokens {
        match token.head_word() {
            Some(word) => heads.extend_from_slice(&word),
            None => {
                heads.extend_from_slice(&uint_word((head_size + tail.len()) as u128));
                tail.extend_from_slice(&token.tail().unwrap_or_default());
            }
        }
    }
    data.extend_from_slice(&heads);
    data.extend_from_slice(&tail);
    data
}

/// Decode a returned `address`.
pub fn decode_address(data: &[u8]) -> Result<Address, LedgerError> {
    let word = first_word(data, "address")?;
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&word[12..]);
    Ok(Address(bytes))
}

/// Decode a returned `bool`.
pub fn decode_bool(data: &[u8]) -> Result<bool, LedgerError> {
    let word = first_word(data, "bool")?;
    Ok(word[31] != 0)
}

/// Decode a returned `bytes32`.
pub fn decode_bytes32(data: &[u8]) -> Result<[u8; 32], LedgerError> {
    Ok(*first_word(data, "bytes32")?)
}

/// Decode a `uint256` that must fit in 64 bits.
pub fn decode_u64(data: &[u8]) -> Result<u64, LedgerError> {
    let word = first_word(data, "uint64")?;
    if word[..24].iter().any(|&b| b != 0) {
        return Err(LedgerError::Decode {
            what: "uint64",
            reason: "value exceeds 64 bits".to_string(),
        });
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&word[24..]);
    Ok(u64::from_be_bytes(bytes))
}

/// Decode a `uint256` that must fit in 128 bits.
pub fn decode_u128(data: &[u8]) -> Result<u128, LedgerError> {
    decode_u128_at(data, 0)
}

/// Decode the two-field `uint256` pair returned by `rentPrice`.
pub fn decode_u128_pair(data: &[u8]) -> Result<(u128, u128), LedgerError> {
    Ok((decode_u128_at(data, 0)?, decode_u128_at(data, 32)?))
}

/// Decode returned dynamic `bytes`.
pub fn decode_bytes(data: &[u8]) -> Result<Vec<u8>, LedgerError> {
    let offset = decode_u128(data)? as usize;
    let length_end = offset.checked_add(32).filter(|&end| end <= data.len());
    let Some(length_end) = length_end else {
        return Err(LedgerError::Decode {
            what: "bytes",
            reason: "offset past end of data".to_string(),
        });
    };
    let length = decode_u128(&data[offset..])? as usize;
    let end = length_end.checked_add(length).filter(|&end| end <= data.len());
    let Some(end) = end else {
        return Err(LedgerError::Decode {
            what: "bytes",
            reason: "length past end of data".to_string(),
        });
    };
    Ok(data[length_end..end].to_vec())
}

/// Decode a returned dynamic `string`.
pub fn decode_string(data: &[u8]) -> Result<String, LedgerError> {
    String::from_utf8(decode_bytes(data)?).map_err(|e| LedgerError::Decode {
        what: "string",
        reason: e.to_string(),
    })
}

fn decode_u128_at(data: &[u8], offset: usize) -> Result<u128, LedgerError> {
    if data.len() < offset + 32 {
        return Err(LedgerError::Decode {
            what: "uint128",
            reason: format!("return data is {} bytes, need {}", data.len(), offset + 32),
        });
    }
    let word = &data[offset..offset + 32];
    if word[..16].iter().any(|&b| b != 0) {
        return Err(LedgerError::Decode {
            what: "uint128",
            reason: "value exceeds 128 bits".to_string(),
        });
    }
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&word[16..]);
    Ok(u128::from_be_bytes(bytes))
}

fn first_word<'a>(data: &'a [u8], what: &'static str) -> Result<&'a [u8; 32], LedgerError> {
    let word: Option<&[u8; 32]> = data.get(..32).and_then(|slice| slice.try_into().ok());
    word.ok_or_else(|| LedgerError::Decode {
        what,
        reason: format!("return data is {} bytes, need 32", data.len()),
    })
}

fn length_prefixed(data: &[u8]) -> Vec<u8> {
    let mut out = uint_word(data.len() as u128).to_vec();
    out.extend_from_slice(data);
    let padding = (32 - data.len() % 32) % 32;
    out.extend(std::iter::repeat(0u8).take(padding));
    out
}

fn uint_word(value: u128) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[16..].copy_from_slice(&value.to_be_bytes());
    word
}

pub(crate) fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
