//! # Node and Label Identifiers
//!
//! The registry addresses every fully-qualified domain by a 32-byte node
//! identifier computed recursively from the domain's labels, and every
//! registration token by the 32-byte digest of its single label. Both are
//! Keccak-256 outputs, but they live in different namespaces — [`NodeId`]
//! and [`LabelId`] are distinct newtypes so one cannot be passed where
//! the other is expected.
//!
//! The recursion peels labels right to left, so the label closest to the
//! root is hashed in first:
//!
//! ```text
//! node("")                = 0x00…00
//! node("country")         = keccak256(node("") || labelhash("country"))
//! node("1ns.country")     = keccak256(node("country") || labelhash("1ns"))
//! node("sub.1ns.country") = keccak256(node("1ns.country") || labelhash("sub"))
//! ```
//!
//! Any deviation from the on-chain computation silently addresses the
//! wrong name, so the vectors in the test module are pinned to the
//! registry's published values.

use serde::{Deserialize, Serialize};
use sha3::{Digest, Keccak256};

use crate::error::NameError;
use crate::normalize::{normalize_domain, normalize_domain_strict};

/// 32-byte identifier of a fully-qualified domain in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub [u8; 32]);

/// 32-byte digest of a single label, independent of hierarchy position.
///
/// Used as the token identifier for base-registrar ownership and expiry
/// lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelId(pub [u8; 32]);

impl NodeId {
    /// The all-zero node identifier of the registry root.
    pub const ROOT: NodeId = NodeId([0u8; 32]);

    /// Access the raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as lowercase hex without a prefix.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// True for the root node.
    pub fn is_root(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl LabelId {
    /// Access the raw 32 bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Render as lowercase hex without a prefix.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl std::fmt::Display for LabelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

/// Compute the label identifier: Keccak-256 over the strictly-normalized
/// label's UTF-8 bytes.
///
/// Fails if strict normalization rejects the label or if the input is not
/// a single label (contains a dot).
pub fn label_hash(label: &str) -> Result<LabelId, NameError> {
    let normalized = normalize_domain_strict(label)?;
    if normalized.contains('.') {
        return Err(NameError::LabelContainsDot {
            label: label.to_string(),
        });
    }
    Ok(LabelId(keccak256(normalized.as_bytes())))
}

/// Compute the recursive node identifier of a domain.
///
/// The empty domain is the root node (32 zero bytes). Otherwise the
/// domain is normalized, split on dots, and folded right to left through
/// `keccak256(parent || labelhash(label))`. A failure on any label aborts
/// the whole computation — no partial hash is ever returned.
pub fn name_hash(domain: &str) -> Result<NodeId, NameError> {
    if domain.is_empty() {
        return Ok(NodeId::ROOT);
    }
    let normalized = normalize_domain(domain)?;
    let mut node = [0u8; 32];
    for label in normalized.split('.').rev() {
        let label_digest = label_hash(label)?;
        let mut preimage = [0u8; 64];
        preimage[..32].copy_from_slice(&node);
        preimage[32..].copy_from_slice(label_digest.as_bytes());
        node = keccak256(&preimage);
    }
    Ok(NodeId(node))
}

pub(crate) fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_is_zero() {
        assert_eq!(name_hash("").unwrap(), NodeId::ROOT);
        assert!(name_hash("").unwrap().is_root());
    }

    // Published EIP-137 vectors.
    #[test]
    fn known_node_vectors() {
        assert_eq!(
            name_hash("eth").unwrap().to_hex(),
            "93cdeb708b7545dc668eb9280176169d1c33cfd8ed6f04690a0bcc88a93fc4ae"
        );
        assert_eq!(
            name_hash("foo.eth").unwrap().to_hex(),
            "de9b09fd7c5f901e23a3f19fecc54828e9c848539801e86591bd9801b019f84f"
        );
    }

    #[test]
    fn known_label_vectors() {
        // keccak256("eth"), keccak256("foo"), keccak256("").
        assert_eq!(
            label_hash("eth").unwrap().to_hex(),
            "4f5b812789fc606be1b3b16908db13fc7a9adf7ca72641f84d75b47069d3d7f0"
        );
        assert_eq!(
            label_hash("foo").unwrap().to_hex(),
            "41b1a0649752af1b28b3dc29a1556eee781e4a4c3a1f7f53f90fa834de098c4d"
        );
        assert_eq!(
            label_hash("").unwrap().to_hex(),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn node_is_recursive_combination() {
        let parent = name_hash("").unwrap();
        let label = label_hash("country").unwrap();
        let mut preimage = [0u8; 64];
        preimage[..32].copy_from_slice(parent.as_bytes());
        preimage[32..].copy_from_slice(label.as_bytes());
        assert_eq!(name_hash("country").unwrap().0, keccak256(&preimage));
    }

    #[test]
    fn labels_peel_right_to_left() {
        let country = name_hash("country").unwrap();
        let example = {
            let label = label_hash("example").unwrap();
            let mut preimage = [0u8; 64];
            preimage[..32].copy_from_slice(country.as_bytes());
            preimage[32..].copy_from_slice(label.as_bytes());
            NodeId(keccak256(&preimage))
        };
        let sub = {
            let label = label_hash("sub").unwrap();
            let mut preimage = [0u8; 64];
            preimage[..32].copy_from_slice(example.as_bytes());
            preimage[32..].copy_from_slice(label.as_bytes());
            NodeId(keccak256(&preimage))
        };
        assert_eq!(name_hash("sub.example.country").unwrap(), sub);
    }

    #[test]
    fn case_folds_before_hashing() {
        assert_eq!(name_hash("COUNTRY").unwrap(), name_hash("country").unwrap());
        assert_eq!(label_hash("FOO").unwrap(), label_hash("foo").unwrap());
    }

    #[test]
    fn label_with_dot_is_structural_error() {
        assert!(matches!(
            label_hash("1ns.country"),
            Err(NameError::LabelContainsDot { .. })
        ));
    }

    #[test]
    fn strict_violation_aborts_name_hash() {
        assert!(matches!(
            name_hash("_underscore.thetoken.country"),
            Err(NameError::DisallowedCodePoint { code_point: 0x5F, .. })
        ));
    }

    #[test]
    fn wildcard_node_is_computable() {
        let wild = name_hash("*.1ns.country").unwrap();
        assert_ne!(wild, name_hash("1ns.country").unwrap());
    }

    #[test]
    fn node_and_label_ids_render_prefixed() {
        let node = name_hash("country").unwrap();
        assert!(node.to_string().starts_with("0x"));
        assert_eq!(node.to_string().len(), 2 + 64);
    }
}
