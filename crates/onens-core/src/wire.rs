//! # DNS Wire Format
//!
//! The DNS-record resolver contract keys individual record names by the
//! Keccak-256 digest of their RFC 1035 wire-format encoding: each label
//! as a length octet followed by its bytes, terminated by the zero-length
//! root label. Enclosing dots are stripped and the name is lower-cased
//! before encoding, so `A.Test.country.` and `a.test.country` digest
//! identically.

use crate::error::NameError;
use crate::hash::keccak256;

/// Encode a domain in DNS wire format.
///
/// The empty domain (after stripping enclosing dots) encodes as the bare
/// root label `[0x00]`. Labels longer than 63 octets cannot be
/// represented and are a structural error.
pub fn dns_wire_format(domain: &str) -> Result<Vec<u8>, NameError> {
    let lowered = domain.trim_matches('.').to_lowercase();
    if lowered.is_empty() {
        return Ok(vec![0x00]);
    }
    let mut out = Vec::with_capacity(lowered.len() + 2);
    for label in lowered.split('.') {
        if label.len() > 63 {
            return Err(NameError::LabelTooLong {
                label: label.to_string(),
            });
        }
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0x00);
    Ok(out)
}

/// Keccak-256 digest of a domain's wire-format encoding.
pub fn dns_wire_format_hash(domain: &str) -> Result<[u8; 32], NameError> {
    Ok(keccak256(&dns_wire_format(domain)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_domain_is_bare_root() {
        assert_eq!(dns_wire_format("").unwrap(), vec![0x00]);
        assert_eq!(dns_wire_format(".").unwrap(), vec![0x00]);
    }

    #[test]
    fn labels_are_length_prefixed() {
        assert_eq!(
            dns_wire_format("a.test.country").unwrap(),
            b"\x01a\x04test\x07country\x00".to_vec()
        );
    }

    #[test]
    fn enclosing_dots_and_case_are_canonicalized() {
        let canonical = dns_wire_format("a.test.country").unwrap();
        assert_eq!(dns_wire_format("A.Test.country.").unwrap(), canonical);
        assert_eq!(dns_wire_format(".a.test.COUNTRY").unwrap(), canonical);
    }

    #[test]
    fn wire_hash_matches_encoding_digest() {
        let wire = dns_wire_format("a.test.country").unwrap();
        assert_eq!(
            dns_wire_format_hash("a.test.country").unwrap(),
            keccak256(&wire)
        );
    }

    #[test]
    fn oversized_label_is_rejected() {
        let label = "x".repeat(64);
        assert!(matches!(
            dns_wire_format(&format!("{label}.country")),
            Err(NameError::LabelTooLong { .. })
        ));
    }
}
