//! # Domain Normalization
//!
//! Canonicalizes a domain string before hashing: UTS-46 mapping (case
//! folding, punycode decoding, NFC) applied per label, in two profiles.
//!
//! The *lenient* profile accepts anything the mapping can process,
//! including characters such as underscore that the DNS host-name rules
//! reject. The *strict* profile additionally enforces the STD3 ASCII
//! character set and reports the offending code point on violation.
//!
//! Both profiles preserve the dot structure of the input: a leading or
//! trailing empty label (a literal enclosing dot) survives normalization,
//! as does a leading `*.` wildcard prefix. Normalization is idempotent.

use crate::error::NameError;

/// Normalize a domain with the lenient profile.
///
/// Lower-cases and UTS-46-maps every label. Never rejects permissive
/// characters (underscore, etc.); fails only when the mapping itself
/// cannot process the input. The empty string and `"."` pass through
/// unchanged.
pub fn normalize_domain(domain: &str) -> Result<String, NameError> {
    map_domain(domain)
}

/// Normalize a domain with the strict profile.
///
/// Applies the same mapping as [`normalize_domain`], then enforces the
/// STD3 ASCII rules on every label: lowercase letters, digits, and
/// hyphen. A label consisting solely of `*` is accepted as a wildcard.
/// The first disallowed code point is reported in the error.
pub fn normalize_domain_strict(domain: &str) -> Result<String, NameError> {
    let mapped = map_domain(domain)?;
    for label in mapped.split('.') {
        if label == "*" {
            continue;
        }
        for c in label.chars() {
            if c.is_ascii() && !(c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-') {
                return Err(NameError::DisallowedCodePoint {
                    code_point: c as u32,
                    label: label.to_string(),
                });
            }
        }
    }
    Ok(mapped)
}

/// UTS-46 mapping shared by both profiles.
///
/// The wildcard prefix is stripped before mapping and restored after, and
/// a leading root separator dropped by the mapping is put back, so the
/// dot structure of the input is preserved exactly.
fn map_domain(domain: &str) -> Result<String, NameError> {
    if domain.is_empty() {
        return Ok(String::new());
    }

    let (wildcard, rest) = match domain.strip_prefix("*.") {
        Some(rest) => (true, rest),
        None => (false, domain),
    };

    let (mut mapped, result) = idna::Config::default()
        .transitional_processing(false)
        .use_std3_ascii_rules(false)
        .to_unicode(rest);
    if result.is_err() {
        return Err(NameError::Mapping {
            domain: domain.to_string(),
        });
    }

    // UTS-46 processing may drop a leading root separator; put it back.
    if rest.starts_with('.') && !mapped.starts_with('.') {
        mapped.insert(0, '.');
    }

    if wildcard {
        Ok(format!("*.{mapped}"))
    } else {
        Ok(mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_table() {
        let cases = [
            ("", ""),
            (".", "."),
            ("country", "country"),
            ("COUNTRY", "country"),
            (".country", ".country"),
            (".country.", ".country."),
            ("1ns.country", "1ns.country"),
            (".1ns.country", ".1ns.country"),
            ("subdomain.1ns.country", "subdomain.1ns.country"),
            ("*.1ns.country", "*.1ns.country"),
            ("omg.thetoken.country", "omg.thetoken.country"),
            ("_underscore.thetoken.country", "_underscore.thetoken.country"),
            ("點看.country", "點看.country"),
        ];
        for (input, expected) in cases {
            let result = normalize_domain(input).unwrap_or_else(|e| {
                panic!("normalize_domain({input:?}) failed: {e}");
            });
            assert_eq!(result, expected, "normalize_domain({input:?})");
        }
    }

    #[test]
    fn strict_table() {
        let cases = [
            ("", ""),
            (".", "."),
            ("country", "country"),
            ("COUNTRY", "country"),
            (".country", ".country"),
            (".country.", ".country."),
            ("1ns.country", "1ns.country"),
            (".1ns.country", ".1ns.country"),
            ("subdomain.1ns.country", "subdomain.1ns.country"),
            ("*.1ns.country", "*.1ns.country"),
            ("omg.thetoken.country", "omg.thetoken.country"),
            ("點看.country", "點看.country"),
        ];
        for (input, expected) in cases {
            let result = normalize_domain_strict(input).unwrap_or_else(|e| {
                panic!("normalize_domain_strict({input:?}) failed: {e}");
            });
            assert_eq!(result, expected, "normalize_domain_strict({input:?})");
        }
    }

    #[test]
    fn strict_rejects_underscore_with_code_point() {
        let err = normalize_domain_strict("_underscore.thetoken.country").unwrap_err();
        match err {
            NameError::DisallowedCodePoint { code_point, .. } => {
                assert_eq!(code_point, 0x5F);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn lenient_accepts_underscore() {
        assert_eq!(
            normalize_domain("_Underscore.TheToken.country").unwrap(),
            "_underscore.thetoken.country"
        );
    }

    #[test]
    fn punycode_decodes_to_unicode() {
        assert_eq!(
            normalize_domain("xn--c1yn36f.country").unwrap(),
            "點看.country"
        );
    }

    #[test]
    fn wildcard_only_at_label_boundary() {
        assert!(normalize_domain_strict("*.country").is_ok());
        assert!(matches!(
            normalize_domain_strict("foo*bar.country"),
            Err(NameError::DisallowedCodePoint { code_point: 0x2A, .. })
        ));
    }

    #[test]
    fn normalization_is_idempotent() {
        for input in ["COUNTRY", ".1ns.Country.", "*.1NS.country", "點看.COUNTRY"] {
            let once = normalize_domain(input).unwrap();
            let twice = normalize_domain(&once).unwrap();
            assert_eq!(once, twice, "idempotence for {input:?}");
        }
    }
}
