//! # Domain Decomposition
//!
//! Utilities the wrapper layer uses to pick apart a domain before
//! constructing contract calls: extract the top-level domain, address an
//! individual label by position, and strip a qualifying root suffix.
//!
//! Positions are 1-based. Positive indices count from the left, negative
//! from the right; a boundary dot contributes an addressable empty part.
//! For `bar.foo.country`:
//!
//! ```text
//! part   1    2    3
//!        bar  foo  country
//! part  -3   -2   -1
//! ```

use crate::error::NameError;
use crate::normalize::normalize_domain;

/// The top-level domain: the rightmost part of the normalized input.
///
/// Never errors — anything that cannot be decomposed yields the empty
/// string.
pub fn tld(domain: &str) -> String {
    domain_part(domain, -1).unwrap_or_default()
}

/// The label at 1-based position `part`.
///
/// Positive indices count from the left, negative from the right; zero is
/// invalid. The domain is leniently normalized first, so the returned
/// label is in canonical form. Requesting a position beyond the labels
/// present is a range error.
pub fn domain_part(domain: &str, part: i32) -> Result<String, NameError> {
    if part == 0 {
        return Err(NameError::InvalidPart);
    }
    let normalized = normalize_domain(domain)?;
    let parts: Vec<&str> = normalized.split('.').collect();
    let distance = part.unsigned_abs() as usize;
    if parts.len() < distance {
        return Err(NameError::PartOutOfRange {
            part,
            parts: parts.len(),
        });
    }
    let index = if part > 0 {
        distance - 1
    } else {
        parts.len() - distance
    };
    Ok(parts[index].to_string())
}

/// Strip exactly one trailing `.root` suffix from a domain.
///
/// An empty root returns the domain unchanged; a domain equal to the root
/// yields the empty string; a non-empty root that is not a suffix is an
/// error.
pub fn unqualified_name(domain: &str, root: &str) -> Result<String, NameError> {
    if root.is_empty() {
        return Ok(domain.to_string());
    }
    let suffix = format!(".{root}");
    if let Some(stripped) = domain.strip_suffix(&suffix) {
        return Ok(stripped.to_string());
    }
    if domain == root {
        return Ok(String::new());
    }
    Err(NameError::SuffixMismatch {
        domain: domain.to_string(),
        root: root.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tld_table() {
        let cases = [
            ("", ""),
            (".", ""),
            ("country", "country"),
            ("COUNTRY", "country"),
            (".country", "country"),
            ("1ns.country", "country"),
            (".1ns.country", "country"),
            ("subdomain.1ns.country", "country"),
        ];
        for (input, expected) in cases {
            assert_eq!(tld(input), expected, "tld({input:?})");
        }
    }

    #[test]
    fn domain_part_table() {
        // (input, part, output, is_err)
        let cases: &[(&str, i32, &str, bool)] = &[
            ("", 1, "", false),
            ("", 2, "", true),
            ("", -1, "", false),
            ("", -2, "", true),
            (".", 1, "", false),
            (".", 2, "", false),
            (".", 3, "", true),
            (".", -1, "", false),
            (".", -2, "", false),
            (".", -3, "", true),
            ("COUNTRY", 1, "country", false),
            ("COUNTRY", 2, "", true),
            ("COUNTRY", -1, "country", false),
            ("COUNTRY", -2, "", true),
            (".COUNTRY", 1, "", false),
            (".COUNTRY", 2, "country", false),
            (".COUNTRY", 3, "", true),
            (".COUNTRY", -1, "country", false),
            (".COUNTRY", -2, "", false),
            (".COUNTRY", -3, "", true),
            ("1ns.country", 1, "1ns", false),
            ("1ns.country", 2, "country", false),
            ("1ns.country", 3, "", true),
            ("1ns.country", -1, "country", false),
            ("1ns.country", -2, "1ns", false),
            ("1ns.country", -3, "", true),
            (".1ns.country", 1, "", false),
            (".1ns.country", 2, "1ns", false),
            (".1ns.country", 3, "country", false),
            (".1ns.country", 4, "", true),
            (".1ns.country", -1, "country", false),
            (".1ns.country", -2, "1ns", false),
            (".1ns.country", -3, "", false),
            (".1ns.country", -4, "", true),
            ("subdomain.1ns.country", 1, "subdomain", false),
            ("subdomain.1ns.country", 2, "1ns", false),
            ("subdomain.1ns.country", 3, "country", false),
            ("subdomain.1ns.country", 4, "", true),
            ("subdomain.1ns.country", -1, "country", false),
            ("subdomain.1ns.country", -2, "1ns", false),
            ("subdomain.1ns.country", -3, "subdomain", false),
            ("subdomain.1ns.country", -4, "", true),
            ("a.b.c", 1, "a", false),
            ("a.b.c", 2, "b", false),
            ("a.b.c", 3, "c", false),
            ("a.b.c", 4, "", true),
            ("a.b.c", -1, "c", false),
            ("a.b.c", -2, "b", false),
            ("a.b.c", -3, "a", false),
            ("a.b.c", -4, "", true),
        ];
        for &(input, part, output, is_err) in cases {
            match domain_part(input, part) {
                Ok(result) => {
                    assert!(!is_err, "domain_part({input:?}, {part}) should have failed");
                    assert_eq!(result, output, "domain_part({input:?}, {part})");
                }
                Err(e) => {
                    assert!(is_err, "domain_part({input:?}, {part}) failed: {e}");
                }
            }
        }
    }

    #[test]
    fn part_zero_is_invalid() {
        assert!(matches!(
            domain_part("a.b.c", 0),
            Err(NameError::InvalidPart)
        ));
    }

    #[test]
    fn unqualified_name_table() {
        assert_eq!(unqualified_name("", "").unwrap(), "");
        assert_eq!(unqualified_name("1ns.country", "country").unwrap(), "1ns");
        assert_eq!(
            unqualified_name("sub.1ns.country", "country").unwrap(),
            "sub.1ns"
        );
        assert_eq!(unqualified_name("country", "country").unwrap(), "");
        assert_eq!(unqualified_name("1ns.country", "").unwrap(), "1ns.country");
    }

    #[test]
    fn unqualified_name_rejects_foreign_root() {
        assert!(matches!(
            unqualified_name("1ns.country", "city"),
            Err(NameError::SuffixMismatch { .. })
        ));
    }
}
