//! Property tests for the name identifier engine.
//!
//! These pin the API guarantees that the table tests cannot cover
//! exhaustively: idempotent normalization, deterministic hashing, and
//! consistent positive/negative part addressing.

use onens_core::{
    dns_wire_format, domain_part, name_hash, normalize_domain, tld,
};
use proptest::prelude::*;

fn ascii_domain() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9]{1,8}(\\.[a-zA-Z0-9]{1,8}){0,3}")
        .expect("valid regex")
}

proptest! {
    #[test]
    fn normalization_is_idempotent(domain in ascii_domain()) {
        let once = normalize_domain(&domain).unwrap();
        let twice = normalize_domain(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn hashing_is_case_insensitive(domain in ascii_domain()) {
        let upper = domain.to_uppercase();
        prop_assert_eq!(name_hash(&domain).unwrap(), name_hash(&upper).unwrap());
    }

    #[test]
    fn hashing_is_deterministic(domain in ascii_domain()) {
        prop_assert_eq!(name_hash(&domain).unwrap(), name_hash(&domain).unwrap());
    }

    #[test]
    fn normalized_input_hashes_identically(domain in ascii_domain()) {
        let normalized = normalize_domain(&domain).unwrap();
        prop_assert_eq!(name_hash(&domain).unwrap(), name_hash(&normalized).unwrap());
    }

    #[test]
    fn positive_and_negative_parts_agree(domain in ascii_domain()) {
        let count = domain.split('.').count() as i32;
        for part in 1..=count {
            let from_left = domain_part(&domain, part).unwrap();
            let from_right = domain_part(&domain, part - count - 1).unwrap();
            prop_assert_eq!(from_left, from_right);
        }
    }

    #[test]
    fn tld_is_last_part(domain in ascii_domain()) {
        prop_assert_eq!(tld(&domain), domain_part(&domain, -1).unwrap());
    }

    #[test]
    fn out_of_range_part_fails(domain in ascii_domain()) {
        let count = domain.split('.').count() as i32;
        prop_assert!(domain_part(&domain, count + 1).is_err());
        prop_assert!(domain_part(&domain, -(count + 1)).is_err());
    }

    #[test]
    fn wire_format_length_accounts_for_every_label(domain in ascii_domain()) {
        // One length octet per label plus the root terminator.
        let wire = dns_wire_format(&domain).unwrap();
        prop_assert_eq!(wire.len(), domain.len() + 2);
        prop_assert_eq!(wire.last(), Some(&0u8));
    }
}
