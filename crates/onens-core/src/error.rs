//! Error types for the name identifier engine.
//!
//! Every operation in this crate reports failure through [`NameError`].
//! Errors are returned to the immediate caller — nothing is retried,
//! logged, or swallowed here. Strict-profile violations carry the
//! offending code point for diagnostics.

use thiserror::Error;

/// Errors produced while normalizing, hashing, or decomposing a domain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// A code point outside the strict domain-name profile.
    #[error("disallowed code point U+{code_point:04X} in label {label:?}")]
    DisallowedCodePoint {
        /// The rejected code point.
        code_point: u32,
        /// The label it appeared in, post-mapping.
        label: String,
    },

    /// UTS-46 mapping rejected the input outright.
    #[error("unmappable domain {domain:?}")]
    Mapping {
        /// The input that failed to map.
        domain: String,
    },

    /// A single label was required but the input contains a separator.
    #[error("label {label:?} contains a dot separator")]
    LabelContainsDot {
        /// The offending input.
        label: String,
    },

    /// A label exceeds the 63-octet limit of the DNS wire format.
    #[error("label {label:?} exceeds 63 octets in wire format")]
    LabelTooLong {
        /// The offending label.
        label: String,
    },

    /// Part index zero is not addressable.
    #[error("domain part index must be non-zero")]
    InvalidPart,

    /// A decomposition index beyond the labels present.
    #[error("domain part {part} out of range ({parts} parts present)")]
    PartOutOfRange {
        /// The requested 1-based index (negative counts from the right).
        part: i32,
        /// The number of addressable parts in the domain.
        parts: usize,
    },

    /// The domain does not end with the root suffix being stripped.
    #[error("domain {domain:?} is not under root {root:?}")]
    SuffixMismatch {
        /// The domain that was inspected.
        domain: String,
        /// The root suffix that was expected.
        root: String,
    },
}
