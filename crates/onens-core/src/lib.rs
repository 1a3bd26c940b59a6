//! # onens-core — Name Identifier Engine
//!
//! The pure algorithmic core of the 1NS client stack. Given a
//! possibly-mixed-case, possibly-internationalized, dot-separated domain
//! string, this crate produces the canonical string form and the
//! deterministic 256-bit node and label identifiers that key every
//! registry contract call, plus the decomposition utilities the wrapper
//! layer uses to validate names before marshalling.
//!
//! ## Key Design Principles
//!
//! 1. **No I/O, no shared state.** Every function reads its arguments and
//!    allocates only its return value. All of them are safe to call
//!    concurrently without synchronization.
//!
//! 2. **Newtype identifiers.** [`NodeId`] and [`LabelId`] are distinct
//!    32-byte newtypes — a label digest cannot be passed where a node
//!    identifier is expected, even though both are Keccak-256 outputs.
//!
//! 3. **Explicit errors, no panics.** Every fallible operation returns
//!    [`NameError`]. Strict-profile violations carry the offending code
//!    point so callers can render a precise diagnostic.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `onens-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod hash;
pub mod normalize;
pub mod parts;
pub mod wire;

// Re-export primary types for ergonomic imports.
pub use error::NameError;
pub use hash::{label_hash, name_hash, LabelId, NodeId};
pub use normalize::{normalize_domain, normalize_domain_strict};
pub use parts::{domain_part, tld, unqualified_name};
pub use wire::{dns_wire_format, dns_wire_format_hash};
