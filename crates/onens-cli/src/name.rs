//! Offline name identifier commands.
//!
//! Pure engine calls: nothing here touches the network.

use anyhow::Result;
use clap::Args;

use onens_core::{
    dns_wire_format, dns_wire_format_hash, domain_part, label_hash, name_hash, normalize_domain,
    normalize_domain_strict, tld,
};

/// Arguments for `onens hash`.
#[derive(Args, Debug)]
pub struct HashArgs {
    /// Domain to compute the node identifier for.
    pub domain: String,
}

/// Print the 32-byte node identifier of a domain.
pub fn run_hash(args: &HashArgs) -> Result<u8> {
    println!("{}", name_hash(&args.domain)?);
    Ok(0)
}

/// Arguments for `onens label`.
#[derive(Args, Debug)]
pub struct LabelArgs {
    /// Single label to compute the label identifier for.
    pub label: String,
}

/// Print the 32-byte label identifier of a single label.
pub fn run_label(args: &LabelArgs) -> Result<u8> {
    println!("{}", label_hash(&args.label)?);
    Ok(0)
}

/// Arguments for `onens normalize`.
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Domain to normalize.
    pub domain: String,

    /// Enforce the strict character profile.
    #[arg(long)]
    pub strict: bool,
}

/// Print the canonical form of a domain.
pub fn run_normalize(args: &NormalizeArgs) -> Result<u8> {
    let normalized = if args.strict {
        normalize_domain_strict(&args.domain)?
    } else {
        normalize_domain(&args.domain)?
    };
    println!("{normalized}");
    Ok(0)
}

/// Arguments for `onens part`.
#[derive(Args, Debug)]
pub struct PartArgs {
    /// Domain to decompose.
    pub domain: String,

    /// 1-based label position; negative counts from the right.
    #[arg(allow_hyphen_values = true)]
    pub index: i32,
}

/// Print the label at a position.
pub fn run_part(args: &PartArgs) -> Result<u8> {
    println!("{}", domain_part(&args.domain, args.index)?);
    Ok(0)
}

/// Arguments for `onens tld`.
#[derive(Args, Debug)]
pub struct TldArgs {
    /// Domain to take the top-level domain of.
    pub domain: String,
}

/// Print the top-level domain.
pub fn run_tld(args: &TldArgs) -> Result<u8> {
    println!("{}", tld(&args.domain));
    Ok(0)
}

/// Arguments for `onens wire`.
#[derive(Args, Debug)]
pub struct WireArgs {
    /// Domain to encode in DNS wire format.
    pub domain: String,
}

/// Print the wire-format encoding of a domain and its digest.
pub fn run_wire(args: &WireArgs) -> Result<u8> {
    let wire = dns_wire_format(&args.domain)?;
    let digest = dns_wire_format_hash(&args.domain)?;
    println!("0x{}", hex::encode(wire));
    println!("0x{}", hex::encode(digest));
    Ok(0)
}
