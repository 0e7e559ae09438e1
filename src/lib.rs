//! Canonicalization and semantic equality for NFS export host access lists.
//!
//! An export's client list mixes hostnames, bare IPv4/IPv6 addresses and
//! CIDR blocks, and the same effective list can be written many ways
//! (`2001:0db8::0001` vs `2001:db8::1`, `192.168.1.5/24` vs
//! `192.168.1.0/24`). This crate reduces such a list to one canonical,
//! subsumption-free form and decides whether two lists grant the same
//! access, so a declarative configuration layer can suppress spurious
//! diffs without missing real changes.

pub mod cache;
pub mod models;
pub mod output;
pub mod processing;

use std::error::Error;

pub use models::{HostParseError, HostParseErrors, HostSet, HostSpecifier};
pub use processing::{normalize, semantic_equals, sets_semantically_equal};

/// Read a host list file and normalize it to its canonical form.
pub fn get_normalized_hosts(file: &str) -> Result<HostSet, Box<dyn Error>> {
    let list = cache::read_host_list(file)?;
    log::info!("Normalizing {} host entries from {file}", list.data.len());
    let set = normalize(&list.data)?;
    Ok(set)
}
