//! Domain models for NFS host-set normalization.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`HostSpecifier`] - one classified access-list entry
//! - [`HostSet`] - a canonical, subsumption-free collection
//! - [`HostParseError`] / [`HostParseErrors`] - the parse-error taxonomy
//! - netmask helpers - prefix/mask bit arithmetic for IPv4 and IPv6

mod error;
mod host;
mod netmask;
mod set;

// Re-export public types
pub use error::{HostParseError, HostParseErrors};
pub use host::HostSpecifier;
pub use netmask::{
    cidr_mask_v4, cidr_mask_v6, cut_addr_v4, cut_addr_v6, prefix_from_mask_v4, MAX_LENGTH_V4,
    MAX_LENGTH_V6,
};
pub use set::HostSet;
