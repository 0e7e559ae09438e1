//! Host specifier parsing and classification.
//!
//! An NFS export access list mixes plain hostnames, bare IPv4/IPv6 addresses
//! and IPv4/IPv6 CIDR blocks. [`HostSpecifier`] classifies one textual entry
//! and holds its canonical internal form.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::net::{IpAddr, Ipv4Addr};

use super::error::HostParseError;
use super::netmask::{
    cidr_mask_v4, cidr_mask_v6, cut_addr_v4, cut_addr_v6, prefix_from_mask_v4, MAX_LENGTH_V4,
    MAX_LENGTH_V6,
};

/// One entry of an NFS export access list.
///
/// The variant is decided by literal syntax alone: a slash commits the entry
/// to being a network literal, a bare IP literal becomes an [`Address`], and
/// everything else is an opaque [`Hostname`] (DNS domain, netgroup, ...)
/// that is compared only by exact string equality.
///
/// [`Address`]: HostSpecifier::Address
/// [`Hostname`]: HostSpecifier::Hostname
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HostSpecifier {
    /// Opaque hostname, kept exactly as given.
    Hostname(String),
    /// A single IPv4 or IPv6 address.
    Address(IpAddr),
    /// An IPv4 or IPv6 network. `base` always has all host bits zeroed.
    Network { base: IpAddr, prefix: u8 },
}

impl HostSpecifier {
    /// Classify a single textual host specifier.
    ///
    /// Order of attempt: CIDR literal, bare IP address, opaque hostname.
    /// A slash-bearing entry that does not form a valid network literal is a
    /// hard error, never a hostname fallback — a typo'd CIDR must fail loudly.
    ///
    /// Full-mask network literals (`/128` on IPv6, `/255.255.255.255` on
    /// IPv4) denote single addresses and collapse to the bare address form.
    pub fn parse(input: &str) -> Result<HostSpecifier, HostParseError> {
        let input = input.trim();
        if let Some((addr_part, mask_part)) = input.split_once('/') {
            return parse_network(input, addr_part, mask_part);
        }
        if let Ok(addr) = input.parse::<IpAddr>() {
            return Ok(HostSpecifier::Address(addr));
        }
        Ok(HostSpecifier::Hostname(input.to_string()))
    }

    /// Build a network specifier, zeroing any host bits in `addr`.
    ///
    /// `prefix` must be in range for the family of `addr`.
    pub fn network(addr: IpAddr, prefix: u8) -> HostSpecifier {
        let base = match addr {
            IpAddr::V4(a) => IpAddr::V4(cut_addr_v4(a, prefix)),
            IpAddr::V6(a) => IpAddr::V6(cut_addr_v6(a, prefix)),
        };
        HostSpecifier::Network { base, prefix }
    }

    /// The address carried by an `Address` or `Network`, `None` for hostnames.
    pub fn address(&self) -> Option<IpAddr> {
        match self {
            HostSpecifier::Hostname(_) => None,
            HostSpecifier::Address(addr) => Some(*addr),
            HostSpecifier::Network { base, .. } => Some(*base),
        }
    }

    /// Effective prefix length: a bare address counts as the family maximum.
    pub fn prefix_len(&self) -> Option<u8> {
        match self {
            HostSpecifier::Hostname(_) => None,
            HostSpecifier::Address(IpAddr::V4(_)) => Some(MAX_LENGTH_V4),
            HostSpecifier::Address(IpAddr::V6(_)) => Some(MAX_LENGTH_V6),
            HostSpecifier::Network { prefix, .. } => Some(*prefix),
        }
    }

    /// Check whether this specifier's address range entirely contains
    /// `other`'s.
    ///
    /// Hostnames never contain and are never contained. The two address
    /// families never contain one another, even for IPv4-mapped IPv6
    /// literals.
    pub fn covers(&self, other: &HostSpecifier) -> bool {
        let (self_prefix, other_prefix) = match (self.prefix_len(), other.prefix_len()) {
            (Some(s), Some(o)) => (s, o),
            _ => return false,
        };
        if self_prefix > other_prefix {
            return false;
        }
        match (self.address(), other.address()) {
            (Some(IpAddr::V4(s)), Some(IpAddr::V4(o))) => {
                u32::from(o) & cidr_mask_v4(self_prefix) == u32::from(s)
            }
            (Some(IpAddr::V6(s)), Some(IpAddr::V6(o))) => {
                u128::from(o) & cidr_mask_v6(self_prefix) == u128::from(s)
            }
            _ => false,
        }
    }

    /// Ordering rank of the bucket this specifier belongs to:
    /// hostnames, then IPv4, then IPv6.
    fn bucket(&self) -> u8 {
        match self.address() {
            None => 0,
            Some(IpAddr::V4(_)) => 1,
            Some(IpAddr::V6(_)) => 2,
        }
    }

    /// Address bits widened to u128 for ordering within a bucket.
    fn address_bits(&self) -> u128 {
        match self.address() {
            None => 0,
            Some(IpAddr::V4(a)) => u128::from(u32::from(a)),
            Some(IpAddr::V6(a)) => u128::from(a),
        }
    }
}

/// Parse the network-literal case: `input` contains a `/`.
fn parse_network(
    input: &str,
    addr_part: &str,
    mask_part: &str,
) -> Result<HostSpecifier, HostParseError> {
    // Dotted-quad netmask form, e.g. 10.0.0.0/255.255.255.0.
    if let (Ok(addr), Ok(mask)) = (addr_part.parse::<Ipv4Addr>(), mask_part.parse::<Ipv4Addr>()) {
        let prefix = prefix_from_mask_v4(mask).ok_or_else(|| {
            HostParseError::invalid_cidr(input, format!("{mask} is not a contiguous IPv4 netmask"))
        })?;
        if prefix == MAX_LENGTH_V4 {
            // /255.255.255.255 is a single address in disguise.
            return Ok(HostSpecifier::Address(IpAddr::V4(addr)));
        }
        return Ok(HostSpecifier::network(IpAddr::V4(addr), prefix));
    }

    let prefix: u8 = mask_part
        .parse()
        .map_err(|_| HostParseError::invalid_cidr(input, "prefix is not a number"))?;

    match addr_part.parse::<IpAddr>() {
        Ok(IpAddr::V4(addr)) => {
            if prefix > MAX_LENGTH_V4 {
                return Err(HostParseError::invalid_cidr(
                    input,
                    format!("prefix {prefix} out of range for IPv4 (max {MAX_LENGTH_V4})"),
                ));
            }
            Ok(HostSpecifier::network(IpAddr::V4(addr), prefix))
        }
        Ok(IpAddr::V6(addr)) => {
            if prefix > MAX_LENGTH_V6 {
                return Err(HostParseError::invalid_cidr(
                    input,
                    format!("prefix {prefix} out of range for IPv6 (max {MAX_LENGTH_V6})"),
                ));
            }
            if prefix == MAX_LENGTH_V6 {
                // x::y/128 is a single address in disguise.
                return Ok(HostSpecifier::Address(IpAddr::V6(addr)));
            }
            Ok(HostSpecifier::network(IpAddr::V6(addr), prefix))
        }
        Err(_) => Err(HostParseError::invalid_address(input)),
    }
}

impl std::fmt::Display for HostSpecifier {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            HostSpecifier::Hostname(name) => write!(f, "{name}"),
            // IpAddr's Display already yields the canonical text form:
            // dotted decimal for IPv4, RFC 5952 compressed for IPv6.
            HostSpecifier::Address(addr) => write!(f, "{addr}"),
            HostSpecifier::Network { base, prefix } => write!(f, "{base}/{prefix}"),
        }
    }
}

impl Ord for HostSpecifier {
    /// Canonical ordering: hostnames (lexicographic), then IPv4, then IPv6;
    /// within a family by ascending prefix length (broadest network first),
    /// then ascending base address, with networks before bare addresses on
    /// ties. This is both the serialization order of a canonical set and the
    /// scan order of the subsumption reduction.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (HostSpecifier::Hostname(a), HostSpecifier::Hostname(b)) => a.cmp(b),
            _ => {
                let key = |host: &HostSpecifier| {
                    (
                        host.bucket(),
                        host.prefix_len().unwrap_or(0),
                        host.address_bits(),
                        matches!(host, HostSpecifier::Address(_)),
                    )
                };
                key(self).cmp(&key(other))
            }
        }
    }
}

impl PartialOrd for HostSpecifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for HostSpecifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for HostSpecifier {
    fn deserialize<D>(deserializer: D) -> Result<HostSpecifier, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        HostSpecifier::parse(&s).map_err(de::Error::custom)
    }
}
