//! Prefix/netmask bit arithmetic for IPv4 and IPv6.
//!
//! IPv4 math is done on `u32`, IPv6 on `u128`. Callers validate prefix
//! lengths against [`MAX_LENGTH_V4`]/[`MAX_LENGTH_V6`] before calling in.

use std::net::{Ipv4Addr, Ipv6Addr};

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_LENGTH_V4: u8 = 32;
/// Maximum prefix length for an IPv6 network (128 bits).
pub const MAX_LENGTH_V6: u8 = 128;

/// Convert an IPv4 prefix length to a netmask as u32.
///
/// `len` must be at most 32.
///
/// # Examples
/// ```
/// use nfs_hostset::models::cidr_mask_v4;
/// assert_eq!(cidr_mask_v4(24), 0xFFFFFF00);
/// ```
pub fn cidr_mask_v4(len: u8) -> u32 {
    debug_assert!(len <= MAX_LENGTH_V4);
    let right_len = u32::from(MAX_LENGTH_V4 - len);
    // Shift through u64 so that len == 0 (a 32-bit shift) stays in range.
    (((u32::MAX as u64) >> right_len) << right_len) as u32
}

/// Convert an IPv6 prefix length to a netmask as u128.
///
/// `len` must be at most 128.
pub fn cidr_mask_v6(len: u8) -> u128 {
    debug_assert!(len <= MAX_LENGTH_V6);
    if len == 0 {
        return 0;
    }
    let right_len = u32::from(MAX_LENGTH_V6 - len);
    (u128::MAX >> right_len) << right_len
}

/// Get the network address for a given IPv4 address and prefix length,
/// zeroing all host bits.
pub fn cut_addr_v4(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    Ipv4Addr::from(u32::from(addr) & cidr_mask_v4(len))
}

/// Get the network address for a given IPv6 address and prefix length,
/// zeroing all host bits.
pub fn cut_addr_v6(addr: Ipv6Addr, len: u8) -> Ipv6Addr {
    Ipv6Addr::from(u128::from(addr) & cidr_mask_v6(len))
}

/// Convert a dotted-quad IPv4 netmask to its prefix length.
///
/// Returns `None` if the mask bits are not contiguous from the top
/// (e.g. `255.0.255.0`).
pub fn prefix_from_mask_v4(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let ones = bits.count_ones() as u8;
    if bits == cidr_mask_v4(ones) {
        Some(ones)
    } else {
        None
    }
}
