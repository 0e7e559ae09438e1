//! Host-set canonicalization.
//!
//! Reduces a raw collection of host strings to its canonical,
//! subsumption-free form.

use crate::models::{HostParseError, HostParseErrors, HostSet, HostSpecifier};

/// Normalize a raw collection of host strings into a canonical [`HostSet`].
///
/// Every element is parsed via [`HostSpecifier::parse`]; any parse failure
/// fails the whole operation, reporting every offending entry. Valid entries
/// are then sorted into canonical order and reduced: exact duplicates and
/// entries whose address range is contained in a broader entry are dropped.
///
/// The result is a pure function of the input's effective membership:
/// insertion order and textual formatting differences do not affect it.
///
/// # Arguments
/// * `raw` - The host strings to normalize, in any order
///
/// # Returns
/// * `Ok(HostSet)` - The canonical set
/// * `Err(HostParseErrors)` - Every entry that failed to parse, and why
pub fn normalize<I, S>(raw: I) -> Result<HostSet, HostParseErrors>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut hosts = Vec::new();
    let mut errors = Vec::new();
    for entry in raw {
        match HostSpecifier::parse(entry.as_ref()) {
            Ok(host) => hosts.push(host),
            Err(err) => errors.push(err),
        }
    }
    if !errors.is_empty() {
        return Err(HostParseErrors::new(errors));
    }
    Ok(HostSet::from_canonical(reduce(hosts)))
}

/// Normalize a single already-parsed collection of specifiers.
///
/// Sorts into canonical order (hostnames, IPv4 broadest-first, IPv6
/// broadest-first) and greedily scans: a candidate is dropped if a kept
/// entry equals it or contains its whole address range. Because containers
/// always have a shorter-or-equal prefix, they sort ahead of everything they
/// absorb, so one pass over the kept list suffices.
fn reduce(mut hosts: Vec<HostSpecifier>) -> Vec<HostSpecifier> {
    hosts.sort();
    let mut kept: Vec<HostSpecifier> = Vec::with_capacity(hosts.len());
    for host in hosts {
        if let Some(winner) = kept.iter().find(|k| **k == host || k.covers(&host)) {
            log::debug!("dropping {host}: absorbed by {winner}");
            continue;
        }
        kept.push(host);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::HostParseError as E;

    fn strings(set: &HostSet) -> Vec<String> {
        set.to_strings()
    }

    #[test]
    fn test_empty_input() {
        let set = normalize(Vec::<String>::new()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_disjoint_entries_survive() {
        let set = normalize(["192.168.1.0/24", "10.0.0.0/8", "172.16.0.0/12"]).unwrap();
        assert_eq!(
            strings(&set),
            vec!["10.0.0.0/8", "172.16.0.0/12", "192.168.1.0/24"]
        );
    }

    #[test]
    fn test_subsumption_address_in_network() {
        let set = normalize(["10.0.0.0/8", "10.1.2.3"]).unwrap();
        assert_eq!(strings(&set), vec!["10.0.0.0/8"]);
    }

    #[test]
    fn test_subsumption_network_in_network_both_orders() {
        let set = normalize(["192.168.1.0/24", "192.168.1.0/26"]).unwrap();
        assert_eq!(strings(&set), vec!["192.168.1.0/24"]);
        let set = normalize(["192.168.1.0/26", "192.168.1.0/24"]).unwrap();
        assert_eq!(strings(&set), vec!["192.168.1.0/24"]);
    }

    #[test]
    fn test_host_bits_normalized_not_rejected() {
        let set = normalize(["192.168.1.5/24"]).unwrap();
        assert_eq!(strings(&set), vec!["192.168.1.0/24"]);
    }

    #[test]
    fn test_address_outside_network_survives() {
        let set = normalize(["89.208.34.0", "89.207.132.170", "89.207.1.1/16"]).unwrap();
        assert_eq!(strings(&set), vec!["89.207.0.0/16", "89.208.34.0"]);
    }

    #[test]
    fn test_ipv6_reduction() {
        let set = normalize(["2001:db8:85a3::8a2e:370:7334", "2001:db8:85a3::/64"]).unwrap();
        assert_eq!(strings(&set), vec!["2001:db8:85a3::/64"]);
        let set = normalize(["2001:db8:85a3::/48", "2001:db8:85a3:1::/64"]).unwrap();
        assert_eq!(strings(&set), vec!["2001:db8:85a3::/48"]);
    }

    #[test]
    fn test_family_isolation() {
        let set = normalize(["0.0.0.0/0", "::/0", "192.0.2.1", "2001:db8::1"]).unwrap();
        assert_eq!(strings(&set), vec!["0.0.0.0/0", "::/0"]);
        // an IPv4-mapped IPv6 literal stays in the v6 family
        let set = normalize(["0.0.0.0/0", "::ffff:192.0.2.1"]).unwrap();
        assert_eq!(strings(&set), vec!["0.0.0.0/0", "::ffff:192.0.2.1"]);
    }

    #[test]
    fn test_hostname_dedup_exact_only() {
        let set = normalize(["myhost.example.com", "myhost.example.com"]).unwrap();
        assert_eq!(strings(&set), vec!["myhost.example.com"]);
        // hostnames are case-sensitive-as-given
        let set = normalize(["MyHost", "myhost"]).unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_mixed_set_reduction() {
        let set = normalize(["10.0.0.0/8", "192.168.1.1", "myhost", "192.168.1.1"]).unwrap();
        assert_eq!(strings(&set), vec!["myhost", "10.0.0.0/8", "192.168.1.1"]);
    }

    #[test]
    fn test_mixed_families_with_dedup() {
        let set = normalize([
            "192.168.1.1",
            "2001:db8:85a3::8a2e:370:7334",
            "192.168.1.0/24",
            "2001:db8:85a3::/64",
            "192.168.1.0",
            "2001:db8:85a3::8a2e:370:7334",
            "hostname1",
        ])
        .unwrap();
        assert_eq!(
            strings(&set),
            vec!["hostname1", "192.168.1.0/24", "2001:db8:85a3::/64"]
        );
    }

    #[test]
    fn test_network_absorbs_equal_address() {
        let set = normalize(["10.0.0.1", "10.0.0.1/32"]).unwrap();
        assert_eq!(strings(&set), vec!["10.0.0.1/32"]);
    }

    #[test]
    fn test_full_mask_collapse() {
        let set = normalize(["2001:db8::1/128", "10.0.0.1/255.255.255.255"]).unwrap();
        assert_eq!(strings(&set), vec!["10.0.0.1", "2001:db8::1"]);
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        let err = normalize(["192.168.1.0/33"]).unwrap_err();
        assert_eq!(err.errors.len(), 1);
        assert!(matches!(err.errors[0], E::InvalidCidr { .. }));
    }

    #[test]
    fn test_all_errors_reported() {
        let err = normalize(["10.0.0.0/8", "bad host/24", "10.0.0.0/99", "ok.example.com"])
            .unwrap_err();
        assert_eq!(err.errors.len(), 2);
        assert_eq!(err.errors[0].input(), "bad host/24");
        assert_eq!(err.errors[1].input(), "10.0.0.0/99");
    }

    #[test]
    fn test_order_independence() {
        let forward = normalize(["10.0.0.0/8", "myhost", "2001:db8::/32", "192.168.5.5"]).unwrap();
        let backward = normalize(["192.168.5.5", "2001:db8::/32", "myhost", "10.0.0.0/8"]).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_idempotence() {
        let first = normalize([
            "192.168.1.77/24",
            "192.168.1.12",
            "2001:0db8:0000:0000:0000:0000:0000:0001",
            "nfs-client.example.com",
            "10.0.0.0/255.0.0.0",
        ])
        .unwrap();
        let second = normalize(first.to_strings()).unwrap();
        assert_eq!(first, second);
    }
}
