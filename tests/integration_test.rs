//! Integration tests for nfs-hostset
//!
//! These tests verify the complete workflow from reading a host list file to
//! canonicalization and semantic comparison.

use nfs_hostset::output::render_host_set;
use nfs_hostset::{
    get_normalized_hosts, normalize, semantic_equals, sets_semantically_equal, HostParseError,
};

#[test]
fn test_full_workflow_with_file() {
    let set = get_normalized_hosts("src/tests/test_data/host_test_cache_02.json")
        .expect("Failed to read host list");

    assert_eq!(
        set.to_strings(),
        vec![
            "backup.example.com",
            "compute-head",
            "172.16.0.0/16",
            "192.168.1.0/24",
            "89.208.34.0",
            "2001:db8:85a3::/64",
            "2001:db8:ffff::1",
        ]
    );

    // Re-normalizing the canonical output is a no-op
    let again = normalize(set.to_strings()).expect("Failed to re-normalize");
    assert_eq!(again, set);

    // Rendering lists every canonical entry
    let rendered = render_host_set(&set);
    for entry in set.to_strings() {
        assert!(rendered.contains(&entry), "missing {entry} in rendering");
    }
}

#[test]
fn test_semantic_comparison_across_files() {
    let a = get_normalized_hosts("src/tests/test_data/host_test_cache_02.json")
        .expect("Failed to read host list");
    let b = get_normalized_hosts("src/tests/test_data/host_test_cache_03.json")
        .expect("Failed to read host list");

    // Same effective membership written in different textual forms
    assert!(sets_semantically_equal(&a, &b).expect("comparison failed"));

    let c = get_normalized_hosts("src/tests/test_data/host_test_cache_01.json")
        .expect("Failed to read host list");
    assert!(!sets_semantically_equal(&a, &c).expect("comparison failed"));
}

#[test]
fn test_invalid_file_reports_every_bad_entry() {
    let err = get_normalized_hosts("src/tests/test_data/host_test_cache_invalid.json")
        .expect_err("Expected parse failure");
    let msg = err.to_string();
    assert!(msg.contains("invalid CIDR entry \"192.168.1.0/33\""));
    assert!(msg.contains("invalid address in entry \"badhost/8\""));
}

#[test]
fn test_order_independence_property() {
    let hosts = [
        "10.0.0.0/8",
        "myhost",
        "2001:db8::/32",
        "192.168.5.5",
        "172.16.0.0/12",
    ];
    let mut rotated = hosts.to_vec();
    for _ in 0..hosts.len() {
        rotated.rotate_left(1);
        assert!(semantic_equals(hosts, rotated.clone()).unwrap());
    }
}

#[test]
fn test_parse_error_taxonomy_surface() {
    let err = normalize(["10.0.0.0/99"]).unwrap_err();
    assert!(matches!(err.errors[0], HostParseError::InvalidCidr { .. }));
    let err = normalize(["not an ip/24"]).unwrap_err();
    assert!(matches!(
        err.errors[0],
        HostParseError::InvalidAddress { .. }
    ));
}
