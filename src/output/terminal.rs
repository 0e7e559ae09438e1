//! Terminal rendering of host sets and comparisons.

use colored::Colorize;
use itertools::Itertools;
use std::collections::HashSet;
use std::net::IpAddr;

use crate::models::{HostSet, HostSpecifier};

fn bucket_label(host: &HostSpecifier) -> &'static str {
    match host.address() {
        None => "hostnames",
        Some(IpAddr::V4(_)) => "IPv4",
        Some(IpAddr::V6(_)) => "IPv6",
    }
}

/// Render a canonical host set grouped by bucket, one entry per line.
pub fn render_host_set(set: &HostSet) -> String {
    let mut out = String::new();
    let mut current_label = "";
    for host in set {
        let label = bucket_label(host);
        if label != current_label {
            out.push_str(&format!("{}:\n", label.bold()));
            current_label = label;
        }
        out.push_str(&format!("  {host}\n"));
    }
    if out.is_empty() {
        out.push_str("(empty host set)\n");
    }
    out
}

/// Render a comparison of two canonical host sets.
///
/// Entries present on both sides are listed plain; entries only in `a` are
/// red, entries only in `b` are green, the way a diff reads.
pub fn render_comparison(a: &HostSet, b: &HostSet) -> String {
    let a_strings: HashSet<String> = a.to_strings().into_iter().collect();
    let b_strings: HashSet<String> = b.to_strings().into_iter().collect();

    let mut lines = Vec::new();
    for entry in a.to_strings() {
        if b_strings.contains(&entry) {
            lines.push(format!("    {entry}"));
        } else {
            lines.push(format!("  - {}", entry.red()));
        }
    }
    for entry in b.to_strings() {
        if !a_strings.contains(&entry) {
            lines.push(format!("  + {}", entry.green()));
        }
    }

    let verdict = if a == b {
        "semantically equal".green().to_string()
    } else {
        "NOT semantically equal".red().to_string()
    };
    if lines.is_empty() {
        format!("{verdict}\n")
    } else {
        format!("{}\n{verdict}\n", lines.iter().join("\n"))
    }
}
