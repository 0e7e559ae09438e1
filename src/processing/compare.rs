//! Semantic equality between host collections.

use super::normalize::normalize;
use crate::models::{HostParseErrors, HostSet};

/// Decide whether two raw host collections have the same effective
/// access-control membership.
///
/// Both sides are normalized independently, so textual formatting
/// differences (compressed vs. full IPv6, non-network host bits, dotted
/// masks) and input ordering never produce a spurious difference. A parse
/// failure on either side propagates as an error rather than a `false`:
/// an unreadable access list must surface as a validation problem, not as
/// a silent "changed" verdict.
pub fn semantic_equals<I, J, S, T>(a: I, b: J) -> Result<bool, HostParseErrors>
where
    I: IntoIterator<Item = S>,
    J: IntoIterator<Item = T>,
    S: AsRef<str>,
    T: AsRef<str>,
{
    let a = normalize(a)?;
    let b = normalize(b)?;
    Ok(a == b)
}

/// Renormalizing equality check between two [`HostSet`] values.
///
/// Both sets are re-derived from their textual form rather than trusted as
/// canonical; a comparison is always a fresh pure computation from the
/// source of truth.
pub fn sets_semantically_equal(a: &HostSet, b: &HostSet) -> Result<bool, HostParseErrors> {
    semantic_equals(a.to_strings(), b.to_strings())
}
