//! Canonical host set.

use serde::Serialize;

use super::host::HostSpecifier;

/// A canonical, subsumption-free collection of host specifiers.
///
/// Built only by [`crate::processing::normalize`]; holds its elements in the
/// canonical order defined by [`HostSpecifier`]'s `Ord`, so two sets with the
/// same effective membership compare equal with plain `==` and serialize to
/// identical text. There is intentionally no `Deserialize` impl: a set read
/// back from storage goes through `normalize` again, never around it.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(transparent)]
pub struct HostSet {
    hosts: Vec<HostSpecifier>,
}

impl HostSet {
    /// Wrap an already-reduced, already-sorted list of specifiers.
    pub(crate) fn from_canonical(hosts: Vec<HostSpecifier>) -> HostSet {
        debug_assert!(hosts.windows(2).all(|w| w[0] < w[1]));
        HostSet { hosts }
    }

    /// The canonical elements, in serialization order.
    pub fn hosts(&self) -> &[HostSpecifier] {
        &self.hosts
    }

    /// Render the canonical elements as strings, suitable for storing as the
    /// declarative system's recorded state. Re-normalizing this output is a
    /// no-op.
    pub fn to_strings(&self) -> Vec<String> {
        self.hosts.iter().map(ToString::to_string).collect()
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HostSpecifier> {
        self.hosts.iter()
    }
}

impl<'a> IntoIterator for &'a HostSet {
    type Item = &'a HostSpecifier;
    type IntoIter = std::slice::Iter<'a, HostSpecifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.hosts.iter()
    }
}
