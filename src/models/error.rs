//! Typed errors for host specifier parsing.
//!
//! Every error carries the offending input string so the caller can render a
//! validation diagnostic that points at the exact bad entry.

use itertools::Itertools;
use thiserror::Error;

/// A single host specifier failed to parse.
///
/// Entries without a `/` never fail: anything that is not an IP literal falls
/// through to an opaque hostname. Once a `/` is present the entry has
/// committed to being a network literal and must parse cleanly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostParseError {
    /// The entry has CIDR shape but the prefix part is not a valid mask for
    /// the detected address family.
    #[error("invalid CIDR entry \"{input}\": {reason}")]
    InvalidCidr { input: String, reason: String },

    /// The address part of a network literal is not an IPv4 or IPv6 address.
    #[error("invalid address in entry \"{input}\"")]
    InvalidAddress { input: String },
}

impl HostParseError {
    pub fn invalid_cidr(input: &str, reason: impl Into<String>) -> Self {
        HostParseError::InvalidCidr {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn invalid_address(input: &str) -> Self {
        HostParseError::InvalidAddress {
            input: input.to_string(),
        }
    }

    /// The input string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            HostParseError::InvalidCidr { input, .. } => input,
            HostParseError::InvalidAddress { input } => input,
        }
    }
}

/// All parse failures from one batch, joined into a single diagnostic.
///
/// A batch operation reports every bad entry rather than stopping at the
/// first, so the user can fix the whole list in one pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .errors.iter().join("; "))]
pub struct HostParseErrors {
    pub errors: Vec<HostParseError>,
}

impl HostParseErrors {
    pub fn new(errors: Vec<HostParseError>) -> Self {
        HostParseErrors { errors }
    }
}

impl From<HostParseError> for HostParseErrors {
    fn from(err: HostParseError) -> Self {
        HostParseErrors { errors: vec![err] }
    }
}
