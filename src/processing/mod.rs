//! Host-set processing logic.
//!
//! This module contains the algorithms of the crate:
//! - normalization - canonicalization (dedup + subsumption reduction)
//! - comparison - semantic set equality

mod compare;
mod normalize;

// Re-export public functions
pub use compare::{semantic_equals, sets_semantically_equal};
pub use normalize::normalize;
