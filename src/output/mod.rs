//! Output formatting for host sets.
//!
//! This module handles rendering host sets for the terminal:
//! grouped listing and comparison rendering with colors.

mod terminal;

pub use terminal::{render_comparison, render_host_set};
