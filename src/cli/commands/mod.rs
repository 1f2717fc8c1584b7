//! CLI command implementations
//!
//! This module contains all CLI command implementations.

pub mod link;
pub mod todoist;
