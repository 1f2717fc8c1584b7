//! Course platform adapter
//!
//! This module provides:
//! - [`CurriculumLink`] to build the `subscriber-curriculum-items` URL
//! - [`load_curriculum`] to read downloaded curriculum pages

pub mod link;
pub mod source;

pub use link::{CurriculumLink, DEFAULT_HOST, DEFAULT_PAGE_SIZE};
pub use source::{load_curriculum, read_page};
