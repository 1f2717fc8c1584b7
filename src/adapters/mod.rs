//! External system integrations for course-tasks.
//!
//! - [`udemy`] - Curriculum download link construction and loading of the
//!   downloaded JSON pages
//!
//! The tool never talks to the network itself. The operator fetches the
//! curriculum with the printed link and feeds the saved pages back in.

pub mod udemy;
