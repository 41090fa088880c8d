//! Score analysis and grading.
//!
//! This module grades each student against fixed letter bands, tallies the
//! grade distribution, splits students by the pass threshold, and combines
//! those with the score statistics into a single [`Analysis`](types::Analysis).

pub mod aggregate;
pub mod grade;
pub mod pass_fail;
pub mod types;
pub mod utility;
