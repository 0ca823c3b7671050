//! Working tree status
//!
//! Status is a pure comparison of three views of the tree: the flattened HEAD
//! commit, the index entries, and the (ignore-filtered) working tree scan.
//!
//! ## Components
//!
//! - `file_change`: the four change categories and their labels
//! - `status_info`: set computation

pub mod file_change;
pub mod status_info;
