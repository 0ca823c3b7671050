//! Command implementations, as `impl Repository` blocks
//!
//! - `plumbing`: object store, index and revision inspection (hash-object,
//!   cat-file, ls-files, write-tree, rev-parse)
//! - `porcelain`: the everyday workflow (add, commit, status, log, etc.)

pub mod plumbing;
pub mod porcelain;
