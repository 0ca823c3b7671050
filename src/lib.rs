//! twig: a minimal version-control engine
//!
//! The crate is split in three layers:
//!
//! - `areas`: on-disk state (object database, index, refs, workspace, config)
//! - `artifacts`: data types and algorithms (objects, index records, revisions,
//!   ignore rules, status sets, line diffs, errors)
//! - `commands`: plumbing and porcelain operations composed on top of a
//!   [`areas::repository::Repository`] handle

pub mod areas;
pub mod artifacts;
pub mod commands;
