//! Data structures and algorithms
//!
//! - `branch`: branch names and revision expressions
//! - `core`: the typed error taxonomy
//! - `database`: entries of flattened trees
//! - `diff`: Myers line diff and unified hunks
//! - `ignore`: `.gitignore` rules and matching
//! - `index`: index file header, entries, checksum and modes
//! - `objects`: object kinds (blob, tree, commit) and their codecs
//! - `status`: HEAD / index / working tree comparison

pub mod branch;
pub mod core;
pub mod database;
pub mod diff;
pub mod ignore;
pub mod index;
pub mod objects;
pub mod status;
