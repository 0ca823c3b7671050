//! Database entry types
//!
//! Database entries are the `(mode, object id)` pairs recorded in tree objects
//! and produced when flattening a tree into a path map.

pub mod database_entry;
