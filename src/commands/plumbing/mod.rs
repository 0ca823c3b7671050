//! Plumbing commands (low-level operations)
//!
//! Direct access to the object store, the index and revision resolution,
//! mostly useful for scripting and inspection.
//!
//! ## Commands
//!
//! - `hash-object`: Compute an object id and optionally store the object
//! - `cat-file`: Print an object's kind, size or content
//! - `ls-files`: List index entries
//! - `write-tree`: Store the index as a tree
//! - `rev-parse`: Resolve a revision to a full object id

pub mod cat_file;
pub mod hash_object;
pub mod ls_files;
pub mod rev_parse;
pub mod write_tree;
