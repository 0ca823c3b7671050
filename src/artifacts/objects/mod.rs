//! Object kinds and their codecs
//!
//! Every piece of content is stored as one of three immutable object kinds:
//!
//! - **Blob**: raw file bytes
//! - **Tree**: directory listing (mode, name, child object id)
//! - **Commit**: tree id, optional parent id, author/committer lines and message
//!
//! An object's identity is the SHA-1 of its typed encoding:
//! `<kind> <payload-length>\0<payload>`

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_type;
pub mod tree;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Length of a SHA-1 hash in raw bytes
pub const OBJECT_ID_BYTES: usize = 20;

/// Shortest abbreviation accepted when resolving object ids
pub const MIN_PREFIX_LENGTH: usize = 4;
