//! Index entry representation
//!
//! Each entry in the index represents a tracked file with:
//! - File path (POSIX style, relative to the repository root)
//! - Content hash (object ID)
//! - File metadata (mode, size, timestamps)
//!
//! ## Entry Format
//!
//! Ten big-endian 32-bit stat fields, the 20-byte object id, a 16-bit flags
//! field holding the path length, then the NUL-terminated path. Each entry is
//! padded with NUL bytes to the next 8-byte boundary.

use crate::artifacts::core::error::BitError;
use crate::artifacts::index::entry_mode::EntryMode;
use crate::artifacts::objects::object::Packable;
use crate::artifacts::objects::object_id::ObjectId;
use byteorder::{ByteOrder, WriteBytesExt};
use bytes::Bytes;
use derive_new::new;
use std::cmp::min;
use std::fs::Metadata;
use std::io::Write;
use std::os::unix::prelude::MetadataExt;

/// Maximum path length recorded in the flags field
pub const MAX_PATH_SIZE: usize = 0xFFF;

/// Block size for entry alignment (8 bytes)
pub const ENTRY_BLOCK: usize = 8;

/// Size of the fixed part of an entry: ten u32 fields, object id, flags
pub const ENTRY_FIXED_SIZE: usize = 62;

/// Index entry representing a tracked file
#[derive(Debug, Clone, Default, new)]
pub struct IndexEntry {
    /// File path relative to repository root, `/`-separated
    pub name: String,
    /// SHA-1 hash of file content
    pub oid: ObjectId,
    /// File metadata (mode, size, timestamps)
    pub metadata: EntryMetadata,
}

impl IndexEntry {
    /// Directories containing this entry, outermost first
    pub fn parent_dirs(&self) -> Vec<&str> {
        self.name
            .match_indices('/')
            .map(|(position, _)| &self.name[..position])
            .collect()
    }

    pub fn basename(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    /// Value of the flags field: path length capped at 0xFFF
    pub fn flags(&self) -> u16 {
        min(self.name.len(), MAX_PATH_SIZE) as u16
    }

    /// Total on-disk size including NUL terminator and padding
    pub fn encoded_len(&self) -> usize {
        padded_len(self.name.len())
    }

    /// Parse one entry from the start of `bytes`, returning it with its encoded length
    pub fn parse(bytes: &[u8]) -> anyhow::Result<(Self, usize)> {
        if bytes.len() < ENTRY_FIXED_SIZE {
            return Err(BitError::corrupt("index entry is truncated"));
        }

        let field = |position: usize| {
            byteorder::NetworkEndian::read_u32(&bytes[position * 4..position * 4 + 4])
        };
        let mode = EntryMode::try_from(field(6))?;
        let oid = ObjectId::from_raw_bytes(&bytes[40..60])?;

        let name_len = bytes[ENTRY_FIXED_SIZE..]
            .iter()
            .position(|&b| b == 0)
            .ok_or_else(|| BitError::corrupt("index entry path is not NUL-terminated"))?;
        let name = std::str::from_utf8(&bytes[ENTRY_FIXED_SIZE..ENTRY_FIXED_SIZE + name_len])
            .map_err(|_| BitError::corrupt("index entry path is not valid UTF-8"))?
            .to_string();

        let entry_len = padded_len(name_len);
        if bytes.len() < entry_len {
            return Err(BitError::corrupt("index entry padding is truncated"));
        }

        let entry = IndexEntry {
            name,
            oid,
            metadata: EntryMetadata {
                ctime: field(0) as i64,
                ctime_nsec: field(1) as i64,
                mtime: field(2) as i64,
                mtime_nsec: field(3) as i64,
                dev: field(4) as u64,
                ino: field(5) as u64,
                mode,
                uid: field(7),
                gid: field(8),
                size: field(9) as u64,
            },
        };

        Ok((entry, entry_len))
    }
}

fn padded_len(name_len: usize) -> usize {
    (ENTRY_FIXED_SIZE + name_len + ENTRY_BLOCK) / ENTRY_BLOCK * ENTRY_BLOCK
}

impl PartialEq for IndexEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.oid == other.oid && self.metadata == other.metadata
    }
}

impl Eq for IndexEntry {}

/// File metadata stored in index entries
///
/// Entries rebuilt from a commit tree carry zeroed stat fields; only the mode
/// survives from the tree record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryMetadata {
    /// Change time (seconds since Unix epoch)
    pub ctime: i64,
    /// Change time nanoseconds
    pub ctime_nsec: i64,
    /// Modification time (seconds since Unix epoch)
    pub mtime: i64,
    /// Modification time nanoseconds
    pub mtime_nsec: i64,
    pub dev: u64,
    pub ino: u64,
    pub mode: EntryMode,
    pub uid: u32,
    pub gid: u32,
    /// File size in bytes
    pub size: u64,
}

impl EntryMetadata {
    /// Zeroed metadata carrying only a mode
    pub fn with_mode(mode: EntryMode) -> Self {
        EntryMetadata {
            mode,
            ..Default::default()
        }
    }
}

impl From<&Metadata> for EntryMetadata {
    fn from(metadata: &Metadata) -> Self {
        Self {
            ctime: metadata.ctime(),
            ctime_nsec: metadata.ctime_nsec(),
            mtime: metadata.mtime(),
            mtime_nsec: metadata.mtime_nsec(),
            dev: metadata.dev(),
            ino: metadata.ino(),
            mode: EntryMode::from_permissions(metadata.mode()),
            uid: metadata.uid(),
            gid: metadata.gid(),
            size: metadata.size(),
        }
    }
}

impl Packable for IndexEntry {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut entry_bytes = Vec::with_capacity(self.encoded_len());
        entry_bytes.write_u32::<byteorder::NetworkEndian>(self.metadata.ctime as u32)?;
        entry_bytes.write_u32::<byteorder::NetworkEndian>(self.metadata.ctime_nsec as u32)?;
        entry_bytes.write_u32::<byteorder::NetworkEndian>(self.metadata.mtime as u32)?;
        entry_bytes.write_u32::<byteorder::NetworkEndian>(self.metadata.mtime_nsec as u32)?;
        entry_bytes.write_u32::<byteorder::NetworkEndian>(self.metadata.dev as u32)?;
        entry_bytes.write_u32::<byteorder::NetworkEndian>(self.metadata.ino as u32)?;
        entry_bytes.write_u32::<byteorder::NetworkEndian>(self.metadata.mode.as_u32())?;
        entry_bytes.write_u32::<byteorder::NetworkEndian>(self.metadata.uid)?;
        entry_bytes.write_u32::<byteorder::NetworkEndian>(self.metadata.gid)?;
        entry_bytes.write_u32::<byteorder::NetworkEndian>(self.metadata.size as u32)?;
        self.oid.write_h40_to(&mut entry_bytes)?;
        entry_bytes.write_u16::<byteorder::NetworkEndian>(self.flags())?;
        entry_bytes.write_all(self.name.as_bytes())?;

        // at least one NUL, then pad to the block size
        entry_bytes.push(0);
        while entry_bytes.len() % ENTRY_BLOCK != 0 {
            entry_bytes.push(0);
        }

        Ok(Bytes::from(entry_bytes))
    }
}
