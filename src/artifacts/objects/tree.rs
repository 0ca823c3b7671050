//! Tree object
//!
//! Trees represent directory snapshots. They contain records for files (blobs)
//! and subdirectories (other trees), along with their names and modes.
//!
//! ## Format
//!
//! On disk: `tree <size>\0<records>`
//! Each record: `<octal-mode> <name>\0<20-byte-sha1>`, sorted by name bytes
//!
//! ## Tree Building
//!
//! [`TreeNode`] holds a directory hierarchy built from flat index paths. It is
//! written bottom-up: every directory is lowered to a [`Tree`] record list once
//! its children have ids, and that same record list is what decoding yields.

use crate::artifacts::core::error::BitError;
use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::index::entry_mode::EntryMode;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{BufRead, Write};

/// A node in a directory hierarchy waiting to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A file: its stored mode and blob id
    FileRef(DatabaseEntry),
    /// A directory: children ordered by name
    Directory(BTreeMap<String, TreeNode>),
}

impl Default for TreeNode {
    fn default() -> Self {
        TreeNode::Directory(BTreeMap::new())
    }
}

impl TreeNode {
    /// Build the root directory from index entries by descending path segments
    pub fn build<'e>(entries: impl IntoIterator<Item = &'e IndexEntry>) -> Self {
        let mut root = Self::default();

        for entry in entries {
            let segments = entry.name.split('/').collect::<Vec<_>>();
            root.insert(
                &segments,
                DatabaseEntry::new(entry.oid.clone(), entry.metadata.mode),
            );
        }

        root
    }

    fn insert(&mut self, segments: &[&str], entry: DatabaseEntry) {
        let TreeNode::Directory(children) = self else {
            *self = Self::default();
            return self.insert(segments, entry);
        };

        match segments {
            [] => {}
            [name] => {
                children.insert(name.to_string(), TreeNode::FileRef(entry));
            }
            [name, rest @ ..] => children
                .entry(name.to_string())
                .or_default()
                .insert(rest, entry),
        }
    }

    /// Lower the hierarchy to tree records, children first
    ///
    /// `store` receives every directory's record list and returns its id; the
    /// returned value is the root tree's id.
    pub fn write_with<F>(&self, store: &mut F) -> anyhow::Result<ObjectId>
    where
        F: FnMut(&Tree) -> anyhow::Result<ObjectId>,
    {
        match self {
            TreeNode::FileRef(entry) => Ok(entry.oid.clone()),
            TreeNode::Directory(children) => {
                let mut tree = Tree::default();

                for (name, child) in children {
                    let entry = match child {
                        TreeNode::FileRef(entry) => entry.clone(),
                        TreeNode::Directory(_) => {
                            DatabaseEntry::new(child.write_with(store)?, EntryMode::Directory)
                        }
                    };
                    tree.insert(name.clone(), entry);
                }

                store(&tree)
            }
        }
    }
}

/// The record list of a single tree object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tree {
    entries: BTreeMap<String, DatabaseEntry>,
}

impl Tree {
    pub fn insert(&mut self, name: String, entry: DatabaseEntry) {
        self.entries.insert(name, entry);
    }

    pub fn entries(&self) -> impl Iterator<Item = (&String, &DatabaseEntry)> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> impl Iterator<Item = (String, DatabaseEntry)> {
        self.entries.into_iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Packable for Tree {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut content_bytes = Vec::new();

        for (name, entry) in &self.entries {
            write!(content_bytes, "{} {}", entry.mode.as_str(), name)?;
            content_bytes.push(0);
            entry.oid.write_h40_to(&mut content_bytes)?;
        }

        Ok(Bytes::from(content_bytes))
    }
}

impl Unpackable for Tree {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut entries = BTreeMap::new();
        let mut reader = reader;

        let mut mode_bytes = Vec::new();
        let mut name_bytes = Vec::new();

        loop {
            mode_bytes.clear();
            let n = reader.read_until(b' ', &mut mode_bytes)?;
            if n == 0 {
                break;
            }
            if mode_bytes.pop() != Some(b' ') {
                return Err(BitError::corrupt("unexpected end of tree record in mode"));
            }

            let mode_str = std::str::from_utf8(&mode_bytes)
                .map_err(|_| BitError::corrupt("tree record mode is not valid UTF-8"))?;
            let mode = EntryMode::from_octal_str(mode_str)?;

            name_bytes.clear();
            reader.read_until(b'\0', &mut name_bytes)?;
            if name_bytes.pop() != Some(b'\0') {
                return Err(BitError::corrupt("unexpected end of tree record in name"));
            }
            let name = std::str::from_utf8(&name_bytes)
                .map_err(|_| BitError::corrupt("tree record name is not valid UTF-8"))?
                .to_owned();

            let oid = ObjectId::read_h40_from(&mut reader)
                .map_err(|_| BitError::corrupt("unexpected end of tree record in object id"))?;

            entries.insert(name, DatabaseEntry::new(oid, mode));
        }

        Ok(Tree { entries })
    }
}

impl Object for Tree {
    fn object_type(&self) -> ObjectType {
        ObjectType::Tree
    }

    fn display(&self) -> String {
        self.entries
            .iter()
            .map(|(name, entry)| {
                let object_type = if entry.is_tree() {
                    ObjectType::Tree
                } else {
                    ObjectType::Blob
                };

                format!(
                    "{:0>6} {} {}\t{}",
                    entry.mode.as_str(),
                    object_type,
                    entry.oid,
                    name
                )
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}
