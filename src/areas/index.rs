//! Index (staging area)
//!
//! The index tracks which files should be included in the next commit, with
//! their mode, stat data and blob id.
//!
//! ## Index File Format
//!
//! The index file contains:
//! - Header: Signature, version, and entry count
//! - Entries: Sorted list of tracked files with metadata
//! - Checksum: SHA-1 hash of everything before it
//!
//! The checksum is verified before any entry is decoded. A missing file is an
//! empty index.
//!
//! ## Data Structures
//!
//! - `entries`: Maps file paths to their index entries
//! - `children`: Maps directory paths to the entries beneath them

use crate::artifacts::core::error::BitError;
use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::index::checksum::{Checksum, verify_trailer};
use crate::artifacts::index::index_entry::{EntryMetadata, IndexEntry};
use crate::artifacts::index::index_header::IndexHeader;
use crate::artifacts::index::HEADER_SIZE;
use crate::artifacts::objects::object::Packable;
use anyhow::Context;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.git/index`)
    path: Box<Path>,
    /// Tracked files mapped by path
    entries: BTreeMap<String, IndexEntry>,
    /// Directory hierarchy for parent-child lookups
    children: BTreeMap<String, BTreeSet<String>>,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            children: BTreeMap::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entry_by_path(&self, path: &str) -> Option<&IndexEntry> {
        self.entries.get(path)
    }

    pub fn is_tracked(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// True for a tracked file or a directory containing tracked files
    pub fn is_directly_tracked(&self, path: &str) -> bool {
        self.entries.contains_key(path) || self.children.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.children.clear();
    }

    /// Reload the entries from disk
    pub fn rehydrate(&mut self) -> anyhow::Result<()> {
        self.clear();

        if !self.path.exists() {
            return Ok(());
        }

        let data = std::fs::read(&self.path)
            .with_context(|| format!("Unable to read index file {}", self.path.display()))?;
        let body = verify_trailer(&data)?;
        let header = IndexHeader::parse(body)?;

        let mut offset = HEADER_SIZE;
        for _ in 0..header.entries_count {
            let (entry, entry_len) = IndexEntry::parse(&body[offset..])?;
            offset += entry_len;
            self.store_entry(entry);
        }

        if offset != body.len() {
            return Err(BitError::corrupt(format!(
                "index has {} trailing bytes after {} entries",
                body.len() - offset,
                header.entries_count
            )));
        }
        log::trace!("loaded {} index entries", self.entries.len());

        Ok(())
    }

    /// Rewrite the index file from the in-memory entries
    pub fn write_updates(&self) -> anyhow::Result<()> {
        let mut writer = Checksum::new(Vec::new());

        writer.write(&IndexHeader::for_entries(self.entries.len() as u32).serialize()?)?;
        for entry in self.entries() {
            writer.write(&entry.serialize()?)?;
        }
        let data = writer.write_checksum()?;

        std::fs::write(&self.path, data)
            .with_context(|| format!("Unable to write index file {}", self.path.display()))?;
        log::debug!("wrote {} index entries", self.entries.len());

        Ok(())
    }

    /// Stage an entry, evicting file/directory conflicts with its path
    pub fn add(&mut self, entry: IndexEntry) {
        self.discard_conflicts(&entry);
        self.store_entry(entry);
    }

    /// Unstage a path, or every entry beneath it when it names a directory
    pub fn remove(&mut self, path: &str) {
        self.remove_entry(path);
        self.remove_children(path);
    }

    /// Replace every entry at once
    pub fn replace_all(&mut self, entries: impl IntoIterator<Item = IndexEntry>) {
        self.clear();
        for entry in entries {
            self.add(entry);
        }
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    pub fn paths(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }

    /// Tracked paths equal to a pathspec or nested under one
    pub fn paths_matching(&self, pathspecs: &[String]) -> BTreeSet<String> {
        match_pathspecs(pathspecs, self.entries.keys())
    }

    /// Zero-stat entries reproducing a flattened commit tree
    pub fn entries_from_tree(
        flattened: &BTreeMap<String, DatabaseEntry>,
    ) -> impl Iterator<Item = IndexEntry> + '_ {
        flattened.iter().map(|(path, entry)| {
            IndexEntry::new(
                path.clone(),
                entry.oid.clone(),
                EntryMetadata::with_mode(entry.mode),
            )
        })
    }

    fn discard_conflicts(&mut self, entry: &IndexEntry) {
        for parent in entry.parent_dirs() {
            self.remove_entry(parent);
        }
        self.remove_children(&entry.name);
    }

    fn store_entry(&mut self, entry: IndexEntry) {
        for parent in entry.parent_dirs() {
            self.children
                .entry(parent.to_string())
                .or_default()
                .insert(entry.name.clone());
        }

        self.entries.insert(entry.name.clone(), entry);
    }

    fn remove_children(&mut self, path: &str) {
        if let Some(children) = self.children.remove(path) {
            for child in children {
                self.remove_entry(&child);
            }
        }
    }

    fn remove_entry(&mut self, path: &str) {
        if let Some(entry) = self.entries.remove(path) {
            for parent in entry.parent_dirs() {
                if let Some(children) = self.children.get_mut(parent) {
                    children.remove(path);
                    if children.is_empty() {
                        self.children.remove(parent);
                    }
                }
            }
        }
    }
}

/// Candidates equal to a pathspec or beneath it as a directory
pub fn match_pathspecs<'a>(
    pathspecs: &[String],
    candidates: impl IntoIterator<Item = &'a String>,
) -> BTreeSet<String> {
    candidates
        .into_iter()
        .filter(|candidate| {
            pathspecs.iter().any(|spec| {
                spec.is_empty()
                    || *candidate == spec
                    || candidate
                        .strip_prefix(spec.as_str())
                        .is_some_and(|rest| rest.starts_with('/'))
            })
        })
        .cloned()
        .collect()
}
