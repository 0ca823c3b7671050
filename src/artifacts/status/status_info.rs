use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::status::file_change::FileChange;
use std::collections::{BTreeMap, BTreeSet};

pub type HeadTree = BTreeMap<String, DatabaseEntry>;
pub type FileSet = BTreeSet<String>;

/// The four status sets, each sorted by path
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusInfo {
    pub staged: FileSet,
    pub modified: FileSet,
    pub deleted: FileSet,
    pub untracked: FileSet,
}

impl StatusInfo {
    /// Compare HEAD, the index and the working tree
    ///
    /// `rehash` computes the blob id of a working file without storing it; it
    /// is called for every path present in both the index and the worktree.
    pub fn compute<'e, F>(
        head_tree: &HeadTree,
        index_entries: impl IntoIterator<Item = &'e IndexEntry>,
        worktree: &FileSet,
        mut rehash: F,
    ) -> anyhow::Result<Self>
    where
        F: FnMut(&str) -> anyhow::Result<ObjectId>,
    {
        let mut info = StatusInfo::default();
        let mut indexed = FileSet::new();

        for entry in index_entries {
            indexed.insert(entry.name.clone());

            if head_tree.get(&entry.name).map(|head| &head.oid) != Some(&entry.oid) {
                info.staged.insert(entry.name.clone());
            }

            if worktree.contains(&entry.name) {
                if rehash(&entry.name)? != entry.oid {
                    info.modified.insert(entry.name.clone());
                }
            } else {
                info.deleted.insert(entry.name.clone());
            }
        }

        info.staged.extend(
            head_tree
                .keys()
                .filter(|path| !indexed.contains(*path))
                .cloned(),
        );
        info.untracked
            .extend(worktree.difference(&indexed).cloned());

        Ok(info)
    }

    pub fn is_clean(&self) -> bool {
        self.staged.is_empty()
            && self.modified.is_empty()
            && self.deleted.is_empty()
            && self.untracked.is_empty()
    }

    /// Unstaged changes: modified then deleted paths
    pub fn unstaged(&self) -> impl Iterator<Item = (FileChange, &String)> {
        self.modified
            .iter()
            .map(|path| (FileChange::Modified, path))
            .chain(self.deleted.iter().map(|path| (FileChange::Deleted, path)))
    }
}
