use crate::areas::index::match_pathspecs;
use crate::areas::repository::Repository;
use crate::artifacts::core::error::BitError;
use crate::artifacts::index::index_entry::{EntryMetadata, IndexEntry};

impl Repository {
    pub fn restore(&self, paths: &[String], staged: bool) -> anyhow::Result<()> {
        let pathspecs = self.pathspecs(paths)?;

        if staged {
            self.restore_staged(&pathspecs)
        } else {
            self.restore_worktree(&pathspecs)
        }
    }

    /// Reset matching index entries to their HEAD version; entries HEAD does
    /// not have are unstaged
    fn restore_staged(&self, pathspecs: &[String]) -> anyhow::Result<()> {
        let mut index = self.load_index()?;
        let head_tree = self.head_tree()?;

        let mut targets = index.paths_matching(pathspecs);
        targets.extend(match_pathspecs(pathspecs, head_tree.keys()));
        if targets.is_empty() {
            return Err(BitError::invalid_argument(
                "pathspec did not match any staged entries",
            ));
        }

        for path in targets {
            match head_tree.get(&path) {
                Some(head_entry) => index.add(IndexEntry::new(
                    path,
                    head_entry.oid.clone(),
                    EntryMetadata::with_mode(head_entry.mode),
                )),
                None => index.remove(&path),
            }
        }

        index.write_updates()?;

        Ok(())
    }

    /// Overwrite matching working files with their staged content
    fn restore_worktree(&self, pathspecs: &[String]) -> anyhow::Result<()> {
        let index = self.load_index()?;

        let targets = index.paths_matching(pathspecs);
        if targets.is_empty() {
            return Err(BitError::invalid_argument(
                "pathspec did not match any tracked files",
            ));
        }

        for entry in targets.iter().filter_map(|path| index.entry_by_path(path)) {
            let blob = self.database().parse_object_as_blob(&entry.oid)?;
            self.workspace()
                .write_file(&entry.name, blob.content(), entry.metadata.mode)?;
        }

        Ok(())
    }
}
