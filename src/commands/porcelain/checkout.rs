use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::core::error::BitError;
use std::io::Write;

impl Repository {
    /// Switch the working tree, index and HEAD to `target`
    ///
    /// An existing branch name attaches HEAD to it; any other revision
    /// detaches HEAD at the commit it resolves to.
    pub fn checkout(&self, target: &str) -> anyhow::Result<()> {
        let mut index = self.load_index()?;
        if !self.status_info(&index)?.is_clean() {
            return Err(BitError::precondition_failed(
                "cannot checkout with local changes; commit or clean your working tree first",
            ));
        }

        let branch_name = BranchName::try_parse(target.to_string())
            .ok()
            .filter(|branch_name| self.refs().branch_exists(branch_name));

        let target_oid = match &branch_name {
            Some(branch_name) => self.refs().read_branch(branch_name)?.ok_or_else(|| {
                BitError::not_found(format!("branch '{branch_name}' does not point to a commit"))
            })?,
            None => Revision::try_parse(target)?.resolve_commit(self)?,
        };

        let target_commit = self.database().parse_object_as_commit(&target_oid)?;
        let target_tree = self.database().flatten(target_commit.tree_oid())?;

        for path in index.paths().filter(|path| !target_tree.contains_key(*path)) {
            self.workspace().remove_file(path)?;
        }
        for (path, entry) in &target_tree {
            let blob = self.database().parse_object_as_blob(&entry.oid)?;
            self.workspace().write_file(path, blob.content(), entry.mode)?;
        }

        let entries = target_tree
            .keys()
            .map(|path| self.build_entry(path))
            .collect::<anyhow::Result<Vec<_>>>()?;
        index.replace_all(entries);
        index.write_updates()?;

        match branch_name {
            Some(branch_name) => {
                self.refs().attach_head(&branch_name)?;
                writeln!(self.writer(), "switched to branch '{branch_name}'")?;
            }
            None => {
                self.refs().detach_head(&target_oid)?;
                writeln!(self.writer(), "HEAD is now at {}", target_oid.to_short_oid())?;
            }
        }

        Ok(())
    }
}
