use crate::areas::repository::Repository;
use crate::artifacts::core::error::BitError;
use crate::artifacts::objects::commit::{Author, Commit};
use std::io::Write;

impl Repository {
    /// Record the index as a commit on top of HEAD
    ///
    /// With `amend`, the new commit replaces HEAD: it takes HEAD's parent and,
    /// when no message is given, HEAD's message.
    pub fn commit(&self, message: Option<&str>, amend: bool) -> anyhow::Result<()> {
        let index = self.load_index()?;
        if index.is_empty() {
            return Err(BitError::precondition_failed(
                "cannot commit: index is empty",
            ));
        }

        let head_oid = self.refs().read_head()?;
        let (parent, previous_message) = if amend {
            let head_oid = head_oid.ok_or_else(|| {
                BitError::precondition_failed("cannot amend: HEAD does not point to a commit")
            })?;
            let amended = self.database().parse_object_as_commit(&head_oid)?;

            (amended.parent().cloned(), Some(amended.message().to_string()))
        } else {
            (head_oid, None)
        };

        let message = message
            .map(|message| message.trim_end_matches('\n').to_string())
            .filter(|message| !message.trim().is_empty())
            .or(previous_message)
            .filter(|message| !message.is_empty())
            .ok_or_else(|| BitError::invalid_argument("commit message is required (use -m)"))?;

        let tree_oid = self.store_index_tree(&index)?;
        let commit = Commit::new(parent, tree_oid, Author::load_from_env(), message);
        let commit_oid = self.database().store(&commit)?;
        self.refs().update_head(&commit_oid)?;

        let verb = if amend { "amended" } else { "committed" };
        match self.refs().current_branch()? {
            Some(branch) if amend => writeln!(self.writer(), "{verb} {branch}: {commit_oid}")?,
            Some(branch) => writeln!(self.writer(), "{verb} to {branch}: {commit_oid}")?,
            None => writeln!(self.writer(), "{verb} in detached HEAD: {commit_oid}")?,
        }

        Ok(())
    }
}
