use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::core::error::BitError;
use crate::artifacts::objects::object_type::ObjectType;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetMode {
    /// Move HEAD only
    Soft,
    /// Move HEAD and rewrite the index to the target tree
    #[default]
    Mixed,
}

impl std::fmt::Display for ResetMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResetMode::Soft => write!(f, "soft"),
            ResetMode::Mixed => write!(f, "mixed"),
        }
    }
}

impl Repository {
    pub fn reset(&self, revision: &str, mode: ResetMode) -> anyhow::Result<()> {
        let target_oid = Revision::try_parse(revision)?.resolve(self)?;
        if self.database().load(&target_oid)?.object_type != ObjectType::Commit {
            return Err(BitError::invalid_argument(format!(
                "revision '{revision}' does not resolve to a commit"
            )));
        }

        if mode == ResetMode::Mixed {
            let target_commit = self.database().parse_object_as_commit(&target_oid)?;
            let target_tree = self.database().flatten(target_commit.tree_oid())?;

            let mut index = self.index_for_rewrite();
            index.replace_all(Index::entries_from_tree(&target_tree));
            index.write_updates()?;
        }

        self.refs().update_head(&target_oid)?;

        let label = self
            .refs()
            .current_branch()?
            .unwrap_or_else(|| "HEAD".to_string());
        writeln!(
            self.writer(),
            "reset {label} to {} ({mode})",
            target_oid.to_short_oid()
        )?;

        Ok(())
    }
}
