use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::core::error::BitError;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// List branches, marking the one HEAD is attached to
    pub fn list_branches(&self) -> anyhow::Result<()> {
        let current = self.refs().current_branch()?;
        let mut writer = self.writer();

        for branch in self.refs().list_branches()? {
            if current.as_deref() == Some(branch.as_str()) {
                writeln!(writer, "* {}", branch.green())?;
            } else {
                writeln!(writer, "  {branch}")?;
            }
        }

        Ok(())
    }

    /// Create a branch at `start_point`, or at HEAD when absent
    pub fn create_branch(&self, name: &str, start_point: Option<&str>) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(name.to_string())?;

        let source_oid = match start_point {
            Some(start_point) => Revision::try_parse(start_point)?.resolve_commit(self)?,
            None => self.refs().read_head()?.ok_or_else(|| {
                BitError::precondition_failed(
                    "cannot create branch: HEAD does not point to a commit",
                )
            })?,
        };

        self.refs().create_branch(&branch_name, &source_oid)?;

        writeln!(
            self.writer(),
            "branch '{branch_name}' created at {}",
            source_oid.to_short_oid()
        )?;

        Ok(())
    }

    pub fn delete_branch(&self, name: &str) -> anyhow::Result<()> {
        let branch_name = BranchName::try_parse(name.to_string())?;
        let last_oid = self.refs().delete_branch(&branch_name)?;

        writeln!(
            self.writer(),
            "deleted branch '{branch_name}' (was {})",
            last_oid.to_short_oid()
        )?;

        Ok(())
    }
}
