use crate::areas::repository::Repository;
use crate::artifacts::status::file_change::FileChange;
use crate::artifacts::status::status_info::StatusInfo;
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub fn status(&self) -> anyhow::Result<()> {
        let index = self.load_index()?;
        let status_info = self.status_info(&index)?;

        self.print_branch_status()?;
        self.print_changes(&status_info)?;

        Ok(())
    }

    fn print_branch_status(&self) -> anyhow::Result<()> {
        match self.refs().current_branch()? {
            Some(branch) => writeln!(self.writer(), "On branch {}", branch.bold())?,
            None => {
                let detached_at = self
                    .refs()
                    .read_head()?
                    .map(|oid| oid.to_short_oid())
                    .unwrap_or_else(|| "unknown".to_string());
                writeln!(self.writer(), "HEAD detached at {}", detached_at.red())?;
            }
        }
        writeln!(self.writer())?;

        Ok(())
    }

    fn print_changes(&self, status_info: &StatusInfo) -> anyhow::Result<()> {
        let mut writer = self.writer();

        if !status_info.staged.is_empty() {
            writeln!(writer, "Changes to be committed:")?;
            for path in &status_info.staged {
                writeln!(writer, "{}", FileChange::Staged.format_line(path))?;
            }
            writeln!(writer)?;
        }

        if !status_info.modified.is_empty() || !status_info.deleted.is_empty() {
            writeln!(writer, "Changes not staged for commit:")?;
            for (change, path) in status_info.unstaged() {
                writeln!(writer, "{}", change.format_line(path))?;
            }
            writeln!(writer)?;
        }

        if !status_info.untracked.is_empty() {
            writeln!(writer, "Untracked files:")?;
            for path in &status_info.untracked {
                writeln!(writer, "{}", FileChange::Untracked.format_line(path))?;
            }
            writeln!(writer)?;
        }

        if status_info.is_clean() {
            writeln!(writer, "nothing to commit, working tree clean")?;
        }

        Ok(())
    }
}
