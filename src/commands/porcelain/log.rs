use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::core::error::BitError;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use colored::Colorize;
use std::io::Write;

pub const DEFAULT_MAX_COUNT: usize = 10;

#[derive(Debug, Clone)]
pub struct LogOptions {
    pub oneline: bool,
    pub max_count: usize,
    /// Starting revision; HEAD when absent
    pub revision: Option<String>,
}

impl Default for LogOptions {
    fn default() -> Self {
        LogOptions {
            oneline: false,
            max_count: DEFAULT_MAX_COUNT,
            revision: None,
        }
    }
}

impl Repository {
    /// Walk first parents from the starting commit
    pub fn log(&self, opts: &LogOptions) -> anyhow::Result<()> {
        let start = match &opts.revision {
            Some(revision) => Revision::try_parse(revision)?.resolve_commit(self)?,
            None => self.refs().read_head()?.ok_or_else(|| {
                BitError::precondition_failed(
                    "your current branch does not have any commits yet",
                )
            })?,
        };

        let mut current = Some(start);
        let mut printed = 0;

        while let Some(commit_oid) = current {
            if printed >= opts.max_count {
                break;
            }

            let commit = self.database().parse_object_as_commit(&commit_oid)?;
            if opts.oneline {
                self.show_commit_oneline(&commit_oid, &commit)?;
            } else {
                self.show_commit_medium(&commit_oid, &commit)?;
            }

            current = commit.parent().cloned();
            printed += 1;
        }

        Ok(())
    }

    fn show_commit_oneline(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        writeln!(
            self.writer(),
            "{} {}",
            commit_oid.to_short_oid().yellow(),
            commit.short_message()
        )?;

        Ok(())
    }

    fn show_commit_medium(&self, commit_oid: &ObjectId, commit: &Commit) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "{}", format!("commit {commit_oid}").yellow())?;
        writeln!(writer, "Author: {}", commit.author().display_name())?;
        writeln!(writer, "Date:   {}", commit.author().readable_timestamp())?;
        writeln!(writer)?;
        for message_line in commit.message().lines() {
            writeln!(writer, "    {message_line}")?;
        }
        writeln!(writer)?;

        Ok(())
    }
}
