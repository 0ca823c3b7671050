use crate::areas::repository::Repository;
use crate::artifacts::diff::diff_lines;
use crate::artifacts::diff::hunk::Hunk;
use crate::artifacts::diff::myers::Edit;
use crate::artifacts::index::entry_mode::EntryMode;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Unified diffs of every modified path, staged blob against working file
    pub fn diff(&self) -> anyhow::Result<()> {
        let index = self.load_index()?;
        let status_info = self.status_info(&index)?;

        for entry in status_info
            .modified
            .iter()
            .filter_map(|path| index.entry_by_path(path))
        {
            let staged = self.database().parse_object_as_blob(&entry.oid)?;
            let working = self.workspace().read_file(&entry.name)?;
            let working_oid = self.database().hash(ObjectType::Blob, &working)?;
            let working_mode = self.workspace().stat_file(&entry.name)?.mode;

            self.print_diff_header(entry, &working_oid, working_mode)?;

            let old = String::from_utf8_lossy(staged.content());
            let new = String::from_utf8_lossy(&working);
            for hunk in diff_lines(&old, &new) {
                self.print_diff_hunk(&hunk)?;
            }
        }

        Ok(())
    }

    fn print_diff_header(
        &self,
        entry: &IndexEntry,
        working_oid: &ObjectId,
        working_mode: EntryMode,
    ) -> anyhow::Result<()> {
        let mut writer = self.writer();
        let staged_mode = entry.metadata.mode;

        writeln!(
            writer,
            "{}",
            format!("diff --git a/{0} b/{0}", entry.name).bold()
        )?;

        let mut oid_range = format!(
            "index {}..{}",
            entry.oid.to_short_oid(),
            working_oid.to_short_oid()
        );
        if staged_mode == working_mode {
            oid_range.push_str(&format!(" {staged_mode}"));
        } else {
            writeln!(writer, "{}", format!("old mode {staged_mode}").bold())?;
            writeln!(writer, "{}", format!("new mode {working_mode}").bold())?;
        }

        writeln!(writer, "{}", oid_range.bold())?;
        writeln!(writer, "{}", format!("--- a/{}", entry.name).bold())?;
        writeln!(writer, "{}", format!("+++ b/{}", entry.name).bold())?;

        Ok(())
    }

    fn print_diff_hunk(&self, hunk: &Hunk<&str>) -> anyhow::Result<()> {
        let mut writer = self.writer();

        writeln!(writer, "{}", hunk.header().cyan())?;
        for edit in hunk.edits() {
            let line = edit.to_string();
            match edit {
                Edit::Delete { .. } => writeln!(writer, "{}", line.red())?,
                Edit::Insert { .. } => writeln!(writer, "{}", line.green())?,
                Edit::Equal { .. } => writeln!(writer, "{line}")?,
            }
        }

        Ok(())
    }
}
