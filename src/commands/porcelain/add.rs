use crate::areas::repository::Repository;
use crate::areas::workspace::CONTROL_DIR;
use crate::artifacts::core::error::BitError;
use std::collections::BTreeSet;

impl Repository {
    /// Stage files, expanding directories
    ///
    /// Untracked files matching an ignore rule are skipped; tracked ones are
    /// re-staged whatever the rules say.
    pub fn add(&self, paths: &[String]) -> anyhow::Result<()> {
        let mut index = self.load_index()?;
        let matcher = self.ignore_matcher()?;

        let mut files = BTreeSet::new();
        for raw_path in paths {
            let pathspec = self.workspace().pathspec(self.cwd(), raw_path)?;
            if !self.workspace().exists(&pathspec) {
                return Err(BitError::not_found(format!("path not found: {raw_path}")));
            }
            if pathspec.split('/').any(|component| component == CONTROL_DIR) {
                continue;
            }

            files.extend(self.workspace().list_files_under(&pathspec)?);
        }

        for path in files {
            if !index.is_tracked(&path) && matcher.is_ignored(&path, false) {
                log::debug!("skipping ignored path {path}");
                continue;
            }

            let entry = self.build_entry(&path)?;
            index.add(entry);
        }

        index.write_updates()?;

        Ok(())
    }
}
