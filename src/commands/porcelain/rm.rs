use crate::areas::repository::Repository;
use crate::artifacts::core::error::BitError;

impl Repository {
    /// Unstage tracked paths (exact or beneath a directory) and, unless
    /// `cached`, delete the working files
    pub fn rm(&self, paths: &[String], cached: bool) -> anyhow::Result<()> {
        let mut index = self.load_index()?;
        if index.is_empty() {
            return Err(BitError::precondition_failed(
                "nothing to remove: index is empty",
            ));
        }

        let targets = index.paths_matching(&self.pathspecs(paths)?);
        if targets.is_empty() {
            return Err(BitError::invalid_argument(
                "pathspec did not match any tracked files",
            ));
        }

        for path in &targets {
            index.remove(path);
            if !cached {
                self.workspace().remove_file(path)?;
            }
        }

        index.write_updates()?;

        Ok(())
    }
}
