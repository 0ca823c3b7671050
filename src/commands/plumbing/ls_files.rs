use crate::areas::repository::Repository;
use std::io::Write;

impl Repository {
    pub fn ls_files(&self, stage: bool) -> anyhow::Result<()> {
        let index = self.load_index()?;

        for entry in index.entries() {
            if stage {
                writeln!(
                    self.writer(),
                    "{:o} {} 0\t{}",
                    entry.metadata.mode.as_u32(),
                    entry.oid,
                    entry.name
                )?;
            } else {
                writeln!(self.writer(), "{}", entry.name)?;
            }
        }

        Ok(())
    }
}
