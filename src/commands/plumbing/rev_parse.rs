use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use std::io::Write;

impl Repository {
    pub fn rev_parse(&self, revision: &str) -> anyhow::Result<()> {
        let object_id = Revision::try_parse(revision)?.resolve(self)?;

        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
