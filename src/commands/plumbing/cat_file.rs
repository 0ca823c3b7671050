use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::object::{Object, ObjectBox};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatFileMode {
    /// Content; trees are listed one entry per line
    Pretty,
    Type,
    Size,
}

impl Repository {
    pub fn cat_file(&self, object: &str, mode: CatFileMode) -> anyhow::Result<()> {
        let object_id = Revision::try_parse(object)?.resolve(self)?;
        let raw = self.database().load(&object_id)?;

        match mode {
            CatFileMode::Type => writeln!(self.writer(), "{}", raw.object_type)?,
            CatFileMode::Size => writeln!(self.writer(), "{}", raw.payload.len())?,
            CatFileMode::Pretty => match self.database().parse_object(&object_id)? {
                ObjectBox::Tree(tree) => {
                    for line in tree.display().lines() {
                        writeln!(self.writer(), "{line}")?;
                    }
                }
                ObjectBox::Blob(_) | ObjectBox::Commit(_) => {
                    self.writer().write_all(&raw.payload)?
                }
            },
        }

        Ok(())
    }
}
