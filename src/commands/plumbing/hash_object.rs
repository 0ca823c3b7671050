use crate::areas::repository::Repository;
use crate::artifacts::core::error::BitError;
use crate::artifacts::objects::object_type::ObjectType;
use anyhow::Context;
use std::io::Write;

impl Repository {
    pub fn hash_object(&self, file: &str, object_type: &str, write: bool) -> anyhow::Result<()> {
        let object_type = ObjectType::try_from(object_type)?;

        let path = self.cwd().join(file);
        if !path.is_file() {
            return Err(BitError::not_found(format!("path not found: {file}")));
        }
        let data =
            std::fs::read(&path).with_context(|| format!("Unable to read {}", path.display()))?;

        let object_id = if write {
            self.database().write(object_type, &data)?
        } else {
            self.database().hash(object_type, &data)?
        };

        writeln!(self.writer(), "{object_id}")?;

        Ok(())
    }
}
