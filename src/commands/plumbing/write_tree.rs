use crate::areas::index::Index;
use crate::areas::repository::Repository;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::TreeNode;
use std::io::Write;

impl Repository {
    pub fn write_tree(&self) -> anyhow::Result<()> {
        let index = self.load_index()?;
        let tree_oid = self.store_index_tree(&index)?;

        writeln!(self.writer(), "{tree_oid}")?;

        Ok(())
    }

    /// Store the tree of every staged entry, nested trees first
    pub(crate) fn store_index_tree(&self, index: &Index) -> anyhow::Result<ObjectId> {
        self.database().store_tree(&TreeNode::build(index.entries()))
    }
}
