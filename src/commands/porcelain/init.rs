use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::core::error::BitError;
use anyhow::Context;
use std::fs;
use std::io::Write;

const DEFAULT_BRANCH: &str = "master";

impl Repository {
    pub fn init(&self) -> anyhow::Result<()> {
        if self.control_path().exists() {
            return Err(BitError::precondition_failed(format!(
                "repository already exists at {}",
                self.control_path().display()
            )));
        }

        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create .git/objects directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create .git/refs/heads directory")?;

        self.refs()
            .attach_head(&BranchName::try_parse(DEFAULT_BRANCH.to_string())?)
            .context("Failed to create initial HEAD reference")?;

        writeln!(
            self.writer(),
            "initialized empty repository: {}",
            self.path().display()
        )?;

        Ok(())
    }
}
