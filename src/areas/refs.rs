//! References (branches and HEAD)
//!
//! References are human-readable names pointing to commits. They can be:
//! - Direct: containing a commit SHA-1
//! - Symbolic: pointing to another reference (only `HEAD`, e.g. HEAD -> refs/heads/master)
//!
//! ## File Format
//!
//! References are stored as trimmed text files containing either:
//! - A 40-character SHA-1 hash (direct reference)
//! - `ref: <path>` for symbolic references

use crate::artifacts::branch::branch_name::{BranchName, SymRefName};
use crate::artifacts::core::error::BitError;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::{Component, Path};
use walkdir::WalkDir;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the control directory (typically `.git`)
    path: Box<Path>,
}

/// Parsed content of a ref file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymRefOrOid {
    /// Symbolic reference pointing to another ref
    SymRef(SymRefName),
    /// Direct object ID
    Oid(ObjectId),
}

impl SymRefOrOid {
    fn read(path: &Path) -> anyhow::Result<Option<SymRefOrOid>> {
        let Some(content) = read_trimmed(path)? else {
            return Ok(None);
        };

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(&content);
        if let Some(symref_match) = symref_match {
            Ok(Some(SymRefOrOid::SymRef(SymRefName::new(
                symref_match[1].trim().to_string(),
            ))))
        } else {
            Ok(Some(SymRefOrOid::Oid(parse_oid(path, content)?)))
        }
    }
}

/// Trimmed file content; `None` when the file is absent or blank
fn read_trimmed(path: &Path) -> anyhow::Result<Option<String>> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read ref file at {path:?}"))?;
    let content = content.trim();

    Ok((!content.is_empty()).then(|| content.to_string()))
}

fn parse_oid(path: &Path, content: String) -> anyhow::Result<ObjectId> {
    ObjectId::try_parse(content)
        .map_err(|_| BitError::corrupt(format!("ref file {path:?} does not hold an object id")))
}

impl Refs {
    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }

    /// What HEAD holds: a branch ref, a commit id, or nothing
    pub fn read_head_target(&self) -> anyhow::Result<Option<SymRefOrOid>> {
        SymRefOrOid::read(&self.head_path())
    }

    /// Commit HEAD points at, following the single symbolic hop
    pub fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        match self.read_head_target()? {
            Some(SymRefOrOid::SymRef(sym_ref)) => self.read_ref_path(sym_ref.as_ref_path()),
            Some(SymRefOrOid::Oid(oid)) => Ok(Some(oid)),
            None => Ok(None),
        }
    }

    /// Like [`Refs::read_head`], failing when there is no commit to point at
    pub fn resolve_head(&self) -> anyhow::Result<ObjectId> {
        self.read_head()?
            .ok_or_else(|| BitError::not_found("HEAD does not point to a commit"))
    }

    /// Branch HEAD is attached to; `None` when detached
    pub fn current_branch(&self) -> anyhow::Result<Option<String>> {
        match self.read_head_target()? {
            Some(SymRefOrOid::SymRef(sym_ref)) => Ok(Some(sym_ref.branch_name().to_string())),
            _ => Ok(None),
        }
    }

    pub fn is_current_branch(&self, branch_name: &BranchName) -> anyhow::Result<bool> {
        Ok(self.current_branch()?.as_deref() == Some(branch_name.as_ref()))
    }

    /// Read a ref by its path under the control directory, e.g. `refs/heads/main`
    pub fn read_ref_path(&self, ref_path: &str) -> anyhow::Result<Option<ObjectId>> {
        let relative = Path::new(ref_path);
        if !relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)))
        {
            return Err(BitError::invalid_argument(format!(
                "invalid ref path '{ref_path}'"
            )));
        }

        let path = self.path.join(relative);
        read_trimmed(&path)?
            .map(|content| parse_oid(&path, content))
            .transpose()
    }

    pub fn read_branch(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        self.read_ref_path(&branch_name.ref_path())
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.heads_path().join(branch_name.as_ref()).is_file()
    }

    /// Advance whatever HEAD designates: the attached branch, or HEAD itself
    pub fn update_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        match self.read_head_target()? {
            Some(SymRefOrOid::SymRef(sym_ref)) => {
                self.write_ref_file(&self.path.join(sym_ref.as_ref_path()), oid.as_ref())
            }
            Some(SymRefOrOid::Oid(_)) | None => self.detach_head(oid),
        }
    }

    pub fn attach_head(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        let target = SymRefName::for_branch(branch_name);
        self.write_ref_file(
            &self.head_path(),
            &format!("ref: {}", target.as_ref_path()),
        )
    }

    pub fn detach_head(&self, oid: &ObjectId) -> anyhow::Result<()> {
        self.write_ref_file(&self.head_path(), oid.as_ref())
    }

    pub fn create_branch(&self, name: &BranchName, source_oid: &ObjectId) -> anyhow::Result<()> {
        if self.branch_exists(name) {
            return Err(BitError::precondition_failed(format!(
                "branch '{name}' already exists"
            )));
        }

        self.write_ref_file(&self.heads_path().join(name.as_ref()), source_oid.as_ref())
    }

    /// Delete a branch that HEAD is not attached to, returning its last commit
    pub fn delete_branch(&self, name: &BranchName) -> anyhow::Result<ObjectId> {
        let branch_path = self.heads_path().join(name.as_ref());

        let Some(oid) = self.read_branch(name)? else {
            return Err(BitError::not_found(format!("branch '{name}' not found")));
        };
        if self.is_current_branch(name)? {
            return Err(BitError::precondition_failed(format!(
                "cannot delete branch '{name}' checked out at HEAD"
            )));
        }

        std::fs::remove_file(&branch_path)
            .with_context(|| format!("failed to delete branch file at {branch_path:?}"))?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;
        log::debug!("deleted branch {name} at {oid}");

        Ok(oid)
    }

    /// Branch names under `refs/heads`, sorted
    pub fn list_branches(&self) -> anyhow::Result<Vec<String>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                Some(
                    relative_path
                        .components()
                        .map(|component| component.as_os_str().to_string_lossy())
                        .collect::<Vec<_>>()
                        .join("/"),
                )
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn write_ref_file(&self, path: &Path, content: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!("failed to create parent directories for ref file at {path:?}")
        })?)?;

        std::fs::write(path, format!("{content}\n"))
            .with_context(|| format!("failed to write ref file at {path:?}"))?;
        log::debug!("updated {} -> {content}", path.display());

        Ok(())
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.heads_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent).with_context(|| {
                format!("failed to remove empty branch directory at {parent:?}")
            })?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}
