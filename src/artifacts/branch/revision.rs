use crate::areas::refs::HEAD_REF_NAME;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::{ANCESTOR_REGEX, PARENT_REGEX, REF_ALIASES};
use crate::artifacts::core::error::BitError;
use crate::artifacts::objects::object_id::{ObjectId, is_hex};
use anyhow::Context;

/// A revision expression naming a commit.
///
/// Supported forms:
/// - `HEAD` (or its alias `@`)
/// - full ref paths: `refs/heads/main`
/// - branch names: `main`, `feature/login`
/// - full or abbreviated object ids (at least 4 hex characters)
/// - parent notation: `<revision>^`
/// - ancestor notation: `<revision>~<n>`, following first parents
///
/// Names are tried in that order, so a branch called `abcd` shadows any object
/// whose id starts with `abcd`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Revision {
    Name(String),
    Parent(Box<Revision>),
    Ancestor(Box<Revision>, usize),
}

impl Revision {
    pub fn try_parse(revision: &str) -> anyhow::Result<Revision> {
        let parent_regex = regex::Regex::new(PARENT_REGEX)
            .with_context(|| format!("invalid parent regex: {PARENT_REGEX}"))?;
        let ancestor_regex = regex::Regex::new(ANCESTOR_REGEX)
            .with_context(|| format!("invalid ancestor regex: {ANCESTOR_REGEX}"))?;

        if let Some(caps) = parent_regex.captures(revision) {
            let base_revision = Self::try_parse(&caps[1])?;

            Ok(Revision::Parent(Box::new(base_revision)))
        } else if let Some(caps) = ancestor_regex.captures(revision) {
            let generations: usize = caps[2].parse().map_err(|_| {
                BitError::invalid_argument(format!("invalid ancestor count in '{revision}'"))
            })?;
            let base_revision = Self::try_parse(&caps[1])?;

            Ok(Revision::Ancestor(Box::new(base_revision), generations))
        } else {
            let name = REF_ALIASES.get(revision).copied().unwrap_or(revision);
            if name.is_empty()
                || name
                    .chars()
                    .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '^' | '~' | ':'))
            {
                return Err(BitError::invalid_argument(format!(
                    "invalid revision '{revision}'"
                )));
            }

            Ok(Revision::Name(name.to_string()))
        }
    }

    /// Object id the expression designates
    pub fn resolve(&self, repository: &Repository) -> anyhow::Result<ObjectId> {
        match self {
            Revision::Name(name) => Self::resolve_name(name, repository),
            Revision::Parent(base_revision) => {
                Self::resolve_commit_parent(&base_revision.resolve(repository)?, repository)
            }
            Revision::Ancestor(base_revision, generations) => {
                let mut oid = base_revision.resolve(repository)?;
                for _ in 0..*generations {
                    oid = Self::resolve_commit_parent(&oid, repository)?;
                }

                Ok(oid)
            }
        }
    }

    /// Like [`Revision::resolve`], additionally requiring a commit
    pub fn resolve_commit(&self, repository: &Repository) -> anyhow::Result<ObjectId> {
        let oid = self.resolve(repository)?;
        repository.database().parse_object_as_commit(&oid)?;

        Ok(oid)
    }

    fn resolve_name(name: &str, repository: &Repository) -> anyhow::Result<ObjectId> {
        if name == HEAD_REF_NAME {
            return repository.refs().resolve_head();
        }

        if name.starts_with("refs/") {
            return repository
                .refs()
                .read_ref_path(name)?
                .ok_or_else(|| BitError::not_found(format!("ref '{name}' not found")));
        }

        if let Ok(branch_name) = BranchName::try_parse(name.to_string())
            && let Some(oid) = repository.refs().read_branch(&branch_name)?
        {
            return Ok(oid);
        }

        if is_hex(name) {
            return repository.database().resolve_prefix(name);
        }

        Err(BitError::not_found(format!("unknown revision '{name}'")))
    }

    fn resolve_commit_parent(oid: &ObjectId, repository: &Repository) -> anyhow::Result<ObjectId> {
        let commit = repository.database().parse_object_as_commit(oid)?;

        commit.parent().cloned().ok_or_else(|| {
            BitError::not_found(format!("commit {} has no parent", oid.to_short_oid()))
        })
    }
}
