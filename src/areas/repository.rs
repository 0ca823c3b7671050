use crate::areas::config::Config;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::{CONTROL_DIR, Workspace};
use crate::artifacts::core::error::BitError;
use crate::artifacts::ignore::IGNORE_FILE;
use crate::artifacts::ignore::matcher::IgnoreMatcher;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::status::status_info::{FileSet, HeadTree, StatusInfo};
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::{Path, PathBuf};

/// A resolved repository: the working tree root plus its control directory areas
///
/// Every command runs against one handle; nothing is looked up from process
/// state after the handle is built.
pub struct Repository {
    path: Box<Path>,
    /// Directory user-supplied paths are relative to
    cwd: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: RefCell<Index>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    config: Config,
}

impl Repository {
    /// Closest directory at or above `start` holding a control directory
    pub fn discover(start: &Path) -> anyhow::Result<PathBuf> {
        let start = start
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", start.display()))?;

        start
            .ancestors()
            .find(|candidate| candidate.join(CONTROL_DIR).is_dir())
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                BitError::not_found(format!(
                    "not a repository (or any of the parent directories): {}",
                    start.display()
                ))
            })
    }

    /// Handle rooted at `path`, which is created when missing
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path)
                .with_context(|| format!("Unable to create {}", path.display()))?;
        }
        let path = path
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", path.display()))?;
        let control_path = path.join(CONTROL_DIR);

        Ok(Repository {
            cwd: path.clone().into_boxed_path(),
            writer: RefCell::new(writer),
            index: RefCell::new(Index::new(control_path.join("index").into_boxed_path())),
            database: Database::new(control_path.join("objects").into_boxed_path()),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            refs: Refs::new(control_path.clone().into_boxed_path()),
            config: Config::new(control_path.join("config").into_boxed_path()),
            path: path.into_boxed_path(),
        })
    }

    /// Discover the repository enclosing `cwd` and resolve pathspecs against `cwd`
    pub fn open(cwd: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let root = Self::discover(cwd)?;
        let mut repository = Self::new(&root, writer)?;
        repository.cwd = cwd
            .canonicalize()
            .with_context(|| format!("Unable to resolve {}", cwd.display()))?
            .into_boxed_path();

        Ok(repository)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn control_path(&self) -> PathBuf {
        self.path.join(CONTROL_DIR)
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    /// The index, reloaded from disk
    pub fn load_index(&'_ self) -> anyhow::Result<RefMut<'_, Index>> {
        let mut index = self.index.borrow_mut();
        index.rehydrate()?;

        Ok(index)
    }

    /// The index without reading it from disk, for callers that replace every entry
    pub fn index_for_rewrite(&'_ self) -> RefMut<'_, Index> {
        self.index.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Root-relative pathspecs for user-supplied paths
    pub fn pathspecs(&self, raw_paths: &[String]) -> anyhow::Result<Vec<String>> {
        raw_paths
            .iter()
            .map(|raw| self.workspace.pathspec(&self.cwd, raw))
            .collect()
    }

    /// Store a working file as a blob and capture its stat data
    ///
    /// The only path by which working tree content enters the object store.
    pub fn build_entry(&self, path: &str) -> anyhow::Result<IndexEntry> {
        let data = self.workspace.read_file(path)?;
        let stat = self.workspace.stat_file(path)?;
        let oid = self.database.write(ObjectType::Blob, &data)?;

        Ok(IndexEntry::new(path.to_string(), oid, stat))
    }

    pub fn ignore_matcher(&self) -> anyhow::Result<IgnoreMatcher> {
        IgnoreMatcher::load(&self.workspace.absolute(IGNORE_FILE))
    }

    /// Flattened tree of the HEAD commit; empty before the first commit
    pub fn head_tree(&self) -> anyhow::Result<HeadTree> {
        match self.refs.read_head()? {
            Some(head_oid) => {
                let commit = self.database.parse_object_as_commit(&head_oid)?;
                self.database.flatten(commit.tree_oid())
            }
            None => Ok(HeadTree::new()),
        }
    }

    /// Working tree files, minus ignored ones that are neither staged nor committed
    pub fn scan_worktree(&self, index: &Index, head_tree: &HeadTree) -> anyhow::Result<FileSet> {
        let matcher = self.ignore_matcher()?;

        Ok(self
            .workspace
            .list_files()?
            .into_iter()
            .filter(|path| {
                index.is_tracked(path)
                    || head_tree.contains_key(path)
                    || !matcher.is_ignored(path, false)
            })
            .collect())
    }

    pub fn status_info(&self, index: &Index) -> anyhow::Result<StatusInfo> {
        let head_tree = self.head_tree()?;
        let worktree = self.scan_worktree(index, &head_tree)?;

        StatusInfo::compute(&head_tree, index.entries(), &worktree, |path| {
            self.database
                .hash(ObjectType::Blob, &self.workspace.read_file(path)?)
        })
    }
}
