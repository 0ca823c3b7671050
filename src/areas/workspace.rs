use crate::artifacts::core::error::BitError;
use crate::artifacts::index::entry_mode::EntryMode;
use crate::artifacts::index::index_entry::EntryMetadata;
use anyhow::Context;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Name of the control directory, never listed as workspace content
pub const CONTROL_DIR: &str = ".git";

/// Working tree rooted at the repository path
///
/// Paths handed in and out are POSIX-style and relative to the root.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn absolute(&self, file_path: &str) -> PathBuf {
        self.path.join(file_path)
    }

    /// Every file in the working tree, sorted, skipping the control directory
    pub fn list_files(&self) -> anyhow::Result<Vec<String>> {
        self.list_files_under("")
    }

    /// Files at or beneath `relative` (a file lists just itself)
    pub fn list_files_under(&self, relative: &str) -> anyhow::Result<Vec<String>> {
        let start = self.absolute(relative);

        let mut files = Vec::new();
        for entry in WalkDir::new(&start)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != CONTROL_DIR)
        {
            let entry = entry.with_context(|| format!("Unable to walk {}", start.display()))?;
            if entry.file_type().is_file() {
                files.push(self.relative(entry.path())?);
            }
        }
        files.sort();

        Ok(files)
    }

    /// POSIX path of `absolute` relative to the root
    pub fn relative(&self, absolute: &Path) -> anyhow::Result<String> {
        let relative = absolute.strip_prefix(&self.path).map_err(|_| {
            BitError::invalid_argument(format!(
                "path '{}' is outside repository at {}",
                absolute.display(),
                self.path.display()
            ))
        })?;

        Ok(relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"))
    }

    /// Turn a user-supplied path, relative to `cwd`, into a root-relative pathspec
    ///
    /// The path does not need to exist. The empty string names the root.
    pub fn pathspec(&self, cwd: &Path, raw: &str) -> anyhow::Result<String> {
        let candidate = cwd.join(raw);
        let absolute = std::fs::canonicalize(&candidate).unwrap_or_else(|_| normalize(&candidate));

        self.relative(&absolute)
    }

    pub fn exists(&self, file_path: &str) -> bool {
        self.absolute(file_path).exists()
    }

    pub fn is_file(&self, file_path: &str) -> bool {
        self.absolute(file_path).is_file()
    }

    pub fn read_file(&self, file_path: &str) -> anyhow::Result<Bytes> {
        let path = self.absolute(file_path);

        std::fs::read(&path)
            .map(Bytes::from)
            .with_context(|| format!("Unable to read file {}", path.display()))
    }

    pub fn stat_file(&self, file_path: &str) -> anyhow::Result<EntryMetadata> {
        let path = self.absolute(file_path);
        let metadata = std::fs::metadata(&path)
            .with_context(|| format!("Unable to stat file {}", path.display()))?;

        Ok(EntryMetadata::from(&metadata))
    }

    /// Write a file, creating parent directories, with permissions for `mode`
    pub fn write_file(&self, file_path: &str, data: &[u8], mode: EntryMode) -> anyhow::Result<()> {
        let path = self.absolute(file_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
        if path.is_dir() {
            std::fs::remove_dir_all(&path)
                .with_context(|| format!("Failed to remove existing directory: {file_path:?}"))?;
        }

        std::fs::write(&path, data)
            .with_context(|| format!("Failed to write to file: {file_path:?}"))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = if mode.is_executable() { 0o755 } else { 0o644 };
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(permissions))
                .with_context(|| format!("Failed to set permissions for file: {file_path:?}"))?;
        }

        Ok(())
    }

    /// Remove a file, then every directory it leaves empty up to the root
    pub fn remove_file(&self, file_path: &str) -> anyhow::Result<()> {
        let path = self.absolute(file_path);

        if path.is_file() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove file: {file_path:?}"))?;
        }
        self.prune_empty_parent_dirs(&path)
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.starts_with(&self.path)
            && parent.is_dir()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)
                .with_context(|| format!("Failed to remove empty directory {}", parent.display()))?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }
}

/// Lexically resolve `.` and `..` components
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}
