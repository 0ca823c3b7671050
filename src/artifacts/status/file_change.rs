use colored::{ColoredString, Colorize};

/// Width of the `staged:` / `modified:` label column, colon included
const LABEL_WIDTH: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FileChange {
    /// Index differs from HEAD (including staged deletions)
    Staged,
    /// Working file content differs from the index
    Modified,
    /// Tracked in the index but missing from the working tree
    Deleted,
    /// Present in the working tree but not in the index
    Untracked,
}

impl FileChange {
    pub fn label(&self) -> &'static str {
        match self {
            FileChange::Staged => "staged",
            FileChange::Modified => "modified",
            FileChange::Deleted => "deleted",
            FileChange::Untracked => "untracked",
        }
    }

    /// Status line for `path`; untracked paths carry no label
    pub fn format_line(&self, path: &str) -> String {
        match self {
            FileChange::Untracked => format!("  {}", self.paint(path)),
            _ => {
                let label = format!("{}:", self.label());
                format!("  {}", self.paint(&format!("{label:<LABEL_WIDTH$} {path}")))
            }
        }
    }

    fn paint(&self, text: &str) -> ColoredString {
        match self {
            FileChange::Staged => text.green(),
            FileChange::Modified | FileChange::Deleted | FileChange::Untracked => text.red(),
        }
    }
}
