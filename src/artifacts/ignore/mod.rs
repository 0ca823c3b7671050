//! Ignore rules
//!
//! Rules come from the `.gitignore` file at the repository root, one pattern
//! per line. Blank lines and `#` comments are skipped. For a given path the
//! last matching rule decides: a plain rule ignores, a `!` rule un-ignores.

pub mod matcher;
pub mod rule;

/// Name of the rule file at the repository root
pub const IGNORE_FILE: &str = ".gitignore";
