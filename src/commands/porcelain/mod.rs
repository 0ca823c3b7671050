//! Porcelain commands (user-facing operations)
//!
//! Porcelain commands compose the object store, index, refs and status sets
//! into the everyday version control workflow.
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `add`: Stage files for commit
//! - `rm`: Remove tracked files from the index and working tree
//! - `restore`: Reset staged entries to HEAD, or working files to the index
//! - `status`: Show staged, unstaged and untracked changes
//! - `diff`: Show unstaged changes as unified diffs
//! - `commit`: Record the index as a new commit
//! - `log`: Show first-parent commit history
//! - `branch`: List, create or delete branches
//! - `checkout`: Switch branches or detach HEAD
//! - `reset`: Move HEAD, optionally resetting the index
//! - `remote`: Manage remote entries in the config

pub mod add;
pub mod branch;
pub mod checkout;
pub mod commit;
pub mod diff;
pub mod init;
pub mod log;
pub mod remote;
pub mod reset;
pub mod restore;
pub mod rm;
pub mod status;
