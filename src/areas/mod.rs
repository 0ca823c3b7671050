//! Stateful on-disk areas of a repository
//!
//! - `database`: object store for blobs, trees and commits
//! - `index`: staging area between the working tree and the next commit
//! - `refs`: branch refs and HEAD
//! - `workspace`: working tree file system operations
//! - `config`: remote settings in `.git/config`
//! - `repository`: the resolved repository handle tying the areas together

pub mod config;
pub mod database;
pub mod index;
pub mod refs;
pub mod repository;
pub mod workspace;
