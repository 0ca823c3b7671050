//! Line diffs
//!
//! - `myers`: Myers' shortest edit script over two line sequences
//! - `hunk`: grouping of an edit script into unified-diff hunks with context
//!
//! Only content-level diffs are produced here; which paths to diff is decided
//! by the status sets.

pub mod hunk;
pub mod myers;

use crate::artifacts::diff::hunk::Hunk;
use crate::artifacts::diff::myers::MyersDiff;

/// Hunks turning `a` into `b`, both split on line endings
pub fn diff_lines<'t>(a: &'t str, b: &'t str) -> Vec<Hunk<&'t str>> {
    let a = a.lines().collect::<Vec<_>>();
    let b = b.lines().collect::<Vec<_>>();

    Hunk::build(&MyersDiff::new(&a, &b).diff())
}
