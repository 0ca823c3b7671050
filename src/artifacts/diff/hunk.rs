use crate::artifacts::diff::myers::Edit;
use std::fmt::Display;

/// Unchanged lines kept around each change
pub const CONTEXT: usize = 3;

/// A contiguous slice of an edit script plus its position in both inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    /// Lines of `a` preceding the hunk
    a_offset: usize,
    /// Lines of `b` preceding the hunk
    b_offset: usize,
    edits: Vec<Edit<T>>,
}

impl<T: Clone> Hunk<T> {
    /// Group changes whose separating run of unchanged lines is at most twice
    /// the context width; everything else becomes a separate hunk
    pub fn build(edits: &[Edit<T>]) -> Vec<Self> {
        let mut hunks = Vec::new();
        let mut offset = 0;

        loop {
            while offset < edits.len() && edits[offset].is_equal() {
                offset += 1;
            }
            if offset >= edits.len() {
                return hunks;
            }

            let start = offset.saturating_sub(CONTEXT);
            let mut last_change = offset;
            let mut cursor = offset + 1;

            while cursor < edits.len() {
                if !edits[cursor].is_equal() {
                    last_change = cursor;
                } else if cursor - last_change > 2 * CONTEXT {
                    break;
                }
                cursor += 1;
            }

            let end = edits.len().min(last_change + 1 + CONTEXT);
            let preceding = &edits[..start];

            hunks.push(Hunk {
                a_offset: preceding.iter().filter(|edit| edit.in_a()).count(),
                b_offset: preceding.iter().filter(|edit| edit.in_b()).count(),
                edits: edits[start..end].to_vec(),
            });

            offset = end;
        }
    }
}

impl<T> Hunk<T> {
    pub fn a_size(&self) -> usize {
        self.edits.iter().filter(|edit| edit.in_a()).count()
    }

    pub fn b_size(&self) -> usize {
        self.edits.iter().filter(|edit| edit.in_b()).count()
    }

    pub fn edits(&self) -> &[Edit<T>] {
        &self.edits
    }

    /// `@@ -a +b @@` header; a length of one is implied, an empty side points
    /// at the line before the hunk
    pub fn header(&self) -> String {
        format!(
            "@@ -{} +{} @@",
            format_range(self.a_offset, self.a_size()),
            format_range(self.b_offset, self.b_size())
        )
    }
}

impl<T: Display> Display for Hunk<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.header())?;
        for edit in &self.edits {
            writeln!(f, "{edit}")?;
        }

        Ok(())
    }
}

fn format_range(offset: usize, size: usize) -> String {
    match size {
        0 => format!("{offset},0"),
        1 => format!("{}", offset + 1),
        _ => format!("{},{size}", offset + 1),
    }
}
