use crate::artifacts::ignore::rule::IgnoreRule;
use anyhow::Context;
use std::path::Path;

/// Ordered ignore rules from one rule file
#[derive(Debug, Clone, Default)]
pub struct IgnoreMatcher {
    rules: Vec<IgnoreRule>,
}

impl IgnoreMatcher {
    pub fn from_lines<'l>(lines: impl IntoIterator<Item = &'l str>) -> anyhow::Result<Self> {
        let rules = lines
            .into_iter()
            .filter_map(|line| IgnoreRule::parse(line).transpose())
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(IgnoreMatcher { rules })
    }

    /// Load rules from `path`; a missing file yields no rules
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }

        let bytes = std::fs::read(path)
            .with_context(|| format!("Unable to read ignore file {}", path.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        let matcher = Self::from_lines(content.lines())?;
        log::debug!("loaded {} ignore rule(s) from {}", matcher.rules.len(), path.display());

        Ok(matcher)
    }

    pub fn rules(&self) -> &[IgnoreRule] {
        &self.rules
    }

    /// Whether the last rule matching `path` ignores it
    pub fn is_ignored(&self, path: &str, is_dir: bool) -> bool {
        let path = path.trim_matches('/');
        if path.is_empty() {
            return false;
        }

        self.rules
            .iter()
            .rev()
            .find(|rule| rule.matches(path, is_dir))
            .is_some_and(|rule| !rule.is_negated())
    }
}
