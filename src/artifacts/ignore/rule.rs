use anyhow::Context;
use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RuleFlags: u8 {
        /// `!pattern`: a match un-ignores the path
        const NEGATED = 1;
        /// `pattern/`: only directories (and everything beneath them) match
        const DIRECTORY_ONLY = 1 << 1;
        /// `/pattern`: matched from the repository root only
        const ANCHORED = 1 << 2;
        /// The pattern contains a `/` after stripping the markers above
        const HAS_SEPARATOR = 1 << 3;
    }
}

/// A single line of an ignore file
#[derive(Debug, Clone)]
pub struct IgnoreRule {
    pattern: String,
    flags: RuleFlags,
    regex: regex::Regex,
}

impl IgnoreRule {
    /// Parse one line; `None` for blank lines and comments
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim_end_matches(['\r', '\n']).trim_end();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut flags = RuleFlags::empty();
        let mut pattern = line;

        if let Some(rest) = pattern.strip_prefix('!') {
            flags |= RuleFlags::NEGATED;
            pattern = rest;
        } else if let Some(rest) = pattern.strip_prefix('\\') {
            // `\#` and `\!` escape the leading marker
            if rest.starts_with(['#', '!']) {
                pattern = rest;
            }
        }

        if let Some(rest) = pattern.strip_suffix('/') {
            flags |= RuleFlags::DIRECTORY_ONLY;
            pattern = rest;
        }
        if let Some(rest) = pattern.strip_prefix('/') {
            flags |= RuleFlags::ANCHORED;
            pattern = rest;
        }
        if pattern.contains('/') {
            flags |= RuleFlags::HAS_SEPARATOR;
        }

        if pattern.is_empty() {
            return Ok(None);
        }

        let translated = glob_to_regex(pattern);
        let regex = regex::Regex::new(&translated)
            .with_context(|| format!("invalid ignore pattern '{line}'"))?;

        Ok(Some(IgnoreRule {
            pattern: pattern.to_string(),
            flags,
            regex,
        }))
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> RuleFlags {
        self.flags
    }

    pub fn is_negated(&self) -> bool {
        self.flags.contains(RuleFlags::NEGATED)
    }

    /// Whether this rule applies to `path` (a `/`-separated, root-relative path)
    pub fn matches(&self, path: &str, is_dir: bool) -> bool {
        let components = path.split('/').filter(|c| !c.is_empty()).collect::<Vec<_>>();
        if components.is_empty() {
            return false;
        }

        // directories the path lives in, plus the path itself when it is one
        let dir_depth = if is_dir {
            components.len()
        } else {
            components.len() - 1
        };

        let rooted = self
            .flags
            .intersects(RuleFlags::ANCHORED | RuleFlags::HAS_SEPARATOR);

        if self.flags.contains(RuleFlags::DIRECTORY_ONLY) {
            (1..=dir_depth).any(|end| {
                if rooted {
                    self.matches_joined(&components[..end])
                } else {
                    (0..end).any(|start| self.matches_joined(&components[start..end]))
                }
            })
        } else if rooted {
            (1..=components.len()).any(|end| self.matches_joined(&components[..end]))
        } else {
            components.iter().any(|component| self.regex.is_match(component))
        }
    }

    fn matches_joined(&self, components: &[&str]) -> bool {
        self.regex.is_match(&components.join("/"))
    }
}

/// Translate a shell-style wildcard pattern to an anchored regular expression
///
/// `*` and `?` stay within one path segment, `[...]` is a character class
/// (`[!...]` negated) and `**` spans directory boundaries.
pub fn glob_to_regex(pattern: &str) -> String {
    let chars = pattern.chars().collect::<Vec<_>>();
    let mut regex = String::from("^");
    let mut i = 0;

    while i < chars.len() {
        match chars[i] {
            '*' if chars.get(i + 1) == Some(&'*') => {
                let at_segment_start = i == 0 || chars[i - 1] == '/';
                if at_segment_start && chars.get(i + 2) == Some(&'/') {
                    regex.push_str("(?:.*/)?");
                    i += 3;
                } else {
                    regex.push_str(".*");
                    i += 2;
                }
            }
            '*' => {
                regex.push_str("[^/]*");
                i += 1;
            }
            '?' => {
                regex.push_str("[^/]");
                i += 1;
            }
            '[' => {
                // `]` directly after `[` or `[!` is a member, not the end
                let mut j = i + 1;
                if chars.get(j) == Some(&'!') {
                    j += 1;
                }
                if chars.get(j) == Some(&']') {
                    j += 1;
                }
                let close = chars
                    .get(j..)
                    .and_then(|rest| rest.iter().position(|&c| c == ']'))
                    .map(|offset| j + offset);

                match close {
                    Some(end) => {
                        let mut class = chars[i + 1..end].iter().collect::<String>();
                        if let Some(rest) = class.strip_prefix('!') {
                            class = format!("^{rest}");
                        }
                        regex.push('[');
                        for c in class.chars() {
                            if matches!(c, '\\' | '[' | '&' | '~') {
                                regex.push('\\');
                            }
                            regex.push(c);
                        }
                        regex.push(']');
                        i = end + 1;
                    }
                    None => {
                        regex.push_str(&regex::escape("["));
                        i += 1;
                    }
                }
            }
            '\\' if i + 1 < chars.len() => {
                regex.push_str(&regex::escape(&chars[i + 1].to_string()));
                i += 2;
            }
            c => {
                regex.push_str(&regex::escape(&c.to_string()));
                i += 1;
            }
        }
    }

    regex.push('$');
    regex
}
