//! Repository configuration (`.git/config`)
//!
//! An INI-style file of `[section]` headers followed by `key = value` lines.
//! Only remotes are interpreted, as `[remote "<name>"]` sections with a `url`
//! key; every other section and key is carried through rewrites untouched.

use crate::artifacts::core::error::BitError;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

const SECTION_REGEX: &str = r"^\[\s*([^\]]+?)\s*\]$";
const REMOTE_SECTION_REGEX: &str = r#"^remote\s+"(.+)"$"#;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    entries: Vec<(String, String)>,
}

impl Section {
    fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(entry_key, _)| entry_key.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }
}

#[derive(Debug)]
pub struct Config {
    path: Box<Path>,
}

impl Config {
    pub fn new(path: Box<Path>) -> Self {
        Config { path }
    }

    /// Remote names mapped to their URLs, skipping remotes without one
    pub fn list_remotes(&self) -> anyhow::Result<BTreeMap<String, String>> {
        let remote_re = regex::Regex::new(REMOTE_SECTION_REGEX)?;

        Ok(self
            .load()?
            .iter()
            .filter_map(|section| {
                let name = remote_re.captures(&section.name)?[1].to_string();
                let url = section.get("url")?.trim().to_string();
                (!url.is_empty()).then_some((name, url))
            })
            .collect())
    }

    pub fn add_remote(&self, name: &str, url: &str) -> anyhow::Result<()> {
        let mut sections = self.load()?;
        let section_name = remote_section(name);

        if sections.iter().any(|section| section.name == section_name) {
            return Err(BitError::precondition_failed(format!(
                "remote '{name}' already exists"
            )));
        }

        sections.push(Section {
            name: section_name,
            entries: vec![("url".to_string(), url.to_string())],
        });
        self.store(&sections)?;
        log::debug!("added remote {name} -> {url}");

        Ok(())
    }

    pub fn remove_remote(&self, name: &str) -> anyhow::Result<()> {
        let mut sections = self.load()?;
        let section_name = remote_section(name);
        let before = sections.len();

        sections.retain(|section| section.name != section_name);
        if sections.len() == before {
            return Err(BitError::not_found(format!("remote '{name}' does not exist")));
        }

        self.store(&sections)
    }

    pub fn get_remote_url(&self, name: &str) -> anyhow::Result<String> {
        self.list_remotes()?
            .remove(name)
            .ok_or_else(|| BitError::not_found(format!("remote '{name}' does not exist")))
    }

    fn load(&self) -> anyhow::Result<Vec<Section>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Unable to read config file {}", self.path.display()))?;
        parse(&content)
    }

    fn store(&self, sections: &[Section]) -> anyhow::Result<()> {
        std::fs::write(&self.path, render(sections))
            .with_context(|| format!("Unable to write config file {}", self.path.display()))
    }
}

fn remote_section(name: &str) -> String {
    format!("remote \"{name}\"")
}

fn parse(content: &str) -> anyhow::Result<Vec<Section>> {
    let section_re = regex::Regex::new(SECTION_REGEX)?;
    let mut sections: Vec<Section> = Vec::new();

    for (number, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        if let Some(captures) = section_re.captures(line) {
            sections.push(Section {
                name: captures[1].to_string(),
                entries: Vec::new(),
            });
            continue;
        }

        let section = sections.last_mut().ok_or_else(|| {
            BitError::corrupt(format!("config line {} is outside any section", number + 1))
        })?;
        let (key, value) = line.split_once('=').unwrap_or((line, ""));
        section
            .entries
            .push((key.trim().to_string(), value.trim().to_string()));
    }

    Ok(sections)
}

fn render(sections: &[Section]) -> String {
    let mut content = String::new();

    for section in sections {
        content.push_str(&format!("[{}]\n", section.name));
        for (key, value) in &section.entries {
            content.push_str(&format!("\t{key} = {value}\n"));
        }
    }

    content
}
