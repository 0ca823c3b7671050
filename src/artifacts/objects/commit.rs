//! Commit object
//!
//! Commits represent snapshots of the repository at specific points in time.
//! They contain:
//! - A tree object ID (directory snapshot)
//! - An optional parent commit ID (for history)
//! - Author and committer information
//! - Commit message
//!
//! ## Format
//!
//! On disk:
//! ```text
//! commit <size>\0
//! tree <tree-sha>
//! parent <parent-sha>
//! author <name> <email> <timestamp> <timezone>
//! committer <name> <email> <timestamp> <timezone>
//!
//! <commit message>
//! ```

use crate::artifacts::core::error::BitError;
use crate::artifacts::objects::object::Unpackable;
use crate::artifacts::objects::object::{Object, Packable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{BufRead, Read};

const DEFAULT_AUTHOR_NAME: &str = "twig-user";
const DEFAULT_AUTHOR_EMAIL: &str = "twig@example.com";

/// Author or committer information
///
/// Contains name, email, and timestamp with timezone information.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Author {
    name: String,
    email: String,
    timestamp: chrono::DateTime<chrono::FixedOffset>,
}

impl Author {
    /// Create a new author stamped with the current local time
    pub fn new(name: String, email: String) -> Self {
        Author {
            name,
            email,
            timestamp: chrono::Local::now().fixed_offset(),
        }
    }

    pub fn new_with_timestamp(
        name: String,
        email: String,
        timestamp: chrono::DateTime<chrono::FixedOffset>,
    ) -> Self {
        Author {
            name,
            email,
            timestamp,
        }
    }

    /// `Name <email>`
    pub fn display_name(&self) -> String {
        format!("{} <{}>", self.name, self.email)
    }

    /// `Name <email> <unix-seconds> <+HHMM>`
    pub fn display(&self) -> String {
        format!(
            "{} {} {}",
            self.display_name(),
            self.timestamp.timestamp(),
            self.timestamp.format("%z")
        )
    }

    /// Load author information from environment variables
    ///
    /// Name and email come from `GIT_AUTHOR_*`, then `GIT_COMMITTER_*`, then
    /// fixed defaults. `GIT_AUTHOR_DATE` pins the timestamp when it parses as
    /// RFC 2822 or `%Y-%m-%d %H:%M:%S %z`.
    pub fn load_from_env() -> Self {
        let lookup = |primary: &str, fallback: &str, default: &str| {
            std::env::var(primary)
                .ok()
                .filter(|value| !value.is_empty())
                .or_else(|| std::env::var(fallback).ok().filter(|value| !value.is_empty()))
                .unwrap_or_else(|| default.to_string())
        };

        let name = lookup("GIT_AUTHOR_NAME", "GIT_COMMITTER_NAME", DEFAULT_AUTHOR_NAME);
        let email = lookup("GIT_AUTHOR_EMAIL", "GIT_COMMITTER_EMAIL", DEFAULT_AUTHOR_EMAIL);
        let timestamp = std::env::var("GIT_AUTHOR_DATE").ok().and_then(|date_str| {
            chrono::DateTime::parse_from_rfc2822(&date_str)
                .or_else(|_| chrono::DateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M:%S %z"))
                .ok()
        });

        match timestamp {
            Some(ts) => Author::new_with_timestamp(name, email, ts),
            None => Author::new(name, email),
        }
    }

    /// Timestamp in the form "Mon Jan 1 12:34:56 2024 +0000"
    pub fn readable_timestamp(&self) -> String {
        self.timestamp
            .format("%a %b %-d %H:%M:%S %Y %z")
            .to_string()
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.timestamp
    }
}

impl TryFrom<&str> for Author {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        // "name <email> timestamp timezone", split from the right
        let parts: Vec<&str> = value.rsplitn(3, ' ').collect();
        if parts.len() < 3 {
            return Err(BitError::corrupt(format!("invalid author line '{value}'")));
        }

        let timezone = parts[0];
        let seconds = parts[1]
            .parse::<i64>()
            .map_err(|_| BitError::corrupt(format!("invalid author timestamp '{}'", parts[1])))?;
        let name_email_part = parts[2];

        let (email_start, email_end) = name_email_part
            .find('<')
            .zip(name_email_part.rfind('>'))
            .filter(|(start, end)| start < end)
            .ok_or_else(|| BitError::corrupt(format!("invalid author identity '{name_email_part}'")))?;

        let name = name_email_part[..email_start].trim().to_string();
        let email = name_email_part[email_start + 1..email_end].to_string();

        let offset = chrono::DateTime::parse_from_str(
            &format!("1970-01-01 00:00:00 {timezone}"),
            "%Y-%m-%d %H:%M:%S %z",
        )
        .map_err(|_| BitError::corrupt(format!("invalid author timezone '{timezone}'")))?
        .offset()
        .to_owned();
        let timestamp = chrono::DateTime::from_timestamp(seconds, 0)
            .ok_or_else(|| BitError::corrupt(format!("invalid author timestamp '{seconds}'")))?
            .with_timezone(&offset);

        Ok(Author {
            name,
            email,
            timestamp,
        })
    }
}

/// Split a commit payload into its header map and message
///
/// Headers end at the first blank line; each header line is `key value`.
/// The message has its trailing newlines trimmed.
pub fn decode_payload(payload: &[u8]) -> (BTreeMap<String, String>, String) {
    let text = String::from_utf8_lossy(payload);
    let (header_text, message) = text.split_once("\n\n").unwrap_or((&text, ""));

    let headers = header_text
        .lines()
        .filter_map(|line| line.split_once(' '))
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();

    (headers, message.trim_end_matches('\n').to_string())
}

/// Commit object
///
/// Points at the tree of a snapshot, the commit it follows (if any), and
/// carries the authorship and message.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    parent: Option<ObjectId>,
    tree_oid: ObjectId,
    author: Author,
    committer: Author,
    message: String,
}

impl Commit {
    /// Create a commit whose committer is its author
    pub fn new(
        parent: Option<ObjectId>,
        tree_oid: ObjectId,
        author: Author,
        message: String,
    ) -> Self {
        Commit {
            parent,
            tree_oid,
            committer: author.clone(),
            author,
            message,
        }
    }

    /// First line of the message, for `log --oneline`
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn committer(&self) -> &Author {
        &self.committer
    }

    pub fn timestamp(&self) -> chrono::DateTime<chrono::FixedOffset> {
        self.author.timestamp()
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        Ok(Bytes::from(format!("{}\n", self.display())))
    }
}

impl Unpackable for Commit {
    fn deserialize(reader: impl BufRead) -> anyhow::Result<Self> {
        let mut reader = reader;
        let mut payload = Vec::new();
        reader.read_to_end(&mut payload)?;

        let (headers, message) = decode_payload(&payload);
        let header = |key: &str| {
            headers
                .get(key)
                .ok_or_else(|| BitError::corrupt(format!("commit is missing its '{key}' header")))
        };

        let tree_oid = ObjectId::try_parse(header("tree")?.clone())
            .map_err(|_| BitError::corrupt("commit has an invalid tree id"))?;
        let parent = headers
            .get("parent")
            .map(|parent| ObjectId::try_parse(parent.clone()))
            .transpose()
            .map_err(|_| BitError::corrupt("commit has an invalid parent id"))?;
        let author = Author::try_from(header("author")?.as_str())?;
        let committer = Author::try_from(header("committer")?.as_str())?;

        Ok(Commit {
            parent,
            tree_oid,
            author,
            committer,
            message,
        })
    }
}

impl Object for Commit {
    fn object_type(&self) -> ObjectType {
        ObjectType::Commit
    }

    fn display(&self) -> String {
        let mut lines = vec![format!("tree {}", self.tree_oid)];
        if let Some(parent) = &self.parent {
            lines.push(format!("parent {parent}"));
        }
        lines.push(format!("author {}", self.author.display()));
        lines.push(format!("committer {}", self.committer.display()));
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }
}
