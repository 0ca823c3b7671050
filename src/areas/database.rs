use crate::artifacts::core::error::BitError;
use crate::artifacts::database::database_entry::DatabaseEntry;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{
    Object, ObjectBox, RawObject, Unpackable, encode_object, hash_object,
};
use crate::artifacts::objects::object_id::{ObjectId, is_hex};
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::{Tree, TreeNode};
use crate::artifacts::objects::{MIN_PREFIX_LENGTH, OBJECT_ID_LENGTH};
use anyhow::Context;
use bytes::Bytes;
use std::collections::BTreeMap;
use std::io::{Cursor, Read, Write};
use std::path::Path;

/// Content-addressed object store under `.git/objects`
#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Digest of a payload without touching the disk
    pub fn hash(&self, object_type: ObjectType, payload: &[u8]) -> anyhow::Result<ObjectId> {
        hash_object(object_type, payload)
    }

    /// Store a payload of the given kind, skipping the write if it already exists
    pub fn write(&self, object_type: ObjectType, payload: &[u8]) -> anyhow::Result<ObjectId> {
        let oid = hash_object(object_type, payload)?;
        let object_path = self.path.join(oid.to_path());

        if object_path.exists() {
            log::trace!("object {oid} already stored");
            return Ok(oid);
        }

        std::fs::create_dir_all(
            object_path
                .parent()
                .context(format!("Invalid object path {}", object_path.display()))?,
        )
        .context(format!(
            "Unable to create object directory {}",
            object_path.display()
        ))?;

        self.write_object(&object_path, encode_object(object_type, payload))?;
        log::debug!("stored {object_type} {oid}");

        Ok(oid)
    }

    pub fn store(&self, object: &impl Object) -> anyhow::Result<ObjectId> {
        self.write(object.object_type(), &object.serialize()?)
    }

    /// Write every directory of `root` bottom-up and return the root tree id
    pub fn store_tree(&self, root: &TreeNode) -> anyhow::Result<ObjectId> {
        root.write_with(&mut |tree: &Tree| self.store(tree))
    }

    /// Resolve an abbreviated or full id to the single stored object it names
    pub fn resolve_prefix(&self, prefix: &str) -> anyhow::Result<ObjectId> {
        if prefix.len() < MIN_PREFIX_LENGTH || prefix.len() > OBJECT_ID_LENGTH || !is_hex(prefix) {
            return Err(BitError::invalid_argument(format!(
                "object id prefix must be {MIN_PREFIX_LENGTH} to {OBJECT_ID_LENGTH} hex characters, got '{prefix}'"
            )));
        }
        let prefix = prefix.to_ascii_lowercase();

        if prefix.len() == OBJECT_ID_LENGTH {
            let oid = ObjectId::try_parse(prefix)?;
            return if self.path.join(oid.to_path()).is_file() {
                Ok(oid)
            } else {
                Err(BitError::not_found(format!("object {oid} not found")))
            };
        }

        let mut matches = self.find_objects_by_prefix(&prefix)?;
        log::trace!("prefix {prefix} matched {} object(s)", matches.len());

        match matches.len() {
            0 => Err(BitError::not_found(format!("object {prefix} not found"))),
            1 => Ok(matches.remove(0)),
            _ => {
                matches.sort();
                Err(BitError::ambiguous(format!(
                    "object prefix {prefix} is ambiguous: {}",
                    matches
                        .iter()
                        .map(ObjectId::to_short_oid)
                        .collect::<Vec<_>>()
                        .join(", ")
                )))
            }
        }
    }

    /// Every stored object whose id starts with `prefix` (at least two characters)
    ///
    /// Only the fan-out directory named by the first two characters is scanned.
    pub fn find_objects_by_prefix(&self, prefix: &str) -> anyhow::Result<Vec<ObjectId>> {
        let (dir_name, file_prefix) = prefix.split_at(2);
        let dir_path = self.path.join(dir_name);

        if !dir_path.is_dir() {
            return Ok(Vec::new());
        }

        let mut matches = Vec::new();
        for entry in std::fs::read_dir(&dir_path)
            .context(format!("Unable to list objects in {}", dir_path.display()))?
        {
            let file_name = entry?.file_name();
            let file_name = file_name.to_string_lossy();

            if file_name.starts_with(file_prefix) {
                if let Ok(oid) = ObjectId::try_parse(format!("{dir_name}{file_name}")) {
                    matches.push(oid);
                }
            }
        }

        Ok(matches)
    }

    /// Resolve `id_or_prefix` and read the object it names
    pub fn read(&self, id_or_prefix: &str) -> anyhow::Result<RawObject> {
        let oid = self.resolve_prefix(id_or_prefix)?;
        self.load(&oid)
    }

    /// Read and verify the object stored under `oid`
    pub fn load(&self, oid: &ObjectId) -> anyhow::Result<RawObject> {
        let object_path = self.path.join(oid.to_path());
        if !object_path.is_file() {
            return Err(BitError::not_found(format!("object {oid} not found")));
        }

        let mut object_reader = Cursor::new(self.read_object(&object_path)?);
        let (object_type, declared_size) = ObjectType::parse_header(&mut object_reader)?;

        let mut payload = Vec::new();
        object_reader.read_to_end(&mut payload)?;
        if payload.len() != declared_size {
            return Err(BitError::corrupt(format!(
                "malformed object {oid}: expected size {declared_size}, got {}",
                payload.len()
            )));
        }

        Ok(RawObject {
            oid: oid.clone(),
            object_type,
            payload: Bytes::from(payload),
        })
    }

    pub fn parse_object(&self, oid: &ObjectId) -> anyhow::Result<ObjectBox> {
        let raw = self.load(oid)?;
        let reader = Cursor::new(raw.payload);

        match raw.object_type {
            ObjectType::Blob => Ok(ObjectBox::Blob(Box::new(Blob::deserialize(reader)?))),
            ObjectType::Tree => Ok(ObjectBox::Tree(Box::new(Tree::deserialize(reader)?))),
            ObjectType::Commit => Ok(ObjectBox::Commit(Box::new(Commit::deserialize(reader)?))),
        }
    }

    pub fn parse_object_as_blob(&self, oid: &ObjectId) -> anyhow::Result<Blob> {
        match self.parse_object(oid)? {
            ObjectBox::Blob(blob) => Ok(*blob),
            other => Err(Self::kind_mismatch(oid, other.object_type(), ObjectType::Blob)),
        }
    }

    pub fn parse_object_as_tree(&self, oid: &ObjectId) -> anyhow::Result<Tree> {
        match self.parse_object(oid)? {
            ObjectBox::Tree(tree) => Ok(*tree),
            other => Err(Self::kind_mismatch(oid, other.object_type(), ObjectType::Tree)),
        }
    }

    pub fn parse_object_as_commit(&self, oid: &ObjectId) -> anyhow::Result<Commit> {
        match self.parse_object(oid)? {
            ObjectBox::Commit(commit) => Ok(*commit),
            other => Err(Self::kind_mismatch(oid, other.object_type(), ObjectType::Commit)),
        }
    }

    /// Map every file reachable from `tree_oid` to its mode and blob id
    pub fn flatten(&self, tree_oid: &ObjectId) -> anyhow::Result<BTreeMap<String, DatabaseEntry>> {
        let mut flattened = BTreeMap::new();
        self.flatten_into(tree_oid, None, &mut flattened)?;

        Ok(flattened)
    }

    fn flatten_into(
        &self,
        tree_oid: &ObjectId,
        prefix: Option<&str>,
        flattened: &mut BTreeMap<String, DatabaseEntry>,
    ) -> anyhow::Result<()> {
        for (name, entry) in self.parse_object_as_tree(tree_oid)?.into_entries() {
            let path = match prefix {
                Some(prefix) => format!("{prefix}/{name}"),
                None => name,
            };

            if entry.is_tree() {
                self.flatten_into(&entry.oid, Some(&path), flattened)?;
            } else {
                flattened.insert(path, entry);
            }
        }

        Ok(())
    }

    fn kind_mismatch(oid: &ObjectId, actual: ObjectType, expected: ObjectType) -> anyhow::Error {
        BitError::invalid_argument(format!(
            "object {} is a {actual}, not a {expected}",
            oid.to_short_oid()
        ))
    }

    fn read_object(&self, object_path: &Path) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
            .map_err(|_| BitError::corrupt(format!("object {} is not valid zlib data", object_path.display())))
    }

    fn write_object(&self, object_path: &Path, object_content: Bytes) -> anyhow::Result<()> {
        let object_content = Self::compress(object_content)?;

        std::fs::write(object_path, &object_content).context(format!(
            "Unable to write object file {}",
            object_path.display()
        ))
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }
}
