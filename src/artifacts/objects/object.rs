use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_type::ObjectType;
use crate::artifacts::objects::tree::Tree;
use anyhow::Result;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::BufRead;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

/// A storable object: `serialize` yields the payload, without the typed header
pub trait Object: Packable {
    fn object_type(&self) -> ObjectType;

    fn display(&self) -> String;

    fn encode(&self) -> Result<Bytes> {
        Ok(encode_object(self.object_type(), &self.serialize()?))
    }

    fn object_id(&self) -> Result<ObjectId> {
        hash_object(self.object_type(), &self.serialize()?)
    }
}

/// Build the typed encoding `<kind> <length>\0<payload>`
pub fn encode_object(object_type: ObjectType, payload: &[u8]) -> Bytes {
    let mut encoded = format!("{} {}\0", object_type.as_str(), payload.len()).into_bytes();
    encoded.extend_from_slice(payload);

    Bytes::from(encoded)
}

/// Digest of the typed encoding; never trusted from input, always recomputed
pub fn hash_object(object_type: ObjectType, payload: &[u8]) -> Result<ObjectId> {
    let mut hasher = Sha1::new();
    hasher.update(encode_object(object_type, payload));

    ObjectId::try_parse(format!("{:x}", hasher.finalize()))
}

/// An object read back from the store, before kind-specific decoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObject {
    pub oid: ObjectId,
    pub object_type: ObjectType,
    pub payload: Bytes,
}

pub enum ObjectBox {
    Blob(Box<Blob>),
    Tree(Box<Tree>),
    Commit(Box<Commit>),
}

impl ObjectBox {
    pub fn object_type(&self) -> ObjectType {
        match self {
            ObjectBox::Blob(_) => ObjectType::Blob,
            ObjectBox::Tree(_) => ObjectType::Tree,
            ObjectBox::Commit(_) => ObjectType::Commit,
        }
    }
}
