use crate::artifacts::core::error::BitError;
use crate::artifacts::index::CHECKSUM_SIZE;
use sha1::{Digest, Sha1};
use std::io::Write;

/// Writer that hashes everything passing through it
///
/// The index ends with the SHA-1 of every preceding byte; `write_checksum`
/// appends it and hands back the underlying stream.
#[derive(Debug)]
pub struct Checksum<W> {
    stream: W,
    digest: Sha1,
}

impl<W: Write> Checksum<W> {
    pub fn new(stream: W) -> Self {
        Checksum {
            stream,
            digest: Sha1::new(),
        }
    }

    pub fn write(&mut self, data: &[u8]) -> anyhow::Result<()> {
        self.stream.write_all(data)?;
        self.digest.update(data);
        Ok(())
    }

    pub fn write_checksum(mut self) -> anyhow::Result<W> {
        let checksum = self.digest.finalize();
        self.stream.write_all(checksum.as_slice())?;

        Ok(self.stream)
    }
}

/// Check the trailing checksum of `data` and return the bytes it covers
pub fn verify_trailer(data: &[u8]) -> anyhow::Result<&[u8]> {
    if data.len() < CHECKSUM_SIZE {
        return Err(BitError::corrupt("index file is too short"));
    }

    let (body, expected) = data.split_at(data.len() - CHECKSUM_SIZE);
    let actual = Sha1::digest(body);
    if actual.as_slice() != expected {
        return Err(BitError::corrupt("index checksum does not match its contents"));
    }

    Ok(body)
}
