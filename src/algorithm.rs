use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use md5::{Digest, Md5};
use sha1::Sha1;
use sha2::{Sha256, Sha384, Sha512};

use crate::error::VerifyError;

/// Read buffer size for streaming digest computation
const CHUNK_SIZE: usize = 64 * 1024;

/// Hash algorithms recognized in checksum manifests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// Infer the algorithm from the character length of a recorded hex digest.
    /// Returns `None` when the length matches no known algorithm.
    pub fn from_hex_len(len: usize) -> Option<Self> {
        match len {
            32 => Some(Algorithm::Md5),
            40 => Some(Algorithm::Sha1),
            64 => Some(Algorithm::Sha256),
            96 => Some(Algorithm::Sha384),
            128 => Some(Algorithm::Sha512),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Md5 => "MD5",
            Algorithm::Sha1 => "SHA1",
            Algorithm::Sha256 => "SHA256",
            Algorithm::Sha384 => "SHA384",
            Algorithm::Sha512 => "SHA512",
        }
    }

    /// Number of hex characters in a digest produced by this algorithm.
    pub fn hex_len(&self) -> usize {
        match self {
            Algorithm::Md5 => 32,
            Algorithm::Sha1 => 40,
            Algorithm::Sha256 => 64,
            Algorithm::Sha384 => 96,
            Algorithm::Sha512 => 128,
        }
    }

    /// Compute the lowercase hex digest of a file's bytes.
    pub fn hash_file<P: AsRef<Path>>(&self, path: P) -> Result<String, VerifyError> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        match self {
            Algorithm::Md5 => hash_to_hex::<Md5, _>(&mut reader),
            Algorithm::Sha1 => hash_to_hex::<Sha1, _>(&mut reader),
            Algorithm::Sha256 => hash_to_hex::<Sha256, _>(&mut reader),
            Algorithm::Sha384 => hash_to_hex::<Sha384, _>(&mut reader),
            Algorithm::Sha512 => hash_to_hex::<Sha512, _>(&mut reader),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn hash_to_hex<D: Digest, R: Read>(reader: &mut R) -> Result<String, VerifyError> {
    let mut hasher = D::new();
    let mut buffer = vec![0u8; CHUNK_SIZE];
    loop {
        let n = reader.read(&mut buffer)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}
