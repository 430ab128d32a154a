use core::fmt;

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};

/// Byte length of a finalized digest.
pub const HASH_SIZE: usize = 32;

/// 256-bit BLAKE2b instantiation used for element seeds and finalization.
type Blake2b256 = Blake2b<U32>;

/// Computes the unkeyed BLAKE2b-256 digest of the provided payload.
pub fn blake2b_256(data: &[u8]) -> [u8; HASH_SIZE] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Error surfaced when raw bytes do not form a valid digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HashError {
    /// The input slice length does not match [`HASH_SIZE`].
    InvalidLength {
        /// Length required for a digest.
        expected: usize,
        /// Length of the rejected input.
        actual: usize,
    },
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::InvalidLength { expected, actual } => {
                write!(f, "invalid hash length got {actual}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for HashError {}

/// Result of hashing some unknown sized data, typically BLAKE2b-256.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// Constructs a digest from raw bytes.
    pub const fn from_bytes(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    /// Returns the canonical byte representation of the digest.
    pub const fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Consumes the digest and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; HASH_SIZE] {
        self.0
    }

    /// Replaces the digest bytes, rejecting slices that are not exactly
    /// [`HASH_SIZE`] bytes long.
    pub fn set_bytes(&mut self, bytes: &[u8]) -> Result<(), HashError> {
        if bytes.len() != HASH_SIZE {
            return Err(HashError::InvalidLength {
                expected: HASH_SIZE,
                actual: bytes.len(),
            });
        }
        self.0.copy_from_slice(bytes);
        Ok(())
    }

    /// Returns a helper that formats the digest as lowercase hexadecimal.
    pub fn to_hex(&self) -> HexOutput {
        HexOutput(self.0)
    }
}

impl From<[u8; HASH_SIZE]> for Hash {
    fn from(bytes: [u8; HASH_SIZE]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Hash> for [u8; HASH_SIZE] {
    fn from(hash: Hash) -> Self {
        hash.into_bytes()
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_hex(), f)
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash(0x{})", self.to_hex())
    }
}

/// Hexadecimal representation of a digest.
#[derive(Clone, Copy)]
pub struct HexOutput([u8; HASH_SIZE]);

impl fmt::Display for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
