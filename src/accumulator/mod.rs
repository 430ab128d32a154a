//! The multiplicative multiset accumulator.
//!
//! [`MuHash`] tracks a multiset of byte strings as a pair of field
//! elements: a running product of everything added (the numerator) and of
//! everything removed (the denominator). Because multiplication in the
//! field is commutative and associative, the finalized digest depends only
//! on the multiset difference between additions and removals, never on the
//! order of operations.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::field::{Num3072, ELEMENT_BYTE_SIZE};
use crate::hash::{blake2b_256, data_to_element, Hash};

#[cfg(test)]
pub mod tests;

/// Byte length of a serialized accumulator.
pub const SERIALIZED_MUHASH_SIZE: usize = ELEMENT_BYTE_SIZE;

/// Digest of an empty accumulator, `MuHash::new().finalize()`.
pub const EMPTY_MUHASH_HASH: Hash = Hash::from_bytes([
    0x32, 0x9d, 0x0a, 0x9d, 0x0c, 0xe1, 0x81, 0x7a, 0xa8, 0x82, 0xf8, 0x09, 0x35, 0xf2, 0x6e,
    0x72, 0x4b, 0x0d, 0x6f, 0x7c, 0xe7, 0x9e, 0xeb, 0x3f, 0x5d, 0x20, 0x1a, 0x5a, 0xd9, 0x9e,
    0x9b, 0x1c,
]);

/// Error surfaced when a serialized accumulator cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeserializeError {
    /// The encoded numerator is at least the field modulus. Exactly
    /// `PRIME_DIFF` of the `2^3072` possible encodings are rejected.
    Overflow,
}

impl fmt::Display for DeserializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeserializeError::Overflow => write!(f, "overflow in the MuHash field"),
        }
    }
}

impl std::error::Error for DeserializeError {}

/// Storage representation of a normalized accumulator: the little-endian
/// bytes of the numerator.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct SerializedMuHash([u8; SERIALIZED_MUHASH_SIZE]);

impl SerializedMuHash {
    /// Returns the raw serialized bytes.
    pub const fn as_bytes(&self) -> &[u8; SERIALIZED_MUHASH_SIZE] {
        &self.0
    }
}

impl From<[u8; SERIALIZED_MUHASH_SIZE]> for SerializedMuHash {
    fn from(bytes: [u8; SERIALIZED_MUHASH_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for SerializedMuHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for SerializedMuHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for SerializedMuHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SerializedMuHash({self})")
    }
}

/// A rolling multiset hash supporting addition and removal of elements.
///
/// The accumulator is a plain value: [`Clone`] duplicates it, mutation
/// requires exclusive access, and distinct accumulators may be used from
/// different threads independently. Use [`MuHash::new`] for an empty set or
/// [`MuHash::deserialize`] to restore a stored one.
#[derive(Clone, PartialEq, Eq)]
pub struct MuHash {
    numerator: Num3072,
    denominator: Num3072,
}

impl MuHash {
    /// Returns an empty accumulator. Finalizing it yields
    /// [`EMPTY_MUHASH_HASH`], the same digest as a set whose elements were
    /// all removed again.
    pub fn new() -> Self {
        Self {
            numerator: Num3072::one(),
            denominator: Num3072::one(),
        }
    }

    /// Clears all accumulated data. Equivalent to a fresh [`MuHash::new`].
    pub fn reset(&mut self) {
        self.numerator.set_to_one();
        self.denominator.set_to_one();
    }

    /// Hashes `data` and adds the resulting element to the set. Arbitrary
    /// lengths are supported, subject to the BLAKE2b input limits.
    pub fn add(&mut self, data: &[u8]) {
        let element = data_to_element(data);
        self.add_element(&element);
    }

    pub(crate) fn add_element(&mut self, element: &Num3072) {
        self.numerator.mul(element);
    }

    /// Hashes `data` and removes the resulting element from the set.
    pub fn remove(&mut self, data: &[u8]) {
        let element = data_to_element(data);
        self.remove_element(&element);
    }

    pub(crate) fn remove_element(&mut self, element: &Num3072) {
        self.denominator.mul(element);
    }

    /// Merges `other` into `self`. Equivalent to replaying every addition
    /// and removal of `other` on `self`.
    pub fn combine(&mut self, other: &MuHash) {
        self.numerator.mul(&other.numerator);
        self.denominator.mul(&other.denominator);
    }

    /// Folds the denominator into the numerator, leaving the denominator at
    /// one. The finalized digest is unchanged; the operation is idempotent.
    pub fn normalize(&mut self) {
        self.numerator.divide(&self.denominator);
        self.denominator.set_to_one();
    }

    /// Returns the storage representation of the accumulator. This is the
    /// only supported way to persist a multiset; unlike [`MuHash::finalize`]
    /// the result can be deserialized again.
    pub fn serialize(&mut self) -> SerializedMuHash {
        self.normalize();
        SerializedMuHash(self.numerator.to_le_bytes())
    }

    /// Restores an accumulator previously written by [`MuHash::serialize`].
    /// Encodings of values at or above the field modulus are rejected.
    pub fn deserialize(serialized: &SerializedMuHash) -> Result<Self, DeserializeError> {
        let numerator = Num3072::from_le_bytes(&serialized.0);
        if numerator.is_overflow() {
            return Err(DeserializeError::Overflow);
        }
        Ok(Self {
            numerator,
            denominator: Num3072::one(),
        })
    }

    /// Returns the BLAKE2b-256 digest of the multiset. The accumulator is
    /// normalized in place; finalizing again without intervening mutation
    /// returns the same digest. A finalized digest cannot be turned back
    /// into an accumulator; use [`MuHash::serialize`] for storage.
    pub fn finalize(&mut self) -> Hash {
        let serialized = self.serialize();
        Hash::from_bytes(blake2b_256(serialized.as_bytes()))
    }
}

impl Default for MuHash {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MuHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.clone().serialize(), f)
    }
}

impl fmt::Debug for MuHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MuHash({self})")
    }
}
