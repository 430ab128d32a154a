//! Hashing primitives for the multiset accumulator.
//! Contains the 32-byte digest value type, the BLAKE2b-256 helper, and the
//! deterministic expansion of byte strings into field elements.

pub mod digest;
pub mod element;

pub use digest::{blake2b_256, Hash, HashError, HexOutput, HASH_SIZE};
pub use element::data_to_element;
