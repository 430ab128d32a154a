#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

//! Multiplicative multiset hash over the prime field `2^3072 - 1103717`.
//!
//! A [`MuHash`] accumulator maintains a cryptographic digest of an unordered
//! multiset of byte strings. Elements can be added and removed in any order;
//! the finalized digest depends only on the multiset difference between
//! everything added and everything removed. This makes the accumulator
//! suitable for incrementally tracking a large, mutating set (such as an
//! unspent-transaction-output set) without rehashing it from scratch.
//!
//! The crate is layered bottom-up:
//!
//! | Layer | Module | Responsibility |
//! |-------|--------|----------------|
//! | L0 | [`field`] (limb helpers) | Primitive multi-word arithmetic on 2- and 3-limb accumulators. |
//! | L1 | [`field::Num3072`] | 3072-bit field element with multiply, square, inverse and division modulo the prime. |
//! | L2 | [`accumulator::MuHash`] | Numerator/denominator pair with add, remove, combine, serialize and finalize. |
//! | support | [`hash`] | 32-byte digest value type, BLAKE2b-256, and the byte-string to element expansion. |
//!
//! Every operation is synchronous and compute-bound; field elements and
//! accumulators are plain values with no heap allocation. Distinct
//! accumulators may be mutated from different threads, but a single
//! accumulator requires exclusive access while it is being modified.

pub mod accumulator;
pub mod field;
pub mod hash;

pub use accumulator::{
    DeserializeError, MuHash, SerializedMuHash, EMPTY_MUHASH_HASH, SERIALIZED_MUHASH_SIZE,
};
pub use field::{Num3072, ELEMENT_BYTE_SIZE};
pub use hash::{blake2b_256, Hash, HashError, HASH_SIZE};
