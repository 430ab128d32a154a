//! Deterministic expansion of a byte string into a field element.

use chacha20::cipher::{KeyIvInit, StreamCipher};
use chacha20::{ChaCha20, Key, Nonce};

use super::digest::blake2b_256;
use crate::field::{Num3072, ELEMENT_BYTE_SIZE};

/// ChaCha20 nonce used by the expansion. Every element keys its own
/// stream, so the nonce stays at zero.
const ZERO_NONCE: [u8; 12] = [0u8; 12];

/// Expands arbitrary data into a uniformly distributed [`Num3072`].
///
/// The data is hashed with BLAKE2b-256 and the digest keys a ChaCha20
/// stream (zero nonce, counter starting at zero) whose first 384 bytes are
/// read little-endian as the element. The raw value may exceed the field
/// modulus; the multiplication that consumes it performs the reduction.
/// Two distinct inputs mapping to the same element would be a BLAKE2b
/// collision.
pub fn data_to_element(data: &[u8]) -> Num3072 {
    let seed = blake2b_256(data);
    let key = Key::from(seed);
    let nonce = Nonce::from(ZERO_NONCE);
    let mut stream = ChaCha20::new(&key, &nonce);

    let mut element_bytes = [0u8; ELEMENT_BYTE_SIZE];
    stream.apply_keystream(&mut element_bytes);
    Num3072::from_le_bytes(&element_bytes)
}
