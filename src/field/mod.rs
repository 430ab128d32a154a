//! Fixed-width 3072-bit field arithmetic for the multiset hash.
//! Contains the limb-level carry helpers and the [`Num3072`] element type.

mod limbs;
pub mod num3072;

pub use num3072::{Num3072, ELEMENT_BIT_SIZE, ELEMENT_BYTE_SIZE};
