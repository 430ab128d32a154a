use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{MuHash, EMPTY_MUHASH_HASH};
use crate::field::Num3072;

fn element_from_byte(byte: u8) -> Vec<u8> {
    let mut data = vec![0u8; 32];
    data[0] = byte;
    data
}

#[test]
fn op_order_invariance_ok() {
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..2 {
        let mut table = [0u8; 4];
        for entry in table.iter_mut() {
            *entry = rng.gen_range(0..8u8);
        }

        let mut reference = None;
        for order in 0..4usize {
            let mut acc = MuHash::new();
            for i in 0..4usize {
                let t = table[i ^ order];
                if t & 4 != 0 {
                    acc.remove(&element_from_byte(t & 3));
                } else {
                    acc.add(&element_from_byte(t & 3));
                }
            }
            let digest = acc.finalize();
            match reference {
                None => reference = Some(digest),
                Some(expected) => assert_eq!(
                    digest, expected,
                    "finalize must not depend on operation order"
                ),
            }
        }
    }
}

#[test]
fn removing_normalized_numerator_cancels_ok() {
    let mut rng = StdRng::seed_from_u64(2);
    let x = element_from_byte(rng.gen_range(0..8u8));
    let y = element_from_byte(rng.gen_range(0..8u8));

    let mut yx = MuHash::new();
    yx.add(&y);
    yx.add(&x);
    yx.normalize();

    let mut z = MuHash::new();
    z.add(&x);
    z.add(&y);
    z.remove_element(&yx.numerator);

    assert_eq!(z.finalize(), EMPTY_MUHASH_HASH);
}

#[test]
fn precomputed_digest_ok() {
    let expected = "afd9eb8885b98062d6720cfb034886bc332b10251adc037d2a5fc4c17c11832f";

    let mut acc = MuHash::new();
    acc.add(&element_from_byte(0));
    acc.add(&element_from_byte(1));
    acc.remove(&element_from_byte(2));
    assert_eq!(acc.finalize().to_string(), expected);

    // Finalize is idempotent once the accumulator is normalized.
    assert_eq!(acc.finalize().to_string(), expected);
}

#[test]
fn reset_restores_empty_digest_ok() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut data = [0u8; 100];
    rng.fill(&mut data[..]);

    let mut acc = MuHash::new();
    acc.add(&data);
    assert_ne!(acc.finalize(), EMPTY_MUHASH_HASH);

    acc.reset();
    assert_eq!(acc.finalize(), EMPTY_MUHASH_HASH);
}

#[test]
fn zero_sentinel_serializes_to_zeros_ok() {
    // Multiplying by zero is the one deliberate way to park the numerator
    // at the sentinel value; it must survive a storage roundtrip.
    let zero = Num3072::from_le_bytes(&[0u8; crate::field::ELEMENT_BYTE_SIZE]);
    let mut zeroed = MuHash::new();
    zeroed.add_element(&zero);

    let serialized = zeroed.serialize();
    assert!(serialized.as_bytes().iter().all(|&b| b == 0));

    let mut deserialized = MuHash::deserialize(&serialized).expect("zeros are canonical");
    zeroed.normalize();
    deserialized.normalize();
    assert_eq!(zeroed.numerator, deserialized.numerator);
}
