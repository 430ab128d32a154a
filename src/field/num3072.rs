//! The 3072-bit field element and its modular arithmetic.
//!
//! [`Num3072`] stores an integer in `[0, 2^3072)` as little-endian machine
//! words. Arithmetic is performed modulo the prime `p = 2^3072 - 1103717`
//! with a folded Solinas reduction: a 6144-bit product `H·2^3072 + L` is
//! congruent to `L + H·1103717`, so reduction is a multiply-accumulate by
//! the small prime offset rather than a general division.
//!
//! The representation is not canonicalized after every internal step.
//! Multiplication and squaring admit intermediate values in `[0, 2^3072)`
//! and restore the canonical range `[0, p)` before returning. Inputs to
//! [`Num3072::mul`] may be non-canonical; [`Num3072::inverse`] expects a
//! canonical operand and its callers reduce first.

use super::limbs::{
    addnextract2, extract3, mul_wide, muladd3, muldbladd3, muln2, mulnadd3, Limb, LIMBS,
    LIMB_BYTES, PRIME_DIFF,
};

/// Bit width of a field element.
pub const ELEMENT_BIT_SIZE: usize = 3072;

/// Byte width of a field element in its little-endian wire form.
pub const ELEMENT_BYTE_SIZE: usize = ELEMENT_BIT_SIZE / 8;

/// An element of the prime field `GF(2^3072 - 1103717)`.
///
/// Elements are plain 384-byte values: trivially copyable, no heap
/// allocation, no interior sharing. The limb layout is little-endian
/// (`limbs[0]` is least significant) and depends on the native word width;
/// the byte-oriented conversions are bit-identical across 32- and 64-bit
/// targets.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Num3072 {
    pub(crate) limbs: [Limb; LIMBS],
}

impl Num3072 {
    /// Returns the multiplicative identity.
    pub const fn one() -> Self {
        let mut limbs = [0; LIMBS];
        limbs[0] = 1;
        Self { limbs }
    }

    /// Resets the element to the multiplicative identity.
    pub fn set_to_one(&mut self) {
        self.limbs[0] = 1;
        for limb in &mut self.limbs[1..] {
            *limb = 0;
        }
    }

    /// Parses a little-endian byte string. No reduction is applied, so the
    /// stored value may lie in the non-canonical range `[p, 2^3072)`.
    pub fn from_le_bytes(bytes: &[u8; ELEMENT_BYTE_SIZE]) -> Self {
        let mut limbs = [0; LIMBS];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(LIMB_BYTES)) {
            let mut raw = [0u8; LIMB_BYTES];
            raw.copy_from_slice(chunk);
            *limb = Limb::from_le_bytes(raw);
        }
        Self { limbs }
    }

    /// Serializes the element as little-endian bytes.
    pub fn to_le_bytes(&self) -> [u8; ELEMENT_BYTE_SIZE] {
        let mut bytes = [0u8; ELEMENT_BYTE_SIZE];
        for (limb, chunk) in self.limbs.iter().zip(bytes.chunks_exact_mut(LIMB_BYTES)) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        bytes
    }

    /// Reports whether the stored value is at least the field modulus,
    /// i.e. lies in the non-canonical range `[p, 2^3072)`.
    pub fn is_overflow(&self) -> bool {
        if self.limbs[0] <= Limb::MAX - PRIME_DIFF {
            return false;
        }
        self.limbs[1..].iter().all(|&limb| limb == Limb::MAX)
    }

    /// Subtracts the modulus once by adding `PRIME_DIFF` modulo `2^3072`.
    /// Maps any value in `[p, 2^3072)` into `[0, PRIME_DIFF)`.
    pub fn full_reduce(&mut self) {
        let mut low = PRIME_DIFF;
        let mut high: Limb = 0;
        for limb in &mut self.limbs {
            *limb = addnextract2(&mut low, &mut high, *limb);
        }
    }

    /// Multiplies `self` by `rhs` modulo the field prime.
    ///
    /// Uses an interleaved schoolbook multiply: each high-half partial
    /// column is folded into the low accumulator through `PRIME_DIFF`
    /// before the matching low-half column is added, so the intermediate
    /// state never exceeds three limbs. A second reduction folds the
    /// remaining overflow back in, and up to two conditional full
    /// reductions restore the canonical range. Either operand may be
    /// non-canonical on entry.
    pub fn mul(&mut self, rhs: &Num3072) {
        let mut carry_low: Limb = 0;
        let mut carry_high: Limb = 0;
        let mut carry_highest: Limb = 0;
        let mut tmp: [Limb; LIMBS] = [0; LIMBS];

        // Compute limbs 0..N-2 of self*rhs into tmp, including one reduction.
        for j in 0..LIMBS - 1 {
            let (mut low, mut high) = mul_wide(self.limbs[1 + j], rhs.limbs[LIMBS - 1]);
            let mut carry: Limb = 0;
            for i in 2 + j..LIMBS {
                muladd3(&mut low, &mut high, &mut carry, self.limbs[i], rhs.limbs[LIMBS + j - i]);
            }
            mulnadd3(
                &mut carry_low,
                &mut carry_high,
                &mut carry_highest,
                low,
                high,
                carry,
                PRIME_DIFF,
            );
            for i in 0..=j {
                muladd3(
                    &mut carry_low,
                    &mut carry_high,
                    &mut carry_highest,
                    self.limbs[i],
                    rhs.limbs[j - i],
                );
            }
            tmp[j] = extract3(&mut carry_low, &mut carry_high, &mut carry_highest);
        }

        // Compute limb N-1 into tmp. No folding is needed at the top.
        debug_assert_eq!(carry_highest, 0);
        for i in 0..LIMBS {
            muladd3(
                &mut carry_low,
                &mut carry_high,
                &mut carry_highest,
                self.limbs[i],
                rhs.limbs[LIMBS - 1 - i],
            );
        }
        tmp[LIMBS - 1] = extract3(&mut carry_low, &mut carry_high, &mut carry_highest);

        // Second reduction: fold the overflow beyond 2^3072 back in.
        muln2(&mut carry_low, &mut carry_high, PRIME_DIFF);
        for j in 0..LIMBS {
            self.limbs[j] = addnextract2(&mut carry_low, &mut carry_high, tmp[j]);
        }

        debug_assert_eq!(carry_high, 0);
        debug_assert!(carry_low == 0 || carry_low == 1);

        // The first check catches a result in [p, 2^3072), the second a
        // result in [2^3072, 2^3072 + p). Both may trigger.
        if self.is_overflow() {
            self.full_reduce();
        }
        if carry_low > 0 {
            self.full_reduce();
        }
    }

    /// Squares `self` modulo the field prime.
    ///
    /// Same folding shape as [`Num3072::mul`], with symmetric cross-terms
    /// counted twice and the middle diagonal term keyed on the parity of
    /// the column index.
    pub fn square(&mut self) {
        let mut low: Limb = 0;
        let mut high: Limb = 0;
        let mut carry: Limb = 0;
        let mut tmp: [Limb; LIMBS] = [0; LIMBS];

        // Compute limbs 0..N-2 of self*self into tmp, including one reduction.
        for j in 0..LIMBS - 1 {
            let mut carry_low: Limb = 0;
            let mut carry_high: Limb = 0;
            let mut carry_highest: Limb = 0;

            for i in 0..(LIMBS - 1 - j) / 2 {
                muldbladd3(
                    &mut carry_low,
                    &mut carry_high,
                    &mut carry_highest,
                    self.limbs[i + j + 1],
                    self.limbs[LIMBS - 1 - i],
                );
            }
            if (j + 1) & 1 == 1 {
                muladd3(
                    &mut carry_low,
                    &mut carry_high,
                    &mut carry_highest,
                    self.limbs[(LIMBS - 1 - j) / 2 + j + 1],
                    self.limbs[LIMBS - 1 - (LIMBS - 1 - j) / 2],
                );
            }
            mulnadd3(&mut low, &mut high, &mut carry, carry_low, carry_high, carry_highest, PRIME_DIFF);

            for i in 0..(j + 1) / 2 {
                muldbladd3(&mut low, &mut high, &mut carry, self.limbs[i], self.limbs[j - i]);
            }
            if (j + 1) & 1 == 1 {
                muladd3(
                    &mut low,
                    &mut high,
                    &mut carry,
                    self.limbs[(j + 1) / 2],
                    self.limbs[j - (j + 1) / 2],
                );
            }
            tmp[j] = extract3(&mut low, &mut high, &mut carry);
        }

        debug_assert_eq!(carry, 0);
        for i in 0..LIMBS / 2 {
            muldbladd3(&mut low, &mut high, &mut carry, self.limbs[i], self.limbs[LIMBS - 1 - i]);
        }
        tmp[LIMBS - 1] = extract3(&mut low, &mut high, &mut carry);

        // Second reduction: fold the overflow beyond 2^3072 back in.
        muln2(&mut low, &mut high, PRIME_DIFF);
        for j in 0..LIMBS {
            self.limbs[j] = addnextract2(&mut low, &mut high, tmp[j]);
        }

        debug_assert_eq!(high, 0);
        debug_assert!(low == 0 || low == 1);

        if self.is_overflow() {
            self.full_reduce();
        }
        if low > 0 {
            self.full_reduce();
        }
    }

    /// `self = self^(2^squarings) * mul`.
    fn square_n_mul(&mut self, squarings: usize, mul: &Num3072) {
        for _ in 0..squarings {
            self.square();
        }
        self.mul(mul);
    }

    /// Computes the multiplicative inverse `self^(p-2)` by Fermat's little
    /// theorem, with repunit precomputation for fast exponentiation
    /// (Brumley and Järvinen, "Fast Point Decompression for Standard
    /// Elliptic Curves", 2008).
    ///
    /// The operand must be canonical; callers reduce first. Inverting zero
    /// yields zero, which no element derived from the byte-string expansion
    /// reaches in practice.
    pub fn inverse(&self) -> Num3072 {
        // powers[i] = self^(2^(2^i) - 1)
        let mut powers = [*self; 12];
        for i in 0..11 {
            powers[i + 1] = powers[i];
            for _ in 0..1usize << i {
                powers[i + 1].square();
            }
            let repunit = powers[i];
            powers[i + 1].mul(&repunit);
        }

        // The chain below encodes the binary expansion of p - 2 in terms of
        // the precomputed repunit exponents.
        let mut out = powers[11];
        out.square_n_mul(512, &powers[9]);
        out.square_n_mul(256, &powers[8]);
        out.square_n_mul(128, &powers[7]);
        out.square_n_mul(64, &powers[6]);
        out.square_n_mul(32, &powers[5]);
        out.square_n_mul(8, &powers[3]);
        out.square_n_mul(2, &powers[1]);
        out.square_n_mul(1, &powers[0]);
        out.square_n_mul(5, &powers[2]);
        out.square_n_mul(3, &powers[0]);
        out.square_n_mul(2, &powers[0]);
        out.square_n_mul(4, &powers[0]);
        out.square_n_mul(4, &powers[1]);
        out.square_n_mul(3, &powers[0]);
        out
    }

    /// Divides `self` by `rhs` modulo the field prime.
    ///
    /// Both operands are canonicalized before the inversion. Division by
    /// zero is undefined; it is not reachable through the accumulator API
    /// because expanded elements collide with zero only with negligible
    /// probability, so no guard is placed here.
    pub fn divide(&mut self, rhs: &Num3072) {
        if self.is_overflow() {
            self.full_reduce();
        }

        let inv = if rhs.is_overflow() {
            let mut reduced = *rhs;
            reduced.full_reduce();
            reduced.inverse()
        } else {
            rhs.inverse()
        };

        self.mul(&inv);
        if self.is_overflow() {
            self.full_reduce();
        }
    }
}

impl core::fmt::Debug for Num3072 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Num3072(0x")?;
        for limb in self.limbs.iter().rev() {
            write!(f, "{:0width$x}", limb, width = LIMB_BYTES * 2)?;
        }
        write!(f, ")")
    }
}
