//! Primitive multi-word arithmetic helpers.
//!
//! Every routine models an operation on a small integer accumulator spread
//! across machine words: `[a,b]` denotes `a + b·2^W` and `[a,b,c]` denotes
//! `a + b·2^W + c·2^2W`, where `W` is the native word width. The wide
//! multiply is emulated through the double-width integer type, selected at
//! compile time from the target word size.

#[cfg(target_pointer_width = "64")]
pub(crate) type Limb = u64;
#[cfg(target_pointer_width = "64")]
pub(crate) type DoubleLimb = u128;

#[cfg(target_pointer_width = "32")]
pub(crate) type Limb = u32;
#[cfg(target_pointer_width = "32")]
pub(crate) type DoubleLimb = u64;

/// Bit width of one limb.
pub(crate) const LIMB_BITS: usize = Limb::BITS as usize;

/// Byte width of one limb.
pub(crate) const LIMB_BYTES: usize = LIMB_BITS / 8;

/// Number of limbs in a 3072-bit element.
pub(crate) const LIMBS: usize = 3072 / LIMB_BITS;

/// The field modulus is `2^3072 - PRIME_DIFF`.
pub(crate) const PRIME_DIFF: Limb = 1_103_717;

/// `[low,high] = a * b`.
#[inline]
pub(crate) fn mul_wide(a: Limb, b: Limb) -> (Limb, Limb) {
    let t = DoubleLimb::from(a) * DoubleLimb::from(b);
    (t as Limb, (t >> LIMB_BITS) as Limb)
}

/// `[low,high,carry] += a * b`.
#[inline]
pub(crate) fn muladd3(low: &mut Limb, high: &mut Limb, carry: &mut Limb, a: Limb, b: Limb) {
    let (tl, th) = mul_wide(a, b);
    let (sum, overflow) = low.overflowing_add(tl);
    *low = sum;
    let th = th + Limb::from(overflow);
    let (sum, overflow) = high.overflowing_add(th);
    *high = sum;
    *carry += Limb::from(overflow);
}

/// `[low,high,carry] += 2 * a * b`.
#[inline]
pub(crate) fn muldbladd3(low: &mut Limb, high: &mut Limb, carry: &mut Limb, a: Limb, b: Limb) {
    let (tl, th) = mul_wide(a, b);

    let (sum, overflow) = low.overflowing_add(tl);
    *low = sum;
    let tt = th + Limb::from(overflow);
    let (sum, overflow) = high.overflowing_add(tt);
    *high = sum;
    *carry += Limb::from(overflow);

    let (sum, overflow) = low.overflowing_add(tl);
    *low = sum;
    let th = th + Limb::from(overflow);
    let (sum, overflow) = high.overflowing_add(th);
    *high = sum;
    *carry += Limb::from(overflow);
}

/// `[c0,c1,c2] += n * [d0,d1,d2]`. `c2` must be zero on entry.
#[inline]
pub(crate) fn mulnadd3(
    c0: &mut Limb,
    c1: &mut Limb,
    c2: &mut Limb,
    d0: Limb,
    d1: Limb,
    d2: Limb,
    n: Limb,
) {
    let mut t = DoubleLimb::from(d0) * DoubleLimb::from(n) + DoubleLimb::from(*c0);
    *c0 = t as Limb;
    t >>= LIMB_BITS;

    t += DoubleLimb::from(d1) * DoubleLimb::from(n) + DoubleLimb::from(*c1);
    *c1 = t as Limb;
    t >>= LIMB_BITS;

    *c2 = (t as Limb).wrapping_add(d2.wrapping_mul(n));
}

/// `[low,high] *= n`.
#[inline]
pub(crate) fn muln2(low: &mut Limb, high: &mut Limb, n: Limb) {
    let mut t = DoubleLimb::from(*low) * DoubleLimb::from(n);
    *low = t as Limb;
    t >>= LIMB_BITS;
    t += DoubleLimb::from(*high) * DoubleLimb::from(n);
    *high = t as Limb;
}

/// Extracts the lowest limb of `[low,high,carry]` and shifts the
/// accumulator right by one limb.
#[inline]
pub(crate) fn extract3(low: &mut Limb, high: &mut Limb, carry: &mut Limb) -> Limb {
    let n = *low;
    *low = *high;
    *high = *carry;
    *carry = 0;
    n
}

/// `[low,high] += a`, then extracts the lowest limb and shifts right by one
/// limb. The addition may cascade a carry into a third implicit word, which
/// becomes the new `high`.
#[inline]
pub(crate) fn addnextract2(low: &mut Limb, high: &mut Limb, a: Limb) -> Limb {
    let mut carry: Limb = 0;

    let (sum, overflow) = low.overflowing_add(a);
    *low = sum;
    if overflow {
        *high = high.wrapping_add(1);
        if *high == 0 {
            carry = 1;
        }
    }

    let n = *low;
    *low = *high;
    *high = carry;
    n
}
