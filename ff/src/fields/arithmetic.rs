//! Montgomery multiplication and reduction over four 64-bit limbs.

use crate::biginteger::{arithmetic as fa, BigInteger256};

const LIMBS: usize = 4;

/// Returns true if `modulus` has (a) a zero most-significant bit and (b) at
/// least one zero bit in the rest of the modulus, in which case the
/// "no-carry" variant of CIOS multiplication is sound.
/// See <https://hackmd.io/@zkteam/modular_multiplication>.
#[inline(always)]
pub(crate) fn can_use_no_carry_mul(modulus: &BigInteger256) -> bool {
    let first_bit_set = modulus.0[LIMBS - 1] >> 63 != 0;
    let mut all_bits_set = modulus.0[LIMBS - 1] == !0 - (1 << 63);
    for i in 1..LIMBS {
        all_bits_set &= modulus.0[LIMBS - i - 1] == !0u64;
    }
    !(first_bit_set || all_bits_set)
}

/// Subtracts `modulus` once if `a` is not already smaller than it.
#[inline(always)]
pub(crate) fn reduce(a: &mut BigInteger256, modulus: &BigInteger256) {
    if *a >= *modulus {
        a.sub_noborrow(modulus);
    }
}

/// Computes `a * b * R^-1 mod modulus`, with `a, b < modulus`.
#[inline]
pub(crate) fn mul(
    a: &BigInteger256,
    b: &BigInteger256,
    modulus: &BigInteger256,
    inv: u64,
) -> BigInteger256 {
    if can_use_no_carry_mul(modulus) {
        let mut r = [0u64; LIMBS];
        let mut carry1 = 0u64;
        let mut carry2 = 0u64;

        for i in 0..LIMBS {
            r[0] = fa::mac(r[0], a.0[0], b.0[i], &mut carry1);
            let k = r[0].wrapping_mul(inv);
            fa::mac_discard(r[0], k, modulus.0[0], &mut carry2);
            for j in 1..LIMBS {
                r[j] = fa::mac_with_carry(r[j], a.0[j], b.0[i], &mut carry1);
                r[j - 1] = fa::mac_with_carry(r[j], k, modulus.0[j], &mut carry2);
            }
            r[LIMBS - 1] = carry1 + carry2;
        }
        let mut result = BigInteger256(r);
        reduce(&mut result, modulus);
        result
    } else {
        let mut r = [0u64; LIMBS * 2];

        for i in 0..LIMBS {
            let mut carry = 0;
            for j in 0..LIMBS {
                r[j + i] = fa::mac_with_carry(r[j + i], a.0[i], b.0[j], &mut carry);
            }
            r[LIMBS + i] = carry;
        }
        montgomery_reduce(&mut r, modulus, inv)
    }
}

/// Reduces a double-width product `r` by `R`, returning
/// `r * R^-1 mod modulus`.
#[inline]
pub(crate) fn montgomery_reduce(
    r: &mut [u64; LIMBS * 2],
    modulus: &BigInteger256,
    inv: u64,
) -> BigInteger256 {
    let mut carry2 = 0;
    for i in 0..LIMBS {
        let k = r[i].wrapping_mul(inv);
        let mut carry = 0;
        fa::mac_with_carry(r[i], k, modulus.0[0], &mut carry);
        for j in 1..LIMBS {
            r[j + i] = fa::mac_with_carry(r[j + i], k, modulus.0[j], &mut carry);
        }
        r[LIMBS + i] = fa::adc(r[LIMBS + i], carry2, &mut carry);
        carry2 = carry;
    }
    let mut result = BigInteger256([0u64; LIMBS]);
    result.0.copy_from_slice(&r[LIMBS..]);
    reduce(&mut result, modulus);
    result
}

/// Converts a Montgomery-form value `a * R` back to `a`.
#[inline]
pub(crate) fn from_montgomery(
    a: &BigInteger256,
    modulus: &BigInteger256,
    inv: u64,
) -> BigInteger256 {
    let mut r = a.0;
    for i in 0..LIMBS {
        let k = r[i].wrapping_mul(inv);
        let mut carry = 0;

        fa::mac_with_carry(r[i], k, modulus.0[0], &mut carry);
        for j in 1..LIMBS {
            r[(j + i) % LIMBS] =
                fa::mac_with_carry(r[(j + i) % LIMBS], k, modulus.0[j], &mut carry);
        }
        r[i % LIMBS] = carry;
    }
    BigInteger256(r)
}
