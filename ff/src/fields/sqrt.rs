use crate::fields::{Field, LegendreSymbol, SquareRootField};

/// Strategy used by a prime field to extract square roots.
///
/// Write `M - 1 = 2^S * T` with `T` odd, and let `g` be a generator of the
/// subgroup of order `2^S`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SqrtPrecomputation<F: 'static> {
    /// Generic Tonelli–Shanks driven by the field's 2-adic root of unity.
    TonelliShanks,
    /// One exponentiation by `(T - 1) / 2` followed by a dyadic discrete
    /// logarithm in the order-`2^S` subgroup.
    ///
    /// `inverse_root_powers[i]` must hold `g^(-2^i)` for `i` in `0..S`.
    DyadicTable {
        /// Powers `g^(-2^i)`.
        inverse_root_powers: &'static [F],
    },
}

/// Tonelli–Shanks with `root` a generator of the 2-Sylow subgroup.
///
/// See <https://eprint.iacr.org/2012/685.pdf> (page 12, algorithm 5).
pub(crate) fn tonelli_shanks<F: SquareRootField>(
    element: &F,
    root: F,
    two_adicity: u32,
    trace_minus_one_div_two: &[u64],
) -> Option<F> {
    match element.legendre() {
        LegendreSymbol::Zero | LegendreSymbol::QuadraticNonResidue => None,
        LegendreSymbol::QuadraticResidue => {
            let mut z = root;
            let mut w = element.pow(trace_minus_one_div_two);
            let mut x = w * element;
            let mut b = x * &w;

            let mut v = two_adicity as usize;

            while !b.is_one() {
                let mut k = 0usize;

                let mut b2k = b;
                while !b2k.is_one() {
                    // invariant: b2k = b^(2^k) after entering this loop
                    b2k.square_in_place();
                    k += 1;
                    if k == v {
                        return None;
                    }
                }

                let j = v - k - 1;
                w = z;
                for _ in 0..j {
                    w.square_in_place();
                }

                z = w.square();
                b *= &z;
                x *= &w;
                v = k;
            }

            Some(x)
        },
    }
}

/// Square root through a dyadic discrete logarithm.
///
/// `element^T` lies in the order-`2^S` subgroup, so it equals `g^e` for some
/// `e < 2^S`. The bits of `e` are recovered one at a time with
/// `inverse_root_powers`. `element` is a square iff `e` is even, in which case
/// `element^((T + 1) / 2) * g^(-e / 2)` is a root.
pub(crate) fn dyadic<F: Field>(
    element: &F,
    inverse_root_powers: &[F],
    trace_minus_one_div_two: &[u64],
) -> Option<F> {
    if element.is_zero() {
        return None;
    }
    let two_adicity = inverse_root_powers.len();

    let w = element.pow(trace_minus_one_div_two);
    let candidate = w * element;
    let mut residual = candidate * &w;

    let mut exponent = 0u64;
    for (i, power) in inverse_root_powers.iter().enumerate() {
        let mut probe = residual;
        for _ in 0..(two_adicity - 1 - i) {
            probe.square_in_place();
        }
        let adjusted = residual * power;
        if !probe.is_one() {
            exponent |= 1 << i;
            residual = adjusted;
        }
    }

    if exponent & 1 == 1 {
        return None;
    }

    let half = exponent >> 1;
    let mut root = candidate;
    for (i, power) in inverse_root_powers.iter().take(two_adicity.saturating_sub(1)).enumerate() {
        let adjusted = root * power;
        if (half >> i) & 1 == 1 {
            root = adjusted;
        }
    }
    Some(root)
}
