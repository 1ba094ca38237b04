use crate::{biginteger::BigInteger256, FieldError, Result};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    vec::Vec,
    One, UniformRand, Zero,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub(crate) mod arithmetic;

pub mod models;
pub use self::models::*;

pub mod sqrt;
pub use self::sqrt::SqrtPrecomputation;

/// The interface for a generic field.
pub trait Field:
    'static
    + Copy
    + Clone
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + Eq
    + Hash
    + One
    + Zero
    + Neg<Output = Self>
    + UniformRand
    + CanonicalSerialize
    + CanonicalDeserialize
    + Add<Self, Output = Self>
    + Sub<Self, Output = Self>
    + Mul<Self, Output = Self>
    + AddAssign<Self>
    + SubAssign<Self>
    + MulAssign<Self>
    + for<'a> Add<&'a Self, Output = Self>
    + for<'a> Sub<&'a Self, Output = Self>
    + for<'a> Mul<&'a Self, Output = Self>
    + for<'a> AddAssign<&'a Self>
    + for<'a> SubAssign<&'a Self>
    + for<'a> MulAssign<&'a Self>
    + core::iter::Sum<Self>
    + for<'a> core::iter::Sum<&'a Self>
    + core::iter::Product<Self>
    + for<'a> core::iter::Product<&'a Self>
    + From<u128>
    + From<u64>
    + From<u32>
    + From<u16>
    + From<u8>
    + From<bool>
{
    /// Returns `self + self`.
    #[must_use]
    fn double(&self) -> Self;

    /// Doubles `self` in place.
    fn double_in_place(&mut self) -> &mut Self;

    /// Returns `self * self`.
    #[must_use]
    fn square(&self) -> Self;

    /// Squares `self` in place.
    fn square_in_place(&mut self) -> &mut Self;

    /// Computes the multiplicative inverse of `self` if `self` is nonzero.
    ///
    /// The running time depends on the value of `self`; do not use it on
    /// secret data.
    #[must_use]
    fn inverse(&self) -> Option<Self>;

    /// Sets `self` to `self`'s inverse if it exists. Otherwise it is a no-op.
    fn inverse_in_place(&mut self) -> Option<&mut Self> {
        let inverse = self.inverse()?;
        *self = inverse;
        Some(self)
    }

    /// Returns `self / other`, failing with [`FieldError::NoInverse`] when
    /// `other` is zero.
    fn checked_div(&self, other: &Self) -> Result<Self> {
        other
            .inverse()
            .map(|inverse| *self * inverse)
            .ok_or(FieldError::NoInverse)
    }

    /// Exponentiates this element by a number represented with `u64` limbs,
    /// least significant limb first. Bits are consumed least significant
    /// first.
    #[must_use]
    fn pow<S: AsRef<[u64]>>(&self, exp: S) -> Self {
        let mut res = Self::one();
        let mut base = *self;

        for bit in BitIteratorLE::without_trailing_zeros(exp) {
            if bit {
                res *= &base;
            }
            base.square_in_place();
        }
        res
    }
}

/// The interface for a field of prime order whose elements fit in 256 bits.
pub trait PrimeField: Field + Ord + From<BigInteger256> + Into<BigInteger256> {
    /// The modulus of the field.
    const MODULUS: BigInteger256;

    /// `(Self::MODULUS - 1) / 2`, the bound above which an element is
    /// lexicographically largest.
    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger256;

    /// The number of bits needed to represent `Self::MODULUS`.
    const MODULUS_BITS: u32;

    /// Returns the element congruent to `repr`, reducing it modulo
    /// `Self::MODULUS` when needed.
    fn from_bigint(repr: BigInteger256) -> Self;

    /// Returns the canonical integer in `[0, Self::MODULUS)`.
    fn into_bigint(&self) -> BigInteger256;

    /// Reads a canonical little-endian encoding, rejecting integers that are
    /// not smaller than the modulus.
    fn from_le_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let repr = BigInteger256::from_bytes_le(bytes);
        if repr < Self::MODULUS {
            Ok(Self::from_bigint(repr))
        } else {
            Err(FieldError::NonCanonicalEncoding)
        }
    }

    /// Reads 32 little-endian bytes the caller guarantees encode an integer
    /// smaller than the modulus, skipping the range check. Larger integers
    /// yield an unspecified element; use [`PrimeField::from_le_bytes`] for
    /// untrusted input.
    fn from_le_bytes_unchecked(bytes: &[u8; 32]) -> Self;

    /// Reads a canonical big-endian encoding, rejecting integers that are
    /// not smaller than the modulus.
    fn from_be_bytes(bytes: &[u8; 32]) -> Result<Self> {
        let mut le = *bytes;
        le.reverse();
        Self::from_le_bytes(&le)
    }

    /// Interprets `bytes` as an arbitrary-length little-endian integer and
    /// reduces it modulo `Self::MODULUS`.
    fn from_le_bytes_mod_order(bytes: &[u8]) -> Self {
        let two_to_64 = Self::from(u128::from(u64::MAX) + 1);
        let mut res = Self::zero();
        for chunk in bytes.chunks(8).rev() {
            let mut limb = [0u8; 8];
            limb[..chunk.len()].copy_from_slice(chunk);
            res *= two_to_64;
            res += Self::from(u64::from_le_bytes(limb));
        }
        res
    }

    /// The canonical 32-byte little-endian encoding.
    fn to_le_bytes(&self) -> [u8; 32] {
        self.into_bigint().to_bytes_le()
    }

    /// The canonical 32-byte big-endian encoding.
    fn to_be_bytes(&self) -> [u8; 32] {
        self.into_bigint().to_bytes_be()
    }

    /// Returns true iff the canonical residue exceeds
    /// `(Self::MODULUS - 1) / 2`. Zero is never largest, and exactly one of
    /// `x` and `-x` is largest for nonzero `x`.
    fn lexicographically_largest(&self) -> bool {
        self.into_bigint() > Self::MODULUS_MINUS_ONE_DIV_TWO
    }
}

/// The interface for a field that supports an efficient square-root operation.
pub trait SquareRootField: Field {
    /// Returns the Legendre symbol.
    fn legendre(&self) -> LegendreSymbol;

    /// Returns a square root of self, if it exists.
    ///
    /// Zero is reported as having no square root.
    #[must_use]
    fn sqrt(&self) -> Option<Self>;

    /// Sets `self` to be the square root of `self`, if it exists.
    fn sqrt_in_place(&mut self) -> Option<&mut Self> {
        let root = self.sqrt()?;
        *self = root;
        Some(self)
    }

    /// Like [`SquareRootField::sqrt`], reporting a missing root as
    /// [`FieldError::NoSquareRoot`].
    fn try_sqrt(&self) -> Result<Self> {
        self.sqrt().ok_or(FieldError::NoSquareRoot)
    }
}

/// Quadratic character of a field element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendreSymbol {
    /// The element is zero.
    Zero = 0,
    /// The element is a nonzero square.
    QuadraticResidue = 1,
    /// The element is not a square.
    QuadraticNonResidue = -1,
}

impl LegendreSymbol {
    /// Returns true iff the element was zero.
    pub fn is_zero(&self) -> bool {
        *self == LegendreSymbol::Zero
    }

    /// Returns true iff the element is not a square.
    pub fn is_qnr(&self) -> bool {
        *self == LegendreSymbol::QuadraticNonResidue
    }

    /// Returns true iff the element is a nonzero square.
    pub fn is_qr(&self) -> bool {
        *self == LegendreSymbol::QuadraticResidue
    }
}

impl From<LegendreSymbol> for i8 {
    fn from(symbol: LegendreSymbol) -> i8 {
        symbol as i8
    }
}

/// Iterates over a slice of `u64` in *big-endian* order.
#[derive(Debug)]
pub struct BitIteratorBE<Slice: AsRef<[u64]>> {
    s: Slice,
    n: usize,
}

impl<Slice: AsRef<[u64]>> BitIteratorBE<Slice> {
    /// Iterates over every bit, most significant first.
    pub fn new(s: Slice) -> Self {
        let n = s.as_ref().len() * 64;
        BitIteratorBE { s, n }
    }

    /// Construct an iterator that automatically skips any leading zeros.
    /// That is, it skips all zeros before the most-significant one.
    pub fn without_leading_zeros(s: Slice) -> impl Iterator<Item = bool> {
        Self::new(s).skip_while(|b| !b)
    }
}

impl<Slice: AsRef<[u64]>> Iterator for BitIteratorBE<Slice> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.n == 0 {
            None
        } else {
            self.n -= 1;
            let part = self.n / 64;
            let bit = self.n - (64 * part);

            Some(self.s.as_ref()[part] & (1 << bit) > 0)
        }
    }
}

/// Iterates over a slice of `u64` in *little-endian* order.
#[derive(Debug)]
pub struct BitIteratorLE<Slice: AsRef<[u64]>> {
    s: Slice,
    n: usize,
    max_len: usize,
}

impl<Slice: AsRef<[u64]>> BitIteratorLE<Slice> {
    /// Iterates over every bit, least significant first.
    pub fn new(s: Slice) -> Self {
        let n = 0;
        let max_len = s.as_ref().len() * 64;
        BitIteratorLE { s, n, max_len }
    }

    /// Construct an iterator that automatically skips any trailing zeros.
    /// That is, it skips all zeros after the most-significant one.
    pub fn without_trailing_zeros(s: Slice) -> impl Iterator<Item = bool> {
        let mut first_trailing_zero = 0;
        for (i, limb) in s.as_ref().iter().enumerate().rev() {
            first_trailing_zero = i * 64 + (64 - limb.leading_zeros()) as usize;
            if *limb != 0 {
                break;
            }
        }
        let mut iter = Self::new(s);
        iter.max_len = first_trailing_zero;
        iter
    }
}

impl<Slice: AsRef<[u64]>> Iterator for BitIteratorLE<Slice> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.n == self.max_len {
            None
        } else {
            let part = self.n / 64;
            let bit = self.n - (64 * part);
            self.n += 1;

            Some(self.s.as_ref()[part] & (1 << bit) > 0)
        }
    }
}

/// Replaces every element of `v` by its inverse using a single field
/// inversion.
///
/// If any element is zero the slice is left untouched and
/// [`FieldError::NoInverse`] is returned.
pub fn batch_inversion<F: Field>(v: &mut [F]) -> Result<()> {
    let _span = tracing::debug_span!("batch_inversion", len = v.len()).entered();

    if v.iter().any(Zero::is_zero) {
        return Err(FieldError::NoInverse);
    }

    #[cfg(feature = "parallel")]
    let chunk_size = core::cmp::max(v.len() / rayon::current_num_threads(), 1);
    #[cfg(not(feature = "parallel"))]
    let chunk_size = core::cmp::max(v.len(), 1);

    cfg_chunks_mut!(v, chunk_size).try_for_each(|chunk| serial_batch_inversion(chunk))
}

/// Returns the inverses of `v` in a new vector, see [`batch_inversion`].
pub fn batch_inverse<F: Field>(v: &[F]) -> Result<Vec<F>> {
    let mut inverses = v.to_vec();
    batch_inversion(&mut inverses)?;
    Ok(inverses)
}

fn serial_batch_inversion<F: Field>(v: &mut [F]) -> Result<()> {
    // Montgomery’s Trick and Fast Implementation of Masked AES
    // Genelle, Prouff and Quisquater
    // Section 3.2

    // First pass: compute [a, ab, abc, ...]
    let mut prod = Vec::with_capacity(v.len());
    let mut tmp = F::one();
    for f in v.iter() {
        tmp *= f;
        prod.push(tmp);
    }

    // Invert `tmp`.
    tmp = tmp.inverse().ok_or(FieldError::NoInverse)?;

    // Second pass: iterate backwards to compute inverses
    for (f, s) in v
        .iter_mut()
        .rev()
        // Backwards, skip last element, fill in one for last term.
        .zip(prod.into_iter().rev().skip(1).chain(Some(F::one())))
    {
        // tmp := tmp * f; f := tmp * s = 1/f
        let new_tmp = tmp * *f;
        *f = tmp * s;
        tmp = new_tmp;
    }
    Ok(())
}
