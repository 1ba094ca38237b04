use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, Read, SerializationError, Valid, Validate,
    Write,
};
use ark_std::{
    cmp::{Ord, Ordering, PartialOrd},
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    rand::{
        distributions::{Distribution, Standard},
        Rng,
    },
    One, Zero,
};

use crate::{
    biginteger::BigInteger256,
    fields::{arithmetic, sqrt, Field, LegendreSymbol, PrimeField, SqrtPrecomputation, SquareRootField},
};

/// Compile-time description of a prime field with a modulus below `2^255`.
///
/// Every `BigInteger256` constant is a plain integer; the `Fp256` constants
/// are in Montgomery form.
pub trait FpConfig: 'static + Send + Sync + Sized {
    /// The modulus `M`.
    const MODULUS: BigInteger256;

    /// The number of bits needed to represent `M`.
    const MODULUS_BITS: u32;

    /// The number of unused high bits in the top limb.
    const REPR_SHAVE_BITS: u32 = 256 - Self::MODULUS_BITS;

    /// `R = 2^256 mod M`.
    const R: BigInteger256;

    /// `R^2 mod M`.
    const R2: BigInteger256;

    /// `-M^{-1} mod 2^64`.
    const INV: u64;

    /// The largest `S` with `2^S` dividing `M - 1`.
    const TWO_ADICITY: u32;

    /// `T = (M - 1) / 2^S`.
    const TRACE: BigInteger256;

    /// `(T - 1) / 2`.
    const TRACE_MINUS_ONE_DIV_TWO: BigInteger256;

    /// `(M - 1) / 2`.
    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger256;

    /// A fixed quadratic non-residue.
    const QUADRATIC_NONRESIDUE: Fp256<Self>;

    /// `QUADRATIC_NONRESIDUE^T`, a generator of the order-`2^S` subgroup.
    const TWO_ADIC_ROOT_OF_UNITY: Fp256<Self>;

    /// How square roots are extracted in this field.
    const SQRT_PRECOMP: SqrtPrecomputation<Fp256<Self>>;
}

/// An element of the prime field described by `P`, kept in Montgomery form
/// and always fully reduced.
#[derive(Derivative)]
#[derivative(
    Default(bound = ""),
    Hash(bound = ""),
    Clone(bound = ""),
    Copy(bound = ""),
    PartialEq(bound = ""),
    Eq(bound = "")
)]
pub struct Fp256<P>(BigInteger256, PhantomData<P>);

impl<P> Fp256<P> {
    /// Wraps a value that is already in Montgomery form and reduced.
    ///
    /// Only meant for spelling out field constants.
    #[doc(hidden)]
    #[inline]
    pub const fn new_unchecked(montgomery: BigInteger256) -> Self {
        Fp256(montgomery, PhantomData)
    }
}

impl<P: FpConfig> Fp256<P> {
    #[inline]
    fn is_valid(&self) -> bool {
        self.0 < P::MODULUS
    }

    #[inline]
    fn reduce(&mut self) {
        arithmetic::reduce(&mut self.0, &P::MODULUS);
    }

    /// Square root through Tonelli–Shanks, whatever strategy `P` selects.
    pub fn tonelli_shanks_sqrt(&self) -> Option<Self> {
        sqrt::tonelli_shanks(
            self,
            P::TWO_ADIC_ROOT_OF_UNITY,
            P::TWO_ADICITY,
            P::TRACE_MINUS_ONE_DIV_TWO.as_ref(),
        )
    }
}

impl<P: FpConfig> Zero for Fp256<P> {
    #[inline]
    fn zero() -> Self {
        Fp256(BigInteger256::default(), PhantomData)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<P: FpConfig> One for Fp256<P> {
    #[inline]
    fn one() -> Self {
        Fp256(P::R, PhantomData)
    }

    #[inline]
    fn is_one(&self) -> bool {
        self.0 == P::R
    }
}

impl<P: FpConfig> Field for Fp256<P> {
    #[inline]
    fn double(&self) -> Self {
        let mut temp = *self;
        temp.double_in_place();
        temp
    }

    #[inline]
    fn double_in_place(&mut self) -> &mut Self {
        // The top bit of the modulus is clear, so this cannot overflow.
        self.0.mul2();
        self.reduce();
        self
    }

    #[inline]
    fn square(&self) -> Self {
        let mut temp = *self;
        temp.square_in_place();
        temp
    }

    #[inline]
    fn square_in_place(&mut self) -> &mut Self {
        self.0 = arithmetic::mul(&self.0, &self.0, &P::MODULUS, P::INV);
        self
    }

    #[inline]
    fn inverse(&self) -> Option<Self> {
        if self.is_zero() {
            None
        } else {
            // Guajardo Kumar Paar Pelzl
            // Efficient Software-Implementation of Finite Fields with Applications to
            // Cryptography
            // Algorithm 16 (BEA for Inversion in Fp)

            let one = BigInteger256::from(1u64);

            let mut u = self.0;
            let mut v = P::MODULUS;
            let mut b = Fp256::<P>(P::R2, PhantomData); // Avoids unnecessary reduction step.
            let mut c = Self::zero();

            while u != one && v != one {
                while u.is_even() {
                    u.div2();

                    if b.0.is_odd() {
                        b.0.add_nocarry(&P::MODULUS);
                    }
                    b.0.div2();
                }

                while v.is_even() {
                    v.div2();

                    if c.0.is_odd() {
                        c.0.add_nocarry(&P::MODULUS);
                    }
                    c.0.div2();
                }

                if v < u {
                    u.sub_noborrow(&v);
                    b -= &c;
                } else {
                    v.sub_noborrow(&u);
                    c -= &b;
                }
            }

            if u == one {
                Some(b)
            } else {
                Some(c)
            }
        }
    }
}

impl<P: FpConfig> PrimeField for Fp256<P> {
    const MODULUS: BigInteger256 = P::MODULUS;
    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger256 = P::MODULUS_MINUS_ONE_DIV_TWO;
    const MODULUS_BITS: u32 = P::MODULUS_BITS;

    #[inline]
    fn from_bigint(mut repr: BigInteger256) -> Self {
        while repr >= P::MODULUS {
            repr.sub_noborrow(&P::MODULUS);
        }
        let mut r = Fp256(repr, PhantomData);
        r *= &Fp256(P::R2, PhantomData);
        r
    }

    #[inline]
    fn into_bigint(&self) -> BigInteger256 {
        arithmetic::from_montgomery(&self.0, &P::MODULUS, P::INV)
    }

    #[inline]
    fn from_le_bytes_unchecked(bytes: &[u8; 32]) -> Self {
        let mut r = Fp256(BigInteger256::from_bytes_le(bytes), PhantomData);
        r *= &Fp256(P::R2, PhantomData);
        r
    }
}

impl<P: FpConfig> SquareRootField for Fp256<P> {
    #[inline]
    fn legendre(&self) -> LegendreSymbol {
        use crate::fields::LegendreSymbol::*;

        // s = self^((MODULUS - 1) // 2)
        let s = self.pow(P::MODULUS_MINUS_ONE_DIV_TWO);
        if s.is_zero() {
            Zero
        } else if s.is_one() {
            QuadraticResidue
        } else {
            QuadraticNonResidue
        }
    }

    #[inline]
    fn sqrt(&self) -> Option<Self> {
        match P::SQRT_PRECOMP {
            SqrtPrecomputation::TonelliShanks => self.tonelli_shanks_sqrt(),
            SqrtPrecomputation::DyadicTable {
                inverse_root_powers,
            } => sqrt::dyadic(
                self,
                inverse_root_powers,
                P::TRACE_MINUS_ONE_DIV_TWO.as_ref(),
            ),
        }
    }
}

impl<P: FpConfig> Ord for Fp256<P> {
    #[inline(always)]
    fn cmp(&self, other: &Self) -> Ordering {
        self.into_bigint().cmp(&other.into_bigint())
    }
}

impl<P: FpConfig> PartialOrd for Fp256<P> {
    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<P: FpConfig> From<BigInteger256> for Fp256<P> {
    #[inline]
    fn from(repr: BigInteger256) -> Self {
        Self::from_bigint(repr)
    }
}

impl<P: FpConfig> From<Fp256<P>> for BigInteger256 {
    #[inline]
    fn from(element: Fp256<P>) -> Self {
        element.into_bigint()
    }
}

impl<P: FpConfig> From<u128> for Fp256<P> {
    fn from(other: u128) -> Self {
        Self::from_bigint(BigInteger256::from(other))
    }
}

macro_rules! impl_from_small_int {
    ($($int:ty),*) => {
        $(
            impl<P: FpConfig> From<$int> for Fp256<P> {
                fn from(other: $int) -> Self {
                    Self::from_bigint(BigInteger256::from(u64::from(other)))
                }
            }
        )*
    };
}

impl_from_small_int!(u64, u32, u16, u8, bool);

impl<P: FpConfig> Distribution<Fp256<P>> for Standard {
    #[inline]
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Fp256<P> {
        loop {
            let mut tmp = Fp256::<P>(rng.sample(Standard), PhantomData);
            // Mask away the unused bits at the beginning.
            tmp.0 .0[3] &= u64::MAX >> P::REPR_SHAVE_BITS;

            if tmp.is_valid() {
                return tmp;
            }
        }
    }
}

impl<P: FpConfig> Display for Fp256<P> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp256({})", self.into_bigint())
    }
}

impl<P: FpConfig> Debug for Fp256<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Fp256({})", self.into_bigint())
    }
}

impl<P: FpConfig> Neg for Fp256<P> {
    type Output = Self;

    #[inline]
    #[must_use]
    fn neg(self) -> Self {
        if !self.is_zero() {
            let mut tmp = P::MODULUS;
            tmp.sub_noborrow(&self.0);
            Fp256::<P>(tmp, PhantomData)
        } else {
            self
        }
    }
}

impl<'a, P: FpConfig> AddAssign<&'a Self> for Fp256<P> {
    #[inline]
    fn add_assign(&mut self, other: &Self) {
        self.0.add_nocarry(&other.0);
        self.reduce();
    }
}

impl<'a, P: FpConfig> SubAssign<&'a Self> for Fp256<P> {
    #[inline]
    fn sub_assign(&mut self, other: &Self) {
        if other.0 > self.0 {
            self.0.add_nocarry(&P::MODULUS);
        }
        self.0.sub_noborrow(&other.0);
    }
}

impl<'a, P: FpConfig> MulAssign<&'a Self> for Fp256<P> {
    #[inline]
    fn mul_assign(&mut self, other: &Self) {
        self.0 = arithmetic::mul(&self.0, &other.0, &P::MODULUS, P::INV);
    }
}

impl<'a, P: FpConfig> Add<&'a Self> for Fp256<P> {
    type Output = Self;

    #[inline]
    fn add(mut self, other: &Self) -> Self {
        self += other;
        self
    }
}

impl<'a, P: FpConfig> Sub<&'a Self> for Fp256<P> {
    type Output = Self;

    #[inline]
    fn sub(mut self, other: &Self) -> Self {
        self -= other;
        self
    }
}

impl<'a, P: FpConfig> Mul<&'a Self> for Fp256<P> {
    type Output = Self;

    #[inline]
    fn mul(mut self, other: &Self) -> Self {
        self *= other;
        self
    }
}

// Implements the by-value and `&mut` operator variants on top of the
// by-reference ones above.
macro_rules! impl_ops_from_ref {
    ($($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident);* $(;)?) => {
        $(
            impl<P: FpConfig> $trait<Self> for Fp256<P> {
                type Output = Self;

                #[inline]
                fn $method(mut self, other: Self) -> Self {
                    $assign_trait::$assign_method(&mut self, &other);
                    self
                }
            }

            impl<'a, P: FpConfig> $trait<&'a mut Self> for Fp256<P> {
                type Output = Self;

                #[inline]
                fn $method(mut self, other: &'a mut Self) -> Self {
                    $assign_trait::$assign_method(&mut self, &*other);
                    self
                }
            }

            impl<P: FpConfig> $assign_trait<Self> for Fp256<P> {
                #[inline]
                fn $assign_method(&mut self, other: Self) {
                    $assign_trait::$assign_method(self, &other)
                }
            }

            impl<'a, P: FpConfig> $assign_trait<&'a mut Self> for Fp256<P> {
                #[inline]
                fn $assign_method(&mut self, other: &'a mut Self) {
                    $assign_trait::$assign_method(self, &*other)
                }
            }
        )*
    };
}

impl_ops_from_ref!(
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign;
    Mul, mul, MulAssign, mul_assign;
);

impl<P: FpConfig> core::iter::Sum<Self> for Fp256<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a, P: FpConfig> core::iter::Sum<&'a Self> for Fp256<P> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<P: FpConfig> core::iter::Product<Self> for Fp256<P> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

impl<'a, P: FpConfig> core::iter::Product<&'a Self> for Fp256<P> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

impl<P: FpConfig> CanonicalSerialize for Fp256<P> {
    #[inline]
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        _compress: Compress,
    ) -> Result<(), SerializationError> {
        writer.write_all(&self.to_le_bytes())?;
        Ok(())
    }

    #[inline]
    fn serialized_size(&self, _compress: Compress) -> usize {
        BigInteger256::NUM_BYTES
    }
}

impl<P: FpConfig> Valid for Fp256<P> {
    #[inline]
    fn check(&self) -> Result<(), SerializationError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(SerializationError::InvalidData)
        }
    }
}

impl<P: FpConfig> CanonicalDeserialize for Fp256<P> {
    /// Reads 32 little-endian bytes. With [`Validate::Yes`] integers that are
    /// not smaller than the modulus are rejected, otherwise they are reduced.
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        _compress: Compress,
        validate: Validate,
    ) -> Result<Self, SerializationError> {
        let mut bytes = [0u8; 32];
        reader.read_exact(&mut bytes)?;
        let repr = BigInteger256::from_bytes_le(&bytes);
        if validate == Validate::Yes && repr >= P::MODULUS {
            return Err(SerializationError::InvalidData);
        }
        Ok(Self::from_bigint(repr))
    }
}
