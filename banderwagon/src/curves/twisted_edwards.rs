use crate::{Error, Result};
use ark_std::{
    fmt::{Display, Formatter, Result as FmtResult},
    marker::PhantomData,
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    vec::Vec,
    One, Zero,
};
use verkle_ff::{batch_inversion, BitIteratorBE, Field, PrimeField, SquareRootField};

/// Constants of a twisted Edwards curve `a·x² + y² = 1 + d·x²·y²`.
pub trait TECurveConfig: Send + Sync + Sized + 'static {
    /// Field the coordinates live in.
    type BaseField: PrimeField + SquareRootField;
    /// Field of scalars, the order of the prime subgroup.
    type ScalarField: PrimeField;

    /// Coefficient `a`.
    const COEFF_A: Self::BaseField;
    /// Coefficient `d`.
    const COEFF_D: Self::BaseField;
    /// Generator of the prime-order subgroup.
    const GENERATOR: Affine<Self>;

    /// Multiplication by `COEFF_A`.
    #[inline(always)]
    fn mul_by_a(elem: &Self::BaseField) -> Self::BaseField {
        Self::COEFF_A * elem
    }
}

/// A curve point in affine coordinates.
#[derive(Derivative)]
#[derivative(
    Copy(bound = "P: TECurveConfig"),
    Clone(bound = "P: TECurveConfig"),
    PartialEq(bound = "P: TECurveConfig"),
    Eq(bound = "P: TECurveConfig"),
    Debug(bound = "P: TECurveConfig"),
    Hash(bound = "P: TECurveConfig")
)]
#[must_use]
pub struct Affine<P: TECurveConfig> {
    /// The `x` coordinate.
    pub x: P::BaseField,
    /// The `y` coordinate.
    pub y: P::BaseField,
    #[derivative(Debug = "ignore")]
    _params: PhantomData<P>,
}

impl<P: TECurveConfig> Display for Affine<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Affine(x={}, y={})", self.x, self.y)
    }
}

impl<P: TECurveConfig> Affine<P> {
    /// Builds a point without checking the curve equation.
    pub const fn new_unchecked(x: P::BaseField, y: P::BaseField) -> Self {
        Self {
            x,
            y,
            _params: PhantomData,
        }
    }

    /// Builds a point, failing with [`Error::PointNotOnCurve`] if `(x, y)`
    /// does not satisfy the curve equation.
    pub fn new(x: P::BaseField, y: P::BaseField) -> Result<Self> {
        let point = Self::new_unchecked(x, y);
        if point.is_on_curve() {
            Ok(point)
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// The identity `(0, 1)`.
    pub fn zero() -> Self {
        Self::new_unchecked(P::BaseField::zero(), P::BaseField::one())
    }

    /// Returns true iff `self` is the identity.
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() & self.y.is_one()
    }

    /// The generator of the prime-order subgroup.
    pub fn generator() -> Self {
        P::GENERATOR
    }

    /// Reads `x ‖ y`, each 32 little-endian bytes, skipping every check.
    ///
    /// The caller guarantees both coordinates are canonical and the point
    /// is on the curve.
    pub fn from_bytes_unchecked(bytes: &[u8; 64]) -> Self {
        let (x, y) = split_coordinates(bytes);
        Self::new_unchecked(
            P::BaseField::from_le_bytes_unchecked(&x),
            P::BaseField::from_le_bytes_unchecked(&y),
        )
    }

    /// Writes `x ‖ y`, each 32 little-endian bytes.
    pub fn to_bytes_uncompressed(&self) -> [u8; 64] {
        let mut bytes = [0u8; 64];
        bytes[..32].copy_from_slice(&self.x.to_le_bytes());
        bytes[32..].copy_from_slice(&self.y.to_le_bytes());
        bytes
    }

    /// Reads `x ‖ y`, each 32 little-endian bytes, rejecting non-canonical
    /// coordinates and points off the curve.
    pub fn from_bytes_uncompressed(bytes: &[u8; 64]) -> Result<Self> {
        let (x, y) = split_coordinates(bytes);
        Self::new(P::BaseField::from_le_bytes(&x)?, P::BaseField::from_le_bytes(&y)?)
    }

    /// Multiplies `self` by the scalar represented by `bits`. `bits` must be a big-endian
    /// bit-wise decomposition of the scalar.
    pub(crate) fn mul_bits(&self, bits: impl Iterator<Item = bool>) -> Projective<P> {
        let mut res = Projective::zero();
        for i in bits.skip_while(|b| !b) {
            res.double_in_place();
            if i {
                res.add_assign_mixed(self)
            }
        }
        res
    }

    /// Solves the curve equation for `y`.
    ///
    /// The point is not guaranteed to be in the prime order subgroup. If and
    /// only if `choose_largest` is set will the lexicographically largest
    /// `y` be selected. Fails with [`Error::NoYCoordinate`] when
    /// `(1 - a·x²) / (1 - d·x²)` has no nonzero square root.
    pub fn get_point_from_x(x: P::BaseField, choose_largest: bool) -> Result<Self> {
        let x2 = x.square();
        let one = P::BaseField::one();
        let numerator = one - &P::mul_by_a(&x2);
        let denominator = one - &(P::COEFF_D * &x2);
        let y2 = numerator
            .checked_div(&denominator)
            .map_err(|_| Error::NoYCoordinate)?;
        let y = y2.sqrt().ok_or(Error::NoYCoordinate)?;
        let y = if y.lexicographically_largest() == choose_largest {
            y
        } else {
            -y
        };
        Ok(Self::new_unchecked(x, y))
    }

    /// Checks that the current point is on the elliptic curve.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();

        let lhs = y2 + &P::mul_by_a(&x2);
        let rhs = P::BaseField::one() + &(P::COEFF_D * &(x2 * &y2));

        lhs == rhs
    }

    /// Extended coordinates with `Z = 1`.
    pub fn into_projective(&self) -> Projective<P> {
        (*self).into()
    }
}

fn split_coordinates(bytes: &[u8; 64]) -> ([u8; 32], [u8; 32]) {
    let mut x = [0u8; 32];
    let mut y = [0u8; 32];
    x.copy_from_slice(&bytes[..32]);
    y.copy_from_slice(&bytes[32..]);
    (x, y)
}

impl<P: TECurveConfig> Default for Affine<P> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: TECurveConfig> Neg for Affine<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new_unchecked(-self.x, self.y)
    }
}

impl<P: TECurveConfig> Mul<P::ScalarField> for Affine<P> {
    type Output = Projective<P>;

    fn mul(self, other: P::ScalarField) -> Projective<P> {
        self.mul_bits(BitIteratorBE::new(other.into_bigint()))
    }
}

//////////////////////////////////////////////////////////////////////////////

/// A curve point in extended twisted Edwards coordinates `(X, Y, T, Z)`
/// with `x = X/Z`, `y = Y/Z` and `x·y = T/Z`.
#[derive(Derivative)]
#[derivative(
    Copy(bound = "P: TECurveConfig"),
    Clone(bound = "P: TECurveConfig"),
    Eq(bound = "P: TECurveConfig"),
    Debug(bound = "P: TECurveConfig")
)]
#[must_use]
pub struct Projective<P: TECurveConfig> {
    /// The `X` coordinate.
    pub x: P::BaseField,
    /// The `Y` coordinate.
    pub y: P::BaseField,
    /// The `T` coordinate.
    pub t: P::BaseField,
    /// The `Z` coordinate.
    pub z: P::BaseField,
    #[derivative(Debug = "ignore")]
    _params: PhantomData<P>,
}

impl<P: TECurveConfig> PartialEq<Projective<P>> for Affine<P> {
    fn eq(&self, other: &Projective<P>) -> bool {
        self.into_projective() == *other
    }
}

impl<P: TECurveConfig> PartialEq<Affine<P>> for Projective<P> {
    fn eq(&self, other: &Affine<P>) -> bool {
        *self == other.into_projective()
    }
}

impl<P: TECurveConfig> Display for Projective<P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", Affine::from(*self))
    }
}

impl<P: TECurveConfig> PartialEq for Projective<P> {
    fn eq(&self, other: &Self) -> bool {
        if self.is_zero() {
            return other.is_zero();
        }

        if other.is_zero() {
            return false;
        }

        // x1/z1 == x2/z2  <==> x1 * z2 == x2 * z1
        (self.x * &other.z) == (other.x * &self.z) && (self.y * &other.z) == (other.y * &self.z)
    }
}

impl<P: TECurveConfig> Default for Projective<P> {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<P: TECurveConfig> Projective<P> {
    /// Builds a point from extended coordinates without any check.
    pub fn new_unchecked(
        x: P::BaseField,
        y: P::BaseField,
        t: P::BaseField,
        z: P::BaseField,
    ) -> Self {
        Self {
            x,
            y,
            t,
            z,
            _params: PhantomData,
        }
    }

    /// The generator of the prime-order subgroup.
    pub fn generator() -> Self {
        P::GENERATOR.into()
    }

    /// Checks the homogenized curve equation and `X·Y = T·Z`.
    pub fn is_on_curve(&self) -> bool {
        let x2 = self.x.square();
        let y2 = self.y.square();
        let z2 = self.z.square();

        let lhs = (P::mul_by_a(&x2) + &y2) * &z2;
        let rhs = z2.square() + &(P::COEFF_D * &x2 * &y2);

        !self.z.is_zero() && lhs == rhs && self.x * &self.y == self.t * &self.z
    }

    /// Returns true iff `Z = 1`.
    pub fn is_normalized(&self) -> bool {
        self.z.is_one()
    }

    /// Returns `2·self`.
    pub fn double(&self) -> Self {
        let mut tmp = *self;
        tmp.double_in_place();
        tmp
    }

    /// Doubles `self` in place with the unified addition law.
    pub fn double_in_place(&mut self) -> &mut Self {
        let tmp = *self;
        *self += &tmp;
        self
    }

    /// Adds an affine point, saving the multiplications by `Z2 = 1`.
    pub fn add_assign_mixed(&mut self, other: &Affine<P>) {
        // A = X1*X2
        let a = self.x * &other.x;
        // B = Y1*Y2
        let b = self.y * &other.y;
        // C = T1*d*T2
        let c = P::COEFF_D * &self.t * &other.x * &other.y;
        // D = Z1
        let d = self.z;
        // E = (X1+Y1)*(X2+Y2)-A-B
        let e = (self.x + &self.y) * &(other.x + &other.y) - &a - &b;
        // F = D-C
        let f = d - &c;
        // G = D+C
        let g = d + &c;
        // H = B-a*A
        let h = b - &P::mul_by_a(&a);
        // X3 = E*F
        self.x = e * &f;
        // Y3 = G*H
        self.y = g * &h;
        // T3 = E*H
        self.t = e * &h;
        // Z3 = F*G
        self.z = f * &g;
    }

    /// Double-and-add over the bits of `scalar`, most significant first.
    pub fn mul_bigint<S: AsRef<[u64]>>(&self, scalar: S) -> Self {
        let mut res = Self::zero();
        for bit in BitIteratorBE::without_leading_zeros(scalar) {
            res.double_in_place();
            if bit {
                res += self;
            }
        }
        res
    }

    /// Affine coordinates, using one inversion unless `Z = 1`.
    ///
    /// `Z` is never zero for points built through the group law. A zero `Z`
    /// maps to the degenerate `(0, 0)`, which is not a curve point.
    pub fn into_affine(&self) -> Affine<P> {
        (*self).into()
    }

    /// Converts many points to affine coordinates with a single inversion.
    ///
    /// Fails with a field error if any point has `Z = 0`.
    pub fn batch_normalize(points: &[Self]) -> Result<Vec<Affine<P>>> {
        let mut z_inverses: Vec<P::BaseField> = points.iter().map(|p| p.z).collect();
        batch_inversion(&mut z_inverses)?;
        Ok(points
            .iter()
            .zip(z_inverses)
            .map(|(p, z_inv)| Affine::new_unchecked(p.x * &z_inv, p.y * &z_inv))
            .collect())
    }
}

impl<P: TECurveConfig> Zero for Projective<P> {
    fn zero() -> Self {
        Self::new_unchecked(
            P::BaseField::zero(),
            P::BaseField::one(),
            P::BaseField::zero(),
            P::BaseField::one(),
        )
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y == self.z && !self.y.is_zero() && self.t.is_zero()
    }
}

impl<P: TECurveConfig> Neg for Projective<P> {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.x = -self.x;
        self.t = -self.t;
        self
    }
}

impl<'a, P: TECurveConfig> AddAssign<&'a Self> for Projective<P> {
    fn add_assign(&mut self, other: &'a Self) {
        // See "Twisted Edwards Curves Revisited"
        // Huseyin Hisil, Kenneth Koon-Ho Wong, Gary Carter, and Ed Dawson
        // 3.1 Unified Addition in E^e

        // A = x1 * x2
        let a = self.x * &other.x;

        // B = y1 * y2
        let b = self.y * &other.y;

        // C = d * t1 * t2
        let c = P::COEFF_D * &self.t * &other.t;

        // D = z1 * z2
        let d = self.z * &other.z;

        // H = B - aA
        let h = b - &P::mul_by_a(&a);

        // E = (x1 + y1) * (x2 + y2) - A - B
        let e = (self.x + &self.y) * &(other.x + &other.y) - &a - &b;

        // F = D - C
        let f = d - &c;

        // G = D + C
        let g = d + &c;

        // x3 = E * F
        self.x = e * &f;

        // y3 = G * H
        self.y = g * &h;

        // t3 = E * H
        self.t = e * &h;

        // z3 = F * G
        self.z = f * &g;
    }
}

impl<'a, P: TECurveConfig> SubAssign<&'a Self> for Projective<P> {
    fn sub_assign(&mut self, other: &'a Self) {
        *self += &(-(*other));
    }
}

impl<'a, P: TECurveConfig> Add<&'a Self> for Projective<P> {
    type Output = Self;

    fn add(mut self, other: &'a Self) -> Self {
        self += other;
        self
    }
}

impl<'a, P: TECurveConfig> Sub<&'a Self> for Projective<P> {
    type Output = Self;

    fn sub(mut self, other: &'a Self) -> Self {
        self -= other;
        self
    }
}

impl<P: TECurveConfig> AddAssign<Self> for Projective<P> {
    fn add_assign(&mut self, other: Self) {
        *self += &other;
    }
}

impl<P: TECurveConfig> SubAssign<Self> for Projective<P> {
    fn sub_assign(&mut self, other: Self) {
        *self -= &other;
    }
}

impl<P: TECurveConfig> Add<Self> for Projective<P> {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        self += &other;
        self
    }
}

impl<P: TECurveConfig> Sub<Self> for Projective<P> {
    type Output = Self;

    fn sub(mut self, other: Self) -> Self {
        self -= &other;
        self
    }
}

impl<P: TECurveConfig> core::iter::Sum<Self> for Projective<P> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<'a, P: TECurveConfig> core::iter::Sum<&'a Self> for Projective<P> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<P: TECurveConfig> MulAssign<P::ScalarField> for Projective<P> {
    fn mul_assign(&mut self, other: P::ScalarField) {
        *self = self.mul_bigint(other.into_bigint())
    }
}

impl<P: TECurveConfig> Mul<P::ScalarField> for Projective<P> {
    type Output = Self;

    fn mul(mut self, other: P::ScalarField) -> Self {
        self *= other;
        self
    }
}

// The affine point (X, Y) is represented in the Extended Projective coordinates
// with Z = 1.
impl<P: TECurveConfig> From<Affine<P>> for Projective<P> {
    fn from(p: Affine<P>) -> Projective<P> {
        Self::new_unchecked(p.x, p.y, p.x * &p.y, P::BaseField::one())
    }
}

// The projective point X, Y, T, Z is represented in the affine
// coordinates as X/Z, Y/Z.
impl<P: TECurveConfig> From<Projective<P>> for Affine<P> {
    fn from(p: Projective<P>) -> Affine<P> {
        if p.is_zero() {
            Affine::zero()
        } else if p.z.is_one() {
            // If Z is one, the point is already normalized.
            Affine::new_unchecked(p.x, p.y)
        } else {
            let z_inv = p.z.inverse().unwrap_or_else(P::BaseField::zero);
            let x = p.x * &z_inv;
            let y = p.y * &z_inv;
            Affine::new_unchecked(x, y)
        }
    }
}
