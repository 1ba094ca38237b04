use crate::{
    curves::{
        bandersnatch::{BandersnatchConfig, EdwardsAffine, EdwardsProjective},
        twisted_edwards::TECurveConfig,
    },
    fields::{Fq, Fr},
    Error, Result,
};
use ark_serialize::{
    CanonicalDeserialize, CanonicalSerialize, Compress, Read, SerializationError, Valid, Validate,
    Write,
};
use ark_std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign},
    vec::Vec,
    One, Zero,
};
use itertools::izip;
use verkle_ff::{batch_inversion, Field, PrimeField, SquareRootField};

/// An element of the Banderwagon group: the class `{P, P + T}` of a
/// Bandersnatch point `P` with `T = (0, -1)`.
///
/// Elements are compared and hashed as classes. The encoding picks the
/// representative whose `y` is lexicographically largest.
#[derive(Clone, Copy)]
pub struct Element(pub(crate) EdwardsProjective);

impl Element {
    /// Size of the canonical encoding in bytes.
    pub const COMPRESSED_SIZE: usize = 32;

    /// Size of the uncompressed `x ‖ y` encoding in bytes.
    pub const UNCOMPRESSED_SIZE: usize = 64;

    /// The image of the Bandersnatch prime-subgroup generator.
    pub fn generator() -> Element {
        Element(EdwardsProjective::generator())
    }

    /// The identity class `{(0, 1), (0, -1)}`.
    pub fn zero() -> Element {
        Element(EdwardsProjective::zero())
    }

    /// Returns true iff `self` is the identity class.
    pub fn is_zero(&self) -> bool {
        *self == Element::zero()
    }

    /// The canonical 32-byte encoding: the big-endian `x` coordinate of the
    /// representative whose `y` is lexicographically largest.
    pub fn to_bytes(&self) -> [u8; 32] {
        Self::encode_affine(&self.0.into_affine())
    }

    fn encode_affine(point: &EdwardsAffine) -> [u8; 32] {
        let x = if point.y.lexicographically_largest() {
            point.x
        } else {
            -point.x
        };
        x.to_be_bytes()
    }

    /// Decodes a canonical 32-byte encoding.
    ///
    /// Fails with a field error if the integer is not smaller than the base
    /// field modulus, with [`Error::NotInSubgroup`] if `x` is outside the
    /// Banderwagon subgroup and with [`Error::NoYCoordinate`] if no curve
    /// point has this `x`.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Element> {
        let x = Fq::from_be_bytes(bytes)?;
        if !Self::subgroup_check(&x) {
            return Err(Error::NotInSubgroup);
        }
        let point = EdwardsAffine::get_point_from_x(x, true)?;
        Ok(Element(point.into()))
    }

    /// Returns true iff `1 - a·x²` is a nonzero square, the membership test
    /// for the Banderwagon subgroup of a curve point with abscissa `x`.
    pub fn subgroup_check(x: &Fq) -> bool {
        let one_minus_ax2 = Fq::one() - &BandersnatchConfig::mul_by_a(&x.square());
        one_minus_ax2.legendre().is_qr()
    }

    /// Encodes many elements with a single field inversion.
    ///
    /// Fails with a field error only if some element has a zero `Z`
    /// coordinate, which the group law never produces.
    pub fn batch_to_bytes(elements: &[Element]) -> Result<Vec<[u8; 32]>> {
        let _span = tracing::debug_span!("batch_to_bytes", len = elements.len()).entered();

        let points: Vec<EdwardsProjective> = elements.iter().map(|e| e.0).collect();
        let affine = EdwardsProjective::batch_normalize(&points)?;
        Ok(affine.iter().map(Self::encode_affine).collect())
    }

    /// `x / y` of the affine point, read as little-endian bytes and reduced
    /// modulo the scalar field.
    ///
    /// The value does not depend on the representative since `(-x)/(-y)`
    /// equals `x/y`. The degenerate state with `y = 0` maps to zero.
    pub fn map_to_scalar_field(&self) -> Fr {
        let y_inv = self.0.y.inverse().unwrap_or_else(Fq::zero);
        Self::base_to_scalar(&(self.0.x * y_inv))
    }

    /// [`Element::map_to_scalar_field`] for many elements with a single
    /// field inversion.
    pub fn batch_map_to_scalar_field(elements: &[Element]) -> Vec<Fr> {
        let _span =
            tracing::debug_span!("batch_map_to_scalar_field", len = elements.len()).entered();

        let mut y_inverses: Vec<Fq> = elements
            .iter()
            .map(|e| if e.0.y.is_zero() { Fq::one() } else { e.0.y })
            .collect();
        if batch_inversion(&mut y_inverses).is_err() {
            return elements.iter().map(Element::map_to_scalar_field).collect();
        }

        izip!(elements, y_inverses)
            .map(|(e, y_inv)| {
                if e.0.y.is_zero() {
                    Fr::zero()
                } else {
                    Self::base_to_scalar(&(e.0.x * y_inv))
                }
            })
            .collect()
    }

    fn base_to_scalar(base: &Fq) -> Fr {
        Fr::from_le_bytes_mod_order(&base.to_le_bytes())
    }

    /// The affine `x ‖ y` of the stored representative, each coordinate 32
    /// little-endian bytes.
    pub fn to_bytes_uncompressed(&self) -> [u8; 64] {
        self.0.into_affine().to_bytes_uncompressed()
    }

    /// Reads `x ‖ y`, checking that both coordinates are canonical, that the
    /// point is on the curve and that it lies in the Banderwagon subgroup.
    pub fn from_bytes_uncompressed(bytes: &[u8; 64]) -> Result<Element> {
        let point = EdwardsAffine::from_bytes_uncompressed(bytes)?;
        if !Self::subgroup_check(&point.x) {
            return Err(Error::NotInSubgroup);
        }
        Ok(Element(point.into()))
    }

    /// Reads `x ‖ y` without any validation.
    ///
    /// The caller guarantees the bytes came from
    /// [`Element::to_bytes_uncompressed`].
    pub fn from_bytes_unchecked_uncompressed(bytes: &[u8; 64]) -> Element {
        Element(EdwardsAffine::from_bytes_unchecked(bytes).into())
    }

    /// Returns true iff the stored representative satisfies the curve
    /// equation.
    pub fn is_on_curve(&self) -> bool {
        self.0.is_on_curve()
    }

    /// Returns `2·self`.
    pub fn double(&self) -> Element {
        Element(self.0.double())
    }

    /// Returns `scalar·self`, double-and-add over the scalar bits.
    pub fn scalar_mul(&self, scalar: &Fr) -> Element {
        Element(self.0.mul_bigint(scalar.into_bigint()))
    }
}

impl PartialEq for Element {
    /// Two classes are equal iff `x1·y2 == x2·y1`. The degenerate state
    /// `x = y = 0` is equal to nothing, itself included.
    fn eq(&self, other: &Self) -> bool {
        let x1 = self.0.x;
        let y1 = self.0.y;
        let x2 = other.0.x;
        let y2 = other.0.y;

        if (x1.is_zero() && y1.is_zero()) || (x2.is_zero() && y2.is_zero()) {
            return false;
        }

        x1 * y2 == x2 * y1
    }
}

impl Eq for Element {}

impl Hash for Element {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_bytes().hash(state)
    }
}

impl Debug for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Element(0x")?;
        for byte in self.to_bytes().iter() {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}

impl Default for Element {
    fn default() -> Self {
        Element::zero()
    }
}

impl Neg for Element {
    type Output = Element;

    fn neg(self) -> Element {
        Element(-self.0)
    }
}

impl<'a> Add<&'a Element> for Element {
    type Output = Element;

    fn add(self, rhs: &'a Element) -> Element {
        Element(self.0 + &rhs.0)
    }
}

impl Add<Element> for Element {
    type Output = Element;

    fn add(self, rhs: Element) -> Element {
        self + &rhs
    }
}

impl<'a> AddAssign<&'a Element> for Element {
    fn add_assign(&mut self, rhs: &'a Element) {
        self.0 += &rhs.0;
    }
}

impl AddAssign<Element> for Element {
    fn add_assign(&mut self, rhs: Element) {
        self.0 += &rhs.0;
    }
}

impl<'a> Sub<&'a Element> for Element {
    type Output = Element;

    fn sub(self, rhs: &'a Element) -> Element {
        Element(self.0 - &rhs.0)
    }
}

impl Sub<Element> for Element {
    type Output = Element;

    fn sub(self, rhs: Element) -> Element {
        self - &rhs
    }
}

impl<'a> SubAssign<&'a Element> for Element {
    fn sub_assign(&mut self, rhs: &'a Element) {
        self.0 -= &rhs.0;
    }
}

impl SubAssign<Element> for Element {
    fn sub_assign(&mut self, rhs: Element) {
        self.0 -= &rhs.0;
    }
}

impl Mul<Fr> for Element {
    type Output = Element;

    fn mul(self, rhs: Fr) -> Element {
        self.scalar_mul(&rhs)
    }
}

impl<'a> Mul<&'a Fr> for &'a Element {
    type Output = Element;

    fn mul(self, rhs: &'a Fr) -> Element {
        self.scalar_mul(rhs)
    }
}

impl core::iter::Sum<Element> for Element {
    fn sum<I: Iterator<Item = Element>>(iter: I) -> Element {
        iter.fold(Element::zero(), Add::add)
    }
}

impl<'a> core::iter::Sum<&'a Element> for Element {
    fn sum<I: Iterator<Item = &'a Element>>(iter: I) -> Element {
        iter.fold(Element::zero(), Add::add)
    }
}

impl CanonicalSerialize for Element {
    /// Compressed: the 32-byte canonical encoding. Uncompressed: `x ‖ y`.
    fn serialize_with_mode<W: Write>(
        &self,
        mut writer: W,
        compress: Compress,
    ) -> core::result::Result<(), SerializationError> {
        match compress {
            Compress::Yes => writer.write_all(&self.to_bytes())?,
            Compress::No => writer.write_all(&self.to_bytes_uncompressed())?,
        }
        Ok(())
    }

    fn serialized_size(&self, compress: Compress) -> usize {
        match compress {
            Compress::Yes => Element::COMPRESSED_SIZE,
            Compress::No => Element::UNCOMPRESSED_SIZE,
        }
    }
}

impl Valid for Element {
    fn check(&self) -> core::result::Result<(), SerializationError> {
        let point = self.0.into_affine();
        if point.is_on_curve() && Element::subgroup_check(&point.x) {
            Ok(())
        } else {
            Err(SerializationError::InvalidData)
        }
    }
}

impl CanonicalDeserialize for Element {
    /// The compressed form is always validated. The uncompressed form is
    /// trusted when `validate` is [`Validate::No`].
    fn deserialize_with_mode<R: Read>(
        mut reader: R,
        compress: Compress,
        validate: Validate,
    ) -> core::result::Result<Self, SerializationError> {
        match compress {
            Compress::Yes => {
                let mut bytes = [0u8; Element::COMPRESSED_SIZE];
                reader.read_exact(&mut bytes)?;
                Element::from_bytes(&bytes).map_err(|_| SerializationError::InvalidData)
            },
            Compress::No => {
                let mut bytes = [0u8; Element::UNCOMPRESSED_SIZE];
                reader.read_exact(&mut bytes)?;
                match validate {
                    Validate::Yes => Element::from_bytes_uncompressed(&bytes)
                        .map_err(|_| SerializationError::InvalidData),
                    Validate::No => Ok(Element::from_bytes_unchecked_uncompressed(&bytes)),
                }
            },
        }
    }
}
