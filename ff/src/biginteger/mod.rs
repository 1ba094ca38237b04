use ark_std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    rand::{
        distributions::{Distribution, Standard},
        Rng,
    },
    vec::Vec,
};

/// A 256-bit unsigned integer stored as four `u64` limbs, least-significant
/// limb first.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
pub struct BigInteger256(pub [u64; 4]);

impl BigInteger256 {
    /// Number of limbs.
    pub const NUM_LIMBS: usize = 4;

    /// Number of bytes in the fixed-width encoding.
    pub const NUM_BYTES: usize = 32;

    /// Creates a big integer from its limbs, least-significant first.
    #[inline]
    pub const fn new(value: [u64; 4]) -> Self {
        BigInteger256(value)
    }

    /// Add another representation to this one, returning the carry bit.
    #[inline]
    pub fn add_nocarry(&mut self, other: &Self) -> bool {
        let mut carry = 0;
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a = arithmetic::adc(*a, *b, &mut carry);
        }
        carry != 0
    }

    /// Subtract another representation from this one, returning the borrow
    /// bit.
    #[inline]
    pub fn sub_noborrow(&mut self, other: &Self) -> bool {
        let mut borrow = 0;
        for (a, b) in self.0.iter_mut().zip(other.0.iter()) {
            *a = arithmetic::sbb(*a, *b, &mut borrow);
        }
        borrow != 0
    }

    /// Performs a leftwise bitshift of this number, effectively multiplying
    /// it by 2. Overflow is ignored.
    #[inline]
    pub fn mul2(&mut self) {
        let mut last = 0;
        for limb in self.0.iter_mut() {
            let tmp = *limb >> 63;
            *limb <<= 1;
            *limb |= last;
            last = tmp;
        }
    }

    /// Performs a rightwise bitshift of this number, effectively dividing
    /// it by 2.
    #[inline]
    pub fn div2(&mut self) {
        let mut t = 0;
        for limb in self.0.iter_mut().rev() {
            let t2 = *limb << 63;
            *limb >>= 1;
            *limb |= t;
            t = t2;
        }
    }

    /// Returns true iff this number is odd.
    #[inline]
    pub fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// Returns true iff this number is even.
    #[inline]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Returns true iff this number is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&limb| limb == 0)
    }

    /// Compute the number of bits needed to encode this number.
    pub fn num_bits(&self) -> u32 {
        let mut ret = 256;
        for limb in self.0.iter().rev() {
            let leading = limb.leading_zeros();
            ret -= leading;
            if leading != 64 {
                break;
            }
        }
        ret
    }

    /// Compute the `i`-th bit of `self`.
    #[inline]
    pub fn get_bit(&self, i: usize) -> bool {
        if i >= 256 {
            false
        } else {
            (self.0[i / 64] >> (i % 64)) & 1 == 1
        }
    }

    /// Little-endian byte encoding.
    pub fn to_bytes_le(&self) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        for (chunk, limb) in bytes.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&limb.to_le_bytes());
        }
        bytes
    }

    /// Big-endian byte encoding.
    pub fn to_bytes_be(&self) -> [u8; 32] {
        let mut bytes = self.to_bytes_le();
        bytes.reverse();
        bytes
    }

    /// Reads a little-endian byte encoding.
    pub fn from_bytes_le(bytes: &[u8; 32]) -> Self {
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(buf);
        }
        BigInteger256(limbs)
    }

    /// Reads a big-endian byte encoding.
    pub fn from_bytes_be(bytes: &[u8; 32]) -> Self {
        let mut le = *bytes;
        le.reverse();
        Self::from_bytes_le(&le)
    }

    /// Returns the bit representation in a big endian boolean vector,
    /// without leading zeros.
    pub fn to_bits_be(&self) -> Vec<bool> {
        crate::fields::BitIteratorBE::without_leading_zeros(self.0).collect()
    }
}

impl Ord for BigInteger256 {
    #[inline]
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        for (a, b) in self.0.iter().rev().zip(other.0.iter().rev()) {
            match a.cmp(b) {
                core::cmp::Ordering::Equal => continue,
                order => return order,
            }
        }
        core::cmp::Ordering::Equal
    }
}

impl PartialOrd for BigInteger256 {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl AsRef<[u64]> for BigInteger256 {
    #[inline]
    fn as_ref(&self) -> &[u64] {
        &self.0
    }
}

impl AsMut<[u64]> for BigInteger256 {
    #[inline]
    fn as_mut(&mut self) -> &mut [u64] {
        &mut self.0
    }
}

impl From<u64> for BigInteger256 {
    #[inline]
    fn from(val: u64) -> BigInteger256 {
        BigInteger256([val, 0, 0, 0])
    }
}

impl From<u128> for BigInteger256 {
    #[inline]
    fn from(val: u128) -> BigInteger256 {
        BigInteger256([val as u64, (val >> 64) as u64, 0, 0])
    }
}

impl Display for BigInteger256 {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "0x")?;
        for limb in self.0.iter().rev() {
            write!(f, "{:016x}", limb)?;
        }
        Ok(())
    }
}

impl Distribution<BigInteger256> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> BigInteger256 {
        BigInteger256([rng.gen(), rng.gen(), rng.gen(), rng.gen()])
    }
}

/// Single-limb carry/borrow primitives shared by the integer and the
/// Montgomery routines.
pub mod arithmetic {
    /// Calculate a + b + carry, returning the sum and modifying the
    /// carry value.
    #[inline(always)]
    pub fn adc(a: u64, b: u64, carry: &mut u64) -> u64 {
        let tmp = u128::from(a) + u128::from(b) + u128::from(*carry);

        *carry = (tmp >> 64) as u64;

        tmp as u64
    }

    /// Calculate a - b - borrow, returning the result and modifying
    /// the borrow value.
    #[inline(always)]
    pub fn sbb(a: u64, b: u64, borrow: &mut u64) -> u64 {
        let tmp = (1u128 << 64) + u128::from(a) - u128::from(b) - u128::from(*borrow);

        *borrow = if tmp >> 64 == 0 { 1 } else { 0 };

        tmp as u64
    }

    /// Calculate a + (b * c) + carry, returning the least significant digit
    /// and setting carry to the most significant digit.
    #[inline(always)]
    pub fn mac_with_carry(a: u64, b: u64, c: u64, carry: &mut u64) -> u64 {
        let tmp = (u128::from(a)) + u128::from(b) * u128::from(c) + u128::from(*carry);

        *carry = (tmp >> 64) as u64;

        tmp as u64
    }

    /// Calculate a + (b * c), returning the least significant digit and
    /// setting carry to the most significant digit.
    #[inline(always)]
    pub fn mac(a: u64, b: u64, c: u64, carry: &mut u64) -> u64 {
        let tmp = (u128::from(a)) + u128::from(b) * u128::from(c);

        *carry = (tmp >> 64) as u64;

        tmp as u64
    }

    /// Like [`mac`], discarding the low digit.
    #[inline(always)]
    pub fn mac_discard(a: u64, b: u64, c: u64, carry: &mut u64) {
        let tmp = (u128::from(a)) + u128::from(b) * u128::from(c);

        *carry = (tmp >> 64) as u64;
    }
}
