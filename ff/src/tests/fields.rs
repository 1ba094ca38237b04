use crate::{
    batch_inverse, batch_inversion, BigInteger256, Field, FieldError, Fp256, FpConfig,
    LegendreSymbol, PrimeField, SqrtPrecomputation, SquareRootField,
};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use ark_std::{rand::Rng, test_rng, vec::Vec, One, UniformRand, Zero};

pub const ITERATIONS: u32 = 40;

/// The 255-bit prime `0x73eda753...00000001` with Tonelli–Shanks roots.
pub struct TestConfig;

pub type TestField = Fp256<TestConfig>;

impl FpConfig for TestConfig {
    const MODULUS: BigInteger256 = BigInteger256::new([
        0xffffffff00000001,
        0x53bda402fffe5bfe,
        0x3339d80809a1d805,
        0x73eda753299d7d48,
    ]);
    const MODULUS_BITS: u32 = 255;
    const R: BigInteger256 = BigInteger256::new([
        0x00000001fffffffe,
        0x5884b7fa00034802,
        0x998c4fefecbc4ff5,
        0x1824b159acc5056f,
    ]);
    const R2: BigInteger256 = BigInteger256::new([
        0xc999e990f3f29c6d,
        0x2b6cedcb87925c23,
        0x05d314967254398f,
        0x0748d9d99f59ff11,
    ]);
    const INV: u64 = 0xfffffffeffffffff;
    const TWO_ADICITY: u32 = 32;
    const TRACE: BigInteger256 = BigInteger256::new([
        0xfffe5bfeffffffff,
        0x09a1d80553bda402,
        0x299d7d483339d808,
        0x0000000073eda753,
    ]);
    const TRACE_MINUS_ONE_DIV_TWO: BigInteger256 = BigInteger256::new([
        0x7fff2dff7fffffff,
        0x04d0ec02a9ded201,
        0x94cebea4199cec04,
        0x0000000039f6d3a9,
    ]);
    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger256 = BigInteger256::new([
        0x7fffffff80000000,
        0xa9ded2017fff2dff,
        0x199cec0404d0ec02,
        0x39f6d3a994cebea4,
    ]);
    // 5
    const QUADRATIC_NONRESIDUE: TestField = Fp256::new_unchecked(BigInteger256::new([
        0x0000000afffffff5,
        0x66d9f3df00120c0b,
        0xcc83b7a7960bb7c5,
        0x04c9cf6d363b9de5,
    ]));
    const TWO_ADIC_ROOT_OF_UNITY: TestField = Fp256::new_unchecked(BigInteger256::new([
        0x9cab6d5c0c17f47c,
        0x1ce1e93dfd4b71e5,
        0x0d6db230471dd505,
        0x3f0ee990743a3b6a,
    ]));
    const SQRT_PRECOMP: SqrtPrecomputation<TestField> = SqrtPrecomputation::TonelliShanks;
}

fn random_negation_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let mut b = -a;
        b += &a;

        assert!(b.is_zero());
    }
}

fn random_addition_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);

        let t0 = (a + &b) + &c; // (a + b) + c

        let t1 = (a + &c) + &b; // (a + c) + b

        let t2 = (b + &c) + &a; // (b + c) + a

        assert_eq!(t0, t1);
        assert_eq!(t1, t2);
    }
}

fn random_subtraction_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let b = F::rand(rng);

        let t0 = a - &b; // (a - b)

        let mut t1 = b; // (b - a)
        t1 -= &a;

        let mut t2 = t0; // (a - b) + (b - a) = 0
        t2 += &t1;

        assert!(t2.is_zero());
    }
}

fn random_multiplication_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);

        let mut t0 = a; // (a * b) * c
        t0 *= &b;
        t0 *= &c;

        let mut t1 = a; // (a * c) * b
        t1 *= &c;
        t1 *= &b;

        let mut t2 = b; // (b * c) * a
        t2 *= &c;
        t2 *= &a;

        assert_eq!(t0, t1);
        assert_eq!(t1, t2);
    }
}

fn random_inversion_tests<F: Field, R: Rng>(rng: &mut R) {
    assert!(F::zero().inverse().is_none());
    assert_eq!(F::one().checked_div(&F::zero()), Err(FieldError::NoInverse));

    for _ in 0..ITERATIONS {
        let mut a = F::rand(rng);
        let b = a.inverse().unwrap(); // probablistically nonzero
        a *= &b;

        assert_eq!(a, F::one());
    }
}

fn random_doubling_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let mut a = F::rand(rng);
        let mut b = a;
        a += &b;
        b.double_in_place();

        assert_eq!(a, b);
    }
}

fn random_squaring_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        let mut a = F::rand(rng);
        let mut b = a;
        a *= &b;
        b.square_in_place();

        assert_eq!(a, b);
    }
}

fn random_expansion_tests<F: Field, R: Rng>(rng: &mut R) {
    for _ in 0..ITERATIONS {
        // Compare (a + b)c and (a*c + b*c)
        let a = F::rand(rng);
        let b = F::rand(rng);
        let c = F::rand(rng);

        let t0 = (a + &b) * &c;
        let t2 = a * &c + &(b * &c);

        assert_eq!(t0, t2);
    }
}

pub fn random_field_tests<F: Field>() {
    let mut rng = test_rng();

    random_negation_tests::<F, _>(&mut rng);
    random_addition_tests::<F, _>(&mut rng);
    random_subtraction_tests::<F, _>(&mut rng);
    random_multiplication_tests::<F, _>(&mut rng);
    random_inversion_tests::<F, _>(&mut rng);
    random_doubling_tests::<F, _>(&mut rng);
    random_squaring_tests::<F, _>(&mut rng);
    random_expansion_tests::<F, _>(&mut rng);

    assert!(F::zero().is_zero());
    assert!((-F::zero()).is_zero());
    assert!(F::one().is_one());

    // Exponents are read least significant bit first.
    let a = F::rand(&mut rng);
    assert_eq!(a.pow([0u64]), F::one());
    assert_eq!(a.pow([1u64]), a);
    assert_eq!(a.pow([6u64]), a.square() * a.square() * a.square());
    assert_eq!(a.pow([0u64, 1]), {
        let mut b = a;
        for _ in 0..64 {
            b.square_in_place();
        }
        b
    });
}

pub fn random_sqrt_tests<F: SquareRootField>() {
    let mut rng = test_rng();

    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        let b = a.square();
        assert_eq!(b.legendre(), LegendreSymbol::QuadraticResidue);

        let b = b.sqrt().unwrap();
        assert!(a == b || a == -b);
    }

    let mut c = F::one();
    for _ in 0..ITERATIONS {
        let mut b = c.square();
        assert_eq!(b.legendre(), LegendreSymbol::QuadraticResidue);

        b = b.sqrt().unwrap();

        if b != c {
            b = -b;
        }

        assert_eq!(b, c);

        c += &F::one();
    }

    assert_eq!(F::zero().legendre(), LegendreSymbol::Zero);
    assert!(F::zero().sqrt().is_none());
    assert_eq!(F::zero().try_sqrt(), Err(FieldError::NoSquareRoot));
}

pub fn primefield_test<F: PrimeField>() {
    let one = F::one();
    assert_eq!(F::from(one.into_bigint()), one);
    assert_eq!(one.into_bigint(), BigInteger256::from(1u64));

    let mut minus_one = F::MODULUS;
    minus_one.sub_noborrow(&BigInteger256::from(1u64));
    assert_eq!(F::from_bigint(minus_one), -one);
    assert_eq!(F::from_bigint(F::MODULUS), F::zero());

    assert_eq!(F::from_le_bytes(&F::MODULUS.to_bytes_le()), Err(FieldError::NonCanonicalEncoding));
    assert_eq!(F::from_be_bytes(&F::MODULUS.to_bytes_be()), Err(FieldError::NonCanonicalEncoding));

    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a = F::rand(&mut rng);
        assert_eq!(F::from_le_bytes(&a.to_le_bytes()), Ok(a));
        assert_eq!(F::from_be_bytes(&a.to_be_bytes()), Ok(a));
        assert_eq!(F::from_le_bytes_mod_order(&a.to_le_bytes()), a);

        // Exactly one of `a` and `-a` is lexicographically largest.
        if !a.is_zero() {
            assert_ne!(a.lexicographically_largest(), (-a).lexicographically_largest());
        }
    }
    assert!(!F::zero().lexicographically_largest());
    assert!(!F::one().lexicographically_largest());
    assert!((-F::one()).lexicographically_largest());
}

#[test]
fn test_field() {
    random_field_tests::<TestField>();
}

#[test]
fn test_sqrt() {
    random_sqrt_tests::<TestField>();

    let qnr = TestConfig::QUADRATIC_NONRESIDUE;
    assert_eq!(qnr, TestField::from(5u64));
    assert_eq!(qnr.legendre(), LegendreSymbol::QuadraticNonResidue);
    assert!(qnr.sqrt().is_none());
}

#[test]
fn test_prime_field() {
    primefield_test::<TestField>();
}

#[test]
fn test_constants_are_consistent() {
    let root = TestConfig::TWO_ADIC_ROOT_OF_UNITY;
    assert_eq!(TestConfig::QUADRATIC_NONRESIDUE.pow(TestConfig::TRACE), root);

    let mut order = root;
    for _ in 0..TestConfig::TWO_ADICITY - 1 {
        order.square_in_place();
    }
    assert_eq!(order, -TestField::one());
    order.square_in_place();
    assert!(order.is_one());

    assert_eq!(TestField::from(1u64), TestField::one());
    assert_eq!(TestField::from(true), TestField::one());
    assert!(TestField::from(false).is_zero());
}

#[test]
fn test_from_le_bytes_mod_order_reduces() {
    // 2^256 - 1 reduces to 2^256 - 1 - 2 * M.
    let all_ones = [0xffu8; 32];
    let mut expected = BigInteger256::new([u64::MAX; 4]);
    let mut double_modulus = TestConfig::MODULUS;
    double_modulus.mul2();
    expected.sub_noborrow(&double_modulus);
    assert_eq!(TestField::from_le_bytes_mod_order(&all_ones).into_bigint(), expected);

    // Inputs longer than 32 bytes are accepted.
    let mut long = [0u8; 40];
    long[32] = 1;
    let two_to_256 = TestField::from(2u64).pow([256u64]);
    assert_eq!(TestField::from_le_bytes_mod_order(&long), two_to_256);
    assert!(TestField::from_le_bytes_mod_order(&[]).is_zero());
}

#[test]
fn test_batch_inversion() {
    let mut rng = test_rng();
    let mut elements: Vec<TestField> = (0..37).map(|_| TestField::rand(&mut rng)).collect();
    let original = elements.clone();

    batch_inversion(&mut elements).unwrap();
    for (inverse, element) in elements.iter().zip(&original) {
        assert_eq!(*inverse * element, TestField::one());
    }
    assert_eq!(batch_inverse(&original).unwrap(), elements);

    let mut empty: Vec<TestField> = Vec::new();
    batch_inversion(&mut empty).unwrap();
}

#[test]
fn test_batch_inversion_rejects_zero() {
    let mut rng = test_rng();
    let mut elements: Vec<TestField> = (0..8).map(|_| TestField::rand(&mut rng)).collect();
    elements[5] = TestField::zero();
    let original = elements.clone();

    assert_eq!(batch_inversion(&mut elements), Err(FieldError::NoInverse));
    assert_eq!(elements, original);
}

#[test]
fn test_sum_and_product() {
    let values: Vec<TestField> = (1u64..=5).map(TestField::from).collect();
    assert_eq!(values.iter().sum::<TestField>(), TestField::from(15u64));
    assert_eq!(values.iter().product::<TestField>(), TestField::from(120u64));
    assert_eq!(values.into_iter().sum::<TestField>(), TestField::from(15u64));
}

#[test]
fn test_ordering_uses_canonical_value() {
    let two = TestField::from(2u64);
    let three = TestField::from(3u64);
    assert!(two < three);
    assert!(-TestField::one() > three);
}

#[test]
fn test_display() {
    let seven = TestField::from(7u64);
    assert_eq!(
        format!("{}", seven),
        "Fp256(0x0000000000000000000000000000000000000000000000000000000000000007)"
    );
    assert_eq!(format!("{:?}", seven), format!("{}", seven));
}

#[test]
fn test_serialization() {
    let mut rng = test_rng();
    let a = TestField::rand(&mut rng);

    let mut bytes = Vec::new();
    a.serialize_compressed(&mut bytes).unwrap();
    assert_eq!(bytes.len(), 32);
    assert_eq!(bytes, a.to_le_bytes().to_vec());
    assert_eq!(TestField::deserialize_compressed(&bytes[..]).unwrap(), a);

    let modulus = TestConfig::MODULUS.to_bytes_le();
    assert!(TestField::deserialize_compressed(&modulus[..]).is_err());
    assert!(TestField::deserialize_compressed_unchecked(&modulus[..])
        .unwrap()
        .is_zero());
    assert!(TestField::deserialize_compressed(&bytes[..31]).is_err());
}

/// Cross-checks against an independent implementation of the same prime.
mod differential {
    use super::*;
    use ark_ff::{BigInteger as _, PrimeField as _};
    use ark_test_curves::bls12_381::Fr as Reference;

    fn to_reference(a: &TestField) -> Reference {
        Reference::from_le_bytes_mod_order(&a.to_le_bytes())
    }

    fn from_reference(a: &Reference) -> TestField {
        let bytes: [u8; 32] = a.into_bigint().to_bytes_le().try_into().unwrap();
        <TestField as PrimeField>::from_le_bytes(&bytes).unwrap()
    }

    #[test]
    fn arithmetic_matches_reference() {
        let mut rng = test_rng();
        for _ in 0..ITERATIONS {
            let a = TestField::rand(&mut rng);
            let b = TestField::rand(&mut rng);
            let (ra, rb) = (to_reference(&a), to_reference(&b));

            assert_eq!(from_reference(&ra), a);
            assert_eq!(from_reference(&(ra + rb)), a + b);
            assert_eq!(from_reference(&(ra - rb)), a - b);
            assert_eq!(from_reference(&(ra * rb)), a * b);
            assert_eq!(from_reference(&(-ra)), -a);
            assert_eq!(
                from_reference(&ark_ff::Field::inverse(&ra).unwrap()),
                a.inverse().unwrap()
            );
        }
    }

    #[test]
    fn square_roots_match_reference() {
        let mut rng = test_rng();
        for _ in 0..ITERATIONS {
            let a = TestField::rand(&mut rng);
            let ours = a.sqrt();
            let theirs = ark_ff::Field::sqrt(&to_reference(&a));
            assert_eq!(ours.is_some(), theirs.is_some());
            if let (Some(ours), Some(theirs)) = (ours, theirs) {
                let theirs = from_reference(&theirs);
                assert!(ours == theirs || ours == -theirs);
            }
        }
    }
}

#[test]
fn test_from_le_bytes_unchecked() {
    let mut rng = test_rng();
    for _ in 0..ITERATIONS {
        let a = TestField::rand(&mut rng);
        assert_eq!(TestField::from_le_bytes_unchecked(&a.to_le_bytes()), a);
    }
    assert!(TestField::from_le_bytes_unchecked(&[0u8; 32]).is_zero());
}
