use crate::{
    curves::twisted_edwards::{Affine, Projective, TECurveConfig},
    fields::{Fq, Fr},
};
use verkle_ff::{BigInteger256, Field, Fp256};

/// Bandersnatch: `-5·x² + y² = 1 + d·x²·y²` over [`Fq`], with a prime
/// subgroup of order `|Fr|` and cofactor 4.
pub struct BandersnatchConfig;

/// Affine Bandersnatch point.
pub type EdwardsAffine = Affine<BandersnatchConfig>;

/// Extended-coordinate Bandersnatch point.
pub type EdwardsProjective = Projective<BandersnatchConfig>;

const fn mont(limbs: [u64; 4]) -> Fq {
    Fp256::new_unchecked(BigInteger256::new(limbs))
}

impl TECurveConfig for BandersnatchConfig {
    type BaseField = Fq;
    type ScalarField = Fr;

    /// -5
    const COEFF_A: Fq = mont([
        0xfffffff40000000c,
        0xece3b023ffec4ff3,
        0x66b620607396203f,
        0x6f23d7e5f361df62,
    ]);

    /// 0x6389c12633c267cbc66e3bf86be3b6d8cb66677177e54f92b369f2f5188d58e7
    const COEFF_D: Fq = mont([
        0xa8dced1b47a2c730,
        0x381c065aad3cccc7,
        0x53ff52e1188351f8,
        0x362e8d63990fe940,
    ]);

    /// x = 0x29c132cc2c0b34c5743711777bbe42f32b79c022ad998465e1e71866a252ae18
    /// y = 0x2a6c669eda123e0f157d8b50badcd586358cad81eee464605e3167b6cc974166
    const GENERATOR: EdwardsAffine = Affine::new_unchecked(
        mont([
            0xec2627e1e7ab47f5,
            0x3e63de484f01aa9c,
            0xfe0f5c3b53946dc4,
            0x2d71920baeb2cfcd,
        ]),
        mont([
            0x4e30593e1895bd34,
            0x156d738f32afbe4b,
            0x45ef0b1ccdeb75f4,
            0x6a7cca0037d2e71f,
        ]),
    );

    #[inline(always)]
    fn mul_by_a(elem: &Fq) -> Fq {
        let mut five = elem.double();
        five.double_in_place();
        -(five + elem)
    }
}
