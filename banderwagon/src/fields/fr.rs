use verkle_ff::{BigInteger256, Fp256, FpConfig, SqrtPrecomputation};

/// The scalar field of Banderwagon: integers modulo the prime order
/// `0x1cfb69d4ca675f520cce760202687600ff8f87007419047174fd06b52876e7e1`
/// of the Bandersnatch prime-order subgroup.
pub type Fr = Fp256<FrConfig>;

/// Constants of [`Fr`]. Square roots use Tonelli–Shanks.
pub struct FrConfig;

impl FpConfig for FrConfig {
    const MODULUS: BigInteger256 = BigInteger256::new([
        0x74fd06b52876e7e1,
        0xff8f870074190471,
        0x0cce760202687600,
        0x1cfb69d4ca675f52,
    ]);

    const MODULUS_BITS: u32 = 253;

    const R: BigInteger256 = BigInteger256::new([
        0x5817ca56bc48c0f8,
        0x0383c7fc5f37dc74,
        0x998c4fefecbc4ff8,
        0x1824b159acc5056f,
    ]);

    const R2: BigInteger256 = BigInteger256::new([
        0xdbb4f5d658db47cb,
        0x40fa7ca27fecb938,
        0xaa9e6daec0055cea,
        0x0ae793ddb14aec7d,
    ]);

    const INV: u64 = 0xf19f22295cc063df;

    const TWO_ADICITY: u32 = 5;

    const TRACE: BigInteger256 = BigInteger256::new([
        0x8ba7e835a943b73f,
        0x07fc7c3803a0c823,
        0x906673b0101343b0,
        0x00e7db4ea6533afa,
    ]);

    const TRACE_MINUS_ONE_DIV_TWO: BigInteger256 = BigInteger256::new([
        0xc5d3f41ad4a1db9f,
        0x03fe3e1c01d06411,
        0x483339d80809a1d8,
        0x0073eda753299d7d,
    ]);

    const MODULUS_MINUS_ONE_DIV_TWO: BigInteger256 = BigInteger256::new([
        0xba7e835a943b73f0,
        0x7fc7c3803a0c8238,
        0x06673b0101343b00,
        0x0e7db4ea6533afa9,
    ]);

    /// 7
    const QUADRATIC_NONRESIDUE: Fr = Fp256::new_unchecked(BigInteger256::new([
        0x1fb566d55baabf63,
        0x1accd4e45609f0f7,
        0xf2cde1856d1be1c3,
        0x1817c84bc55e4972,
    ]));

    const TWO_ADIC_ROOT_OF_UNITY: Fr = Fp256::new_unchecked(BigInteger256::new([
        0x4b263b9a8d79c573,
        0xeadb3d0a007af1fd,
        0xa54c8a4668832589,
        0x0610860c4254fb9d,
    ]));

    const SQRT_PRECOMP: SqrtPrecomputation<Fr> = SqrtPrecomputation::TonelliShanks;
}
