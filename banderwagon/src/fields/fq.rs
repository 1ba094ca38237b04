use verkle_ff::{BigInteger256, Fp256, FpConfig, SqrtPrecomputation};

/// The base field of Bandersnatch, whose modulus is the BLS12-381 scalar
/// field order
/// `0x73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001`.
pub type Fq = Fp256<FqConfig>;

/// Constants of [`Fq`]. Square roots use the dyadic table below.
pub struct FqConfig;

const fn mont(limbs: [u64; 4]) -> Fq {
    Fp256::new_unchecked(BigInteger256::new(limbs))
}

/// `g^(-2^i)` for `g = 5^T`, the generator of the order-`2^32` subgroup.
const INVERSE_ROOT_POWERS: [Fq; 32] = [
    mont([
        0x55a9e082b3082d19,
        0x082f90b2c7dc4a13,
        0x76ce3accc76b052c,
        0x15c39d956e54185d,
    ]),
    mont([
        0xb1bb81b105ddb4b8,
        0x98ffbb064a762df0,
        0x726e959bc5590209,
        0x0db2facb47a5e6aa,
    ]),
    mont([
        0x88291cf6081b0db0,
        0x8dea521a961782b0,
        0xbf29568b5485c90c,
        0x0abe180948e86a89,
    ]),
    mont([
        0xdcd93b992613f73a,
        0x6212ff4d44750420,
        0x8b1e1dbeeea2743e,
        0x044eea5472cee363,
    ]),
    mont([
        0x201b9cb747b4cf95,
        0x29d88f4d3fbf7eaf,
        0x11d4125098d1d90f,
        0x60a706fc2d1c9ab1,
    ]),
    mont([
        0x86f31709a3f43bed,
        0x2f5b9c7b4ccd4f67,
        0x41854529cc4a9973,
        0x2ffc44e62160f101,
    ]),
    mont([
        0x86e240fbd6e3fc85,
        0xa2d42ab6bc189a0d,
        0xaa8dde446719effb,
        0x38d2f1fe98c324f1,
    ]),
    mont([
        0x97f5727ff534b73a,
        0x156bd8f709ce9952,
        0x0b41e51bc3633e65,
        0x65cac7631eb7a084,
    ]),
    mont([
        0xe33995ff4e92c1ec,
        0xa49952dcd12f19f6,
        0xdf34be52ae6eb8f4,
        0x501c905626e9946a,
    ]),
    mont([
        0x43c1a13f4a334052,
        0xff9467cf6339520e,
        0x995f7d0703e6668a,
        0x6136c02247b21eff,
    ]),
    mont([
        0xa4bac6fa0906d927,
        0xdfa9fc710432b64f,
        0xcecdd727e1e4ee0a,
        0x44a704fb4307b7e3,
    ]),
    mont([
        0xc050b27d161eb4c9,
        0x1f700f8588f98de4,
        0xa9815c49b4f13e8c,
        0x1ad0db8f5a22fd07,
    ]),
    mont([
        0x1dc95eb34a124bd7,
        0x0dbb1b8f7f93bb11,
        0x6a0b2eaf1f325401,
        0x4c78123a76847cd0,
    ]),
    mont([
        0xb7d386bcd5a5c12f,
        0xb71e298500942045,
        0x61ef8af23513d465,
        0x2d243daf841ef263,
    ]),
    mont([
        0x6a139da3b0e7a7bf,
        0x48f1eb5f7e784714,
        0x22d188dd1dbc81ec,
        0x0ff8e168e9c50c00,
    ]),
    mont([
        0x90b60b47d840e406,
        0x7f5f5cae203e1cec,
        0xcf7a4f216eb453e9,
        0x56b093bfdaaf6c5a,
    ]),
    mont([
        0x5b898656bf774e86,
        0x74d9af31524b940b,
        0x70759d79c6b5b4e6,
        0x2fa4695b49545e9f,
    ]),
    mont([
        0x1d4ea44eee4b8eb0,
        0x6114d52bd067ebce,
        0xc9a1b845caaf93e0,
        0x18b19a2a0cd95675,
    ]),
    mont([
        0x9962c0ee1b599c43,
        0x003c51920ecd4e41,
        0x58b9723e4c4c2c9b,
        0x39e3a2c8a0cd1927,
    ]),
    mont([
        0xa2ab59c6b95cd766,
        0xd73877c80135e12a,
        0x7b69b2060f1ffd3e,
        0x1024de2a5904b0c8,
    ]),
    mont([
        0x78a61d126692976a,
        0x162f0567274e2ed0,
        0xcc369b42b090c043,
        0x30c55d83e4ccd61f,
    ]),
    mont([
        0x9257d7c5bdf14c0f,
        0x1c01841ad7ba1c35,
        0x11ecd40770d0b05d,
        0x56898dd0b0eb3a4a,
    ]),
    mont([
        0xe51b6d22ba5594e1,
        0x63d1f231102feebe,
        0x8597964f57fd286b,
        0x32d6cd5bd35da1d8,
    ]),
    mont([
        0x13ef4a18991d59ef,
        0xf6df9dd3d020d68e,
        0xe5d9480546452d09,
        0x000907ef89df1ae5,
    ]),
    mont([
        0x4dbd4a39e4ab724b,
        0x26ca2fbf568cf388,
        0x09a10f4fa65d8286,
        0x5d28bf51fe7212f6,
    ]),
    mont([
        0xd4c893d6e5899c40,
        0xa64a3fa481253c1c,
        0xa0991b93d0181586,
        0x222027fcc5ee2507,
    ]),
    mont([
        0xb70ffcf0abba1676,
        0x8347d32c629da795,
        0xd76959934d75a228,
        0x534b0060d2d92016,
    ]),
    mont([
        0xec9c5f7f589ed2e5,
        0x48255f5a7b5b601f,
        0x25459d381992f258,
        0x4d0bbbcf08a48023,
    ]),
    mont([
        0xa04bf387ba3f636b,
        0x53c8088a747340e3,
        0x30fe317c9e22eabd,
        0x25d5b0e3b2a99c18,
    ]),
    mont([
        0x111f98423eb2a8dd,
        0x1f7727846f38b840,
        0xb28758a38e3ca13c,
        0x5974f9f7ed9a48f0,
    ]),
    mont([
        0x0c4fa98a55763050,
        0x4c8ea2c29ff7a200,
        0x649fca48e43b5ddf,
        0x26c0c34dfc43f9d3,
    ]),
    mont([
        0xfffffffd00000003,
        0xfb38ec08fffb13fc,
        0x99ad88181ce5880f,
        0x5bc8f5f97cd877d8,
    ]),
];

impl FpConfig for FqConfig {
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

    /// 5
    const QUADRATIC_NONRESIDUE: Fq = mont([
        0x0000000afffffff5,
        0x66d9f3df00120c0b,
        0xcc83b7a7960bb7c5,
        0x04c9cf6d363b9de5,
    ]);

    const TWO_ADIC_ROOT_OF_UNITY: Fq = mont([
        0x9cab6d5c0c17f47c,
        0x1ce1e93dfd4b71e5,
        0x0d6db230471dd505,
        0x3f0ee990743a3b6a,
    ]);

    const SQRT_PRECOMP: SqrtPrecomputation<Fq> = SqrtPrecomputation::DyadicTable {
        inverse_root_powers: &INVERSE_ROOT_POWERS,
    };
}
