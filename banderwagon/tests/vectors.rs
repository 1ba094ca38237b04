use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use verkle_banderwagon::{msm, EdwardsAffine, EdwardsProjective, Element, Error, Fq, Fr};
use verkle_ff::{Field, FieldError, One, PrimeField, SquareRootField, Zero};

/// `2^i·G` for `i` in `0..16`, encoded.
const DOUBLING_CHAIN: [&str; 16] = [
    "4a2c7486fd924882bf02c6908de395122843e3e05264d7991e18e7985dad51e9",
    "43aa74ef706605705989e8fd38df46873b7eae5921fbed115ac9d937399ce4d5",
    "5e5f550494159f38aa54d2ed7f11a7e93e4968617990445cc93ac8e59808c126",
    "0e7e3748db7c5c999a7bcd93d71d671f1f40090423792266f94cb27ca43fce5c",
    "14ddaa48820cb6523b9ae5fe9fe257cbbd1f3d598a28e670a40da5d1159d864a",
    "6989d1c82b2d05c74b62fb0fbdf8843adae62ff720d370e209a7b84e14548a7d",
    "26b8df6fa414bf348a3dc780ea53b70303ce49f3369212dec6fbe4b349b832bf",
    "37e46072db18f038f2cc7d3d5b5d1374c0eb86ca46f869d6a95fc2fb092c0d35",
    "2c1ce64f26e1c772282a6633fac7ca73067ae820637ce348bb2c8477d228dc7d",
    "297ab0f5a8336a7a4e2657ad7a33a66e360fb6e50812d4be3326fab73d6cee07",
    "5b285811efa7a965bd6ef5632151ebf399115fcc8f5b9b8083415ce533cc39ce",
    "1f939fa2fd457b3effb82b25d3fe8ab965f54015f108f8c09d67e696294ab626",
    "3088dcb4d3f4bacd706487648b239e0be3072ed2059d981fe04ce6525af6f1b8",
    "35fbc386a16d0227ff8673bc3760ad6b11009f749bb82d4facaea67f58fc60ed",
    "00f29b4f3255e318438f0a31e058e4c081085426adb0479f14c64985d0b956e0",
    "3fa4384b2fa0ecc3c0582223602921daaa893a97b64bdf94dcaa504e8b7b9e5f",
];

fn bytes32(hex_str: &str) -> [u8; 32] {
    hex::decode(hex_str).unwrap().try_into().unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[test]
fn generator_doubling_chain() {
    let mut point = Element::generator();
    for expected in DOUBLING_CHAIN.iter() {
        assert_eq!(hex::encode(point.to_bytes()), *expected);

        let decoded = Element::from_bytes(&bytes32(expected)).unwrap();
        assert_eq!(decoded, point);
        assert_eq!(hex::encode(decoded.to_bytes()), *expected);

        point = point.double();
    }
}

#[test]
fn batch_encoding_matches_chain() {
    init_tracing();

    let mut points = Vec::with_capacity(DOUBLING_CHAIN.len());
    let mut point = Element::generator();
    for _ in 0..DOUBLING_CHAIN.len() {
        points.push(point);
        point = point.double();
    }

    let encoded = Element::batch_to_bytes(&points).unwrap();
    for (bytes, expected) in encoded.iter().zip(DOUBLING_CHAIN.iter()) {
        assert_eq!(hex::encode(bytes), *expected);
    }
}

#[test]
fn negation_and_torsion_share_encodings() {
    let g = Element::generator();
    assert_eq!(
        hex::encode((-g).to_bytes()),
        "29c132cc2c0b34c5743711777bbe42f32b79c022ad998465e1e71866a252ae18"
    );

    let t = EdwardsAffine::new(Fq::zero(), -Fq::one()).unwrap();
    let mut shifted = EdwardsProjective::generator();
    shifted.add_assign_mixed(&t);
    assert_ne!(shifted, EdwardsProjective::generator());

    let shifted_bytes = shifted.into_affine().to_bytes_uncompressed();
    let shifted_element = Element::from_bytes_uncompressed(&shifted_bytes).unwrap();
    assert_eq!(shifted_element, g);

    let mut encoded = Vec::new();
    shifted_element.serialize_compressed(&mut encoded).unwrap();
    assert_eq!(hex::encode(&encoded), DOUBLING_CHAIN[0]);
    assert_eq!(Element::deserialize_compressed(&encoded[..]).unwrap(), g);
}

#[test]
fn rejected_encodings() {
    let mut two = [0u8; 32];
    two[31] = 2;
    assert_eq!(Element::from_bytes(&two), Err(Error::NotInSubgroup));

    let mut four = [0u8; 32];
    four[31] = 4;
    assert_eq!(Element::from_bytes(&four), Err(Error::NoYCoordinate));

    let mut one = [0u8; 32];
    one[31] = 1;
    assert!(Element::from_bytes(&one).is_ok());

    let modulus = bytes32("73eda753299d7d483339d80809a1d80553bda402fffe5bfeffffffff00000001");
    assert_eq!(
        Element::from_bytes(&modulus),
        Err(Error::Field(FieldError::NonCanonicalEncoding))
    );
}

#[test]
fn msm_and_scalar_mul_agree() {
    init_tracing();

    let g = Element::generator();
    let five = msm(&[g, g], &[Fr::from(2u64), Fr::from(3u64)]).unwrap();
    assert_eq!(
        hex::encode(five.to_bytes()),
        "68cbece0b8fb55450410cbc058928a567eed293d168faef44bfde25f943aabe0"
    );
    assert_eq!(five, g.scalar_mul(&Fr::from(5u64)));

    let order_minus_one = -Fr::one();
    assert!((g * order_minus_one + g).is_zero());
    assert!(EdwardsProjective::generator()
        .mul_bigint(Fr::MODULUS)
        .is_zero());
}

#[test]
fn map_to_scalar_field_of_generator() {
    let expected =
        Fr::from_be_bytes(&bytes32("142d7739210c67a71b673683cd6e5576635919d308c2c65b3d60a9ae2adee7d1"))
            .unwrap();
    let g = Element::generator();
    assert_eq!(g.map_to_scalar_field(), expected);

    // G + T has both coordinates negated, which leaves x/y unchanged.
    let t = EdwardsAffine::new(Fq::zero(), -Fq::one()).unwrap();
    let mut shifted = EdwardsProjective::generator();
    shifted.add_assign_mixed(&t);
    let shifted = Element::from_bytes_uncompressed(&shifted.into_affine().to_bytes_uncompressed())
        .unwrap();
    assert_eq!(shifted.map_to_scalar_field(), expected);

    // Negation happens in Fq before the reduction into Fr, so it does not
    // commute with the map.
    let g_affine = EdwardsAffine::generator();
    let ratio = g_affine.x * g_affine.y.inverse().unwrap();
    let negated = Fr::from_le_bytes_mod_order(&(-ratio).to_le_bytes());
    assert_eq!((-g).map_to_scalar_field(), negated);
    assert_ne!(negated, -expected);
    assert_eq!(
        Element::batch_map_to_scalar_field(&[g, shifted]),
        vec![expected, expected]
    );
}

#[test]
fn uncompressed_generator() {
    let g = Element::generator();
    let bytes = g.to_bytes_uncompressed();
    assert_eq!(
        hex::encode(bytes),
        "18ae52a26618e7e1658499ad22c0792bf342be7b77113774c5340b2ccc32c129\
         664197ccb667315e6064e4ee81ad8c3586d5dcba508b7d150f3e12da9e666c2a"
    );
    assert_eq!(Element::from_bytes_uncompressed(&bytes), Ok(g));
}

#[test]
fn square_root_of_zero_is_absent() {
    assert!(Fq::zero().sqrt().is_none());
    assert!(Fr::zero().sqrt().is_none());
    assert_eq!(Fq::from(4u64).sqrt().map(|r| r.square()), Some(Fq::from(4u64)));
}
