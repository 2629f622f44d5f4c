//! Curve point tests.

use bp256_pace::{BigInteger, CurveGroup, CurvePoint, Error, PointEncoding};
use hex_literal::hex;
use proptest::prelude::*;

const POINT1: [u8; 65] = hex!(
    "0435AAD48B06E2B1B10EE09DBCE9C80ABCDDD139F9BDC35EFD7C7832085B87F774
       4A2B7A13149AC71A252DB814214483EBB4EB6635FC375A7361A5D5C2E14DBC8F"
);

const POINT2: [u8; 65] = hex!(
    "04941DDF52912A31313BD2A9E88A10691403D7B5CB810EA3AF2D8393C3EC380D3F
       385F7F3E6CF7B5A7CC0CA7AA9E573FA1849B664F32E417C5A4EA1D10BF5F5B8A"
);

fn decode(bytes: &[u8]) -> Result<CurvePoint, Error> {
    CurvePoint::decode(bytes, CurveGroup::brainpool_p256r1())
}

fn uncompressed(point: &CurvePoint) -> Vec<u8> {
    point.encode(PointEncoding::Uncompressed).unwrap()
}

#[test]
fn add_two_points() {
    let p1 = decode(&POINT1).unwrap();
    let p2 = decode(&POINT2).unwrap();

    let sum = p1.add(&p2).unwrap();
    assert_eq!(
        uncompressed(&sum),
        hex!(
            "047F6F0BB04F8CE6E67B93DB8B61929CB211C0FEF9602D9CAC431B0DFF081F89BC
               3BE2DD1F03BB1D46947CDB2F11F77DDC9E9C7211502334A3450591EC57900A86"
        )
    );
    assert_eq!(p2.add(&p1), Ok(sum));
}

#[test]
fn multiply_generator() {
    let scalar = BigInteger::from_be_slice(&hex!("6B4C371D20A352D570183879FE1EEB63")).unwrap();
    let point = CurvePoint::multiply_generator(&scalar);
    assert_eq!(
        uncompressed(&point),
        hex!(
            "04821EADCCD4EFAB8D2C6608ED4E0303DC5FF1074D688EA4A7D3BD6B9D2B20D5C8
               7965BF640347DE95E7CC467BA230F0ACEDF507068692A2F415C4DC0ABA69CFFB"
        )
    );
}

#[test]
fn multiply_point_by_scalar_wider_than_order() {
    // 33 bytes, larger than n
    let scalar = BigInteger::from_be_slice(&hex!(
        "0162AD399C4603B47A878BFAFB81CA17317D6649FEA0B3FE079329514BC6319FE4"
    ))
    .unwrap();
    let point = decode(&hex!(
        "04662553C7EBD0466473FB3AF925EC89CE4F4EEB89FFB8AECA4CB1BD6B55460CBB
           A6DF467A24DF394AAA230B7B630E35B9E89350F3E78D24E40F91F29B8E16D47C"
    ))
    .unwrap();

    assert_eq!(
        uncompressed(&point.multiply(&scalar).unwrap()),
        hex!(
            "044241F43161DB2400704509015D66EDB85FA8236157C4D11BDB4CA258000434B9
               8FE93ABCD6F172B1678933D7CC7B17C698664EF36AA527E158979C1A4D3B191B"
        )
    );
}

#[test]
fn compressed_round_trip() {
    let point = decode(&POINT1).unwrap();
    let compressed = point.encode(PointEncoding::Compressed).unwrap();
    assert_eq!(compressed.len(), 33);
    assert_eq!(&compressed[1..], &POINT1[1..33]);
    assert_eq!(decode(&compressed).unwrap(), point);
}

#[test]
fn decode_rejects_malformed_encodings() {
    // identity and compact tags
    assert_eq!(decode(&[0x00]), Err(Error::InvalidPointEncoding));
    let mut compact = [0u8; 33];
    compact[0] = 0x05;
    compact[1..].copy_from_slice(&POINT1[1..33]);
    assert_eq!(decode(&compact), Err(Error::InvalidPointEncoding));

    // truncated and empty input
    assert_eq!(decode(&POINT1[..64]), Err(Error::InvalidPointEncoding));
    assert_eq!(decode(&[]), Err(Error::InvalidPointEncoding));

    // x = p is not a field element
    let x_is_modulus = hex!("02a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377");
    assert_eq!(decode(&x_is_modulus), Err(Error::InvalidPointEncoding));

    // x = 4 has no matching y
    let mut no_root = [0u8; 33];
    no_root[0] = 0x02;
    no_root[32] = 0x04;
    assert_eq!(decode(&no_root), Err(Error::InvalidPointEncoding));
}

#[test]
fn validate_on_curve() {
    let mut off_curve = POINT1;
    off_curve[64] ^= 0x80;

    let point = decode(&off_curve).unwrap();
    assert!(!point.is_on_curve());
    assert_eq!(point.validate_on_curve(), Err(Error::PointNotOnCurve));

    let point = decode(&POINT1).unwrap();
    assert!(point.validate_on_curve().is_ok());
}

#[test]
fn affine_coordinates() {
    let point = decode(&POINT1).unwrap();
    let (x, y) = point.affine_coordinates().unwrap();
    assert_eq!(x.to_be_bytes_padded(32).unwrap(), &POINT1[1..33]);
    assert_eq!(y.to_be_bytes_padded(32).unwrap(), &POINT1[33..]);
    assert!(CurveGroup::brainpool_p256r1().is_on_curve(&x, &y));
}

prop_compose! {
    fn scalar()(bytes in any::<[u8; 32]>()) -> BigInteger {
        BigInteger::from_be_slice(&bytes).unwrap()
    }
}

proptest! {
    #[test]
    fn multiplication_distributes_over_addition(a in any::<u64>(), b in any::<u64>()) {
        let g = CurvePoint::generator();
        let sum = u128::from(a) + u128::from(b);
        let sum = BigInteger::from_be_slice(&sum.to_be_bytes()).unwrap();

        let ga = g.multiply(&BigInteger::from(a)).unwrap();
        let gb = g.multiply(&BigInteger::from(b)).unwrap();
        prop_assert_eq!(g.multiply(&sum), ga.add(&gb));
    }

    #[test]
    fn scalar_multiplication_commutes(a in scalar(), b in scalar()) {
        let g = CurvePoint::generator();
        let gab = g.multiply(&a).and_then(|p| p.multiply(&b));
        let gba = g.multiply(&b).and_then(|p| p.multiply(&a));
        prop_assert_eq!(gab, gba);
    }

    #[test]
    fn encodings_round_trip(k in scalar()) {
        let point = CurvePoint::multiply_generator(&k);
        prop_assume!(!point.is_identity());

        for encoding in [PointEncoding::Compressed, PointEncoding::Uncompressed] {
            let bytes = point.encode(encoding).unwrap();
            prop_assert_eq!(decode(&bytes).unwrap(), point);
        }
    }
}
