//! Pure Rust implementation of group operations on brainpoolP256r1.
//!
//! Field and scalar elements are Montgomery-form residues. Points come from
//! [`primeorder`], which uses projective coordinates with the complete
//! addition formulas of Renes, Costello and Batina.

#[macro_use]
mod macros;

pub(crate) mod field;
pub(crate) mod scalar;

use self::{field::FieldElement, scalar::Scalar};
use crate::BrainpoolP256r1;
use elliptic_curve::{CurveArithmetic, PrimeCurveArithmetic};
use primeorder::{PrimeCurveParams, point_arithmetic};

/// Elliptic curve point in affine coordinates.
pub type AffinePoint = primeorder::AffinePoint<BrainpoolP256r1>;

/// Elliptic curve point in projective coordinates.
pub type ProjectivePoint = primeorder::ProjectivePoint<BrainpoolP256r1>;

/// 𝒂-coefficient of the curve equation `y² = x³ + ax + b`.
pub(crate) const EQUATION_A: FieldElement =
    FieldElement::from_hex("7d5a0975fc2c3057eef67530417affe7fb8055c126dc5c6ce94a4b44f330b5d9");

/// 𝒃-coefficient of the curve equation.
pub(crate) const EQUATION_B: FieldElement =
    FieldElement::from_hex("26dc5c6ce94a4b44f330b5d9bbd77cbf958416295cf7e1ce6bccdc18ff8c07b6");

/// Affine coordinates of the base point G.
pub(crate) const GENERATOR: (FieldElement, FieldElement) = (
    FieldElement::from_hex("8bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262"),
    FieldElement::from_hex("547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997"),
);

impl CurveArithmetic for BrainpoolP256r1 {
    type AffinePoint = AffinePoint;
    type ProjectivePoint = ProjectivePoint;
    type Scalar = Scalar;
}

impl PrimeCurveArithmetic for BrainpoolP256r1 {
    type CurveGroup = ProjectivePoint;
}

/// Domain parameters from RFC 5639 section 3.4.
impl PrimeCurveParams for BrainpoolP256r1 {
    type FieldElement = FieldElement;
    type PointArithmetic = point_arithmetic::EquationAIsGeneric;

    const EQUATION_A: FieldElement = EQUATION_A;
    const EQUATION_B: FieldElement = EQUATION_B;
    const GENERATOR: (FieldElement, FieldElement) = GENERATOR;
}

/// Right-hand side of the curve equation: `x³ + ax + b`.
pub(crate) fn curve_equation_rhs(x: &FieldElement) -> FieldElement {
    x.square() * x + EQUATION_A * x + EQUATION_B
}

#[cfg(test)]
mod tests {
    use super::{AffinePoint, ProjectivePoint, Scalar};
    use crate::EncodedPoint;
    use elliptic_curve::{
        group::{Curve, Group},
        ops::MulByGenerator,
        point::AffineCoordinates,
        sec1::{FromEncodedPoint, ToEncodedPoint},
    };
    use hex_literal::hex;

    const GENERATOR_UNCOMPRESSED: [u8; 65] = hex!(
        "04 8bd2aeb9cb7e57cb2c4b482ffc81b7afb9de27e1e3bd23c23a4453bd9ace3262
            547ef835c3dac4fd97f8461a14611dc9c27745132ded8e545c1d54c72f046997"
    );

    #[test]
    fn generator_encoding() {
        let encoded = AffinePoint::GENERATOR.to_encoded_point(false);
        assert_eq!(encoded.as_bytes(), &GENERATOR_UNCOMPRESSED);

        let compressed = AffinePoint::GENERATOR.to_encoded_point(true);
        let decoded = AffinePoint::from_encoded_point(&compressed).unwrap();
        assert_eq!(decoded, AffinePoint::GENERATOR);
        assert_eq!(decoded.x().as_slice(), &GENERATOR_UNCOMPRESSED[1..33]);
    }

    #[test]
    fn off_curve_points_are_rejected_by_affine_decoding() {
        let mut tampered = GENERATOR_UNCOMPRESSED;
        tampered[64] ^= 0x01;
        let encoded = EncodedPoint::from_bytes(tampered).unwrap();
        assert!(bool::from(AffinePoint::from_encoded_point(&encoded).is_none()));
    }

    #[test]
    fn group_law() {
        let g = ProjectivePoint::GENERATOR;
        assert_eq!(g + ProjectivePoint::IDENTITY, g);
        assert_eq!(g.double(), g + g);
        assert!(bool::from((g - g).is_identity()));
        assert_eq!(ProjectivePoint::mul_by_generator(&Scalar::from_u64(3)), g + g + g);
    }

    #[test]
    fn order_annihilates_generator() {
        let n_minus_one = -Scalar::ONE;
        let p = ProjectivePoint::GENERATOR * n_minus_one;
        assert_eq!(p.to_affine(), (-ProjectivePoint::GENERATOR).to_affine());
        assert!(bool::from((p + ProjectivePoint::GENERATOR).is_identity()));
    }

    #[test]
    fn scalar_mul_distributes() {
        let a = Scalar::from_u64(0x1234_5678);
        let b = Scalar::from_u64(0x9abc_def0);
        let g = ProjectivePoint::GENERATOR;
        assert_eq!(g * (a + b), g * a + g * b);
        assert_eq!((g * a) * b, g * (a * b));
    }
}
