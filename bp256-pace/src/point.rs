//! Points on the curve group.

use crate::{
    AffinePoint, BigInteger, CurveGroup, EncodedPoint, Error, FieldBytes, FieldElement,
    ProjectivePoint, Result, Scalar,
};
use alloc::vec::Vec;
use core::ops::Neg;
use elliptic_curve::{
    group::Curve,
    ops::MulByGenerator,
    sec1::{Coordinates, FromEncodedPoint, ToEncodedPoint},
    subtle::{Choice, ConstantTimeEq},
};

/// SEC1 point serialization formats.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum PointEncoding {
    /// `02|03 ‖ X`
    Compressed,

    /// `04 ‖ X ‖ Y`, also known as the X9.62 form.
    #[default]
    Uncompressed,
}

/// A point on brainpoolP256r1, or the point at infinity.
///
/// Points produced by arithmetic always lie on the curve. Points produced by
/// [`CurvePoint::decode`] are only structurally valid until
/// [`CurvePoint::validate_on_curve`] accepts them; arithmetic on one that
/// fails the curve equation is an [`Error::PointArithmetic`].
#[derive(Clone, Copy, Debug)]
pub struct CurvePoint {
    repr: Repr,
}

#[derive(Clone, Copy, Debug)]
enum Repr {
    /// On the curve, or the identity.
    Affine(AffinePoint),

    /// Canonical coordinates that do not satisfy the curve equation.
    OffCurve { x: FieldElement, y: FieldElement },
}

impl CurvePoint {
    /// Parse a compressed (`02|03`, 33 bytes) or uncompressed (`04`, 65 bytes)
    /// SEC1 encoding.
    ///
    /// Fails with [`Error::InvalidPointEncoding`] on a wrong length or prefix,
    /// on coordinates that are not reduced modulo p, and on a compressed
    /// x-coordinate with no corresponding y. Curve membership of an
    /// uncompressed point is not checked here.
    pub fn decode(bytes: &[u8], group: &CurveGroup) -> Result<Self> {
        group.decode_point(bytes)
    }

    pub(crate) fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let encoded =
            EncodedPoint::from_bytes(bytes).map_err(|_| Error::InvalidPointEncoding)?;

        match encoded.coordinates() {
            Coordinates::Identity | Coordinates::Compact { .. } => {
                Err(Error::InvalidPointEncoding)
            }
            Coordinates::Compressed { .. } => {
                Option::<AffinePoint>::from(AffinePoint::from_encoded_point(&encoded))
                    .map(Self::from)
                    .ok_or(Error::InvalidPointEncoding)
            }
            Coordinates::Uncompressed { x, y } => {
                let point = AffinePoint::from_encoded_point(&encoded);
                if let Some(point) = Option::<AffinePoint>::from(point) {
                    return Ok(Self::from(point));
                }

                let x = Option::<FieldElement>::from(FieldElement::from_bytes(x));
                let y = Option::<FieldElement>::from(FieldElement::from_bytes(y));

                match (x, y) {
                    (Some(x), Some(y)) => Ok(Self {
                        repr: Repr::OffCurve { x, y },
                    }),
                    _ => Err(Error::InvalidPointEncoding),
                }
            }
        }
    }

    /// Check the curve equation.
    ///
    /// The identity is rejected with [`Error::PointNotOnCurve`] as well since
    /// it cannot serve as a key.
    pub fn validate_on_curve(&self) -> Result<&Self> {
        if self.is_on_curve() {
            Ok(self)
        } else {
            Err(Error::PointNotOnCurve)
        }
    }

    /// Does this point satisfy the curve equation?
    pub fn is_on_curve(&self) -> bool {
        match &self.repr {
            Repr::Affine(point) => !bool::from(point.is_identity()),
            Repr::OffCurve { .. } => false,
        }
    }

    /// Serialize in the requested SEC1 form.
    pub fn encode(&self, encoding: PointEncoding) -> Result<Vec<u8>> {
        let compress = encoding == PointEncoding::Compressed;
        let encoded = match &self.repr {
            Repr::Affine(point) if bool::from(point.is_identity()) => {
                return Err(Error::ExportFailure);
            }
            Repr::Affine(point) => point.to_encoded_point(compress),
            Repr::OffCurve { x, y } => {
                EncodedPoint::from_affine_coordinates(&x.to_bytes(), &y.to_bytes(), compress)
            }
        };

        Ok(encoded.as_bytes().to_vec())
    }

    /// Returns `self + other`.
    ///
    /// Fails with [`Error::PointArithmetic`] if either operand is off the
    /// curve.
    pub fn add(&self, other: &CurvePoint) -> Result<CurvePoint> {
        Ok((self.to_projective()? + other.to_projective()?).into())
    }

    /// Returns `[k] self` with `k` reduced modulo the group order.
    ///
    /// Fails with [`Error::PointArithmetic`] if `self` is off the curve.
    pub fn multiply(&self, k: &BigInteger) -> Result<CurvePoint> {
        self.mul_scalar(&Scalar::from_biginteger(k))
    }

    /// Returns `[k] G` with `k` reduced modulo the group order.
    pub fn multiply_generator(k: &BigInteger) -> CurvePoint {
        ProjectivePoint::mul_by_generator(&Scalar::from_biginteger(k)).into()
    }

    pub(crate) fn mul_scalar(&self, k: &Scalar) -> Result<CurvePoint> {
        Ok((self.to_projective()? * k).into())
    }

    /// Affine `(x, y)` coordinates, or [`Error::PointArithmetic`] for the
    /// point at infinity.
    pub fn affine_coordinates(&self) -> Result<(BigInteger, BigInteger)> {
        let (x, y) = self.coordinate_bytes().ok_or(Error::PointArithmetic)?;
        Ok((BigInteger::from_be_slice(&x)?, BigInteger::from_be_slice(&y)?))
    }

    /// Big endian `(x, y)`, or `None` for the identity.
    pub(crate) fn coordinate_bytes(&self) -> Option<(FieldBytes, FieldBytes)> {
        match &self.repr {
            Repr::Affine(point) => {
                let encoded = point.to_encoded_point(false);
                Some((*encoded.x()?, *encoded.y()?))
            }
            Repr::OffCurve { x, y } => Some((x.to_bytes(), y.to_bytes())),
        }
    }

    /// Is this the point at infinity?
    pub fn is_identity(&self) -> bool {
        match &self.repr {
            Repr::Affine(point) => point.is_identity().into(),
            Repr::OffCurve { .. } => false,
        }
    }

    /// The point at infinity.
    pub fn identity() -> CurvePoint {
        AffinePoint::IDENTITY.into()
    }

    /// Base point G.
    pub fn generator() -> CurvePoint {
        AffinePoint::GENERATOR.into()
    }

    /// The group this point belongs to.
    pub fn group(&self) -> &'static CurveGroup {
        CurveGroup::brainpool_p256r1()
    }

    /// The affine point, unless this point is off the curve.
    pub fn as_affine(&self) -> Option<&AffinePoint> {
        match &self.repr {
            Repr::Affine(point) => Some(point),
            Repr::OffCurve { .. } => None,
        }
    }

    /// Convert to projective coordinates.
    ///
    /// Fails with [`Error::PointArithmetic`] if this point is off the curve.
    pub fn to_projective(&self) -> Result<ProjectivePoint> {
        self.as_affine()
            .map(|point| ProjectivePoint::from(*point))
            .ok_or_else(|| {
                log::debug!("arithmetic on a point that fails the curve equation");
                Error::PointArithmetic
            })
    }
}

impl ConstantTimeEq for CurvePoint {
    fn ct_eq(&self, other: &Self) -> Choice {
        match (&self.repr, &other.repr) {
            (Repr::Affine(a), Repr::Affine(b)) => a.ct_eq(b),
            (Repr::OffCurve { x: x1, y: y1 }, Repr::OffCurve { x: x2, y: y2 }) => {
                x1.ct_eq(x2) & y1.ct_eq(y2)
            }
            _ => Choice::from(0),
        }
    }
}

impl Default for CurvePoint {
    fn default() -> Self {
        Self::identity()
    }
}

impl Eq for CurvePoint {}

impl PartialEq for CurvePoint {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl From<AffinePoint> for CurvePoint {
    fn from(point: AffinePoint) -> CurvePoint {
        CurvePoint {
            repr: Repr::Affine(point),
        }
    }
}

impl From<ProjectivePoint> for CurvePoint {
    fn from(point: ProjectivePoint) -> CurvePoint {
        point.to_affine().into()
    }
}

impl Neg for CurvePoint {
    type Output = CurvePoint;

    fn neg(self) -> CurvePoint {
        let repr = match self.repr {
            Repr::Affine(point) => Repr::Affine(-point),
            Repr::OffCurve { x, y } => Repr::OffCurve { x, y: -y },
        };

        CurvePoint { repr }
    }
}
