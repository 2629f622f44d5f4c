//! Domain parameters of the supported curve group.

use crate::{
    BigInteger, CurvePoint, Error, FieldElement, FiniteField, MODULUS, ORDER, Result,
    arithmetic::{EQUATION_A, EQUATION_B, curve_equation_rhs},
};
use core::{fmt, str::FromStr};
use elliptic_curve::subtle::ConstantTimeEq;

/// Named curves this crate can instantiate.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum CurveName {
    /// brainpoolP256r1 from RFC 5639.
    BrainpoolP256r1,
}

impl CurveName {
    /// Standard name of the curve.
    pub const fn as_str(&self) -> &'static str {
        match self {
            CurveName::BrainpoolP256r1 => "brainpoolP256r1",
        }
    }

    /// Dotted ASN.1 object identifier of the curve.
    pub const fn oid(&self) -> &'static str {
        match self {
            CurveName::BrainpoolP256r1 => "1.3.36.3.3.2.8.1.1.7",
        }
    }
}

impl FromStr for CurveName {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case(CurveName::BrainpoolP256r1.as_str()) {
            Ok(CurveName::BrainpoolP256r1)
        } else {
            Err(Error::UnknownCurve)
        }
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coefficients of the short Weierstrass equation `y² = x³ + ax + b` over
/// the prime field `field`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WeierstrassCoefficients {
    /// Prime modulus of the base field.
    pub field: BigInteger,
    /// 𝒂-coefficient.
    pub a: BigInteger,
    /// 𝒃-coefficient.
    pub b: BigInteger,
}

/// An elliptic curve group with its domain parameters.
///
/// The group is immutable and shared; see [`CurveGroup::brainpool_p256r1`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CurveGroup {
    name: CurveName,
}

static BRAINPOOL_P256R1: CurveGroup = CurveGroup {
    name: CurveName::BrainpoolP256r1,
};

impl CurveGroup {
    /// Instantiate the group for a named curve.
    pub const fn new(name: CurveName) -> Self {
        Self { name }
    }

    /// Instantiate the group for a curve name such as `"brainpoolP256r1"`.
    pub fn by_name(name: &str) -> Result<Self> {
        name.parse().map(Self::new)
    }

    /// The process-wide brainpoolP256r1 group.
    pub fn brainpool_p256r1() -> &'static CurveGroup {
        &BRAINPOOL_P256R1
    }

    /// Name of the curve.
    pub fn name(&self) -> CurveName {
        self.name
    }

    /// Dotted ASN.1 object identifier of the curve.
    pub fn oid(&self) -> &'static str {
        self.name.oid()
    }

    /// Width in bytes of one serialized coordinate: `⌈bits(p) / 8⌉`.
    pub fn coordinate_byte_count(&self) -> usize {
        MODULUS.bits().div_ceil(8)
    }

    /// Order n of the group.
    pub fn order(&self) -> BigInteger {
        BigInteger::from(ORDER)
    }

    /// Prime modulus p of the base field.
    pub fn modulus(&self) -> BigInteger {
        BigInteger::from(MODULUS)
    }

    /// Coefficients of the curve equation.
    pub fn weierstrass_coefficients(&self) -> WeierstrassCoefficients {
        WeierstrassCoefficients {
            field: self.modulus(),
            a: BigInteger::from(EQUATION_A.to_uint()),
            b: BigInteger::from(EQUATION_B.to_uint()),
        }
    }

    /// Base point G.
    pub fn generator(&self) -> CurvePoint {
        CurvePoint::generator()
    }

    /// Parse a SEC1 point on this curve. See [`CurvePoint::decode`].
    pub fn decode_point(&self, bytes: &[u8]) -> Result<CurvePoint> {
        CurvePoint::from_sec1_bytes(bytes)
    }

    /// Does `(x, y)` satisfy the curve equation?
    ///
    /// Coordinates outside `[0, p)` are never on the curve.
    pub fn is_on_curve(&self, x: &BigInteger, y: &BigInteger) -> bool {
        let (Some(x), Some(y)) = (to_field_element(x), to_field_element(y)) else {
            return false;
        };

        y.square().ct_eq(&curve_equation_rhs(&x)).into()
    }

    /// Can the point be transported in compact form, i.e. as its
    /// x-coordinate alone?
    ///
    /// A point qualifies when `y ≤ (n − y) mod p`, with the subtraction
    /// performed in the base field.
    pub fn is_compact_representable(&self, point: &CurvePoint) -> Result<bool> {
        let (_, y) = point.affine_coordinates()?;
        Ok(self.compact_predicate(&y))
    }

    pub(crate) fn compact_predicate(&self, y: &BigInteger) -> bool {
        let field = FiniteField::new(self.modulus());
        match field {
            Ok(field) => *y <= field.subtract(y, &self.order()),
            Err(_) => false,
        }
    }
}

impl Default for CurveGroup {
    fn default() -> Self {
        BRAINPOOL_P256R1
    }
}

fn to_field_element(n: &BigInteger) -> Option<FieldElement> {
    let uint = n.to_uint().ok()?;
    FieldElement::from_uint(uint).into()
}
