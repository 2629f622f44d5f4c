//! Scalar field arithmetic modulo n = 0xa9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7

use crate::{BigInteger, BrainpoolP256r1, Error, FieldBytes, ORDER, Result, U256};
use core::{cmp::Ordering, ops::ShrAssign};
use elliptic_curve::{
    ScalarPrimitive,
    bigint::ArrayEncoding,
    ops::{Invert, Reduce},
    rand_core::CryptoRngCore,
    scalar::{FromUintUnchecked, IsHigh},
    subtle::{Choice, ConditionallySelectable, ConstantTimeGreater, ConstantTimeLess, CtOption},
};

field_element!(
    name: Scalar,
    params: ScalarModulus,
    modulus: "a9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7",
    multiplicative_generator: 3,
    doc: "Element of the brainpoolP256r1 scalar field, i.e. an integer modulo the group order."
);

/// Upper bound on rejection-sampling rounds.
///
/// A uniformly random 256-bit string lands in `[1, n)` with probability
/// about 2/3, so exhausting this bound does not happen with a working RNG.
const MAX_SAMPLING_ATTEMPTS: usize = 128;

impl Scalar {
    /// Reduce an integer of any size modulo n.
    pub fn from_biginteger(n: &BigInteger) -> Self {
        Self::from_uint_unchecked(n.reduce(&Self::MODULUS))
    }

    /// Integer value of this scalar.
    pub fn to_biginteger(&self) -> BigInteger {
        BigInteger::from(self.to_uint())
    }

    /// Draw a uniformly random non-zero scalar by rejection sampling.
    pub fn random_nonzero(rng: &mut impl CryptoRngCore) -> Result<Self> {
        let mut bytes = FieldBytes::default();

        for attempt in 0..MAX_SAMPLING_ATTEMPTS {
            rng.try_fill_bytes(&mut bytes)
                .map_err(|_| Error::GenerationFailure)?;

            let candidate = Option::<Self>::from(Self::from_bytes(&bytes))
                .filter(|scalar| !bool::from(scalar.is_zero()));

            if let Some(scalar) = candidate {
                return Ok(scalar);
            }

            log::trace!("rejected out-of-range scalar candidate (attempt {})", attempt + 1);
        }

        log::debug!("scalar sampling exhausted {} attempts", MAX_SAMPLING_ATTEMPTS);
        Err(Error::GenerationFailure)
    }
}

impl AsRef<Scalar> for Scalar {
    fn as_ref(&self) -> &Scalar {
        self
    }
}

impl FromUintUnchecked for Scalar {
    type Uint = U256;

    fn from_uint_unchecked(uint: U256) -> Self {
        Self::from_uint_unchecked(uint)
    }
}

impl Invert for Scalar {
    type Output = CtOption<Self>;

    fn invert(&self) -> CtOption<Self> {
        self.invert()
    }
}

impl IsHigh for Scalar {
    fn is_high(&self) -> Choice {
        const MODULUS_SHR1: U256 = ORDER.shr_vartime(1);
        self.to_uint().ct_gt(&MODULUS_SHR1)
    }
}

impl Reduce<U256> for Scalar {
    type Bytes = FieldBytes;

    /// n exceeds 2²⁵⁵ so a single conditional subtraction suffices.
    fn reduce(uint: U256) -> Self {
        let reduced = uint.wrapping_sub(&ORDER);
        let in_range = uint.ct_lt(&ORDER);
        Self::from_uint_unchecked(U256::conditional_select(&reduced, &uint, in_range))
    }

    fn reduce_bytes(bytes: &FieldBytes) -> Self {
        Self::reduce(U256::from_be_byte_array(*bytes))
    }
}

impl ShrAssign<usize> for Scalar {
    fn shr_assign(&mut self, rhs: usize) {
        *self = Self::from_uint_unchecked(self.to_uint().shr_vartime(rhs));
    }
}

impl Ord for Scalar {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_uint().cmp(&other.to_uint())
    }
}

impl PartialOrd for Scalar {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<ScalarPrimitive<BrainpoolP256r1>> for Scalar {
    fn from(scalar: ScalarPrimitive<BrainpoolP256r1>) -> Scalar {
        Self::from_uint_unchecked(*scalar.as_uint())
    }
}

impl From<Scalar> for ScalarPrimitive<BrainpoolP256r1> {
    fn from(scalar: Scalar) -> ScalarPrimitive<BrainpoolP256r1> {
        ScalarPrimitive::from_uint_unchecked(scalar.to_uint())
    }
}

impl From<Scalar> for FieldBytes {
    fn from(scalar: Scalar) -> FieldBytes {
        scalar.to_bytes()
    }
}

impl From<&Scalar> for FieldBytes {
    fn from(scalar: &Scalar) -> FieldBytes {
        scalar.to_bytes()
    }
}

impl From<Scalar> for U256 {
    fn from(scalar: Scalar) -> U256 {
        scalar.to_uint()
    }
}
