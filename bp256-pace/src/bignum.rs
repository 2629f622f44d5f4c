//! Arbitrary-precision integers and modular arithmetic contexts.
//!
//! [`BigInteger`] is the boundary type for integers crossing the public API:
//! signature components, curve parameters, point coordinates and PACE nonces.
//! Curve arithmetic itself runs on fixed-width Montgomery residues in
//! [`crate::arithmetic`].

use crate::{Error, Result, U256};
use alloc::{vec, vec::Vec};
use core::{cmp::Ordering, fmt};
use elliptic_curve::bigint::Encoding;
use num_bigint::BigUint;
use num_traits::Zero;

/// Arbitrary-precision unsigned integer.
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct BigInteger(BigUint);

impl BigInteger {
    /// Parse a big-endian byte string.
    ///
    /// Any non-empty byte string encodes an integer, leading zeros included.
    /// The empty string is rejected so that it is never silently treated as
    /// zero.
    pub fn from_be_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::InvalidEncoding);
        }

        Ok(Self(BigUint::from_bytes_be(bytes)))
    }

    /// Minimal big-endian encoding; zero encodes as a single `00` byte.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }

    /// Big-endian encoding left-padded with zeros to exactly `len` bytes.
    pub fn to_be_bytes_padded(&self, len: usize) -> Result<Vec<u8>> {
        let bytes = self.0.to_bytes_be();
        let significant = if self.is_zero() { 0 } else { bytes.len() };

        if significant > len {
            return Err(Error::IncorrectParameterSize);
        }

        let mut out = vec![0u8; len];
        out[len - significant..].copy_from_slice(&bytes[bytes.len() - significant..]);
        Ok(out)
    }

    /// Number of significant bits.
    pub fn bits(&self) -> u64 {
        self.0.bits()
    }

    /// Is this integer zero?
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Is the least significant bit set?
    pub fn is_odd(&self) -> bool {
        self.0.bit(0)
    }

    /// Returns `self mod field.modulus()`.
    ///
    /// [`FiniteField::new`] has already rejected a zero modulus.
    pub fn modulo(&self, field: &FiniteField) -> BigInteger {
        Self(&self.0 % &field.modulus.0)
    }

    /// Reduce modulo a non-zero 256-bit `modulus`.
    pub(crate) fn reduce(&self, modulus: &U256) -> U256 {
        let reduced = &self.0 % BigUint::from_bytes_be(&modulus.to_be_bytes());
        let bytes = reduced.to_bytes_be();
        let len = bytes.len().min(U256::BYTES);

        let mut buf = [0u8; U256::BYTES];
        buf[U256::BYTES - len..].copy_from_slice(&bytes[bytes.len() - len..]);
        U256::from_be_slice(&buf)
    }

    /// Convert into a 256-bit fixed-width integer.
    pub fn to_uint(&self) -> Result<U256> {
        let bytes = self.to_be_bytes_padded(U256::BYTES)?;
        Ok(U256::from_be_slice(&bytes))
    }
}

impl From<U256> for BigInteger {
    fn from(uint: U256) -> BigInteger {
        Self(BigUint::from_bytes_be(&uint.to_be_bytes()))
    }
}

impl From<&U256> for BigInteger {
    fn from(uint: &U256) -> BigInteger {
        Self::from(*uint)
    }
}

impl From<u64> for BigInteger {
    fn from(n: u64) -> BigInteger {
        Self(BigUint::from(n))
    }
}

impl TryFrom<&[u8]> for BigInteger {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<BigInteger> {
        Self::from_be_slice(bytes)
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger(0x{:X})", self.0)
    }
}

impl fmt::UpperHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

impl fmt::LowerHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

/// Modular arithmetic context bound to a fixed modulus.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FiniteField {
    modulus: BigInteger,
}

impl FiniteField {
    /// Create a context for arithmetic modulo `modulus`.
    pub fn new(modulus: BigInteger) -> Result<Self> {
        if modulus.is_zero() {
            return Err(Error::PointArithmetic);
        }

        Ok(Self { modulus })
    }

    /// The modulus of this context.
    pub fn modulus(&self) -> &BigInteger {
        &self.modulus
    }

    /// Returns `(from - x) mod modulus`.
    ///
    /// Note the operand order: `x` is subtracted *from* `from`.
    pub fn subtract(&self, x: &BigInteger, from: &BigInteger) -> BigInteger {
        let m = &self.modulus.0;
        let x = x.modulo(self).0;
        let y = from.modulo(self).0;
        BigInteger((y + m - x) % m)
    }
}
