//! Public keys.

use crate::{
    CurveGroup, CurvePoint, EncodedPoint, Error, Result, U256,
    ecdsa::{self, Signature},
};
use alloc::vec::Vec;
use elliptic_curve::sec1::ToEncodedPoint;

/// Length of an uncompressed X9.62 point: `04 ‖ X ‖ Y`.
const X962_SIZE: usize = 1 + 2 * U256::BYTES;

/// Length of a compressed point: `02|03 ‖ X`.
const COMPACT_SIZE: usize = 1 + U256::BYTES;

/// brainpoolP256r1 public key: a point on the curve other than the identity.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PublicKey {
    point: CurvePoint,
}

impl PublicKey {
    /// Wrap a point after checking that it lies on the curve.
    pub fn from_point(point: CurvePoint) -> Result<Self> {
        point.validate_on_curve()?;
        Ok(Self { point })
    }

    /// Parse an uncompressed X9.62 point `04 ‖ X ‖ Y` (65 bytes).
    pub fn from_x962(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != X962_SIZE {
            return Err(Error::IncorrectParameterSize);
        }

        Self::from_sec1_bytes(bytes)
    }

    /// Parse a compressed point `02|03 ‖ X` (33 bytes).
    pub fn from_compact(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != COMPACT_SIZE {
            return Err(Error::IncorrectParameterSize);
        }

        Self::from_sec1_bytes(bytes)
    }

    /// Parse either a compressed or an uncompressed SEC1 point.
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_point(CurvePoint::decode(bytes, CurveGroup::brainpool_p256r1())?)
    }

    /// Uncompressed encoding `04 ‖ X ‖ Y`.
    pub fn raw_value(&self) -> Vec<u8> {
        self.x962_value()
    }

    /// Uncompressed X9.62 encoding `04 ‖ X ‖ Y`.
    pub fn x962_value(&self) -> Vec<u8> {
        self.to_encoded_point(false).as_bytes().to_vec()
    }

    /// Compressed encoding `02|03 ‖ X`.
    pub fn compact_value(&self) -> Vec<u8> {
        self.to_encoded_point(true).as_bytes().to_vec()
    }

    fn to_encoded_point(&self, compress: bool) -> EncodedPoint {
        match self.point.as_affine() {
            Some(affine) => affine.to_encoded_point(compress),
            None => EncodedPoint::identity(),
        }
    }

    /// The underlying curve point.
    pub fn point(&self) -> &CurvePoint {
        &self.point
    }

    /// See [`CurveGroup::is_compact_representable`].
    pub fn is_compact_representable(&self) -> bool {
        self.point
            .affine_coordinates()
            .is_ok_and(|(_, y)| self.point.group().compact_predicate(&y))
    }

    /// Verify an ECDSA signature over a message digest.
    ///
    /// Returns `Ok(false)` if the signature does not match. Signatures whose
    /// components fall outside `[1, n-1]`, or digests shorter than 16 bytes,
    /// cannot be checked and yield [`Error::VerificationFailure`].
    pub fn verify_digest(&self, signature: &Signature, digest: &[u8]) -> Result<bool> {
        let q = self.point.to_projective().map_err(|_| Error::VerificationFailure)?;
        ecdsa::verify_prehash(&q, digest, signature)
    }

    /// Hash `message` with SHA-256 and verify the signature over the digest.
    #[cfg(feature = "sha256")]
    pub fn verify(&self, signature: &Signature, message: &[u8]) -> Result<bool> {
        use sha2::{Digest, Sha256};
        self.verify_digest(signature, &Sha256::digest(message))
    }
}

impl From<PublicKey> for CurvePoint {
    fn from(public_key: PublicKey) -> CurvePoint {
        public_key.point
    }
}

impl TryFrom<CurvePoint> for PublicKey {
    type Error = Error;

    fn try_from(point: CurvePoint) -> Result<Self> {
        Self::from_point(point)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_sec1_bytes(bytes)
    }
}
