//! Private keys.

use crate::{
    CurveGroup, CurvePoint, Error, FieldBytes, ProjectivePoint, PublicKey, Result, Scalar, U256,
    ecdh::{self, SharedSecret},
    ecdsa::{self, Signature},
    pace,
};
use alloc::vec::Vec;
use core::fmt::{self, Debug};
use elliptic_curve::{
    ops::MulByGenerator,
    rand_core::CryptoRngCore,
    subtle::{Choice, ConstantTimeEq},
    zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing},
};

/// Upper bound on key generation rounds when a compact representable public
/// key is requested. Roughly half of all keys qualify.
const MAX_COMPACT_ATTEMPTS: usize = 128;

/// Length of an X9.62 private key: `04 ‖ X ‖ Y ‖ K`.
const X962_PRIVATE_KEY_SIZE: usize = 1 + 3 * U256::BYTES;

/// brainpoolP256r1 private key: a secret scalar `k` in `[1, n-1]` together
/// with its public key `K = [k] G`.
///
/// The scalar is zeroized on drop and never printed by [`Debug`].
#[derive(Clone)]
pub struct PrivateKey {
    scalar: Scalar,
    public_key: PublicKey,
}

impl PrivateKey {
    /// Generate a random private key.
    ///
    /// With `compact_representable` set, keys are drawn until the public key
    /// passes [`CurveGroup::is_compact_representable`].
    pub fn generate(rng: &mut impl CryptoRngCore, compact_representable: bool) -> Result<Self> {
        for attempt in 0..MAX_COMPACT_ATTEMPTS {
            let key = Self::from_scalar(Scalar::random_nonzero(rng)?)?;

            if !compact_representable || key.public_key.is_compact_representable() {
                return Ok(key);
            }

            log::trace!(
                "public key not compact representable, regenerating (attempt {})",
                attempt + 1
            );
        }

        log::debug!("no compact representable key after {} attempts", MAX_COMPACT_ATTEMPTS);
        Err(Error::GenerationFailure)
    }

    /// Parse a big endian secret scalar.
    ///
    /// Inputs shorter than 32 bytes are zero-padded on the left. The value
    /// must lie in `[1, n-1]`.
    pub fn from_raw(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::InvalidEncoding);
        }

        if bytes.len() > U256::BYTES {
            return Err(Error::IncorrectParameterSize);
        }

        let mut padded = Zeroizing::new(FieldBytes::default());
        padded[U256::BYTES - bytes.len()..].copy_from_slice(bytes);

        let scalar = Option::<Scalar>::from(Scalar::from_bytes(&padded))
            .filter(|scalar| !bool::from(scalar.is_zero()))
            .ok_or(Error::InvalidEncoding)?;

        Self::from_scalar(scalar)
    }

    /// Parse an X9.62 private key `04 ‖ X ‖ Y ‖ K`.
    ///
    /// The embedded public point must equal `[K] G`.
    pub fn from_x962(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != X962_PRIVATE_KEY_SIZE {
            return Err(Error::IncorrectParameterSize);
        }

        if bytes[0] != 0x04 {
            return Err(Error::InvalidPointEncoding);
        }

        let (point_bytes, scalar_bytes) = bytes.split_at(1 + 2 * U256::BYTES);
        let key = Self::from_raw(scalar_bytes)?;
        let embedded = CurvePoint::decode(point_bytes, CurveGroup::brainpool_p256r1())?;

        if embedded != *key.public_key.point() {
            log::debug!("X9.62 private key embeds a public point that does not match its scalar");
            return Err(Error::KeyMismatch);
        }

        Ok(key)
    }

    fn from_scalar(scalar: Scalar) -> Result<Self> {
        let public_key =
            PublicKey::from_point(ProjectivePoint::mul_by_generator(&scalar).into())?;
        Ok(Self { scalar, public_key })
    }

    /// The matching public key.
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Big endian secret scalar, 32 bytes.
    pub fn to_raw(&self) -> Zeroizing<FieldBytes> {
        Zeroizing::new(self.scalar.to_bytes())
    }

    /// X9.62 private key `04 ‖ X ‖ Y ‖ K`.
    pub fn to_x962(&self) -> Zeroizing<Vec<u8>> {
        let mut out = Zeroizing::new(self.public_key.x962_value());
        out.extend_from_slice(&self.scalar.to_bytes());
        out
    }

    /// Returns `[k] point`.
    ///
    /// Fails with [`Error::PointArithmetic`] if `point` is off the curve.
    pub fn multiply(&self, point: &CurvePoint) -> Result<CurvePoint> {
        point.mul_scalar(&self.scalar)
    }

    /// ECDH shared secret with `peer`. See [`ecdh::diffie_hellman`].
    pub fn shared_secret(&self, peer: &PublicKey) -> Result<SharedSecret> {
        ecdh::diffie_hellman(self, peer)
    }

    /// Sign a message digest.
    ///
    /// The leftmost 256 bits of `digest` are used. Digests shorter than 16
    /// bytes are rejected with [`Error::SigningFailure`].
    pub fn sign_digest(&self, rng: &mut impl CryptoRngCore, digest: &[u8]) -> Result<Signature> {
        ecdsa::sign_prehash(rng, &self.scalar, digest)
    }

    /// Hash `message` with SHA-256 and sign the digest.
    #[cfg(feature = "sha256")]
    pub fn sign(&self, rng: &mut impl CryptoRngCore, message: &[u8]) -> Result<Signature> {
        use sha2::{Digest, Sha256};
        self.sign_digest(rng, &Sha256::digest(message))
    }

    /// PACE generic mapping with this key as the first ephemeral key.
    /// See [`pace::map_nonce`].
    pub fn pace_map_nonce(
        &self,
        rng: &mut impl CryptoRngCore,
        nonce: &[u8],
        peer_key1: &PublicKey,
    ) -> Result<(PublicKey, PrivateKey)> {
        pace::map_nonce(rng, nonce, self, peer_key1)
    }

    /// PACE generic mapping with a caller-supplied second key generator.
    /// See [`pace::map_nonce_with`].
    pub fn pace_map_nonce_with<F>(
        &self,
        nonce: &[u8],
        peer_key1: &PublicKey,
        key_generator: F,
    ) -> Result<(PublicKey, PrivateKey)>
    where
        F: FnOnce() -> Result<PrivateKey>,
    {
        pace::map_nonce_with(nonce, self, peer_key1, key_generator)
    }

    pub(crate) fn scalar(&self) -> &Scalar {
        &self.scalar
    }
}

impl ConstantTimeEq for PrivateKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.scalar.ct_eq(&other.scalar)
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrivateKey")
            .field("public_key", &self.public_key)
            .finish_non_exhaustive()
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        self.scalar.zeroize();
    }
}

/// Constant-time comparison
impl Eq for PrivateKey {}
impl PartialEq for PrivateKey {
    fn eq(&self, other: &PrivateKey) -> bool {
        self.ct_eq(other).into()
    }
}

impl ZeroizeOnDrop for PrivateKey {}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_raw(bytes)
    }
}
