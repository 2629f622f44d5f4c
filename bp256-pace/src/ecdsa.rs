//! Elliptic Curve Digital Signature Algorithm (ECDSA) over brainpoolP256r1.
//!
//! Signatures are computed over a caller-supplied message digest. Hashing is
//! the caller's business unless the `sha256` feature's message-level helpers
//! on [`PrivateKey`] and [`PublicKey`] are used.
//!
//! Two encodings are supported:
//!
//! - raw: `R ‖ S`, each left-padded to 32 bytes
//! - ASN.1 DER: `SEQUENCE { INTEGER r, INTEGER s }`
//!
//! [`PrivateKey`]: crate::PrivateKey
//! [`PublicKey`]: crate::PublicKey

mod der;

use crate::{BigInteger, BrainpoolP256r1, Error, ProjectivePoint, Result, Scalar, U256};
use alloc::vec::Vec;
use ecdsa_core::hazmat::{bits2field, sign_prehashed, verify_prehashed};
use elliptic_curve::rand_core::CryptoRngCore;

type EcdsaSignature = ecdsa_core::Signature<BrainpoolP256r1>;

/// Size of a raw `R ‖ S` signature in bytes.
pub const RAW_SIGNATURE_SIZE: usize = 2 * U256::BYTES;

/// Upper bound on signing rounds that produced `r = 0` or `s = 0`.
const MAX_SIGNING_ATTEMPTS: usize = 16;

/// ECDSA/brainpoolP256r1 signature.
///
/// Components are non-negative integers of at most 32 bytes. They are not
/// required to be in `[1, n)`; verification reports such signatures as an
/// error.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Signature {
    r: BigInteger,
    s: BigInteger,
}

impl Signature {
    /// Create a signature from its components.
    pub fn new(r: BigInteger, s: BigInteger) -> Result<Self> {
        if r.bits() > 8 * U256::BYTES as u64 || s.bits() > 8 * U256::BYTES as u64 {
            return Err(Error::MalformedSignature);
        }

        Ok(Self { r, s })
    }

    /// Parse a raw `R ‖ S` signature of exactly 64 bytes.
    pub fn from_raw(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != RAW_SIGNATURE_SIZE {
            return Err(Error::MalformedSignature);
        }

        let (r, s) = bytes.split_at(U256::BYTES);
        Self::new(BigInteger::from_be_slice(r)?, BigInteger::from_be_slice(s)?)
    }

    /// Parse an ASN.1 DER signature.
    pub fn from_der(bytes: &[u8]) -> Result<Self> {
        let (r, s) = der::decode(bytes)?;
        Self::new(r, s)
    }

    /// Serialize as raw `R ‖ S`.
    pub fn to_raw(&self) -> [u8; RAW_SIGNATURE_SIZE] {
        let mut out = [0u8; RAW_SIGNATURE_SIZE];
        let (r, s) = out.split_at_mut(U256::BYTES);
        copy_right_aligned(&self.r, r);
        copy_right_aligned(&self.s, s);
        out
    }

    /// Serialize as ASN.1 DER.
    pub fn to_der(&self) -> Result<Vec<u8>> {
        der::encode(&self.r, &self.s)
    }

    /// The `r` component.
    pub fn r(&self) -> &BigInteger {
        &self.r
    }

    /// The `s` component.
    pub fn s(&self) -> &BigInteger {
        &self.s
    }
}

impl From<EcdsaSignature> for Signature {
    fn from(signature: EcdsaSignature) -> Signature {
        let (r, s) = signature.split_scalars();
        Self {
            r: r.to_biginteger(),
            s: s.to_biginteger(),
        }
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_raw(bytes)
    }
}

/// Convert a raw `R ‖ S` signature to ASN.1 DER.
pub fn raw_to_der(raw: &[u8]) -> Result<Vec<u8>> {
    Signature::from_raw(raw)?.to_der()
}

/// Convert an ASN.1 DER signature to raw `R ‖ S`.
pub fn der_to_raw(der: &[u8]) -> Result<[u8; RAW_SIGNATURE_SIZE]> {
    Ok(Signature::from_der(der)?.to_raw())
}

/// Sign a message digest with the secret scalar `d`.
pub(crate) fn sign_prehash(
    rng: &mut impl CryptoRngCore,
    d: &Scalar,
    prehash: &[u8],
) -> Result<Signature> {
    let z = bits2field::<BrainpoolP256r1>(prehash).map_err(|_| {
        log::debug!("ECDSA digest of {} bytes is too short to sign", prehash.len());
        Error::SigningFailure
    })?;

    for attempt in 0..MAX_SIGNING_ATTEMPTS {
        let k = Scalar::random_nonzero(rng).map_err(|_| Error::SigningFailure)?;

        // fails only if r = 0 or s = 0
        match sign_prehashed::<BrainpoolP256r1, Scalar>(d, k, &z) {
            Ok((signature, _)) => return Ok(signature.into()),
            Err(_) => log::trace!("ECDSA round {} produced a zero component", attempt + 1),
        }
    }

    log::debug!("ECDSA signing gave up after {} attempts", MAX_SIGNING_ATTEMPTS);
    Err(Error::SigningFailure)
}

/// Verify a signature over a message digest against the public point `q`.
///
/// Returns `Ok(false)` when the signature does not match and
/// [`Error::VerificationFailure`] when it cannot be checked at all.
pub(crate) fn verify_prehash(
    q: &ProjectivePoint,
    prehash: &[u8],
    sig: &Signature,
) -> Result<bool> {
    // r and s must lie in [1, n-1]
    let sig = EcdsaSignature::from_slice(&sig.to_raw()).map_err(|_| {
        log::debug!("ECDSA signature component outside [1, n-1]");
        Error::VerificationFailure
    })?;

    let z = bits2field::<BrainpoolP256r1>(prehash).map_err(|_| {
        log::debug!("ECDSA digest of {} bytes is too short to verify", prehash.len());
        Error::VerificationFailure
    })?;

    Ok(verify_prehashed::<BrainpoolP256r1>(q, &z, &sig).is_ok())
}

/// Copy the minimal big endian encoding of `n` into the tail of `out`.
fn copy_right_aligned(n: &BigInteger, out: &mut [u8]) {
    if n.is_zero() {
        return;
    }

    let bytes = n.to_be_bytes();
    let start = out.len().saturating_sub(bytes.len());
    let skip = bytes.len().saturating_sub(out.len());
    out[start..].copy_from_slice(&bytes[skip..]);
}
