//! PACE generic mapping (BSI TR-03110, part 3, section A.3.4.1).
//!
//! After the first ephemeral key exchange, both parties map the decrypted
//! nonce `s` to a fresh generator
//!
//! ```text
//! g̃ = [s] G + [k1] Q1
//! ```
//!
//! where `k1` is our first ephemeral private key and `Q1` the peer's first
//! ephemeral public key. A second key pair `(k2, [k2] g̃)` is then generated
//! on the mapped domain.
//!
//! ```
//! # fn main() -> Result<(), bp256_pace::Error> {
//! use bp256_pace::{PrivateKey, pace};
//! use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
//!
//! let mut rng = ChaCha8Rng::from_seed([2u8; 32]);
//! let nonce = [0x5au8; 16];
//!
//! let chip = PrivateKey::generate(&mut rng, false)?;
//! let terminal = PrivateKey::generate(&mut rng, false)?;
//!
//! // both sides arrive at the same mapped generator
//! let g_chip = pace::ephemeral_generator(&nonce, &chip, terminal.public_key())?;
//! let g_terminal = pace::ephemeral_generator(&nonce, &terminal, chip.public_key())?;
//! assert_eq!(g_chip, g_terminal);
//!
//! let (public_key2, _private_key2) = chip.pace_map_nonce(&mut rng, &nonce, terminal.public_key())?;
//! assert!(public_key2.point().is_on_curve());
//! # Ok(())
//! # }
//! ```

use crate::{BigInteger, CurvePoint, Error, PointEncoding, PrivateKey, PublicKey, Result};
use elliptic_curve::rand_core::CryptoRngCore;

/// Compute the mapped generator `g̃ = [s] G + [k1] Q1`.
///
/// `nonce` is the big endian encoding of `s` and may have any non-empty
/// length. Fails with [`Error::PointArithmetic`] if `g̃` is the identity.
pub fn ephemeral_generator(
    nonce: &[u8],
    own_key1: &PrivateKey,
    peer_key1: &PublicKey,
) -> Result<CurvePoint> {
    let s = BigInteger::from_be_slice(nonce).map_err(|_| Error::InvalidNonceEncoding)?;

    let h = own_key1.multiply(peer_key1.point())?;
    let generator = CurvePoint::multiply_generator(&s).add(&h)?;

    if generator.is_identity() {
        log::debug!("PACE mapping produced the point at infinity");
        return Err(Error::PointArithmetic);
    }

    log::trace!("PACE ephemeral generator computed");
    Ok(generator)
}

/// Generate the second key pair on the mapped domain.
///
/// `key_generator` supplies `k2`; the returned public key is `[k2] g̃`,
/// passed through its X9.62 encoding. A generator that is off the curve or
/// the identity fails with [`Error::PointNotOnCurve`] before `key_generator`
/// runs.
pub fn derive_second_key_pair<F>(
    generator: &CurvePoint,
    key_generator: F,
) -> Result<(PublicKey, PrivateKey)>
where
    F: FnOnce() -> Result<PrivateKey>,
{
    generator.validate_on_curve()?;

    let private_key = key_generator()?;
    let point = private_key.multiply(generator)?;

    let x962 = point
        .encode(PointEncoding::Uncompressed)
        .map_err(|_| Error::ExportFailure)?;
    let public_key = PublicKey::from_x962(&x962)?;

    log::trace!("PACE second key pair derived");
    Ok((public_key, private_key))
}

/// Map a nonce and derive the second key pair with a fresh random key.
pub fn map_nonce(
    rng: &mut impl CryptoRngCore,
    nonce: &[u8],
    own_key1: &PrivateKey,
    peer_key1: &PublicKey,
) -> Result<(PublicKey, PrivateKey)> {
    map_nonce_with(nonce, own_key1, peer_key1, || PrivateKey::generate(rng, false))
}

/// Map a nonce and derive the second key pair with the supplied key
/// generator.
///
/// Deterministic whenever `key_generator` is.
pub fn map_nonce_with<F>(
    nonce: &[u8],
    own_key1: &PrivateKey,
    peer_key1: &PublicKey,
    key_generator: F,
) -> Result<(PublicKey, PrivateKey)>
where
    F: FnOnce() -> Result<PrivateKey>,
{
    let generator = ephemeral_generator(nonce, own_key1, peer_key1)?;
    derive_second_key_pair(&generator, key_generator)
}
