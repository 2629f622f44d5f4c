//! Elliptic Curve Diffie-Hellman (ECDH) key agreement.
//!
//! The shared secret is the x-coordinate of `[k] Q`, where `k` is our
//! private scalar and `Q` the peer's public point. It is raw key material:
//! run it through a KDF before using it as a key.
//!
//! # Usage
//!
//! This usage example is from the perspective of two participants in the
//! exchange, nicknamed "Alice" and "Bob".
//!
//! ```
//! # fn main() -> Result<(), bp256_pace::Error> {
//! use bp256_pace::{PrivateKey, PublicKey};
//! use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
//!
//! let mut rng = ChaCha8Rng::from_seed([1u8; 32]);
//!
//! // Alice
//! let alice_secret = PrivateKey::generate(&mut rng, false)?;
//! let alice_pk_bytes = alice_secret.public_key().x962_value();
//!
//! // Bob
//! let bob_secret = PrivateKey::generate(&mut rng, false)?;
//! let bob_pk_bytes = bob_secret.public_key().compact_value();
//!
//! // Alice decodes Bob's serialized public key and computes a shared secret from it
//! let bob_public = PublicKey::from_compact(&bob_pk_bytes)?;
//! let alice_shared = alice_secret.shared_secret(&bob_public)?;
//!
//! // Bob decodes Alice's serialized public key and computes the same shared secret
//! let alice_public = PublicKey::from_x962(&alice_pk_bytes)?;
//! let bob_shared = bob_secret.shared_secret(&alice_public)?;
//!
//! // Both participants arrive on the same shared secret
//! assert_eq!(
//!     alice_shared.raw_secret_bytes(),
//!     bob_shared.raw_secret_bytes()
//! );
//! # Ok(())
//! # }
//! ```

use crate::{Error, FieldBytes, PrivateKey, PublicKey, Result};
use elliptic_curve::zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Compute the shared secret between our private key and the peer's public
/// key.
///
/// Fails with [`Error::DerivationFailure`] if the product is the identity or
/// its x-coordinate does not serialize to exactly one coordinate width.
pub fn diffie_hellman(private_key: &PrivateKey, peer: &PublicKey) -> Result<SharedSecret> {
    let peer_point = peer.point();
    peer_point.validate_on_curve()?;

    let shared = peer_point.mul_scalar(private_key.scalar())?;
    let (x, _) = shared.affine_coordinates().map_err(|_| {
        log::debug!("ECDH produced the point at infinity");
        Error::DerivationFailure
    })?;

    let width = shared.group().coordinate_byte_count();
    let x = Zeroizing::new(
        x.to_be_bytes_padded(width)
            .map_err(|_| Error::DerivationFailure)?,
    );

    shared_secret_from_slice(&x)
}

/// Copy a serialized x-coordinate into a [`SharedSecret`], failing with
/// [`Error::DerivationFailure`] unless it is exactly one coordinate wide.
fn shared_secret_from_slice(x: &[u8]) -> Result<SharedSecret> {
    let mut secret_bytes = FieldBytes::default();

    if x.len() != secret_bytes.len() {
        log::debug!("ECDH x-coordinate has {} bytes, expected {}", x.len(), secret_bytes.len());
        return Err(Error::DerivationFailure);
    }

    secret_bytes.copy_from_slice(x);
    Ok(SharedSecret::from(secret_bytes))
}

/// Shared secret value computed via ECDH key agreement.
///
/// Zeroized on drop.
pub struct SharedSecret {
    /// Computed secret value
    secret_bytes: FieldBytes,
}

impl SharedSecret {
    /// Shared secret value, i.e. the x-coordinate of the shared point,
    /// 32 bytes.
    pub fn raw_secret_bytes(&self) -> &FieldBytes {
        &self.secret_bytes
    }
}

impl From<FieldBytes> for SharedSecret {
    fn from(secret_bytes: FieldBytes) -> SharedSecret {
        Self { secret_bytes }
    }
}

impl Drop for SharedSecret {
    fn drop(&mut self) {
        self.secret_bytes.zeroize()
    }
}

impl ZeroizeOnDrop for SharedSecret {}
