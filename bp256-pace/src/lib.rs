//! brainpoolP256r1 elliptic curve primitives and the PACE generic mapping
//!
//! This crate provides everything a PACE (Password Authenticated Connection
//! Establishment, BSI TR-03110) terminal needs on top of brainpoolP256r1:
//!
//! - point arithmetic with SEC1 compressed and uncompressed encodings
//! - private and public keys with X9.62 serialization
//! - ECDSA over caller-supplied digests, with raw `R ‖ S` and DER signatures
//! - ECDH shared secrets
//! - the nonce mapping step `g̃ = [s] G + [k1] Q1` and the second key pair
//!
//! ## Usage
//!
//! Keys are plain values. Randomness is passed to every operation that needs
//! it, so tests can replay a seeded generator.
//!
//! ```
//! use bp256_pace::{PrivateKey, PublicKey, ecdsa::Signature};
//! use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
//!
//! let mut rng = ChaCha8Rng::from_seed([0u8; 32]);
//! let private_key = PrivateKey::generate(&mut rng, false)?;
//!
//! // Ship the public key as an uncompressed X9.62 point.
//! let public_key = PublicKey::from_x962(&private_key.public_key().x962_value())?;
//!
//! let digest = [0x42u8; 32];
//! let signature = private_key.sign_digest(&mut rng, &digest)?;
//! let signature = Signature::from_der(&signature.to_der()?)?;
//! assert!(public_key.verify_digest(&signature, &digest)?);
//! # Ok::<(), bp256_pace::Error>(())
//! ```
//!
//! ## Minimum Supported Rust Version
//!
//! Rust **1.85** or higher.
//!
//! Minimum supported Rust version may be changed in the future, but it will be
//! accompanied with a minor version bump.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/6ee8e381/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/6ee8e381/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unused_qualifications)]

extern crate alloc;

mod arithmetic;
mod bignum;
mod error;
mod group;
mod point;
mod public_key;
mod secret_key;

pub mod ecdh;
pub mod ecdsa;
pub mod pace;

pub use crate::{
    arithmetic::{AffinePoint, ProjectivePoint, field::FieldElement, scalar::Scalar},
    bignum::{BigInteger, FiniteField},
    error::{Error, Result},
    group::{CurveGroup, CurveName, WeierstrassCoefficients},
    point::{CurvePoint, PointEncoding},
    public_key::PublicKey,
    secret_key::PrivateKey,
};
pub use elliptic_curve::{self, bigint::U256};

#[cfg(feature = "getrandom")]
pub use rand_core::OsRng;

use elliptic_curve::{FieldBytesEncoding, consts::U32};

/// Order of brainpoolP256r1's elliptic curve group (i.e. scalar modulus).
pub const ORDER: U256 =
    U256::from_be_hex("a9fb57dba1eea9bc3e660a909d838d718c397aa3b561a6f7901e0e82974856a7");

/// Modulus of brainpoolP256r1's base field.
pub const MODULUS: U256 =
    U256::from_be_hex("a9fb57dba1eea9bc3e660a909d838d726e3bf623d52620282013481d1f6e5377");

/// brainpoolP256r1 elliptic curve: verifiably pseudo-random variant
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct BrainpoolP256r1;

impl elliptic_curve::Curve for BrainpoolP256r1 {
    /// 32-byte serialized field elements.
    type FieldBytesSize = U32;

    /// 256-bit field modulus.
    type Uint = U256;

    /// Curve order.
    const ORDER: U256 = ORDER;
}

impl elliptic_curve::PrimeCurve for BrainpoolP256r1 {}

impl FieldBytesEncoding<BrainpoolP256r1> for U256 {}

/// brainpoolP256r1 field element serialized as bytes.
///
/// Byte array containing a serialized field element value (base field or scalar).
pub type FieldBytes = elliptic_curve::FieldBytes<BrainpoolP256r1>;

/// brainpoolP256r1 SEC1 encoded point.
pub type EncodedPoint = elliptic_curve::sec1::EncodedPoint<BrainpoolP256r1>;
