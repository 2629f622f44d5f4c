//! Error types.

use core::fmt;

/// Error type.
///
/// Parsing failures, arithmetic faults and verification faults are kept
/// distinct from a negative verification result, which is reported as
/// `Ok(false)` by the verification functions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// Requested named curve is not supported.
    UnknownCurve,

    /// Malformed byte string (e.g. empty integer or out-of-range scalar).
    InvalidEncoding,

    /// SEC1 point encoding has the wrong length, prefix or coordinates.
    InvalidPointEncoding,

    /// Input has the wrong number of bytes for the requested encoding.
    IncorrectParameterSize,

    /// Point does not satisfy the curve equation, or is the identity.
    PointNotOnCurve,

    /// Curve or field computation produced an unusable result.
    PointArithmetic,

    /// Key generation failed (randomness source or rejection loop).
    GenerationFailure,

    /// Signature could not be produced.
    SigningFailure,

    /// Signature check could not be performed.
    VerificationFailure,

    /// ASN.1 DER or raw signature encoding is malformed.
    MalformedSignature,

    /// Shared secret derivation produced an unexpected result.
    DerivationFailure,

    /// PACE nonce could not be parsed as an integer.
    InvalidNonceEncoding,

    /// Point could not be exported.
    ExportFailure,

    /// Embedded public key does not belong to the private scalar.
    KeyMismatch,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::UnknownCurve => "unknown curve",
            Error::InvalidEncoding => "invalid encoding",
            Error::InvalidPointEncoding => "invalid point encoding",
            Error::IncorrectParameterSize => "incorrect parameter size",
            Error::PointNotOnCurve => "point is not on the curve",
            Error::PointArithmetic => "point arithmetic error",
            Error::GenerationFailure => "key generation failed",
            Error::SigningFailure => "signing failed",
            Error::VerificationFailure => "signature verification could not be performed",
            Error::MalformedSignature => "malformed signature",
            Error::DerivationFailure => "shared secret derivation failed",
            Error::InvalidNonceEncoding => "invalid nonce encoding",
            Error::ExportFailure => "point export failed",
            Error::KeyMismatch => "public key does not match private key",
        };

        f.write_str(msg)
    }
}

impl core::error::Error for Error {}

impl From<der::Error> for Error {
    fn from(_: der::Error) -> Error {
        Error::MalformedSignature
    }
}

/// Result type.
pub type Result<T> = core::result::Result<T, Error>;
