//! ASN.1 DER encoding of ECDSA signatures.
//!
//! ```text
//! ECDSA-Sig-Value ::= SEQUENCE {
//!     r INTEGER,
//!     s INTEGER
//! }
//! ```

use crate::{BigInteger, Error, Result, U256};
use alloc::vec::Vec;
use der::{
    Decode, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Sequence, Writer,
    asn1::UintRef,
};

/// Borrowed view of the two signature integers.
struct SignatureRef<'a> {
    r: UintRef<'a>,
    s: UintRef<'a>,
}

impl EncodeValue for SignatureRef<'_> {
    fn value_len(&self) -> der::Result<Length> {
        self.r.encoded_len()? + self.s.encoded_len()?
    }

    fn encode_value(&self, encoder: &mut impl Writer) -> der::Result<()> {
        self.r.encode(encoder)?;
        self.s.encode(encoder)?;
        Ok(())
    }
}

impl<'a> DecodeValue<'a> for SignatureRef<'a> {
    fn decode_value<R: Reader<'a>>(reader: &mut R, _header: Header) -> der::Result<Self> {
        Ok(Self {
            r: UintRef::decode(reader)?,
            s: UintRef::decode(reader)?,
        })
    }
}

impl<'a> Sequence<'a> for SignatureRef<'a> {}

/// Parse `SEQUENCE { INTEGER r, INTEGER s }` into its two components.
///
/// Negative or non-minimal integers, trailing data and components wider than
/// the coordinate size are rejected.
pub(crate) fn decode(input: &[u8]) -> Result<(BigInteger, BigInteger)> {
    let SignatureRef { r, s } = SignatureRef::from_der(input)?;

    if r.as_bytes().len() > U256::BYTES || s.as_bytes().len() > U256::BYTES {
        log::debug!("DER signature component exceeds {} bytes", U256::BYTES);
        return Err(Error::MalformedSignature);
    }

    Ok((
        BigInteger::from_be_slice(r.as_bytes())?,
        BigInteger::from_be_slice(s.as_bytes())?,
    ))
}

/// Serialize two non-negative integers as a DER signature.
pub(crate) fn encode(r: &BigInteger, s: &BigInteger) -> Result<Vec<u8>> {
    let r = r.to_be_bytes();
    let s = s.to_be_bytes();

    let sig = SignatureRef {
        r: UintRef::new(&r)?,
        s: UintRef::new(&s)?,
    };

    Ok(sig.to_der()?)
}
