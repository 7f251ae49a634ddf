//! Hex and fixed-width integer helpers used by the builder, binder and
//! decoder.

use std::convert::TryFrom;
use std::error::Error;

use derive_more::Display;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::{ProtocolError, ProtocolErrorKind, ProtocolResult};

const LONG_LEN: usize = 8;

/// Characters left untouched by URI component encoding:
/// `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(Debug, Display)]
pub enum ByteCodecError {
    #[display(fmt = "invalid hex {:?}: {}", input, error)]
    FromHex {
        input: String,
        error: hex::FromHexError,
    },

    #[display(fmt = "integer needs at most 8 bytes, got {}", _0)]
    LongOverflow(usize),

    #[display(fmt = "wrong bytes length: {{ expect: {}, got: {} }}", expect, real)]
    WrongLength { expect: usize, real: usize },
}

impl Error for ByteCodecError {}

impl From<ByteCodecError> for ProtocolError {
    fn from(err: ByteCodecError) -> ProtocolError {
        ProtocolError::new(ProtocolErrorKind::InvalidArgument, Box::new(err))
    }
}

pub fn clean_0x(s: &str) -> &str {
    if s.starts_with("0x") || s.starts_with("0X") {
        &s[2..]
    } else {
        s
    }
}

/// Decode a hex string, with or without `0x` prefix, in either case.
pub fn hex_to_bytes(s: &str) -> ProtocolResult<Vec<u8>> {
    hex::decode(clean_0x(s)).map_err(|error| {
        ByteCodecError::FromHex {
            input: s.to_owned(),
            error,
        }
        .into()
    })
}

pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string into a fixed size array.
pub fn hex_to_array<const N: usize>(s: &str) -> ProtocolResult<[u8; N]> {
    let bytes = hex_to_bytes(s)?;
    let real = bytes.len();

    <[u8; N]>::try_from(bytes.as_slice())
        .map_err(|_| ByteCodecError::WrongLength { expect: N, real }.into())
}

/// Little-endian, least significant byte first.
pub fn long_to_byte_array(value: u64) -> [u8; LONG_LEN] {
    value.to_le_bytes()
}

/// Inverse of `long_to_byte_array`. Shorter inputs are zero extended.
pub fn byte_array_to_long(bytes: &[u8]) -> ProtocolResult<u64> {
    if bytes.len() > LONG_LEN {
        return Err(ByteCodecError::LongOverflow(bytes.len()).into());
    }

    Ok(bytes
        .iter()
        .rev()
        .fold(0u64, |value, byte| (value << 8) | u64::from(*byte)))
}

pub fn encode_string(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// A memo travels as the URI component encoding of the note text.
pub fn encode_memo(note: &str) -> Vec<u8> {
    encode_string(&utf8_percent_encode(note, URI_COMPONENT).to_string())
}
