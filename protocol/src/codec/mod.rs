// TODO: change Vec<u8> to Bytes once prost supports it for bytes fields
// pin: https://github.com/danburkert/prost/pull/190

#[macro_use]
mod r#macro;
pub mod contract;
pub mod transaction;

#[cfg(test)]
mod tests;

use std::error::Error;

use async_trait::async_trait;
use bytes::Bytes;
use derive_more::Display;

use crate::{ProtocolError, ProtocolErrorKind, ProtocolResult};

#[async_trait]
pub trait ProtocolCodec: Sized + Send + ProtocolCodecSync {
    // Note: We take mut reference so that it can be pinned. This removes Sync
    // requirement.
    async fn encode(&mut self) -> ProtocolResult<Bytes>;

    async fn decode<B: Into<Bytes> + Send>(bytes: B) -> ProtocolResult<Self>;
}

// Sync version is still useful in some cases, for example, use in Stream.
// This also work around #[async_trait] problem inside macro
#[doc(hidden)]
pub trait ProtocolCodecSync: Sized + Send {
    fn encode_sync(&self) -> ProtocolResult<Bytes>;

    fn decode_sync(bytes: Bytes) -> ProtocolResult<Self>;
}

#[async_trait]
impl<T: ProtocolCodecSync + 'static> ProtocolCodec for T {
    async fn encode(&mut self) -> ProtocolResult<Bytes> {
        <T as ProtocolCodecSync>::encode_sync(self)
    }

    async fn decode<B: Into<Bytes> + Send>(bytes: B) -> ProtocolResult<Self> {
        let bytes: Bytes = bytes.into();

        <T as ProtocolCodecSync>::decode_sync(bytes)
    }
}

#[derive(Debug, Display)]
pub enum CodecError {
    #[display(fmt = "prost encode: {}", _0)]
    ProtobufEncode(prost::EncodeError),

    #[display(fmt = "prost decode: {}", _0)]
    ProtobufDecode(prost::DecodeError),

    #[display(fmt = "{} missing field {}", r#type, field)]
    MissingField {
        r#type: &'static str,
        field:  &'static str,
    },

    #[display(fmt = "invalid contract type {}", _0)]
    InvalidContractType(i32),

    #[display(fmt = "invalid {} {}", r#type, value)]
    InvalidEnumValue { r#type: &'static str, value: i32 },

    #[display(fmt = "contract parameter type url {:?}, expect {:?}", real, expect)]
    TypeUrlMismatch { expect: String, real: String },

    #[display(fmt = "transaction carries {} contracts, expect exactly one", _0)]
    ContractCount(usize),

    #[display(fmt = "wrong bytes length: {{ expect: {}, got: {} }}", expect, real)]
    WrongBytesLength { expect: usize, real: usize },

    #[display(fmt = "partial block reference in raw data")]
    PartialBinding,

    #[display(fmt = "{} {} does not fit int64", field, value)]
    TimestampRange { field: &'static str, value: u64 },

    #[display(fmt = "negative {} {}", field, value)]
    NegativeTimestamp { field: &'static str, value: i64 },
}

impl Error for CodecError {}

impl From<prost::EncodeError> for CodecError {
    fn from(err: prost::EncodeError) -> Self {
        CodecError::ProtobufEncode(err)
    }
}

impl From<prost::DecodeError> for CodecError {
    fn from(err: prost::DecodeError) -> Self {
        CodecError::ProtobufDecode(err)
    }
}

impl From<CodecError> for ProtocolError {
    fn from(err: CodecError) -> ProtocolError {
        let kind = match err {
            CodecError::InvalidContractType(_) => ProtocolErrorKind::UnsupportedContractType,
            _ => ProtocolErrorKind::Codec,
        };

        ProtocolError::new(kind, Box::new(err))
    }
}
