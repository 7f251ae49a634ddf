pub mod byte_codec;
pub mod codec;
pub mod traits;
pub mod types;

use std::error::Error;

pub use async_trait::async_trait;
pub use bytes::{Buf, BufMut, Bytes, BytesMut};
use derive_more::{Constructor, Display};

/// Outcome classes shared by every crate of the workspace. Each crate maps
/// its own error variants onto one of these when converting into
/// `ProtocolError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolErrorKind {
    // malformed caller input: addresses, amounts, hex, enum names
    InvalidArgument,

    // latest block missing, unreachable or inconsistent
    StaleReference,

    // signing attempted before reference binding
    UnboundTransaction,

    // parameter decoding outside the closed contract enumeration
    UnsupportedContractType,

    // wire codec
    Codec,

    // external collaborators
    Gateway,
    Signer,

    // binaries
    Main,
}

// refer to https://github.com/rust-lang/rust/blob/a17951c4f80eb5208030f91fdb4ae93919fa6b12/src/libstd/io/error.rs#L73
#[derive(Debug, Constructor, Display)]
#[display(fmt = "[ProtocolError] Kind: {:?} Error: {}", kind, error)]
pub struct ProtocolError {
    kind:  ProtocolErrorKind,
    error: Box<dyn Error + Send>,
}

impl ProtocolError {
    pub fn kind(&self) -> ProtocolErrorKind {
        self.kind
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind == ProtocolErrorKind::InvalidArgument
    }

    pub fn is_stale_reference(&self) -> bool {
        self.kind == ProtocolErrorKind::StaleReference
    }

    pub fn is_unbound_transaction(&self) -> bool {
        self.kind == ProtocolErrorKind::UnboundTransaction
    }

    pub fn is_unsupported_contract_type(&self) -> bool {
        self.kind == ProtocolErrorKind::UnsupportedContractType
    }
}

impl From<ProtocolError> for Box<dyn Error + Send> {
    fn from(error: ProtocolError) -> Self {
        Box::new(error) as Box<dyn Error + Send>
    }
}

impl Error for ProtocolError {}

pub type ProtocolResult<T> = Result<T, ProtocolError>;
