pub mod contract;
pub mod parameter;
pub mod primitive;
pub mod transaction;

use std::error::Error;

use derive_more::Display;

use crate::{ProtocolError, ProtocolErrorKind};

pub use contract::{
    AccountPermissionUpdate, AccountUpdate, AssetIssue, ContractPayload, ExchangeCreate,
    ExchangeInject, ExchangeTransaction, ExchangeWithdraw, FreezeBalance, FrozenSupply,
    ParticipateAssetIssue, Permission, PermissionKey, PermissionType, ResourceCode, Transfer,
    TransferAsset, TriggerSmartContract, UnfreezeAsset, UnfreezeBalance, Vote, VoteWitness,
    WithdrawBalance, WitnessCreate, WitnessUpdate,
};
pub use parameter::{DecodedParameters, ParamValue};
pub use primitive::{
    ensure_non_negative, ensure_positive, parse_amount, Address, Hash, ADDRESS_LEN,
    ADDRESS_PREFIX, HASH_LEN,
};
pub use transaction::{
    Binding, BlockReference, BroadcastResult, ContractType, KeyHandle, RawTransaction,
    SignedEnvelope,
};

#[derive(Debug, Display)]
pub enum TypesError {
    #[display(fmt = "Expect {:?} to get {:?}.", expect, real)]
    LengthMismatch { expect: usize, real: usize },

    #[display(fmt = "{:?}.", error)]
    FromHex { error: hex::FromHexError },

    #[display(fmt = "invalid address {:?}: {}", address, error)]
    Base58 {
        address: String,
        error:   bs58::decode::Error,
    },

    #[display(fmt = "address prefix {:#04x} is not {:#04x}", real, expect)]
    AddressPrefix { expect: u8, real: u8 },

    #[display(fmt = "public key must be 64 or 65 bytes, got {}", _0)]
    PubkeyLength(usize),

    #[display(fmt = "{} must not be negative, got {}", field, value)]
    NegativeAmount { field: &'static str, value: i64 },

    #[display(fmt = "{} must be positive, got {}", field, value)]
    NonPositive { field: &'static str, value: i64 },

    #[display(fmt = "{:?} is not an integral amount", _0)]
    NonIntegralAmount(String),

    #[display(fmt = "unknown resource {:?}, expect BANDWIDTH or ENERGY", _0)]
    ResourceCode(String),

    #[display(fmt = "unknown contract type {:?}", _0)]
    ContractType(String),
}

impl Error for TypesError {}

impl From<TypesError> for ProtocolError {
    fn from(error: TypesError) -> ProtocolError {
        let kind = match error {
            TypesError::ContractType(_) => ProtocolErrorKind::UnsupportedContractType,
            _ => ProtocolErrorKind::InvalidArgument,
        };

        ProtocolError::new(kind, Box::new(error))
    }
}

impl From<hex::FromHexError> for TypesError {
    fn from(error: hex::FromHexError) -> Self {
        TypesError::FromHex { error }
    }
}
