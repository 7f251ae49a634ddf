use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use derive_more::Constructor;
use prost::Enumeration;
use serde::{Deserialize, Serialize};

use crate::types::contract::ContractPayload;
use crate::types::TypesError;
use crate::ProtocolError;

const TYPE_URL_PREFIX: &str = "type.googleapis.com/protocol.";

/// Contract type tags as carried by `Transaction.Contract.type` on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enumeration)]
pub enum ContractType {
    TransferContract = 1,
    TransferAssetContract = 2,
    VoteWitnessContract = 4,
    WitnessCreateContract = 5,
    AssetIssueContract = 6,
    WitnessUpdateContract = 8,
    ParticipateAssetIssueContract = 9,
    AccountUpdateContract = 10,
    FreezeBalanceContract = 11,
    UnfreezeBalanceContract = 12,
    WithdrawBalanceContract = 13,
    UnfreezeAssetContract = 14,
    TriggerSmartContract = 31,
    ExchangeCreateContract = 41,
    ExchangeInjectContract = 42,
    ExchangeWithdrawContract = 43,
    ExchangeTransactionContract = 44,
    AccountPermissionUpdateContract = 46,
}

impl ContractType {
    pub const ALL: [ContractType; 18] = [
        ContractType::TransferContract,
        ContractType::TransferAssetContract,
        ContractType::VoteWitnessContract,
        ContractType::WitnessCreateContract,
        ContractType::AssetIssueContract,
        ContractType::WitnessUpdateContract,
        ContractType::ParticipateAssetIssueContract,
        ContractType::AccountUpdateContract,
        ContractType::FreezeBalanceContract,
        ContractType::UnfreezeBalanceContract,
        ContractType::WithdrawBalanceContract,
        ContractType::UnfreezeAssetContract,
        ContractType::TriggerSmartContract,
        ContractType::ExchangeCreateContract,
        ContractType::ExchangeInjectContract,
        ContractType::ExchangeWithdrawContract,
        ContractType::ExchangeTransactionContract,
        ContractType::AccountPermissionUpdateContract,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ContractType::TransferContract => "TransferContract",
            ContractType::TransferAssetContract => "TransferAssetContract",
            ContractType::VoteWitnessContract => "VoteWitnessContract",
            ContractType::WitnessCreateContract => "WitnessCreateContract",
            ContractType::AssetIssueContract => "AssetIssueContract",
            ContractType::WitnessUpdateContract => "WitnessUpdateContract",
            ContractType::ParticipateAssetIssueContract => "ParticipateAssetIssueContract",
            ContractType::AccountUpdateContract => "AccountUpdateContract",
            ContractType::FreezeBalanceContract => "FreezeBalanceContract",
            ContractType::UnfreezeBalanceContract => "UnfreezeBalanceContract",
            ContractType::WithdrawBalanceContract => "WithdrawBalanceContract",
            ContractType::UnfreezeAssetContract => "UnfreezeAssetContract",
            ContractType::TriggerSmartContract => "TriggerSmartContract",
            ContractType::ExchangeCreateContract => "ExchangeCreateContract",
            ContractType::ExchangeInjectContract => "ExchangeInjectContract",
            ContractType::ExchangeWithdrawContract => "ExchangeWithdrawContract",
            ContractType::ExchangeTransactionContract => "ExchangeTransactionContract",
            ContractType::AccountPermissionUpdateContract => "AccountPermissionUpdateContract",
        }
    }

    /// `google.protobuf.Any` type url of the contract parameter.
    pub fn type_url(self) -> String {
        format!("{}{}", TYPE_URL_PREFIX, self.name())
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContractType {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractType::ALL
            .iter()
            .copied()
            .find(|contract_type| contract_type.name() == s)
            .ok_or_else(|| TypesError::ContractType(s.to_owned()).into())
    }
}

/// Anti-replay reference to a recent block. The three fields are always set
/// together.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub ref_block_bytes: [u8; 2],
    pub ref_block_hash:  [u8; 8],
    /// Milliseconds since epoch.
    pub expiration:      u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawTransaction {
    pub contract:   ContractPayload,
    /// Milliseconds since epoch.
    pub timestamp:  u64,
    pub memo:       Option<Bytes>,
    /// `None` until bound to a block.
    pub binding:    Option<Binding>,
    pub signatures: Vec<Bytes>,
}

impl RawTransaction {
    pub fn new(contract: ContractPayload, timestamp: u64) -> Self {
        RawTransaction {
            contract,
            timestamp,
            memo: None,
            binding: None,
            signatures: vec![],
        }
    }

    pub fn contract_type(&self) -> ContractType {
        self.contract.contract_type()
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    pub fn ref_block_bytes(&self) -> Option<[u8; 2]> {
        self.binding.map(|b| b.ref_block_bytes)
    }

    pub fn ref_block_hash(&self) -> Option<[u8; 8]> {
        self.binding.map(|b| b.ref_block_hash)
    }

    pub fn expiration(&self) -> Option<u64> {
        self.binding.map(|b| b.expiration)
    }
}

/// Latest block as reported by the network gateway.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockReference {
    pub number:    u64,
    /// Hex encoded block id.
    pub hash:      String,
    /// Milliseconds since epoch.
    pub timestamp: u64,
}

/// Serialized and signed transaction, ready for broadcast.
#[derive(Clone, Debug, PartialEq, Eq, Constructor, Serialize, Deserialize)]
pub struct SignedEnvelope {
    pub hex: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastResult {
    pub result:  bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txid:    Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Opaque key reference handed to a signer. The default signer reads it as
/// a hex private key, other signers may use it as a key id.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyHandle(String);

impl KeyHandle {
    pub fn new<S: Into<String>>(handle: S) -> Self {
        KeyHandle(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Key material stays out of logs.
impl fmt::Debug for KeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("KeyHandle(..)")
    }
}
