use std::convert::{TryFrom, TryInto};

use bytes::Bytes;
use prost::Message;

use crate::{
    codec::{transaction::Any, CodecError},
    types::contract as domain,
    types::primitive as protocol_primitive,
    types::{ContractType, PermissionType, ResourceCode},
    ProtocolError, ProtocolResult,
};

// #################
// Protobuf
// #################

#[derive(Clone, PartialEq, Message)]
pub struct TransferContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,

    #[prost(bytes, tag = "2")]
    pub to_address: Vec<u8>,

    #[prost(int64, tag = "3")]
    pub amount: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct TransferAssetContract {
    #[prost(bytes, tag = "1")]
    pub asset_name: Vec<u8>,

    #[prost(bytes, tag = "2")]
    pub owner_address: Vec<u8>,

    #[prost(bytes, tag = "3")]
    pub to_address: Vec<u8>,

    #[prost(int64, tag = "4")]
    pub amount: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct FreezeBalanceContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,

    #[prost(int64, tag = "2")]
    pub frozen_balance: i64,

    #[prost(int64, tag = "3")]
    pub frozen_duration: i64,

    #[prost(enumeration = "ResourceCode", tag = "10")]
    pub resource: i32,

    #[prost(bytes, tag = "15")]
    pub receiver_address: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct UnfreezeBalanceContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,

    #[prost(enumeration = "ResourceCode", tag = "10")]
    pub resource: i32,

    #[prost(bytes, tag = "15")]
    pub receiver_address: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct UnfreezeAssetContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Vote {
    #[prost(bytes, tag = "1")]
    pub vote_address: Vec<u8>,

    #[prost(int64, tag = "2")]
    pub vote_count: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct VoteWitnessContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,

    #[prost(message, repeated, tag = "2")]
    pub votes: Vec<Vote>,
}

#[derive(Clone, PartialEq, Message)]
pub struct WitnessCreateContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,

    #[prost(bytes, tag = "2")]
    pub url: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct WitnessUpdateContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,

    #[prost(bytes, tag = "12")]
    pub update_url: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct AccountUpdateContract {
    #[prost(bytes, tag = "1")]
    pub account_name: Vec<u8>,

    #[prost(bytes, tag = "2")]
    pub owner_address: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct WithdrawBalanceContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct FrozenSupply {
    #[prost(int64, tag = "1")]
    pub frozen_amount: i64,

    #[prost(int64, tag = "2")]
    pub frozen_days: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct AssetIssueContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,

    #[prost(bytes, tag = "2")]
    pub name: Vec<u8>,

    #[prost(bytes, tag = "3")]
    pub abbr: Vec<u8>,

    #[prost(int64, tag = "4")]
    pub total_supply: i64,

    #[prost(message, repeated, tag = "5")]
    pub frozen_supply: Vec<FrozenSupply>,

    #[prost(int32, tag = "6")]
    pub trx_num: i32,

    #[prost(int32, tag = "7")]
    pub precision: i32,

    #[prost(int32, tag = "8")]
    pub num: i32,

    #[prost(int64, tag = "9")]
    pub start_time: i64,

    #[prost(int64, tag = "10")]
    pub end_time: i64,

    #[prost(bytes, tag = "20")]
    pub description: Vec<u8>,

    #[prost(bytes, tag = "21")]
    pub url: Vec<u8>,

    #[prost(int64, tag = "22")]
    pub free_asset_net_limit: i64,

    #[prost(int64, tag = "23")]
    pub public_free_asset_net_limit: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct ParticipateAssetIssueContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,

    #[prost(bytes, tag = "2")]
    pub to_address: Vec<u8>,

    #[prost(bytes, tag = "3")]
    pub asset_name: Vec<u8>,

    #[prost(int64, tag = "4")]
    pub amount: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct ExchangeCreateContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,

    #[prost(bytes, tag = "2")]
    pub first_token_id: Vec<u8>,

    #[prost(int64, tag = "3")]
    pub first_token_balance: i64,

    #[prost(bytes, tag = "4")]
    pub second_token_id: Vec<u8>,

    #[prost(int64, tag = "5")]
    pub second_token_balance: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct ExchangeInjectContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,

    #[prost(int64, tag = "2")]
    pub exchange_id: i64,

    #[prost(bytes, tag = "3")]
    pub token_id: Vec<u8>,

    #[prost(int64, tag = "4")]
    pub quant: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct ExchangeWithdrawContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,

    #[prost(int64, tag = "2")]
    pub exchange_id: i64,

    #[prost(bytes, tag = "3")]
    pub token_id: Vec<u8>,

    #[prost(int64, tag = "4")]
    pub quant: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct ExchangeTransactionContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,

    #[prost(int64, tag = "2")]
    pub exchange_id: i64,

    #[prost(bytes, tag = "3")]
    pub token_id: Vec<u8>,

    #[prost(int64, tag = "4")]
    pub quant: i64,

    #[prost(int64, tag = "5")]
    pub expected: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct TriggerSmartContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,

    #[prost(bytes, tag = "2")]
    pub contract_address: Vec<u8>,

    #[prost(int64, tag = "3")]
    pub call_value: i64,

    #[prost(bytes, tag = "4")]
    pub data: Vec<u8>,

    #[prost(int64, tag = "5")]
    pub call_token_value: i64,

    #[prost(int64, tag = "6")]
    pub token_id: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct Key {
    #[prost(bytes, tag = "1")]
    pub address: Vec<u8>,

    #[prost(int64, tag = "2")]
    pub weight: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct Permission {
    #[prost(enumeration = "PermissionType", tag = "1")]
    pub r#type: i32,

    #[prost(int32, tag = "2")]
    pub id: i32,

    #[prost(string, tag = "3")]
    pub permission_name: String,

    #[prost(int64, tag = "4")]
    pub threshold: i64,

    #[prost(int32, tag = "5")]
    pub parent_id: i32,

    #[prost(bytes, tag = "6")]
    pub operations: Vec<u8>,

    #[prost(message, repeated, tag = "7")]
    pub keys: Vec<Key>,
}

#[derive(Clone, PartialEq, Message)]
pub struct AccountPermissionUpdateContract {
    #[prost(bytes, tag = "1")]
    pub owner_address: Vec<u8>,

    #[prost(message, tag = "2")]
    pub owner: Option<Permission>,

    #[prost(message, tag = "3")]
    pub witness: Option<Permission>,

    #[prost(message, repeated, tag = "4")]
    pub actives: Vec<Permission>,
}

// #################
// Conversion
// #################

impl_owner_contract_conversion!(Transfer => TransferContract {
    owner_address, to_address ; ; amount
});

impl_owner_contract_conversion!(TransferAsset => TransferAssetContract {
    owner_address, to_address ; asset_name ; amount
});

impl_owner_contract_conversion!(UnfreezeAsset => UnfreezeAssetContract {
    owner_address ; ;
});

impl_owner_contract_conversion!(WitnessCreate => WitnessCreateContract {
    owner_address ; url ;
});

impl_owner_contract_conversion!(WitnessUpdate => WitnessUpdateContract {
    owner_address ; update_url ;
});

impl_owner_contract_conversion!(AccountUpdate => AccountUpdateContract {
    owner_address ; account_name ;
});

impl_owner_contract_conversion!(WithdrawBalance => WithdrawBalanceContract {
    owner_address ; ;
});

impl_owner_contract_conversion!(ParticipateAssetIssue => ParticipateAssetIssueContract {
    owner_address, to_address ; asset_name ; amount
});

impl_owner_contract_conversion!(ExchangeCreate => ExchangeCreateContract {
    owner_address ; first_token_id, second_token_id ; first_token_balance, second_token_balance
});

impl_owner_contract_conversion!(ExchangeInject => ExchangeInjectContract {
    owner_address ; token_id ; exchange_id, quant
});

impl_owner_contract_conversion!(ExchangeWithdraw => ExchangeWithdrawContract {
    owner_address ; token_id ; exchange_id, quant
});

impl_owner_contract_conversion!(ExchangeTransaction => ExchangeTransactionContract {
    owner_address ; token_id ; exchange_id, quant, expected
});

impl_owner_contract_conversion!(TriggerSmartContract => TriggerSmartContract {
    owner_address, contract_address ; data ; call_value, call_token_value, token_id
});

// FreezeBalance

impl From<domain::FreezeBalance> for FreezeBalanceContract {
    fn from(freeze: domain::FreezeBalance) -> FreezeBalanceContract {
        FreezeBalanceContract {
            owner_address:    freeze.owner_address.as_bytes().to_vec(),
            frozen_balance:   freeze.frozen_balance,
            frozen_duration:  freeze.frozen_duration,
            resource:         freeze.resource as i32,
            receiver_address: optional_address_bytes(freeze.receiver_address),
        }
    }
}

impl TryFrom<FreezeBalanceContract> for domain::FreezeBalance {
    type Error = ProtocolError;

    fn try_from(freeze: FreezeBalanceContract) -> Result<domain::FreezeBalance, Self::Error> {
        Ok(domain::FreezeBalance {
            owner_address:    address(freeze.owner_address)?,
            frozen_balance:   freeze.frozen_balance,
            frozen_duration:  freeze.frozen_duration,
            resource:         resource_code(freeze.resource)?,
            receiver_address: optional_address(freeze.receiver_address)?,
        })
    }
}

// UnfreezeBalance

impl From<domain::UnfreezeBalance> for UnfreezeBalanceContract {
    fn from(unfreeze: domain::UnfreezeBalance) -> UnfreezeBalanceContract {
        UnfreezeBalanceContract {
            owner_address:    unfreeze.owner_address.as_bytes().to_vec(),
            resource:         unfreeze.resource as i32,
            receiver_address: optional_address_bytes(unfreeze.receiver_address),
        }
    }
}

impl TryFrom<UnfreezeBalanceContract> for domain::UnfreezeBalance {
    type Error = ProtocolError;

    fn try_from(unfreeze: UnfreezeBalanceContract) -> Result<domain::UnfreezeBalance, Self::Error> {
        Ok(domain::UnfreezeBalance {
            owner_address:    address(unfreeze.owner_address)?,
            resource:         resource_code(unfreeze.resource)?,
            receiver_address: optional_address(unfreeze.receiver_address)?,
        })
    }
}

// VoteWitness

impl From<domain::VoteWitness> for VoteWitnessContract {
    fn from(vote: domain::VoteWitness) -> VoteWitnessContract {
        let votes = vote
            .votes
            .into_iter()
            .map(|v| Vote {
                vote_address: v.vote_address.as_bytes().to_vec(),
                vote_count:   v.vote_count,
            })
            .collect::<Vec<_>>();

        VoteWitnessContract {
            owner_address: vote.owner_address.as_bytes().to_vec(),
            votes,
        }
    }
}

impl TryFrom<VoteWitnessContract> for domain::VoteWitness {
    type Error = ProtocolError;

    fn try_from(vote: VoteWitnessContract) -> Result<domain::VoteWitness, Self::Error> {
        let votes = vote
            .votes
            .into_iter()
            .map(|v| {
                Ok(domain::Vote {
                    vote_address: address(v.vote_address)?,
                    vote_count:   v.vote_count,
                })
            })
            .collect::<ProtocolResult<Vec<_>>>()?;

        Ok(domain::VoteWitness {
            owner_address: address(vote.owner_address)?,
            votes,
        })
    }
}

// AssetIssue

impl From<domain::AssetIssue> for AssetIssueContract {
    fn from(asset: domain::AssetIssue) -> AssetIssueContract {
        let frozen_supply = asset
            .frozen_supply
            .into_iter()
            .map(|f| FrozenSupply {
                frozen_amount: f.frozen_amount,
                frozen_days:   f.frozen_days,
            })
            .collect::<Vec<_>>();

        AssetIssueContract {
            owner_address: asset.owner_address.as_bytes().to_vec(),
            name: asset.name.to_vec(),
            abbr: asset.abbr.to_vec(),
            total_supply: asset.total_supply,
            frozen_supply,
            trx_num: asset.trx_num,
            precision: asset.precision,
            num: asset.num,
            start_time: asset.start_time,
            end_time: asset.end_time,
            description: asset.description.to_vec(),
            url: asset.url.to_vec(),
            free_asset_net_limit: asset.free_asset_net_limit,
            public_free_asset_net_limit: asset.public_free_asset_net_limit,
        }
    }
}

impl TryFrom<AssetIssueContract> for domain::AssetIssue {
    type Error = ProtocolError;

    fn try_from(asset: AssetIssueContract) -> Result<domain::AssetIssue, Self::Error> {
        let frozen_supply = asset
            .frozen_supply
            .into_iter()
            .map(|f| domain::FrozenSupply {
                frozen_amount: f.frozen_amount,
                frozen_days:   f.frozen_days,
            })
            .collect::<Vec<_>>();

        Ok(domain::AssetIssue {
            owner_address: address(asset.owner_address)?,
            name: Bytes::from(asset.name),
            abbr: Bytes::from(asset.abbr),
            total_supply: asset.total_supply,
            frozen_supply,
            trx_num: asset.trx_num,
            precision: asset.precision,
            num: asset.num,
            start_time: asset.start_time,
            end_time: asset.end_time,
            description: Bytes::from(asset.description),
            url: Bytes::from(asset.url),
            free_asset_net_limit: asset.free_asset_net_limit,
            public_free_asset_net_limit: asset.public_free_asset_net_limit,
        })
    }
}

// Permission

impl From<domain::Permission> for Permission {
    fn from(permission: domain::Permission) -> Permission {
        let keys = permission
            .keys
            .into_iter()
            .map(|k| Key {
                address: k.address.as_bytes().to_vec(),
                weight:  k.weight,
            })
            .collect::<Vec<_>>();

        Permission {
            r#type: permission.permission_type as i32,
            id: permission.id,
            permission_name: permission.permission_name,
            threshold: permission.threshold,
            parent_id: permission.parent_id,
            operations: permission.operations.to_vec(),
            keys,
        }
    }
}

impl TryFrom<Permission> for domain::Permission {
    type Error = ProtocolError;

    fn try_from(permission: Permission) -> Result<domain::Permission, Self::Error> {
        let permission_type =
            PermissionType::from_i32(permission.r#type).ok_or(CodecError::InvalidEnumValue {
                r#type: "PermissionType",
                value:  permission.r#type,
            })?;

        let keys = permission
            .keys
            .into_iter()
            .map(|k| {
                Ok(domain::PermissionKey {
                    address: address(k.address)?,
                    weight:  k.weight,
                })
            })
            .collect::<ProtocolResult<Vec<_>>>()?;

        Ok(domain::Permission {
            permission_type,
            id: permission.id,
            permission_name: permission.permission_name,
            threshold: permission.threshold,
            parent_id: permission.parent_id,
            operations: Bytes::from(permission.operations),
            keys,
        })
    }
}

// AccountPermissionUpdate

impl From<domain::AccountPermissionUpdate> for AccountPermissionUpdateContract {
    fn from(update: domain::AccountPermissionUpdate) -> AccountPermissionUpdateContract {
        AccountPermissionUpdateContract {
            owner_address: update.owner_address.as_bytes().to_vec(),
            owner:         Some(Permission::from(update.owner)),
            witness:       update.witness.map(Permission::from),
            actives:       update.actives.into_iter().map(Permission::from).collect(),
        }
    }
}

impl TryFrom<AccountPermissionUpdateContract> for domain::AccountPermissionUpdate {
    type Error = ProtocolError;

    fn try_from(
        update: AccountPermissionUpdateContract,
    ) -> Result<domain::AccountPermissionUpdate, Self::Error> {
        let owner = field!(update.owner, "AccountPermissionUpdateContract", "owner")?;
        let witness = match update.witness {
            Some(witness) => Some(domain::Permission::try_from(witness)?),
            None => None,
        };
        let actives = update
            .actives
            .into_iter()
            .map(domain::Permission::try_from)
            .collect::<ProtocolResult<Vec<_>>>()?;

        Ok(domain::AccountPermissionUpdate {
            owner_address: address(update.owner_address)?,
            owner: domain::Permission::try_from(owner)?,
            witness,
            actives,
        })
    }
}

// ContractPayload

/// Serialized parameter of a contract, the `value` of its `Any` wrapper.
pub fn encode_parameter(payload: &domain::ContractPayload) -> ProtocolResult<Bytes> {
    let value = match payload.clone() {
        domain::ContractPayload::Transfer(c) => encode_message(&TransferContract::from(c)),
        domain::ContractPayload::TransferAsset(c) => {
            encode_message(&TransferAssetContract::from(c))
        }
        domain::ContractPayload::Freeze(c) => encode_message(&FreezeBalanceContract::from(c)),
        domain::ContractPayload::Unfreeze(c) => encode_message(&UnfreezeBalanceContract::from(c)),
        domain::ContractPayload::UnfreezeAsset(c) => {
            encode_message(&UnfreezeAssetContract::from(c))
        }
        domain::ContractPayload::Vote(c) => encode_message(&VoteWitnessContract::from(c)),
        domain::ContractPayload::WitnessUpdate(c) => {
            encode_message(&WitnessUpdateContract::from(c))
        }
        domain::ContractPayload::WitnessCreate(c) => {
            encode_message(&WitnessCreateContract::from(c))
        }
        domain::ContractPayload::AccountUpdate(c) => {
            encode_message(&AccountUpdateContract::from(c))
        }
        domain::ContractPayload::WithdrawBalance(c) => {
            encode_message(&WithdrawBalanceContract::from(c))
        }
        domain::ContractPayload::AssetIssue(c) => encode_message(&AssetIssueContract::from(c)),
        domain::ContractPayload::AssetParticipate(c) => {
            encode_message(&ParticipateAssetIssueContract::from(c))
        }
        domain::ContractPayload::ExchangeCreate(c) => {
            encode_message(&ExchangeCreateContract::from(c))
        }
        domain::ContractPayload::ExchangeInject(c) => {
            encode_message(&ExchangeInjectContract::from(c))
        }
        domain::ContractPayload::ExchangeWithdraw(c) => {
            encode_message(&ExchangeWithdrawContract::from(c))
        }
        domain::ContractPayload::ExchangeTransaction(c) => {
            encode_message(&ExchangeTransactionContract::from(c))
        }
        domain::ContractPayload::TriggerSmartContract(c) => {
            encode_message(&TriggerSmartContract::from(c))
        }
        domain::ContractPayload::AccountPermissionUpdate(c) => {
            encode_message(&AccountPermissionUpdateContract::from(c))
        }
    }?;

    Ok(Bytes::from(value))
}

pub fn payload_to_any(payload: &domain::ContractPayload) -> ProtocolResult<Any> {
    let value = encode_parameter(payload)?;

    Ok(Any {
        type_url: payload.contract_type().type_url(),
        value:    value.to_vec(),
    })
}

pub fn payload_from_any(contract_type: ContractType, any: Any) -> ProtocolResult<domain::ContractPayload> {
    let expect = contract_type.type_url();
    if any.type_url != expect {
        return Err(CodecError::TypeUrlMismatch {
            expect,
            real: any.type_url,
        }
        .into());
    }

    let value = any.value.as_slice();
    let payload = match contract_type {
        ContractType::TransferContract => {
            domain::ContractPayload::Transfer(decode_message::<TransferContract>(value)?.try_into()?)
        }
        ContractType::TransferAssetContract => domain::ContractPayload::TransferAsset(
            decode_message::<TransferAssetContract>(value)?.try_into()?,
        ),
        ContractType::FreezeBalanceContract => domain::ContractPayload::Freeze(
            decode_message::<FreezeBalanceContract>(value)?.try_into()?,
        ),
        ContractType::UnfreezeBalanceContract => domain::ContractPayload::Unfreeze(
            decode_message::<UnfreezeBalanceContract>(value)?.try_into()?,
        ),
        ContractType::UnfreezeAssetContract => domain::ContractPayload::UnfreezeAsset(
            decode_message::<UnfreezeAssetContract>(value)?.try_into()?,
        ),
        ContractType::VoteWitnessContract => domain::ContractPayload::Vote(
            decode_message::<VoteWitnessContract>(value)?.try_into()?,
        ),
        ContractType::WitnessUpdateContract => domain::ContractPayload::WitnessUpdate(
            decode_message::<WitnessUpdateContract>(value)?.try_into()?,
        ),
        ContractType::WitnessCreateContract => domain::ContractPayload::WitnessCreate(
            decode_message::<WitnessCreateContract>(value)?.try_into()?,
        ),
        ContractType::AccountUpdateContract => domain::ContractPayload::AccountUpdate(
            decode_message::<AccountUpdateContract>(value)?.try_into()?,
        ),
        ContractType::WithdrawBalanceContract => domain::ContractPayload::WithdrawBalance(
            decode_message::<WithdrawBalanceContract>(value)?.try_into()?,
        ),
        ContractType::AssetIssueContract => domain::ContractPayload::AssetIssue(
            decode_message::<AssetIssueContract>(value)?.try_into()?,
        ),
        ContractType::ParticipateAssetIssueContract => domain::ContractPayload::AssetParticipate(
            decode_message::<ParticipateAssetIssueContract>(value)?.try_into()?,
        ),
        ContractType::ExchangeCreateContract => domain::ContractPayload::ExchangeCreate(
            decode_message::<ExchangeCreateContract>(value)?.try_into()?,
        ),
        ContractType::ExchangeInjectContract => domain::ContractPayload::ExchangeInject(
            decode_message::<ExchangeInjectContract>(value)?.try_into()?,
        ),
        ContractType::ExchangeWithdrawContract => domain::ContractPayload::ExchangeWithdraw(
            decode_message::<ExchangeWithdrawContract>(value)?.try_into()?,
        ),
        ContractType::ExchangeTransactionContract => domain::ContractPayload::ExchangeTransaction(
            decode_message::<ExchangeTransactionContract>(value)?.try_into()?,
        ),
        ContractType::TriggerSmartContract => domain::ContractPayload::TriggerSmartContract(
            decode_message::<TriggerSmartContract>(value)?.try_into()?,
        ),
        ContractType::AccountPermissionUpdateContract => {
            domain::ContractPayload::AccountPermissionUpdate(
                decode_message::<AccountPermissionUpdateContract>(value)?.try_into()?,
            )
        }
    };

    Ok(payload)
}

// #################
// Helpers
// #################

pub fn encode_message<M: Message>(message: &M) -> ProtocolResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(message.encoded_len());
    message.encode(&mut buf).map_err(CodecError::from)?;

    Ok(buf)
}

pub fn decode_message<M: Message + Default>(bytes: &[u8]) -> ProtocolResult<M> {
    Ok(M::decode(bytes).map_err(CodecError::from)?)
}

fn address(bytes: Vec<u8>) -> ProtocolResult<protocol_primitive::Address> {
    protocol_primitive::Address::from_bytes(Bytes::from(bytes))
}

fn optional_address(bytes: Vec<u8>) -> ProtocolResult<Option<protocol_primitive::Address>> {
    if bytes.is_empty() {
        return Ok(None);
    }

    address(bytes).map(Some)
}

fn optional_address_bytes(address: Option<protocol_primitive::Address>) -> Vec<u8> {
    address
        .map(|a| a.as_bytes().to_vec())
        .unwrap_or_default()
}

fn resource_code(value: i32) -> ProtocolResult<ResourceCode> {
    ResourceCode::from_i32(value).ok_or_else(|| {
        CodecError::InvalidEnumValue {
            r#type: "ResourceCode",
            value,
        }
        .into()
    })
}
