use std::str::FromStr;

use bytes::Bytes;
use prost::Enumeration;

use crate::types::primitive::Address;
use crate::types::transaction::ContractType;
use crate::types::TypesError;
use crate::ProtocolError;

/// Resource obtained by freezing balance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enumeration)]
pub enum ResourceCode {
    Bandwidth = 0,
    Energy = 1,
}

impl ResourceCode {
    pub fn name(self) -> &'static str {
        match self {
            ResourceCode::Bandwidth => "BANDWIDTH",
            ResourceCode::Energy => "ENERGY",
        }
    }
}

impl FromStr for ResourceCode {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "BANDWIDTH" => Ok(ResourceCode::Bandwidth),
            "ENERGY" => Ok(ResourceCode::Energy),
            _ => Err(TypesError::ResourceCode(s.to_owned()).into()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Enumeration)]
pub enum PermissionType {
    Owner = 0,
    Witness = 1,
    Active = 2,
}

impl PermissionType {
    pub fn name(self) -> &'static str {
        match self {
            PermissionType::Owner => "Owner",
            PermissionType::Witness => "Witness",
            PermissionType::Active => "Active",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub owner_address: Address,
    pub to_address:    Address,
    pub amount:        i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferAsset {
    pub asset_name:    Bytes,
    pub owner_address: Address,
    pub to_address:    Address,
    pub amount:        i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreezeBalance {
    pub owner_address:    Address,
    pub frozen_balance:   i64,
    /// Days.
    pub frozen_duration:  i64,
    pub resource:         ResourceCode,
    /// Delegate the resource to another account.
    pub receiver_address: Option<Address>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnfreezeBalance {
    pub owner_address:    Address,
    pub resource:         ResourceCode,
    pub receiver_address: Option<Address>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnfreezeAsset {
    pub owner_address: Address,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vote {
    pub vote_address: Address,
    pub vote_count:   i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoteWitness {
    pub owner_address: Address,
    pub votes:         Vec<Vote>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WitnessUpdate {
    pub owner_address: Address,
    pub update_url:    Bytes,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WitnessCreate {
    pub owner_address: Address,
    pub url:           Bytes,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountUpdate {
    pub account_name:  Bytes,
    pub owner_address: Address,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WithdrawBalance {
    pub owner_address: Address,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrozenSupply {
    pub frozen_amount: i64,
    pub frozen_days:   i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetIssue {
    pub owner_address:               Address,
    pub name:                        Bytes,
    pub abbr:                        Bytes,
    pub total_supply:                i64,
    pub frozen_supply:               Vec<FrozenSupply>,
    /// Native coin side of the issue price, `trx_num / num`.
    pub trx_num:                     i32,
    pub precision:                   i32,
    /// Token side of the issue price.
    pub num:                         i32,
    pub start_time:                  i64,
    pub end_time:                    i64,
    pub description:                 Bytes,
    pub url:                         Bytes,
    pub free_asset_net_limit:        i64,
    pub public_free_asset_net_limit: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipateAssetIssue {
    pub owner_address: Address,
    /// Issuer of the asset.
    pub to_address:    Address,
    pub asset_name:    Bytes,
    pub amount:        i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeCreate {
    pub owner_address:        Address,
    pub first_token_id:       Bytes,
    pub first_token_balance:  i64,
    pub second_token_id:      Bytes,
    pub second_token_balance: i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeInject {
    pub owner_address: Address,
    pub exchange_id:   i64,
    pub token_id:      Bytes,
    pub quant:         i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeWithdraw {
    pub owner_address: Address,
    pub exchange_id:   i64,
    pub token_id:      Bytes,
    pub quant:         i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExchangeTransaction {
    pub owner_address: Address,
    pub exchange_id:   i64,
    pub token_id:      Bytes,
    pub quant:         i64,
    pub expected:      i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerSmartContract {
    pub owner_address:    Address,
    pub contract_address: Address,
    pub call_value:       i64,
    /// ABI encoded call data.
    pub data:             Bytes,
    pub call_token_value: i64,
    pub token_id:         i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermissionKey {
    pub address: Address,
    pub weight:  i64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permission {
    pub permission_type: PermissionType,
    pub id:              i32,
    pub permission_name: String,
    pub threshold:       i64,
    pub parent_id:       i32,
    /// 32 bytes bitmap of allowed contract types, active permissions only.
    pub operations:      Bytes,
    pub keys:            Vec<PermissionKey>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountPermissionUpdate {
    pub owner_address: Address,
    pub owner:         Permission,
    pub witness:       Option<Permission>,
    pub actives:       Vec<Permission>,
}

/// Operation specific part of a transaction, one variant per supported
/// contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContractPayload {
    Transfer(Transfer),
    TransferAsset(TransferAsset),
    Freeze(FreezeBalance),
    Unfreeze(UnfreezeBalance),
    UnfreezeAsset(UnfreezeAsset),
    Vote(VoteWitness),
    WitnessUpdate(WitnessUpdate),
    WitnessCreate(WitnessCreate),
    AccountUpdate(AccountUpdate),
    WithdrawBalance(WithdrawBalance),
    AssetIssue(AssetIssue),
    AssetParticipate(ParticipateAssetIssue),
    ExchangeCreate(ExchangeCreate),
    ExchangeInject(ExchangeInject),
    ExchangeWithdraw(ExchangeWithdraw),
    ExchangeTransaction(ExchangeTransaction),
    TriggerSmartContract(TriggerSmartContract),
    AccountPermissionUpdate(AccountPermissionUpdate),
}

impl ContractPayload {
    pub fn contract_type(&self) -> ContractType {
        match self {
            ContractPayload::Transfer(_) => ContractType::TransferContract,
            ContractPayload::TransferAsset(_) => ContractType::TransferAssetContract,
            ContractPayload::Freeze(_) => ContractType::FreezeBalanceContract,
            ContractPayload::Unfreeze(_) => ContractType::UnfreezeBalanceContract,
            ContractPayload::UnfreezeAsset(_) => ContractType::UnfreezeAssetContract,
            ContractPayload::Vote(_) => ContractType::VoteWitnessContract,
            ContractPayload::WitnessUpdate(_) => ContractType::WitnessUpdateContract,
            ContractPayload::WitnessCreate(_) => ContractType::WitnessCreateContract,
            ContractPayload::AccountUpdate(_) => ContractType::AccountUpdateContract,
            ContractPayload::WithdrawBalance(_) => ContractType::WithdrawBalanceContract,
            ContractPayload::AssetIssue(_) => ContractType::AssetIssueContract,
            ContractPayload::AssetParticipate(_) => ContractType::ParticipateAssetIssueContract,
            ContractPayload::ExchangeCreate(_) => ContractType::ExchangeCreateContract,
            ContractPayload::ExchangeInject(_) => ContractType::ExchangeInjectContract,
            ContractPayload::ExchangeWithdraw(_) => ContractType::ExchangeWithdrawContract,
            ContractPayload::ExchangeTransaction(_) => ContractType::ExchangeTransactionContract,
            ContractPayload::TriggerSmartContract(_) => ContractType::TriggerSmartContract,
            ContractPayload::AccountPermissionUpdate(_) => {
                ContractType::AccountPermissionUpdateContract
            }
        }
    }

    /// Account that pays for and authorizes the operation.
    pub fn owner_address(&self) -> &Address {
        match self {
            ContractPayload::Transfer(c) => &c.owner_address,
            ContractPayload::TransferAsset(c) => &c.owner_address,
            ContractPayload::Freeze(c) => &c.owner_address,
            ContractPayload::Unfreeze(c) => &c.owner_address,
            ContractPayload::UnfreezeAsset(c) => &c.owner_address,
            ContractPayload::Vote(c) => &c.owner_address,
            ContractPayload::WitnessUpdate(c) => &c.owner_address,
            ContractPayload::WitnessCreate(c) => &c.owner_address,
            ContractPayload::AccountUpdate(c) => &c.owner_address,
            ContractPayload::WithdrawBalance(c) => &c.owner_address,
            ContractPayload::AssetIssue(c) => &c.owner_address,
            ContractPayload::AssetParticipate(c) => &c.owner_address,
            ContractPayload::ExchangeCreate(c) => &c.owner_address,
            ContractPayload::ExchangeInject(c) => &c.owner_address,
            ContractPayload::ExchangeWithdraw(c) => &c.owner_address,
            ContractPayload::ExchangeTransaction(c) => &c.owner_address,
            ContractPayload::TriggerSmartContract(c) => &c.owner_address,
            ContractPayload::AccountPermissionUpdate(c) => &c.owner_address,
        }
    }
}
