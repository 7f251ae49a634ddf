//! Constructors for unsigned, unbound transactions. One function per
//! contract type; nothing here touches the network or key material.

#[cfg(test)]
mod tests;

use std::error::Error;
use std::time::{SystemTime, UNIX_EPOCH};

use bytes::Bytes;
use derive_more::Display;

use protocol::byte_codec::{bytes_to_hex, encode_memo, encode_string, hex_to_bytes};
use protocol::codec::transaction::encode_raw_data;
use protocol::types::{
    ensure_non_negative, ensure_positive, AccountPermissionUpdate, AccountUpdate, Address,
    AssetIssue, ContractPayload, ExchangeCreate, ExchangeInject, ExchangeTransaction,
    ExchangeWithdraw, FreezeBalance, FrozenSupply, ParticipateAssetIssue, Permission,
    PermissionKey, PermissionType, RawTransaction, ResourceCode, Transfer, TransferAsset,
    TriggerSmartContract, UnfreezeAsset, UnfreezeBalance, Vote, VoteWitness, WithdrawBalance,
    WitnessCreate, WitnessUpdate,
};
use protocol::{ProtocolError, ProtocolErrorKind, ProtocolResult};

/// Token name selecting the chain's native coin in `transfer`.
pub const NATIVE_TOKEN: &str = "_";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetIssueOptions {
    pub name:                 String,
    pub abbreviation:         String,
    pub description:          String,
    pub url:                  String,
    pub total_supply:         i64,
    /// Native coin side of the price.
    pub trx_ratio:            i32,
    /// Token side of the price.
    pub token_ratio:          i32,
    pub precision:            i32,
    /// Milliseconds since epoch.
    pub start_time:           i64,
    pub end_time:             i64,
    /// Free bandwidth each holder may spend on this token.
    pub free_bandwidth:       i64,
    /// Free bandwidth all holders may spend together.
    pub free_bandwidth_limit: i64,
    /// `(amount, days)` pairs.
    pub frozen_supply:        Vec<(i64, i64)>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermissionOptions {
    pub permission_type: PermissionType,
    pub id:              i32,
    pub name:            String,
    pub threshold:       i64,
    pub parent_id:       i32,
    /// Hex bitmap of allowed contract types.
    pub operations:      Option<String>,
    /// `(address, weight)` pairs.
    pub keys:            Vec<(String, i64)>,
}

pub fn transfer(token: &str, from: &str, to: &str, amount: i64) -> ProtocolResult<RawTransaction> {
    let owner_address = parse_address(from)?;
    let to_address = parse_address(to)?;
    let amount = ensure_non_negative("amount", amount)?;

    let payload = if token == NATIVE_TOKEN {
        ContractPayload::Transfer(Transfer {
            owner_address,
            to_address,
            amount,
        })
    } else {
        if token.is_empty() {
            return Err(BuilderError::EmptyField("token").into());
        }

        ContractPayload::TransferAsset(TransferAsset {
            asset_name: Bytes::from(encode_string(token)),
            owner_address,
            to_address,
            amount,
        })
    };

    Ok(new_transaction(payload))
}

pub fn freeze_balance(
    owner: &str,
    amount: i64,
    duration: i64,
    resource: ResourceCode,
    receiver: Option<&str>,
) -> ProtocolResult<RawTransaction> {
    let payload = ContractPayload::Freeze(FreezeBalance {
        owner_address:    parse_address(owner)?,
        frozen_balance:   ensure_non_negative("frozen_balance", amount)?,
        frozen_duration:  ensure_non_negative("frozen_duration", duration)?,
        resource,
        receiver_address: parse_optional_address(receiver)?,
    });

    Ok(new_transaction(payload))
}

pub fn unfreeze_balance(
    owner: &str,
    resource: ResourceCode,
    receiver: Option<&str>,
) -> ProtocolResult<RawTransaction> {
    let payload = ContractPayload::Unfreeze(UnfreezeBalance {
        owner_address: parse_address(owner)?,
        resource,
        receiver_address: parse_optional_address(receiver)?,
    });

    Ok(new_transaction(payload))
}

pub fn unfreeze_asset(owner: &str) -> ProtocolResult<RawTransaction> {
    let payload = ContractPayload::UnfreezeAsset(UnfreezeAsset {
        owner_address: parse_address(owner)?,
    });

    Ok(new_transaction(payload))
}

/// Votes keep the caller's order.
pub fn vote(owner: &str, votes: &[(&str, i64)]) -> ProtocolResult<RawTransaction> {
    if votes.is_empty() {
        return Err(BuilderError::EmptyField("votes").into());
    }

    let votes = votes
        .iter()
        .map(|(witness, count)| {
            Ok(Vote {
                vote_address: parse_address(witness)?,
                vote_count:   ensure_non_negative("vote_count", *count)?,
            })
        })
        .collect::<ProtocolResult<Vec<_>>>()?;

    let payload = ContractPayload::Vote(VoteWitness {
        owner_address: parse_address(owner)?,
        votes,
    });

    Ok(new_transaction(payload))
}

pub fn witness_create(owner: &str, url: &str) -> ProtocolResult<RawTransaction> {
    let payload = ContractPayload::WitnessCreate(WitnessCreate {
        owner_address: parse_address(owner)?,
        url:           Bytes::from(encode_string(url)),
    });

    Ok(new_transaction(payload))
}

pub fn witness_update(owner: &str, url: &str) -> ProtocolResult<RawTransaction> {
    let payload = ContractPayload::WitnessUpdate(WitnessUpdate {
        owner_address: parse_address(owner)?,
        update_url:    Bytes::from(encode_string(url)),
    });

    Ok(new_transaction(payload))
}

pub fn account_update(owner: &str, name: &str) -> ProtocolResult<RawTransaction> {
    let payload = ContractPayload::AccountUpdate(AccountUpdate {
        account_name:  Bytes::from(encode_string(name)),
        owner_address: parse_address(owner)?,
    });

    Ok(new_transaction(payload))
}

pub fn withdraw_balance(owner: &str) -> ProtocolResult<RawTransaction> {
    let payload = ContractPayload::WithdrawBalance(WithdrawBalance {
        owner_address: parse_address(owner)?,
    });

    Ok(new_transaction(payload))
}

pub fn asset_issue(owner: &str, options: AssetIssueOptions) -> ProtocolResult<RawTransaction> {
    if options.name.is_empty() {
        return Err(BuilderError::EmptyField("name").into());
    }
    if options.end_time <= options.start_time {
        return Err(BuilderError::TimeRange {
            start: options.start_time,
            end:   options.end_time,
        }
        .into());
    }

    ensure_positive("total_supply", options.total_supply)?;
    ensure_positive("trx_num", i64::from(options.trx_ratio))?;
    ensure_positive("num", i64::from(options.token_ratio))?;
    ensure_non_negative("precision", i64::from(options.precision))?;
    ensure_non_negative("start_time", options.start_time)?;
    ensure_non_negative("free_asset_net_limit", options.free_bandwidth)?;
    ensure_non_negative("public_free_asset_net_limit", options.free_bandwidth_limit)?;

    let frozen_supply = options
        .frozen_supply
        .iter()
        .map(|(amount, days)| {
            Ok(FrozenSupply {
                frozen_amount: ensure_positive("frozen_amount", *amount)?,
                frozen_days:   ensure_positive("frozen_days", *days)?,
            })
        })
        .collect::<ProtocolResult<Vec<_>>>()?;

    let payload = ContractPayload::AssetIssue(AssetIssue {
        owner_address: parse_address(owner)?,
        name: Bytes::from(encode_string(&options.name)),
        abbr: Bytes::from(encode_string(&options.abbreviation)),
        total_supply: options.total_supply,
        frozen_supply,
        trx_num: options.trx_ratio,
        precision: options.precision,
        num: options.token_ratio,
        start_time: options.start_time,
        end_time: options.end_time,
        description: Bytes::from(encode_string(&options.description)),
        url: Bytes::from(encode_string(&options.url)),
        free_asset_net_limit: options.free_bandwidth,
        public_free_asset_net_limit: options.free_bandwidth_limit,
    });

    Ok(new_transaction(payload))
}

pub fn participate_asset(
    owner: &str,
    issuer: &str,
    token: &str,
    amount: i64,
) -> ProtocolResult<RawTransaction> {
    if token.is_empty() {
        return Err(BuilderError::EmptyField("asset_name").into());
    }

    let payload = ContractPayload::AssetParticipate(ParticipateAssetIssue {
        owner_address: parse_address(owner)?,
        to_address:    parse_address(issuer)?,
        asset_name:    Bytes::from(encode_string(token)),
        amount:        ensure_non_negative("amount", amount)?,
    });

    Ok(new_transaction(payload))
}

pub fn exchange_create(
    owner: &str,
    first_token_id: &str,
    first_token_balance: i64,
    second_token_id: &str,
    second_token_balance: i64,
) -> ProtocolResult<RawTransaction> {
    let payload = ContractPayload::ExchangeCreate(ExchangeCreate {
        owner_address:        parse_address(owner)?,
        first_token_id:       Bytes::from(encode_string(first_token_id)),
        first_token_balance:  ensure_non_negative("first_token_balance", first_token_balance)?,
        second_token_id:      Bytes::from(encode_string(second_token_id)),
        second_token_balance: ensure_non_negative("second_token_balance", second_token_balance)?,
    });

    Ok(new_transaction(payload))
}

pub fn exchange_inject(
    owner: &str,
    exchange_id: i64,
    token_id: &str,
    quant: i64,
) -> ProtocolResult<RawTransaction> {
    let payload = ContractPayload::ExchangeInject(ExchangeInject {
        owner_address: parse_address(owner)?,
        exchange_id:   ensure_non_negative("exchange_id", exchange_id)?,
        token_id:      Bytes::from(encode_string(token_id)),
        quant:         ensure_non_negative("quant", quant)?,
    });

    Ok(new_transaction(payload))
}

pub fn exchange_withdraw(
    owner: &str,
    exchange_id: i64,
    token_id: &str,
    quant: i64,
) -> ProtocolResult<RawTransaction> {
    let payload = ContractPayload::ExchangeWithdraw(ExchangeWithdraw {
        owner_address: parse_address(owner)?,
        exchange_id:   ensure_non_negative("exchange_id", exchange_id)?,
        token_id:      Bytes::from(encode_string(token_id)),
        quant:         ensure_non_negative("quant", quant)?,
    });

    Ok(new_transaction(payload))
}

pub fn exchange_transaction(
    owner: &str,
    exchange_id: i64,
    token_id: &str,
    quant: i64,
    expected: i64,
) -> ProtocolResult<RawTransaction> {
    let payload = ContractPayload::ExchangeTransaction(ExchangeTransaction {
        owner_address: parse_address(owner)?,
        exchange_id:   ensure_non_negative("exchange_id", exchange_id)?,
        token_id:      Bytes::from(encode_string(token_id)),
        quant:         ensure_non_negative("quant", quant)?,
        expected:      ensure_non_negative("expected", expected)?,
    });

    Ok(new_transaction(payload))
}

/// `data` is the hex encoded ABI call, `0x` prefix optional.
pub fn trigger_smart_contract(
    owner: &str,
    contract_address: &str,
    data: &str,
    call_value: i64,
    call_token_value: i64,
    token_id: i64,
) -> ProtocolResult<RawTransaction> {
    let payload = ContractPayload::TriggerSmartContract(TriggerSmartContract {
        owner_address:    parse_address(owner)?,
        contract_address: parse_address(contract_address)?,
        call_value:       ensure_non_negative("call_value", call_value)?,
        data:             Bytes::from(hex_to_bytes(data)?),
        call_token_value: ensure_non_negative("call_token_value", call_token_value)?,
        token_id:         ensure_non_negative("token_id", token_id)?,
    });

    Ok(new_transaction(payload))
}

pub fn account_permission_update(
    owner: &str,
    owner_permission: PermissionOptions,
    witness_permission: Option<PermissionOptions>,
    active_permissions: Vec<PermissionOptions>,
) -> ProtocolResult<RawTransaction> {
    let witness = match witness_permission {
        Some(options) => Some(build_permission(options)?),
        None => None,
    };
    let actives = active_permissions
        .into_iter()
        .map(build_permission)
        .collect::<ProtocolResult<Vec<_>>>()?;

    let payload = ContractPayload::AccountPermissionUpdate(AccountPermissionUpdate {
        owner_address: parse_address(owner)?,
        owner: build_permission(owner_permission)?,
        witness,
        actives,
    });

    Ok(new_transaction(payload))
}

/// Attach a note. Empty notes leave the memo unset.
pub fn with_memo(mut tx: RawTransaction, note: &str) -> RawTransaction {
    if !note.is_empty() {
        tx.memo = Some(Bytes::from(encode_memo(note)));
    }

    tx
}

/// Hex of the raw data with any block reference stripped. Matches what an
/// unbound transaction serializes to.
pub fn raw_data_hex(tx: &RawTransaction) -> ProtocolResult<String> {
    let mut unbound = tx.clone();
    unbound.binding = None;

    let raw = encode_raw_data(&unbound)?;
    Ok(bytes_to_hex(&raw))
}

pub fn transfer_hex(token: &str, from: &str, to: &str, amount: i64) -> ProtocolResult<String> {
    raw_data_hex(&transfer(token, from, to, amount)?)
}

pub fn trigger_smart_contract_hex(
    owner: &str,
    contract_address: &str,
    data: &str,
    call_value: i64,
    call_token_value: i64,
    token_id: i64,
) -> ProtocolResult<String> {
    let tx = trigger_smart_contract(
        owner,
        contract_address,
        data,
        call_value,
        call_token_value,
        token_id,
    )?;

    raw_data_hex(&tx)
}

/// Milliseconds since epoch. A clock set before 1970 reads as zero.
pub fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn new_transaction(payload: ContractPayload) -> RawTransaction {
    log::debug!("[builder]: new {} transaction", payload.contract_type());

    RawTransaction::new(payload, now_ms())
}

fn parse_address(address: &str) -> ProtocolResult<Address> {
    Address::from_base58(address.trim())
}

fn parse_optional_address(address: Option<&str>) -> ProtocolResult<Option<Address>> {
    match address {
        Some(address) if !address.trim().is_empty() => Ok(Some(parse_address(address)?)),
        _ => Ok(None),
    }
}

fn build_permission(options: PermissionOptions) -> ProtocolResult<Permission> {
    if options.keys.is_empty() {
        return Err(BuilderError::EmptyField("keys").into());
    }

    let keys = options
        .keys
        .iter()
        .map(|(address, weight)| {
            Ok(PermissionKey {
                address: parse_address(address)?,
                weight:  ensure_positive("weight", *weight)?,
            })
        })
        .collect::<ProtocolResult<Vec<_>>>()?;

    let operations = match options.operations {
        Some(ops) => Bytes::from(hex_to_bytes(&ops)?),
        None => Bytes::new(),
    };

    Ok(Permission {
        permission_type: options.permission_type,
        id: options.id,
        permission_name: options.name,
        threshold: ensure_positive("threshold", options.threshold)?,
        parent_id: options.parent_id,
        operations,
        keys,
    })
}

#[derive(Debug, Display)]
pub enum BuilderError {
    #[display(fmt = "{} must not be empty", _0)]
    EmptyField(&'static str),

    #[display(fmt = "end time {} is not after start time {}", end, start)]
    TimeRange { start: i64, end: i64 },
}

impl Error for BuilderError {}

impl From<BuilderError> for ProtocolError {
    fn from(err: BuilderError) -> ProtocolError {
        ProtocolError::new(ProtocolErrorKind::InvalidArgument, Box::new(err))
    }
}
