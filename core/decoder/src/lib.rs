//! Contract parameter decoding for display. Only the contract types a
//! wallet needs to preview are supported.

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::error::Error;

use derive_more::Display;
use prost::Message;

use protocol::byte_codec::{bytes_to_hex, hex_to_bytes};
use protocol::codec::contract::{
    AccountPermissionUpdateContract, Permission, TransferAssetContract, TransferContract,
    TriggerSmartContract,
};
use protocol::types::{Address, ContractType, DecodedParameters, ParamValue};
use protocol::{ProtocolError, ProtocolErrorKind, ProtocolResult};

pub fn decode(hex: &str, contract_type: ContractType) -> ProtocolResult<DecodedParameters> {
    match contract_type {
        ContractType::TransferContract => decode_transfer(&hex_to_bytes(hex)?),
        ContractType::TransferAssetContract => decode_transfer_asset(&hex_to_bytes(hex)?),
        ContractType::TriggerSmartContract => decode_trigger_smart_contract(&hex_to_bytes(hex)?),
        ContractType::AccountPermissionUpdateContract => {
            decode_account_permission_update(&hex_to_bytes(hex)?)
        }
        ContractType::VoteWitnessContract
        | ContractType::WitnessCreateContract
        | ContractType::AssetIssueContract
        | ContractType::WitnessUpdateContract
        | ContractType::ParticipateAssetIssueContract
        | ContractType::AccountUpdateContract
        | ContractType::FreezeBalanceContract
        | ContractType::UnfreezeBalanceContract
        | ContractType::WithdrawBalanceContract
        | ContractType::UnfreezeAssetContract
        | ContractType::ExchangeCreateContract
        | ContractType::ExchangeInjectContract
        | ContractType::ExchangeWithdrawContract
        | ContractType::ExchangeTransactionContract => {
            Err(DecoderError::Unsupported(contract_type).into())
        }
    }
}

/// Same as `decode`, with the contract type given by its wire name.
pub fn decode_named(hex: &str, contract_type: &str) -> ProtocolResult<DecodedParameters> {
    decode(hex, contract_type.parse::<ContractType>()?)
}

fn decode_transfer(bytes: &[u8]) -> ProtocolResult<DecodedParameters> {
    let contract = decode_wire::<TransferContract>(bytes, ContractType::TransferContract)?;

    let mut params = DecodedParameters::new();
    params.insert("owner_address", address_value(&contract.owner_address));
    params.insert("to_address", address_value(&contract.to_address));
    params.insert("amount", contract.amount);

    Ok(params)
}

fn decode_transfer_asset(bytes: &[u8]) -> ProtocolResult<DecodedParameters> {
    let contract =
        decode_wire::<TransferAssetContract>(bytes, ContractType::TransferAssetContract)?;

    let mut params = DecodedParameters::new();
    params.insert("asset_name", text_value(&contract.asset_name));
    params.insert("owner_address", address_value(&contract.owner_address));
    params.insert("to_address", address_value(&contract.to_address));
    params.insert("amount", contract.amount);

    Ok(params)
}

fn decode_trigger_smart_contract(bytes: &[u8]) -> ProtocolResult<DecodedParameters> {
    let contract = decode_wire::<TriggerSmartContract>(bytes, ContractType::TriggerSmartContract)?;

    let mut params = DecodedParameters::new();
    params.insert("owner_address", address_value(&contract.owner_address));
    params.insert("contract_address", address_value(&contract.contract_address));
    params.insert("call_value", contract.call_value);
    params.insert("data", bytes_to_hex(&contract.data));
    params.insert("call_token_value", contract.call_token_value);
    params.insert("token_id", contract.token_id);

    Ok(params.without_empty())
}

fn decode_account_permission_update(bytes: &[u8]) -> ProtocolResult<DecodedParameters> {
    let contract = decode_wire::<AccountPermissionUpdateContract>(
        bytes,
        ContractType::AccountPermissionUpdateContract,
    )?;

    let mut params = DecodedParameters::new();
    params.insert("owner_address", address_value(&contract.owner_address));
    params.insert("owner", optional_permission_value(contract.owner.as_ref()));
    params.insert("witness", optional_permission_value(contract.witness.as_ref()));
    params.insert(
        "actives",
        ParamValue::List(contract.actives.iter().map(permission_value).collect()),
    );

    Ok(params.without_empty())
}

fn optional_permission_value(permission: Option<&Permission>) -> ParamValue {
    match permission {
        Some(permission) => permission_value(permission),
        None => ParamValue::Text(String::new()),
    }
}

fn permission_value(permission: &Permission) -> ParamValue {
    let keys = permission
        .keys
        .iter()
        .map(|key| {
            let mut map = BTreeMap::new();
            map.insert("address".to_owned(), address_value(&key.address));
            map.insert("weight".to_owned(), ParamValue::Number(key.weight));
            ParamValue::Map(map)
        })
        .collect::<Vec<_>>();

    let mut map = BTreeMap::new();
    map.insert("type".to_owned(), ParamValue::from(permission.r#type));
    map.insert("id".to_owned(), ParamValue::from(permission.id));
    map.insert(
        "permission_name".to_owned(),
        ParamValue::Text(permission.permission_name.clone()),
    );
    map.insert("threshold".to_owned(), ParamValue::Number(permission.threshold));
    map.insert("parent_id".to_owned(), ParamValue::from(permission.parent_id));
    map.insert(
        "operations".to_owned(),
        ParamValue::Text(bytes_to_hex(&permission.operations)),
    );
    map.insert("keys".to_owned(), ParamValue::List(keys));

    ParamValue::Map(map)
}

fn address_value(bytes: &[u8]) -> ParamValue {
    if bytes.is_empty() {
        return ParamValue::Text(String::new());
    }

    ParamValue::Address(Address::encode_base58(bytes))
}

fn text_value(bytes: &[u8]) -> ParamValue {
    ParamValue::Text(String::from_utf8_lossy(bytes).into_owned())
}

fn decode_wire<M: Message + Default>(bytes: &[u8], contract_type: ContractType) -> ProtocolResult<M> {
    M::decode(bytes).map_err(|error| DecoderError::Protobuf { contract_type, error }.into())
}

#[derive(Debug, Display)]
pub enum DecoderError {
    #[display(fmt = "malformed {} parameter: {}", contract_type, error)]
    Protobuf {
        contract_type: ContractType,
        error:         prost::DecodeError,
    },

    #[display(fmt = "{} parameters can not be decoded", _0)]
    Unsupported(ContractType),
}

impl Error for DecoderError {}

impl From<DecoderError> for ProtocolError {
    fn from(err: DecoderError) -> ProtocolError {
        let kind = match err {
            DecoderError::Protobuf { .. } => ProtocolErrorKind::InvalidArgument,
            DecoderError::Unsupported(_) => ProtocolErrorKind::UnsupportedContractType,
        };

        ProtocolError::new(kind, Box::new(err))
    }
}
