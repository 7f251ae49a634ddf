use protocol::byte_codec::bytes_to_hex;
use protocol::codec::contract::{encode_message, encode_parameter, TriggerSmartContract};
use protocol::types::{ContractType, ParamValue, PermissionType, RawTransaction};

use core_builder::PermissionOptions;

use crate::{decode, decode_named};

const OWNER: &str = "LLnCCHbSzfwWquEdaS5TF2Yt7uz5Qb1SZ1";
const RECEIVER: &str = "LNLS8Mt4ugdyRzn6yjAcD3312cbsX8R7xv";
const CONTRACT: &str = "LT19vajveijMCHQXBcS574VMkiTG66mrxL";

fn parameter_hex(tx: &RawTransaction) -> String {
    bytes_to_hex(&encode_parameter(&tx.contract).unwrap())
}

fn mock_permission(permission_type: PermissionType, id: i32) -> PermissionOptions {
    PermissionOptions {
        permission_type,
        id,
        name: "active".to_owned(),
        threshold: 2,
        parent_id: 0,
        operations: None,
        keys: vec![(OWNER.to_owned(), 1), (RECEIVER.to_owned(), 1)],
    }
}

#[test]
fn test_transfer_round_trip() {
    let tx = core_builder::transfer(core_builder::NATIVE_TOKEN, OWNER, RECEIVER, 1_000_000).unwrap();
    let params = decode(&parameter_hex(&tx), ContractType::TransferContract).unwrap();

    assert_eq!(params.len(), 3);
    assert_eq!(params.get("owner_address").and_then(ParamValue::as_str), Some(OWNER));
    assert_eq!(params.get("to_address").and_then(ParamValue::as_str), Some(RECEIVER));
    assert_eq!(params.get("amount").and_then(ParamValue::as_i64), Some(1_000_000));
}

#[test]
fn test_transfer_keeps_zero_fields() {
    // an all-default message has no bytes at all
    let params = decode("", ContractType::TransferContract).unwrap();

    assert!(params.contains_key("owner_address"));
    assert!(params.contains_key("to_address"));
    assert_eq!(params.get("amount"), Some(&ParamValue::Number(0)));
}

#[test]
fn test_transfer_asset() {
    let tx = core_builder::transfer("LindaToken", OWNER, RECEIVER, 7).unwrap();
    let params = decode_named(&parameter_hex(&tx), "TransferAssetContract").unwrap();

    assert_eq!(params.get("asset_name").and_then(ParamValue::as_str), Some("LindaToken"));
    assert_eq!(params.get("amount").and_then(ParamValue::as_i64), Some(7));
}

#[test]
fn test_trigger_omits_empty_fields() {
    let wire = TriggerSmartContract {
        owner_address:    vec![],
        contract_address: vec![],
        call_value:       0,
        data:             vec![],
        call_token_value: 0,
        token_id:         0,
    };
    let hex = bytes_to_hex(&encode_message(&wire).unwrap());

    let params = decode(&hex, ContractType::TriggerSmartContract).unwrap();
    let keys = params.keys().collect::<Vec<_>>();
    assert_eq!(keys, vec!["call_token_value", "call_value", "token_id"]);

    let tx =
        core_builder::trigger_smart_contract(OWNER, CONTRACT, "a9059cbb", 10, 0, 0).unwrap();
    let params = decode(&parameter_hex(&tx), ContractType::TriggerSmartContract).unwrap();
    assert_eq!(params.len(), 6);
    assert_eq!(params.get("contract_address").and_then(ParamValue::as_str), Some(CONTRACT));
    assert_eq!(params.get("data").and_then(ParamValue::as_str), Some("a9059cbb"));
}

#[test]
fn test_account_permission_update() {
    let tx = core_builder::account_permission_update(
        OWNER,
        mock_permission(PermissionType::Owner, 0),
        None,
        vec![mock_permission(PermissionType::Active, 2)],
    )
    .unwrap();

    let params = decode(&parameter_hex(&tx), ContractType::AccountPermissionUpdateContract).unwrap();
    assert!(!params.contains_key("witness"));

    let json = serde_json::to_value(&params).unwrap();
    assert_eq!(json["owner_address"], OWNER);
    assert_eq!(json["owner"]["type"], 0);
    assert_eq!(json["owner"]["threshold"], 2);
    assert_eq!(json["owner"]["keys"][1]["address"], RECEIVER);
    assert_eq!(json["actives"][0]["type"], 2);
    assert_eq!(json["actives"][0]["id"], 2);
}

#[test]
fn test_unsupported_contract_types() {
    let tx = core_builder::withdraw_balance(OWNER).unwrap();
    let hex = parameter_hex(&tx);

    for contract_type in ContractType::ALL.iter().copied() {
        let supported = match contract_type {
            ContractType::TransferContract
            | ContractType::TransferAssetContract
            | ContractType::TriggerSmartContract
            | ContractType::AccountPermissionUpdateContract => true,
            _ => false,
        };
        if supported {
            continue;
        }

        let err = decode(&hex, contract_type).unwrap_err();
        assert!(err.is_unsupported_contract_type(), "{}", contract_type);

        // the type is checked before the payload
        let err = decode("zz", contract_type).unwrap_err();
        assert!(err.is_unsupported_contract_type(), "{}", contract_type);
    }

    let err = decode_named(&hex, "ShieldedTransferContract").unwrap_err();
    assert!(err.is_unsupported_contract_type());
}

#[test]
fn test_malformed_input() {
    assert!(decode("0xzz", ContractType::TransferContract)
        .unwrap_err()
        .is_invalid_argument());

    // length delimited field running past the end
    assert!(decode("0a15", ContractType::TransferContract)
        .unwrap_err()
        .is_invalid_argument());
}
