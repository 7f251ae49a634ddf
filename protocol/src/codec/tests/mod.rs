use std::convert::{TryFrom, TryInto};

use bytes::Bytes;
use prost::Message;

use crate::codec::contract::{encode_parameter, TransferContract};
use crate::codec::transaction::{self, decode_raw_data, Any, Contract, TransactionRaw};
use crate::codec::ProtocolCodecSync;
use crate::types::{
    AccountPermissionUpdate, Address, Binding, ContractPayload, FreezeBalance, Permission,
    PermissionKey, PermissionType, RawTransaction, ResourceCode, Transfer, TriggerSmartContract,
};

const TRANSFER_PARAMETER_HEX: &str = "0a15301111111111111111111111111111111111111111121530222222222222222222222222222222222222222218c0843d";

const BOUND_RAW_DATA_HEX: &str = "0a020064220808090a0b0c0d0e0f40e0a7ccbbc82e5a67080112630a2d747970652e676f6f676c65617069732e636f6d2f70726f746f636f6c2e5472616e73666572436f6e747261637412320a15301111111111111111111111111111111111111111121530222222222222222222222222222222222222222218c0843d708080babbc82e";

const BOUND_TXID_HEX: &str = "b37772c3d4189fae7a1cbd73e0bdf1eb67cdb19282195796d57dfaca3e1b6798";

fn mock_address(byte: u8) -> Address {
    Address::from_account_id(&[byte; 20]).unwrap()
}

fn mock_transfer() -> ContractPayload {
    ContractPayload::Transfer(Transfer {
        owner_address: mock_address(0x11),
        to_address:    mock_address(0x22),
        amount:        1_000_000,
    })
}

fn mock_binding() -> Binding {
    Binding {
        ref_block_bytes: [0x00, 0x64],
        ref_block_hash:  [8, 9, 10, 11, 12, 13, 14, 15],
        expiration:      1_600_000_300_000,
    }
}

fn mock_raw_tx() -> RawTransaction {
    let mut tx = RawTransaction::new(mock_transfer(), 1_600_000_000_000);
    tx.binding = Some(mock_binding());
    tx
}

fn mock_permission(permission_type: PermissionType, id: i32) -> Permission {
    Permission {
        permission_type,
        id,
        permission_name: format!("{}-{}", permission_type.name(), id),
        threshold: 2,
        parent_id: 0,
        operations: Bytes::new(),
        keys: vec![
            PermissionKey {
                address: mock_address(0x33),
                weight:  1,
            },
            PermissionKey {
                address: mock_address(0x44),
                weight:  1,
            },
        ],
    }
}

#[test]
fn test_transfer_parameter_layout() {
    let value = encode_parameter(&mock_transfer()).unwrap();
    assert_eq!(hex::encode(&value), TRANSFER_PARAMETER_HEX);

    let wire = TransferContract::decode(value).unwrap();
    assert_eq!(wire.amount, 1_000_000);
}

#[test]
fn test_raw_data_layout_and_txid() {
    let tx = mock_raw_tx();

    let raw = tx.raw_data_bytes().unwrap();
    assert_eq!(hex::encode(&raw), BOUND_RAW_DATA_HEX);
    assert_eq!(tx.txid().unwrap().as_hex(), BOUND_TXID_HEX);

    let decoded = decode_raw_data(&raw).unwrap();
    assert_eq!(decoded, tx);
}

#[test]
fn test_transfer_contract_type_on_wire() {
    let contract = Contract::try_from(mock_transfer()).unwrap();
    let bytes = crate::codec::contract::encode_message(&contract).unwrap();

    // tag 1 varint, TransferContract = 1
    assert_eq!(&bytes[..2], &[0x08, 0x01]);

    let preview = RawTransaction::new(mock_transfer(), 1_600_000_000_000);
    assert!(hex::encode(preview.raw_data_bytes().unwrap()).contains("5a67080112630a2d"));
}

#[test]
fn test_millis_beyond_int64() {
    let mut tx = mock_raw_tx();
    tx.binding = Some(Binding {
        expiration: i64::max_value() as u64 + 1,
        ..mock_binding()
    });
    assert!(tx.raw_data_bytes().is_err());

    let mut tx = mock_raw_tx();
    tx.timestamp = u64::max_value();
    assert!(tx.raw_data_bytes().is_err());
}

#[test]
fn test_unbound_raw_data_omits_reference() {
    let tx = RawTransaction::new(mock_transfer(), 1_600_000_000_000);
    let raw = TransactionRaw::try_from(tx.clone()).unwrap();

    assert!(raw.ref_block_bytes.is_empty());
    assert!(raw.ref_block_hash.is_empty());
    assert_eq!(raw.expiration, 0);

    let decoded: RawTransaction = raw.try_into().unwrap();
    assert!(!decoded.is_bound());
    assert_eq!(decoded, tx);
}

#[test]
fn test_signed_transaction_codec() {
    let mut tx = mock_raw_tx();
    tx.memo = Some(Bytes::from_static(b"hello%20world"));
    tx.signatures = vec![Bytes::from(vec![7u8; 65])];

    let bytes = tx.encode_sync().unwrap();
    let decoded = RawTransaction::decode_sync(bytes).unwrap();

    assert_eq!(decoded, tx);
}

#[test]
fn test_freeze_without_receiver() {
    let payload = ContractPayload::Freeze(FreezeBalance {
        owner_address:    mock_address(0x11),
        frozen_balance:   10_000_000,
        frozen_duration:  3,
        resource:         ResourceCode::Energy,
        receiver_address: None,
    });

    let contract = Contract::try_from(payload.clone()).unwrap();
    let value = contract.parameter.clone().unwrap().value;
    // tag 15, wire type 2
    assert!(!value.windows(2).any(|w| w == [0x7a, 0x15]));

    let decoded = ContractPayload::try_from(contract).unwrap();
    assert_eq!(decoded, payload);
}

#[test]
fn test_permission_update_conversion() {
    let payload = ContractPayload::AccountPermissionUpdate(AccountPermissionUpdate {
        owner_address: mock_address(0x11),
        owner:         mock_permission(PermissionType::Owner, 0),
        witness:       None,
        actives:       vec![
            mock_permission(PermissionType::Active, 2),
            mock_permission(PermissionType::Active, 3),
        ],
    });

    let contract = Contract::try_from(payload.clone()).unwrap();
    assert_eq!(contract.r#type, 46);

    let decoded = ContractPayload::try_from(contract).unwrap();
    assert_eq!(decoded, payload);
}

#[test]
fn test_trigger_smart_contract_conversion() {
    let payload = ContractPayload::TriggerSmartContract(TriggerSmartContract {
        owner_address:    mock_address(0x11),
        contract_address: mock_address(0x55),
        call_value:       0,
        data:             Bytes::from(hex::decode("a9059cbb").unwrap()),
        call_token_value: 0,
        token_id:         0,
    });

    let contract = Contract::try_from(payload.clone()).unwrap();
    let decoded = ContractPayload::try_from(contract).unwrap();
    assert_eq!(decoded, payload);
}

#[test]
fn test_unknown_contract_type() {
    let contract = Contract {
        r#type:    3,
        parameter: Some(Any {
            type_url: "type.googleapis.com/protocol.Unknown".to_owned(),
            value:    vec![],
        }),
    };

    let err = ContractPayload::try_from(contract).unwrap_err();
    assert!(err.is_unsupported_contract_type());
}

#[test]
fn test_type_url_mismatch() {
    let mut contract = Contract::try_from(mock_transfer()).unwrap();
    if let Some(any) = contract.parameter.as_mut() {
        any.type_url = "type.googleapis.com/protocol.TransferAssetContract".to_owned();
    }

    assert!(ContractPayload::try_from(contract).is_err());
}

#[test]
fn test_reject_multiple_contracts() {
    let mut raw = TransactionRaw::try_from(mock_raw_tx()).unwrap();
    raw.contract.push(raw.contract[0].clone());

    assert!(RawTransaction::try_from(raw).is_err());
}

#[test]
fn test_reject_partial_binding() {
    let mut raw = TransactionRaw::try_from(mock_raw_tx()).unwrap();
    raw.ref_block_hash.clear();
    assert!(RawTransaction::try_from(raw).is_err());

    let mut raw = TransactionRaw::try_from(mock_raw_tx()).unwrap();
    raw.ref_block_bytes = vec![1, 2, 3];
    assert!(RawTransaction::try_from(raw).is_err());
}

#[test]
fn test_missing_raw_data() {
    let tx = transaction::Transaction {
        raw_data:  None,
        signature: vec![],
    };

    assert!(RawTransaction::try_from(tx).is_err());
}
