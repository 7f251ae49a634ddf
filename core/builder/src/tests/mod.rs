use bytes::Bytes;

use protocol::byte_codec::bytes_to_hex;
use protocol::codec::transaction::encode_raw_data;
use protocol::types::{Binding, ContractPayload, ContractType, PermissionType, ResourceCode};

use crate::*;

const OWNER: &str = "LLnCCHbSzfwWquEdaS5TF2Yt7uz5Qb1SZ1";
const RECEIVER: &str = "LNLS8Mt4ugdyRzn6yjAcD3312cbsX8R7xv";
const WITNESS: &str = "LPtg4SAgphLS26KaP2FmB3X7wKDfiqYLJ5";
const CONTRACT: &str = "LT19vajveijMCHQXBcS574VMkiTG66mrxL";

// Valid base58check, foreign prefix.
const FOREIGN_ADDRESS: &str = "TBXSw8fM4jpQkGc6zZjsVABFpVN7UvXPdV";

fn mock_asset_options() -> AssetIssueOptions {
    AssetIssueOptions {
        name:                 "LindaToken".to_owned(),
        abbreviation:         "LT".to_owned(),
        description:          "test token".to_owned(),
        url:                  "https://lindascan.org".to_owned(),
        total_supply:         1_000_000,
        trx_ratio:            1,
        token_ratio:          10,
        precision:            6,
        start_time:           1_600_000_000_000,
        end_time:             1_700_000_000_000,
        free_bandwidth:       0,
        free_bandwidth_limit: 0,
        frozen_supply:        vec![(100, 3)],
    }
}

fn mock_permission(permission_type: PermissionType, id: i32) -> PermissionOptions {
    PermissionOptions {
        permission_type,
        id,
        name: "owner".to_owned(),
        threshold: 1,
        parent_id: 0,
        operations: None,
        keys: vec![(OWNER.to_owned(), 1)],
    }
}

#[test]
fn test_native_transfer() {
    let tx = transfer(NATIVE_TOKEN, OWNER, RECEIVER, 1_000_000).unwrap();

    assert_eq!(tx.contract_type(), ContractType::TransferContract);
    assert!(!tx.is_bound());
    assert!(tx.signatures.is_empty());
    assert!(tx.timestamp > 0);

    match tx.contract {
        ContractPayload::Transfer(c) => {
            assert_eq!(c.owner_address.as_base58(), OWNER);
            assert_eq!(c.to_address.as_base58(), RECEIVER);
            assert_eq!(c.amount, 1_000_000);
        }
        other => panic!("unexpected payload {:?}", other),
    }
}

#[test]
fn test_token_transfer() {
    let tx = transfer("LindaToken", OWNER, RECEIVER, 5).unwrap();

    match tx.contract {
        ContractPayload::TransferAsset(c) => {
            assert_eq!(c.asset_name, Bytes::from_static(b"LindaToken"));
            assert_eq!(c.amount, 5);
        }
        other => panic!("unexpected payload {:?}", other),
    }
}

#[test]
fn test_transfer_rejects_bad_input() {
    let err = transfer(NATIVE_TOKEN, "not-an-address", RECEIVER, 1).unwrap_err();
    assert!(err.is_invalid_argument());

    let err = transfer(NATIVE_TOKEN, FOREIGN_ADDRESS, RECEIVER, 1).unwrap_err();
    assert!(err.is_invalid_argument());

    let err = transfer(NATIVE_TOKEN, OWNER, RECEIVER, -1).unwrap_err();
    assert!(err.is_invalid_argument());

    // one character changed, checksum breaks
    let err = transfer(NATIVE_TOKEN, OWNER, "LNLS8Mt4ugdyRzn6yjAcD3312cbsX8R7xw", 1).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_freeze_and_unfreeze() {
    let tx = freeze_balance(OWNER, 10_000_000, 3, ResourceCode::Energy, Some(RECEIVER)).unwrap();
    match tx.contract {
        ContractPayload::Freeze(c) => {
            assert_eq!(c.frozen_balance, 10_000_000);
            assert_eq!(c.frozen_duration, 3);
            assert_eq!(c.resource, ResourceCode::Energy);
            assert_eq!(c.receiver_address.unwrap().as_base58(), RECEIVER);
        }
        other => panic!("unexpected payload {:?}", other),
    }

    let tx = unfreeze_balance(OWNER, ResourceCode::Bandwidth, None).unwrap();
    match tx.contract {
        ContractPayload::Unfreeze(c) => {
            assert_eq!(c.resource, ResourceCode::Bandwidth);
            assert!(c.receiver_address.is_none());
        }
        other => panic!("unexpected payload {:?}", other),
    }

    assert!("energy".parse::<ResourceCode>().is_ok());
    assert!("CPU".parse::<ResourceCode>().unwrap_err().is_invalid_argument());
}

#[test]
fn test_vote_keeps_order() {
    let tx = vote(OWNER, &[(WITNESS, 10), (RECEIVER, 20)]).unwrap();

    match tx.contract {
        ContractPayload::Vote(c) => {
            let votes = c
                .votes
                .iter()
                .map(|v| (v.vote_address.as_base58(), v.vote_count))
                .collect::<Vec<_>>();
            assert_eq!(votes, vec![
                (WITNESS.to_owned(), 10),
                (RECEIVER.to_owned(), 20)
            ]);
        }
        other => panic!("unexpected payload {:?}", other),
    }

    assert!(vote(OWNER, &[]).unwrap_err().is_invalid_argument());
}

#[test]
fn test_asset_issue() {
    let tx = asset_issue(OWNER, mock_asset_options()).unwrap();
    match tx.contract {
        ContractPayload::AssetIssue(c) => {
            assert_eq!(c.name, Bytes::from_static(b"LindaToken"));
            assert_eq!(c.trx_num, 1);
            assert_eq!(c.num, 10);
            assert_eq!(c.frozen_supply.len(), 1);
        }
        other => panic!("unexpected payload {:?}", other),
    }

    let mut options = mock_asset_options();
    options.end_time = options.start_time;
    assert!(asset_issue(OWNER, options).unwrap_err().is_invalid_argument());

    let mut options = mock_asset_options();
    options.total_supply = 0;
    assert!(asset_issue(OWNER, options).unwrap_err().is_invalid_argument());
}

#[test]
fn test_simple_owner_contracts() {
    let cases = vec![
        (unfreeze_asset(OWNER), ContractType::UnfreezeAssetContract),
        (withdraw_balance(OWNER), ContractType::WithdrawBalanceContract),
        (
            witness_create(OWNER, "https://sr.example"),
            ContractType::WitnessCreateContract,
        ),
        (
            witness_update(OWNER, "https://sr.example"),
            ContractType::WitnessUpdateContract,
        ),
        (account_update(OWNER, "alice"), ContractType::AccountUpdateContract),
        (
            participate_asset(OWNER, RECEIVER, "LindaToken", 10),
            ContractType::ParticipateAssetIssueContract,
        ),
        (
            exchange_create(OWNER, "_", 100, "LindaToken", 200),
            ContractType::ExchangeCreateContract,
        ),
        (exchange_inject(OWNER, 1, "_", 10), ContractType::ExchangeInjectContract),
        (exchange_withdraw(OWNER, 1, "_", 10), ContractType::ExchangeWithdrawContract),
        (
            exchange_transaction(OWNER, 1, "_", 10, 9),
            ContractType::ExchangeTransactionContract,
        ),
    ];

    for (tx, contract_type) in cases {
        let tx = tx.unwrap();
        assert_eq!(tx.contract_type(), contract_type);
        assert_eq!(tx.contract.owner_address().as_base58(), OWNER);
    }
}

#[test]
fn test_trigger_smart_contract() {
    let tx = trigger_smart_contract(OWNER, CONTRACT, "0xa9059cbb", 0, 0, 0).unwrap();
    match tx.contract {
        ContractPayload::TriggerSmartContract(c) => {
            assert_eq!(c.contract_address.as_base58(), CONTRACT);
            assert_eq!(bytes_to_hex(&c.data), "a9059cbb");
        }
        other => panic!("unexpected payload {:?}", other),
    }

    let err = trigger_smart_contract(OWNER, CONTRACT, "xyz", 0, 0, 0).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_account_permission_update() {
    let mut active = mock_permission(PermissionType::Active, 2);
    active.operations = Some("7fff1fc0033e0000000000000000000000000000000000000000000000000000".to_owned());

    let tx = account_permission_update(
        OWNER,
        mock_permission(PermissionType::Owner, 0),
        None,
        vec![active],
    )
    .unwrap();

    match tx.contract {
        ContractPayload::AccountPermissionUpdate(c) => {
            assert_eq!(c.owner.permission_type, PermissionType::Owner);
            assert!(c.witness.is_none());
            assert_eq!(c.actives.len(), 1);
            assert_eq!(c.actives[0].operations.len(), 32);
        }
        other => panic!("unexpected payload {:?}", other),
    }

    let mut owner = mock_permission(PermissionType::Owner, 0);
    owner.keys.clear();
    let err = account_permission_update(OWNER, owner, None, vec![]).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_memo() {
    let tx = transfer(NATIVE_TOKEN, OWNER, RECEIVER, 1).unwrap();

    let same = with_memo(tx.clone(), "");
    assert!(same.memo.is_none());

    let noted = with_memo(tx, "hello world/你");
    assert_eq!(
        noted.memo.unwrap(),
        Bytes::from_static(b"hello%20world%2F%E4%BD%A0")
    );
}

#[test]
fn test_hex_preview_matches_unbound_serialization() {
    let tx = transfer(NATIVE_TOKEN, OWNER, RECEIVER, 1_000_000).unwrap();
    let preview = raw_data_hex(&tx).unwrap();

    assert_eq!(preview, bytes_to_hex(&encode_raw_data(&tx).unwrap()));

    let mut bound = tx;
    bound.binding = Some(Binding {
        ref_block_bytes: [0, 100],
        ref_block_hash:  [1; 8],
        expiration:      300_000,
    });
    assert_eq!(raw_data_hex(&bound).unwrap(), preview);
    assert_ne!(bytes_to_hex(&encode_raw_data(&bound).unwrap()), preview);

    assert!(transfer_hex(NATIVE_TOKEN, OWNER, RECEIVER, 1).is_ok());
    assert!(trigger_smart_contract_hex(OWNER, CONTRACT, "a9059cbb", 0, 0, 0).is_ok());
}
