use futures::executor;

use common_crypto::recover;
use protocol::byte_codec::hex_to_bytes;
use protocol::traits::{Context, Signer};
use protocol::types::{Address, BlockReference, Hash, KeyHandle, RawTransaction};
use protocol::Bytes;

use crate::{ensure_bound, open_envelope, PrivateKeySigner};

const PRIVATE_KEY: &str = "0000000000000000000000000000000000000000000000000000000000000001";
const KEY_ADDRESS: &str = "LWk9Xuww6LfbjHWjE8m1WKtArGxVpWkjXP";
const RECEIVER: &str = "LNLS8Mt4ugdyRzn6yjAcD3312cbsX8R7xv";
const BLOCK_HASH: &str = "0000000000001a2b0123456789abcdef00112233445566778899aabbccddeeff";

fn mock_key() -> KeyHandle {
    KeyHandle::new(PRIVATE_KEY)
}

fn mock_unbound_tx() -> RawTransaction {
    core_builder::transfer(core_builder::NATIVE_TOKEN, KEY_ADDRESS, RECEIVER, 1_000).unwrap()
}

fn mock_bound_tx() -> RawTransaction {
    let block = BlockReference {
        number:    0x1a2b,
        hash:      BLOCK_HASH.to_owned(),
        timestamp: 1_600_000_000_000,
    };

    core_binder::bind(mock_unbound_tx(), &block).unwrap()
}

#[test]
fn test_key_address() {
    let address = PrivateKeySigner::address(&mock_key()).unwrap();
    assert_eq!(address.as_base58(), KEY_ADDRESS);

    let err = PrivateKeySigner::address(&KeyHandle::new("0x1234")).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_sign_unbound_fails() {
    let tx = mock_unbound_tx();
    assert!(ensure_bound(&tx).unwrap_err().is_unbound_transaction());

    let err = PrivateKeySigner.sign_sync(tx, &mock_key()).unwrap_err();
    assert!(err.is_unbound_transaction());
}

#[test]
fn test_sign_is_deterministic() {
    let tx = mock_bound_tx();

    let first = PrivateKeySigner.sign_sync(tx.clone(), &mock_key()).unwrap();
    let second = executor::block_on(PrivateKeySigner.sign(Context::new(), tx, &mock_key())).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_signature_recovers_to_key() {
    let tx = mock_bound_tx();
    let envelope = PrivateKeySigner.sign_sync(tx.clone(), &mock_key()).unwrap();

    let signed = open_envelope(&envelope).unwrap();
    assert_eq!(signed.signatures.len(), 1);

    let signature = &signed.signatures[0];
    assert_eq!(signature.len(), 65);
    assert!(signature[64] == 27 || signature[64] == 28);

    // signatures are not part of the signed bytes
    let txid = signed.txid().unwrap();
    assert_eq!(txid, tx.txid().unwrap());
    assert_eq!(txid, Hash::digest(tx.raw_data_bytes().unwrap()));

    let pubkey = recover(&txid.as_bytes(), signature).unwrap();
    let address = Address::from_pubkey_bytes(Bytes::from(pubkey.to_uncompressed().to_vec())).unwrap();
    assert_eq!(address.as_base58(), KEY_ADDRESS);
}

#[test]
fn test_signatures_accumulate() {
    let once = open_envelope(&PrivateKeySigner.sign_sync(mock_bound_tx(), &mock_key()).unwrap()).unwrap();
    let twice = PrivateKeySigner.sign_sync(once, &mock_key()).unwrap();

    let signed = open_envelope(&twice).unwrap();
    assert_eq!(signed.signatures.len(), 2);
    assert!(!hex_to_bytes(&twice.hex).unwrap().is_empty());
}

#[test]
fn test_bad_key() {
    let err = PrivateKeySigner
        .sign_sync(mock_bound_tx(), &KeyHandle::new("zz"))
        .unwrap_err();
    assert!(err.is_invalid_argument());
}
