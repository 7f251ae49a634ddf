use async_trait::async_trait;
use futures::executor;

use protocol::traits::{Context, GatewayError, NetworkGateway};
use protocol::types::{BlockReference, BroadcastResult, RawTransaction, SignedEnvelope};
use protocol::ProtocolResult;

use crate::{bind, bind_latest, compute_binding, EXPIRATION_WINDOW_MS};

const OWNER: &str = "LLnCCHbSzfwWquEdaS5TF2Yt7uz5Qb1SZ1";
const RECEIVER: &str = "LNLS8Mt4ugdyRzn6yjAcD3312cbsX8R7xv";

const SHORT_EXAMPLE_HASH: &str = "00000000000000640000000000000000000000000000000000000000000000";
const BLOCK_HASH: &str = "0000000000001a2b0123456789abcdef00112233445566778899aabbccddeeff";

struct MockGateway {
    block: Option<BlockReference>,
}

#[async_trait]
impl NetworkGateway for MockGateway {
    async fn fetch_latest_block(&self, _ctx: Context) -> ProtocolResult<BlockReference> {
        match self.block.clone() {
            Some(block) => Ok(block),
            None => Err(GatewayError::Unreachable("connection refused".to_owned()).into()),
        }
    }

    async fn broadcast(
        &self,
        _ctx: Context,
        _envelope: SignedEnvelope,
    ) -> ProtocolResult<BroadcastResult> {
        Ok(BroadcastResult::default())
    }
}

fn mock_block(number: u64, hash: &str, timestamp: u64) -> BlockReference {
    BlockReference {
        number,
        hash: hash.to_owned(),
        timestamp,
    }
}

fn mock_tx() -> RawTransaction {
    core_builder::transfer(core_builder::NATIVE_TOKEN, OWNER, RECEIVER, 1).unwrap()
}

#[test]
fn test_block_one_hundred() {
    let binding = compute_binding(&mock_block(100, SHORT_EXAMPLE_HASH, 1_000)).unwrap();

    assert_eq!(binding.ref_block_bytes, [0, 100]);
    assert_eq!(binding.ref_block_hash, [0u8; 8]);
    assert_eq!(binding.expiration, 1_000 + EXPIRATION_WINDOW_MS);
}

#[test]
fn test_ref_fields_come_from_number_and_hash() {
    let binding = compute_binding(&mock_block(0x1a2b, BLOCK_HASH, 1_600_000_000_000)).unwrap();

    assert_eq!(binding.ref_block_bytes, [0x1a, 0x2b]);
    assert_eq!(binding.ref_block_hash, [
        0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef
    ]);
    assert_eq!(binding.expiration, 1_600_000_300_000);

    let prefixed = compute_binding(&mock_block(0x1a2b, &format!("0x{}", BLOCK_HASH), 0)).unwrap();
    assert_eq!(prefixed.ref_block_hash, binding.ref_block_hash);
}

#[test]
fn test_timestamp_zero() {
    let binding = compute_binding(&mock_block(1, BLOCK_HASH, 0)).unwrap();
    assert_eq!(binding.expiration, 300_000);
}

#[test]
fn test_bind_is_idempotent() {
    let block = mock_block(100, BLOCK_HASH, 1_000);

    let once = bind(mock_tx(), &block).unwrap();
    let twice = bind(once.clone(), &block).unwrap();

    assert!(once.is_bound());
    assert_eq!(once, twice);
}

#[test]
fn test_rebind_overwrites() {
    let tx = bind(mock_tx(), &mock_block(100, SHORT_EXAMPLE_HASH, 1_000)).unwrap();
    let tx = bind(tx, &mock_block(0x1a2b, BLOCK_HASH, 2_000)).unwrap();

    assert_eq!(tx.ref_block_bytes(), Some([0x1a, 0x2b]));
    assert_eq!(tx.ref_block_hash(), Some([0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]));
    assert_eq!(tx.expiration(), Some(2_000 + EXPIRATION_WINDOW_MS));
}

#[test]
fn test_inconsistent_block() {
    let err = compute_binding(&mock_block(1, "00112233445566778899aabbccddee", 0)).unwrap_err();
    assert!(err.is_stale_reference());

    let shortest = compute_binding(&mock_block(1, "00112233445566778899aabbccddeeff", 0)).unwrap();
    assert_eq!(shortest.ref_block_hash, [
        0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff
    ]);

    let err = compute_binding(&mock_block(1, "not hex", 0)).unwrap_err();
    assert!(err.is_stale_reference());

    let err = compute_binding(&mock_block(1, BLOCK_HASH, u64::max_value())).unwrap_err();
    assert!(err.is_stale_reference());
}

#[test]
fn test_expiration_fits_int64() {
    let edge = i64::max_value() as u64 - EXPIRATION_WINDOW_MS;
    let binding = compute_binding(&mock_block(1, BLOCK_HASH, edge)).unwrap();
    assert_eq!(binding.expiration, i64::max_value() as u64);

    let err = bind(mock_tx(), &mock_block(1, BLOCK_HASH, i64::max_value() as u64)).unwrap_err();
    assert!(err.is_stale_reference());

    let err = compute_binding(&mock_block(1, BLOCK_HASH, edge + 1)).unwrap_err();
    assert!(err.is_stale_reference());
}

#[test]
fn test_bind_latest() {
    let gateway = MockGateway {
        block: Some(mock_block(0x1a2b, BLOCK_HASH, 1_000)),
    };

    let tx = executor::block_on(bind_latest(Context::new(), &gateway, mock_tx())).unwrap();
    assert_eq!(tx.ref_block_bytes(), Some([0x1a, 0x2b]));
}

#[test]
fn test_bind_latest_unreachable() {
    let gateway = MockGateway { block: None };

    let err = executor::block_on(bind_latest(Context::new(), &gateway, mock_tx())).unwrap_err();
    assert!(err.is_stale_reference());
}
