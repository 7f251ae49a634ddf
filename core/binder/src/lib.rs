//! Anchors a transaction to a recent block so the chain can reject replays
//! and expired submissions.

#[cfg(test)]
mod tests;

use std::error::Error;

use derive_more::Display;

use protocol::byte_codec::{clean_0x, long_to_byte_array};
use protocol::traits::{Context, NetworkGateway};
use protocol::types::{Binding, BlockReference, RawTransaction};
use protocol::{ProtocolError, ProtocolErrorKind, ProtocolResult};

/// Validity window after the reference block, in milliseconds.
pub const EXPIRATION_WINDOW_MS: u64 = 5 * 60 * 1000;

// ref_block_hash is hash[8..16], the same bytes as blockId[8..16] for any
// hash of 17 bytes or more. A 16 bytes hash keeps all eight bytes.
const MIN_BLOCK_HASH_LEN: usize = 16;

// expiration travels as int64
const MAX_EXPIRATION: u64 = i64::max_value() as u64;

/// Derive the reference fields from a block.
pub fn compute_binding(block: &BlockReference) -> ProtocolResult<Binding> {
    let mut num_bytes = long_to_byte_array(block.number);
    num_bytes.reverse();

    let hash_bytes =
        hex::decode(clean_0x(block.hash.trim())).map_err(|error| BinderError::InvalidHash {
            hash: block.hash.clone(),
            error,
        })?;
    if hash_bytes.len() < MIN_BLOCK_HASH_LEN {
        return Err(BinderError::ShortHash(hash_bytes.len()).into());
    }

    let mut ref_block_hash = [0u8; 8];
    ref_block_hash.copy_from_slice(&hash_bytes[8..16]);

    let mut ref_block_bytes = [0u8; 2];
    ref_block_bytes.copy_from_slice(&num_bytes[6..8]);

    let expiration = block
        .timestamp
        .checked_add(EXPIRATION_WINDOW_MS)
        .filter(|expiration| *expiration <= MAX_EXPIRATION)
        .ok_or(BinderError::TimestampOverflow(block.timestamp))?;

    Ok(Binding {
        ref_block_bytes,
        ref_block_hash,
        expiration,
    })
}

/// Set all three reference fields at once, replacing any previous binding.
pub fn bind(mut tx: RawTransaction, block: &BlockReference) -> ProtocolResult<RawTransaction> {
    let binding = compute_binding(block)?;

    if let Some(prev) = tx.binding {
        if prev != binding {
            log::debug!(
                "[binder]: rebind from expiration {} to {}",
                prev.expiration,
                binding.expiration
            );
        }
    }

    log::debug!(
        "[binder]: bind {} transaction to block {} ref_block_bytes {} ref_block_hash {}",
        tx.contract_type(),
        block.number,
        hex::encode(binding.ref_block_bytes),
        hex::encode(binding.ref_block_hash)
    );

    tx.binding = Some(binding);
    Ok(tx)
}

/// Fetch the latest block and bind to it. Gateway failures are not retried.
pub async fn bind_latest<G: NetworkGateway + ?Sized>(
    ctx: Context,
    gateway: &G,
    tx: RawTransaction,
) -> ProtocolResult<RawTransaction> {
    let block = gateway
        .fetch_latest_block(ctx)
        .await
        .map_err(BinderError::Fetch)?;

    bind(tx, &block)
}

#[derive(Debug, Display)]
pub enum BinderError {
    #[display(fmt = "latest block unavailable: {}", _0)]
    Fetch(ProtocolError),

    #[display(fmt = "block hash {:?} is not hex: {}", hash, error)]
    InvalidHash {
        hash:  String,
        error: hex::FromHexError,
    },

    #[display(fmt = "block hash has {} bytes, need at least 16", _0)]
    ShortHash(usize),

    #[display(fmt = "block timestamp {} overflows expiration", _0)]
    TimestampOverflow(u64),
}

impl Error for BinderError {}

impl From<BinderError> for ProtocolError {
    fn from(err: BinderError) -> ProtocolError {
        ProtocolError::new(ProtocolErrorKind::StaleReference, Box::new(err))
    }
}
