use async_trait::async_trait;

use crate::types::{KeyHandle, RawTransaction, SignedEnvelope};
use crate::{traits::Context, ProtocolResult};

/// Produces a broadcastable envelope from a bound transaction. Key material
/// never leaves the implementation.
#[async_trait]
pub trait Signer: Send + Sync {
    async fn sign(
        &self,
        ctx: Context,
        tx: RawTransaction,
        key: &KeyHandle,
    ) -> ProtocolResult<SignedEnvelope>;
}
