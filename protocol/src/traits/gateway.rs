use std::error::Error;

use async_trait::async_trait;
use derive_more::Display;

use crate::types::{BlockReference, BroadcastResult, SignedEnvelope};
use crate::{traits::Context, ProtocolError, ProtocolErrorKind, ProtocolResult};

/// Remote node access. Transport, retries and timeouts belong to the
/// implementation.
#[async_trait]
pub trait NetworkGateway: Send + Sync {
    async fn fetch_latest_block(&self, ctx: Context) -> ProtocolResult<BlockReference>;

    async fn broadcast(
        &self,
        ctx: Context,
        envelope: SignedEnvelope,
    ) -> ProtocolResult<BroadcastResult>;
}

#[derive(Debug, Display)]
pub enum GatewayError {
    #[display(fmt = "node unreachable: {}", _0)]
    Unreachable(String),

    #[display(fmt = "node returned no block")]
    MissingBlock,

    #[display(fmt = "unexpected node response: {}", _0)]
    Response(String),
}

impl Error for GatewayError {}

impl From<GatewayError> for ProtocolError {
    fn from(err: GatewayError) -> ProtocolError {
        ProtocolError::new(ProtocolErrorKind::Gateway, Box::new(err))
    }
}
