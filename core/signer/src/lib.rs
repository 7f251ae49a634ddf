#[cfg(test)]
mod tests;

use std::error::Error;

use async_trait::async_trait;
use bytes::Bytes;
use derive_more::Display;

use common_crypto::{CryptoError, Secp256k1PrivateKey};
use protocol::byte_codec::{bytes_to_hex, hex_to_bytes};
use protocol::codec::ProtocolCodecSync;
use protocol::traits::{Context, Signer};
use protocol::types::{Address, KeyHandle, RawTransaction, SignedEnvelope};
use protocol::{ProtocolError, ProtocolErrorKind, ProtocolResult};

/// Signing is only meaningful once the reference fields are set.
pub fn ensure_bound(tx: &RawTransaction) -> ProtocolResult<()> {
    if !tx.is_bound() {
        return Err(SignerError::Unbound.into());
    }

    Ok(())
}

/// Reads the key handle as a hex encoded secp256k1 private key.
#[derive(Clone, Copy, Debug, Default)]
pub struct PrivateKeySigner;

impl PrivateKeySigner {
    pub fn address(key: &KeyHandle) -> ProtocolResult<Address> {
        let pubkey = parse_key(key)?.pub_key().to_uncompressed();

        Address::from_pubkey_bytes(Bytes::from(pubkey.to_vec()))
    }

    /// Append a signature over the transaction id and serialize the whole
    /// transaction.
    pub fn sign_sync(
        &self,
        mut tx: RawTransaction,
        key: &KeyHandle,
    ) -> ProtocolResult<SignedEnvelope> {
        ensure_bound(&tx)?;

        let private_key = parse_key(key)?;
        let txid = tx.txid()?;
        let signature = private_key
            .sign_recoverable(&txid.as_bytes())
            .map_err(SignerError::Crypto)?;

        log::debug!(
            "[signer]: sign {} transaction {}",
            tx.contract_type(),
            txid.as_hex()
        );

        tx.signatures.push(Bytes::from(signature.to_vec()));
        let bytes = tx.encode_sync()?;

        Ok(SignedEnvelope::new(bytes_to_hex(&bytes)))
    }
}

#[async_trait]
impl Signer for PrivateKeySigner {
    async fn sign(
        &self,
        _ctx: Context,
        tx: RawTransaction,
        key: &KeyHandle,
    ) -> ProtocolResult<SignedEnvelope> {
        self.sign_sync(tx, key)
    }
}

/// Parse a serialized envelope back into its transaction.
pub fn open_envelope(envelope: &SignedEnvelope) -> ProtocolResult<RawTransaction> {
    let bytes = hex_to_bytes(&envelope.hex)?;

    RawTransaction::decode_sync(Bytes::from(bytes))
}

fn parse_key(key: &KeyHandle) -> ProtocolResult<Secp256k1PrivateKey> {
    Ok(Secp256k1PrivateKey::from_hex(key.as_str()).map_err(SignerError::Key)?)
}

#[derive(Debug, Display)]
pub enum SignerError {
    #[display(fmt = "transaction has no block reference, bind it before signing")]
    Unbound,

    #[display(fmt = "invalid private key: {}", _0)]
    Key(CryptoError),

    #[display(fmt = "sign: {}", _0)]
    Crypto(CryptoError),
}

impl Error for SignerError {}

impl From<SignerError> for ProtocolError {
    fn from(err: SignerError) -> ProtocolError {
        let kind = match err {
            SignerError::Unbound => ProtocolErrorKind::UnboundTransaction,
            SignerError::Key(_) => ProtocolErrorKind::InvalidArgument,
            SignerError::Crypto(_) => ProtocolErrorKind::Signer,
        };

        ProtocolError::new(kind, Box::new(err))
    }
}
