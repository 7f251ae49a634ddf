use std::error::Error;
use std::fmt;

use derive_more::Display;
use lazy_static::lazy_static;
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{All, Message, PublicKey, Secp256k1, SecretKey};

lazy_static! {
    static ref SECP: Secp256k1<All> = Secp256k1::new();
}

pub const PRIVATE_KEY_LEN: usize = 32;
pub const DIGEST_LEN: usize = 32;
/// `r ‖ s ‖ v`
pub const SIGNATURE_LEN: usize = 65;
pub const UNCOMPRESSED_PUBKEY_LEN: usize = 65;

/// Offset added to the recovery id in the last signature byte.
pub const RECOVERY_ID_OFFSET: u8 = 27;

#[derive(Debug, Display)]
pub enum CryptoError {
    #[display(fmt = "private key must be 32 bytes, got {}", _0)]
    PrivateKeyLength(usize),

    #[display(fmt = "invalid private key hex: {}", _0)]
    PrivateKeyHex(hex::FromHexError),

    #[display(fmt = "digest must be 32 bytes, got {}", _0)]
    DigestLength(usize),

    #[display(fmt = "signature must be 65 bytes, got {}", _0)]
    SignatureLength(usize),

    #[display(fmt = "secp256k1: {}", _0)]
    Secp256k1(secp256k1::Error),
}

impl Error for CryptoError {}

impl From<secp256k1::Error> for CryptoError {
    fn from(err: secp256k1::Error) -> Self {
        CryptoError::Secp256k1(err)
    }
}

#[derive(Clone)]
pub struct Secp256k1PrivateKey(SecretKey);

impl Secp256k1PrivateKey {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CryptoError> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(CryptoError::PrivateKeyLength(bytes.len()));
        }

        Ok(Secp256k1PrivateKey(SecretKey::from_slice(bytes)?))
    }

    /// Accepts an optional `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self, CryptoError> {
        let s = s.trim();
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s).map_err(CryptoError::PrivateKeyHex)?;

        Self::from_bytes(&bytes)
    }

    pub fn pub_key(&self) -> Secp256k1PublicKey {
        Secp256k1PublicKey(PublicKey::from_secret_key(&SECP, &self.0))
    }

    /// RFC6979 deterministic signature over a 32 bytes digest, encoded as
    /// `r ‖ s ‖ (recid + 27)`.
    pub fn sign_recoverable(&self, digest: &[u8]) -> Result<[u8; SIGNATURE_LEN], CryptoError> {
        let msg = digest_message(digest)?;
        let (recid, compact) = SECP
            .sign_ecdsa_recoverable(&msg, &self.0)
            .serialize_compact();

        let mut sig = [0u8; SIGNATURE_LEN];
        sig[..64].copy_from_slice(&compact);
        sig[64] = recid.to_i32() as u8 + RECOVERY_ID_OFFSET;

        Ok(sig)
    }
}

// Never print key material.
impl fmt::Debug for Secp256k1PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("Secp256k1PrivateKey(..)")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secp256k1PublicKey(PublicKey);

impl Secp256k1PublicKey {
    /// `0x04 ‖ x ‖ y`
    pub fn to_uncompressed(&self) -> [u8; UNCOMPRESSED_PUBKEY_LEN] {
        self.0.serialize_uncompressed()
    }
}

/// Public key that produced `sig` over `digest`. Accepts `v` both raw
/// (0..=3) and offset by 27.
pub fn recover(digest: &[u8], sig: &[u8]) -> Result<Secp256k1PublicKey, CryptoError> {
    if sig.len() != SIGNATURE_LEN {
        return Err(CryptoError::SignatureLength(sig.len()));
    }

    let msg = digest_message(digest)?;
    let v = sig[64];
    let v = if v >= RECOVERY_ID_OFFSET {
        v - RECOVERY_ID_OFFSET
    } else {
        v
    };

    let recid = RecoveryId::from_i32(i32::from(v))?;
    let sig = RecoverableSignature::from_compact(&sig[..64], recid)?;

    Ok(Secp256k1PublicKey(SECP.recover_ecdsa(&msg, &sig)?))
}

fn digest_message(digest: &[u8]) -> Result<Message, CryptoError> {
    if digest.len() != DIGEST_LEN {
        return Err(CryptoError::DigestLength(digest.len()));
    }

    Ok(Message::from_digest_slice(digest)?)
}
