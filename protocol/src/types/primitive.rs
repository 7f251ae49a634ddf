use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use hasher::{Hasher, HasherKeccak};
use lazy_static::lazy_static;
use serde::de;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::byte_codec::clean_0x;
use crate::types::TypesError;
use crate::ProtocolResult;

lazy_static! {
    static ref HASHER_INST: HasherKeccak = HasherKeccak::new();
}

/// Hash length
pub const HASH_LEN: usize = 32;

/// Transaction id, the sha256 digest of the serialized raw data.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Hash(Bytes);

impl Serialize for Hash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.as_hex())
    }
}

struct HashVisitor;

impl<'de> de::Visitor<'de> for HashVisitor {
    type Value = Hash;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("Expect a hex string")
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Hash::from_hex(&v).map_err(|e| de::Error::custom(e.to_string()))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Hash::from_hex(&v).map_err(|e| de::Error::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_string(HashVisitor)
    }
}

impl Hash {
    /// Sha256 of the given bytes.
    pub fn digest(bytes: Bytes) -> Self {
        let out = Sha256::digest(&bytes);
        Self(Bytes::from(out.to_vec()))
    }

    /// Converts the byte array to a Hash type.
    /// Note: if you want to compute the hash value of the byte array, you
    /// should call `fn digest`.
    pub fn from_bytes(bytes: Bytes) -> ProtocolResult<Self> {
        ensure_len(bytes.len(), HASH_LEN)?;

        Ok(Self(bytes))
    }

    pub fn from_hex(s: &str) -> ProtocolResult<Self> {
        let bytes = hex::decode(clean_0x(s)).map_err(TypesError::from)?;

        Self::from_bytes(Bytes::from(bytes))
    }

    pub fn as_bytes(&self) -> Bytes {
        self.0.clone()
    }

    pub fn as_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

/// First byte of every account address on the chain, `L...` in base58.
pub const ADDRESS_PREFIX: u8 = 0x30;
/// Prefix byte plus 20 bytes account id.
pub const ADDRESS_LEN: usize = 21;

const ACCOUNT_ID_LEN: usize = 20;

/// Account address in its raw 21 bytes form. The canonical text form is
/// base58check over these bytes.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(Bytes);

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.as_base58())
    }
}

struct AddressVisitor;

impl<'de> de::Visitor<'de> for AddressVisitor {
    type Value = Address;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("Expect a base58check address")
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Address::from_base58(&v).map_err(|e| de::Error::custom(e.to_string()))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Address::from_base58(v).map_err(|e| de::Error::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        deserializer.deserialize_string(AddressVisitor)
    }
}

impl Address {
    /// Accepts a 65 bytes uncompressed public key (`0x04` tagged) or its 64
    /// bytes untagged body.
    pub fn from_pubkey_bytes(bytes: Bytes) -> ProtocolResult<Self> {
        let body = match bytes.len() {
            65 if bytes[0] == 0x04 => bytes.slice(1..),
            64 => bytes,
            len => return Err(TypesError::PubkeyLength(len).into()),
        };

        let hash = HASHER_INST.digest(&body);
        Self::from_account_id(&hash[hash.len() - ACCOUNT_ID_LEN..])
    }

    pub fn from_account_id(id: &[u8]) -> ProtocolResult<Self> {
        ensure_len(id.len(), ACCOUNT_ID_LEN)?;

        let mut bytes = Vec::with_capacity(ADDRESS_LEN);
        bytes.push(ADDRESS_PREFIX);
        bytes.extend_from_slice(id);

        Ok(Self(Bytes::from(bytes)))
    }

    pub fn from_bytes(bytes: Bytes) -> ProtocolResult<Self> {
        ensure_len(bytes.len(), ADDRESS_LEN)?;

        if bytes[0] != ADDRESS_PREFIX {
            return Err(TypesError::AddressPrefix {
                expect: ADDRESS_PREFIX,
                real:   bytes[0],
            }
            .into());
        }

        Ok(Self(bytes))
    }

    pub fn from_base58(s: &str) -> ProtocolResult<Self> {
        let bytes = bs58::decode(s)
            .with_check(None)
            .into_vec()
            .map_err(|error| TypesError::Base58 {
                address: s.to_owned(),
                error,
            })?;

        Self::from_bytes(Bytes::from(bytes))
    }

    /// Base58check text of arbitrary bytes, without any length or prefix
    /// check. Used to display addresses found in foreign payloads.
    pub fn encode_base58(bytes: &[u8]) -> String {
        bs58::encode(bytes).with_check().into_string()
    }

    pub fn as_bytes(&self) -> Bytes {
        self.0.clone()
    }

    pub fn account_id(&self) -> &[u8] {
        &self.0[1..]
    }

    pub fn as_base58(&self) -> String {
        Self::encode_base58(&self.0)
    }

    pub fn as_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl FromStr for Address {
    type Err = crate::ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_base58(s)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_base58())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_base58())
    }
}

pub fn ensure_non_negative(field: &'static str, value: i64) -> ProtocolResult<i64> {
    if value < 0 {
        return Err(TypesError::NegativeAmount { field, value }.into());
    }

    Ok(value)
}

pub fn ensure_positive(field: &'static str, value: i64) -> ProtocolResult<i64> {
    if value <= 0 {
        return Err(TypesError::NonPositive { field, value }.into());
    }

    Ok(value)
}

/// Parse an amount in the chain's base unit. Fractions, signs other than a
/// bare number and overflowing values are rejected.
pub fn parse_amount(s: &str) -> ProtocolResult<i64> {
    let trimmed = s.trim();

    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        if trimmed.starts_with('-') && trimmed[1..].bytes().all(|b| b.is_ascii_digit()) {
            let value = trimmed.parse::<i64>().unwrap_or(i64::min_value());
            return ensure_non_negative("amount", value);
        }

        return Err(TypesError::NonIntegralAmount(s.to_owned()).into());
    }

    trimmed
        .parse::<i64>()
        .map_err(|_| TypesError::NonIntegralAmount(s.to_owned()).into())
}

fn ensure_len(real: usize, expect: usize) -> ProtocolResult<()> {
    if real != expect {
        return Err(TypesError::LengthMismatch { expect, real }.into());
    }

    Ok(())
}
