use std::convert::TryFrom;

use bytes::Bytes;
use prost::Message;

use crate::{
    codec::{
        contract::{decode_message, encode_message, payload_from_any, payload_to_any},
        CodecError, ProtocolCodecSync,
    },
    field, impl_default_bytes_codec_for,
    types::primitive::Hash,
    types::{Binding, ContractType},
    ProtocolError, ProtocolResult,
};

const REF_BLOCK_BYTES_LEN: usize = 2;
const REF_BLOCK_HASH_LEN: usize = 8;

// #################
// Protobuf
// #################

#[derive(Clone, PartialEq, Message)]
pub struct Any {
    #[prost(string, tag = "1")]
    pub type_url: String,

    #[prost(bytes, tag = "2")]
    pub value: Vec<u8>,
}

#[derive(Clone, PartialEq, Message)]
pub struct Contract {
    #[prost(int32, tag = "1")]
    pub r#type: i32,

    #[prost(message, tag = "2")]
    pub parameter: Option<Any>,
}

#[derive(Clone, PartialEq, Message)]
pub struct TransactionRaw {
    #[prost(bytes, tag = "1")]
    pub ref_block_bytes: Vec<u8>,

    #[prost(bytes, tag = "4")]
    pub ref_block_hash: Vec<u8>,

    #[prost(int64, tag = "8")]
    pub expiration: i64,

    #[prost(bytes, tag = "10")]
    pub data: Vec<u8>,

    #[prost(message, repeated, tag = "11")]
    pub contract: Vec<Contract>,

    #[prost(int64, tag = "14")]
    pub timestamp: i64,
}

#[derive(Clone, PartialEq, Message)]
pub struct Transaction {
    #[prost(message, tag = "1")]
    pub raw_data: Option<TransactionRaw>,

    #[prost(bytes, repeated, tag = "2")]
    pub signature: Vec<Vec<u8>>,
}

// #################
// Conversion
// #################

impl TryFrom<crate::types::ContractPayload> for Contract {
    type Error = ProtocolError;

    fn try_from(payload: crate::types::ContractPayload) -> Result<Contract, Self::Error> {
        Ok(Contract {
            r#type:    payload.contract_type() as i32,
            parameter: Some(payload_to_any(&payload)?),
        })
    }
}

impl TryFrom<Contract> for crate::types::ContractPayload {
    type Error = ProtocolError;

    fn try_from(contract: Contract) -> Result<crate::types::ContractPayload, Self::Error> {
        let contract_type = ContractType::from_i32(contract.r#type)
            .ok_or(CodecError::InvalidContractType(contract.r#type))?;
        let parameter = field!(contract.parameter, "Contract", "parameter")?;

        payload_from_any(contract_type, parameter)
    }
}

impl TryFrom<crate::types::RawTransaction> for TransactionRaw {
    type Error = ProtocolError;

    fn try_from(raw: crate::types::RawTransaction) -> Result<TransactionRaw, Self::Error> {
        let (ref_block_bytes, ref_block_hash, expiration) = match raw.binding {
            Some(binding) => (
                binding.ref_block_bytes.to_vec(),
                binding.ref_block_hash.to_vec(),
                wire_millis("expiration", binding.expiration)?,
            ),
            None => (vec![], vec![], 0),
        };

        Ok(TransactionRaw {
            ref_block_bytes,
            ref_block_hash,
            expiration,
            data: raw.memo.map(|m| m.to_vec()).unwrap_or_default(),
            contract: vec![Contract::try_from(raw.contract)?],
            timestamp: wire_millis("timestamp", raw.timestamp)?,
        })
    }
}

impl TryFrom<TransactionRaw> for crate::types::RawTransaction {
    type Error = ProtocolError;

    fn try_from(raw: TransactionRaw) -> Result<crate::types::RawTransaction, Self::Error> {
        let binding = decode_binding(&raw)?;
        let timestamp = non_negative("timestamp", raw.timestamp)?;

        if raw.contract.len() != 1 {
            return Err(CodecError::ContractCount(raw.contract.len()).into());
        }
        let contract = raw.contract.into_iter().next().ok_or(CodecError::ContractCount(0))?;

        let memo = if raw.data.is_empty() {
            None
        } else {
            Some(Bytes::from(raw.data))
        };

        Ok(crate::types::RawTransaction {
            contract: crate::types::ContractPayload::try_from(contract)?,
            timestamp,
            memo,
            binding,
            signatures: vec![],
        })
    }
}

impl TryFrom<crate::types::RawTransaction> for Transaction {
    type Error = ProtocolError;

    fn try_from(tx: crate::types::RawTransaction) -> Result<Transaction, Self::Error> {
        let signature = tx.signatures.iter().map(|s| s.to_vec()).collect::<Vec<_>>();

        Ok(Transaction {
            raw_data: Some(TransactionRaw::try_from(tx)?),
            signature,
        })
    }
}

impl TryFrom<Transaction> for crate::types::RawTransaction {
    type Error = ProtocolError;

    fn try_from(tx: Transaction) -> Result<crate::types::RawTransaction, Self::Error> {
        let raw_data = field!(tx.raw_data, "Transaction", "raw_data")?;

        let mut raw = crate::types::RawTransaction::try_from(raw_data)?;
        raw.signatures = tx.signature.into_iter().map(Bytes::from).collect();

        Ok(raw)
    }
}

// #################
// Codec
// #################

impl_default_bytes_codec_for!(transaction, [RawTransaction => Transaction]);

/// Serialized `raw_data`, the exact bytes the transaction id is computed
/// over.
pub fn encode_raw_data(tx: &transaction::RawTransaction) -> ProtocolResult<Bytes> {
    let raw = TransactionRaw::try_from(tx.clone())?;

    Ok(Bytes::from(encode_message(&raw)?))
}

pub fn decode_raw_data(bytes: &[u8]) -> ProtocolResult<transaction::RawTransaction> {
    transaction::RawTransaction::try_from(decode_message::<TransactionRaw>(bytes)?)
}

impl transaction::RawTransaction {
    pub fn raw_data_bytes(&self) -> ProtocolResult<Bytes> {
        encode_raw_data(self)
    }

    /// sha256 of the serialized raw data.
    pub fn txid(&self) -> ProtocolResult<Hash> {
        Ok(Hash::digest(self.raw_data_bytes()?))
    }
}

fn decode_binding(raw: &TransactionRaw) -> ProtocolResult<Option<Binding>> {
    if raw.ref_block_bytes.is_empty() && raw.ref_block_hash.is_empty() && raw.expiration == 0 {
        return Ok(None);
    }

    if raw.ref_block_bytes.is_empty() || raw.ref_block_hash.is_empty() {
        return Err(CodecError::PartialBinding.into());
    }

    let ref_block_bytes = <[u8; REF_BLOCK_BYTES_LEN]>::try_from(raw.ref_block_bytes.as_slice())
        .map_err(|_| CodecError::WrongBytesLength {
            expect: REF_BLOCK_BYTES_LEN,
            real:   raw.ref_block_bytes.len(),
        })?;
    let ref_block_hash = <[u8; REF_BLOCK_HASH_LEN]>::try_from(raw.ref_block_hash.as_slice())
        .map_err(|_| CodecError::WrongBytesLength {
            expect: REF_BLOCK_HASH_LEN,
            real:   raw.ref_block_hash.len(),
        })?;

    Ok(Some(Binding {
        ref_block_bytes,
        ref_block_hash,
        expiration: non_negative("expiration", raw.expiration)?,
    }))
}

fn wire_millis(field: &'static str, value: u64) -> ProtocolResult<i64> {
    Ok(i64::try_from(value).map_err(|_| CodecError::TimestampRange { field, value })?)
}

fn non_negative(field: &'static str, value: i64) -> ProtocolResult<u64> {
    if value < 0 {
        return Err(CodecError::NegativeTimestamp { field, value }.into());
    }

    Ok(value as u64)
}
