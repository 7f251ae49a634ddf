#[macro_export]
macro_rules! field {
    ($opt_field:expr, $type:expr, $field:expr) => {
        $opt_field.ok_or_else(|| crate::codec::CodecError::MissingField {
            r#type: $type,
            field:  $field,
        })
    };
}

/// Implement `ProtocolCodecSync` for a domain type through its wire message.
/// Both directions go through `TryFrom`.
#[macro_export]
macro_rules! impl_default_bytes_codec_for {
    ($category:ident, [$($type:ident => $wire:ident),+]) => (
        use crate::types::$category;

        $(
            impl ProtocolCodecSync for $category::$type {
                fn encode_sync(&self) -> ProtocolResult<Bytes>  {
                    let ser_type = $wire::try_from(self.clone())?;
                    let mut buf = Vec::with_capacity(ser_type.encoded_len());

                    ser_type.encode(&mut buf).map_err(CodecError::from)?;

                    Ok(Bytes::from(buf))
                }

                fn decode_sync(bytes: Bytes) -> ProtocolResult<Self> {
                    let ser_type = $wire::decode(bytes).map_err(CodecError::from)?;

                    $category::$type::try_from(ser_type)
                }
            }
        )+
    )
}

/// Wire message and domain struct pairs whose fields are an owner address
/// plus plain scalars / bytes.
macro_rules! impl_owner_contract_conversion {
    ($domain:ident => $wire:ident { $($addr:ident),* ; $($bytes:ident),* ; $($scalar:ident),* }) => (
        impl From<domain::$domain> for $wire {
            fn from(contract: domain::$domain) -> $wire {
                $wire {
                    $($addr: contract.$addr.as_bytes().to_vec(),)*
                    $($bytes: contract.$bytes.to_vec(),)*
                    $($scalar: contract.$scalar,)*
                }
            }
        }

        impl TryFrom<$wire> for domain::$domain {
            type Error = ProtocolError;

            fn try_from(contract: $wire) -> Result<domain::$domain, Self::Error> {
                Ok(domain::$domain {
                    $($addr: protocol_primitive::Address::from_bytes(Bytes::from(contract.$addr))?,)*
                    $($bytes: Bytes::from(contract.$bytes),)*
                    $($scalar: contract.$scalar,)*
                })
            }
        }
    )
}
