use alloy::primitives::{Address, Bytes, U256};
use thiserror::Error;
use tracing::debug;

use crate::layout::{
    ADDRESS_LEN, ADDRESS_WORD_OFFSET, HEADER_LEN, LENGTH_PREFIX_LEN, MemoryView, VALUE_WORD_OFFSET,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Buffer too short for address: {len} bytes, need at least {min}", min = ADDRESS_LEN)]
    TooShortForAddress { len: usize },
    #[error("Buffer too short for value: {len} bytes, need at least {min}", min = HEADER_LEN)]
    TooShortForValue { len: usize },
    #[error("Buffer too short for payload: {len} bytes, need more than {min}", min = HEADER_LEN)]
    TooShortForPayload { len: usize },
}

/// A raw transaction buffer split into its `to`, `value` and `data` fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecodedTransaction {
    pub to: Address,
    pub value: U256,
    pub data: Bytes,
}

impl DecodedTransaction {
    pub fn new(to: Address, value: U256, data: impl Into<Bytes>) -> Self {
        DecodedTransaction {
            to,
            value,
            data: data.into(),
        }
    }

    /// Decodes a raw transaction buffer.
    ///
    /// See [`crate::layout`] for the byte ranges each field is read from.
    pub fn decode(raw: &[u8]) -> Result<Self, DecodeError> {
        let len = raw.len();
        let view = MemoryView::new(raw);

        let to_word = view
            .word(ADDRESS_WORD_OFFSET)
            .ok_or(DecodeError::TooShortForAddress { len })?;
        let value_word = view
            .word(VALUE_WORD_OFFSET)
            .ok_or(DecodeError::TooShortForValue { len })?;

        let data = view
            .tail(LENGTH_PREFIX_LEN + HEADER_LEN)
            .filter(|data| !data.is_empty())
            .ok_or(DecodeError::TooShortForPayload { len })?;

        let tx = DecodedTransaction {
            to: Address::from_word(to_word),
            value: U256::from_be_bytes(value_word.0),
            data: Bytes::copy_from_slice(data),
        };

        debug!(
            "Decoded {} byte transaction: to={:?}, value={}, data_len={}",
            len,
            tx.to,
            tx.value,
            tx.data.len()
        );
        Ok(tx)
    }
}
