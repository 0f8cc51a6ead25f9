//! Canonical payload string handed to the policy engine.
//!
//! The payload is a JSON object with three keys in fixed order and no
//! whitespace:
//!
//! ```text
//! {"to":"0x<40 hex>","value":<decimal>,"data":"<hex>"}
//! ```
//!
//! `value` is emitted as a bare number literal and may exceed what a 64-bit
//! or floating point JSON reader can hold.

use std::{fmt::Display, str::FromStr};

use alloy::primitives::{Address, U256};
use serde::Deserialize;
use serde_json::value::RawValue;
use thiserror::Error;
use tracing::debug;

use crate::{decode::DecodedTransaction, layout::ADDRESS_LEN};

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Missing 0x prefix: {0}")]
    MissingHexPrefix(String),
    #[error("ParseHex Error: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("Invalid address length: {0} bytes")]
    InvalidAddressLength(usize),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
    #[error("Payload is not in canonical form")]
    NonCanonical,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPayload {
    to: String,
    /// Kept as the literal number token so large values are not rounded.
    value: Box<RawValue>,
    data: String,
}

impl Display for DecodedTransaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            r#"{{"to":"0x{}","value":{},"data":"{}"}}"#,
            hex::encode(self.to.as_slice()),
            self.value,
            hex::encode(&self.data[..]),
        )
    }
}

impl FromStr for DecodedTransaction {
    type Err = PayloadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let payload: RawPayload = serde_json::from_str(s)?;

        let to_hex = payload
            .to
            .strip_prefix("0x")
            .ok_or_else(|| PayloadError::MissingHexPrefix(payload.to.clone()))?;
        let to_bytes = hex::decode(to_hex)?;
        if to_bytes.len() != ADDRESS_LEN {
            return Err(PayloadError::InvalidAddressLength(to_bytes.len()));
        }

        let value = parse_decimal(payload.value.get())?;
        let data = hex::decode(&payload.data)?;

        let tx = DecodedTransaction::new(Address::from_slice(&to_bytes), value, data);
        if tx.to_string() != s {
            debug!("Rejecting non-canonical payload: {}", s);
            return Err(PayloadError::NonCanonical);
        }

        Ok(tx)
    }
}

fn parse_decimal(literal: &str) -> Result<U256, PayloadError> {
    if literal.is_empty() || !literal.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PayloadError::InvalidValue(literal.to_string()));
    }

    U256::from_str_radix(literal, 10).map_err(|_| PayloadError::InvalidValue(literal.to_string()))
}
