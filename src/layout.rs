//! Memory layout of the raw transaction buffer.
//!
//! Offsets are measured against a Solidity `bytes memory` image: a 32-byte
//! big-endian length word followed by the content bytes. The reference
//! decoder reads whole words at [`ADDRESS_WORD_OFFSET`] and
//! [`VALUE_WORD_OFFSET`], so in content terms:
//!
//! - address: `content[0..20]` (low 20 bytes of the word at offset 20)
//! - value:   `content[0..32]`
//! - payload: `content[32..]`
//!
//! The address and value ranges overlap. This matches the deployed decoder
//! bit-for-bit and is most likely a defect there; keep it until the intended
//! wire format is confirmed.

use alloy::primitives::{B256, U256};
use tracing::trace;

pub const WORD_LEN: usize = 32;
pub const ADDRESS_LEN: usize = 20;

/// Length word preceding the content in memory.
pub const LENGTH_PREFIX_LEN: usize = WORD_LEN;

pub const ADDRESS_WORD_OFFSET: usize = 20;
pub const VALUE_WORD_OFFSET: usize = 32;

/// Content bytes before the payload begins.
pub const HEADER_LEN: usize = 32;

/// Read-only view of a buffer as it sits in contract memory.
#[derive(Debug, Clone, Copy)]
pub struct MemoryView<'a> {
    content: &'a [u8],
}

impl<'a> MemoryView<'a> {
    pub fn new(content: &'a [u8]) -> Self {
        MemoryView { content }
    }

    /// Reads the 32-byte word starting at memory offset `offset`.
    ///
    /// Returns `None` if the word runs past the end of the content. Reads are
    /// never zero padded.
    pub fn word(&self, offset: usize) -> Option<B256> {
        let end = offset.checked_add(WORD_LEN)?;
        if end > self.memory_len() {
            return None;
        }

        // Tail of the length word, then the head of the content.
        let prefix_start = offset.min(LENGTH_PREFIX_LEN);
        let from_prefix = LENGTH_PREFIX_LEN - prefix_start;
        let content_start = offset - prefix_start;

        let mut word = [0u8; WORD_LEN];
        word[..from_prefix].copy_from_slice(&self.length_word()[prefix_start..]);
        word[from_prefix..]
            .copy_from_slice(&self.content[content_start..content_start + WORD_LEN - from_prefix]);

        trace!("mload @{}: {}", offset, hex::encode(word));
        Some(B256::from(word))
    }

    /// Content bytes from memory offset `offset` to the end.
    pub fn tail(&self, offset: usize) -> Option<&'a [u8]> {
        let start = offset.checked_sub(LENGTH_PREFIX_LEN)?;
        self.content.get(start..)
    }

    fn memory_len(&self) -> usize {
        LENGTH_PREFIX_LEN + self.content.len()
    }

    fn length_word(&self) -> [u8; WORD_LEN] {
        U256::from(self.content.len()).to_be_bytes()
    }
}
