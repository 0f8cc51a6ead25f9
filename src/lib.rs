pub mod decode;
pub mod encode;
pub mod layout;
pub mod tx_data;

pub use decode::{DecodeError, DecodedTransaction};
pub use encode::PayloadError;

/// Decodes a raw transaction buffer and renders it as the canonical payload
/// string consumed by the policy engine.
pub fn decode_and_encode(raw: &[u8]) -> Result<String, DecodeError> {
    DecodedTransaction::decode(raw).map(|tx| tx.to_string())
}

/// Parses a hex-encoded buffer, ignoring surrounding whitespace and an
/// optional `0x` prefix.
pub fn parse_hex_input(input: &str) -> Result<Vec<u8>, hex::FromHexError> {
    let input = input.trim();
    hex::decode(input.strip_prefix("0x").unwrap_or(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_input() {
        assert_eq!(parse_hex_input("0xabcd").unwrap(), vec![0xab, 0xcd]);
        assert_eq!(parse_hex_input("abcd").unwrap(), vec![0xab, 0xcd]);
        assert_eq!(parse_hex_input("  0xAbCd\n").unwrap(), vec![0xab, 0xcd]);
        assert_eq!(parse_hex_input("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_parse_hex_input_errors() {
        assert!(matches!(
            parse_hex_input("zz"),
            Err(hex::FromHexError::InvalidHexCharacter { .. })
        ));
        assert_eq!(parse_hex_input("0xabc"), Err(hex::FromHexError::OddLength));
        // Only one prefix is stripped.
        assert!(parse_hex_input("0x0xab").is_err());
    }
}
