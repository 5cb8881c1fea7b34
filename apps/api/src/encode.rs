//! Document encoding: raw PDF bytes → base64 text for the JSON request body.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

/// Encodes a document with the standard alphabet, padded, without line breaks.
/// Empty input produces an empty string.
pub fn encode_document(bytes: &[u8]) -> String {
    let encoded = STANDARD.encode(bytes);
    debug!("Encoded document: {} bytes → {} base64 chars", bytes.len(), encoded.len());
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_encodes_to_empty_string() {
        assert_eq!(encode_document(&[]), "");
    }

    #[test]
    fn test_round_trip_all_byte_values() {
        let bytes: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
        let encoded = encode_document(&bytes);
        assert_eq!(STANDARD.decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_standard_alphabet_with_padding() {
        // 0xfb 0xff maps to '+' and '/' in the standard alphabet
        assert_eq!(encode_document(&[0xfb, 0xff]), "+/8=");
        assert_eq!(encode_document(b"%PDF-1.7"), "JVBERi0xLjc=");
    }

    #[test]
    fn test_no_line_wrapping() {
        let encoded = encode_document(&vec![0u8; 4096]);
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains('\r'));
    }
}
