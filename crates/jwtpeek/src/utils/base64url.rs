//! Base64URL encoding/decoding per RFC 4648
//!
//! Encoding produces the `-`/`_` alphabet without padding, as compact JWT
//! serialization expects. Decoding is deliberately tolerant: the alphabet is
//! mapped back to standard base64, missing padding is restored, and
//! unrecognized characters are skipped instead of rejected. The one hard
//! rule is length: base64 text can never be one character past a multiple
//! of four, so such input fails outright.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{Engine, alphabet};

use crate::error::{Error, Result};

/// Standard-alphabet engine that accepts input with or without padding and
/// does not insist on canonical trailing bits.
const PERMISSIVE_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encode bytes to a Base64URL string (no padding)
pub fn encode_bytes(input: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Encode a string to Base64URL
pub fn encode(input: &str) -> String {
    encode_bytes(input.as_bytes())
}

/// Decode a Base64URL string to bytes
///
/// Restores `+`/`/` from the URL-safe alphabet, checks that padding to the
/// next multiple of four is possible, and decodes while skipping characters
/// outside the base64 alphabet (including any padding already present).
pub fn decode_bytes(input: &str) -> Result<Vec<u8>> {
    let standard = input.replace('-', "+").replace('_', "/");

    // Padding can bring the length to the next multiple of 4 with 0, 1, or
    // 2 characters; a remainder of 1 has no valid base64 source.
    if standard.len() % 4 == 1 {
        return Err(Error::InvalidBase64Url(input.to_string()));
    }

    // With unknown characters and '=' stripped, padding itself is unneeded.
    let cleaned: String = standard
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '+' || *c == '/')
        .collect();

    PERMISSIVE_STANDARD
        .decode(cleaned)
        .map_err(|_| Error::InvalidBase64Url(input.to_string()))
}

/// Decode a Base64URL string to a UTF-8 string
///
/// Bytes that are not UTF-8 cannot hold token JSON, so that case reports
/// the coarse token failure rather than a base64 one.
pub fn decode(input: &str) -> Result<String> {
    let bytes = decode_bytes(input)?;
    String::from_utf8(bytes).map_err(|_| Error::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_roundtrip() {
        let tests = vec![
            "",
            "f",
            "fo",
            "foo",
            "foob",
            "fooba",
            "foobar",
            "Hello, World!",
            "The quick brown fox jumps over the lazy dog",
            r#"{"alg":"HS256","typ":"JWT"}"#,
        ];

        for test in tests {
            let encoded = encode(test);
            let decoded = decode(&encoded).unwrap();
            assert_eq!(test, decoded, "Roundtrip failed for: {}", test);
        }
    }

    #[test]
    fn test_roundtrip_bytes() {
        let tests: Vec<Vec<u8>> = vec![
            vec![],
            vec![0x00],
            vec![0xff],
            vec![0xfb, 0xff],
            vec![0x00, 0x01, 0x02, 0x03, 0x04],
            (0u8..=255).collect(),
        ];

        for bytes in tests {
            let encoded = encode_bytes(&bytes);
            assert_eq!(decode_bytes(&encoded).unwrap(), bytes);
        }
    }

    #[test]
    fn test_encode_bytes() {
        assert_eq!(encode_bytes(b""), "");
        assert_eq!(encode_bytes(b"f"), "Zg");
        assert_eq!(encode_bytes(b"fo"), "Zm8");
        assert_eq!(encode_bytes(b"foo"), "Zm9v");
        assert_eq!(encode_bytes(b"foob"), "Zm9vYg");
        assert_eq!(encode_bytes(b"fooba"), "Zm9vYmE");
        assert_eq!(encode_bytes(b"foobar"), "Zm9vYmFy");
    }

    #[test]
    fn test_url_safe_characters() {
        // Base64URL uses - and _ instead of + and /
        let bytes = vec![0xfb, 0xff];
        let encoded = encode_bytes(&bytes);
        assert!(encoded.contains('-') || encoded.contains('_'));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
        assert_eq!(decode_bytes(&encoded).unwrap(), bytes);
    }

    #[test]
    fn test_decode_accepts_standard_alphabet() {
        // The substitution step leaves + and / untouched, so plain base64
        // input decodes as well.
        assert_eq!(decode_bytes("+/+/").unwrap(), decode_bytes("-_-_").unwrap());
    }

    #[test]
    fn test_decode_restores_padding() {
        // Lengths of 0, 2, and 3 (mod 4) are all reachable by padding.
        assert_eq!(decode("Zg").unwrap(), "f");
        assert_eq!(decode("Zm8").unwrap(), "fo");
        assert_eq!(decode("Zm9v").unwrap(), "foo");
    }

    #[test]
    fn test_decode_rejects_length_one_past_multiple_of_four() {
        assert!(matches!(
            decode_bytes("A"),
            Err(Error::InvalidBase64Url(ref s)) if s == "A"
        ));
        assert!(decode_bytes("Zm9vA").is_err());
        assert!(decode_bytes("AAAAAAAAA").is_err());
    }

    #[test]
    fn test_decode_tolerates_existing_padding() {
        assert_eq!(decode("SGVsbG8=").unwrap(), "Hello");
        assert_eq!(decode("Zm9vYg==").unwrap(), "foob");
    }

    #[test]
    fn test_decode_skips_unknown_characters() {
        assert_eq!(decode(" Zm 9v ").unwrap(), "foo");
        assert_eq!(decode("Zm9v!!").unwrap(), "foo");
        // All-junk input shrinks to nothing rather than failing here; the
        // JSON stage downstream rejects empty segments.
        assert_eq!(decode_bytes("!!!").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_length_check_counts_unknown_characters() {
        // The length rule applies before junk is skipped, so a stray
        // newline after a complete group still lands on remainder 1.
        assert!(decode("Zm9v\n").is_err());
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode_bytes("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_non_utf8_is_token_failure() {
        let encoded = encode_bytes(&[0xff, 0xfe]);
        assert!(matches!(decode(&encoded), Err(Error::InvalidToken)));
        // The byte-level decode itself is fine.
        assert_eq!(decode_bytes(&encoded).unwrap(), vec![0xff, 0xfe]);
    }
}
