//! Payload codec
//!
//! Pure encode/decode/truncate operations on individual payload strings.
//! Decoding fails loudly on malformed input instead of silently substituting
//! replacement characters, so what the operator sees is what the broker holds.

use base64::prelude::*;
use serde::Serialize;
use thiserror::Error;

/// Payload decode failure. Scoped to the single message being decoded;
/// it never prevents listing or decoding of other messages.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum DecodeError {
    /// The payload is not valid base64 (standard alphabet).
    #[error("Invalid base64 payload: {0}")]
    InvalidBase64(String),

    /// The decoded bytes are not valid UTF-8.
    #[error("Decoded payload is not valid UTF-8: {0}")]
    InvalidUtf8(String),
}

/// Decode a base64 payload into a UTF-8 string.
pub fn decode_base64(payload: &str) -> Result<String, DecodeError> {
    let bytes = BASE64_STANDARD
        .decode(payload)
        .map_err(|e| DecodeError::InvalidBase64(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| DecodeError::InvalidUtf8(e.to_string()))
}

/// Encode a string payload as base64.
#[must_use]
pub fn encode_base64(payload: &str) -> String {
    BASE64_STANDARD.encode(payload)
}

/// Truncate a payload for preview rendering.
///
/// Returns the text unchanged when it holds at most `max_len` characters,
/// otherwise the first `max_len` characters followed by `…`. Counts
/// characters, not bytes, so multi-byte payloads are never split.
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    match text.char_indices().nth(max_len) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_hello() {
        assert_eq!(decode_base64("SGVsbG8=").unwrap(), "Hello");
    }

    #[test]
    fn decode_multibyte_utf8() {
        // base64("消息") — 多字节内容解码后保持原样
        let encoded = encode_base64("消息");
        assert_eq!(decode_base64(&encoded).unwrap(), "消息");
    }

    #[test]
    fn decode_rejects_malformed_base64() {
        let result = decode_base64("not base64!!!");
        assert!(matches!(result, Err(DecodeError::InvalidBase64(_))));
    }

    #[test]
    fn decode_rejects_invalid_utf8() {
        // base64 of the single byte 0xFF, which is not valid UTF-8
        let encoded = BASE64_STANDARD.encode([0xFF]);
        let result = decode_base64(&encoded);
        assert!(matches!(result, Err(DecodeError::InvalidUtf8(_))));
    }

    #[test]
    fn encode_decode_round_trip() {
        assert_eq!(decode_base64(&encode_base64("Hello")).unwrap(), "Hello");
    }

    #[test]
    fn truncate_long_text() {
        assert_eq!(truncate("abcdef", 3), "abc…");
    }

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate("ab", 3), "ab");
    }

    #[test]
    fn truncate_exact_length_unchanged() {
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("消息队列", 2), "消息…");
        assert_eq!(truncate("消息", 2), "消息");
    }

    #[test]
    fn truncate_empty() {
        assert_eq!(truncate("", 10), "");
    }
}
