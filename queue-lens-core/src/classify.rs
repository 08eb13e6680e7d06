//! Message classification
//!
//! Partitions a fetched batch into encoding-based buckets for differentiated
//! display: parsed JSON, plain strings, base64 payloads, and an explicit
//! bucket for unrecognized encodings so nothing is dropped.

use queue_lens_broker::{Message, PayloadEncoding};
use serde::Serialize;

/// One fetched batch, partitioned by payload encoding and JSON validity.
///
/// Derived data: recomputed wholesale on every fetch, never patched in place
/// and never cached across queues. Each input message lands in exactly one
/// bucket, and every bucket preserves input order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClassifiedBatch {
    /// Payloads with `string` encoding that parsed as JSON.
    pub json_messages: Vec<serde_json::Value>,
    /// Payloads with `string` encoding that did not parse as JSON.
    pub string_messages: Vec<String>,
    /// Messages with `base64` encoding, untouched.
    pub base64_messages: Vec<Message>,
    /// Messages with an unrecognized encoding tag.
    pub unclassified: Vec<Message>,
}

impl ClassifiedBatch {
    /// Total number of classified messages across all buckets.
    #[must_use]
    pub fn total(&self) -> usize {
        self.json_messages.len()
            + self.string_messages.len()
            + self.base64_messages.len()
            + self.unclassified.len()
    }

    /// Whether every bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Partition a batch of messages by payload encoding.
///
/// A `string` payload that fails to parse as JSON is a plain string message —
/// a classification outcome, not an error. Unknown encodings go to
/// [`ClassifiedBatch::unclassified`] instead of being silently dropped.
#[must_use]
pub fn classify(messages: Vec<Message>) -> ClassifiedBatch {
    let mut batch = ClassifiedBatch::default();

    for message in messages {
        match &message.payload_encoding {
            PayloadEncoding::Base64 => batch.base64_messages.push(message),
            PayloadEncoding::String => {
                match serde_json::from_str::<serde_json::Value>(&message.payload) {
                    Ok(value) => batch.json_messages.push(value),
                    Err(_) => batch.string_messages.push(message.payload),
                }
            }
            PayloadEncoding::Other(tag) => {
                log::warn!("message with unrecognized payload_encoding '{tag}'");
                batch.unclassified.push(message);
            }
        }
    }

    batch
}
