//! Export serialization
//!
//! Turns a classified bucket or a single payload into a downloadable JSON
//! artifact. Invoked only on explicit user request and never touches the
//! source data.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Fixed filename for exported message artifacts.
pub const EXPORT_FILENAME: &str = "messages.json";

/// A file-like export artifact offered to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportArtifact {
    /// UTF-8 JSON content.
    pub content: String,
    /// Suggested filename.
    pub suggested_filename: String,
}

/// Serialize any exportable value into a JSON artifact.
///
/// The output is deterministic for a given input: pretty-printed UTF-8 JSON
/// with key order as carried by the value itself.
pub fn export_json<T: Serialize>(value: &T) -> CoreResult<ExportArtifact> {
    let content = serde_json::to_string_pretty(value)
        .map_err(|e| CoreError::Serialization(e.to_string()))?;
    Ok(ExportArtifact {
        content,
        suggested_filename: EXPORT_FILENAME.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{classify, ClassifiedBatch};
    use queue_lens_broker::{Message, PayloadEncoding};

    #[test]
    fn artifact_carries_fixed_filename() {
        let artifact = export_json(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(artifact.suggested_filename, "messages.json");
    }

    #[test]
    fn export_is_deterministic() {
        let value = serde_json::json!(["one", "two", {"n": 3}]);
        let a = export_json(&value).unwrap();
        let b = export_json(&value).unwrap();
        assert_eq!(a.content, b.content);
    }

    #[test]
    fn exported_content_round_trips() {
        let batch = classify(vec![Message {
            payload: r#"{"order": 7}"#.to_string(),
            payload_encoding: PayloadEncoding::String,
            properties: serde_json::Map::new(),
        }]);

        let artifact = export_json(&batch.json_messages).unwrap();
        let back: Vec<serde_json::Value> = serde_json::from_str(&artifact.content).unwrap();
        assert_eq!(back, batch.json_messages);
    }

    #[test]
    fn whole_batch_is_exportable() {
        let batch = ClassifiedBatch::default();
        let artifact = export_json(&batch).unwrap();
        assert!(artifact.content.contains("json_messages"));
        assert!(artifact.content.contains("unclassified"));
    }

    #[test]
    fn decoded_payload_is_exportable() {
        let artifact = export_json(&"Hello".to_string()).unwrap();
        assert_eq!(artifact.content, "\"Hello\"");
    }
}
