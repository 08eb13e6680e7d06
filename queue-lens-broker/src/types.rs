//! Wire types returned by the management API.

use serde::{Deserialize, Serialize};

/// Broker virtual host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vhost {
    /// Vhost name (the broker's default vhost is `/`).
    pub name: String,
}

/// Queue scoped to a vhost.
///
/// The wire carries the queue name plus optional depth metadata; the client
/// stamps the owning vhost so a `Queue` never travels detached from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Queue {
    /// Queue name.
    pub name: String,
    /// Owning vhost, filled in by the client.
    #[serde(default)]
    pub vhost: String,
    /// Queue depth as reported by the broker, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<u64>,
}

/// Payload encoding tag, decided once at ingestion.
///
/// The broker declares whether a payload is raw text (`string`) or
/// base64-encoded binary (`base64`). Any other tag deserializes into
/// [`Other`](Self::Other) instead of failing the whole batch, so downstream
/// classification can route it to an explicit bucket rather than losing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadEncoding {
    /// Raw UTF-8 text payload.
    String,
    /// Base64-encoded binary payload.
    Base64,
    /// Unrecognized encoding tag, preserved verbatim.
    #[serde(untagged)]
    Other(String),
}

/// A sampled message. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message payload, interpreted according to `payload_encoding`.
    pub payload: String,
    /// Payload encoding tag.
    pub payload_encoding: PayloadEncoding,
    /// Remaining broker metadata (routing key, redelivered flag, properties...).
    #[serde(flatten)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

/// Exchange descriptor. Publish path, listed only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    /// Exchange name (empty string for the default exchange).
    pub name: String,
    /// Exchange type (`direct`, `fanout`, `topic`, ...).
    #[serde(rename = "type", default)]
    pub exchange_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_encoding_known_tags() {
        let s: PayloadEncoding = serde_json::from_str("\"string\"").unwrap();
        assert_eq!(s, PayloadEncoding::String);
        let b: PayloadEncoding = serde_json::from_str("\"base64\"").unwrap();
        assert_eq!(b, PayloadEncoding::Base64);
    }

    #[test]
    fn payload_encoding_unknown_tag_preserved() {
        let e: PayloadEncoding = serde_json::from_str("\"amqp-0-9\"").unwrap();
        assert_eq!(e, PayloadEncoding::Other("amqp-0-9".to_string()));
        // 序列化时原样写回
        assert_eq!(serde_json::to_string(&e).unwrap(), "\"amqp-0-9\"");
    }

    #[test]
    fn message_preserves_broker_metadata() {
        let json = r#"{
            "payload": "hello",
            "payload_encoding": "string",
            "routing_key": "orders.created",
            "redelivered": false
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.payload, "hello");
        assert_eq!(msg.payload_encoding, PayloadEncoding::String);
        assert_eq!(
            msg.properties.get("routing_key"),
            Some(&serde_json::json!("orders.created"))
        );

        let back = serde_json::to_value(&msg).unwrap();
        assert_eq!(back["redelivered"], serde_json::json!(false));
    }

    #[test]
    fn queue_wire_shape_tolerates_missing_metadata() {
        let q: Queue = serde_json::from_str(r#"{"name": "orders"}"#).unwrap();
        assert_eq!(q.name, "orders");
        assert_eq!(q.vhost, "");
        assert_eq!(q.messages, None);
    }

    #[test]
    fn exchange_type_field_renamed() {
        let e: Exchange =
            serde_json::from_str(r#"{"name": "amq.topic", "type": "topic"}"#).unwrap();
        assert_eq!(e.exchange_type, "topic");
    }
}
