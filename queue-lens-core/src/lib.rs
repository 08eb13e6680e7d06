//! Queue Lens Core Library
//!
//! Provides the data-dependent logic for browsing broker message samples:
//! - Batch classification by payload encoding and JSON validity (`classify`)
//! - Payload encode/decode/truncate operations (`codec`)
//! - Export serialization of buckets and payloads (`export`)
//! - The browse service façade over the management client (`services`)
//!
//! This library is presentation-independent: frontends consume read-only
//! projections of its results and own nothing but interaction state.

pub mod classify;
pub mod codec;
pub mod error;
pub mod export;
pub mod services;

// Re-export common types
pub use classify::{classify, ClassifiedBatch};
pub use codec::{decode_base64, encode_base64, truncate, DecodeError};
pub use error::{BrokerError, CoreError, CoreResult};
pub use export::{export_json, ExportArtifact, EXPORT_FILENAME};
pub use services::BrowseService;
