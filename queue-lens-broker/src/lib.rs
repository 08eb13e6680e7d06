//! # queue-lens-broker
//!
//! Management-API client for browsing a message broker: vhosts, queues,
//! bounded message samples and exchange listings.
//!
//! The crate exposes a single [`MessageFetcher`] contract implemented by
//! [`ManagementClient`]. Every operation is one GET request against the
//! management endpoint:
//!
//! | Operation | Path |
//! |-----------|------|
//! | [`fetch_vhosts`](MessageFetcher::fetch_vhosts) | `/vhosts` |
//! | [`fetch_queues`](MessageFetcher::fetch_queues) | `/queues/{vhost}` |
//! | [`fetch_messages`](MessageFetcher::fetch_messages) | `/queues/{vhost}/{queue}?count={n}` |
//! | [`fetch_exchanges`](MessageFetcher::fetch_exchanges) | `/exchanges/{vhost}` |
//!
//! Failures are reported as [`BrokerError`] — never as partial results. The
//! client does not retry, cache or mutate anything on the broker.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use queue_lens_broker::{ManagementClient, MessageFetcher};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ManagementClient::new("http://localhost:8080")
//!         .with_basic_auth("guest", "guest");
//!
//!     for vhost in client.fetch_vhosts().await? {
//!         let queues = client.fetch_queues(&vhost.name).await?;
//!         println!("{}: {} queues", vhost.name, queues.len());
//!     }
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod http;
mod log_text;
mod traits;
mod types;

pub use client::ManagementClient;
pub use error::{BrokerError, Result};
pub use log_text::truncate_for_log;
pub use traits::MessageFetcher;
pub use types::{Exchange, Message, PayloadEncoding, Queue, Vhost};
