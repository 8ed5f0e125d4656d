//! Rust client and declarative resource toolkit for the loghive
//! log-management service.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use loghive::LoghiveClient;
//!
//! #[tokio::main]
//! async fn main() -> loghive::Result<()> {
//!     let client = LoghiveClient::new("your-api-token");
//!
//!     // List repositories
//!     for repository in client.repositories().list().await? {
//!         println!("{}: {}", repository.name, repository.description);
//!     }
//!
//!     // Inspect a notifier
//!     let notifier = client.notifiers().get("production", "oncall").await?;
//!     println!("variant: {}", notifier.variant());
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/loghive/0.1.0")]

// Re-export core types
pub use loghive_core::*;

// Re-export client
pub use loghive_client::{LoghiveClient, LoghiveClientBuilder};

// Re-export the declarative resource layer
pub use loghive_provider as provider;

// Re-export runtime for convenience
pub use serde;
pub use serde_json;
pub use tokio;
