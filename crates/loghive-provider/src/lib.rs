//! Declarative resource management for the loghive service.
//!
//! This crate maps flat, strongly-typed configuration records onto CRUD
//! operations against the API exposed by [`loghive_client`]. A host
//! orchestration engine owns resource graphs, state, and plan/apply; this
//! crate contributes the per-resource configuration surface and the
//! translation between that surface and the domain types in
//! [`loghive_core`].
//!
//! # Example
//!
//! ```rust,ignore
//! use loghive_provider::{Provider, ProviderConfig};
//!
//! #[tokio::main]
//! async fn main() -> loghive_core::Result<()> {
//!     let provider = Provider::new(&ProviderConfig::from_env()?)?;
//!     let config = provider.notifiers().read("production", "oncall").await?;
//!     println!("entity: {}", config.entity);
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/loghive-provider/0.1.0")]

mod block;
mod provider;
mod validate;
pub mod resource;

pub use block::BlockState;
pub use provider::{
    parse_composite_id, Provider, ProviderConfig, DEFAULT_ADDR, ENV_ADDR, ENV_API_TOKEN,
    ENV_CA_CERTIFICATE_PEM,
};
pub use resource::*;
