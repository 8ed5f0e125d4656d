//! Core types and errors for the loghive library.
//!
//! This crate provides the foundational types used across the loghive
//! workspace:
//!
//! - **Types**: Strongly-typed representations of the server-side
//!   configuration entities (repositories, parsers, ingest tokens, alerts,
//!   and notifiers)
//! - **Errors**: Comprehensive error handling with [`Error`]
//!
//! # Example
//!
//! ```rust,ignore
//! use loghive_core::{Notifier, NotifierSettings, SlackSettings, Result};
//!
//! fn describe(notifier: &Notifier) -> Result<()> {
//!     println!("name: {}", notifier.name);
//!     println!("variant: {}", notifier.variant());
//!     Ok(())
//! }
//! ```

#![doc(html_root_url = "https://docs.rs/loghive-core/0.1.0")]

mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
