//! HTTP client for the loghive API.
//!
//! This crate provides the main [`LoghiveClient`] for managing repositories,
//! parsers, ingest tokens, alerts, and notifiers.

#![doc(html_root_url = "https://docs.rs/loghive-client/0.1.0")]

mod client;
mod config;
pub mod api;

pub use client::{LoghiveClient, LoghiveClientBuilder};
pub use config::*;
pub use loghive_core::{Error, Result};
