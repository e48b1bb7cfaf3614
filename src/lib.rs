//! `presto-http` is an async HTTP client for the Presto statement protocol.
//!
//! A query is submitted with [`StatementClient::submit`]; the server executes
//! it asynchronously and hands back result pages through a chain of follow-up
//! URIs. [`StatementClient::advance`] walks that chain, retrying transient
//! `503 Service Unavailable` responses with linear backoff, and
//! [`StatementClient::close`] sends a best-effort cancellation.

mod client;
mod error;
mod options;
mod session;
mod wire;

pub mod headers;

pub use client::{statement_url, StatementClient};
pub use error::PrestoError;
pub use options::ClientOptions;
pub use session::Session;
pub use wire::{Column, ErrorLocation, QueryError, QueryResults, StatementStats};

pub type Result<T> = std::result::Result<T, PrestoError>;
