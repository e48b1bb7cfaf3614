//! Presto protocol header names.
//!
//! These strings are part of the wire protocol and must match the server
//! byte for byte.

pub const PRESTO_USER: &str = "X-Presto-User";
pub const PRESTO_SOURCE: &str = "X-Presto-Source";
pub const PRESTO_CATALOG: &str = "X-Presto-Catalog";
pub const PRESTO_SCHEMA: &str = "X-Presto-Schema";

// Defined by the protocol but not sent by this client.
pub const PRESTO_CURRENT_STATE: &str = "X-Presto-Current-State";
pub const PRESTO_MAX_WAIT: &str = "X-Presto-Max-Wait";
pub const PRESTO_MAX_SIZE: &str = "X-Presto-Max-Size";
pub const PRESTO_PAGE_SEQUENCE_ID: &str = "X-Presto-Page-Sequence-Id";
