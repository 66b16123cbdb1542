//! Record types exchanged with the host pipeline.
//!
//! This module provides the record abstraction transforms operate on: the
//! [`ConnectRecord`] unit and its additive [`Headers`] collection.

mod connect_record;
mod headers;

// Re-export message types
pub use connect_record::ConnectRecord;
pub use headers::{Header, Headers};
