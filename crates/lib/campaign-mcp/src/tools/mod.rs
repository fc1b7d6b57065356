//! MCP tool modules.
//!
//! The server exposes a single data-retrieval operation; it lives in
//! `query`.

pub mod query;
