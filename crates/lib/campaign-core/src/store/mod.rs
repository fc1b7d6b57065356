//! Store interfaces and the file-backed implementation.
//!
//! The store layer handles loading the campaign record set from its
//! backing file. The file stands in for the upstream marketing database,
//! so the store is read-only and stateless.

pub mod file;

pub use file::{FileCampaignStore, StoreError, StoreResult};
