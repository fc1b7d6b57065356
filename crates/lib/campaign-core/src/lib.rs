//! Core types and query logic for campaign-mcp.
//!
//! This crate owns the campaign data model, the file-backed record store,
//! and the control plane that turns a query selector into a rendered
//! plain-text report.

pub mod control;
pub mod models;
pub mod render;
pub mod store;
