//! Networking modules for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls and `types` re-exports the shared wire schema.

pub mod api;
pub mod types;
