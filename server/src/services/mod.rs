//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own business logic and the in-memory stores so route
//! handlers can stay focused on protocol translation and session plumbing.

pub mod credentials;
pub mod menu;
pub mod session;
