//! Client-side state shared through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `user` owns the signed-in identity and its transitions; `session_store`
//! persists that identity across page reloads.

pub mod session_store;
pub mod user;
