//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render storefront chrome and menus while reading shared state
//! from Leptos context providers.

pub mod drink_menu;
pub mod navbar;
pub mod pizza_menu;
