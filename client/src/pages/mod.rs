//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`.

pub mod add_pizza;
pub mod home;
pub mod login;
pub mod register;

/// Route every successful form submission returns to.
pub(crate) const HOME_ROUTE: &str = "/";
