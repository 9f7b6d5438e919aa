//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is mounted by `app::App`. Protected pages are wrapped in
//! `RequireSession` at the route, so pages themselves never check auth.

pub mod assessment;
pub mod customers;
pub mod dashboard;
pub mod login;
pub mod register;
pub mod results;
