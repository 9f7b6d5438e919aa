//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the login call and `types` defines the wire schema shared
//! with the backend and the persisted user record.

pub mod api;
pub mod types;
