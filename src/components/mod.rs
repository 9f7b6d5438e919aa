//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `guard` owns session wiring and access control; `layout` is the chrome
//! around every signed-in page.

pub mod guard;
pub mod layout;
