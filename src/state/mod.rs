//! Shared client-side state.
//!
//! DESIGN
//! ======
//! Only the session lives here; page views keep their own local signals.

pub mod session;
