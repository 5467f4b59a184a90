//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only the session is application-wide. Page data (campaigns, donations,
//! stats) is fetched per screen and held in page-local signals.

pub mod auth;
