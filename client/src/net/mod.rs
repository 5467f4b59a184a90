//! Networking modules for the remote donation API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues REST calls with the session's bearer credential, `error`
//! classifies failures for display, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
