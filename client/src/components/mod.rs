//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from Leptos context and apply route policy;
//! pages compose them.

pub mod guarded;
pub mod navbar;
