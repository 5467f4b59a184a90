//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its data loading and form handling; access control is
//! applied around it by `components::guarded`, never inside the page.

pub mod admin_dashboard;
pub mod campaign_management;
pub mod campaigns;
pub mod dashboard;
pub mod donate;
pub mod login;
pub mod register;
