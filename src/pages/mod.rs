//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The root app picks one page per guard decision.

pub mod analysis;
pub mod home;
pub mod login;
pub mod signup;
