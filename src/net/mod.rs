//! Networking modules for the auth and analysis backends.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the session crate's `AuthBackend` over `gloo-net` and
//! issues analysis requests; `types` defines the analysis wire schema.

pub mod api;
pub mod types;
