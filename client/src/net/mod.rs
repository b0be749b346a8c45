//! Networking modules for the remote reservation API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and classifies failures, `types` defines the
//! response envelopes that wrap the shared `seatgrid` models.

pub mod api;
pub mod types;
