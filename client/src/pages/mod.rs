//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route's requests and state signal and delegates grid
//! and dialog rendering to `components`. Staff pages route every API failure
//! through `util::auth::handle_unauthorized` first.

pub mod access;
pub mod home;
pub mod register;
pub mod settings;
pub mod teacher;
