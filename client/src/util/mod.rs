//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, dialogs,
//! downloads, the clock) and file generation from page and component logic.

pub mod auth;
pub mod dialog;
pub mod download;
pub mod export;
pub mod qr;
pub mod storage;
pub mod time;
