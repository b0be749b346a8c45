//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the seat grid and the editing surfaces shared by the
//! route pages. They hold no API logic; pages pass data in and receive
//! callbacks out.

pub mod layout_editor;
pub mod seat_grid;
pub mod student_modal;
