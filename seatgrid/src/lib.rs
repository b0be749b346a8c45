//! Shared study-hall domain model.
//!
//! This crate owns the wire representation of rooms, seat grids, sessions,
//! registrations and rosters as the remote API returns them. It holds no
//! browser or network code so the UI crate and its tests can depend on it
//! freely.
//!
//! DESIGN
//! ======
//! The API is loose about scalar types (ids and class numbers arrive as either
//! strings or numbers depending on the endpoint), so every model here
//! deserializes leniently through the helpers in [`wire`].

pub mod editor;
pub mod grid;
pub mod issue;
pub mod registration;
pub mod room;
pub mod roster;
pub mod session;
pub mod wire;

pub use editor::LayoutDraft;
pub use grid::{Cell, Seat, SessionLayout, Student};
pub use issue::{IssueAssignment, IssueForm, IssueType, MemoUpdate, StudentIssue};
pub use registration::{RegistrationRequest, SeatRef, StudentInfo};
pub use room::{RoomForm, SeatPosition, StudyRoom};
pub use roster::{RosterEntry, RosterValue, SessionUsers};
pub use session::{CalendarDate, Grade, RoomRef, SessionDate, SessionForm, StudySession};
