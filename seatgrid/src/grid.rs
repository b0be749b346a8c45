//! Seat grid cells and the per-date occupancy layout.
//!
//! DESIGN
//! ======
//! A room is a list of rows of [`Cell`]s. Rows are normally the same length,
//! but nothing here relies on it: every helper walks rows independently so a
//! ragged layout renders and counts correctly.
//!
//! Occupancy is reported twice on the wire (`occupied` and the optional
//! `student`), and older payloads disagree about which one is authoritative.
//! A seat is only treated as clickable when both agree and the student record
//! carries a non-empty id; see [`Seat::occupant`].

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use serde::{Deserialize, Serialize};

use crate::wire::{optional_string_or_number, string_or_number, u32_from_string_or_number};

/// One position of a room layout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Cell {
    /// An addressable seat.
    Seat(Seat),
    /// A walkway placeholder that keeps the grid geometry.
    Aisle,
}

impl Cell {
    /// The seat in this cell, if it is not an aisle.
    #[must_use]
    pub fn as_seat(&self) -> Option<&Seat> {
        match self {
            Self::Seat(seat) => Some(seat),
            Self::Aisle => None,
        }
    }

    #[must_use]
    pub fn is_aisle(&self) -> bool {
        matches!(self, Self::Aisle)
    }

    /// CSS classes for the rendered table cell.
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Aisle => "layout-cell aisle",
            Self::Seat(seat) if seat.occupied => "layout-cell seat occupied",
            Self::Seat(_) => "layout-cell seat",
        }
    }

    /// Click payload for this cell: the occupying student and the seat label.
    ///
    /// `None` for aisles, free seats and occupied seats without a usable
    /// student record.
    #[must_use]
    pub fn click_target(&self) -> Option<(&Student, &str)> {
        let seat = self.as_seat()?;
        seat.occupant().map(|student| (student, seat.id.as_str()))
    }
}

/// A seat position and its current registration, if any.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    /// Seat label, unique within its room. Empty when the server omits it.
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    /// Zero-based row index inside the room layout.
    #[serde(default, deserialize_with = "u32_from_string_or_number")]
    pub row: u32,
    /// Zero-based column index inside the room layout.
    #[serde(default, deserialize_with = "u32_from_string_or_number")]
    pub col: u32,
    #[serde(default)]
    pub occupied: bool,
    #[serde(default)]
    pub student: Option<Student>,
}

impl Seat {
    /// The registered student when the seat is occupied, the record is
    /// present and its id is non-empty.
    #[must_use]
    pub fn occupant(&self) -> Option<&Student> {
        if !self.occupied {
            return None;
        }
        self.student.as_ref().filter(|student| student.has_identity())
    }

    /// The student record to print inside the cell. Unlike [`Self::occupant`]
    /// this does not require an id, so a half-populated record is still shown.
    #[must_use]
    pub fn displayed_student(&self) -> Option<&Student> {
        if self.occupied { self.student.as_ref() } else { None }
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.occupant().is_some()
    }
}

/// A student registration embedded in an occupied seat.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Registration id used by the issue/memo endpoints.
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub grade: String,
    #[serde(rename = "class", default, deserialize_with = "string_or_number")]
    pub class_number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub student_id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub registered_at: String,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub note: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub issue_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "optional_string_or_number")]
    pub seat_number: Option<String>,
}

impl Student {
    #[must_use]
    pub fn has_identity(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// `grade-class-number`, or empty when any part is missing.
    #[must_use]
    pub fn class_label(&self) -> String {
        if self.grade.is_empty() || self.class_number.is_empty() || self.number.is_empty() {
            return String::new();
        }
        format!("{}-{}-{}", self.grade, self.class_number, self.number)
    }

    /// First line of the seat cell: class label followed by the name.
    #[must_use]
    pub fn summary_line(&self) -> String {
        format!("{} {}", self.class_label(), self.name).trim().to_owned()
    }

    #[must_use]
    pub fn issue_text(&self) -> &str {
        self.issue_type.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn note_text(&self) -> &str {
        self.note.as_deref().unwrap_or_default()
    }
}

/// Occupancy of one session on one date.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionLayout {
    #[serde(default, deserialize_with = "string_or_number")]
    pub session_id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub layout: Vec<Vec<Cell>>,
    #[serde(default, deserialize_with = "u32_from_string_or_number")]
    pub registration_count: u32,
}

impl SessionLayout {
    /// Width of the widest row.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.layout.iter().map(Vec::len).max().unwrap_or(0)
    }

    fn seats(&self) -> impl Iterator<Item = &Seat> {
        self.layout.iter().flatten().filter_map(Cell::as_seat)
    }

    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats().count()
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.seats().filter(|seat| seat.occupied).count()
    }

    /// Look up a seat by its label.
    #[must_use]
    pub fn find_seat(&self, label: &str) -> Option<&Seat> {
        self.seats().find(|seat| seat.id == label)
    }
}
