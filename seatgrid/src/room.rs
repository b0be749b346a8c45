//! Study rooms as stored by the API and the seat addresses derived from them.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use serde::{Deserialize, Serialize};

use crate::wire::string_or_number;

/// Tag used in stored layouts for a walkway position.
pub const AISLE: &str = "aisle";

/// A room with its stored layout of seat labels.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRoom {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default)]
    pub layout: Vec<Vec<String>>,
}

/// Create/update payload for a room.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomForm {
    pub name: String,
    pub layout: Vec<Vec<String>>,
}

/// A real seat inside a stored layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeatPosition {
    pub row: usize,
    pub col: usize,
    pub label: String,
}

/// Whether a stored layout cell names a seat.
#[must_use]
pub fn is_seat_label(cell: &str) -> bool {
    cell != AISLE && !cell.trim().is_empty()
}

impl StudyRoom {
    /// Every seat of the layout in row-major order, skipping aisles and blanks.
    #[must_use]
    pub fn seat_positions(&self) -> Vec<SeatPosition> {
        self.layout
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| {
                cells.iter().enumerate().filter(|(_, cell)| is_seat_label(cell)).map(move |(col, cell)| {
                    SeatPosition { row, col, label: cell.clone() }
                })
            })
            .collect()
    }

    /// Registration URL encoded in the QR code of one seat.
    #[must_use]
    pub fn seat_url(&self, origin: &str, seat: &SeatPosition) -> String {
        seat_url(origin, &self.id, seat.col, seat.row)
    }

    /// Caption printed under a seat's QR code.
    #[must_use]
    pub fn seat_caption(&self, seat: &SeatPosition) -> String {
        format!("{} - 좌석 {}", self.name, seat.label)
    }
}

/// `{origin}/{room_id}/{col}/{row}`; column before row, matching the
/// registration route.
#[must_use]
pub fn seat_url(origin: &str, room_id: &str, col: usize, row: usize) -> String {
    format!("{}/{room_id}/{col}/{row}", origin.trim_end_matches('/'))
}
