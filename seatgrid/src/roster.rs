//! Attendance roster rows for spreadsheet export.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use serde::{Deserialize, Serialize};

use crate::session::{RoomRef, SessionDate};
use crate::wire::{string_or_number, u32_from_string_or_number};

pub const ROSTER_SHEET_NAME: &str = "좌석 배치";

pub const ROSTER_HEADERS: [&str; 11] = [
    "날짜",
    "야자",
    "야자 장소",
    "학년",
    "반",
    "번호",
    "이름",
    "좌석번호",
    "등록 시간",
    "특이사항",
    "메모",
];

/// One registered student as returned by the roster endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "u32_from_string_or_number")]
    pub grade: u32,
    #[serde(rename = "class", default, deserialize_with = "u32_from_string_or_number")]
    pub class_number: u32,
    #[serde(default, deserialize_with = "u32_from_string_or_number")]
    pub number: u32,
    #[serde(default, deserialize_with = "string_or_number")]
    pub seat_number: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub registered_at: String,
    #[serde(default)]
    pub issue_type: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

/// Roster of one session on one date.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUsers {
    #[serde(default, deserialize_with = "string_or_number")]
    pub session_name: String,
    #[serde(default)]
    pub room: RoomRef,
    #[serde(default)]
    pub users: Vec<RosterEntry>,
}

/// A spreadsheet cell value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RosterValue {
    Text(String),
    Number(u32),
}

/// Order by grade, then class, then number. Stable for ties.
pub fn sort_roster(entries: &mut [RosterEntry]) {
    entries.sort_by_key(|entry| (entry.grade, entry.class_number, entry.number));
}

/// Data rows (without the header) in export order.
#[must_use]
pub fn roster_rows(date: &SessionDate, roster: &SessionUsers) -> Vec<Vec<RosterValue>> {
    let date_label = date.label();
    let mut users = roster.users.clone();
    sort_roster(&mut users);
    users
        .into_iter()
        .map(|user| {
            vec![
                RosterValue::Text(date_label.clone()),
                RosterValue::Text(roster.session_name.clone()),
                RosterValue::Text(roster.room.name.clone()),
                RosterValue::Number(user.grade),
                RosterValue::Number(user.class_number),
                RosterValue::Number(user.number),
                RosterValue::Text(user.name),
                RosterValue::Text(user.seat_number),
                RosterValue::Text(user.registered_at),
                RosterValue::Text(user.issue_type.unwrap_or_default()),
                RosterValue::Text(user.note.unwrap_or_default()),
            ]
        })
        .collect()
}

/// `좌석배치_20250314.xlsx`.
#[must_use]
pub fn roster_file_name(date: &SessionDate) -> String {
    format!("좌석배치_{}.xlsx", date.compact())
}
