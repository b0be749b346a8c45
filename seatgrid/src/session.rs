//! Study sessions, grade eligibility and calendar dates.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use time::macros::format_description;

use crate::wire::{same_id, string_or_number};

/// School year a student belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    First,
    Second,
    Third,
}

impl Grade {
    pub const ALL: [Self; 3] = [Self::First, Self::Second, Self::Third];

    #[must_use]
    pub fn from_number(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            _ => None,
        }
    }

    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        format!("{}학년", self.number())
    }
}

/// The room a session is bound to, as embedded in session payloads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRef {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
}

/// A scheduled study period.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub start_time: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub end_time: String,
    #[serde(default)]
    pub one_grade: bool,
    #[serde(default)]
    pub two_grade: bool,
    #[serde(default)]
    pub three_grade: bool,
    /// Registration opens this many minutes before `start_time`.
    #[serde(default)]
    pub minutes_before: i64,
    /// Registration closes this many minutes after `start_time`.
    #[serde(default)]
    pub minutes_after: i64,
    #[serde(default)]
    pub room: RoomRef,
}

impl StudySession {
    #[must_use]
    pub fn admits(&self, grade: Grade) -> bool {
        match grade {
            Grade::First => self.one_grade,
            Grade::Second => self.two_grade,
            Grade::Third => self.three_grade,
        }
    }

    /// Eligible grades joined for display, or `없음` when none are enabled.
    #[must_use]
    pub fn grade_summary(&self) -> String {
        let grades: Vec<String> = Grade::ALL
            .into_iter()
            .filter(|grade| self.admits(*grade))
            .map(Grade::label)
            .collect();
        if grades.is_empty() { "없음".to_owned() } else { grades.join(", ") }
    }

    /// `HH:MM - HH:MM` taken from the start and end timestamps.
    #[must_use]
    pub fn clock_range(&self) -> String {
        format!("{} - {}", clock_time(&self.start_time), clock_time(&self.end_time))
    }

    /// `name (HH:MM - HH:MM)` as shown in session pickers.
    #[must_use]
    pub fn picker_label(&self) -> String {
        format!("{} ({})", self.name, self.clock_range())
    }

    /// Whether this session takes place in the room named by a QR code.
    #[must_use]
    pub fn is_in_room(&self, room_id: &str) -> bool {
        same_id(&self.room.id, room_id)
    }
}

/// Sessions a student may pick for a scanned seat: held in `location` (when
/// given) and open to `grade`. An unknown grade admits nothing.
#[must_use]
pub fn sessions_for_seat(sessions: &[StudySession], location: Option<&str>, grade: u8) -> Vec<StudySession> {
    let Some(grade) = Grade::from_number(grade) else {
        return Vec::new();
    };
    sessions
        .iter()
        .filter(|session| location.is_none_or(|room_id| session.is_in_room(room_id)))
        .filter(|session| session.admits(grade))
        .cloned()
        .collect()
}

/// Extract `HH:MM` from an ISO timestamp (`2025-03-14T18:30:00`) or a bare
/// clock time (`18:30`). Unrecognized input is returned unchanged.
#[must_use]
pub fn clock_time(timestamp: &str) -> &str {
    let time_part = timestamp
        .split_once(['T', ' '])
        .map_or(timestamp, |(_, time)| time);
    time_part.get(..5).unwrap_or(time_part)
}

/// Format an ISO timestamp the way the `ko-KR` locale prints a date-time:
/// `2025. 3. 14. 오후 6:30:00`. Unparsable input is returned unchanged.
#[must_use]
pub fn format_korean_datetime(timestamp: &str) -> String {
    let Some(parsed) = parse_wall_clock(timestamp) else {
        return timestamp.to_owned();
    };
    let hour = parsed.hour();
    let meridiem = if hour < 12 { "오전" } else { "오후" };
    let hour12 = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!(
        "{}. {}. {}. {meridiem} {hour12}:{:02}:{:02}",
        parsed.year(),
        u8::from(parsed.month()),
        parsed.day(),
        parsed.minute(),
        parsed.second()
    )
}

fn parse_wall_clock(timestamp: &str) -> Option<PrimitiveDateTime> {
    let normalized = timestamp.trim().replacen(' ', "T", 1);
    let with_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
    let without_seconds = format_description!("[year]-[month]-[day]T[hour]:[minute]");
    if let Some(head) = normalized.get(..19)
        && let Ok(parsed) = PrimitiveDateTime::parse(head, with_seconds)
    {
        return Some(parsed);
    }
    normalized
        .get(..16)
        .and_then(|head| PrimitiveDateTime::parse(head, without_seconds).ok())
}

/// Create/update payload for a session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionForm {
    pub name: String,
    pub start_time: String,
    pub end_time: String,
    pub one_grade: bool,
    pub two_grade: bool,
    pub three_grade: bool,
    pub minutes_before: i64,
    pub minutes_after: i64,
    pub room_id: String,
}

impl SessionForm {
    /// Empty form preselecting `default_room` when one exists.
    #[must_use]
    pub fn blank(default_room: Option<&str>) -> Self {
        Self { room_id: default_room.unwrap_or_default().to_owned(), ..Self::default() }
    }

    #[must_use]
    pub fn from_session(session: &StudySession) -> Self {
        Self {
            name: session.name.clone(),
            start_time: session.start_time.clone(),
            end_time: session.end_time.clone(),
            one_grade: session.one_grade,
            two_grade: session.two_grade,
            three_grade: session.three_grade,
            minutes_before: session.minutes_before,
            minutes_after: session.minutes_after,
            room_id: session.room.id.clone(),
        }
    }

    pub fn set_grade(&mut self, grade: Grade, enabled: bool) {
        match grade {
            Grade::First => self.one_grade = enabled,
            Grade::Second => self.two_grade = enabled,
            Grade::Third => self.three_grade = enabled,
        }
    }

    #[must_use]
    pub fn grade_enabled(&self, grade: Grade) -> bool {
        match grade {
            Grade::First => self.one_grade,
            Grade::Second => self.two_grade,
            Grade::Third => self.three_grade,
        }
    }
}

/// Parse a minutes field; negative or unparsable input becomes `0`.
#[must_use]
pub fn parse_minutes(raw: &str) -> i64 {
    raw.trim().parse::<i64>().map_or(0, |value| value.max(0))
}

/// A date on which a session has registrations, as returned by the API.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDate {
    #[serde(deserialize_with = "string_or_number")]
    pub year: String,
    #[serde(deserialize_with = "string_or_number")]
    pub month: String,
    #[serde(deserialize_with = "string_or_number")]
    pub date: String,
}

impl SessionDate {
    /// `2025년 03월 14일`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}년 {}월 {}일", self.year, self.month, self.date)
    }

    /// `2025/03/14`, the path suffix used by date-scoped endpoints.
    #[must_use]
    pub fn path(&self) -> String {
        format!("{}/{}/{}", self.year, self.month, self.date)
    }

    /// `20250314`.
    #[must_use]
    pub fn compact(&self) -> String {
        format!("{}{}{}", self.year, self.month, self.date)
    }
}

/// A local calendar day.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl CalendarDate {
    /// Zero-padded components for the date-scoped endpoints.
    #[must_use]
    pub fn to_session_date(self) -> SessionDate {
        SessionDate {
            year: format!("{:04}", self.year),
            month: format!("{:02}", self.month),
            date: format!("{:02}", self.day),
        }
    }

    /// `2025-03-07`.
    #[must_use]
    pub fn iso(self) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<time::Date> for CalendarDate {
    fn from(date: time::Date) -> Self {
        Self { year: date.year(), month: u8::from(date.month()), day: date.day() }
    }
}
