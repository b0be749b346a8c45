//! Student identity and seat reservation requests.

#[cfg(test)]
#[path = "registration_test.rs"]
mod registration_test;

use serde::{Deserialize, Serialize};

/// Identity a student types on the first registration step. Cached in the
/// browser so the next scan starts pre-filled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentInfo {
    pub name: String,
    pub grade: u8,
    pub class_number: u32,
    pub student_number: u32,
}

impl Default for StudentInfo {
    fn default() -> Self {
        Self { name: String::new(), grade: 1, class_number: 1, student_number: 1 }
    }
}

impl StudentInfo {
    /// `2학년 3반 14번 김철수`.
    #[must_use]
    pub fn headline(&self) -> String {
        format!("{}학년 {}반 {}번 {}", self.grade, self.class_number, self.student_number, self.name)
    }
}

/// The seat a QR code points at, taken from the registration route
/// `/{location}/{col}/{row}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeatRef {
    pub location: Option<String>,
    pub col: String,
    pub row: String,
}

/// Body of `POST /registration/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    pub name: String,
    pub grade: u8,
    pub class_number: u32,
    pub student_number: u32,
    pub session_id: String,
    pub seat_row: String,
    pub seat_col: String,
}

impl RegistrationRequest {
    #[must_use]
    pub fn new(info: &StudentInfo, session_id: &str, seat: &SeatRef) -> Self {
        Self {
            name: info.name.clone(),
            grade: info.grade,
            class_number: info.class_number,
            student_number: info.student_number,
            session_id: session_id.to_owned(),
            seat_row: seat.row.clone(),
            seat_col: seat.col.clone(),
        }
    }
}
