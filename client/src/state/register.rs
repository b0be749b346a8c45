//! Two-step seat registration state.
//!
//! DESIGN
//! ======
//! Step one collects the student's identity, step two picks a session held
//! in the scanned room and open to the student's grade. Only the identity
//! step touches browser storage (through the page); everything here is pure.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use seatgrid::session::sessions_for_seat;
use seatgrid::wire::parse_count;
use seatgrid::{RegistrationRequest, SeatRef, StudentInfo, StudySession};

use crate::net::api::ApiError;

pub const REGISTER_SUCCESS: &str = "야자 신청이 완료되었습니다!";
pub const SESSIONS_LOAD_FAILED: &str = "세션 정보를 불러오는데 실패했습니다.";
pub const REGISTER_FAILED: &str = "신청 중 오류가 발생했습니다.";
pub const SERVER_UNREACHABLE: &str = "서버 연결에 실패했습니다.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RegisterStep {
    #[default]
    Identity,
    Session,
}

#[derive(Clone, Debug, Default)]
pub struct RegisterState {
    pub step: RegisterStep,
    pub info: StudentInfo,
    pub sessions: Vec<StudySession>,
    pub eligible: Vec<StudySession>,
    pub selected_session: String,
    pub submitting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl RegisterState {
    /// Start at the identity step, pre-filled from a cached identity.
    pub fn new(cached: Option<StudentInfo>) -> Self {
        Self { info: cached.unwrap_or_default(), ..Self::default() }
    }

    pub fn set_name(&mut self, raw: &str) {
        raw.clone_into(&mut self.info.name);
    }

    /// Unparsable input becomes `0`, which admits no session.
    pub fn set_grade(&mut self, raw: &str) {
        self.info.grade = u8::try_from(parse_count(raw)).unwrap_or(0);
    }

    pub fn set_class_number(&mut self, raw: &str) {
        self.info.class_number = parse_count(raw);
    }

    pub fn set_student_number(&mut self, raw: &str) {
        self.info.student_number = parse_count(raw);
    }

    /// Leave the identity step, keeping only sessions this seat and grade
    /// may use.
    pub fn confirm_identity(&mut self, location: Option<&str>) {
        self.eligible = sessions_for_seat(&self.sessions, location, self.info.grade);
        if !self.eligible.iter().any(|s| s.id == self.selected_session) {
            self.selected_session.clear();
        }
        self.step = RegisterStep::Session;
    }

    pub fn back(&mut self) {
        self.step = RegisterStep::Identity;
    }

    pub fn select_session(&mut self, session_id: &str) {
        session_id.clone_into(&mut self.selected_session);
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && !self.selected_session.is_empty()
    }

    /// Reservation body for `seat`, once a session is chosen.
    pub fn request(&self, seat: &SeatRef) -> Option<RegistrationRequest> {
        if self.selected_session.is_empty() {
            return None;
        }
        Some(RegistrationRequest::new(&self.info, &self.selected_session, seat))
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.error = None;
        self.success = None;
    }

    pub fn finish_submit(&mut self, outcome: Result<(), ApiError>) {
        self.submitting = false;
        match outcome {
            Ok(()) => self.success = Some(REGISTER_SUCCESS.to_owned()),
            Err(err) => self.error = Some(registration_error_message(&err)),
        }
    }
}

/// Message shown for a failed reservation: the server's explanation when
/// it sent one.
pub fn registration_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Network(_) | ApiError::Unavailable => SERVER_UNREACHABLE.to_owned(),
        other => other.user_message(REGISTER_FAILED),
    }
}
