//! Today's occupancy screen state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the `/` view: the session picker, the occupancy grid of the chosen
//! session for today, and the student modal used to tag registrations.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use seatgrid::{IssueAssignment, IssueType, MemoUpdate, SessionLayout, Student, StudentIssue, StudySession};

pub const SESSIONS_LOAD_FAILED: &str = "야자를 불러오는 중 오류가 발생했어요.";
pub const LAYOUT_LOAD_FAILED: &str = "야자 신청 현황을 불러오는 중 오류가 발생했어요.";
pub const ISSUE_ASSIGN_FAILED: &str = "특이사항 할당 중 오류가 발생했어요.";
pub const MEMO_SAVE_FAILED: &str = "메모 추가 중 오류가 발생했어요.";

/// The student whose registration is being tagged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StudentModal {
    pub student: Student,
    /// Label of the clicked seat.
    pub seat_label: String,
    /// Issue description picked in the dropdown; empty means none.
    pub selected_issue: String,
    pub memo: String,
}

impl StudentModal {
    pub fn new(student: &Student, seat_label: &str) -> Self {
        Self {
            student: student.clone(),
            seat_label: seat_label.to_owned(),
            selected_issue: student.issue_type.clone().unwrap_or_default(),
            memo: student.note.clone().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct HomeState {
    pub sessions: Vec<StudySession>,
    pub sessions_loaded: bool,
    pub selected_session: Option<String>,
    pub layout: Option<SessionLayout>,
    pub loading: bool,
    pub error: Option<String>,
    pub issue_types: Vec<IssueType>,
    pub modal: Option<StudentModal>,
}

impl HomeState {
    /// Store the session list and preselect its first entry.
    pub fn apply_sessions(&mut self, sessions: Vec<StudySession>) {
        self.selected_session = sessions.first().map(|s| s.id.clone());
        self.sessions = sessions;
        self.sessions_loaded = true;
    }

    pub fn fail_sessions(&mut self) {
        self.sessions_loaded = true;
        self.error = Some(SESSIONS_LOAD_FAILED.to_owned());
    }

    pub fn select_session(&mut self, session_id: &str) {
        self.selected_session = (!session_id.is_empty()).then(|| session_id.to_owned());
    }

    pub fn selected(&self) -> Option<&StudySession> {
        let id = self.selected_session.as_deref()?;
        self.sessions.iter().find(|s| s.id == id)
    }

    /// `name (room)` shown above the grid.
    pub fn selected_heading(&self) -> Option<String> {
        self.selected().map(|s| format!("{} ({})", s.name, s.room.name))
    }

    pub fn begin_layout_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_layout(&mut self, layout: SessionLayout) {
        self.layout = Some(layout);
        self.error = None;
        self.loading = false;
    }

    pub fn fail_layout(&mut self) {
        self.error = Some(LAYOUT_LOAD_FAILED.to_owned());
        self.loading = false;
    }

    /// Open the modal for an occupied seat. Students without an id are
    /// ignored.
    pub fn open_student(&mut self, student: &Student, seat_label: &str) -> bool {
        if !student.has_identity() {
            return false;
        }
        self.modal = Some(StudentModal::new(student, seat_label));
        true
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Merge the freshly fetched issue/memo of the open registration.
    /// Inputs the user already filled in are left alone.
    pub fn apply_student_issue(&mut self, student_id: &str, issue: StudentIssue) {
        let Some(modal) = self.modal.as_mut().filter(|m| m.student.id == student_id) else {
            return;
        };
        if modal.selected_issue.is_empty() {
            modal.selected_issue = issue.issue_type.clone().unwrap_or_default();
        }
        if modal.memo.is_empty() {
            modal.memo = issue.note.clone().unwrap_or_default();
        }
        modal.student.issue_type = issue.issue_type;
        modal.student.note = issue.note;
    }

    /// Target and body of an issue assignment, when one is selected.
    pub fn issue_submission(&self) -> Option<(String, IssueAssignment)> {
        let modal = self.modal.as_ref()?;
        if modal.selected_issue.is_empty() {
            return None;
        }
        Some((modal.student.id.clone(), IssueAssignment { issue_description: modal.selected_issue.clone() }))
    }

    /// Target and body of a memo save, when the memo is not blank.
    pub fn memo_submission(&self) -> Option<(String, MemoUpdate)> {
        let modal = self.modal.as_ref()?;
        if modal.memo.trim().is_empty() {
            return None;
        }
        Some((modal.student.id.clone(), MemoUpdate { memo: modal.memo.clone() }))
    }

    /// Whether the empty-state message applies.
    pub fn has_no_sessions(&self) -> bool {
        self.sessions_loaded && self.sessions.is_empty() && !self.loading
    }
}
