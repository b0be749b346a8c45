//! Staff dashboard state: session table, registration dates, date grid.

#[cfg(test)]
#[path = "teacher_test.rs"]
mod teacher_test;

use seatgrid::{SessionDate, SessionLayout, StudySession};

pub const SESSIONS_LOAD_FAILED: &str = "야자 데이터를 불러오는데 실패했습니다.";
pub const DATES_LOAD_FAILED: &str = "날짜 정보를 불러오는데 실패했습니다.";
pub const LAYOUT_LOAD_FAILED: &str = "좌석 레이아웃을 불러오는데 실패했습니다.";
pub const EXPORT_FAILED: &str = "엑셀 데이터를 불러오는데 실패했습니다.";

#[derive(Clone, Debug)]
pub struct TeacherState {
    pub sessions: Vec<StudySession>,
    pub loading: bool,
    pub error: Option<String>,
    pub selected_session: Option<String>,
    pub dates: Vec<SessionDate>,
    pub loading_dates: bool,
    pub selected_date: Option<SessionDate>,
    pub layout: Option<SessionLayout>,
    pub loading_layout: bool,
    pub exporting: bool,
}

impl Default for TeacherState {
    fn default() -> Self {
        Self {
            sessions: Vec::new(),
            loading: true,
            error: None,
            selected_session: None,
            dates: Vec::new(),
            loading_dates: false,
            selected_date: None,
            layout: None,
            loading_layout: false,
            exporting: false,
        }
    }
}

impl TeacherState {
    pub fn apply_sessions(&mut self, sessions: Vec<StudySession>) {
        self.sessions = sessions;
        self.loading = false;
    }

    pub fn fail(&mut self, message: &str) {
        self.error = Some(message.to_owned());
        self.loading = false;
        self.loading_dates = false;
        self.loading_layout = false;
        self.exporting = false;
    }

    /// Click on a session row: selects it, or deselects it when it already
    /// is. Returns the session whose dates should be loaded.
    pub fn toggle_session(&mut self, session_id: &str) -> Option<String> {
        self.dates.clear();
        self.selected_date = None;
        self.layout = None;
        if self.selected_session.as_deref() == Some(session_id) {
            self.selected_session = None;
            self.loading_dates = false;
            return None;
        }
        self.selected_session = Some(session_id.to_owned());
        self.loading_dates = true;
        self.selected_session.clone()
    }

    /// Dates arrived for `session_id`; late answers for a session that is no
    /// longer selected are dropped.
    pub fn apply_dates(&mut self, session_id: &str, dates: Vec<SessionDate>) {
        if self.selected_session.as_deref() != Some(session_id) {
            return;
        }
        self.dates = dates;
        self.loading_dates = false;
    }

    pub fn is_selected_session(&self, session_id: &str) -> bool {
        self.selected_session.as_deref() == Some(session_id)
    }

    /// Click on a date. Returns the session whose grid should be loaded.
    pub fn select_date(&mut self, date: SessionDate) -> Option<String> {
        let session_id = self.selected_session.clone()?;
        self.selected_date = Some(date);
        self.loading_layout = true;
        Some(session_id)
    }

    pub fn is_selected_date(&self, date: &SessionDate) -> bool {
        self.selected_date.as_ref() == Some(date)
    }

    pub fn apply_layout(&mut self, layout: SessionLayout) {
        self.layout = Some(layout);
        self.loading_layout = false;
    }

    pub fn fail_layout(&mut self) {
        self.layout = None;
        self.fail(LAYOUT_LOAD_FAILED);
    }

    /// Session and date the roster download refers to.
    pub fn export_target(&self) -> Option<(String, SessionDate)> {
        Some((self.selected_session.clone()?, self.selected_date.clone()?))
    }
}
