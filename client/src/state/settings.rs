//! Settings screen state: study rooms, sessions and issue tags.
//!
//! SYSTEM CONTEXT
//! ==============
//! `/teacher/settings` is three CRUD tabs over independent collections. Each
//! tab owns one state struct here; the page spawns the requests and feeds the
//! answers back through the `apply_*`/`fail_*` methods.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures never reach the network; they set the tab's inline
//! error. Room failures prefer the server `detail`; session and issue
//! failures show the tab's fixed message.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use seatgrid::{IssueForm, IssueType, LayoutDraft, RoomForm, SessionForm, StudyRoom, StudySession};

use crate::net::api::ApiError;

pub const ROOM_NAME_REQUIRED: &str = "야자실 이름을 입력해주세요.";
pub const ROOMS_LOAD_FAILED: &str = "야자실 목록을 불러오는데 실패했습니다.";
pub const ROOM_CREATE_FAILED: &str = "야자실 생성에 실패했습니다.";
pub const ROOM_UPDATE_FAILED: &str = "야자실 수정에 실패했습니다.";
pub const ROOM_DELETE_FAILED: &str = "야자실 삭제에 실패했습니다.";
pub const ROOM_DELETE_CONFIRM: &str = "정말로 이 야자실을 삭제하시겠습니까?";
pub const QR_FAILED: &str = "QR 코드 생성에 실패했습니다.";

pub const SESSIONS_LOAD_FAILED: &str = "야자 목록을 불러오는데 실패했습니다.";
pub const SESSION_SAVE_FAILED: &str = "야자 저장에 실패했습니다.";
pub const SESSION_DELETE_FAILED: &str = "야자 삭제에 실패했습니다.";
pub const SESSION_DELETE_CONFIRM: &str = "정말로 이 야자를 삭제하시겠습니까?";
pub const SESSION_NAME_REQUIRED: &str = "야자 이름을 입력해주세요.";
pub const SESSION_ROOM_REQUIRED: &str = "야자실을 선택해주세요.";

pub const ISSUE_REQUIRED: &str = "특이사항 목록을 입력해주세요.";
pub const ISSUES_LOAD_FAILED: &str = "특이사항 목록을 불러오는데 실패했습니다.";
pub const ISSUE_CREATE_FAILED: &str = "특이사항 목록 생성에 실패했습니다.";
pub const ISSUE_UPDATE_FAILED: &str = "특이사항 목록 수정에 실패했습니다.";
pub const ISSUE_DELETE_FAILED: &str = "특이사항 목록 삭제에 실패했습니다.";
pub const ISSUE_DELETE_CONFIRM: &str = "정말로 이 특이사항 목록을 삭제하시겠습니까?";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SettingsTab {
    #[default]
    StudyRoom,
    StudySession,
    Issue,
}

impl SettingsTab {
    pub const ALL: [Self; 3] = [Self::StudyRoom, Self::StudySession, Self::Issue];

    pub fn label(self) -> &'static str {
        match self {
            Self::StudyRoom => "야자실 관리",
            Self::StudySession => "야자 관리",
            Self::Issue => "특이사항 목록 관리",
        }
    }
}

// =============================================================================
// ROOMS
// =============================================================================

/// A room whose name and layout are being edited in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoomEdit {
    pub id: String,
    pub name: String,
    pub draft: LayoutDraft,
}

#[derive(Clone, Debug, Default)]
pub struct RoomsState {
    pub rooms: Vec<StudyRoom>,
    pub new_name: String,
    pub create_draft: LayoutDraft,
    pub editing: Option<RoomEdit>,
    pub error: Option<String>,
    /// Room whose QR archive is being generated.
    pub downloading: Option<String>,
}

impl RoomsState {
    pub fn apply_rooms(&mut self, rooms: Vec<StudyRoom>) {
        self.rooms = rooms;
    }

    pub fn fail(&mut self, error: &ApiError, fallback: &str) {
        self.error = Some(error.user_message(fallback));
    }

    /// Payload for the create form, or the validation message.
    pub fn create_submission(&mut self) -> Option<RoomForm> {
        let name = self.new_name.trim();
        if name.is_empty() {
            self.error = Some(ROOM_NAME_REQUIRED.to_owned());
            return None;
        }
        self.error = None;
        Some(RoomForm { name: name.to_owned(), layout: self.create_draft.to_stored() })
    }

    /// Reset the create form after a successful save.
    pub fn created(&mut self) {
        self.new_name.clear();
        self.create_draft = LayoutDraft::default();
    }

    pub fn start_editing(&mut self, room: &StudyRoom) {
        self.editing = Some(RoomEdit { id: room.id.clone(), name: room.name.clone(), draft: LayoutDraft::from_room(room) });
        self.error = None;
    }

    pub fn cancel_editing(&mut self) {
        self.editing = None;
    }

    pub fn is_editing(&self, room_id: &str) -> bool {
        self.editing.as_ref().is_some_and(|e| e.id == room_id)
    }

    /// Target and payload of the edit form, or the validation message.
    pub fn update_submission(&mut self) -> Option<(String, RoomForm)> {
        let edit = self.editing.as_ref()?;
        let name = edit.name.trim();
        if name.is_empty() {
            self.error = Some(ROOM_NAME_REQUIRED.to_owned());
            return None;
        }
        let submission = (edit.id.clone(), RoomForm { name: name.to_owned(), layout: edit.draft.to_stored() });
        self.error = None;
        Some(submission)
    }

    /// Mark `room_id` as generating its QR archive. Only one archive is
    /// built at a time.
    pub fn begin_download(&mut self, room_id: &str) -> Option<StudyRoom> {
        if self.downloading.is_some() {
            return None;
        }
        let room = self.rooms.iter().find(|r| r.id == room_id)?.clone();
        self.downloading = Some(room.id.clone());
        Some(room)
    }

    pub fn finish_download(&mut self) {
        self.downloading = None;
    }

    pub fn is_downloading(&self, room_id: &str) -> bool {
        self.downloading.as_deref() == Some(room_id)
    }
}

// =============================================================================
// SESSIONS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Viewing,
    Editing,
    Creating,
}

#[derive(Clone, Debug, Default)]
pub struct SessionSettingsState {
    pub sessions: Vec<StudySession>,
    pub rooms: Vec<StudyRoom>,
    pub selected: Option<String>,
    pub mode: FormMode,
    pub form: SessionForm,
    pub error: Option<String>,
}

impl SessionSettingsState {
    pub fn apply(&mut self, sessions: Vec<StudySession>, rooms: Vec<StudyRoom>) {
        self.sessions = sessions;
        self.rooms = rooms;
        if self.selected.as_deref().is_some_and(|id| !self.sessions.iter().any(|s| s.id == id)) {
            self.selected = None;
            self.mode = FormMode::Viewing;
        }
    }

    pub fn fail(&mut self, message: &str) {
        self.error = Some(message.to_owned());
    }

    pub fn selected_session(&self) -> Option<&StudySession> {
        let id = self.selected.as_deref()?;
        self.sessions.iter().find(|s| s.id == id)
    }

    /// Store a freshly fetched session and show it.
    pub fn apply_detail(&mut self, session: StudySession) {
        let id = session.id.clone();
        match self.sessions.iter_mut().find(|s| s.id == id) {
            Some(existing) => *existing = session,
            None => self.sessions.push(session),
        }
        self.show_session(&id);
    }

    pub fn show_session(&mut self, session_id: &str) {
        self.selected = Some(session_id.to_owned());
        self.mode = FormMode::Viewing;
        self.error = None;
    }

    /// Blank form preselecting the first room.
    pub fn start_creating(&mut self) {
        self.selected = None;
        self.form = SessionForm::blank(self.rooms.first().map(|r| r.id.as_str()));
        self.mode = FormMode::Creating;
        self.error = None;
    }

    pub fn start_editing(&mut self) {
        let Some(form) = self.selected_session().map(SessionForm::from_session) else {
            return;
        };
        self.form = form;
        self.mode = FormMode::Editing;
        self.error = None;
    }

    pub fn cancel(&mut self) {
        self.mode = FormMode::Viewing;
        self.error = None;
    }

    pub fn is_form_open(&self) -> bool {
        self.mode != FormMode::Viewing
    }

    /// Session to update (`None` when creating) plus the payload, or the
    /// validation message.
    pub fn submission(&mut self) -> Option<(Option<String>, SessionForm)> {
        if self.form.name.trim().is_empty() {
            self.error = Some(SESSION_NAME_REQUIRED.to_owned());
            return None;
        }
        if self.form.room_id.is_empty() {
            self.error = Some(SESSION_ROOM_REQUIRED.to_owned());
            return None;
        }
        let target = match self.mode {
            FormMode::Creating => None,
            FormMode::Editing => Some(self.selected.clone()?),
            FormMode::Viewing => return None,
        };
        self.error = None;
        Some((target, self.form.clone()))
    }

    pub fn saved(&mut self) {
        self.mode = FormMode::Viewing;
    }

    pub fn deleted(&mut self) {
        self.selected = None;
        self.mode = FormMode::Viewing;
    }
}

// =============================================================================
// ISSUE TAGS
// =============================================================================

#[derive(Clone, Debug)]
pub struct IssuesState {
    pub issue_types: Vec<IssueType>,
    pub description: String,
    /// Issue tag whose description the form currently edits.
    pub editing: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Default for IssuesState {
    fn default() -> Self {
        Self { issue_types: Vec::new(), description: String::new(), editing: None, loading: true, error: None }
    }
}

impl IssuesState {
    pub fn apply(&mut self, issue_types: Vec<IssueType>) {
        self.issue_types = issue_types;
        self.loading = false;
    }

    pub fn fail(&mut self, message: &str) {
        self.error = Some(message.to_owned());
        self.loading = false;
    }

    pub fn start_editing(&mut self, issue: &IssueType) {
        self.editing = Some(issue.id.clone());
        issue.description.clone_into(&mut self.description);
        self.error = None;
    }

    pub fn cancel_editing(&mut self) {
        self.editing = None;
        self.description.clear();
    }

    /// Tag to update (`None` when creating) plus the payload, or the
    /// validation message.
    pub fn submission(&mut self) -> Option<(Option<String>, IssueForm)> {
        let description = self.description.trim();
        if description.is_empty() {
            self.error = Some(ISSUE_REQUIRED.to_owned());
            return None;
        }
        let form = IssueForm { description: description.to_owned() };
        self.error = None;
        Some((self.editing.clone(), form))
    }

    pub fn submit_failed_message(&self) -> &'static str {
        if self.editing.is_some() { ISSUE_UPDATE_FAILED } else { ISSUE_CREATE_FAILED }
    }

    pub fn saved(&mut self) {
        self.cancel_editing();
    }
}
