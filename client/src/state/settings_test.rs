use super::*;

use serde_json::json;

fn room(id: &str, name: &str) -> StudyRoom {
    serde_json::from_value(json!({ "id": id, "name": name, "layout": [["1", "aisle", "2"]] })).unwrap()
}

fn session(id: &str, room_id: &str) -> StudySession {
    serde_json::from_value(json!({
        "id": id,
        "name": "1차 야자",
        "start_time": "2025-03-14T18:00:00",
        "end_time": "2025-03-14T20:00:00",
        "one_grade": true,
        "two_grade": false,
        "three_grade": false,
        "minutes_before": 30,
        "minutes_after": 10,
        "room": { "id": room_id, "name": "A실" }
    }))
    .unwrap()
}

#[test]
fn tabs_default_to_rooms_with_korean_labels() {
    assert_eq!(SettingsTab::default(), SettingsTab::StudyRoom);
    let labels: Vec<_> = SettingsTab::ALL.iter().map(|t| t.label()).collect();
    assert_eq!(labels, ["야자실 관리", "야자 관리", "특이사항 목록 관리"]);
}

// =============================================================
// Rooms
// =============================================================

#[test]
fn room_create_requires_name() {
    let mut state = RoomsState::default();
    state.new_name = "   ".to_owned();
    assert_eq!(state.create_submission(), None);
    assert_eq!(state.error.as_deref(), Some(ROOM_NAME_REQUIRED));
}

#[test]
fn room_create_stores_aisles_explicitly() {
    let mut state = RoomsState::default();
    state.new_name = " B실 ".to_owned();
    let form = state.create_submission().unwrap();
    assert_eq!(form.name, "B실");
    assert_eq!(form.layout[0][3], "aisle");
    assert_eq!(form.layout.len(), 5);
    assert_eq!(state.error, None);
}

#[test]
fn created_resets_form() {
    let mut state = RoomsState::default();
    state.new_name = "B실".to_owned();
    state.create_draft.add_row();
    state.created();
    assert!(state.new_name.is_empty());
    assert_eq!(state.create_draft, LayoutDraft::default());
}

#[test]
fn editing_loads_room_into_draft() {
    let mut state = RoomsState::default();
    state.start_editing(&room("1", "A실"));
    assert!(state.is_editing("1"));
    assert!(!state.is_editing("2"));
    let (id, form) = state.update_submission().unwrap();
    assert_eq!(id, "1");
    assert_eq!(form.layout, vec![vec!["1".to_owned(), "aisle".to_owned(), "2".to_owned()]]);
    state.cancel_editing();
    assert_eq!(state.update_submission(), None);
}

#[test]
fn room_failure_prefers_server_detail() {
    let mut state = RoomsState::default();
    state.fail(&ApiError::from_status(400, r#"{"detail":"이미 존재하는 야자실입니다."}"#), ROOM_CREATE_FAILED);
    assert_eq!(state.error.as_deref(), Some("이미 존재하는 야자실입니다."));
    state.fail(&ApiError::Network("down".to_owned()), ROOM_DELETE_FAILED);
    assert_eq!(state.error.as_deref(), Some(ROOM_DELETE_FAILED));
}

#[test]
fn one_qr_download_at_a_time() {
    let mut state = RoomsState::default();
    state.apply_rooms(vec![room("1", "A실"), room("2", "B실")]);
    assert_eq!(state.begin_download("1").map(|r| r.name), Some("A실".to_owned()));
    assert!(state.is_downloading("1"));
    assert_eq!(state.begin_download("2"), None);
    state.finish_download();
    assert_eq!(state.begin_download("9"), None);
    assert!(state.begin_download("2").is_some());
}

// =============================================================
// Sessions
// =============================================================

#[test]
fn creating_preselects_first_room() {
    let mut state = SessionSettingsState::default();
    state.apply(vec![], vec![room("7", "A실"), room("8", "B실")]);
    state.start_creating();
    assert_eq!(state.mode, FormMode::Creating);
    assert_eq!(state.form.room_id, "7");
    assert!(state.is_form_open());
}

#[test]
fn editing_copies_selected_session() {
    let mut state = SessionSettingsState::default();
    state.apply(vec![session("3", "7")], vec![room("7", "A실")]);
    state.start_editing();
    assert_eq!(state.mode, FormMode::Viewing);

    state.show_session("3");
    state.start_editing();
    assert_eq!(state.mode, FormMode::Editing);
    assert_eq!(state.form.minutes_before, 30);
    assert_eq!(state.form.room_id, "7");
    let (target, form) = state.submission().unwrap();
    assert_eq!(target.as_deref(), Some("3"));
    assert!(form.one_grade);
}

#[test]
fn detail_replaces_listed_session() {
    let mut state = SessionSettingsState::default();
    state.apply(vec![session("3", "7")], vec![]);
    state.start_creating();
    state.apply_detail(session("3", "8"));
    assert_eq!(state.sessions.len(), 1);
    assert_eq!(state.mode, FormMode::Viewing);
    assert_eq!(state.selected_session().map(|s| s.room.id.as_str()), Some("8"));
}

#[test]
fn session_submission_validates_name_and_room() {
    let mut state = SessionSettingsState::default();
    state.start_creating();
    assert_eq!(state.submission(), None);
    assert_eq!(state.error.as_deref(), Some(SESSION_NAME_REQUIRED));
    state.form.name = "2차".to_owned();
    assert_eq!(state.submission(), None);
    assert_eq!(state.error.as_deref(), Some(SESSION_ROOM_REQUIRED));
    state.form.room_id = "7".to_owned();
    let (target, _) = state.submission().unwrap();
    assert_eq!(target, None);
}

#[test]
fn reload_drops_vanished_selection() {
    let mut state = SessionSettingsState::default();
    state.apply(vec![session("3", "7")], vec![]);
    state.show_session("3");
    state.apply(vec![session("4", "7")], vec![]);
    assert_eq!(state.selected, None);
    assert!(state.selected_session().is_none());
}

// =============================================================
// Issue tags
// =============================================================

#[test]
fn issue_description_is_required() {
    let mut state = IssuesState::default();
    assert!(state.loading);
    state.description = " ".to_owned();
    assert_eq!(state.submission(), None);
    assert_eq!(state.error.as_deref(), Some(ISSUE_REQUIRED));
}

#[test]
fn issue_edit_targets_existing_tag() {
    let mut state = IssuesState::default();
    state.apply(vec![IssueType { id: "2".to_owned(), description: "조퇴".to_owned() }]);
    assert!(!state.loading);
    let tag = state.issue_types[0].clone();
    state.start_editing(&tag);
    assert_eq!(state.description, "조퇴");
    assert_eq!(state.submit_failed_message(), ISSUE_UPDATE_FAILED);
    let (target, form) = state.submission().unwrap();
    assert_eq!(target.as_deref(), Some("2"));
    assert_eq!(form.description, "조퇴");

    state.saved();
    assert_eq!(state.editing, None);
    assert!(state.description.is_empty());
    assert_eq!(state.submit_failed_message(), ISSUE_CREATE_FAILED);
}
