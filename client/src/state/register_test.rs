use super::*;

fn session(id: &str, room: u32, grades: (bool, bool, bool)) -> StudySession {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": format!("야자 {id}"),
        "one_grade": grades.0,
        "two_grade": grades.1,
        "three_grade": grades.2,
        "room": { "id": room, "name": "room" }
    }))
    .unwrap()
}

fn seat() -> SeatRef {
    SeatRef { location: Some("1".to_owned()), col: "4".to_owned(), row: "2".to_owned() }
}

#[test]
fn new_state_uses_cached_identity() {
    let cached = StudentInfo { name: "이영희".to_owned(), grade: 3, class_number: 7, student_number: 21 };
    let state = RegisterState::new(Some(cached.clone()));
    assert_eq!(state.info, cached);
    assert_eq!(state.step, RegisterStep::Identity);
    assert_eq!(RegisterState::new(None).info, StudentInfo::default());
}

#[test]
fn numeric_inputs_fall_back_to_zero() {
    let mut state = RegisterState::new(None);
    state.set_class_number("abc");
    state.set_student_number("12");
    state.set_grade("");
    assert_eq!((state.info.grade, state.info.class_number, state.info.student_number), (0, 0, 12));
}

#[test]
fn confirm_identity_filters_by_room_and_grade() {
    let mut state = RegisterState::new(None);
    state.sessions = vec![
        session("a", 1, (true, false, false)),
        session("b", 2, (true, true, true)),
        session("c", 1, (false, true, false)),
    ];
    state.set_grade("1");
    state.confirm_identity(Some("1"));
    assert_eq!(state.step, RegisterStep::Session);
    let ids: Vec<&str> = state.eligible.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["a"]);
}

#[test]
fn confirm_identity_without_location_keeps_all_rooms() {
    let mut state = RegisterState::new(None);
    state.sessions = vec![session("a", 1, (true, false, false)), session("b", 2, (true, false, false))];
    state.confirm_identity(None);
    assert_eq!(state.eligible.len(), 2);
}

#[test]
fn stale_selection_is_dropped_after_identity_change() {
    let mut state = RegisterState::new(None);
    state.sessions = vec![session("a", 1, (true, false, false)), session("c", 1, (false, true, false))];
    state.confirm_identity(Some("1"));
    state.select_session("a");
    state.back();
    state.set_grade("2");
    state.confirm_identity(Some("1"));
    assert!(state.selected_session.is_empty());
    assert!(!state.can_submit());
}

#[test]
fn request_uses_route_seat_coordinates() {
    let mut state = RegisterState::new(None);
    assert!(state.request(&seat()).is_none());
    state.select_session("a");
    let request = state.request(&seat()).unwrap();
    assert_eq!((request.seat_row.as_str(), request.seat_col.as_str()), ("2", "4"));
    assert_eq!(request.session_id, "a");
}

#[test]
fn failure_messages_prefer_server_detail() {
    let detail = ApiError::from_status(400, r#"{"detail":"이미 신청했습니다."}"#);
    assert_eq!(registration_error_message(&detail), "이미 신청했습니다.");
    assert_eq!(registration_error_message(&ApiError::from_status(500, "")), REGISTER_FAILED);
    assert_eq!(registration_error_message(&ApiError::from_status(403, "")), REGISTER_FAILED);
    assert_eq!(registration_error_message(&ApiError::Network("x".to_owned())), SERVER_UNREACHABLE);
}

#[test]
fn submit_outcome_sets_exactly_one_banner() {
    let mut state = RegisterState::new(None);
    state.begin_submit();
    assert!(state.submitting);
    state.finish_submit(Ok(()));
    assert_eq!(state.success.as_deref(), Some(REGISTER_SUCCESS));
    assert_eq!(state.error, None);

    state.begin_submit();
    assert_eq!(state.success, None);
    state.finish_submit(Err(ApiError::from_status(500, "")));
    assert_eq!(state.error.as_deref(), Some(REGISTER_FAILED));
    assert!(!state.submitting);
}
