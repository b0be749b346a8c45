use super::*;

fn date() -> SessionDate {
    SessionDate { year: "2025".to_owned(), month: "03".to_owned(), date: "07".to_owned() }
}

// =============================================================
// ApiError classification
// =============================================================

#[test]
fn unauthorized_covers_401_and_403() {
    assert!(ApiError::from_status(401, "").is_unauthorized());
    assert!(ApiError::from_status(403, "{}").is_unauthorized());
    assert!(!ApiError::from_status(404, "").is_unauthorized());
}

#[test]
fn status_error_keeps_server_detail() {
    let err = ApiError::from_status(400, r#"{"detail":"신청 가능 시간이 아닙니다."}"#);
    assert_eq!(err, ApiError::Status { status: 400, detail: Some("신청 가능 시간이 아닙니다.".to_owned()) });
    assert_eq!(err.user_message("fallback"), "신청 가능 시간이 아닙니다.");
}

#[test]
fn forbidden_detail_is_still_readable() {
    let err = ApiError::from_status(403, r#"{"detail":"closed"}"#);
    assert_eq!(err.detail(), Some("closed"));
}

#[test]
fn non_json_or_list_detail_falls_back() {
    let err = ApiError::from_status(500, "Internal Server Error");
    assert_eq!(err.user_message("신청 중 오류가 발생했습니다."), "신청 중 오류가 발생했습니다.");
    let err = ApiError::from_status(422, r#"{"detail":[{"loc":["body"],"msg":"bad"}]}"#);
    assert_eq!(err.detail(), None);
    let err = ApiError::from_status(400, r#"{"detail":"  "}"#);
    assert_eq!(err.detail(), None);
}

#[test]
fn network_error_has_no_detail() {
    let err = ApiError::Network("offline".to_owned());
    assert_eq!(err.detail(), None);
    assert_eq!(err.user_message("x"), "x");
}

// =============================================================
// Paths
// =============================================================

#[test]
fn endpoint_prefixes_api_base() {
    assert!(endpoint("/session/").ends_with("/session/"));
    assert!(!endpoint("/session/").contains("//session"));
}

#[test]
fn date_scoped_paths_use_padded_components() {
    assert_eq!(registrations_path("4", &date()), "/session/4/registrations/2025/03/07");
    assert_eq!(session_users_path("4", &date()), "/session/4/users/2025/03/07");
}

#[test]
fn resource_paths_match_api_layout() {
    assert_eq!(session_path("9"), "/session/9");
    assert_eq!(session_dates_path("9"), "/session/9/dates");
    assert_eq!(issue_path("2"), "/issue/2");
    assert_eq!(student_issue_path("77"), "/issue/student/77");
    assert_eq!(assign_issue_path("77"), "/issue/assign/77");
    assert_eq!(memo_path("77"), "/issue/memo/77");
    assert_eq!(room_path("1"), "/studyroom/1");
}
