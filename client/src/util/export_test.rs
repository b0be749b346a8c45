use super::*;

fn date() -> SessionDate {
    SessionDate { year: "2025".to_owned(), month: "03".to_owned(), date: "14".to_owned() }
}

#[test]
fn workbook_is_a_zip_container() {
    let roster: SessionUsers = serde_json::from_value(serde_json::json!({
        "session_name": "1학년 1차",
        "room": { "id": 1, "name": "본관" },
        "users": [
            { "name": "가", "grade": 1, "class": 2, "number": 3, "seat_number": "4", "registered_at": "18:00" }
        ]
    }))
    .unwrap();
    let bytes = build_roster_workbook(&date(), &roster).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn empty_roster_still_produces_header_only_workbook() {
    let bytes = build_roster_workbook(&date(), &SessionUsers::default()).unwrap();
    assert!(!bytes.is_empty());
}
