use super::*;

fn student(id: &str) -> Student {
    Student {
        id: id.to_owned(),
        name: "김철수".to_owned(),
        grade: "2".to_owned(),
        class_number: "3".to_owned(),
        number: "14".to_owned(),
        ..Student::default()
    }
}

fn seat(label: &str, occupied: bool, student: Option<Student>) -> Cell {
    Cell::Seat(Seat { id: label.to_owned(), row: 0, col: 0, occupied, student })
}

// =============================================================
// Wire shape
// =============================================================

#[test]
fn aisle_deserializes_from_type_tag() {
    let cell: Cell = serde_json::from_value(serde_json::json!({ "type": "aisle" })).unwrap();
    assert!(cell.is_aisle());
}

#[test]
fn seat_deserializes_with_embedded_student() {
    let cell: Cell = serde_json::from_value(serde_json::json!({
        "type": "seat",
        "id": "A1",
        "row": 0,
        "col": 2,
        "occupied": true,
        "student": {
            "id": "reg-1",
            "name": "이영희",
            "grade": 1,
            "class": 4,
            "number": 9,
            "student_id": "10409",
            "registered_at": "2025-03-14T18:01:00",
            "note": null,
            "issue_type": "지각"
        }
    }))
    .unwrap();
    let seat = cell.as_seat().unwrap();
    assert_eq!(seat.id, "A1");
    assert_eq!(seat.col, 2);
    let student = seat.student.as_ref().unwrap();
    assert_eq!(student.class_number, "4");
    assert_eq!(student.issue_text(), "지각");
    assert_eq!(student.note_text(), "");
}

#[test]
fn seat_defaults_missing_position_and_occupancy() {
    let cell: Cell = serde_json::from_value(serde_json::json!({ "type": "seat", "id": 7 })).unwrap();
    let seat = cell.as_seat().unwrap();
    assert_eq!(seat.id, "7");
    assert_eq!((seat.row, seat.col), (0, 0));
    assert!(!seat.occupied);
    assert!(seat.student.is_none());
}

#[test]
fn aisle_serializes_with_explicit_tag() {
    assert_eq!(serde_json::to_value(Cell::Aisle).unwrap(), serde_json::json!({ "type": "aisle" }));
}

#[test]
fn unknown_cell_type_is_rejected() {
    let result: Result<Cell, _> = serde_json::from_value(serde_json::json!({ "type": "pillar" }));
    assert!(result.is_err());
}

// =============================================================
// Occupancy invariant
// =============================================================

#[test]
fn occupied_seat_with_student_is_clickable() {
    let cell = seat("A1", true, Some(student("reg-1")));
    let (target, label) = cell.click_target().unwrap();
    assert_eq!(target.id, "reg-1");
    assert_eq!(label, "A1");
}

#[test]
fn occupied_seat_with_empty_student_id_is_not_clickable() {
    let cell = seat("A1", true, Some(student("  ")));
    assert!(cell.click_target().is_none());
    assert!(cell.as_seat().unwrap().displayed_student().is_some());
}

#[test]
fn occupied_flag_without_student_is_not_clickable() {
    let cell = seat("A1", true, None);
    assert!(cell.click_target().is_none());
    assert_eq!(cell.css_class(), "layout-cell seat occupied");
}

#[test]
fn student_without_occupied_flag_is_ignored() {
    let cell = seat("A1", false, Some(student("reg-1")));
    assert!(cell.click_target().is_none());
    assert!(cell.as_seat().unwrap().displayed_student().is_none());
    assert_eq!(cell.css_class(), "layout-cell seat");
}

#[test]
fn aisle_is_never_clickable() {
    assert!(Cell::Aisle.click_target().is_none());
    assert_eq!(Cell::Aisle.css_class(), "layout-cell aisle");
}

// =============================================================
// Student text
// =============================================================

#[test]
fn summary_line_joins_class_label_and_name() {
    assert_eq!(student("r").summary_line(), "2-3-14 김철수");
}

#[test]
fn class_label_requires_all_parts() {
    let mut partial = student("r");
    partial.number = String::new();
    assert_eq!(partial.class_label(), "");
    assert_eq!(partial.summary_line(), "김철수");
}

// =============================================================
// Layout helpers
// =============================================================

#[test]
fn ragged_layout_counts_without_panicking() {
    let layout = SessionLayout {
        session_id: "1".to_owned(),
        date: "2025-03-14".to_owned(),
        layout: vec![
            vec![seat("1", true, Some(student("r1"))), Cell::Aisle, seat("2", false, None)],
            vec![seat("3", true, None)],
            vec![],
        ],
        registration_count: 1,
    };
    assert_eq!(layout.column_count(), 3);
    assert_eq!(layout.seat_count(), 3);
    assert_eq!(layout.occupied_count(), 2);
    assert_eq!(layout.find_seat("3").map(|s| s.occupied), Some(true));
    assert!(layout.find_seat("9").is_none());
}

#[test]
fn session_layout_tolerates_missing_fields() {
    let layout: SessionLayout = serde_json::from_value(serde_json::json!({ "session_id": 5 })).unwrap();
    assert_eq!(layout.session_id, "5");
    assert!(layout.layout.is_empty());
    assert_eq!(layout.column_count(), 0);
    assert_eq!(layout.registration_count, 0);
}

#[test]
fn numeric_student_fields_do_not_break_the_grid() {
    let layout: SessionLayout = serde_json::from_value(serde_json::json!({
        "session_id": 5,
        "layout": [[{
            "type": "seat",
            "id": "1",
            "occupied": true,
            "student": { "id": 12, "name": "박민수", "seat_number": 1, "issue_type": 3, "note": null }
        }]],
        "registration_count": 1
    }))
    .unwrap();
    let student = layout.layout[0][0].as_seat().unwrap().student.as_ref().unwrap();
    assert_eq!(student.seat_number.as_deref(), Some("1"));
    assert_eq!(student.issue_text(), "3");
    assert!(student.note.is_none());
}

#[test]
fn seat_without_label_decodes_as_empty_id() {
    let layout: SessionLayout = serde_json::from_value(serde_json::json!({
        "layout": [[{ "type": "seat", "occupied": false }, { "type": "aisle" }]]
    }))
    .unwrap();
    let cell = &layout.layout[0][0];
    assert_eq!(cell.as_seat().unwrap().id, "");
    assert!(cell.click_target().is_none());
}
