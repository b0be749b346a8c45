use super::*;

fn room() -> StudyRoom {
    StudyRoom {
        id: "4".to_owned(),
        name: "본관 2층".to_owned(),
        layout: vec![
            vec!["1".to_owned(), "aisle".to_owned(), "2".to_owned()],
            vec!["aisle".to_owned(), " ".to_owned()],
            vec!["3".to_owned()],
        ],
    }
}

#[test]
fn study_room_accepts_numeric_id_and_missing_layout() {
    let parsed: StudyRoom = serde_json::from_value(serde_json::json!({ "id": 9, "name": "별관" })).unwrap();
    assert_eq!(parsed.id, "9");
    assert!(parsed.layout.is_empty());
}

#[test]
fn seat_positions_skip_aisles_and_blanks() {
    let seats = room().seat_positions();
    let labels: Vec<(usize, usize, &str)> = seats.iter().map(|s| (s.row, s.col, s.label.as_str())).collect();
    assert_eq!(labels, vec![(0, 0, "1"), (0, 2, "2"), (2, 0, "3")]);
}

#[test]
fn seat_url_orders_column_before_row() {
    let room = room();
    let seat = SeatPosition { row: 2, col: 5, label: "x".to_owned() };
    assert_eq!(room.seat_url("https://hall.example/", &seat), "https://hall.example/4/5/2");
}

#[test]
fn seat_caption_names_room_and_label() {
    let room = room();
    let seat = SeatPosition { row: 0, col: 0, label: "12".to_owned() };
    assert_eq!(room.seat_caption(&seat), "본관 2층 - 좌석 12");
}

#[test]
fn is_seat_label_rejects_aisle_tag_and_whitespace() {
    assert!(is_seat_label("A1"));
    assert!(!is_seat_label("aisle"));
    assert!(!is_seat_label("   "));
}
