use super::*;

use std::io::Read as _;

use zip::ZipArchive;

fn room() -> StudyRoom {
    StudyRoom {
        id: "3".to_owned(),
        name: "본관 1층".to_owned(),
        layout: vec![
            vec!["1".to_owned(), "aisle".to_owned(), "2".to_owned()],
            vec!["aisle".to_owned(), "".to_owned(), "3".to_owned()],
        ],
    }
}

#[test]
fn seat_label_has_card_qr_and_caption() {
    let svg = seat_label_svg("https://hall.example/3/0/0", "본관 1층 - 좌석 1").unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="200" height="170""#));
    assert!(svg.contains(r#"<svg x="36" y="10""#));
    assert!(svg.contains(r#"width="128" height="128""#));
    assert!(!svg.contains("<?xml"));
    assert_eq!(svg.matches("<svg").count(), 2);
    assert!(svg.ends_with("</text></svg>"));
    assert!(svg.contains(">본관 1층 - 좌석 1</text>"));
}

#[test]
fn caption_is_xml_escaped() {
    let svg = seat_label_svg("x", "A&B <1>").unwrap();
    assert!(svg.contains("A&amp;B &lt;1&gt;"));
}

#[test]
fn archive_names_follow_room() {
    let room = room();
    assert_eq!(archive_file_name(&room), "본관 1층_QRCodes.zip");
    assert_eq!(label_entry_name(&room, "2"), "본관 1층/본관 1층 - 2.svg");
}

#[test]
fn archive_contains_one_label_per_seat() {
    let bytes = build_qr_archive(&room(), "https://hall.example").unwrap();
    let mut archive = ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_owned())
        .filter(|name| name.ends_with(".svg"))
        .collect();
    names.sort();
    assert_eq!(
        names,
        vec!["본관 1층/본관 1층 - 1.svg", "본관 1층/본관 1층 - 2.svg", "본관 1층/본관 1층 - 3.svg"]
    );

    let mut label = String::new();
    archive.by_name("본관 1층/본관 1층 - 3.svg").unwrap().read_to_string(&mut label).unwrap();
    assert!(label.contains("좌석 3"));
}

#[test]
fn nested_qr_is_resized_and_positioned() {
    let rendered = r#"<?xml version="1.0" standalone="yes"?><svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="147" height="147" viewBox="0 0 147 147"><path d="M0 0"/></svg>"#;
    assert_eq!(
        nested_qr(rendered),
        r#"<svg x="36" y="10" xmlns="http://www.w3.org/2000/svg" version="1.1" width="128" height="128" viewBox="0 0 147 147"><path d="M0 0"/></svg>"#
    );
}

#[test]
fn unencodable_seats_are_skipped() {
    let origin = format!("https://{}.example", "a".repeat(4000));
    let bytes = build_qr_archive(&room(), &origin).unwrap();
    let archive = ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
    assert_eq!(archive.len(), 1);
}
