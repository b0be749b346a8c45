use super::*;

fn strings(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter().map(|row| row.iter().map(|c| (*c).to_owned()).collect()).collect()
}

#[test]
fn default_draft_is_five_by_seven_with_centre_aisle() {
    let draft = LayoutDraft::default();
    assert_eq!((draft.rows, draft.cols), (5, 7));
    assert_eq!(draft.cell(0, 0), "1");
    assert_eq!(draft.cell(0, 3), "");
    assert_eq!(draft.cell(0, 4), "4");
    assert_eq!(draft.cell(4, 6), "24");
    assert!(draft.cells()[2].iter().all(String::is_empty));
}

#[test]
fn saving_turns_blank_cells_into_aisle_tags() {
    let stored = to_stored(&strings(&[&["1", "", " "], &["aisle", "2"]]));
    assert_eq!(stored, strings(&[&["1", "aisle", "aisle"], &["aisle", "2"]]));
}

#[test]
fn loading_turns_aisle_tags_into_blank_cells() {
    let editable = to_editable(&strings(&[&["1", "aisle"], &["aisle"]]));
    assert_eq!(editable, strings(&[&["1", ""], &[""]]));
}

#[test]
fn from_room_uses_widest_row_for_column_count() {
    let room = StudyRoom {
        id: "1".to_owned(),
        name: "r".to_owned(),
        layout: strings(&[&["1"], &["2", "aisle", "3"]]),
    };
    let draft = LayoutDraft::from_room(&room);
    assert_eq!((draft.rows, draft.cols), (2, 3));
    assert_eq!(draft.cell(1, 1), "");
    assert_eq!(draft.shape(), vec![1, 3]);
}

#[test]
fn empty_room_loads_as_single_cell() {
    let room = StudyRoom { id: "1".to_owned(), name: "r".to_owned(), layout: Vec::new() };
    let draft = LayoutDraft::from_room(&room);
    assert_eq!((draft.rows, draft.cols), (1, 1));
    assert_eq!(draft.to_stored(), strings(&[&["aisle"]]));
}

#[test]
fn set_cell_ignores_out_of_range_positions() {
    let mut draft = LayoutDraft::from_cells(strings(&[&["1"]]));
    draft.set_cell(0, 0, "A");
    draft.set_cell(3, 3, "Z");
    assert_eq!(draft.cells(), strings(&[&["A"]]).as_slice());
}

#[test]
fn add_and_remove_rows_respect_minimum() {
    let mut draft = LayoutDraft::from_cells(strings(&[&["1", "2"]]));
    draft.add_row();
    assert_eq!(draft.shape(), vec![2, 2]);
    assert_eq!(draft.rows, 2);
    draft.remove_row();
    draft.remove_row();
    assert_eq!(draft.shape(), vec![2]);
    assert_eq!(draft.rows, 1);
}

#[test]
fn add_and_remove_columns_respect_minimum() {
    let mut draft = LayoutDraft::from_cells(strings(&[&["1"], &["2"]]));
    draft.add_column();
    assert_eq!(draft.shape(), vec![2, 2]);
    assert_eq!(draft.cols, 2);
    draft.remove_column();
    draft.remove_column();
    assert_eq!(draft.shape(), vec![1, 1]);
    assert_eq!(draft.cols, 1);
}

#[test]
fn resize_keeps_overlap_and_pads_with_aisles() {
    let mut draft = LayoutDraft::from_cells(strings(&[&["1", "2"], &["3", "4"]]));
    draft.set_requested_rows("3");
    draft.set_requested_cols("1");
    draft.resize();
    assert_eq!(draft.cells(), strings(&[&["1"], &["3"], &[""]]).as_slice());
}

#[test]
fn requested_dimensions_only_apply_on_resize() {
    let mut draft = LayoutDraft::from_cells(strings(&[&["1"]]));
    draft.set_requested_rows("4");
    assert_eq!(draft.rows, 4);
    assert_eq!(draft.shape(), vec![1]);
}

#[test]
fn parse_dimension_never_returns_zero() {
    assert_eq!(parse_dimension("0"), 1);
    assert_eq!(parse_dimension("abc"), 1);
    assert_eq!(parse_dimension("6"), 6);
}
