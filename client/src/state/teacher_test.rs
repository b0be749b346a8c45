use super::*;

fn date(d: &str) -> SessionDate {
    SessionDate { year: "2025".to_owned(), month: "03".to_owned(), date: d.to_owned() }
}

#[test]
fn starts_loading_without_selection() {
    let state = TeacherState::default();
    assert!(state.loading);
    assert_eq!(state.selected_session, None);
    assert_eq!(state.export_target(), None);
}

#[test]
fn clicking_a_row_twice_deselects_it() {
    let mut state = TeacherState::default();
    assert_eq!(state.toggle_session("3").as_deref(), Some("3"));
    assert!(state.loading_dates);
    state.apply_dates("3", vec![date("14")]);
    assert_eq!(state.dates.len(), 1);

    assert_eq!(state.toggle_session("3"), None);
    assert_eq!(state.selected_session, None);
    assert!(state.dates.is_empty());
}

#[test]
fn switching_sessions_forgets_previous_date() {
    let mut state = TeacherState::default();
    state.toggle_session("3");
    state.select_date(date("14"));
    state.apply_layout(SessionLayout::default());
    state.toggle_session("4");
    assert_eq!(state.selected_date, None);
    assert_eq!(state.layout, None);
}

#[test]
fn late_dates_for_other_session_are_dropped() {
    let mut state = TeacherState::default();
    state.toggle_session("3");
    state.toggle_session("4");
    state.apply_dates("3", vec![date("14")]);
    assert!(state.dates.is_empty());
    assert!(state.loading_dates);
}

#[test]
fn date_needs_a_selected_session() {
    let mut state = TeacherState::default();
    assert_eq!(state.select_date(date("14")), None);
    state.toggle_session("3");
    assert_eq!(state.select_date(date("14")).as_deref(), Some("3"));
    assert!(state.is_selected_date(&date("14")));
    assert!(!state.is_selected_date(&date("15")));
    assert_eq!(state.export_target(), Some(("3".to_owned(), date("14"))));
}

#[test]
fn layout_failure_clears_grid_and_reports() {
    let mut state = TeacherState::default();
    state.toggle_session("3");
    state.select_date(date("14"));
    state.fail_layout();
    assert!(!state.loading_layout);
    assert_eq!(state.layout, None);
    assert_eq!(state.error.as_deref(), Some(LAYOUT_LOAD_FAILED));
}
