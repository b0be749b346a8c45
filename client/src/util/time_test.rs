use super::*;

#[test]
fn server_side_today_is_the_utc_day() {
    let before = time::OffsetDateTime::now_utc().date();
    let day = today();
    let after = time::OffsetDateTime::now_utc().date();
    assert!(day == CalendarDate::from(before) || day == CalendarDate::from(after));
}
