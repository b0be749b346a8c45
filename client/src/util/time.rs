//! Local calendar date.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

use seatgrid::CalendarDate;

/// Today in the browser's local time zone. During server rendering this is
/// the server's UTC date, so views that print it must read it again once
/// hydrated.
pub fn today() -> CalendarDate {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        CalendarDate {
            year: i32::try_from(now.get_full_year()).unwrap_or(1970),
            month: u8::try_from(now.get_month() + 1).unwrap_or(1),
            day: u8::try_from(now.get_date()).unwrap_or(1),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        CalendarDate::from(time::OffsetDateTime::now_utc().date())
    }
}
