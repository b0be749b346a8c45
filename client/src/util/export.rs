//! Attendance roster as an Excel workbook.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use rust_xlsxwriter::{Workbook, XlsxError};
use seatgrid::roster::{ROSTER_HEADERS, ROSTER_SHEET_NAME, roster_rows};
use seatgrid::{RosterValue, SessionDate, SessionUsers};

/// One-sheet workbook: a header row, then one row per registered student
/// ordered by grade, class and number.
///
/// # Errors
///
/// Returns an error if the workbook cannot be assembled.
pub fn build_roster_workbook(date: &SessionDate, roster: &SessionUsers) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(ROSTER_SHEET_NAME)?;

    for (col, header) in (0u16..).zip(ROSTER_HEADERS) {
        sheet.write_string(0, col, header)?;
    }
    for (row, values) in (1u32..).zip(roster_rows(date, roster)) {
        for (col, value) in (0u16..).zip(values) {
            match value {
                RosterValue::Text(text) => sheet.write_string(row, col, text)?,
                RosterValue::Number(number) => sheet.write_number(row, col, f64::from(number))?,
            };
        }
    }

    workbook.save_to_buffer()
}
