//! Read-only rendering of a session's seat/aisle grid.

use leptos::prelude::*;
use seatgrid::{Cell, SessionLayout, Student};

/// Table of seats and aisles. Ragged rows render as they are.
///
/// When `on_student` is given, clicking an occupied seat with a usable
/// student record runs it with the student and the seat label.
#[component]
pub fn SeatLayoutGrid(layout: SessionLayout, #[prop(optional)] on_student: Option<Callback<(Student, String)>>) -> impl IntoView {
    let rows = layout
        .layout
        .into_iter()
        .map(|row| {
            let cells = row.into_iter().map(|cell| view! { <SeatCell cell=cell on_student=on_student/> }).collect_view();
            view! { <tr>{cells}</tr> }
        })
        .collect_view();

    view! {
        <div class="layout-grid">
            <table class="layout-table">
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn SeatCell(cell: Cell, on_student: Option<Callback<(Student, String)>>) -> impl IntoView {
    let class = cell.css_class();
    let target = on_student.and(cell.click_target().map(|(student, label)| (student.clone(), label.to_owned())));
    let cursor = if target.is_some() { "pointer" } else { "default" };

    let on_click = move |_| {
        if let (Some(callback), Some(payload)) = (on_student, target.clone()) {
            callback.run(payload);
        }
    };

    let body = cell.as_seat().map(|seat| {
        let student = seat.displayed_student().map(|s| {
            view! {
                <div class="student-info">
                    <div class="student-summary">{s.summary_line()}</div>
                    <div class="student-issue">{s.issue_text().to_owned()}</div>
                    <div class="student-note">{s.note_text().to_owned()}</div>
                </div>
            }
        });
        view! {
            <div class="seat-id">{seat.id.clone()}</div>
            {student}
        }
    });

    view! {
        <td class=class style:cursor=cursor on:click=on_click>
            {body}
        </td>
    }
}
