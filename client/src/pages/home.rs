//! Today's occupancy screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `/` route shows the seat grid of one session for today's date and
//! lets staff tag registrations with an issue or a memo. Every request
//! carries the staff token; a 401/403 sends the browser to the access page.

use leptos::prelude::*;
use seatgrid::{SessionDate, Student};

use crate::components::seat_grid::SeatLayoutGrid;
use crate::components::student_modal::StudentModal;
use crate::net::api;
use crate::state::home::{HomeState, ISSUE_ASSIGN_FAILED, MEMO_SAVE_FAILED};
use crate::util::auth::handle_unauthorized;
use crate::util::time::today;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = RwSignal::new(HomeState::default());
    let date = today().to_session_date();
    // Server rendering only knows the UTC day; the browser settles the heading.
    let calendar = RwSignal::new(today());
    Effect::new(move || calendar.set(today()));

    // Sessions and issue tags load once on mount.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api::list_sessions().await {
                Ok(sessions) => state.update(|s| s.apply_sessions(sessions)),
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("session list failed: {e}");
                        state.update(HomeState::fail_sessions);
                    }
                }
            }
        });
        leptos::task::spawn_local(async move {
            match api::list_issue_types().await {
                Ok(issue_types) => state.update(|s| s.issue_types = issue_types),
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("issue tag list failed: {e}");
                    }
                }
            }
        });
    });

    let selected = Memo::new(move |_| state.with(|s| s.selected_session.clone()));
    let layout_date = date.clone();
    Effect::new(move || {
        if let Some(session_id) = selected.get() {
            load_layout(state, session_id, layout_date.clone());
        }
    });

    let on_student = Callback::new(move |(student, seat_label): (Student, String)| {
        if !state.try_update(|s| s.open_student(&student, &seat_label)).unwrap_or(false) {
            return;
        }
        // Issue and memo records are keyed by the registration id, not the seat label.
        let student_id = student.id;
        leptos::task::spawn_local(async move {
            match api::student_issue(&student_id).await {
                Ok(issue) => state.update(|s| s.apply_student_issue(&student_id, issue)),
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("student issue lookup failed for {student_id}: {e}");
                    }
                }
            }
        });
    });

    let on_close = Callback::new(move |()| state.update(HomeState::close_modal));

    let assign_date = date.clone();
    let on_assign = Callback::new(move |()| {
        let Some((student_id, assignment)) = state.with_untracked(HomeState::issue_submission) else {
            return;
        };
        let date = assign_date.clone();
        leptos::task::spawn_local(async move {
            match api::assign_issue(&student_id, &assignment).await {
                Ok(()) => after_modal_save(state, date),
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("issue assignment failed for {student_id}: {e}");
                        state.update(|s| s.error = Some(ISSUE_ASSIGN_FAILED.to_owned()));
                    }
                }
            }
        });
    });

    let memo_date = date;
    let on_save_memo = Callback::new(move |()| {
        let Some((student_id, memo)) = state.with_untracked(HomeState::memo_submission) else {
            return;
        };
        let date = memo_date.clone();
        leptos::task::spawn_local(async move {
            match api::save_memo(&student_id, &memo).await {
                Ok(()) => after_modal_save(state, date),
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("memo save failed for {student_id}: {e}");
                        state.update(|s| s.error = Some(MEMO_SAVE_FAILED.to_owned()));
                    }
                }
            }
        });
    });

    let options = move || {
        state.with(|s| {
            s.sessions
                .iter()
                .map(|session| view! { <option value=session.id.clone()>{session.picker_label()}</option> })
                .collect_view()
        })
    };

    let session_info = move || {
        let (heading, layout) = state.with(|s| {
            if s.loading {
                return (None, None);
            }
            (s.selected_heading(), s.layout.clone())
        });
        let layout = layout?;
        let count = layout.registration_count;
        Some(view! {
            <div class="session-info">
                <h3>{heading}</h3>
                <p>{format!("신청 인원: {count}명")}</p>
                <SeatLayoutGrid layout=layout on_student=on_student/>
            </div>
        })
    };

    view! {
        <div class="layout-container">
            <h2>"야자 신청 현황"</h2>
            <h3>{move || format!("({})", calendar.get().iso())}</h3>

            <div class="session-selector">
                <select
                    id="session-select"
                    prop:value=move || selected.get().unwrap_or_default()
                    disabled=move || state.with(|s| s.loading)
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.select_session(&value));
                    }
                >
                    <option value="" disabled=true>
                        "야자를 선택하세요"
                    </option>
                    {options}
                </select>
            </div>

            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="error-message">{move || state.with(|s| s.error.clone().unwrap_or_default())}</div>
            </Show>
            <Show when=move || state.with(|s| s.loading)>
                <div class="loading">"로딩 중..."</div>
            </Show>

            {session_info}

            <Show when=move || state.with(HomeState::has_no_sessions)>
                <div class="no-sessions">"오늘 등록된 야자가 없습니다."</div>
            </Show>

            <StudentModal state=state on_assign=on_assign on_save_memo=on_save_memo on_close=on_close/>
        </div>
    }
}

/// Fetch the grid of `session_id` for `date`. Answers for a session that is
/// no longer selected are dropped.
fn load_layout(state: RwSignal<HomeState>, session_id: String, date: SessionDate) {
    state.update(HomeState::begin_layout_load);
    leptos::task::spawn_local(async move {
        let result = api::session_layout(&session_id, &date).await;
        if state.with_untracked(|s| s.selected_session.as_deref() != Some(session_id.as_str())) {
            return;
        }
        match result {
            Ok(layout) => state.update(|s| s.apply_layout(layout)),
            Err(e) => {
                if !handle_unauthorized(&e) {
                    log::warn!("occupancy load failed for session {session_id}: {e}");
                    state.update(HomeState::fail_layout);
                }
            }
        }
    });
}

/// Close the modal and refresh the grid after an issue or memo was stored.
fn after_modal_save(state: RwSignal<HomeState>, date: SessionDate) {
    state.update(HomeState::close_modal);
    if let Some(session_id) = state.with_untracked(|s| s.selected_session.clone()) {
        load_layout(state, session_id, date);
    }
}
