//! Staff dashboard: every session, its registration dates and the roster of
//! one date.
//!
//! SYSTEM CONTEXT
//! ==============
//! Clicking a session row loads the dates that have registrations; clicking a
//! date loads that date's grid. The roster of the selected date can be
//! exported as an Excel workbook built in the browser.

use leptos::prelude::*;
use seatgrid::session::format_korean_datetime;
use seatgrid::{SessionDate, StudySession};

use crate::components::seat_grid::SeatLayoutGrid;
use crate::net::api;
use crate::state::teacher::{DATES_LOAD_FAILED, EXPORT_FAILED, SESSIONS_LOAD_FAILED, TeacherState};
use crate::util::auth::handle_unauthorized;
use crate::util::download::{self, XLSX_MIME};
use crate::util::export::build_roster_workbook;

#[component]
pub fn TeacherPage() -> impl IntoView {
    let state = RwSignal::new(TeacherState::default());

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api::list_sessions().await {
                Ok(sessions) => state.update(|s| s.apply_sessions(sessions)),
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("session list failed: {e}");
                        state.update(|s| s.fail(SESSIONS_LOAD_FAILED));
                    }
                }
            }
        });
    });

    let on_session = Callback::new(move |session_id: String| {
        let Some(session_id) = state.try_update(|s| s.toggle_session(&session_id)).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::session_dates(&session_id).await {
                Ok(dates) => state.update(|s| s.apply_dates(&session_id, dates)),
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("date list failed for session {session_id}: {e}");
                        state.update(|s| s.fail(DATES_LOAD_FAILED));
                    }
                }
            }
        });
    });

    let on_date = Callback::new(move |date: SessionDate| {
        let Some(session_id) = state.try_update(|s| s.select_date(date.clone())).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = api::session_layout(&session_id, &date).await;
            if state.with_untracked(|s| !s.is_selected_date(&date) || !s.is_selected_session(&session_id)) {
                return;
            }
            match result {
                Ok(layout) => state.update(|s| s.apply_layout(layout)),
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("occupancy load failed for session {session_id}: {e}");
                        state.update(TeacherState::fail_layout);
                    }
                }
            }
        });
    });

    let on_export = move |_| {
        let Some((session_id, date)) = state.with_untracked(TeacherState::export_target) else {
            return;
        };
        state.update(|s| s.exporting = true);
        leptos::task::spawn_local(async move {
            let outcome = match api::session_users(&session_id, &date).await {
                Ok(roster) => export_roster(&date, &roster),
                Err(e) => {
                    if handle_unauthorized(&e) {
                        return;
                    }
                    Err(e.to_string())
                }
            };
            match outcome {
                Ok(()) => state.update(|s| s.exporting = false),
                Err(reason) => {
                    log::warn!("roster export failed for session {session_id}: {reason}");
                    state.update(|s| s.fail(EXPORT_FAILED));
                }
            }
        });
    };

    let rows = move || {
        state.with(|s| {
            s.sessions
                .iter()
                .map(|session| view! { <SessionRow session=session.clone() state=state on_select=on_session/> })
                .collect_view()
        })
    };

    let dates = move || {
        let (loading, dates) = state.with(|s| (s.loading_dates, s.dates.clone()));
        if loading {
            return view! { <p>"날짜 로딩 중..."</p> }.into_any();
        }
        if dates.is_empty() {
            return view! { <p>"등록된 날짜가 없습니다."</p> }.into_any();
        }
        let items = dates
            .into_iter()
            .map(|date| {
                let label = date.label();
                let selected = {
                    let date = date.clone();
                    move || state.with(|s| s.is_selected_date(&date))
                };
                view! {
                    <li class="date-item" class:date-item--selected=selected on:click=move |_| on_date.run(date.clone())>
                        {label}
                    </li>
                }
            })
            .collect_view();
        view! { <ul class="date-list">{items}</ul> }.into_any()
    };

    let grid = move || {
        let (date, loading, layout) = state.with(|s| (s.selected_date.clone(), s.loading_layout, s.layout.clone()));
        let date = date?;
        let body = if loading {
            view! { <p>"좌석 레이아웃 로딩 중..."</p> }.into_any()
        } else if let Some(layout) = layout {
            view! {
                <div class="layout-actions">
                    <button class="btn btn--primary" disabled=move || state.with(|s| s.exporting) on:click=on_export>
                        "엑셀로 다운로드"
                    </button>
                </div>
                <SeatLayoutGrid layout=layout/>
            }
            .into_any()
        } else {
            view! { <p>"좌석 레이아웃을 불러올 수 없습니다."</p> }.into_any()
        };
        Some(view! {
            <div class="layout-container">
                <h2>{format!("{} 좌석 배치", date.label())}</h2>
                {body}
            </div>
        })
    };

    view! {
        <div class="teacher-page">
            <div class="page-header">
                <h1>"야자 목록"</h1>
                <a class="btn" href="/teacher/settings">
                    "설정"
                </a>
            </div>
            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="error-message">{move || state.with(|s| format!("오류: {}", s.error.clone().unwrap_or_default()))}</div>
            </Show>
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <div class="loading">"로딩 중..."</div> }>
                <Show
                    when=move || state.with(|s| !s.sessions.is_empty())
                    fallback=|| view! { <p>"등록된 야자가 없습니다."</p> }
                >
                    <table class="session-table">
                        <thead>
                            <tr>
                                <th>"야자"</th>
                                <th>"시작 시간"</th>
                                <th>"종료 시간"</th>
                                <th>"대상 학년"</th>
                                <th>"신청 가능 시간(시작 전 n분부터)"</th>
                                <th>"신청 가능 시간(시작 후 n분까지)"</th>
                                <th>"야자 장소"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                    <Show when=move || state.with(|s| s.selected_session.is_some())>
                        <div class="session-dates">
                            <h2>"야자 날짜"</h2>
                            {dates}
                        </div>
                    </Show>
                    {grid}
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn SessionRow(session: StudySession, state: RwSignal<TeacherState>, on_select: Callback<String>) -> impl IntoView {
    let id = session.id.clone();
    let selected = {
        let id = id.clone();
        move || state.with(|s| s.is_selected_session(&id))
    };
    view! {
        <tr class="session-row" class:session-row--selected=selected on:click=move |_| on_select.run(id.clone())>
            <td>{session.name.clone()}</td>
            <td>{format_korean_datetime(&session.start_time)}</td>
            <td>{format_korean_datetime(&session.end_time)}</td>
            <td>{session.grade_summary()}</td>
            <td>{session.minutes_before}</td>
            <td>{session.minutes_after}</td>
            <td>{session.room.name.clone()}</td>
        </tr>
    }
}

/// Build the workbook and hand it to the browser as a download.
fn export_roster(date: &SessionDate, roster: &seatgrid::SessionUsers) -> Result<(), String> {
    let bytes = build_roster_workbook(date, roster).map_err(|e| e.to_string())?;
    let file_name = seatgrid::roster::roster_file_name(date);
    download::save_bytes(&file_name, XLSX_MIME, &bytes).map_err(|e| e.to_string())
}
