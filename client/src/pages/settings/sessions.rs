//! Study session CRUD tab.
//!
//! Time inputs show `HH:MM`; an untouched field keeps the stored value so an
//! edit does not rewrite timestamps the staff never changed.

use leptos::prelude::*;
use seatgrid::session::{clock_time, parse_minutes};
use seatgrid::{Grade, SessionForm};

use crate::net::api;
use crate::state::settings::{
    FormMode, SESSION_DELETE_CONFIRM, SESSION_DELETE_FAILED, SESSION_SAVE_FAILED, SESSIONS_LOAD_FAILED,
    SessionSettingsState,
};
use crate::util::auth::handle_unauthorized;
use crate::util::dialog::confirm;

#[component]
pub fn SessionSettings() -> impl IntoView {
    let state = RwSignal::new(SessionSettingsState::default());

    Effect::new(move || reload(state));

    let on_select = Callback::new(move |session_id: String| {
        state.update(|s| s.show_session(&session_id));
        leptos::task::spawn_local(async move {
            match api::get_session(&session_id).await {
                Ok(session) => state.update(|s| s.apply_detail(session)),
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("session {session_id} lookup failed: {e}");
                    }
                }
            }
        });
    });

    let on_save = move |_| {
        let Some((target, form)) = state.try_update(SessionSettingsState::submission).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let result = match &target {
                Some(session_id) => api::update_session(session_id, &form).await,
                None => api::create_session(&form).await,
            };
            match result {
                Ok(()) => {
                    state.update(SessionSettingsState::saved);
                    reload(state);
                    if let Some(session_id) = target {
                        on_select.run(session_id);
                    }
                }
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("session save failed: {e}");
                        state.update(|s| s.fail(SESSION_SAVE_FAILED));
                    }
                }
            }
        });
    };

    let on_delete = move |_| {
        let Some(session_id) = state.with_untracked(|s| s.selected.clone()) else {
            return;
        };
        if !confirm(SESSION_DELETE_CONFIRM) {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::delete_session(&session_id).await {
                Ok(()) => {
                    state.update(SessionSettingsState::deleted);
                    reload(state);
                }
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("session {session_id} delete failed: {e}");
                        state.update(|s| s.fail(SESSION_DELETE_FAILED));
                    }
                }
            }
        });
    };

    let list = move || {
        let sessions = state.with(|s| s.sessions.clone());
        if sessions.is_empty() {
            return view! { <p>"등록된 야자가 없습니다."</p> }.into_any();
        }
        let items = sessions
            .into_iter()
            .map(|session| {
                let id = session.id.clone();
                let label = format!("{} - {}", session.name, session.room.name);
                view! { <li class="settings-list__item" on:click=move |_| on_select.run(id.clone())>{label}</li> }
            })
            .collect_view();
        view! { <ul class="settings-list">{items}</ul> }.into_any()
    };

    let details = move || {
        let session = state.with(|s| s.selected_session().cloned())?;
        Some(view! {
            <div class="session-details">
                <h3>"야자 정보"</h3>
                <p><strong>"이름: "</strong>{session.name.clone()}</p>
                <p><strong>"시작 시간: "</strong>{session.start_time.clone()}</p>
                <p><strong>"종료 시간: "</strong>{session.end_time.clone()}</p>
                <p><strong>"대상 학년: "</strong>{session.grade_summary()}</p>
                <p><strong>"시작 전: "</strong>{format!("{}분", session.minutes_before)}</p>
                <p><strong>"시작 후: "</strong>{format!("{}분", session.minutes_after)}</p>
                <p><strong>"야자실: "</strong>{session.room.name.clone()}</p>
                <div class="button-row">
                    <button class="btn" on:click=move |_| state.update(SessionSettingsState::start_editing)>
                        "수정"
                    </button>
                    <button class="btn btn--danger" on:click=on_delete>
                        "삭제"
                    </button>
                </div>
            </div>
        })
    };

    view! {
        <div class="settings-panel">
            <h2>"야자 관리"</h2>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="error-message">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <div class="settings-split">
                <div class="settings-split__list">
                    <h3>"야자 목록"</h3>
                    {list}
                    <button class="btn btn--primary" on:click=move |_| state.update(SessionSettingsState::start_creating)>
                        "새 야자 만들기"
                    </button>
                </div>
                <div class="settings-split__detail">
                    <Show when=move || state.with(SessionSettingsState::is_form_open) fallback=details>
                        <SessionFormView state=state/>
                        <div class="button-row">
                            <button class="btn btn--primary" on:click=on_save>
                                {move || if state.with(|s| s.mode == FormMode::Creating) { "생성" } else { "저장" }}
                            </button>
                            <button class="btn" on:click=move |_| state.update(SessionSettingsState::cancel)>
                                "취소"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SessionFormView(state: RwSignal<SessionSettingsState>) -> impl IntoView {
    let edit = move |f: fn(&mut SessionForm, String), value: String| state.update(|s| f(&mut s.form, value));

    let grade_boxes = Grade::ALL
        .iter()
        .map(|&grade| {
            view! {
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || state.with(|s| s.form.grade_enabled(grade))
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            state.update(|s| s.form.set_grade(grade, checked));
                        }
                    />
                    {format!("{} 야자", grade.label())}
                </label>
            }
        })
        .collect_view();

    let room_options = move || {
        state.with(|s| {
            s.rooms
                .iter()
                .map(|room| view! { <option value=room.id.clone()>{room.name.clone()}</option> })
                .collect_view()
        })
    };

    view! {
        <div class="session-form">
            <h3>{move || if state.with(|s| s.mode == FormMode::Creating) { "야자 생성" } else { "야자 수정" }}</h3>
            <label>
                "야자 이름:"
                <input
                    type="text"
                    required=true
                    placeholder="1학년 1차 야자"
                    prop:value=move || state.with(|s| s.form.name.clone())
                    on:input=move |ev| edit(|f, v| f.name = v, event_target_value(&ev))
                />
            </label>
            <label>
                "야자 시작 시간:"
                <input
                    type="time"
                    required=true
                    prop:value=move || state.with(|s| clock_time(&s.form.start_time).to_owned())
                    on:input=move |ev| edit(|f, v| f.start_time = v, event_target_value(&ev))
                />
            </label>
            <label>
                "야자 종료 시간:"
                <input
                    type="time"
                    required=true
                    prop:value=move || state.with(|s| clock_time(&s.form.end_time).to_owned())
                    on:input=move |ev| edit(|f, v| f.end_time = v, event_target_value(&ev))
                />
            </label>
            {grade_boxes}
            <label>
                "야자 신청 가능 시간 (야자 시작 n분 전부터)"
                <input
                    type="number"
                    min="0"
                    prop:value=move || state.with(|s| s.form.minutes_before.to_string())
                    on:input=move |ev| edit(|f, v| f.minutes_before = parse_minutes(&v), event_target_value(&ev))
                />
            </label>
            <label>
                "야자 신청 가능 시간 (야자 시작 n분 후까지)"
                <input
                    type="number"
                    min="0"
                    prop:value=move || state.with(|s| s.form.minutes_after.to_string())
                    on:input=move |ev| edit(|f, v| f.minutes_after = parse_minutes(&v), event_target_value(&ev))
                />
            </label>
            <label>
                "야자실:"
                <select
                    required=true
                    prop:value=move || state.with(|s| s.form.room_id.clone())
                    on:change=move |ev| edit(|f, v| f.room_id = v, event_target_value(&ev))
                >
                    <option value="">"야자실 선택"</option>
                    {room_options}
                </select>
            </label>
        </div>
    }
}

/// Refetch sessions and rooms together; the form needs both.
fn reload(state: RwSignal<SessionSettingsState>) {
    leptos::task::spawn_local(async move {
        let sessions = api::list_sessions().await;
        let rooms = api::list_rooms().await;
        match (sessions, rooms) {
            (Ok(sessions), Ok(rooms)) => state.update(|s| s.apply(sessions, rooms)),
            (Err(e), _) | (_, Err(e)) => {
                if !handle_unauthorized(&e) {
                    log::warn!("session settings load failed: {e}");
                    state.update(|s| s.fail(SESSIONS_LOAD_FAILED));
                }
            }
        }
    });
}
