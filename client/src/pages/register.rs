//! Public seat registration reached by scanning a seat's QR code.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route `/:location/:col_num/:row_num` carries the room and seat. The
//! page never redirects on 401/403; every failure is shown inline.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use seatgrid::{Grade, SeatRef, StudentInfo};

use crate::net::api;
use crate::state::register::{RegisterState, RegisterStep, SESSIONS_LOAD_FAILED};
use crate::util::storage::{self, STUDENT_INFO_KEY};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let params = use_params_map();
    let state = RwSignal::new(RegisterState::default());

    let seat = move || {
        params.with(|p| SeatRef {
            location: p.get("location").filter(|l| !l.is_empty()),
            col: p.get("col_num").unwrap_or_default(),
            row: p.get("row_num").unwrap_or_default(),
        })
    };

    Effect::new(move || {
        let cached = storage::load_json::<StudentInfo>(STUDENT_INFO_KEY);
        state.set(RegisterState::new(cached));
        leptos::task::spawn_local(async move {
            match api::list_sessions().await {
                Ok(sessions) => state.update(|s| s.sessions = sessions),
                Err(e) => {
                    log::warn!("session list failed: {e}");
                    state.update(|s| s.error = Some(SESSIONS_LOAD_FAILED.to_owned()));
                }
            }
        });
    });

    let on_identity = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let location = seat().location;
        state.update(|s| {
            storage::save_json(STUDENT_INFO_KEY, &s.info);
            s.confirm_identity(location.as_deref());
        });
    };

    let on_register = Callback::new(move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !state.with_untracked(RegisterState::can_submit) {
            return;
        }
        let Some(request) = state.with_untracked(|s| s.request(&seat())) else {
            return;
        };
        state.update(RegisterState::begin_submit);
        leptos::task::spawn_local(async move {
            let outcome = api::register(&request).await;
            if let Err(e) = &outcome {
                log::warn!("registration failed: {e}");
            }
            state.update(|s| s.finish_submit(outcome));
        });
    });

    view! {
        <div class="register-card">
            <h2>"야자 신청"</h2>

            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="notice notice--error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</div>
            </Show>
            <Show when=move || state.with(|s| s.success.is_some())>
                <div class="notice notice--success">{move || state.with(|s| s.success.clone().unwrap_or_default())}</div>
            </Show>

            <Show
                when=move || state.with(|s| s.step == RegisterStep::Identity)
                fallback=move || view! { <SessionStep state=state on_submit=on_register/> }
            >
                <form on:submit=on_identity>
                    <div class="field">
                        <label for="name">"이름"</label>
                        <input
                            id="name"
                            type="text"
                            required=true
                            prop:value=move || state.with(|s| s.info.name.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| s.set_name(&value));
                            }
                        />
                    </div>
                    <div class="field-row">
                        <div class="field">
                            <label for="grade">"학년"</label>
                            <select
                                id="grade"
                                required=true
                                prop:value=move || state.with(|s| s.info.grade.to_string())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| s.set_grade(&value));
                                }
                            >
                                {Grade::ALL
                                    .iter()
                                    .map(|g| view! { <option value=g.number().to_string()>{g.label()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="field">
                            <label for="class_number">"반"</label>
                            <input
                                id="class_number"
                                type="number"
                                min="1"
                                max="20"
                                required=true
                                prop:value=move || state.with(|s| s.info.class_number.to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| s.set_class_number(&value));
                                }
                            />
                        </div>
                        <div class="field">
                            <label for="student_number">"번호"</label>
                            <input
                                id="student_number"
                                type="number"
                                min="1"
                                max="40"
                                required=true
                                prop:value=move || state.with(|s| s.info.student_number.to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| s.set_student_number(&value));
                                }
                            />
                        </div>
                    </div>
                    <button type="submit" class="btn btn--primary btn--wide">
                        "다음"
                    </button>
                </form>
            </Show>
        </div>
    }
}

#[component]
fn SessionStep(state: RwSignal<RegisterState>, on_submit: Callback<leptos::ev::SubmitEvent>) -> impl IntoView {
    let options = move || {
        state.with(|s| {
            s.eligible
                .iter()
                .map(|session| {
                    let label = format!("{} ({} - {})", session.name, session.start_time, session.end_time);
                    view! { <option value=session.id.clone()>{label}</option> }
                })
                .collect_view()
        })
    };

    view! {
        <form on:submit=move |ev| on_submit.run(ev)>
            <p class="identity-line">{move || state.with(|s| s.info.headline())}</p>
            <label for="session_id">"야자 세션 선택"</label>
            <Show
                when=move || state.with(|s| !s.eligible.is_empty())
                fallback=|| view! { <p class="notice notice--error">"이용 가능한 세션이 없습니다."</p> }
            >
                <select
                    id="session_id"
                    required=true
                    prop:value=move || state.with(|s| s.selected_session.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.select_session(&value));
                    }
                >
                    <option value="">"세션을 선택하세요"</option>
                    {options}
                </select>
            </Show>
            <div class="button-row">
                <button type="button" class="btn" on:click=move |_| state.update(RegisterState::back)>
                    "정보 수정하기"
                </button>
                <button type="submit" class="btn btn--primary" disabled=move || !state.with(RegisterState::can_submit)>
                    {move || if state.with(|s| s.submitting) { "신청 중..." } else { "야자 신청하기" }}
                </button>
            </div>
        </form>
    }
}
