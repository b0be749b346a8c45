//! Issue tag CRUD tab.

use leptos::prelude::*;

use crate::net::api;
use crate::state::settings::{ISSUE_DELETE_CONFIRM, ISSUE_DELETE_FAILED, ISSUES_LOAD_FAILED, IssuesState};
use crate::util::auth::handle_unauthorized;
use crate::util::dialog::confirm;

#[component]
pub fn IssueSettings() -> impl IntoView {
    let state = RwSignal::new(IssuesState::default());

    Effect::new(move || reload(state));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((target, form)) = state.try_update(IssuesState::submission).flatten() else {
            return;
        };
        let failure = state.with_untracked(IssuesState::submit_failed_message);
        state.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            let result = match &target {
                Some(issue_id) => api::update_issue_type(issue_id, &form).await,
                None => api::create_issue_type(&form).await,
            };
            match result {
                Ok(()) => {
                    state.update(IssuesState::saved);
                    reload(state);
                }
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("issue tag save failed: {e}");
                        state.update(|s| s.fail(failure));
                    }
                }
            }
        });
    };

    let on_delete = Callback::new(move |issue_id: String| {
        if !confirm(ISSUE_DELETE_CONFIRM) {
            return;
        }
        state.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match api::delete_issue_type(&issue_id).await {
                Ok(()) => {
                    state.update(|s| {
                        if s.editing.as_deref() == Some(issue_id.as_str()) {
                            s.cancel_editing();
                        }
                    });
                    reload(state);
                }
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("issue tag {issue_id} delete failed: {e}");
                        state.update(|s| s.fail(ISSUE_DELETE_FAILED));
                    }
                }
            }
        });
    });

    let busy = move || state.with(|s| s.loading);
    let editing = move || state.with(|s| s.editing.is_some());

    let rows = move || {
        let issue_types = state.with(|s| s.issue_types.clone());
        if issue_types.is_empty() {
            return view! {
                <tr>
                    <td colspan="3">"등록된 특이사항 목록이 없습니다."</td>
                </tr>
            }
            .into_any();
        }
        issue_types
            .into_iter()
            .map(|issue| {
                let id = issue.id.clone();
                let (id_cell, description) = (issue.id.clone(), issue.description.clone());
                view! {
                    <tr>
                        <td>{id_cell}</td>
                        <td>{description}</td>
                        <td>
                            <button class="btn btn--small" disabled=busy on:click=move |_| state.update(|s| s.start_editing(&issue))>
                                "수정"
                            </button>
                            <button class="btn btn--small btn--danger" disabled=busy on:click=move |_| on_delete.run(id.clone())>
                                "삭제"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="settings-panel">
            <h2>"특이사항 목록 관리"</h2>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="error-message">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>

            <form class="settings-form" on:submit=on_submit>
                <label for="description">"특이사항 목록:"</label>
                <input
                    id="description"
                    type="text"
                    required=true
                    prop:value=move || state.with(|s| s.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.description = value);
                    }
                />
                <button type="submit" class="btn btn--primary" disabled=busy>
                    {move || match (busy(), editing()) {
                        (true, _) => "처리 중...",
                        (false, true) => "수정",
                        (false, false) => "생성",
                    }}
                </button>
                <Show when=editing>
                    <button type="button" class="btn" disabled=busy on:click=move |_| state.update(IssuesState::cancel_editing)>
                        "취소"
                    </button>
                </Show>
            </form>

            <h3>"특이사항 목록 목록"</h3>
            <Show when=move || !(busy() && !editing()) fallback=|| view! { <p>"로딩 중..."</p> }>
                <table class="settings-table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"설명"</th>
                            <th>"작업"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </Show>
        </div>
    }
}

fn reload(state: RwSignal<IssuesState>) {
    leptos::task::spawn_local(async move {
        match api::list_issue_types().await {
            Ok(issue_types) => state.update(|s| s.apply(issue_types)),
            Err(e) => {
                if !handle_unauthorized(&e) {
                    log::warn!("issue tag list failed: {e}");
                    state.update(|s| s.fail(ISSUES_LOAD_FAILED));
                }
            }
        }
    });
}
