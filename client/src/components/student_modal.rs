//! Modal for tagging an occupied seat's registration with an issue and memo.

use leptos::prelude::*;

use crate::state::home::HomeState;

/// Student details plus the issue picker and memo editor. Renders nothing
/// while no student is open.
#[component]
pub fn StudentModal(
    state: RwSignal<HomeState>,
    on_assign: Callback<()>,
    on_save_memo: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let name = move || state.with(|s| s.modal.as_ref().map(|m| m.student.name.clone()).unwrap_or_default());
    let class_label = move || state.with(|s| s.modal.as_ref().map(|m| m.student.class_label()).unwrap_or_default());
    let seat = move || state.with(|s| s.modal.as_ref().map(|m| m.seat_label.clone()).unwrap_or_default());
    let selected_issue = move || state.with(|s| s.modal.as_ref().map(|m| m.selected_issue.clone()).unwrap_or_default());
    let memo = move || state.with(|s| s.modal.as_ref().map(|m| m.memo.clone()).unwrap_or_default());

    let options = move || {
        state.with(|s| {
            s.issue_types
                .iter()
                .map(|issue| {
                    let value = issue.description.clone();
                    view! { <option value=value.clone()>{value.clone()}</option> }
                })
                .collect_view()
        })
    };

    view! {
        <Show when=move || state.with(|s| s.modal.is_some())>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog dialog--student"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <h2>"학생 정보"</h2>
                    <p class="dialog__row">"이름: " {name}</p>
                    <p class="dialog__row">"학번: " {class_label}</p>
                    <p class="dialog__row dialog__row--muted">"좌석: " {seat}</p>

                    <div class="dialog__section">
                        <h4>"특이사항 선택"</h4>
                        <select
                            class="dialog__select"
                            prop:value=selected_issue
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| {
                                    if let Some(modal) = s.modal.as_mut() {
                                        modal.selected_issue = value;
                                    }
                                });
                            }
                        >
                            <option value="">"특이사항을 선택하세요"</option>
                            {options}
                        </select>
                        <button
                            class="btn btn--primary"
                            disabled=move || selected_issue().is_empty()
                            on:click=move |_| on_assign.run(())
                        >
                            "특이사항 선택"
                        </button>
                    </div>

                    <div class="dialog__section">
                        <h4>"메모 작성"</h4>
                        <textarea
                            class="dialog__memo"
                            rows="3"
                            placeholder="메모 내용을 입력하세요"
                            prop:value=memo
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| {
                                    if let Some(modal) = s.modal.as_mut() {
                                        modal.memo = value;
                                    }
                                });
                            }
                        ></textarea>
                        <button class="btn btn--primary" on:click=move |_| on_save_memo.run(())>
                            "메모 저장"
                        </button>
                    </div>

                    <div class="dialog__actions">
                        <button class="btn" on:click=move |_| on_close.run(())>
                            "닫기"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
