//! Study room CRUD tab with layout editing and QR label archives.

use leptos::prelude::*;
use seatgrid::{LayoutDraft, StudyRoom};

use crate::components::layout_editor::LayoutEditor;
use crate::net::api;
use crate::state::settings::{
    QR_FAILED, ROOM_CREATE_FAILED, ROOM_DELETE_CONFIRM, ROOM_DELETE_FAILED, ROOM_UPDATE_FAILED, ROOMS_LOAD_FAILED,
    RoomsState,
};
use crate::util::auth::handle_unauthorized;
use crate::util::dialog::confirm;
use crate::util::download::{self, ZIP_MIME};
use crate::util::qr::{archive_file_name, build_qr_archive};

#[component]
pub fn RoomSettings() -> impl IntoView {
    let state = RwSignal::new(RoomsState::default());

    Effect::new(move || reload(state));

    let create_draft = Signal::derive(move || state.with(|s| s.create_draft.clone()));
    let on_create_draft = Callback::new(move |draft: LayoutDraft| state.update(|s| s.create_draft = draft));

    let on_create = move |_| {
        let Some(form) = state.try_update(RoomsState::create_submission).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::create_room(&form).await {
                Ok(()) => {
                    state.update(RoomsState::created);
                    reload(state);
                }
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("room create failed: {e}");
                        state.update(|s| s.fail(&e, ROOM_CREATE_FAILED));
                    }
                }
            }
        });
    };

    let on_update = Callback::new(move |()| {
        let Some((room_id, form)) = state.try_update(RoomsState::update_submission).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            match api::update_room(&room_id, &form).await {
                Ok(()) => {
                    state.update(RoomsState::cancel_editing);
                    reload(state);
                }
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("room {room_id} update failed: {e}");
                        state.update(|s| s.fail(&e, ROOM_UPDATE_FAILED));
                    }
                }
            }
        });
    });

    let on_delete = Callback::new(move |room_id: String| {
        if !confirm(ROOM_DELETE_CONFIRM) {
            return;
        }
        leptos::task::spawn_local(async move {
            match api::delete_room(&room_id).await {
                Ok(()) => reload(state),
                Err(e) => {
                    if !handle_unauthorized(&e) {
                        log::warn!("room {room_id} delete failed: {e}");
                        state.update(|s| s.fail(&e, ROOM_DELETE_FAILED));
                    }
                }
            }
        });
    });

    let on_download = Callback::new(move |room_id: String| {
        let Some(room) = state.try_update(|s| s.begin_download(&room_id)).flatten() else {
            return;
        };
        leptos::task::spawn_local(async move {
            let origin = download::page_origin().unwrap_or_default();
            let outcome = build_qr_archive(&room, &origin)
                .map_err(|e| e.to_string())
                .and_then(|bytes| download::save_bytes(&archive_file_name(&room), ZIP_MIME, &bytes).map_err(|e| e.to_string()));
            state.update(|s| {
                s.finish_download();
                if let Err(reason) = outcome {
                    log::warn!("QR archive for room {} failed: {reason}", room.id);
                    s.error = Some(QR_FAILED.to_owned());
                }
            });
        });
    });

    let list = move || {
        let rooms = state.with(|s| s.rooms.clone());
        if rooms.is_empty() {
            return view! { <p>"등록된 야자실이 없습니다."</p> }.into_any();
        }
        rooms
            .into_iter()
            .map(|room| {
                let editing = {
                    let id = room.id.clone();
                    move || state.with(|s| s.is_editing(&id))
                };
                let item = move || view! { <RoomItem room=room.clone() state=state on_delete=on_delete on_download=on_download/> };
                view! {
                    <li class="room-entry">
                        <Show when=editing fallback=item>
                            <RoomEditForm state=state on_save=on_update/>
                        </Show>
                    </li>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="settings-panel">
            <h2>"야자실 관리"</h2>
            <Show when=move || state.with(|s| s.error.is_some())>
                <div class="error-message">{move || state.with(|s| s.error.clone().unwrap_or_default())}</div>
            </Show>

            <div class="create-form">
                <h3>"새 야자실 추가"</h3>
                <input
                    type="text"
                    placeholder="야자실 이름"
                    prop:value=move || state.with(|s| s.new_name.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.new_name = value);
                    }
                />
                <h4>"레이아웃 설정"</h4>
                <p class="hint">"좌석 번호를 입력해주세요. 통로는 빈칸으로 두세요."</p>
                <LayoutEditor draft=create_draft on_change=on_create_draft/>
                <button class="btn btn--primary" on:click=on_create>
                    "추가"
                </button>
            </div>

            <div class="studyroom-list">
                <h3>"야자실 목록"</h3>
                <ul>{list}</ul>
            </div>
        </div>
    }
}

#[component]
fn RoomItem(
    room: StudyRoom,
    state: RwSignal<RoomsState>,
    on_delete: Callback<String>,
    on_download: Callback<String>,
) -> impl IntoView {
    let downloading = {
        let id = room.id.clone();
        move || state.with(|s| s.is_downloading(&id))
    };
    let busy_label = downloading.clone();
    let (edit_room, delete_id, download_id) = (room.clone(), room.id.clone(), room.id.clone());

    view! {
        <div class="room-item">
            <span>{room.name}</span>
            <div class="actions">
                <button class="btn btn--small" on:click=move |_| state.update(|s| s.start_editing(&edit_room))>
                    "수정"
                </button>
                <button class="btn btn--small btn--danger" on:click=move |_| on_delete.run(delete_id.clone())>
                    "삭제"
                </button>
                <button
                    class="btn btn--small"
                    disabled=downloading
                    on:click=move |_| on_download.run(download_id.clone())
                >
                    {move || if busy_label() { "QR 코드 생성 중..." } else { "모든 QR 코드 다운로드" }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn RoomEditForm(state: RwSignal<RoomsState>, on_save: Callback<()>) -> impl IntoView {
    let draft = Signal::derive(move || state.with(|s| s.editing.as_ref().map(|e| e.draft.clone()).unwrap_or_default()));
    let on_draft = Callback::new(move |draft: LayoutDraft| {
        state.update(|s| {
            if let Some(edit) = s.editing.as_mut() {
                edit.draft = draft;
            }
        });
    });

    view! {
        <div class="edit-form">
            <input
                type="text"
                prop:value=move || state.with(|s| s.editing.as_ref().map(|e| e.name.clone()).unwrap_or_default())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    state.update(|s| {
                        if let Some(edit) = s.editing.as_mut() {
                            edit.name = value;
                        }
                    });
                }
            />
            <h4>"레이아웃 수정"</h4>
            <LayoutEditor draft=draft on_change=on_draft/>
            <div class="button-row">
                <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                    "저장"
                </button>
                <button class="btn" on:click=move |_| state.update(RoomsState::cancel_editing)>
                    "취소"
                </button>
            </div>
        </div>
    }
}

fn reload(state: RwSignal<RoomsState>) {
    leptos::task::spawn_local(async move {
        match api::list_rooms().await {
            Ok(rooms) => state.update(|s| s.apply_rooms(rooms)),
            Err(e) => {
                if !handle_unauthorized(&e) {
                    log::warn!("room list failed: {e}");
                    state.update(|s| s.fail(&e, ROOMS_LOAD_FAILED));
                }
            }
        }
    });
}
