//! Staff access page exchanging the shared access key for a bearer token.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::auth::{self, STAFF_HOME_PATH};

pub const ACCESS_DENIED: &str = "Access key가 올바르지 않아요. 다시 확인해주세요.";

#[component]
pub fn AccessPage() -> impl IntoView {
    let key = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let key_value = key.get().trim().to_owned();
        if key_value.is_empty() {
            error.set(Some(ACCESS_DENIED.to_owned()));
            return;
        }
        busy.set(true);
        error.set(None);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::exchange_access_key(&key_value).await {
                Ok(token) => {
                    auth::store_token(&token);
                    navigate(STAFF_HOME_PATH, NavigateOptions::default());
                }
                Err(e) => {
                    log::warn!("access key rejected: {e}");
                    error.set(Some(ACCESS_DENIED.to_owned()));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <label class="login-label" for="access-key">
                    "야자 관리 선생님 Access key"
                </label>
                <input
                    id="access-key"
                    class="login-input"
                    type="password"
                    autocomplete="current-password"
                    prop:value=move || key.get()
                    on:input=move |ev| key.set(event_target_value(&ev))
                />
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "로그인 중..." } else { "로그인" }}
                </button>
                <Show when=move || error.get().is_some()>
                    <p class="login-message login-message--error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </form>
        </div>
    }
}
