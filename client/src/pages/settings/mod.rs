//! Staff settings: study rooms, sessions and issue tags, one tab each.

mod issues;
mod rooms;
mod sessions;

use leptos::prelude::*;

use crate::state::settings::SettingsTab;

#[component]
pub fn SettingsPage() -> impl IntoView {
    let active = RwSignal::new(SettingsTab::default());

    let tabs = SettingsTab::ALL
        .iter()
        .map(|&tab| {
            view! {
                <button class="settings-tab" class:active=move || active.get() == tab on:click=move |_| active.set(tab)>
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="settings-container">
            <div class="page-header">
                <h1>"설정"</h1>
                <a class="btn" href="/teacher">
                    "야자 목록"
                </a>
            </div>
            <div class="settings-tabs">{tabs}</div>
            <div class="settings-content">
                {move || match active.get() {
                    SettingsTab::StudyRoom => view! { <rooms::RoomSettings/> }.into_any(),
                    SettingsTab::StudySession => view! { <sessions::SessionSettings/> }.into_any(),
                    SettingsTab::Issue => view! { <issues::IssueSettings/> }.into_any(),
                }}
            </div>
        </div>
    }
}
