//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    access::AccessPage, home::HomePage, register::RegisterPage, settings::SettingsPage, teacher::TeacherPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ko">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Screens share nothing but browser storage, so no context is provided
/// beyond the meta context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/studyhall.css"/>
        <Title text="야자 신청"/>

        <Router>
            <Routes fallback=|| "페이지를 찾을 수 없습니다.".into_view()>
                <Route path=(StaticSegment("teacher"), StaticSegment("login")) view=AccessPage/>
                <Route path=(StaticSegment("teacher"), StaticSegment("settings")) view=SettingsPage/>
                <Route path=StaticSegment("teacher") view=TeacherPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route
                    path=(ParamSegment("location"), ParamSegment("col_num"), ParamSegment("row_num"))
                    view=RegisterPage
                />
            </Routes>
        </Router>
    }
}
