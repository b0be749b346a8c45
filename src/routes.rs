//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Leptos SSR renders every page of the reservation app, the WASM bundle is
//! served from `/pkg`, and `/api/*` is relayed to the remote API when an
//! upstream is configured.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;
use std::time::Duration;

use axum::Router;
use axum::Json;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::StartupError;
use crate::config::Config;
use crate::proxy::{self, ApiProxy};

/// Full application router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded or the
/// upstream HTTP client cannot be built.
pub fn app(config: &Config) -> Result<Router, StartupError> {
    let conf = get_configuration(None).map_err(|e| StartupError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    let health = Health { status: "ok", api_proxy: config.upstream_api.is_some() };
    let mut router = Router::new()
        .route("/healthz", get(move || healthz(health)))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")));

    if let Some(upstream) = &config.upstream_api {
        let proxy = ApiProxy::new(upstream, Duration::from_secs(config.proxy_timeout_secs))?;
        tracing::info!(%upstream, timeout_secs = config.proxy_timeout_secs, "api proxy enabled");
        router = router.merge(proxy::routes(proxy));
    } else {
        tracing::info!("no upstream configured; browser calls the api directly");
    }

    Ok(router
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new()))
}

/// Body of `GET /healthz`.
#[derive(Clone, Copy, Debug, serde::Serialize)]
struct Health {
    status: &'static str,
    /// Whether `/api/*` is relayed by this host.
    api_proxy: bool,
}

async fn healthz(health: Health) -> Json<Health> {
    Json(health)
}
