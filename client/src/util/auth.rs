//! Staff token handling shared by the staff screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token from `POST /auth/` lives in `localStorage`. Every staff screen
//! applies the same rule to API failures: a 401/403 drops the token and sends
//! the browser to the access page. The public registration screen never
//! calls [`handle_unauthorized`].

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::api::ApiError;
use crate::util::storage::{self, TOKEN_KEY};

pub const LOGIN_PATH: &str = "/teacher/login";
pub const STAFF_HOME_PATH: &str = "/teacher/";

pub fn load_token() -> Option<String> {
    storage::load_string(TOKEN_KEY).filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) {
    storage::save_string(TOKEN_KEY, token);
}

pub fn clear_token() {
    storage::remove(TOKEN_KEY);
}

/// `Authorization` header value for a stored token.
pub fn bearer_header(token: &str) -> Option<String> {
    let token = token.trim();
    (!token.is_empty()).then(|| format!("Bearer {token}"))
}

pub fn bearer_value() -> Option<String> {
    load_token().as_deref().and_then(bearer_header)
}

/// Drop the token and leave for the access page when `error` is a 401/403.
/// Returns whether the redirect was issued so callers can stop processing.
pub fn handle_unauthorized(error: &ApiError) -> bool {
    if !error.is_unauthorized() {
        return false;
    }
    clear_token();
    #[cfg(feature = "hydrate")]
    {
        log::info!("staff token rejected; redirecting to {LOGIN_PATH}");
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(LOGIN_PATH);
        }
    }
    true
}
