//! REST client for the remote reservation API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! staff token attached as a bearer header.
//! Server-side (SSR): every call resolves to [`ApiError::Unavailable`] since
//! the API is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are classified into [`ApiError`] so screens can choose between
//! redirecting to the login page, showing the server's `detail` text, or a
//! screen-specific fallback message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use seatgrid::{
    IssueAssignment, IssueForm, IssueType, MemoUpdate, RegistrationRequest, RoomForm, SessionDate, SessionForm,
    SessionLayout, SessionUsers, StudentIssue, StudyRoom, StudySession,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{AccessGrant, AccessRequest, ErrorBody, RoomsEnvelope, SessionEnvelope, SessionsEnvelope};

#[cfg(any(test, feature = "hydrate"))]
const DEFAULT_API_BASE: &str = "/api";

// =============================================================================
// ERROR
// =============================================================================

/// Classified failure of one API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// HTTP 401 or 403.
    #[error("unauthorized ({status})")]
    Unauthorized { status: u16, detail: Option<String> },

    /// Any other non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16, detail: Option<String> },

    /// The response body did not match the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),

    /// Called outside the browser.
    #[error("not available during server rendering")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .filter(|d| !d.trim().is_empty());
        if matches!(status, 401 | 403) {
            Self::Unauthorized { status, detail }
        } else {
            Self::Status { status, detail }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Server-provided explanation, when the response carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { detail, .. } | Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// The server's `detail` text, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_owned()
    }
}

// =============================================================================
// PATHS
// =============================================================================

#[cfg(any(test, feature = "hydrate"))]
fn api_base() -> &'static str {
    option_env!("STUDYHALL_API_URL")
        .map(|base| base.trim_end_matches('/'))
        .filter(|base| !base.is_empty())
        .unwrap_or(DEFAULT_API_BASE)
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

fn session_path(session_id: &str) -> String {
    format!("/session/{session_id}")
}

fn session_dates_path(session_id: &str) -> String {
    format!("/session/{session_id}/dates")
}

fn registrations_path(session_id: &str, date: &SessionDate) -> String {
    format!("/session/{session_id}/registrations/{}", date.path())
}

fn session_users_path(session_id: &str, date: &SessionDate) -> String {
    format!("/session/{session_id}/users/{}", date.path())
}

fn issue_path(issue_id: &str) -> String {
    format!("/issue/{issue_id}")
}

fn student_issue_path(registration_id: &str) -> String {
    format!("/issue/student/{registration_id}")
}

fn assign_issue_path(student_id: &str) -> String {
    format!("/issue/assign/{student_id}")
}

fn memo_path(student_id: &str) -> String {
    format!("/issue/memo/{student_id}")
}

fn room_path(room_id: &str) -> String {
    format!("/studyroom/{room_id}")
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(feature = "hydrate")]
fn request(verb: Verb, path: &str) -> gloo_net::http::RequestBuilder {
    use gloo_net::http::Request;

    let url = endpoint(path);
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Delete => Request::delete(&url),
    };
    match crate::util::auth::bearer_value() {
        Some(bearer) => builder.header("Authorization", &bearer),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn checked(response: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let error = ApiError::from_status(status, &body);
    log::warn!("{} {}: {error}", response.url(), status);
    Err(error)
}

async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = request(Verb::Get, path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        checked(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

async fn send_json<B: Serialize, T: DeserializeOwned>(verb: Verb, path: &str, body: &B) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = request(verb, path)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        checked(response)
            .await?
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body);
        Err(ApiError::Unavailable)
    }
}

/// Send a JSON body and ignore the response payload.
async fn send_body<B: Serialize>(verb: Verb, path: &str, body: &B) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = request(verb, path)
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        checked(response).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path, body);
        Err(ApiError::Unavailable)
    }
}

async fn send_empty(verb: Verb, path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let response = request(verb, path)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        checked(response).await.map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (verb, path);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange the shared staff key for a bearer token via `POST /auth/`.
///
/// # Errors
///
/// Returns an error if the key is rejected or the API is unreachable.
pub async fn exchange_access_key(key: &str) -> Result<String, ApiError> {
    let grant: AccessGrant = send_json(Verb::Post, "/auth/", &AccessRequest { key }).await?;
    Ok(grant.token)
}

// =============================================================================
// SESSIONS
// =============================================================================

/// All sessions via `GET /session/`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_sessions() -> Result<Vec<StudySession>, ApiError> {
    let envelope: SessionsEnvelope = fetch_json("/session/").await?;
    Ok(envelope.study_sessions)
}

/// One session via `GET /session/{id}`.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn get_session(session_id: &str) -> Result<StudySession, ApiError> {
    let envelope: SessionEnvelope = fetch_json(&session_path(session_id)).await?;
    Ok(envelope.study_session)
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_session(form: &SessionForm) -> Result<(), ApiError> {
    send_body(Verb::Post, "/session/", form).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_session(session_id: &str, form: &SessionForm) -> Result<(), ApiError> {
    send_body(Verb::Put, &session_path(session_id), form).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_session(session_id: &str) -> Result<(), ApiError> {
    send_empty(Verb::Delete, &session_path(session_id)).await
}

/// Dates on which a session has registrations.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn session_dates(session_id: &str) -> Result<Vec<SessionDate>, ApiError> {
    fetch_json(&session_dates_path(session_id)).await
}

/// Occupancy grid of a session on one date.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn session_layout(session_id: &str, date: &SessionDate) -> Result<SessionLayout, ApiError> {
    fetch_json(&registrations_path(session_id, date)).await
}

/// Registered students of a session on one date.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn session_users(session_id: &str, date: &SessionDate) -> Result<SessionUsers, ApiError> {
    fetch_json(&session_users_path(session_id, date)).await
}

// =============================================================================
// ISSUES
// =============================================================================

/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_issue_types() -> Result<Vec<IssueType>, ApiError> {
    fetch_json("/issue/").await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_issue_type(form: &IssueForm) -> Result<(), ApiError> {
    send_body(Verb::Post, "/issue/", form).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_issue_type(issue_id: &str, form: &IssueForm) -> Result<(), ApiError> {
    send_body(Verb::Put, &issue_path(issue_id), form).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_issue_type(issue_id: &str) -> Result<(), ApiError> {
    send_empty(Verb::Delete, &issue_path(issue_id)).await
}

/// Current issue tag and memo of one registration.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn student_issue(registration_id: &str) -> Result<StudentIssue, ApiError> {
    fetch_json(&student_issue_path(registration_id)).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn assign_issue(student_id: &str, assignment: &IssueAssignment) -> Result<(), ApiError> {
    send_body(Verb::Post, &assign_issue_path(student_id), assignment).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn save_memo(student_id: &str, memo: &MemoUpdate) -> Result<(), ApiError> {
    send_body(Verb::Post, &memo_path(student_id), memo).await
}

// =============================================================================
// ROOMS
// =============================================================================

/// # Errors
///
/// Returns an error if the request fails.
pub async fn list_rooms() -> Result<Vec<StudyRoom>, ApiError> {
    let envelope: RoomsEnvelope = fetch_json("/studyroom/").await?;
    Ok(envelope.studyrooms)
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn create_room(form: &RoomForm) -> Result<(), ApiError> {
    send_body(Verb::Post, "/studyroom/", form).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn update_room(room_id: &str, form: &RoomForm) -> Result<(), ApiError> {
    send_body(Verb::Put, &room_path(room_id), form).await
}

/// # Errors
///
/// Returns an error if the request fails.
pub async fn delete_room(room_id: &str) -> Result<(), ApiError> {
    send_empty(Verb::Delete, &room_path(room_id)).await
}

// =============================================================================
// REGISTRATION
// =============================================================================

/// Reserve a seat via `POST /registration/`.
///
/// # Errors
///
/// Returns an error if the reservation is refused or the API is unreachable.
pub async fn register(request: &RegistrationRequest) -> Result<(), ApiError> {
    send_body(Verb::Post, "/registration/", request).await
}
