//! Response envelopes and small request bodies of the reservation API.
//!
//! DESIGN
//! ======
//! Domain payloads live in `seatgrid`; this module only adds the wrapper
//! objects some endpoints put around them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use seatgrid::{StudyRoom, StudySession};
use serde::{Deserialize, Serialize};

/// `GET /session/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct SessionsEnvelope {
    #[serde(default)]
    pub study_sessions: Vec<StudySession>,
}

/// `GET /session/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SessionEnvelope {
    pub study_session: StudySession,
}

/// `GET /studyroom/`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct RoomsEnvelope {
    #[serde(default)]
    pub studyrooms: Vec<StudyRoom>,
}

/// `POST /auth/` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccessRequest<'a> {
    pub key: &'a str,
}

/// `POST /auth/` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AccessGrant {
    pub token: String,
}

/// Error body returned by the API on validation failures.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
