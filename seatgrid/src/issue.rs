//! Issue tags and per-registration memos.

use serde::{Deserialize, Serialize};

use crate::wire::{optional_string_or_number, string_or_number};

/// A free-text category staff can attach to a registration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueType {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub description: String,
}

/// Create/update payload for an issue tag.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueForm {
    pub description: String,
}

/// Current issue tag and memo of one registration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentIssue {
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub issue_type: Option<String>,
    #[serde(default, deserialize_with = "optional_string_or_number")]
    pub note: Option<String>,
}

/// Body of `POST /issue/assign/{registration}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueAssignment {
    pub issue_description: String,
}

/// Body of `POST /issue/memo/{registration}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoUpdate {
    pub memo: String,
}
