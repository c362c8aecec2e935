//! Issue notes (comments and system notes)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::User;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,

    #[serde(default)]
    pub body: Option<String>,

    #[serde(default)]
    pub author: Option<User>,

    /// Generated by GitLab (label changes, assignments, ...)
    #[serde(default)]
    pub system: Option<bool>,

    #[serde(default)]
    pub noteable_id: Option<u64>,

    #[serde(default)]
    pub noteable_iid: Option<u64>,

    #[serde(default)]
    pub noteable_type: Option<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub resolvable: Option<bool>,

    #[serde(default)]
    pub confidential: Option<bool>,

    #[serde(default)]
    pub internal: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteList {
    pub notes: Vec<Note>,
}
