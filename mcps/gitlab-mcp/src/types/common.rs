//! Common types shared across GitLab entities
//!
//! Users, milestones, and the small bookkeeping objects that issues and
//! merge requests both embed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Account state; unrecognized values are kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserState {
    Active,
    Blocked,
    Deactivated,
    LdapBlocked,
    Banned,
    #[serde(untagged)]
    Other(String),
}

/// A GitLab user (author, assignee, reviewer, etc.)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub state: Option<UserState>,

    #[serde(default)]
    pub locked: Option<bool>,

    #[serde(default)]
    pub public_email: Option<String>,

    #[serde(default)]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub web_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneState {
    Active,
    Closed,
    #[serde(untagged)]
    Other(String),
}

/// Project or group milestone
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: u64,
    pub iid: u64,

    /// Absent for group milestones
    #[serde(default)]
    pub project_id: Option<u64>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub state: Option<MilestoneState>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub expired: Option<bool>,

    #[serde(default)]
    pub web_url: Option<String>,
}

/// Time tracking totals, in seconds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimeStats {
    #[serde(default)]
    pub time_estimate: Option<i64>,
    #[serde(default)]
    pub total_time_spent: Option<i64>,
    #[serde(default)]
    pub human_time_estimate: Option<String>,
    #[serde(default)]
    pub human_total_time_spent: Option<String>,
}

/// Checklist progress in a description
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskCompletionStatus {
    #[serde(default)]
    pub count: Option<u32>,
    #[serde(default)]
    pub completed_count: Option<u32>,
}

/// Short, relative, and full textual references (`#4`, `group/app#4`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct References {
    #[serde(default)]
    pub short: Option<String>,
    #[serde(default)]
    pub relative: Option<String>,
    #[serde(default)]
    pub full: Option<String>,
}

/// API links embedded in an issue as `_links`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueLinks {
    #[serde(default, rename = "self")]
    pub self_url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub award_emoji: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub closed_as_duplicate_of: Option<String>,
}
