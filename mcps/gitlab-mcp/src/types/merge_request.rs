//! Merge request type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{Milestone, References, TaskCompletionStatus, TimeStats, User};

/// Merge request state; unrecognized values are kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeRequestState {
    Opened,
    Closed,
    Merged,
    Locked,
    #[serde(untagged)]
    Other(String),
}

/// A GitLab merge request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeRequest {
    pub id: u64,
    pub iid: u64,
    pub project_id: u64,
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub state: Option<MergeRequestState>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub merged_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub prepared_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub author: Option<User>,

    #[serde(default)]
    pub assignee: Option<User>,

    #[serde(default)]
    pub assignees: Vec<User>,

    #[serde(default)]
    pub reviewers: Vec<User>,

    #[serde(default)]
    pub merge_user: Option<User>,

    /// Deprecated in favor of `merge_user`
    #[serde(default)]
    pub merged_by: Option<User>,

    #[serde(default)]
    pub closed_by: Option<User>,

    #[serde(default)]
    pub source_branch: Option<String>,

    #[serde(default)]
    pub target_branch: Option<String>,

    #[serde(default)]
    pub source_project_id: Option<u64>,

    #[serde(default)]
    pub target_project_id: Option<u64>,

    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub milestone: Option<Milestone>,

    #[serde(default)]
    pub draft: Option<bool>,

    /// Deprecated in favor of `draft`
    #[serde(default)]
    pub work_in_progress: Option<bool>,

    /// Deprecated in favor of `detailed_merge_status`
    #[serde(default)]
    pub merge_status: Option<String>,

    #[serde(default)]
    pub detailed_merge_status: Option<String>,

    #[serde(default)]
    pub merge_when_pipeline_succeeds: Option<bool>,

    #[serde(default)]
    pub has_conflicts: Option<bool>,

    #[serde(default)]
    pub blocking_discussions_resolved: Option<bool>,

    #[serde(default)]
    pub discussion_locked: Option<bool>,

    #[serde(default)]
    pub upvotes: Option<u32>,

    #[serde(default)]
    pub downvotes: Option<u32>,

    #[serde(default)]
    pub user_notes_count: Option<u32>,

    #[serde(default)]
    pub sha: Option<String>,

    #[serde(default)]
    pub merge_commit_sha: Option<String>,

    #[serde(default)]
    pub squash_commit_sha: Option<String>,

    #[serde(default)]
    pub should_remove_source_branch: Option<bool>,

    #[serde(default)]
    pub force_remove_source_branch: Option<bool>,

    #[serde(default)]
    pub squash: Option<bool>,

    #[serde(default)]
    pub squash_on_merge: Option<bool>,

    #[serde(default)]
    pub web_url: Option<String>,

    #[serde(default)]
    pub references: Option<References>,

    #[serde(default)]
    pub time_stats: Option<TimeStats>,

    #[serde(default)]
    pub task_completion_status: Option<TaskCompletionStatus>,

    /// Only with `include_diverged_commits_count`
    #[serde(default)]
    pub diverged_commits_count: Option<u32>,

    /// Only with `include_rebase_in_progress`
    #[serde(default)]
    pub rebase_in_progress: Option<bool>,
}

/// Creation returns the same shape as a read
pub type CreateMergeRequestResponse = MergeRequest;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeRequestList {
    pub merge_requests: Vec<MergeRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_request_states() {
        for (raw, expected) in [
            ("merged", MergeRequestState::Merged),
            ("locked", MergeRequestState::Locked),
            ("in_review", MergeRequestState::Other("in_review".into())),
        ] {
            let mr: MergeRequest = serde_json::from_value(json!({
                "id": 7, "iid": 2, "project_id": 42, "title": "MR", "state": raw
            }))
            .unwrap();
            assert_eq!(mr.state, Some(expected));
        }
    }
}
