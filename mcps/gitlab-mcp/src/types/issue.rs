//! Issue type definitions
//!
//! Structs mirroring the JSON GitLab returns for issues. Listing and editing
//! return [`Issue`], where almost everything is optional; creation returns
//! [`CreateIssueResponse`], which insists on the fields a freshly created
//! issue always carries.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::common::{
    IssueLinks, Milestone, References, TaskCompletionStatus, TimeStats, User,
};

/// Issue state; unrecognized values are kept verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Opened,
    Closed,
    #[serde(untagged)]
    Other(String),
}

/// A GitLab issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    /// Global id
    pub id: u64,

    /// Project-scoped number
    pub iid: u64,

    pub project_id: u64,

    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub state: Option<IssueState>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub closed_by: Option<User>,

    #[serde(default)]
    pub author: Option<User>,

    #[serde(default)]
    pub assignee: Option<User>,

    #[serde(default)]
    pub assignees: Vec<User>,

    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub milestone: Option<Milestone>,

    /// Always `ISSUE` for now
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    /// issue, incident, test_case, or task
    #[serde(default)]
    pub issue_type: Option<String>,

    #[serde(default)]
    pub user_notes_count: Option<u32>,

    #[serde(default)]
    pub merge_requests_count: Option<u32>,

    #[serde(default)]
    pub upvotes: Option<u32>,

    #[serde(default)]
    pub downvotes: Option<u32>,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub confidential: Option<bool>,

    #[serde(default)]
    pub discussion_locked: Option<bool>,

    #[serde(default)]
    pub subscribed: Option<bool>,

    #[serde(default)]
    pub web_url: Option<String>,

    #[serde(default, rename = "_links")]
    pub links: Option<IssueLinks>,

    #[serde(default)]
    pub references: Option<References>,

    #[serde(default)]
    pub time_stats: Option<TimeStats>,

    #[serde(default)]
    pub task_completion_status: Option<TaskCompletionStatus>,

    #[serde(default)]
    pub blocking_issues_count: Option<u32>,

    #[serde(default)]
    pub has_tasks: Option<bool>,

    #[serde(default)]
    pub task_status: Option<String>,

    #[serde(default)]
    pub severity: Option<String>,

    #[serde(default)]
    pub moved_to_id: Option<u64>,

    #[serde(default)]
    pub imported: Option<bool>,

    #[serde(default)]
    pub imported_from: Option<String>,

    #[serde(default)]
    pub service_desk_reply_to: Option<String>,
}

/// Epic an issue belongs to (Premium)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Epic {
    pub id: u64,
    pub iid: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub group_id: Option<u64>,
}

/// The issue GitLab returns from `POST /projects/:id/issues`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateIssueResponse {
    pub id: u64,
    pub iid: u64,
    pub project_id: u64,
    pub title: String,
    pub state: IssueState,
    pub created_at: DateTime<Utc>,
    pub web_url: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub confidential: Option<bool>,

    #[serde(default)]
    pub issue_type: Option<String>,

    #[serde(default)]
    pub labels: Vec<String>,

    #[serde(default)]
    pub author: Option<User>,

    #[serde(default)]
    pub assignees: Vec<User>,

    #[serde(default)]
    pub milestone: Option<Milestone>,

    #[serde(default)]
    pub references: Option<References>,

    #[serde(default)]
    pub time_stats: Option<TimeStats>,

    #[serde(default, rename = "_links")]
    pub links: Option<IssueLinks>,

    #[serde(default)]
    pub task_completion_status: Option<TaskCompletionStatus>,

    #[serde(default)]
    pub epic: Option<Epic>,

    #[serde(default)]
    pub weight: Option<u32>,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub severity: Option<String>,

    #[serde(default)]
    pub merge_requests_count: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueList {
    pub issues: Vec<Issue>,
}

/// Outcome of deleting an issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteIssueResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_issue_tolerates_missing_and_unknown_fields() {
        let issue: Issue = serde_json::from_value(json!({
            "id": 101,
            "iid": 4,
            "project_id": 42,
            "title": "Broken login",
            "state": "opened",
            "labels": ["bug"],
            "due_date": null,
            "_links": { "self": "https://gitlab.example.com/api/v4/projects/42/issues/4" },
            "some_future_field": [1, 2, 3]
        }))
        .unwrap();

        assert_eq!(issue.state, Some(IssueState::Opened));
        assert_eq!(issue.labels, vec!["bug"]);
        assert!(issue.assignees.is_empty());
        assert_eq!(
            issue.links.and_then(|l| l.self_url).as_deref(),
            Some("https://gitlab.example.com/api/v4/projects/42/issues/4")
        );
    }

    #[test]
    fn test_issue_requires_identity_fields() {
        let missing_title = json!({ "id": 1, "iid": 1, "project_id": 1 });
        assert!(serde_json::from_value::<Issue>(missing_title).is_err());
    }

    #[test]
    fn test_unknown_state_is_preserved() {
        let issue: Issue = serde_json::from_value(json!({
            "id": 1, "iid": 1, "project_id": 1, "title": "t", "state": "archived"
        }))
        .unwrap();
        assert_eq!(issue.state, Some(IssueState::Other("archived".into())));
    }

    #[test]
    fn test_create_response_requires_created_at_and_web_url() {
        let without_web_url = json!({
            "id": 1, "iid": 1, "project_id": 1, "title": "t",
            "state": "opened", "created_at": "2024-01-01T00:00:00Z"
        });
        assert!(serde_json::from_value::<CreateIssueResponse>(without_web_url).is_err());
    }
}
