//! Issue-related parameter types

use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ProjectRef;
use crate::gitlab::{split_labels, Routed};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListIssuesParams {
    #[schemars(description = "Project ID or path (namespace/project)")]
    pub project_id: ProjectRef,
    #[schemars(description = "Return all issues or just those that are opened or closed")]
    pub state: Option<String>,
    #[schemars(description = "Comma-separated list of label names; None or Any are also accepted")]
    pub labels: Option<String>,
    #[schemars(description = "Milestone title; None or Any are also accepted")]
    pub milestone: Option<String>,
    #[schemars(description = "Search issues against their title and description")]
    pub search: Option<String>,
    #[schemars(description = "Scope: created_by_me, assigned_to_me, or all")]
    pub scope: Option<String>,
    #[schemars(description = "Return issues assigned to the given user id")]
    pub assignee_id: Option<u64>,
    #[schemars(description = "Return issues created by the given user id")]
    pub author_id: Option<u64>,
    #[schemars(description = "Return only the issues having the given iids")]
    pub iids: Option<Vec<u64>>,
    #[schemars(description = "Filter confidential or public issues")]
    pub confidential: Option<bool>,
    #[schemars(description = "Filter by type: issue, incident, test_case, or task")]
    pub issue_type: Option<String>,
    #[schemars(description = "Order by created_at, updated_at, priority, due_date, ... ")]
    pub order_by: Option<String>,
    #[schemars(description = "Sort order (asc or desc)")]
    pub sort: Option<String>,
    #[schemars(description = "Issues created on or after this time (ISO 8601)")]
    pub created_after: Option<DateTime<Utc>>,
    #[schemars(description = "Issues created on or before this time (ISO 8601)")]
    pub created_before: Option<DateTime<Utc>>,
    #[schemars(description = "Issues updated on or after this time (ISO 8601)")]
    pub updated_after: Option<DateTime<Utc>>,
    #[schemars(description = "Issues updated on or before this time (ISO 8601)")]
    pub updated_before: Option<DateTime<Utc>>,
}

impl Routed for ListIssuesParams {
    const ROUTE_FIELDS: &'static [&'static str] = &["project_id"];
}

impl ListIssuesParams {
    pub fn for_project(project_id: impl Into<ProjectRef>) -> Self {
        Self {
            project_id: project_id.into(),
            state: None,
            labels: None,
            milestone: None,
            search: None,
            scope: None,
            assignee_id: None,
            author_id: None,
            iids: None,
            confidential: None,
            issue_type: None,
            order_by: None,
            sort: None,
            created_after: None,
            created_before: None,
            updated_after: None,
            updated_before: None,
        }
    }
}

/// Addresses a single issue
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct IssueRefParams {
    #[schemars(description = "Project ID or path (namespace/project)")]
    pub project_id: ProjectRef,
    #[schemars(description = "Issue IID (project-scoped number)")]
    pub issue_iid: u64,
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListIssueNotesParams {
    #[schemars(description = "Project ID or path (namespace/project)")]
    pub project_id: ProjectRef,
    #[schemars(description = "Issue IID (project-scoped number)")]
    pub issue_iid: u64,
    #[schemars(description = "Sort order (asc or desc)")]
    pub sort: Option<String>,
    #[schemars(description = "Order by created_at or updated_at")]
    pub order_by: Option<String>,
}

impl Routed for ListIssueNotesParams {
    const ROUTE_FIELDS: &'static [&'static str] = &["project_id", "issue_iid"];
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateIssueParams {
    #[schemars(description = "Project ID or path (namespace/project)")]
    pub project_id: ProjectRef,
    #[schemars(description = "Title of the issue")]
    pub title: String,
    #[schemars(description = "Description in markdown")]
    pub description: Option<String>,
    #[schemars(description = "Comma-separated label names; every label must already exist in the project")]
    pub labels: Option<String>,
    #[schemars(description = "Internal ID to give the issue (admins and project owners only); rejected if it already exists")]
    pub iid: Option<u64>,
    #[schemars(description = "User id to assign the issue to")]
    pub assignee_id: Option<u64>,
    #[schemars(description = "User ids to assign the issue to")]
    pub assignee_ids: Option<Vec<u64>>,
    #[schemars(description = "Create the issue as confidential")]
    pub confidential: Option<bool>,
    #[schemars(description = "Creation time (ISO 8601, admins and project owners only)")]
    pub created_at: Option<DateTime<Utc>>,
    #[schemars(description = "Due date (YYYY-MM-DD)")]
    pub due_date: Option<NaiveDate>,
    #[schemars(description = "Type: issue, incident, test_case, or task")]
    pub issue_type: Option<String>,
    #[schemars(description = "Global milestone id")]
    pub milestone_id: Option<u64>,
    #[schemars(description = "Weight of the issue")]
    pub weight: Option<u32>,
    #[schemars(description = "Epic id to add the issue to")]
    pub epic_id: Option<u64>,
    #[schemars(description = "Epic iid to add the issue to")]
    pub epic_iid: Option<u64>,
    #[schemars(description = "IID of a merge request whose unresolved discussions this issue resolves")]
    pub merge_request_to_resolve_discussions_of: Option<u64>,
    #[schemars(description = "Discussion id to resolve (requires merge_request_to_resolve_discussions_of)")]
    pub discussion_to_resolve: Option<String>,
}

impl Routed for CreateIssueParams {
    const ROUTE_FIELDS: &'static [&'static str] = &["project_id"];
}

impl CreateIssueParams {
    pub fn new(project_id: impl Into<ProjectRef>, title: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            title: title.into(),
            description: None,
            labels: None,
            iid: None,
            assignee_id: None,
            assignee_ids: None,
            confidential: None,
            created_at: None,
            due_date: None,
            issue_type: None,
            milestone_id: None,
            weight: None,
            epic_id: None,
            epic_iid: None,
            merge_request_to_resolve_discussions_of: None,
            discussion_to_resolve: None,
        }
    }

    /// Label names to check before creating
    pub fn requested_labels(&self) -> Vec<String> {
        self.labels.as_deref().map(split_labels).unwrap_or_default()
    }
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EditIssueParams {
    #[schemars(description = "Project ID or path (namespace/project)")]
    pub project_id: ProjectRef,
    #[schemars(description = "Issue IID (project-scoped number)")]
    pub issue_iid: u64,
    #[schemars(description = "New title")]
    pub title: Option<String>,
    #[schemars(description = "New description in markdown")]
    pub description: Option<String>,
    #[schemars(description = "Comma-separated label names replacing the current labels; every label must exist")]
    pub labels: Option<String>,
    #[schemars(description = "Comma-separated label names to add; every label must exist")]
    pub add_labels: Option<String>,
    #[schemars(description = "Comma-separated label names to remove")]
    pub remove_labels: Option<String>,
    #[schemars(description = "State change: close or reopen")]
    pub state_event: Option<String>,
    #[schemars(description = "Make the issue confidential or public")]
    pub confidential: Option<bool>,
    #[schemars(description = "Lock or unlock discussions")]
    pub discussion_locked: Option<bool>,
    #[schemars(description = "Due date (YYYY-MM-DD)")]
    pub due_date: Option<NaiveDate>,
    #[schemars(description = "User id to assign the issue to (0 unassigns)")]
    pub assignee_id: Option<u64>,
    #[schemars(description = "User ids to assign the issue to")]
    pub assignee_ids: Option<Vec<u64>>,
    #[schemars(description = "Global milestone id (0 unassigns)")]
    pub milestone_id: Option<u64>,
    #[schemars(description = "Weight of the issue")]
    pub weight: Option<u32>,
    #[schemars(description = "Type: issue, incident, test_case, or task")]
    pub issue_type: Option<String>,
    #[schemars(description = "Epic id to move the issue to")]
    pub epic_id: Option<u64>,
    #[schemars(description = "Epic iid to move the issue to")]
    pub epic_iid: Option<u64>,
}

impl Routed for EditIssueParams {
    const ROUTE_FIELDS: &'static [&'static str] = &["project_id", "issue_iid"];
}

impl EditIssueParams {
    pub fn new(project_id: impl Into<ProjectRef>, issue_iid: u64) -> Self {
        Self {
            project_id: project_id.into(),
            issue_iid,
            title: None,
            description: None,
            labels: None,
            add_labels: None,
            remove_labels: None,
            state_event: None,
            confidential: None,
            discussion_locked: None,
            due_date: None,
            assignee_id: None,
            assignee_ids: None,
            milestone_id: None,
            weight: None,
            issue_type: None,
            epic_id: None,
            epic_iid: None,
        }
    }

    /// Label names being attached, from both `labels` and `add_labels`
    pub fn requested_labels(&self) -> Vec<String> {
        let mut requested = Vec::new();
        for labels in [&self.labels, &self.add_labels].into_iter().flatten() {
            for label in split_labels(labels) {
                if !requested.contains(&label) {
                    requested.push(label);
                }
            }
        }
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gitlab::outgoing;
    use serde_json::json;

    #[test]
    fn test_create_body_excludes_project_id_and_absent_fields() {
        let mut params = CreateIssueParams::new(42, "Bug");
        params.labels = Some("bug, ui".into());
        params.due_date = NaiveDate::from_ymd_opt(2024, 5, 1);

        let body = outgoing(&params).unwrap();
        assert_eq!(
            body,
            json!({ "title": "Bug", "labels": "bug, ui", "due_date": "2024-05-01" })
        );
    }

    #[test]
    fn test_edit_body_excludes_routing_fields() {
        let mut params = EditIssueParams::new("group/app", 7);
        params.state_event = Some("close".into());

        assert_eq!(outgoing(&params).unwrap(), json!({ "state_event": "close" }));
    }

    #[test]
    fn test_edit_requested_labels_merges_and_dedups() {
        let mut params = EditIssueParams::new(1, 1);
        params.labels = Some("bug, feature".into());
        params.add_labels = Some("feature,urgent".into());
        params.remove_labels = Some("stale".into());

        assert_eq!(params.requested_labels(), vec!["bug", "feature", "urgent"]);
    }

    #[test]
    fn test_deserialize_minimal_create() {
        let params: CreateIssueParams =
            serde_json::from_value(json!({ "project_id": 42, "title": "Bug" })).unwrap();
        assert_eq!(params.project_id, ProjectRef::Id(42));
        assert!(params.requested_labels().is_empty());
    }
}
