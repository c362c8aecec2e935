//! Merge request parameter types

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ProjectRef;
use crate::gitlab::{split_labels, Routed};

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListMergeRequestsParams {
    #[schemars(description = "Project ID or path (namespace/project)")]
    pub project_id: ProjectRef,
    #[schemars(description = "Return all merge requests or those that are opened, closed, locked, or merged")]
    pub state: Option<String>,
    #[schemars(description = "Scope: created_by_me, assigned_to_me, or all")]
    pub scope: Option<String>,
    #[schemars(description = "Comma-separated list of label names; None or Any are also accepted")]
    pub labels: Option<String>,
    #[schemars(description = "Milestone title; None or Any are also accepted")]
    pub milestone: Option<String>,
    #[schemars(description = "Search merge requests against their title and description")]
    pub search: Option<String>,
    #[schemars(description = "Return only the merge requests having the given iids")]
    pub iids: Option<Vec<u64>>,
    #[schemars(description = "Merge requests created by the given user id")]
    pub author_id: Option<u64>,
    #[schemars(description = "Merge requests created by the given username")]
    pub author_username: Option<String>,
    #[schemars(description = "Merge requests assigned to the given user id")]
    pub assignee_id: Option<u64>,
    #[schemars(description = "Merge requests with the given user id as a reviewer")]
    pub reviewer_id: Option<u64>,
    #[schemars(description = "Merge requests with the given username as a reviewer")]
    pub reviewer_username: Option<String>,
    #[schemars(description = "Merge requests approved by all of these user ids (Premium)")]
    pub approved_by_ids: Option<Vec<u64>>,
    #[schemars(description = "Merge requests with all of these user ids as individual approvers (Premium)")]
    pub approver_ids: Option<Vec<u64>>,
    #[schemars(description = "Merge requests merged by the given user id")]
    pub merge_user_id: Option<u64>,
    #[schemars(description = "Merge requests merged by the given username")]
    pub merge_user_username: Option<String>,
    #[schemars(description = "Merge requests the current user reacted to with this emoji")]
    pub my_reaction_emoji: Option<String>,
    #[schemars(description = "Merge requests with the given source branch")]
    pub source_branch: Option<String>,
    #[schemars(description = "Merge requests with the given target branch")]
    pub target_branch: Option<String>,
    #[schemars(description = "Merge requests deployed to the given environment")]
    pub environment: Option<String>,
    #[schemars(description = "Draft filter: yes or no")]
    pub wip: Option<String>,
    #[schemars(description = "Use simple to return a reduced set of fields")]
    pub view: Option<String>,
    #[schemars(description = "Return label details instead of names")]
    pub with_labels_details: Option<bool>,
    #[schemars(description = "Request an asynchronous recalculation of merge_status")]
    pub with_merge_status_recheck: Option<bool>,
    #[schemars(description = "Order by created_at, title, or updated_at")]
    pub order_by: Option<String>,
    #[schemars(description = "Sort order (asc or desc)")]
    pub sort: Option<String>,
    #[schemars(description = "Merge requests created on or after this time (ISO 8601)")]
    pub created_after: Option<DateTime<Utc>>,
    #[schemars(description = "Merge requests created on or before this time (ISO 8601)")]
    pub created_before: Option<DateTime<Utc>>,
    #[schemars(description = "Merge requests updated on or after this time (ISO 8601)")]
    pub updated_after: Option<DateTime<Utc>>,
    #[schemars(description = "Merge requests updated on or before this time (ISO 8601)")]
    pub updated_before: Option<DateTime<Utc>>,
}

impl Routed for ListMergeRequestsParams {
    const ROUTE_FIELDS: &'static [&'static str] = &["project_id"];
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct GetMergeRequestParams {
    #[schemars(description = "Project ID or path (namespace/project)")]
    pub project_id: ProjectRef,
    #[schemars(description = "Merge request IID (project-scoped number)")]
    pub merge_request_iid: u64,
    #[schemars(description = "Include how many commits the source branch is behind the target")]
    pub include_diverged_commits_count: Option<bool>,
    #[schemars(description = "Include whether a rebase is in progress")]
    pub include_rebase_in_progress: Option<bool>,
    #[schemars(description = "Return rendered HTML for title and description")]
    pub render_html: Option<bool>,
}

impl Routed for GetMergeRequestParams {
    const ROUTE_FIELDS: &'static [&'static str] = &["project_id", "merge_request_iid"];
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CreateMergeRequestParams {
    #[schemars(description = "Project ID or path (namespace/project)")]
    pub project_id: ProjectRef,
    #[schemars(description = "Source branch")]
    pub source_branch: String,
    #[schemars(description = "Target branch")]
    pub target_branch: String,
    #[schemars(description = "Title of the merge request")]
    pub title: String,
    #[schemars(description = "Description in markdown")]
    pub description: Option<String>,
    #[schemars(description = "Comma-separated label names; every label must already exist in the project")]
    pub labels: Option<String>,
    #[schemars(description = "User id to assign the merge request to")]
    pub assignee_id: Option<u64>,
    #[schemars(description = "User ids to assign the merge request to")]
    pub assignee_ids: Option<Vec<u64>>,
    #[schemars(description = "User ids to request review from")]
    pub reviewer_ids: Option<Vec<u64>>,
    #[schemars(description = "Global milestone id")]
    pub milestone_id: Option<u64>,
    #[schemars(description = "Allow commits from members who can merge to the target branch")]
    pub allow_collaboration: Option<bool>,
    #[schemars(description = "Number of approvals required before merging")]
    pub approvals_before_merge: Option<u32>,
    #[schemars(description = "Do not merge before this time (ISO 8601)")]
    pub merge_after: Option<DateTime<Utc>>,
    #[schemars(description = "Delete the source branch when merging")]
    pub remove_source_branch: Option<bool>,
    #[schemars(description = "Squash commits into a single commit when merging")]
    pub squash: Option<bool>,
    #[schemars(description = "Numeric id of the target project, for cross-project merge requests")]
    pub target_project_id: Option<u64>,
}

impl Routed for CreateMergeRequestParams {
    const ROUTE_FIELDS: &'static [&'static str] = &["project_id"];
}

impl CreateMergeRequestParams {
    pub fn new(
        project_id: impl Into<ProjectRef>,
        source_branch: impl Into<String>,
        target_branch: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            project_id: project_id.into(),
            source_branch: source_branch.into(),
            target_branch: target_branch.into(),
            title: title.into(),
            description: None,
            labels: None,
            assignee_id: None,
            assignee_ids: None,
            reviewer_ids: None,
            milestone_id: None,
            allow_collaboration: None,
            approvals_before_merge: None,
            merge_after: None,
            remove_source_branch: None,
            squash: None,
            target_project_id: None,
        }
    }

    pub fn requested_labels(&self) -> Vec<String> {
        self.labels.as_deref().map(split_labels).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gitlab::{encode_query, outgoing};
    use serde_json::json;

    #[test]
    fn test_get_params_keep_only_flags() {
        let params = GetMergeRequestParams {
            project_id: ProjectRef::from("group/app"),
            merge_request_iid: 5,
            include_diverged_commits_count: Some(true),
            include_rebase_in_progress: None,
            render_html: None,
        };
        assert_eq!(
            encode_query(&outgoing(&params).unwrap()),
            vec![(
                "include_diverged_commits_count".to_string(),
                "true".to_string()
            )]
        );
    }

    #[test]
    fn test_create_body() {
        let mut params = CreateMergeRequestParams::new(3, "feature", "main", "Add feature");
        params.reviewer_ids = Some(vec![10, 11]);
        params.squash = Some(true);

        assert_eq!(
            outgoing(&params).unwrap(),
            json!({
                "source_branch": "feature",
                "target_branch": "main",
                "title": "Add feature",
                "reviewer_ids": [10, 11],
                "squash": true
            })
        );
    }
}
