//! Issue handler implementations

use serde_json::Value;
use tracing::info;

use crate::gitlab::{
    outgoing, validate_labels, GitLabClient, GitLabError, GitLabResult, Lookup, Method,
};
use crate::params::{
    CreateIssueParams, EditIssueParams, IssueRefParams, ListIssueNotesParams, ListIssuesParams,
    ProjectRef,
};
use crate::types::{CreateIssueResponse, DeleteIssueResponse, Issue, IssueList, NoteList};

fn issues_path(project: &ProjectRef) -> String {
    format!("projects/{}/issues", project.path_segment())
}

fn issue_path(project: &ProjectRef, iid: u64) -> String {
    format!("{}/{iid}", issues_path(project))
}

/// List issues in a project
pub async fn list_project_issues(
    client: &GitLabClient,
    params: &ListIssuesParams,
) -> GitLabResult<IssueList> {
    let query = outgoing(params)?;
    let issues = client
        .get(&issues_path(&params.project_id), Some(&query))
        .await?;
    Ok(IssueList { issues })
}

pub async fn get_issue_details(
    client: &GitLabClient,
    params: &IssueRefParams,
) -> GitLabResult<Issue> {
    client
        .get(&issue_path(&params.project_id, params.issue_iid), None)
        .await
}

/// List the notes (comments) on an issue
pub async fn list_issue_notes(
    client: &GitLabClient,
    params: &ListIssueNotesParams,
) -> GitLabResult<NoteList> {
    let path = format!("{}/notes", issue_path(&params.project_id, params.issue_iid));
    let notes = client.get(&path, Some(&outgoing(params)?)).await?;
    Ok(NoteList { notes })
}

/// Create an issue
///
/// Labels are checked first. With an explicit `iid`, an existing issue with
/// that iid aborts the call before anything is created; only a 404 from the
/// lookup counts as "free".
pub async fn create_issue(
    client: &GitLabClient,
    params: &CreateIssueParams,
) -> GitLabResult<CreateIssueResponse> {
    validate_labels(client, &params.project_id, &params.requested_labels()).await?;

    if let Some(iid) = params.iid {
        let existing: Lookup<Value> = client
            .lookup(&issue_path(&params.project_id, iid))
            .await?;
        if let Lookup::Found(_) = existing {
            return Err(GitLabError::Conflict {
                project: params.project_id.to_string(),
                iid,
            });
        }
    }

    let created: CreateIssueResponse = client
        .call(
            Method::Post,
            &issues_path(&params.project_id),
            Some(&outgoing(params)?),
        )
        .await?
        .decode()?;

    info!(project = %params.project_id, iid = created.iid, "created issue");
    Ok(created)
}

/// Update an issue; labels being attached must already exist
pub async fn edit_issue(client: &GitLabClient, params: &EditIssueParams) -> GitLabResult<Issue> {
    validate_labels(client, &params.project_id, &params.requested_labels()).await?;

    let updated: Issue = client
        .call(
            Method::Put,
            &issue_path(&params.project_id, params.issue_iid),
            Some(&outgoing(params)?),
        )
        .await?
        .decode()?;

    info!(project = %params.project_id, iid = params.issue_iid, "updated issue");
    Ok(updated)
}

/// Delete an issue
///
/// GitLab answers a successful delete with an empty body; any other success
/// body is reported as `success: false`.
pub async fn delete_issue(
    client: &GitLabClient,
    params: &IssueRefParams,
) -> GitLabResult<DeleteIssueResponse> {
    let response = client
        .call(
            Method::Delete,
            &issue_path(&params.project_id, params.issue_iid),
            None,
        )
        .await?;

    let success = response.is_empty();
    info!(project = %params.project_id, iid = params.issue_iid, success, "deleted issue");
    Ok(DeleteIssueResponse { success })
}
