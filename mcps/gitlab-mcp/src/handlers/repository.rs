//! Label, branch, and user handler implementations

use crate::gitlab::{outgoing, GitLabClient, GitLabResult};
use crate::params::{ListBranchesParams, ListLabelsParams, ListUsersParams};
use crate::types::{BranchList, LabelList, UserList};

pub async fn list_project_labels(
    client: &GitLabClient,
    params: &ListLabelsParams,
) -> GitLabResult<LabelList> {
    let path = format!("projects/{}/labels", params.project_id.path_segment());
    let labels = client.get(&path, Some(&outgoing(params)?)).await?;
    Ok(LabelList { labels })
}

pub async fn list_project_repository_branches(
    client: &GitLabClient,
    params: &ListBranchesParams,
) -> GitLabResult<BranchList> {
    let path = format!(
        "projects/{}/repository/branches",
        params.project_id.path_segment()
    );
    let branches = client.get(&path, Some(&outgoing(params)?)).await?;
    Ok(BranchList { branches })
}

/// List users (instance-wide)
pub async fn list_gitlab_users(
    client: &GitLabClient,
    params: &ListUsersParams,
) -> GitLabResult<UserList> {
    let users = client.get("users", Some(&outgoing(params)?)).await?;
    Ok(UserList { users })
}
