//! Project handler implementations

use crate::gitlab::{outgoing, GitLabClient, GitLabResult};
use crate::params::{ListProjectsParams, ProjectRef};
use crate::types::{Project, ProjectList};

/// List projects visible to the token
pub async fn list_projects(
    client: &GitLabClient,
    params: &ListProjectsParams,
) -> GitLabResult<ProjectList> {
    let query = outgoing(params)?;
    let projects = client.get("projects", Some(&query)).await?;
    Ok(ProjectList { projects })
}

/// Fetch a single project
pub async fn get_project_details(
    client: &GitLabClient,
    project_id: &ProjectRef,
) -> GitLabResult<Project> {
    client
        .get(&format!("projects/{}", project_id.path_segment()), None)
        .await
}
