//! Merge request handler implementations

use tracing::info;

use crate::gitlab::{outgoing, validate_labels, GitLabClient, GitLabResult, Method};
use crate::params::{CreateMergeRequestParams, GetMergeRequestParams, ListMergeRequestsParams};
use crate::types::{CreateMergeRequestResponse, MergeRequest, MergeRequestList};

pub async fn list_project_merge_requests(
    client: &GitLabClient,
    params: &ListMergeRequestsParams,
) -> GitLabResult<MergeRequestList> {
    let path = format!("projects/{}/merge_requests", params.project_id.path_segment());
    let merge_requests = client.get(&path, Some(&outgoing(params)?)).await?;
    Ok(MergeRequestList { merge_requests })
}

pub async fn get_single_merge_request(
    client: &GitLabClient,
    params: &GetMergeRequestParams,
) -> GitLabResult<MergeRequest> {
    let path = format!(
        "projects/{}/merge_requests/{}",
        params.project_id.path_segment(),
        params.merge_request_iid
    );
    client.get(&path, Some(&outgoing(params)?)).await
}

/// Open a merge request after checking its labels exist
pub async fn create_merge_request(
    client: &GitLabClient,
    params: &CreateMergeRequestParams,
) -> GitLabResult<CreateMergeRequestResponse> {
    validate_labels(client, &params.project_id, &params.requested_labels()).await?;

    let path = format!("projects/{}/merge_requests", params.project_id.path_segment());
    let created: CreateMergeRequestResponse = client
        .call(Method::Post, &path, Some(&outgoing(params)?))
        .await?
        .decode()?;

    info!(
        project = %params.project_id,
        iid = created.iid,
        source = %params.source_branch,
        target = %params.target_branch,
        "created merge request"
    );
    Ok(created)
}
