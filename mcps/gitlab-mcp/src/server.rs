//! MCP Server implementation
//!
//! This module defines the MCP server that exposes the GitLab REST API
//! as tools.

use mcp_common::{
    async_trait, json_success, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError,
    ResultExt,
};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde_json::Value;

use crate::config::GitLabConfig;
use crate::gitlab::{GitLabClient, GitLabResult};
use crate::handlers;
use crate::params::{
    CreateIssueParams, CreateMergeRequestParams, EditIssueParams, GetMergeRequestParams,
    IssueRefParams, ListBranchesParams, ListIssueNotesParams, ListIssuesParams, ListLabelsParams,
    ListMergeRequestsParams, ListProjectsParams, ListUsersParams, ProjectDetailsParams,
};

/// The main GitLab MCP Server
///
/// Every tool translates into one or more calls against the GitLab REST API
/// through a shared [`GitLabClient`].
#[derive(Clone)]
pub struct GitLabMcpServer {
    client: GitLabClient,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router Implementation
// ============================================================================

#[tool_router]
impl GitLabMcpServer {
    /// Build the server; fails if the configuration is unusable
    pub fn new(config: GitLabConfig) -> GitLabResult<Self> {
        Ok(Self {
            client: GitLabClient::new(&config)?,
            tool_router: Self::tool_router(),
        })
    }

    // ------------------------------------------------------------------------
    // Health & projects
    // ------------------------------------------------------------------------

    #[tool(
        description = "Check that the GitLab API is reachable. Returns status healthy with the GitLab version, or unhealthy with the error"
    )]
    async fn gitlab_api_health_check(&self) -> Result<CallToolResult, McpError> {
        json_success(&handlers::health_check(&self.client).await)
    }

    #[tool(description = "List GitLab projects visible to the token, with optional filters")]
    async fn list_projects(
        &self,
        Parameters(params): Parameters<ListProjectsParams>,
    ) -> Result<CallToolResult, McpError> {
        let projects = handlers::list_projects(&self.client, &params)
            .await
            .to_mcp_err()?;
        json_success(&projects)
    }

    #[tool(description = "Get details of a single project by ID or path (namespace/project)")]
    async fn get_project_details(
        &self,
        Parameters(params): Parameters<ProjectDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        let project = handlers::get_project_details(&self.client, &params.project_id)
            .await
            .to_mcp_err()?;
        json_success(&project)
    }

    // ------------------------------------------------------------------------
    // Issues
    // ------------------------------------------------------------------------

    #[tool(
        description = "List issues in a project. Filter by state, labels, milestone, assignee, author, iids, dates, and more"
    )]
    async fn list_project_issues(
        &self,
        Parameters(params): Parameters<ListIssuesParams>,
    ) -> Result<CallToolResult, McpError> {
        let issues = handlers::list_project_issues(&self.client, &params)
            .await
            .to_mcp_err()?;
        json_success(&issues)
    }

    #[tool(description = "Get details of a single issue by its project-scoped IID")]
    async fn get_issue_details(
        &self,
        Parameters(params): Parameters<IssueRefParams>,
    ) -> Result<CallToolResult, McpError> {
        let issue = handlers::get_issue_details(&self.client, &params)
            .await
            .to_mcp_err()?;
        json_success(&issue)
    }

    #[tool(description = "List the comments and system notes on an issue")]
    async fn list_issue_notes(
        &self,
        Parameters(params): Parameters<ListIssueNotesParams>,
    ) -> Result<CallToolResult, McpError> {
        let notes = handlers::list_issue_notes(&self.client, &params)
            .await
            .to_mcp_err()?;
        json_success(&notes)
    }

    #[tool(
        description = "Create an issue. Labels must already exist in the project; an explicit iid must not be taken"
    )]
    async fn create_issue(
        &self,
        Parameters(params): Parameters<CreateIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        let issue = handlers::create_issue(&self.client, &params)
            .await
            .to_mcp_err()?;
        json_success(&issue)
    }

    #[tool(
        description = "Edit an issue: title, description, labels, assignees, milestone, state (close/reopen), and more. Labels being added must already exist"
    )]
    async fn edit_issue(
        &self,
        Parameters(params): Parameters<EditIssueParams>,
    ) -> Result<CallToolResult, McpError> {
        let issue = handlers::edit_issue(&self.client, &params)
            .await
            .to_mcp_err()?;
        json_success(&issue)
    }

    #[tool(description = "Delete an issue (requires admin or project owner)")]
    async fn delete_issue(
        &self,
        Parameters(params): Parameters<IssueRefParams>,
    ) -> Result<CallToolResult, McpError> {
        let outcome = handlers::delete_issue(&self.client, &params)
            .await
            .to_mcp_err()?;
        json_success(&outcome)
    }

    // ------------------------------------------------------------------------
    // Merge requests
    // ------------------------------------------------------------------------

    #[tool(
        description = "List merge requests in a project. Filter by state, branches, labels, author, reviewer, dates, and more"
    )]
    async fn list_project_merge_requests(
        &self,
        Parameters(params): Parameters<ListMergeRequestsParams>,
    ) -> Result<CallToolResult, McpError> {
        let merge_requests = handlers::list_project_merge_requests(&self.client, &params)
            .await
            .to_mcp_err()?;
        json_success(&merge_requests)
    }

    #[tool(description = "Get a single merge request by its project-scoped IID")]
    async fn get_single_merge_request(
        &self,
        Parameters(params): Parameters<GetMergeRequestParams>,
    ) -> Result<CallToolResult, McpError> {
        let merge_request = handlers::get_single_merge_request(&self.client, &params)
            .await
            .to_mcp_err()?;
        json_success(&merge_request)
    }

    #[tool(
        description = "Create a merge request from source_branch into target_branch. Labels must already exist in the project"
    )]
    async fn create_merge_request(
        &self,
        Parameters(params): Parameters<CreateMergeRequestParams>,
    ) -> Result<CallToolResult, McpError> {
        let merge_request = handlers::create_merge_request(&self.client, &params)
            .await
            .to_mcp_err()?;
        json_success(&merge_request)
    }

    // ------------------------------------------------------------------------
    // Labels, branches, users
    // ------------------------------------------------------------------------

    #[tool(description = "List the labels defined in a project")]
    async fn list_project_labels(
        &self,
        Parameters(params): Parameters<ListLabelsParams>,
    ) -> Result<CallToolResult, McpError> {
        let labels = handlers::list_project_labels(&self.client, &params)
            .await
            .to_mcp_err()?;
        json_success(&labels)
    }

    #[tool(description = "List repository branches of a project, optionally filtered by search or regex")]
    async fn list_project_repository_branches(
        &self,
        Parameters(params): Parameters<ListBranchesParams>,
    ) -> Result<CallToolResult, McpError> {
        let branches = handlers::list_project_repository_branches(&self.client, &params)
            .await
            .to_mcp_err()?;
        json_success(&branches)
    }

    #[tool(description = "List or search GitLab users")]
    async fn list_gitlab_users(
        &self,
        Parameters(params): Parameters<ListUsersParams>,
    ) -> Result<CallToolResult, McpError> {
        let users = handlers::list_gitlab_users(&self.client, &params)
            .await
            .to_mcp_err()?;
        json_success(&users)
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

const INSTRUCTIONS: &str = "GitLab MCP Server - provides tools for projects, issues, \
    merge requests, labels, branches, and users through the GitLab REST API. \
    Labels are checked against the project before issues or merge requests use them.";

#[tool_handler]
impl rmcp::ServerHandler for GitLabMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for GitLabMcpServer {
    fn server_name(&self) -> &str {
        "gitlab"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "gitlab_api_health_check" => self.gitlab_api_health_check().await.map_err(Into::into),

            "list_projects" => {
                let params: ListProjectsParams = serde_json::from_value(params)?;
                self.list_projects(Parameters(params)).await.map_err(Into::into)
            }

            "get_project_details" => {
                let params: ProjectDetailsParams = serde_json::from_value(params)?;
                self.get_project_details(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "list_project_issues" => {
                let params: ListIssuesParams = serde_json::from_value(params)?;
                self.list_project_issues(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "get_issue_details" => {
                let params: IssueRefParams = serde_json::from_value(params)?;
                self.get_issue_details(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "list_issue_notes" => {
                let params: ListIssueNotesParams = serde_json::from_value(params)?;
                self.list_issue_notes(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "create_issue" => {
                let params: CreateIssueParams = serde_json::from_value(params)?;
                self.create_issue(Parameters(params)).await.map_err(Into::into)
            }

            "edit_issue" => {
                let params: EditIssueParams = serde_json::from_value(params)?;
                self.edit_issue(Parameters(params)).await.map_err(Into::into)
            }

            "delete_issue" => {
                let params: IssueRefParams = serde_json::from_value(params)?;
                self.delete_issue(Parameters(params)).await.map_err(Into::into)
            }

            "list_project_merge_requests" => {
                let params: ListMergeRequestsParams = serde_json::from_value(params)?;
                self.list_project_merge_requests(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "get_single_merge_request" => {
                let params: GetMergeRequestParams = serde_json::from_value(params)?;
                self.get_single_merge_request(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "create_merge_request" => {
                let params: CreateMergeRequestParams = serde_json::from_value(params)?;
                self.create_merge_request(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "list_project_labels" => {
                let params: ListLabelsParams = serde_json::from_value(params)?;
                self.list_project_labels(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "list_project_repository_branches" => {
                let params: ListBranchesParams = serde_json::from_value(params)?;
                self.list_project_repository_branches(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "list_gitlab_users" => {
                let params: ListUsersParams = serde_json::from_value(params)?;
                self.list_gitlab_users(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> GitLabMcpServer {
        GitLabMcpServer::new(GitLabConfig::new("https://gitlab.example.com", "glpat-test"))
            .unwrap()
    }

    #[test]
    fn test_embeddable_server_name() {
        assert_eq!(server().server_name(), "gitlab");
    }

    #[test]
    fn test_embeddable_list_tools() {
        let tools = server().list_tools();
        assert_eq!(tools.len(), 15);

        let tool_names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        for expected in [
            "gitlab_api_health_check",
            "list_projects",
            "get_project_details",
            "list_project_issues",
            "get_issue_details",
            "list_issue_notes",
            "create_issue",
            "edit_issue",
            "delete_issue",
            "list_project_merge_requests",
            "get_single_merge_request",
            "create_merge_request",
            "list_project_labels",
            "list_project_repository_branches",
            "list_gitlab_users",
        ] {
            assert!(tool_names.contains(&expected), "missing tool {expected}");
        }
    }

    #[test]
    fn test_new_rejects_missing_token() {
        let mut config = GitLabConfig::new("https://gitlab.example.com", "x");
        config.token = None;
        assert!(GitLabMcpServer::new(config).is_err());
    }

    #[tokio::test]
    async fn test_embeddable_unknown_tool() {
        let result = server()
            .call_tool("nonexistent_tool", serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(_))));
    }

    #[tokio::test]
    async fn test_embeddable_missing_required_param() {
        let result = server()
            .call_tool("get_issue_details", serde_json::json!({ "project_id": 42 }))
            .await;
        assert!(matches!(result, Err(EmbeddableError::InvalidParams(_))));
    }
}
