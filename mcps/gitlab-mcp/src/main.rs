//! GitLab MCP Server
//!
//! Exposes the GitLab REST API as MCP tools over stdio.
//!
//! # Configuration
//! Set `GITLAB_API_PAT` (and optionally `GITLAB_URL`) or configure in
//! `~/.binks/gitlab.toml`

use gitlab_mcp::{config::Config, GitLabMcpServer};
use rmcp::{transport::stdio, ServiceExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcp_common::init_tracing("gitlab_mcp")?;

    tracing::info!("Starting GitLab MCP Server");

    let config = Config::load()?;
    tracing::info!("GitLab URL: {}", config.gitlab.base_url());

    let server = GitLabMcpServer::new(config.gitlab)?;
    let service = server.serve(stdio()).await?;

    tracing::info!("Server running, waiting for requests...");
    service.waiting().await?;

    tracing::info!("Server shutting down");
    Ok(())
}
