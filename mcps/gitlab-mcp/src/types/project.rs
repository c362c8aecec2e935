//! Project type definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The user or group a project belongs to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Namespace {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub path: Option<String>,

    /// `user` or `group`
    #[serde(default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub full_path: Option<String>,

    #[serde(default)]
    pub parent_id: Option<u64>,

    #[serde(default)]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub web_url: Option<String>,
}

/// A GitLab project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub name_with_namespace: Option<String>,

    #[serde(default)]
    pub path: Option<String>,

    #[serde(default)]
    pub path_with_namespace: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    /// public, internal, or private
    #[serde(default)]
    pub visibility: Option<String>,

    #[serde(default)]
    pub default_branch: Option<String>,

    #[serde(default)]
    pub namespace: Option<Namespace>,

    #[serde(default)]
    pub topics: Vec<String>,

    /// Deprecated alias of `topics`
    #[serde(default)]
    pub tag_list: Vec<String>,

    #[serde(default)]
    pub ssh_url_to_repo: Option<String>,

    #[serde(default)]
    pub http_url_to_repo: Option<String>,

    #[serde(default)]
    pub web_url: Option<String>,

    #[serde(default)]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub star_count: Option<u64>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub last_activity_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectList {
    pub projects: Vec<Project>,
}
