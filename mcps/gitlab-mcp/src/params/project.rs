//! Project-related parameter types

use std::fmt;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::gitlab::Routed;

/// A project, addressed by numeric id or by `namespace/project` path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ProjectRef {
    Id(u64),
    Path(String),
}

impl ProjectRef {
    /// The project as a single URL path segment (`group/app` -> `group%2Fapp`)
    pub fn path_segment(&self) -> String {
        match self {
            ProjectRef::Id(id) => id.to_string(),
            ProjectRef::Path(path) => urlencoding::encode(path.trim()).into_owned(),
        }
    }
}

impl fmt::Display for ProjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectRef::Id(id) => write!(f, "{id}"),
            ProjectRef::Path(path) => f.write_str(path),
        }
    }
}

impl From<u64> for ProjectRef {
    fn from(id: u64) -> Self {
        ProjectRef::Id(id)
    }
}

impl From<&str> for ProjectRef {
    fn from(path: &str) -> Self {
        ProjectRef::Path(path.to_string())
    }
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListProjectsParams {
    #[schemars(description = "Return projects matching the search criteria")]
    pub search: Option<String>,
    #[schemars(description = "Limit to projects explicitly owned by the current user")]
    pub owned: Option<bool>,
    #[schemars(description = "Limit to projects the current user is a member of")]
    pub membership: Option<bool>,
    #[schemars(description = "Limit to projects starred by the current user")]
    pub starred: Option<bool>,
    #[schemars(description = "Limit by archived status")]
    pub archived: Option<bool>,
    #[schemars(description = "Limit by visibility (public, internal, private)")]
    pub visibility: Option<String>,
    #[schemars(description = "Order by id, name, path, created_at, updated_at, or last_activity_at")]
    pub order_by: Option<String>,
    #[schemars(description = "Sort order (asc or desc)")]
    pub sort: Option<String>,
    #[schemars(description = "Return only limited fields for each project")]
    pub simple: Option<bool>,
    #[schemars(description = "Limit to projects with activity after this time (ISO 8601)")]
    pub last_activity_after: Option<DateTime<Utc>>,
}

impl Routed for ListProjectsParams {
    const ROUTE_FIELDS: &'static [&'static str] = &[];
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectDetailsParams {
    #[schemars(description = "Project ID or path (namespace/project)")]
    pub project_id: ProjectRef,
}
