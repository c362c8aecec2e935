//! Labels, branches, and users

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ProjectRef;
use crate::gitlab::Routed;

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListLabelsParams {
    #[schemars(description = "Project ID or path (namespace/project)")]
    pub project_id: ProjectRef,
    #[schemars(description = "Include issue and merge request counts")]
    pub with_counts: Option<bool>,
    #[schemars(description = "Include labels from ancestor groups")]
    pub include_ancestor_groups: Option<bool>,
    #[schemars(description = "Keyword to filter labels by")]
    pub search: Option<String>,
    #[schemars(description = "Filter by archived status")]
    pub archived: Option<bool>,
}

impl Routed for ListLabelsParams {
    const ROUTE_FIELDS: &'static [&'static str] = &["project_id"];
}

#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ListBranchesParams {
    #[schemars(description = "Project ID or path (namespace/project)")]
    pub project_id: ProjectRef,
    #[schemars(description = "Return branches matching a re2 regular expression")]
    pub regex: Option<String>,
    #[schemars(description = "Return branches containing this string")]
    pub search: Option<String>,
}

impl Routed for ListBranchesParams {
    const ROUTE_FIELDS: &'static [&'static str] = &["project_id"];
}

#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListUsersParams {
    #[schemars(description = "Exact username to look up")]
    pub username: Option<String>,
    #[schemars(description = "Search by name, username, or public email")]
    pub search: Option<String>,
    #[schemars(description = "Only active users")]
    pub active: Option<bool>,
    #[schemars(description = "Only blocked users")]
    pub blocked: Option<bool>,
    #[schemars(description = "Only external users")]
    pub external: Option<bool>,
    #[schemars(description = "Exclude internal users")]
    pub exclude_internal: Option<bool>,
    #[schemars(description = "Exclude external users")]
    pub exclude_external: Option<bool>,
    #[schemars(description = "Exclude project bot users")]
    pub without_project_bots: Option<bool>,
    #[schemars(description = "Only administrators (admin token required)")]
    pub admins: Option<bool>,
    #[schemars(description = "Filter by two-factor authentication: enabled or disabled")]
    pub two_factor: Option<String>,
    #[schemars(description = "Order by id, name, username, created_at, or updated_at")]
    pub order_by: Option<String>,
    #[schemars(description = "Sort order (asc or desc)")]
    pub sort: Option<String>,
    #[schemars(description = "Users created after this time (ISO 8601)")]
    pub created_after: Option<DateTime<Utc>>,
    #[schemars(description = "Users created before this time (ISO 8601)")]
    pub created_before: Option<DateTime<Utc>>,
}

impl Routed for ListUsersParams {
    const ROUTE_FIELDS: &'static [&'static str] = &[];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gitlab::{encode_query, outgoing};

    #[test]
    fn test_label_filters() {
        let params = ListLabelsParams {
            project_id: ProjectRef::Id(42),
            with_counts: Some(true),
            include_ancestor_groups: None,
            search: None,
            archived: Some(false),
        };
        let mut pairs = encode_query(&outgoing(&params).unwrap());
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("archived".to_string(), "false".to_string()),
                ("with_counts".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_user_filters_send_nothing() {
        let params = ListUsersParams::default();
        assert!(encode_query(&outgoing(&params).unwrap()).is_empty());
    }
}
