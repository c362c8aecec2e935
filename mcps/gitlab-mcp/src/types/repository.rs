//! Labels, branches, commits, and user listings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::User;

/// A project label
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Label {
    #[serde(default)]
    pub id: Option<u64>,

    /// The key label validation matches against
    pub name: String,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub text_color: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub description_html: Option<String>,

    #[serde(default)]
    pub open_issues_count: Option<u32>,

    #[serde(default)]
    pub closed_issues_count: Option<u32>,

    #[serde(default)]
    pub open_merge_requests_count: Option<u32>,

    #[serde(default)]
    pub subscribed: Option<bool>,

    #[serde(default)]
    pub priority: Option<i32>,

    #[serde(default)]
    pub is_project_label: Option<bool>,

    #[serde(default)]
    pub archived: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelList {
    pub labels: Vec<Label>,
}

/// Head commit of a branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    pub id: String,
    pub short_id: String,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub message: Option<String>,

    #[serde(default)]
    pub parent_ids: Vec<String>,

    #[serde(default)]
    pub author_name: Option<String>,

    #[serde(default)]
    pub author_email: Option<String>,

    #[serde(default)]
    pub authored_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub committer_name: Option<String>,

    #[serde(default)]
    pub committer_email: Option<String>,

    #[serde(default)]
    pub committed_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Git trailers, passed through as-is
    #[serde(default)]
    pub trailers: Option<Value>,

    #[serde(default)]
    pub extended_trailers: Option<Value>,

    #[serde(default)]
    pub web_url: Option<String>,
}

/// A repository branch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchInfo {
    pub name: String,

    #[serde(default)]
    pub merged: Option<bool>,

    #[serde(default)]
    pub protected: Option<bool>,

    #[serde(default)]
    pub default: Option<bool>,

    #[serde(default)]
    pub developers_can_push: Option<bool>,

    #[serde(default)]
    pub developers_can_merge: Option<bool>,

    #[serde(default)]
    pub can_push: Option<bool>,

    #[serde(default)]
    pub web_url: Option<String>,

    #[serde(default)]
    pub commit: Option<CommitInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BranchList {
    pub branches: Vec<BranchInfo>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserList {
    pub users: Vec<User>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_branch_with_commit() {
        let branch: BranchInfo = serde_json::from_value(json!({
            "name": "main",
            "merged": false,
            "protected": true,
            "default": true,
            "commit": {
                "id": "7b5c3cc8be40ee161ae89a06bba6229da1032a0c",
                "short_id": "7b5c3cc",
                "title": "add projects API",
                "parent_ids": ["4ad91d3c1144c406e50c7b33bae684bd6837faf8"],
                "committed_date": "2012-06-28T03:44:20-07:00",
                "trailers": {}
            }
        }))
        .unwrap();

        let commit = branch.commit.unwrap();
        assert_eq!(commit.short_id, "7b5c3cc");
        assert_eq!(
            commit.committed_date.unwrap().to_rfc3339(),
            "2012-06-28T10:44:20+00:00"
        );
        assert_eq!(branch.default, Some(true));
    }

    #[test]
    fn test_label_only_needs_a_name() {
        let label: Label = serde_json::from_value(json!({ "name": "bug" })).unwrap();
        assert_eq!(label.name, "bug");
        assert!(label.color.is_none());
    }
}
