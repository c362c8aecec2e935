//! Pre-flight label checks for mutations that attach labels
//!
//! GitLab silently creates any label it does not know when an issue or merge
//! request references it. Mutating tools call [`validate_labels`] first so a
//! typo is rejected instead of becoming a new label.

use std::collections::BTreeSet;

use serde_json::json;
use tracing::{debug, warn};

use super::client::GitLabClient;
use super::error::{GitLabError, GitLabResult};
use crate::params::ProjectRef;
use crate::types::Label;

/// Largest page GitLab serves
const LABELS_PER_PAGE: u32 = 100;

/// Check that every requested label already exists in `project`
///
/// An empty `requested` list succeeds without contacting GitLab. Errors
/// from fetching the label list propagate unchanged.
pub async fn validate_labels(
    client: &GitLabClient,
    project: &ProjectRef,
    requested: &[String],
) -> GitLabResult<()> {
    if requested.is_empty() {
        return Ok(());
    }

    let path = format!("projects/{}/labels", project.path_segment());
    let labels: Vec<Label> = client
        .get(&path, Some(&json!({ "per_page": LABELS_PER_PAGE })))
        .await?;

    let available: BTreeSet<String> = labels.into_iter().map(|l| l.name).collect();
    let unknown = unknown_labels(requested, &available);

    if unknown.is_empty() {
        debug!(project = %project, count = requested.len(), "labels validated");
        return Ok(());
    }

    warn!(project = %project, unknown = ?unknown, "rejecting unknown labels");
    Err(GitLabError::Validation {
        unknown,
        available: available.into_iter().collect(),
    })
}

/// Requested labels missing from `available`, in request order, without repeats
fn unknown_labels(requested: &[String], available: &BTreeSet<String>) -> Vec<String> {
    let mut unknown: Vec<String> = Vec::new();
    for label in requested {
        if !available.contains(label) && !unknown.contains(label) {
            unknown.push(label.clone());
        }
    }
    unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_unknown_labels_keep_request_order_without_repeats() {
        let available: BTreeSet<String> = names(&["bug", "feature"]).into_iter().collect();
        let unknown = unknown_labels(&names(&["zeta", "bug", "alpha", "zeta"]), &available);
        assert_eq!(unknown, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_all_known() {
        let available: BTreeSet<String> = names(&["bug"]).into_iter().collect();
        assert!(unknown_labels(&names(&["bug", "bug"]), &available).is_empty());
    }

    #[test]
    fn test_validation_message_lists_sorted_available() {
        let err = GitLabError::Validation {
            unknown: names(&["nonexistent"]),
            available: names(&["bug", "feature"]),
        };
        assert_eq!(
            err.to_string(),
            "unknown label(s): nonexistent. Available labels: bug, feature"
        );
    }
}
