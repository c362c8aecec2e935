//! Type definitions for GitLab entities
//!
//! Structs mirroring the JSON returned by the GitLab REST API. Fields that
//! GitLab may omit are optional, and unknown fields are ignored, so newer
//! server versions keep decoding.

pub mod common;
pub mod health;
pub mod issue;
pub mod merge_request;
pub mod note;
pub mod project;
pub mod repository;

pub use common::{Milestone, User, UserState};
pub use health::HealthStatus;
pub use issue::{CreateIssueResponse, DeleteIssueResponse, Issue, IssueList, IssueState};
pub use merge_request::{
    CreateMergeRequestResponse, MergeRequest, MergeRequestList, MergeRequestState,
};
pub use note::{Note, NoteList};
pub use project::{Namespace, Project, ProjectList};
pub use repository::{BranchInfo, BranchList, CommitInfo, Label, LabelList, UserList};
