use async_trait::async_trait;

use crate::{
    types::{GhCommitStatus, GhPullRequest, GhTimelineEvent},
    Result,
};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// List every open pull request of a repository, across all pages.
    async fn pulls_list_open(&self, owner: &str, name: &str) -> Result<Vec<GhPullRequest>>;
    /// List the whole event timeline of an issue, across all pages.
    async fn issue_timeline_list(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
    ) -> Result<Vec<GhTimelineEvent>>;
    /// Add labels for a target issue.
    async fn issue_labels_add(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        labels: &[String],
    ) -> Result<()>;
    /// Remove one label from a target issue.
    async fn issue_labels_remove(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        label: &str,
    ) -> Result<()>;
    /// Post a comment on a pull request.
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64>;
    /// Get the combined commit status of a git reference.
    async fn commit_statuses_combined(
        &self,
        owner: &str,
        name: &str,
        git_ref: &str,
    ) -> Result<GhCommitStatus>;
}
