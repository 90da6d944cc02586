use approvebot_models::{PullRequestHandle, RepositoryPath};
use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::debug;

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListCandidatePullRequestsInterface: Interface {
    /// List open pull requests currently carrying the approval label.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
    ) -> Result<Vec<PullRequestHandle>>;
}

#[derive(Component)]
#[shaku(interface = ListCandidatePullRequestsInterface)]
pub(crate) struct ListCandidatePullRequests;

#[async_trait]
impl ListCandidatePullRequestsInterface for ListCandidatePullRequests {
    #[tracing::instrument(skip(self, ctx), fields(repository_path = %repository_path))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        repository_path: &RepositoryPath,
    ) -> Result<Vec<PullRequestHandle>> {
        let pulls = ctx
            .api_service
            .pulls_list_open(repository_path.owner(), repository_path.name())
            .await?;
        debug!(count = pulls.len(), "Open pull requests fetched");

        Ok(pulls
            .into_iter()
            .filter(|pr| pr.has_label(&ctx.config.labels.approval_done))
            .map(|pr| PullRequestHandle::new(repository_path.clone(), pr.number))
            .collect())
    }
}
