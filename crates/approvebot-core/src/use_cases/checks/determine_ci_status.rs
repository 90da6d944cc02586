use approvebot_ghapi_interface::types::GhCommitStatusState;
use approvebot_models::PullRequestHandle;
use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::warn;

use crate::{CoreContext, Result};

/// CI outcome for a commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiStatus {
    Success,
    /// Any other combined state, including pending and unrecognized ones.
    NotPassing(GhCommitStatusState),
    /// The status could not be fetched.
    Unknown,
}

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait DetermineCiStatusInterface: Interface {
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        commit_sha: &str,
    ) -> Result<CiStatus>;
}

#[derive(Component)]
#[shaku(interface = DetermineCiStatusInterface)]
pub(crate) struct DetermineCiStatus;

#[async_trait]
impl DetermineCiStatusInterface for DetermineCiStatus {
    #[tracing::instrument(skip(self, ctx), fields(pr_handle = %pr_handle), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        commit_sha: &str,
    ) -> Result<CiStatus> {
        match ctx
            .api_service
            .commit_statuses_combined(pr_handle.owner(), pr_handle.name(), commit_sha)
            .await
        {
            Ok(status) if status.state.is_success() => Ok(CiStatus::Success),
            Ok(status) => Ok(CiStatus::NotPassing(status.state)),
            Err(e) => {
                warn!(error = %e, "Could not fetch commit status");
                Ok(CiStatus::Unknown)
            }
        }
    }
}
