use approvebot_models::PullRequestHandle;
use async_trait::async_trait;
use shaku::{Component, Interface};
use tracing::info;

use super::WorkflowComment;
use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait PostWorkflowCommentInterface: Interface {
    /// Post a workflow comment, only in commit mode.
    ///
    /// Returns `true` when the comment was actually posted.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        comment: WorkflowComment,
    ) -> Result<bool>;
}

#[derive(Component)]
#[shaku(interface = PostWorkflowCommentInterface)]
pub(crate) struct PostWorkflowComment;

#[async_trait]
impl PostWorkflowCommentInterface for PostWorkflowComment {
    #[tracing::instrument(skip(self, ctx), fields(pr_handle = %pr_handle), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        comment: WorkflowComment,
    ) -> Result<bool> {
        let body = comment.body(ctx.config);

        if !ctx.config.commit {
            info!(?comment, "Dry run, comment not posted");
            return Ok(false);
        }

        ctx.api_service
            .comments_post(pr_handle.owner(), pr_handle.name(), pr_handle.number(), &body)
            .await?;

        Ok(true)
    }
}
