use approvebot_models::PullRequestHandle;
use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use crate::{
    use_cases::comments::{PostWorkflowCommentInterface, WorkflowComment},
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait PromotePullRequestInterface: Interface {
    /// Swap the approval label for the ready to merge label, then comment.
    ///
    /// Nothing is written outside commit mode. The first failing write
    /// aborts the remaining ones. Returns `true` when the labels were moved.
    async fn run<'a>(&self, ctx: &CoreContext<'a>, pr_handle: &PullRequestHandle)
        -> Result<bool>;
}

#[derive(Component)]
#[shaku(interface = PromotePullRequestInterface)]
pub(crate) struct PromotePullRequest;

#[async_trait]
impl PromotePullRequestInterface for PromotePullRequest {
    #[tracing::instrument(skip(self, ctx), fields(pr_handle = %pr_handle), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
    ) -> Result<bool> {
        let labels = &ctx.config.labels;

        if !ctx.config.commit {
            info!("Dry run, set COMMIT to actually change the labels");
            return Ok(false);
        }

        info!(
            from = %labels.approval_done,
            to = %labels.ready_to_merge,
            "Moving pull request labels"
        );

        ctx.api_service
            .issue_labels_remove(
                pr_handle.owner(),
                pr_handle.name(),
                pr_handle.number(),
                &labels.approval_done,
            )
            .await?;
        ctx.api_service
            .issue_labels_add(
                pr_handle.owner(),
                pr_handle.name(),
                pr_handle.number(),
                &[labels.ready_to_merge.clone()],
            )
            .await?;

        let post_comment: &dyn PostWorkflowCommentInterface = ctx.core_module.resolve_ref();
        post_comment
            .run(ctx, pr_handle, WorkflowComment::ReadyToMerge)
            .await?;

        Ok(true)
    }
}
