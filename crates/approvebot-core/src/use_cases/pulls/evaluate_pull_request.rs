use approvebot_models::{ApprovalState, PullRequestHandle};
use async_trait::async_trait;
use shaku::{Component, HasComponent, Interface};
use time::OffsetDateTime;
use tracing::{debug, error, info};

use super::{EvaluationOutcome, PromotePullRequestInterface};
use crate::{
    use_cases::{
        checks::{CiStatus, DetermineCiStatusInterface},
        comments::{PostWorkflowCommentInterface, WorkflowComment},
    },
    CoreContext, Result,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait EvaluatePullRequestInterface: Interface {
    /// Decide whether a pull request moves to ready to merge, and act on it.
    ///
    /// Only reading the timeline can fail, write errors are logged.
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        now: OffsetDateTime,
    ) -> Result<EvaluationOutcome>;
}

#[derive(Component)]
#[shaku(interface = EvaluatePullRequestInterface)]
pub(crate) struct EvaluatePullRequest;

#[async_trait]
impl EvaluatePullRequestInterface for EvaluatePullRequest {
    #[tracing::instrument(skip(self, ctx), fields(pr_handle = %pr_handle), ret)]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        pr_handle: &PullRequestHandle,
        now: OffsetDateTime,
    ) -> Result<EvaluationOutcome> {
        let labels = &ctx.config.labels;
        let events = ctx
            .api_service
            .issue_timeline_list(pr_handle.owner(), pr_handle.name(), pr_handle.number())
            .await?;
        let state = ApprovalState::from_events(&events, &ctx.config.automation_login);

        if state.is_label_active(&labels.ready_to_merge) {
            return Ok(EvaluationOutcome::AlreadyReadyToMerge);
        }

        let Some(approved_at) = state.label_applied_at(&labels.approval_done) else {
            return Ok(EvaluationOutcome::NotApproved);
        };

        if let Some(urgent_at) = state.label_applied_at(&labels.urgent) {
            if !state.has_human_update_after(urgent_at)
                && !state.has_automation_comment_after(urgent_at)
            {
                info!("Pull request is urgent and has had no comments, it needs a comment");
                Self::post_comment(ctx, pr_handle, WorkflowComment::UrgentNotice).await;
            }
        }

        let hours = (now - approved_at).as_seconds_f64() / 3600.0;
        debug!(
            %now,
            %approved_at,
            last_update = ?state.latest_human_update(),
            last_approving_review = ?state.latest_approving_review(),
            hours,
            "Approval age"
        );

        let window_hours = ctx.config.approval_window_hours;
        if hours < window_hours as f64 {
            return Ok(EvaluationOutcome::WaitingPeriod {
                hours,
                window_hours,
            });
        }

        let already_notified = state.has_automation_comment_after(approved_at);

        if state.has_human_update_after(approved_at) {
            if !already_notified {
                Self::post_comment(ctx, pr_handle, WorkflowComment::UpdatedSinceApproval).await;
            }

            return Ok(EvaluationOutcome::UpdatedSinceApproval { already_notified });
        }

        // Final check before changing the labels.
        let Some(head_sha) = state.head_sha.as_deref() else {
            return Ok(EvaluationOutcome::UnknownCiStatus);
        };
        let determine_ci_status: &dyn DetermineCiStatusInterface = ctx.core_module.resolve_ref();
        match determine_ci_status.run(ctx, pr_handle, head_sha).await? {
            CiStatus::Success => (),
            CiStatus::Unknown => return Ok(EvaluationOutcome::UnknownCiStatus),
            CiStatus::NotPassing(ci_state) => {
                debug!(ci_state = ci_state.to_str(), "CI is not passing");
                if !already_notified {
                    Self::post_comment(ctx, pr_handle, WorkflowComment::CiFailure).await;
                }

                return Ok(EvaluationOutcome::CiFailure { already_notified });
            }
        }

        let promote: &dyn PromotePullRequestInterface = ctx.core_module.resolve_ref();
        if let Err(e) = promote.run(ctx, pr_handle).await {
            error!(error = %e, "Could not move pull request to ready to merge");
        }

        Ok(EvaluationOutcome::ReadyToMerge { hours })
    }
}

impl EvaluatePullRequest {
    async fn post_comment(
        ctx: &CoreContext<'_>,
        pr_handle: &PullRequestHandle,
        comment: WorkflowComment,
    ) {
        let post_comment: &dyn PostWorkflowCommentInterface = ctx.core_module.resolve_ref();
        if let Err(e) = post_comment.run(ctx, pr_handle, comment).await {
            error!(error = %e, ?comment, "Could not add comment");
        }
    }
}
