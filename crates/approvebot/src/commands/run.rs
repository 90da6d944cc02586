use approvebot_core::use_cases::pulls::{
    EvaluatePullRequestInterface, ListCandidatePullRequestsInterface,
};
use async_trait::async_trait;
use clap::Parser;
use shaku::HasComponent;
use time::OffsetDateTime;
use tracing::error;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Evaluate every open pull request carrying the approval label
#[derive(Parser)]
pub(crate) struct RunCommand {
    /// Apply label changes and post comments
    #[arg(long)]
    commit: bool,
}

#[async_trait]
impl Command for RunCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let ctx = ctx.with_commit_flag(self.commit);
        let repository_path = ctx.repository_path()?;
        let core_ctx = ctx.as_core_context();

        let list_candidates: &dyn ListCandidatePullRequestsInterface =
            ctx.core_module.resolve_ref();
        let candidates = match list_candidates.run(&core_ctx, &repository_path).await {
            Ok(candidates) => candidates,
            Err(e) => {
                error!(
                    repository_path = %repository_path,
                    error = %e,
                    "Could not list pull requests"
                );
                writeln!(ctx.writer.write().await, "failed {}", e)?;
                vec![]
            }
        };

        writeln!(
            ctx.writer.write().await,
            "There were {} open PRs with approval:done",
            candidates.len()
        )?;

        let evaluate: &dyn EvaluatePullRequestInterface = ctx.core_module.resolve_ref();
        for pr_handle in candidates {
            let outcome = match evaluate
                .run(&core_ctx, &pr_handle, OffsetDateTime::now_utc())
                .await
            {
                Ok(outcome) => outcome.to_string(),
                Err(e) => {
                    error!(pr_handle = %pr_handle, error = %e, "Could not evaluate pull request");
                    e.to_string()
                }
            };

            writeln!(ctx.writer.write().await, "{} {}", pr_handle.number(), outcome)?;
        }

        Ok(())
    }
}
