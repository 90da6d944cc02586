use approvebot_core::use_cases::pulls::EvaluatePullRequestInterface;
use approvebot_models::PullRequestHandle;
use async_trait::async_trait;
use clap::Parser;
use shaku::HasComponent;
use time::OffsetDateTime;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Evaluate a single pull request
#[derive(Parser)]
pub(crate) struct CheckCommand {
    /// Pull request number
    number: u64,

    /// Apply label changes and post comments
    #[arg(long)]
    commit: bool,
}

#[async_trait]
impl Command for CheckCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let ctx = ctx.with_commit_flag(self.commit);
        let pr_handle = PullRequestHandle::new(ctx.repository_path()?, self.number);

        let evaluate: &dyn EvaluatePullRequestInterface = ctx.core_module.resolve_ref();
        let outcome = evaluate
            .run(&ctx.as_core_context(), &pr_handle, OffsetDateTime::now_utc())
            .await?;

        writeln!(ctx.writer.write().await, "{} {}", self.number, outcome)?;

        Ok(())
    }
}
