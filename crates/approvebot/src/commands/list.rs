use approvebot_core::use_cases::pulls::ListCandidatePullRequestsInterface;
use async_trait::async_trait;
use clap::Parser;
use shaku::HasComponent;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// List open pull requests carrying the approval label
#[derive(Parser)]
pub(crate) struct ListCommand;

#[async_trait]
impl Command for ListCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let repository_path = ctx.repository_path()?;
        let list_candidates: &dyn ListCandidatePullRequestsInterface =
            ctx.core_module.resolve_ref();
        let candidates = list_candidates
            .run(&ctx.as_core_context(), &repository_path)
            .await?;

        if candidates.is_empty() {
            writeln!(ctx.writer.write().await, "No pull request to evaluate.")?;
        } else {
            for pr_handle in candidates {
                writeln!(ctx.writer.write().await, "{}", pr_handle.number())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use approvebot_ghapi_interface::types::GhPullRequest;
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn run() -> Result<(), Box<dyn Error>> {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_pulls_list_open()
            .once()
            .return_once(|_, _| {
                Ok(vec![
                    GhPullRequest {
                        number: 12,
                        labels: vec!["approval: done".into()],
                        ..Default::default()
                    },
                    GhPullRequest {
                        number: 13,
                        ..Default::default()
                    },
                    GhPullRequest {
                        number: 14,
                        labels: vec!["approval: done".into(), "urgent".into()],
                        ..Default::default()
                    },
                ])
            });

        assert_eq!(test_command(ctx, &["list"]).await, "12\n14\n");

        Ok(())
    }

    #[tokio::test]
    async fn run_empty() -> Result<(), Box<dyn Error>> {
        let mut ctx = CommandContextTest::new();
        ctx.api_service
            .expect_pulls_list_open()
            .once()
            .return_once(|_, _| Ok(vec![]));

        assert_eq!(
            test_command(ctx, &["list"]).await,
            "No pull request to evaluate.\n"
        );

        Ok(())
    }
}
