use std::sync::Arc;

use approvebot_config::Config;
use approvebot_core::CoreModule;
use approvebot_ghapi_github::GitHubApiService;
use approvebot_ghapi_interface::ApiService;
use clap::Parser;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            info!(
                repository = %config.repository,
                commit = config.commit,
                "Using GitHubApiService API driver"
            );
            let api_service: Box<dyn ApiService + Send + Sync + 'static> =
                Box::new(GitHubApiService::new(config.clone()));

            let ctx = CommandContext {
                config,
                api_service,
                core_module: CoreModule::builder().build(),
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
