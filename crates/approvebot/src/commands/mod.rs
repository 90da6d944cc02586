//! Commands.

use std::{io::Write, sync::Arc};

use approvebot_config::Config;
use approvebot_core::{CoreContext, CoreModule};
use approvebot_ghapi_interface::ApiService;
use approvebot_models::RepositoryPath;
use async_trait::async_trait;
use clap::Subcommand;
use tokio::sync::RwLock;

use self::{check::CheckCommand, list::ListCommand, run::RunCommand};
use crate::Result;

mod check;
mod list;
mod run;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
        }
    }

    pub fn repository_path(&self) -> Result<RepositoryPath> {
        Ok(self.config.repository.parse()?)
    }

    /// The command line flag can only turn commit mode on.
    pub fn with_commit_flag(mut self, commit: bool) -> Self {
        self.config.commit |= commit;
        self
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Run(RunCommand),
    Check(CheckCommand),
    List(ListCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Run(sub) => sub.execute(ctx).await,
            Self::Check(sub) => sub.execute(ctx).await,
            Self::List(sub) => sub.execute(ctx).await,
        }
    }
}
