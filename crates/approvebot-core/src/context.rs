use approvebot_config::Config;
use approvebot_ghapi_interface::ApiService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use approvebot_config::{Config, LabelsConfig};
    use approvebot_ghapi_interface::MockApiService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            let mut config = Config::from_env_no_version();
            // Keep tests independent from the caller environment.
            config.repository = "owner/name".into();
            config.commit = false;
            config.automation_login = "openssl-machine".into();
            config.urgent_mention = "@openssl/committers".into();
            config.approval_window_hours = 24;
            config.labels = LabelsConfig::default();

            Self {
                config,
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn with_commit(mut self) -> Self {
            self.config.commit = true;
            self
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
            }
        }
    }
}
