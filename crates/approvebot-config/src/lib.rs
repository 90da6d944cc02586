//! Config module.

mod labels;

use std::env;

pub use labels::LabelsConfig;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API personal token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target repository path (e.g. `openssl/openssl`).
    pub repository: String,
    /// API options.
    pub api: ApiConfig,
    /// Workflow label names.
    pub labels: LabelsConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Verbose timeline tracing.
    pub debug: bool,
    /// Perform remote writes instead of only reporting them.
    pub commit: bool,
    /// Substring identifying the automation account in actor logins.
    pub automation_login: String,
    /// Mention used in the urgency notice.
    pub urgent_mention: String,
    /// Hours an approval must stand before promotion.
    pub approval_window_hours: u64,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            repository: env_to_str("BOT_REPOSITORY", "openssl/openssl"),
            api: ApiConfig {
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("BOT_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str("BOT_API_GITHUB_ROOT_URL", "https://api.github.com"),
                    token: env_to_str("BOT_API_GITHUB_TOKEN", &env_to_str("GITHUB_TOKEN", "")),
                },
            },
            labels: LabelsConfig {
                approval_done: env_to_str("BOT_LABEL_APPROVAL_DONE", labels::APPROVAL_DONE),
                ready_to_merge: env_to_str("BOT_LABEL_READY_TO_MERGE", labels::READY_TO_MERGE),
                urgent: env_to_str("BOT_LABEL_URGENT", labels::URGENT),
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            debug: env_to_bool("BOT_DEBUG", env_to_bool("DEBUG", false)),
            commit: env_to_bool("BOT_COMMIT", env_to_bool("COMMIT", false)),
            automation_login: env_to_str("BOT_AUTOMATION_LOGIN", "openssl-machine"),
            urgent_mention: env_to_str("BOT_URGENT_MENTION", "@openssl/committers"),
            approval_window_hours: env_to_u64("BOT_APPROVAL_WINDOW_HOURS", 24),
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| parse_bool(&e)).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

fn parse_bool(value: &str) -> bool {
    matches!(
        &value.trim().to_lowercase()[..],
        "true" | "1" | "yes" | "on"
    )
}
