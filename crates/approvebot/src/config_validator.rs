//! Validation utilities.

use std::fmt::Write;

use approvebot_config::Config;
use approvebot_models::RepositoryPath;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        write!(error, "  - Missing env. var.: {}", name).unwrap();
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, value: &str) {
        error.push('\n');
        write!(error, "  - Invalid env. var.: {} ('{}')", name, value).unwrap();
    }

    let mut error = String::new();

    // Check API configuration
    if config.api.github.token.is_empty() {
        _missing(&mut error, "BOT_API_GITHUB_TOKEN");
    }
    if config.api.github.root_url.is_empty() {
        _missing(&mut error, "BOT_API_GITHUB_ROOT_URL");
    }

    // Check target repository
    if config.repository.parse::<RepositoryPath>().is_err() {
        _invalid(&mut error, "BOT_REPOSITORY", &config.repository);
    }

    // Check workflow configuration
    if config.labels.approval_done.is_empty() {
        _missing(&mut error, "BOT_LABEL_APPROVAL_DONE");
    }
    if config.labels.ready_to_merge.is_empty() {
        _missing(&mut error, "BOT_LABEL_READY_TO_MERGE");
    }
    if config.automation_login.is_empty() {
        _missing(&mut error, "BOT_AUTOMATION_LOGIN");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
