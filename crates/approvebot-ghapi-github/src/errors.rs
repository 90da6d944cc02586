use approvebot_ghapi_interface::ApiError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    /// GitHub replied with an error status or an error document.
    #[error("GitHub error (status {status}): {message}")]
    RemoteError { status: u16, message: String },

    #[error("Could not decode GitHub payload,\n  caused by: {source}")]
    DecodeError { source: serde_json::Error },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<serde_json::Error> for GitHubError {
    fn from(e: serde_json::Error) -> Self {
        GitHubError::DecodeError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::RemoteError { status, message } => ApiError::RemoteError {
                status: Some(status),
                message,
            },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
