//! Domain models.

mod approval_state;
mod pull_request_handle;
mod repository_path;

pub use approval_state::ApprovalState;
pub use pull_request_handle::PullRequestHandle;
pub use repository_path::{RepositoryPath, RepositoryPathError};
