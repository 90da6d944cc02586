mod commit_status;

pub use commit_status::{GhCommitStatus, GhCommitStatusState};
