use serde::{Deserialize, Serialize};

use crate::types::GhLabel;

/// GitHub Pull request, as returned by the pulls listing.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct GhPullRequest {
    /// Number.
    pub number: u64,
    /// Labels.
    #[serde(default)]
    pub labels: Vec<GhLabel>,
}

impl GhPullRequest {
    /// Check if the pull request currently carries a label.
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name == name)
    }
}
