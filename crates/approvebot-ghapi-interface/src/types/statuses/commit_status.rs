use serde::{Deserialize, Serialize};
use smart_default::SmartDefault;

/// GitHub combined commit status.
///
/// Only the combined state is read, individual statuses are ignored.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Default)]
pub struct GhCommitStatus {
    pub state: GhCommitStatusState,
}

/// GitHub commit status state
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq, Clone, Copy, SmartDefault)]
#[serde(rename_all = "snake_case")]
pub enum GhCommitStatusState {
    /// Error.
    Error,
    /// Failure.
    Failure,
    /// Pending.
    #[default]
    Pending,
    /// Success.
    Success,
    /// Unrecognized state, never considered passing.
    #[serde(other)]
    Unknown,
}

impl GhCommitStatusState {
    /// Convert status state to static str.
    pub fn to_str(self) -> &'static str {
        self.into()
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }
}

impl From<GhCommitStatusState> for &'static str {
    fn from(status_state: GhCommitStatusState) -> Self {
        match status_state {
            GhCommitStatusState::Error => "error",
            GhCommitStatusState::Failure => "failure",
            GhCommitStatusState::Pending => "pending",
            GhCommitStatusState::Success => "success",
            GhCommitStatusState::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialize_combined_status() {
        let status: GhCommitStatus = serde_json::from_str(
            r#"{
                "state": "failure",
                "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
                "total_count": 1,
                "statuses": [
                    {
                        "state": "failure",
                        "context": "continuous-integration/travis-ci",
                        "created_at": "2012-07-20T01:19:13Z",
                        "updated_at": "2012-07-20T01:19:13Z"
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(status.state, GhCommitStatusState::Failure);
        assert_eq!(status.state.to_str(), "failure");
    }

    #[test]
    fn test_unexpected_state_is_not_success() {
        let status: GhCommitStatus =
            serde_json::from_str(r#"{"state": "exploded", "statuses": []}"#).unwrap();

        assert_eq!(status.state, GhCommitStatusState::Unknown);
        assert!(!status.state.is_success());
    }
}
