use std::fmt::Display;

/// Result of a pull request evaluation, printed as is to the operator.
#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationOutcome {
    AlreadyReadyToMerge,
    NotApproved,
    /// The approval is younger than the configured window.
    WaitingPeriod { hours: f64, window_hours: u64 },
    /// Someone commented or pushed after the approval.
    UpdatedSinceApproval { already_notified: bool },
    UnknownCiStatus,
    CiFailure { already_notified: bool },
    /// Every condition holds, labels are moved in commit mode.
    ReadyToMerge { hours: f64 },
}

impl EvaluationOutcome {
    /// Check if the pull request qualifies for promotion.
    pub fn is_candidate(&self) -> bool {
        matches!(self, Self::ReadyToMerge { .. })
    }
}

impl Display for EvaluationOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyReadyToMerge => {
                f.write_str("issue already has label approval: ready to merge")
            }
            Self::NotApproved => f.write_str("issue did not get label approval: done"),
            Self::WaitingPeriod {
                hours,
                window_hours,
            } => write!(
                f,
                "not yet {window_hours} hours since labelled approval:done hours: {hours:?}"
            ),
            Self::UpdatedSinceApproval {
                already_notified: true,
            } => f.write_str(
                "issue had comments after approval but we have already added a comment about this",
            ),
            Self::UpdatedSinceApproval {
                already_notified: false,
            } => f.write_str(
                "issue had comments after approval: done label was given, made a comment",
            ),
            Self::UnknownCiStatus => f.write_str("PR has unknown CI status"),
            Self::CiFailure {
                already_notified: true,
            } => f.write_str("issue has CI failure but we have already added a comment about this"),
            Self::CiFailure {
                already_notified: false,
            } => f.write_str("PR has CI failure, made a comment"),
            Self::ReadyToMerge { hours } => write!(
                f,
                "this issue was candidate to move to approval: ready to merge hours: {hours:?}"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_display_hours() {
        assert_eq!(
            EvaluationOutcome::WaitingPeriod {
                hours: 10.5,
                window_hours: 24,
            }
            .to_string(),
            "not yet 24 hours since labelled approval:done hours: 10.5"
        );
        assert_eq!(
            EvaluationOutcome::WaitingPeriod {
                hours: 3.0,
                window_hours: 12,
            }
            .to_string(),
            "not yet 12 hours since labelled approval:done hours: 3.0"
        );
        assert_eq!(
            EvaluationOutcome::ReadyToMerge { hours: 30.0 }.to_string(),
            "this issue was candidate to move to approval: ready to merge hours: 30.0"
        );
    }
}
