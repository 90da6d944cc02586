use approvebot_config::Config;

/// Comments posted by the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowComment {
    /// The urgent label was applied and nobody reacted yet.
    UrgentNotice,
    /// The pull request changed after its approval.
    UpdatedSinceApproval,
    /// The approval stood long enough but CI does not pass.
    CiFailure,
    /// The pull request was moved to ready to merge.
    ReadyToMerge,
}

impl WorkflowComment {
    /// Render the comment body.
    pub fn body(self, config: &Config) -> String {
        let hours = config.approval_window_hours;
        let done = &config.labels.approval_done;
        let ready = &config.labels.ready_to_merge;

        match self {
            Self::UrgentNotice => format!(
                "{} note this pull request has had the {} label applied",
                config.urgent_mention, config.labels.urgent
            ),
            Self::UpdatedSinceApproval => format!(
                "{hours} hours has passed since '{done}' was set, but as this PR has been \
                 updated in that time the label '{ready}' is not being automatically set.  \
                 Please review the updates and set the label manually."
            ),
            Self::CiFailure => format!(
                "{hours} hours has passed since '{done}' was set, but this PR has failing CI \
                 tests. Once the tests pass it will get moved to '{ready}' automatically, \
                 alternatively please review and set the label manually."
            ),
            Self::ReadyToMerge => "This pull request is ready to merge".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approvebot_config::LabelsConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> Config {
        let mut config = Config::from_env_no_version();
        config.labels = LabelsConfig::default();
        config.approval_window_hours = 24;
        config.urgent_mention = "@openssl/committers".into();
        config
    }

    #[test]
    fn test_bodies() {
        let config = config();

        assert_eq!(
            WorkflowComment::UrgentNotice.body(&config),
            "@openssl/committers note this pull request has had the urgent label applied"
        );
        assert_eq!(
            WorkflowComment::UpdatedSinceApproval.body(&config),
            "24 hours has passed since 'approval: done' was set, but as this PR has been \
             updated in that time the label 'approval: ready to merge' is not being \
             automatically set.  Please review the updates and set the label manually."
        );
        assert_eq!(
            WorkflowComment::CiFailure.body(&config),
            "24 hours has passed since 'approval: done' was set, but this PR has failing CI \
             tests. Once the tests pass it will get moved to 'approval: ready to merge' \
             automatically, alternatively please review and set the label manually."
        );
        assert_eq!(
            WorkflowComment::ReadyToMerge.body(&config),
            "This pull request is ready to merge"
        );
    }
}
